use common::error::ApiError;
use common::model::{Mapping, Market, Store};
use common::mutations::MutationOutcome;

pub enum Msg {
    LoadReference,
    ReferenceLoaded(Result<(Vec<Store>, Vec<Market>), ApiError>),
    RefreshMappings,
    MappingsLoaded(Result<Vec<Mapping>, ApiError>),
    SelectMarket(String),
    SelectStore(String),
    Save,
    Delete(String),
    MutationFinished(MutationOutcome),
    SignOut,
}
