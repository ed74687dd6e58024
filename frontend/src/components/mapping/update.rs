//! Message handling for the mapping page.
//!
//! Every network call runs in `spawn_local` and reports back through a
//! message; the handlers in `common::mutations` decide what the user is told
//! and when the table is re-read, this module carries that out.

use common::auth::sign_out_and_redirect;
use common::backend::MappingBackend;
use common::mutations::{self, MutationOutcome, NoticeKind, Refresh};
use common::render::{mappings_table, selection_row, LoadState};
use futures_util::future::join;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser::{alert, confirm, local_offset_at, navigate};
use crate::identity::FirebaseIdentity;

use super::backend;
use super::messages::Msg;
use super::state::MappingPage;

pub fn update(component: &mut MappingPage, ctx: &Context<MappingPage>, msg: Msg) -> bool {
    let props = ctx.props();

    match msg {
        Msg::LoadReference => {
            let backend = backend(&props.auth, &props.config);
            let link = ctx.link().clone();
            spawn_local(async move {
                let (stores, markets) = join(backend.stores(), backend.markets()).await;
                let result = stores.and_then(|stores| markets.map(|markets| (stores, markets)));
                link.send_message(Msg::ReferenceLoaded(result));
            });
            false
        }
        Msg::ReferenceLoaded(Ok((stores, markets))) => {
            component.reference = LoadState::Loaded(selection_row(&stores, &markets));
            true
        }
        Msg::ReferenceLoaded(Err(e)) => {
            log::error!("loading stores and markets failed: {}", e);
            component.reference =
                LoadState::Failed(format!("Could not load stores and markets ({})", e));
            true
        }
        Msg::RefreshMappings => {
            let backend = backend(&props.auth, &props.config);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = backend.current_mappings().await;
                link.send_message(Msg::MappingsLoaded(result));
            });
            false
        }
        Msg::MappingsLoaded(Ok(mappings)) => {
            component.table = LoadState::Loaded(mappings_table(
                &mappings,
                props.auth.role,
                local_offset_at,
            ));
            true
        }
        Msg::MappingsLoaded(Err(e)) => {
            log::error!("loading current mappings failed: {}", e);
            component.table = LoadState::Failed(format!("Could not load mappings ({})", e));
            true
        }
        Msg::SelectMarket(market_id) => {
            component.selection.market_id = market_id;
            false
        }
        Msg::SelectStore(estation_name) => {
            component.selection.estation_name = estation_name;
            false
        }
        Msg::Save => {
            let backend = backend(&props.auth, &props.config);
            let selection = component.selection.clone();
            let delay = props.config.refresh_delay;
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = mutations::create_mapping(&backend, &selection, delay).await;
                link.send_message(Msg::MutationFinished(outcome));
            });
            false
        }
        Msg::Delete(store_name) => {
            let backend = backend(&props.auth, &props.config);
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = mutations::delete_mapping(&backend, &store_name, confirm).await;
                link.send_message(Msg::MutationFinished(outcome));
            });
            false
        }
        Msg::MutationFinished(outcome) => {
            apply_outcome(ctx, outcome);
            false
        }
        Msg::SignOut => {
            let login_path = props.config.login_path.clone();
            match FirebaseIdentity::connect(&props.config.identity) {
                Ok(identity) => spawn_local(async move {
                    sign_out_and_redirect(&identity, &login_path, navigate).await;
                }),
                Err(e) => log::error!("identity provider settings are invalid: {}", e),
            }
            false
        }
    }
}

fn apply_outcome(ctx: &Context<MappingPage>, outcome: MutationOutcome) {
    if let Some(notice) = &outcome.notice {
        if notice.kind == NoticeKind::Error {
            log::warn!("{}", notice.message);
        }
        alert(&notice.message);
    }

    match outcome.refresh {
        Refresh::None => {}
        Refresh::Immediate => ctx.link().send_message(Msg::RefreshMappings),
        Refresh::After(delay) => {
            let link = ctx.link().clone();
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            spawn_local(async move {
                TimeoutFuture::new(millis).await;
                link.send_message(Msg::RefreshMappings);
            });
        }
    }
}
