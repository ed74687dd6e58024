//! Store-to-market mapping page: the create row, the current-mappings table
//! and the sign-out control.
//!
//! Follows the same split as the other pages: `update` holds the message
//! handling and the network calls, `view` the markup, `state` and `props`
//! the data.

use common::config::AppConfig;
use common::model::AuthContext;
use yew::prelude::*;

use crate::api::HttpMappingBackend;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MappingPageProps;
pub use state::MappingPage;

impl Component for MappingPage {
    type Message = Msg;
    type Properties = MappingPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MappingPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link()
                .send_message_batch(vec![Msg::LoadReference, Msg::RefreshMappings]);
        }
    }
}

fn backend(auth: &AuthContext, config: &AppConfig) -> HttpMappingBackend {
    HttpMappingBackend::new(auth, &config.api_base)
}
