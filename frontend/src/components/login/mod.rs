//! Sign-in page. Starts the provider's popup flow and forwards to the
//! landing page as soon as the provider reports a signed-in user.

use common::auth::IdentityClient;
use common::config::AppConfig;
use futures_util::StreamExt;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::browser::{alert, navigate};
use crate::identity::FirebaseIdentity;

pub enum Msg {
    SignIn,
    SignInFailed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoginPageProps {
    pub config: AppConfig,
}

pub struct LoginPage {
    identity: Option<FirebaseIdentity>,
    watching: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let identity = match FirebaseIdentity::connect(&ctx.props().config.identity) {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::error!("identity provider settings are invalid: {}", e);
                None
            }
        };
        Self {
            identity,
            watching: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SignIn => {
                if let Some(identity) = self.identity {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        if let Err(e) = identity.sign_in_with_popup().await {
                            link.send_message(Msg::SignInFailed(e.to_string()));
                        }
                    });
                }
                false
            }
            Msg::SignInFailed(reason) => {
                log::warn!("sign-in failed: {}", reason);
                alert("Sign-in failed, please try again");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="min-h-screen flex items-center justify-center">
                <div class="p-8 bg-white rounded shadow text-center space-y-4">
                    <h1 class="text-xl font-semibold">{"Store Market Mapping"}</h1>
                    <button
                        id="loginBtn"
                        class="px-4 py-2 bg-blue-600 text-white rounded"
                        disabled={self.identity.is_none()}
                        onclick={ctx.link().callback(|_| Msg::SignIn)}
                    >
                        {"Sign in with Google"}
                    </button>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.watching {
            self.watching = true;
            if let Some(identity) = self.identity {
                let landing = ctx.props().config.landing_path.clone();
                spawn_local(async move {
                    let mut events = identity.principal_changes();
                    while let Some(event) = events.next().await {
                        if event.is_some() {
                            navigate(&landing);
                            break;
                        }
                    }
                });
            }
        }
    }
}
