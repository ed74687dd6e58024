//! Root component. Picks the page from the current path and, for every page
//! but the login page, runs the authentication gate before mounting it.

use common::auth::AuthGate;
use common::config::AppConfig;
use common::model::AuthContext;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::browser::{current_path, navigate};
use crate::components::login::LoginPage;
use crate::components::mapping::MappingPage;
use crate::config::app_config;
use crate::identity::FirebaseIdentity;

pub enum Msg {
    Resolved(AuthContext),
}

enum Screen {
    Login(AppConfig),
    /// Gate still waiting for the provider.
    Checking(AppConfig),
    Ready(AppConfig, AuthContext),
    Broken(String),
}

pub struct App {
    screen: Screen,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = match app_config() {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return Self {
                    screen: Screen::Broken(format!("This page is misconfigured: {}", e)),
                };
            }
        };

        if current_path().starts_with(&config.login_path) {
            return Self {
                screen: Screen::Login(config),
            };
        }

        let identity = match FirebaseIdentity::connect(&config.identity) {
            Ok(identity) => identity,
            Err(e) => {
                log::error!("identity provider settings are invalid: {}", e);
                return Self {
                    screen: Screen::Broken("Sign-in is unavailable".to_string()),
                };
            }
        };

        let link = ctx.link().clone();
        let login_path = config.login_path.clone();
        spawn_local(async move {
            AuthGate::new(&identity, login_path)
                .run(navigate, |context| link.send_message(Msg::Resolved(context)))
                .await;
        });

        Self {
            screen: Screen::Checking(config),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Resolved(context) => {
                let screen = std::mem::replace(&mut self.screen, Screen::Broken(String::new()));
                self.screen = match screen {
                    Screen::Checking(config) => Screen::Ready(config, context),
                    other => other,
                };
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.screen {
            Screen::Login(config) => html! { <LoginPage config={config.clone()} /> },
            Screen::Checking(_) => html! {
                <div class="p-6 text-gray-500">{"Checking sign-in…"}</div>
            },
            Screen::Ready(config, auth) => html! {
                <MappingPage auth={auth.clone()} config={config.clone()} />
            },
            Screen::Broken(message) => html! {
                <div class="p-6 text-red-600">{ message.clone() }</div>
            },
        }
    }
}
