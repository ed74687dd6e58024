//! Browser binding of the identity provider.
//!
//! The provider only ships a JS SDK, so `js/identity.js` wraps the handful of
//! calls this page needs and this module adapts them to
//! [`common::auth::IdentityClient`].

use common::auth::IdentityClient;
use common::config::IdentityProviderConfig;
use common::error::AuthError;
use common::model::Principal;
use js_sys::Reflect;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(module = "/js/identity.js")]
extern "C" {
    #[wasm_bindgen(js_name = initIdentity)]
    fn init_identity(config_json: &str);

    /// Returns the provider's unsubscribe function.
    #[wasm_bindgen(js_name = onPrincipalChange)]
    fn on_principal_change(callback: &Closure<dyn FnMut(JsValue)>) -> js_sys::Function;

    #[wasm_bindgen(js_name = currentIdToken, catch)]
    async fn current_id_token() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signOutCurrent, catch)]
    async fn sign_out_current() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = signInWithGooglePopup, catch)]
    async fn sign_in_with_google_popup() -> Result<JsValue, JsValue>;
}

/// Handle on the provider SDK. Initialising twice reuses the first instance.
#[derive(Debug, Clone, Copy)]
pub struct FirebaseIdentity;

impl FirebaseIdentity {
    pub fn connect(config: &IdentityProviderConfig) -> Result<Self, serde_json::Error> {
        let json = serde_json::to_string(config)?;
        init_identity(&json);
        Ok(Self)
    }

    /// Opens the provider's interactive sign-in popup.
    pub async fn sign_in_with_popup(&self) -> Result<(), AuthError> {
        sign_in_with_google_popup()
            .await
            .map(|_| ())
            .map_err(|e| AuthError::Unreachable(js_error_message(&e)))
    }
}

impl IdentityClient for FirebaseIdentity {
    type Principals = UnboundedReceiverStream<Option<Principal>>;

    /// Each call registers its own listener. It is removed from the SDK, and
    /// the callback freed, once the returned stream is dropped.
    fn principal_changes(&self) -> Self::Principals {
        let (tx, rx) = mpsc::unbounded_channel();
        let watch = tx.clone();
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
            // Receiver gone means the page stopped listening.
            let _ = tx.send(principal_from_js(&user));
        });
        let unsubscribe = on_principal_change(&callback);
        spawn_local(async move {
            watch.closed().await;
            if let Err(e) = unsubscribe.call0(&JsValue::NULL) {
                log::warn!("could not detach principal listener: {}", js_error_message(&e));
            }
            drop(callback);
        });
        UnboundedReceiverStream::new(rx)
    }

    async fn get_credential(&self, _principal: &Principal) -> Result<String, AuthError> {
        let token = current_id_token()
            .await
            .map_err(|e| AuthError::Unreachable(js_error_message(&e)))?;
        if token.is_null() || token.is_undefined() {
            return Err(AuthError::NoPrincipal);
        }
        token
            .as_string()
            .ok_or_else(|| AuthError::InvalidSession("credential is not a string".to_string()))
    }

    async fn sign_out(&self) {
        if let Err(e) = sign_out_current().await {
            log::warn!("sign-out was not confirmed by the provider: {}", js_error_message(&e));
        }
    }
}

fn principal_from_js(user: &JsValue) -> Option<Principal> {
    if user.is_null() || user.is_undefined() {
        return None;
    }
    let field = |name: &str| {
        Reflect::get(user, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_string())
    };
    match field("uid") {
        Some(uid) => Some(Principal {
            uid,
            email: field("email").unwrap_or_default(),
        }),
        None => {
            log::warn!("identity provider reported a user without uid");
            None
        }
    }
}

fn js_error_message(error: &JsValue) -> String {
    Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
