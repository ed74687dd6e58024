//! One-shot authentication gate.
//!
//! The gate waits for the identity provider's first verdict and either sends
//! the browser to the login surface or resolves an [`AuthContext`] and hands
//! it to the page. Both exits are terminal for the page load; later session
//! events are not the gate's concern.

use futures_util::StreamExt;

use crate::auth::IdentityClient;
use crate::auth::claims::resolve_role;
use crate::model::{AuthContext, Principal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Unresolved,
    /// No usable session; the browser was sent to the login path.
    Redirecting,
    Resolved(AuthContext),
}

impl GateState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GateState::Unresolved)
    }
}

pub struct AuthGate<'a, C: IdentityClient> {
    client: &'a C,
    login_path: String,
    state: GateState,
}

impl<'a, C: IdentityClient> AuthGate<'a, C> {
    pub fn new(client: &'a C, login_path: impl Into<String>) -> Self {
        Self {
            client,
            login_path: login_path.into(),
            state: GateState::Unresolved,
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Applies one provider event. Once the gate is terminal further events
    /// are ignored.
    pub async fn handle(&mut self, event: Option<Principal>) -> &GateState {
        if self.state.is_terminal() {
            return &self.state;
        }

        self.state = match event {
            None => {
                log::info!("no signed-in user, redirecting to {}", self.login_path);
                GateState::Redirecting
            }
            Some(principal) => match self.client.get_credential(&principal).await {
                Ok(credential) => {
                    let role = resolve_role(&credential);
                    log::info!("signed in as {} with role {}", principal.email, role);
                    GateState::Resolved(AuthContext {
                        principal,
                        credential,
                        role,
                    })
                }
                Err(e) => {
                    log::warn!("could not obtain a credential, redirecting to login: {}", e);
                    // A live provider session would send the login page
                    // straight back here.
                    self.client.sign_out().await;
                    GateState::Redirecting
                }
            },
        };
        &self.state
    }

    /// Drives the gate from the provider's session stream until it becomes
    /// terminal, then calls exactly one of `navigate` (with the login path)
    /// or `on_resolved`.
    ///
    /// If the stream ends before the first event nothing is called and the
    /// gate stays [`GateState::Unresolved`].
    pub async fn run<N, F>(mut self, navigate: N, on_resolved: F) -> GateState
    where
        N: FnOnce(&str),
        F: FnOnce(AuthContext),
    {
        let mut events = self.client.principal_changes();
        while let Some(event) = events.next().await {
            if self.handle(event).await.is_terminal() {
                break;
            }
        }
        // Releases the provider subscription before the page takes over.
        drop(events);

        match &self.state {
            GateState::Redirecting => navigate(&self.login_path),
            GateState::Resolved(context) => on_resolved(context.clone()),
            GateState::Unresolved => {
                log::warn!("identity provider closed its session stream before any event")
            }
        }
        self.state
    }
}

/// Clears the provider session and sends the browser to `login_path`.
pub async fn sign_out_and_redirect<C, N>(client: &C, login_path: &str, navigate: N)
where
    C: IdentityClient,
    N: FnOnce(&str),
{
    client.sign_out().await;
    navigate(login_path);
}
