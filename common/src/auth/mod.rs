//! Identity resolution: the provider contract, the claims reader and the
//! one-shot gate that runs before anything else on the page.

pub mod claims;
pub mod gate;

use futures_util::Stream;

use crate::error::AuthError;
use crate::model::Principal;

pub use claims::{CredentialClaims, resolve_role};
pub use gate::{AuthGate, GateState, sign_out_and_redirect};

/// Contract of the external identity provider.
///
/// Futures returned by implementations are not required to be `Send`: the
/// page runs on a single thread.
#[allow(async_fn_in_trait)]
pub trait IdentityClient {
    type Principals: Stream<Item = Option<Principal>> + Unpin;

    /// Session changes, starting with one event for the current state.
    /// Each call subscribes anew; the stream never ends on its own.
    fn principal_changes(&self) -> Self::Principals;

    /// Short-lived bearer credential for `principal`, refreshed by the
    /// provider when the cached one has expired.
    async fn get_credential(&self, principal: &Principal) -> Result<String, AuthError>;

    /// Clears the provider session. Completes even if the server side has
    /// not confirmed it yet.
    async fn sign_out(&self);
}
