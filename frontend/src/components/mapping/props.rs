//! Properties of the mapping page.

use common::config::AppConfig;
use common::model::AuthContext;
use yew::prelude::*;

/// The page is only mounted once the authentication gate has resolved, so
/// the identity is a plain value here rather than page-global state.
#[derive(Properties, PartialEq, Clone)]
pub struct MappingPageProps {
    /// Credential, email and advisory role of the signed-in user.
    pub auth: AuthContext,
    pub config: AppConfig,
}
