//! Identity of the signed-in user and the context handed to the page once
//! the authentication gate has resolved it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Opaque provider identifier.
    pub uid: String,
    pub email: String,
}

/// Advisory role read from the credential's `role` claim.
///
/// Only used to decide which controls to render; the backend authorizes
/// every privileged call on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Viewer,
}

impl Role {
    /// Maps a raw claim value to a role. Anything but `admin` is a viewer.
    pub fn from_claim(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Viewer
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Viewer => f.write_str("viewer"),
        }
    }
}

/// Resolved identity published by the gate to the rest of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub principal: Principal,
    pub credential: String,
    pub role: Role,
}

impl AuthContext {
    pub fn email(&self) -> &str {
        &self.principal.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_claim_grants_admin() {
        assert_eq!(Role::from_claim("admin"), Role::Admin);
        assert_eq!(Role::from_claim("Admin "), Role::Admin);
        assert_eq!(Role::from_claim("editor"), Role::Viewer);
        assert_eq!(Role::from_claim(""), Role::Viewer);
    }
}
