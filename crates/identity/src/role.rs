//! Console roles, ordered by privilege.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role assigned to a console user.
///
/// Variants are declared in ascending privilege, so the derived `Ord`
/// agrees with [`Role::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read-only access to the public and member pages.
    Viewer,
    /// Prompt engineering, client data and the API test console.
    Editor,
    /// Everything, including user and client management.
    Admin,
}

impl Role {
    /// All roles in ascending privilege.
    pub const ALL: [Role; 3] = [Role::Viewer, Role::Editor, Role::Admin];

    /// Numeric privilege rank.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Viewer => 1,
            Self::Editor => 2,
            Self::Admin => 3,
        }
    }

    /// Whether this role is at least as privileged as `required`.
    pub const fn at_least(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    /// Lower-case name as stored in the credential document.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}', expected one of admin, editor, viewer")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewer" => Ok(Self::Viewer),
            "editor" => Ok(Self::Editor),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_owned())),
        }
    }
}
