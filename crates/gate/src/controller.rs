//! The `protect` gate.

use crate::{Notice, SessionContext};
use compact_str::CompactString;
use identity::{Role, SessionIdentity};

/// Why a page refused to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Denial {
    /// No session identity.
    #[error("You must be logged in.")]
    Unauthenticated,
    /// The identity's role is below the page's tier. A `Viewer` tier
    /// admits any assigned role, so it only denies accounts with none.
    #[error("{}", unauthorized_message(*required))]
    Unauthorized { required: Role },
}

fn unauthorized_message(required: Role) -> &'static str {
    match required {
        Role::Admin => "You must be an admin to access this page.",
        Role::Editor => "You must be an admin or editor.",
        Role::Viewer => "Your account has no role assigned.",
    }
}

/// Gates pages on authentication and role tier.
///
/// Denials redirect to the landing page.
#[derive(Debug, Clone)]
pub struct AccessController {
    landing: CompactString,
}

impl AccessController {
    /// Redirect denied sessions to `landing`.
    pub fn new(landing: impl Into<CompactString>) -> Self {
        Self {
            landing: landing.into(),
        }
    }

    /// Landing page slug.
    pub fn landing(&self) -> &str {
        &self.landing
    }

    /// Require a logged-in session, and a role of at least `required`
    /// when given. `Some(Role::Viewer)` requires an assigned role, while
    /// `None` admits role-less accounts too.
    ///
    /// On denial the session gets one navigation intent to the landing
    /// page carrying the denial message, and the page must stop. Calling
    /// this again before the redirect is performed returns the same
    /// denial without writing anything.
    pub fn protect(
        &self,
        ctx: &mut SessionContext,
        required: Option<Role>,
    ) -> Result<SessionIdentity, Denial> {
        let denial = match (ctx.identity(), required) {
            (None, _) => Denial::Unauthenticated,
            (Some(identity), Some(tier)) if !identity.meets(tier) => {
                Denial::Unauthorized { required: tier }
            }
            (Some(identity), _) => return Ok(identity.clone()),
        };

        if ctx.enter_redirect(&self.landing, Notice::error(denial.to_string())) {
            match ctx.identity() {
                Some(identity) => tracing::warn!(
                    "denied {} (role {}): {denial}",
                    identity.email(),
                    identity.role_label()
                ),
                None => tracing::warn!("denied anonymous session: {denial}"),
            }
        } else {
            tracing::debug!("redirect already in flight, denial not repeated");
        }
        Err(denial)
    }
}
