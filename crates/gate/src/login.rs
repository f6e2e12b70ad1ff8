//! The login form's transition from Anonymous to Authenticated.

use crate::{Notice, SessionContext};
use auth::{AuthError, Authenticator, FailureDisclosure};
use identity::SessionIdentity;

/// Submits login attempts on behalf of a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginForm {
    disclosure: FailureDisclosure,
}

impl LoginForm {
    /// A form reporting failures per `disclosure`.
    pub fn new(disclosure: FailureDisclosure) -> Self {
        Self { disclosure }
    }

    /// Log the session in.
    ///
    /// An already authenticated session is returned unchanged without
    /// consulting the authenticator. Otherwise exactly one notice is
    /// queued: success, or the failure message for the configured
    /// disclosure.
    pub fn submit<A: Authenticator + ?Sized>(
        &self,
        ctx: &mut SessionContext,
        authenticator: &A,
        email: &str,
        presented_key: &str,
    ) -> Result<SessionIdentity, AuthError> {
        if let Some(identity) = ctx.identity() {
            return Ok(identity.clone());
        }

        match authenticator.login(email, presented_key) {
            Ok(identity) => {
                ctx.establish(identity.clone());
                ctx.notify(Notice::success("Login successful!"));
                Ok(identity)
            }
            Err(e) => {
                ctx.notify(Notice::error(e.user_message(self.disclosure)));
                Err(e)
            }
        }
    }
}
