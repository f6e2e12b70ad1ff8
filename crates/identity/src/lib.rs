//! Identity types shared by the ChatTGP console.
//!
//! A user is identified by a normalized email address. The credential
//! document maps that email to a [`CredentialRecord`] carrying a [`Role`]
//! and a set of additive permission strings. A successful login turns the
//! record into a [`SessionIdentity`], which is what every protected page
//! reads.
//!
//! Every lookup and every insert goes through [`normalize_email`]. Using a
//! different normalization on either side makes authentication fail
//! silently, so there is exactly one.

pub use email::normalize_email;
pub use record::{CredentialRecord, CredentialTable};
pub use role::{ParseRoleError, Role};
pub use session::SessionIdentity;

mod email;
mod record;
mod role;
mod session;
