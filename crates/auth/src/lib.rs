//! Authentication for the ChatTGP console.
//!
//! A user's key is not stored anywhere. It is the hex HMAC-SHA256 of the
//! normalized email keyed by the process-wide [`MasterKey`], handed to the
//! user out of band by [`issue_key`]. Logging in re-derives it and
//! compares in constant time, so the credential document only needs the
//! role and permission metadata.
//!
//! Rotating the master key invalidates every issued key at once.

pub use authenticator::{Authenticator, HmacAuthenticator};
pub use directory::{DirectoryError, UserDirectory};
pub use error::{AuthError, FailureDisclosure};
pub use key::{MasterKey, constant_time_eq, issue_key, verify_key};

mod authenticator;
mod directory;
mod error;
mod key;
