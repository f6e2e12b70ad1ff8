//! Page access for the ChatTGP console.
//!
//! Everything a client session knows lives in one [`SessionContext`]
//! that is passed to every call here; there is no global state. The
//! console renders in cycles and a cycle may evaluate the same checks
//! more than once, so the context behaves as a small state machine:
//!
//! ```text
//!  Anonymous ──login──▶ Authenticated ──logout──▶ Anonymous
//!      │                     │
//!      │ protected page      │ page above the role's tier
//!      ▼                     ▼
//!  RedirectPending ──next render──▶ (previous state, on the landing page)
//! ```
//!
//! A denial writes one navigation intent and one message; repeating the
//! denial before the next render changes nothing. The next
//! [`Navigator::render`] consumes the intent exactly once. Logging in
//! while a login-required redirect is pending drops it, so the session
//! goes straight to Authenticated.

pub use controller::{AccessController, Denial};
pub use login::LoginForm;
pub use nav::{MenuSection, Navigator, Render};
pub use page::{Access, Catalog, CatalogError, HOME, PageSpec, Section};
pub use session::{AccessState, Notice, NoticeLevel, Redirect, SessionContext};

mod controller;
mod login;
mod nav;
mod page;
mod session;
