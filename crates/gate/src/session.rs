//! Per-client session state.

use compact_str::CompactString;
use identity::SessionIdentity;
use std::collections::BTreeMap;

/// Where a session stands with respect to page access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    /// No identity.
    Anonymous,
    /// Logged in.
    Authenticated,
    /// A denial redirect waits for the next render. The identity, if
    /// any, is kept.
    RedirectPending,
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Success,
}

/// A message shown to the user on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: CompactString,
}

impl Notice {
    /// An error notice.
    pub fn error(text: impl Into<CompactString>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    /// A success notice.
    pub fn success(text: impl Into<CompactString>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }
}

/// Navigation intent: render `target` next, regardless of the page the
/// client asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Slug of the page to force.
    pub target: CompactString,
    /// Message to show once the target renders.
    pub message: Option<Notice>,
}

/// Everything scoped to one client session.
///
/// Created empty, filled by login, wiped in full by logout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    identity: Option<SessionIdentity>,
    pending_redirect: Option<Redirect>,
    redirect_in_flight: bool,
    notices: Vec<Notice>,
    values: BTreeMap<CompactString, String>,
}

impl SessionContext {
    /// A fresh anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> AccessState {
        if self.redirect_in_flight {
            AccessState::RedirectPending
        } else if self.identity.is_some() {
            AccessState::Authenticated
        } else {
            AccessState::Anonymous
        }
    }

    /// The logged-in identity.
    pub fn identity(&self) -> Option<&SessionIdentity> {
        self.identity.as_ref()
    }

    /// The navigation intent waiting for the next render.
    pub fn pending_redirect(&self) -> Option<&Redirect> {
        self.pending_redirect.as_ref()
    }

    /// Whether a denial redirect has been issued and not yet performed.
    pub fn redirect_in_flight(&self) -> bool {
        self.redirect_in_flight
    }

    /// Notices queued for display.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain queued notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Queue a notice.
    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Session-scoped page value.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Store a session-scoped page value. Returns the previous one.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Remove a session-scoped page value.
    pub fn remove_value(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Wipe everything: identity, intents, notices and values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Anonymous to Authenticated.
    ///
    /// Any intent written while anonymous is dropped with its message and
    /// the in-flight guard is released: a login-required denial no longer
    /// applies once there is an identity.
    pub(crate) fn establish(&mut self, identity: SessionIdentity) {
        if self.identity.is_none() {
            self.pending_redirect = None;
            self.redirect_in_flight = false;
        }
        self.identity = Some(identity);
    }

    /// Write a denial redirect. Returns `false`, changing nothing, when
    /// one is already in flight.
    pub(crate) fn enter_redirect(&mut self, target: &str, message: Notice) -> bool {
        if self.redirect_in_flight {
            return false;
        }
        self.redirect_in_flight = true;
        self.pending_redirect = Some(Redirect {
            target: target.into(),
            message: Some(message),
        });
        true
    }

    /// Write a plain navigation intent (no message, no in-flight guard).
    pub(crate) fn force_page(&mut self, target: &str) {
        self.pending_redirect = Some(Redirect {
            target: target.into(),
            message: None,
        });
    }

    /// Read and clear the navigation intent. Its message moves to the
    /// notice queue and the in-flight guard is released.
    pub(crate) fn consume_redirect(&mut self) -> Option<Redirect> {
        self.redirect_in_flight = false;
        let redirect = self.pending_redirect.take()?;
        if let Some(message) = redirect.message.clone() {
            self.notices.push(message);
        }
        Some(redirect)
    }
}
