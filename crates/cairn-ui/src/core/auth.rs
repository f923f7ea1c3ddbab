//! Session primitives shared across the UI.
//!
//! # Design
//! - Keep session state as simple data so callers can store/clear it without side effects.
//! - Treat blank identities as signed-out at the call site.
//! - Leave header encoding to transport clients to keep core DOM-free.

/// Identity of the signed-in catalog user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    /// Urn identifying the user entity.
    pub urn: String,
    /// Display name shown in the shell.
    pub display_name: String,
}

impl SessionUser {
    /// Whether this identity is usable for attributed writes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.urn.trim().is_empty()
    }
}

/// Active session state for the UI.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    /// A user is signed in.
    SignedIn(SessionUser),
    /// Explicit anonymous access (read-only surfaces).
    #[default]
    Anonymous,
}

impl SessionState {
    /// The signed-in user, when one is present and usable.
    #[must_use]
    pub const fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::Anonymous => None,
        }
    }
}
