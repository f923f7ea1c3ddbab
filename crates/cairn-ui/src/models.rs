//! Shared view models used across the app shell and components.

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational notice.
    Info,
    /// Successful operation.
    Success,
    /// Failed operation.
    Error,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier used for dismissal.
    pub id: u64,
    /// Human-readable message body.
    pub message: String,
    /// Severity of the toast.
    pub kind: ToastKind,
}
