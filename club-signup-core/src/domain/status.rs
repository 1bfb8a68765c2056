use std::fmt;

/// How long a sign-up outcome stays visible (milliseconds).
pub const SIGNUP_STATUS_MS: u32 = 5_000;

/// How long an unregister outcome stays visible (milliseconds).
pub const UNREGISTER_STATUS_MS: u32 = 4_000;

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Transient notice shown after a user-triggered action.
///
/// At most one is visible at a time; a new message replaces the old one.
/// `hide_after_ms` is the auto-dismiss delay for the action that produced
/// the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    pub hide_after_ms: u32,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>, hide_after_ms: u32) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
            hide_after_ms,
        }
    }

    pub fn error(text: impl Into<String>, hide_after_ms: u32) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
            hide_after_ms,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
