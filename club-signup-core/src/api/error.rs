/// Errors a request against the sign-up service can produce.
///
/// `Rejected` is the server saying no (non-2xx with an optional `{detail}`);
/// `Transport` is the request never completing; `Decode` is a 2xx body that
/// does not match the contract.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request rejected (HTTP {status}): {detail:?}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided detail for a rejected request, or `fallback` for a
    /// detail-less rejection. Transport and decode failures also map to the
    /// fallback: their internals are for the log, not the user.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True when the server answered at all (2xx or not), meaning the
    /// roster may have changed and is worth re-fetching.
    pub fn server_responded(&self) -> bool {
        matches!(self, ApiError::Rejected { .. } | ApiError::Decode(_))
    }
}
