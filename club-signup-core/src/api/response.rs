use serde::{Deserialize, Serialize};

/// Success body of the sign-up and unregister endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

/// Failure body of the sign-up and unregister endpoints.
///
/// The server usually sends `{detail}`, but the branch is decided by the
/// HTTP status alone, so a missing or unparseable detail is tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_decodes_message() {
        let body = r#"{"message": "Signed up a@b.com for Chess Club"}"#;
        let confirmation: Confirmation = serde_json::from_str(body).unwrap();
        assert_eq!(confirmation.message, "Signed up a@b.com for Chess Club");
    }

    #[test]
    fn rejection_decodes_detail() {
        let body = r#"{"detail": "Activity full"}"#;
        let rejection: Rejection = serde_json::from_str(body).unwrap();
        assert_eq!(rejection.detail.as_deref(), Some("Activity full"));
    }

    #[test]
    fn rejection_tolerates_missing_detail() {
        let rejection: Rejection = serde_json::from_str("{}").unwrap();
        assert!(rejection.detail.is_none());
    }
}
