use urlencoding::encode;

/// GET — full activity catalog.
pub fn activities_url(base: &str) -> String {
    format!("{base}/activities")
}

/// POST — register `email` for `activity`.
///
/// The activity name travels as a path segment and the email as a query
/// value; both are percent-encoded.
pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        encode(activity),
        encode(email)
    )
}

/// DELETE — remove `email` from `activity`'s roster.
pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/participants?email={}",
        encode(activity),
        encode(email)
    )
}
