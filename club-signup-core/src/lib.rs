//! # Club Signup Core
//!
//! Domain model and API contract for the club sign-up UI. No browser
//! dependency — everything in here is natively testable.

pub mod api;
pub mod domain;

pub use api::{ApiError, Confirmation, Rejection};
pub use domain::{
    Activity, ActivityCatalog, Severity, StatusMessage, SIGNUP_STATUS_MS, UNREGISTER_STATUS_MS,
};
