pub mod activity;
pub mod status;

pub use activity::{Activity, ActivityCatalog};
pub use status::{Severity, StatusMessage, SIGNUP_STATUS_MS, UNREGISTER_STATUS_MS};
