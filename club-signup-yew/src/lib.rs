//! # Club Signup Yew
//!
//! Yew front-end for the club sign-up service: renders the activity
//! catalog, registers participants by email, and removes them from
//! rosters. All business rules live on the server; this crate is the
//! rendering-and-event-wiring layer over its HTTP API.

pub mod api;
pub mod app;
pub mod components;
pub mod hooks;

// Re-exports for convenience
pub use api::ApiClient;
pub use app::App;
pub use components::{ActivityCard, ActivityList, SignupForm, StatusBanner};
pub use hooks::{use_activities, ActivitiesState};
