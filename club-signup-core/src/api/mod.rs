//! Wire contract for the sign-up service: endpoint URLs, response shapes,
//! and the error type every request funnels into.

pub mod error;
pub mod response;
pub mod routes;

pub use error::ApiError;
pub use response::{Confirmation, Rejection};
pub use routes::{activities_url, signup_url, unregister_url};
