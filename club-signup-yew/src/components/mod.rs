//! UI components for the sign-up page

mod activities_view;
mod activity_card;
mod activity_list;
mod signup_form;
mod status_banner;

pub use activities_view::{ActivitiesView, ActivitiesViewProps, LOAD_FAILURE_NOTICE};
pub use activity_card::{ActivityCard, ActivityCardProps};
pub use activity_list::{ActivityList, ActivityListProps};
pub use signup_form::{SignupForm, SignupFormProps};
pub use status_banner::{StatusBanner, StatusBannerProps};
