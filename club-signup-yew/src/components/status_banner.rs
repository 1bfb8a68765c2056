use club_signup_core::StatusMessage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    /// The single transient notice. `None` renders nothing; a new message
    /// replaces the old one.
    pub status: Option<StatusMessage>,
}

/// Shared status surface for sign-up and unregister outcomes.
#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    match &props.status {
        Some(status) => {
            let modifier = format!("signup-status--{}", status.severity);
            html! {
                <div class={classes!("signup-status", modifier)} role="status">
                    {&status.text}
                </div>
            }
        }
        None => html! {},
    }
}
