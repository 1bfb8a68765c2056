use club_signup_core::api::ApiError;
use club_signup_core::domain::{StatusMessage, SIGNUP_STATUS_MS, UNREGISTER_STATUS_MS};
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{ActivitiesView, SignupForm, StatusBanner};
use crate::hooks::{use_activities, ActivitiesState};

const REJECTED_FALLBACK: &str = "An error occurred";
const SIGNUP_TRANSPORT_FALLBACK: &str = "Failed to sign up. Please try again.";
const UNREGISTER_TRANSPORT_FALLBACK: &str = "Failed to unregister. Please try again.";

/// Status for a sign-up outcome: server confirmation verbatim on success,
/// server detail (or fallback) on rejection, generic fallback otherwise.
fn signup_status(outcome: &Result<String, ApiError>) -> StatusMessage {
    match outcome {
        Ok(message) => StatusMessage::success(message.clone(), SIGNUP_STATUS_MS),
        Err(err @ ApiError::Rejected { .. }) => {
            StatusMessage::error(err.user_message(REJECTED_FALLBACK), SIGNUP_STATUS_MS)
        }
        Err(_) => StatusMessage::error(SIGNUP_TRANSPORT_FALLBACK, SIGNUP_STATUS_MS),
    }
}

/// Status for an unregister outcome. Same shape as sign-up, shorter delay.
fn unregister_status(outcome: &Result<String, ApiError>) -> StatusMessage {
    match outcome {
        Ok(message) => StatusMessage::success(message.clone(), UNREGISTER_STATUS_MS),
        Err(err @ ApiError::Rejected { .. }) => {
            StatusMessage::error(err.user_message(REJECTED_FALLBACK), UNREGISTER_STATUS_MS)
        }
        Err(_) => StatusMessage::error(UNREGISTER_TRANSPORT_FALLBACK, UNREGISTER_STATUS_MS),
    }
}

/// A successful sign-up clears the form for the next entry; any failure
/// leaves the fields in place for correction.
fn signup_clears_form(outcome: &Result<String, ApiError>) -> bool {
    outcome.is_ok()
}

/// Unregister resyncs whenever the server answered, success or not: the
/// roster may have changed by other means. A transport failure carries no
/// such signal and skips the re-fetch.
fn unregister_resyncs(outcome: &Result<String, ApiError>) -> bool {
    match outcome {
        Ok(_) => true,
        Err(err) => err.server_responded(),
    }
}

/// Show `message` and schedule its auto-hide. A later message's timer may
/// hide a superseding one early; worst case is an early hide, accepted.
fn show_status(handle: &UseStateHandle<Option<StatusMessage>>, message: StatusMessage) {
    let delay = message.hide_after_ms;
    handle.set(Some(message));

    let handle = handle.clone();
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        handle.set(None);
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let client = use_memo((), |_| ApiClient::new());
    let activities = use_activities(Rc::clone(&client));
    let status = use_state(|| None::<StatusMessage>);

    // Controlled form fields, owned here so success can clear them and
    // failure can leave them for correction
    let email = use_state(String::new);
    let selected_activity = use_state(String::new);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let on_activity_change = {
        let selected_activity = selected_activity.clone();
        Callback::from(move |value: String| selected_activity.set(value))
    };

    let on_signup = {
        let client = Rc::clone(&client);
        let email = email.clone();
        let selected_activity = selected_activity.clone();
        let status = status.clone();
        let refresh = activities.refresh.clone();

        Callback::from(move |_: ()| {
            let activity = (*selected_activity).clone();
            let address = (*email).clone();
            let client = Rc::clone(&client);
            let email = email.clone();
            let selected_activity = selected_activity.clone();
            let status = status.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                let outcome = client.sign_up(&activity, &address).await;
                if let Err(err) = &outcome {
                    log::error!("sign-up for {activity} failed: {err}");
                }

                let succeeded = outcome.is_ok();
                show_status(&status, signup_status(&outcome));

                if signup_clears_form(&outcome) {
                    email.set(String::new());
                    selected_activity.set(String::new());
                }

                if succeeded {
                    refresh.emit(());
                }
            });
        })
    };

    let on_unregister = {
        let client = Rc::clone(&client);
        let status = status.clone();
        let refresh = activities.refresh.clone();

        Callback::from(move |(activity, address): (String, String)| {
            let client = Rc::clone(&client);
            let status = status.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                let outcome = client.unregister(&activity, &address).await;
                if let Err(err) = &outcome {
                    log::error!("unregister of {address} from {activity} failed: {err}");
                }

                let resync = unregister_resyncs(&outcome);
                show_status(&status, unregister_status(&outcome));

                if resync {
                    refresh.emit(());
                }
            });
        })
    };

    let activity_names: Vec<String> = match &activities.state {
        ActivitiesState::Loaded(catalog) => catalog.keys().cloned().collect(),
        _ => Vec::new(),
    };

    html! {
        <div class="signup-app">
            <header class="signup-app__header">
                <h1>{"Club Activities"}</h1>
            </header>

            <StatusBanner status={(*status).clone()} />

            <ActivitiesView
                state={activities.state.clone()}
                on_unregister={on_unregister.clone()}
            />

            <section class="signup-app__form">
                <h3>{"Sign Up for an Activity"}</h3>
                <SignupForm
                    activity_names={activity_names}
                    email={(*email).clone()}
                    selected_activity={(*selected_activity).clone()}
                    on_email_change={on_email_change}
                    on_activity_change={on_activity_change}
                    on_submit={on_signup}
                />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use club_signup_core::Severity;

    #[test]
    fn signup_success_shows_server_message_verbatim() {
        let outcome = Ok("Signed up a@b.com for Chess Club".to_string());
        let status = signup_status(&outcome);
        assert_eq!(status.text, "Signed up a@b.com for Chess Club");
        assert_eq!(status.severity, Severity::Success);
        assert_eq!(status.hide_after_ms, 5_000);
    }

    #[test]
    fn signup_rejection_shows_server_detail() {
        let outcome = Err(ApiError::Rejected {
            status: 400,
            detail: Some("Activity full".to_string()),
        });
        let status = signup_status(&outcome);
        assert_eq!(status.text, "Activity full");
        assert!(status.is_error());
    }

    #[test]
    fn signup_rejection_without_detail_uses_generic_fallback() {
        let outcome = Err(ApiError::Rejected {
            status: 500,
            detail: None,
        });
        assert_eq!(signup_status(&outcome).text, "An error occurred");
    }

    #[test]
    fn signup_transport_failure_uses_signup_fallback() {
        let outcome = Err(ApiError::Transport("connection refused".to_string()));
        let status = signup_status(&outcome);
        assert_eq!(status.text, "Failed to sign up. Please try again.");
        assert!(status.is_error());
    }

    #[test]
    fn signup_success_clears_the_form() {
        assert!(signup_clears_form(&Ok(
            "Signed up a@b.com for Chess Club".to_string()
        )));
    }

    #[test]
    fn signup_failure_keeps_the_form_for_correction() {
        assert!(!signup_clears_form(&Err(ApiError::Rejected {
            status: 400,
            detail: Some("Activity full".to_string()),
        })));
        assert!(!signup_clears_form(&Err(ApiError::Transport(
            "offline".to_string()
        ))));
    }

    #[test]
    fn unregister_statuses_hide_after_four_seconds() {
        let ok = Ok("Removed a@b.com from Chess Club".to_string());
        assert_eq!(unregister_status(&ok).hide_after_ms, 4_000);

        let err = Err(ApiError::Transport("offline".to_string()));
        let status = unregister_status(&err);
        assert_eq!(status.hide_after_ms, 4_000);
        assert_eq!(status.text, "Failed to unregister. Please try again.");
    }

    #[test]
    fn unregister_resyncs_even_when_server_rejects() {
        assert!(unregister_resyncs(&Ok("Removed".to_string())));
        assert!(unregister_resyncs(&Err(ApiError::Rejected {
            status: 404,
            detail: Some("Participant not found".to_string()),
        })));
    }

    #[test]
    fn unregister_skips_resync_on_transport_failure() {
        assert!(!unregister_resyncs(&Err(ApiError::Transport(
            "offline".to_string()
        ))));
    }
}
