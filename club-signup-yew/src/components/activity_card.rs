use club_signup_core::Activity;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: AttrValue,
    pub activity: Activity,

    /// Emits the `(activity name, email)` pair of the entry whose remove
    /// control was activated. Identity travels as structured data captured
    /// at render time, never re-read from displayed text.
    pub on_unregister: Callback<(String, String)>,
}

/// One display card: name, description, schedule, computed spots-left, and
/// the participant roster with a remove control per entry.
///
/// Every field is rendered as a text node, so markup-significant characters
/// in activity data stay inert.
#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let spots_left = props.activity.spots_left();

    html! {
        <div class="signup-activity-card">
            <h4 class="signup-activity-card__name">{&props.name}</h4>
            <p class="signup-activity-card__description">{&props.activity.description}</p>
            <p class="signup-activity-card__schedule">
                <strong>{"Schedule: "}</strong>
                {&props.activity.schedule}
            </p>
            <p class="signup-activity-card__availability">
                <strong>{"Availability: "}</strong>
                {format!("{} spots left", spots_left)}
            </p>

            <div class="signup-activity-card__participants">
                <strong>{"Participants:"}</strong>
                {if props.activity.participants.is_empty() {
                    html! {
                        <p class="signup-activity-card__empty">{"No participants yet"}</p>
                    }
                } else {
                    html! {
                        <ul class="signup-activity-card__roster">
                            {for props.activity.participants.iter().map(|email| {
                                let on_remove = {
                                    let on_unregister = props.on_unregister.clone();
                                    let activity = props.name.to_string();
                                    let email = email.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_unregister.emit((activity.clone(), email.clone()));
                                    })
                                };

                                html! {
                                    <li class="signup-activity-card__participant">
                                        <span class="signup-activity-card__email">{email}</span>
                                        <button
                                            class="signup-activity-card__remove"
                                            type="button"
                                            aria-label={format!("Unregister {}", email)}
                                            onclick={on_remove}
                                        >
                                            {"✕"}
                                        </button>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }}
            </div>
        </div>
    }
}
