use club_signup_core::ActivityCatalog;
use yew::prelude::*;

use super::ActivityCard;

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub activities: ActivityCatalog,
    pub on_unregister: Callback<(String, String)>,
}

/// One card per catalog entry. The list is rebuilt from the catalog on
/// every render, so re-rendering with the same data can never accumulate
/// duplicates.
#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    html! {
        <div class="signup-activity-list">
            {for props.activities.iter().map(|(name, activity)| {
                html! {
                    <ActivityCard
                        key={name.clone()}
                        name={name.clone()}
                        activity={activity.clone()}
                        on_unregister={props.on_unregister.clone()}
                    />
                }
            })}
        </div>
    }
}
