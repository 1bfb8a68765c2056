use yew::prelude::*;

use super::ActivityList;
use crate::hooks::ActivitiesState;

pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";

#[derive(Properties, PartialEq)]
pub struct ActivitiesViewProps {
    pub state: ActivitiesState,
    pub on_unregister: Callback<(String, String)>,
}

/// The activities section of the page: the card list when the catalog is
/// loaded, and a single static failure notice in its place when loading
/// fails — never a stale or partial list.
#[function_component(ActivitiesView)]
pub fn activities_view(props: &ActivitiesViewProps) -> Html {
    html! {
        <section class="signup-app__activities">
            <h3>{"Available Activities"}</h3>
            {match &props.state {
                ActivitiesState::Loading => html! {
                    <p class="signup-app__loading">{"Loading activities..."}</p>
                },
                ActivitiesState::Failed => html! {
                    <p class="signup-app__load-error">{LOAD_FAILURE_NOTICE}</p>
                },
                ActivitiesState::Loaded(catalog) => html! {
                    <ActivityList
                        activities={catalog.clone()}
                        on_unregister={props.on_unregister.clone()}
                    />
                },
            }}
        </section>
    }
}
