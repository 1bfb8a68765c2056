use crate::api::ApiClient;
use club_signup_core::ActivityCatalog;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Lifecycle of the displayed catalog. The catalog is replaced wholesale on
/// every fetch; there is no partial sync.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivitiesState {
    Loading,
    Loaded(ActivityCatalog),
    Failed,
}

/// Catalog state plus the refresh trigger.
#[derive(Clone, PartialEq)]
pub struct UseActivitiesHandle {
    pub state: ActivitiesState,

    /// Re-fetches the catalog and replaces the state with the outcome.
    pub refresh: Callback<()>,
}

/// Hook owning the activity catalog: fetches once on mount, and re-fetches
/// whenever `refresh` is emitted (after mutations).
///
/// A failed fetch moves to `Failed` and logs the cause; it is not retried
/// automatically.
#[hook]
pub fn use_activities(client: Rc<ApiClient>) -> UseActivitiesHandle {
    let state = use_state(|| ActivitiesState::Loading);

    let refresh = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let state = state.clone();
            let client = client.clone();
            spawn_local(async move {
                match client.list_activities().await {
                    Ok(catalog) => state.set(ActivitiesState::Loaded(catalog)),
                    Err(err) => {
                        log::error!("failed to load activities: {err}");
                        state.set(ActivitiesState::Failed);
                    }
                }
            });
        })
    };

    // Initial load, exactly once, before any user interaction
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseActivitiesHandle {
        state: (*state).clone(),
        refresh,
    }
}
