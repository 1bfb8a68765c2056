use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    /// Activity names for the selection list, in render order.
    pub activity_names: Vec<String>,

    /// Controlled field values. They live in app state so the app can
    /// clear them on success and leave them alone on failure.
    pub email: AttrValue,
    pub selected_activity: AttrValue,

    pub on_email_change: Callback<String>,
    pub on_activity_change: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Sign-up form: activity select, email input, submit. Intercepts the
/// submit event so the page never reloads.
#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let select_ref = use_node_ref();

    // Browsers track a select's live selection as a property, not the
    // `selected` attribute, so a cleared value must be written back through
    // the element to actually reset the control.
    {
        let select_ref = select_ref.clone();
        use_effect_with(props.selected_activity.clone(), move |selected| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(&selected.to_string());
            }
            || ()
        });
    }

    let on_submit = {
        let callback = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            callback.emit(());
        })
    };

    let on_email_input = {
        let callback = props.on_email_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    let on_activity_change = {
        let callback = props.on_activity_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(select.value());
        })
    };

    html! {
        <form class="signup-form" onsubmit={on_submit}>
            <label class="signup-form__label">
                {"Email"}
                <input
                    class="signup-form__input"
                    type="email"
                    required={true}
                    placeholder="your-email@example.com"
                    value={props.email.clone()}
                    oninput={on_email_input}
                />
            </label>
            <label class="signup-form__label">
                {"Activity"}
                <select
                    ref={select_ref}
                    class="signup-form__select"
                    required={true}
                    onchange={on_activity_change}
                >
                    <option value="" selected={props.selected_activity.is_empty()}>
                        {"-- Select an activity --"}
                    </option>
                    {for props.activity_names.iter().map(|name| {
                        html! {
                            <option
                                value={name.clone()}
                                selected={name.as_str() == &*props.selected_activity}
                            >
                                {name}
                            </option>
                        }
                    })}
                </select>
            </label>
            <button class="signup-form__submit" type="submit">{"Sign Up"}</button>
        </form>
    }
}
