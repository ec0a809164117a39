//! Signup card: the signup panel and the OTP panel, of which exactly one is
//! shown, plus the single `.error` element above them. The view only renders
//! a [`FormState`] snapshot; after every event the snapshot is refreshed from
//! the controller.

use super::{
    browser::{BrowserNavigator, DocumentCookies},
    fetch::FetchTransport,
    WebController,
};
use crate::client::AppConfig;
use crate::form::{Field, FormState, SignupFormController, SignupInput, UiState};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use std::rc::Rc;

#[component]
pub fn SignupCard(config: AppConfig) -> impl IntoView {
    let controller: StoredValue<Rc<WebController>, LocalStorage> =
        StoredValue::new_local(Rc::new(SignupFormController::new(
            config,
            FetchTransport,
            DocumentCookies,
            BrowserNavigator,
        )));
    let form_state = RwSignal::new(FormState::default());

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let otp_code = RwSignal::new(String::new());

    let sync = move || form_state.set(controller.with_value(|controller| controller.state()));
    let on_focus = move |field: Field| {
        controller.with_value(|controller| controller.on_focus(field));
        sync();
    };
    let on_blur = move |field: Field, value: String| {
        controller.with_value(|controller| controller.on_blur(field, &value));
        sync();
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        event.stop_propagation();

        let input = SignupInput::new(
            first_name.get_untracked(),
            last_name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
        );
        let controller = controller.get_value();
        spawn_local(async move {
            controller.on_signup_submit(input).await;
            sync();
        });
    };

    let on_verify = move |_| {
        let code = otp_code.get_untracked();
        let email = form_state.with_untracked(|state| state.otp_email().to_string());
        let controller = controller.get_value();
        spawn_local(async move {
            controller.on_verify_otp_click(&code, &email).await;
            sync();
        });
    };

    let on_back = move |_| controller.with_value(|controller| controller.navigate_back());

    let panel_display = move |panel: UiState| {
        if form_state.with(|state| state.ui() == panel) {
            "block"
        } else {
            "none"
        }
    };

    view! {
        <div class="signup-card">
            {move || {
                form_state
                    .with(|state| state.error().map(ToString::to_string))
                    .map(|message| view! { <div class="error" role="alert">{message}</div> })
            }}
            <div id="signup-section" style:display=move || panel_display(UiState::ShowingSignupForm)>
                <button type="button" class="back-arrow" aria-label="Back" on:click=on_back>
                    "←"
                </button>
                <h1>"Create account"</h1>
                <form class="signup-form" novalidate on:submit=on_submit>
                    <div
                        class="field"
                        class:focused=move || form_state.with(|state| state.is_focused(Field::FirstName))
                    >
                        <label for="first_name">"First name"</label>
                        <input
                            id="first_name"
                            name={Field::FirstName.name()}
                            type="text"
                            autocomplete="given-name"
                            on:input=move |event| first_name.set(event_target_value(&event))
                            on:focus=move |_| on_focus(Field::FirstName)
                            on:blur=move |event| on_blur(Field::FirstName, event_target_value(&event))
                        />
                    </div>
                    <div
                        class="field"
                        class:focused=move || form_state.with(|state| state.is_focused(Field::LastName))
                    >
                        <label for="last_name">"Last name"</label>
                        <input
                            id="last_name"
                            name={Field::LastName.name()}
                            type="text"
                            autocomplete="family-name"
                            on:input=move |event| last_name.set(event_target_value(&event))
                            on:focus=move |_| on_focus(Field::LastName)
                            on:blur=move |event| on_blur(Field::LastName, event_target_value(&event))
                        />
                    </div>
                    <div
                        class="field"
                        class:focused=move || form_state.with(|state| state.is_focused(Field::Email))
                    >
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            name={Field::Email.name()}
                            type="email"
                            autocomplete="email"
                            inputmode="email"
                            on:input=move |event| email.set(event_target_value(&event))
                            on:focus=move |_| on_focus(Field::Email)
                            on:blur=move |event| on_blur(Field::Email, event_target_value(&event))
                        />
                    </div>
                    <div
                        class="field"
                        class:focused=move || form_state.with(|state| state.is_focused(Field::Password))
                    >
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            name={Field::Password.name()}
                            type="password"
                            autocomplete="new-password"
                            on:input=move |event| password.set(event_target_value(&event))
                            on:focus=move |_| on_focus(Field::Password)
                            on:blur=move |event| on_blur(Field::Password, event_target_value(&event))
                        />
                    </div>
                    <button type="submit">"Sign up"</button>
                </form>
            </div>
            <div id="otp-section" style:display=move || panel_display(UiState::ShowingOtpPanel)>
                <h1>"Verify your email"</h1>
                <p>
                    "We sent a code to "
                    <strong id="otp-email-display">
                        {move || form_state.with(|state| state.otp_email().to_string())}
                    </strong>
                </p>
                <div
                    class="field"
                    class:focused=move || form_state.with(|state| state.is_focused(Field::OtpCode))
                >
                    <label for="otp-code">"Verification code"</label>
                    <input
                        id="otp-code"
                        name={Field::OtpCode.name()}
                        type="text"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        on:input=move |event| otp_code.set(event_target_value(&event))
                        on:focus=move |_| on_focus(Field::OtpCode)
                        on:blur=move |event| on_blur(Field::OtpCode, event_target_value(&event))
                    />
                </div>
                <button id="btn-verify-otp" type="button" on:click=on_verify>
                    "Verify"
                </button>
            </div>
        </div>
    }
}
