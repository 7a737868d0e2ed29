//! Signup page: account creation with local password checks.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::api::{AppAuthClient, AuthClient, Transport};
use crate::state::session::Storage;

/// Minimum password length in UTF-16 code units, as a browser form counts it.
pub const MIN_PASSWORD_LEN: usize = 6;
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";

/// Field values of the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_id: String,
    pub password: String,
    pub confirm_password: String,
}

/// Local checks run before any request: confirmation first, then length.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_passwords(password: &str, confirm_password: &str) -> Result<(), &'static str> {
    if password != confirm_password {
        return Err(PASSWORDS_DO_NOT_MATCH);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}

/// Validate the form and, if it passes, register exactly once.
///
/// # Errors
///
/// Returns the validation message or the `AuthError` message.
pub async fn submit_signup<T: Transport, S: Storage>(client: &AuthClient<T, S>, form: &SignupForm) -> Result<(), String> {
    validate_passwords(&form.password, &form.confirm_password).map_err(str::to_owned)?;
    client
        .register(&form.first_name, &form.last_name, &form.email, form.user_id.trim(), &form.password)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label>{label}</label>
            <input
                type=kind
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn SignupPage(#[prop(optional)] on_success: Option<Callback<()>>) -> impl IntoView {
    let client = expect_context::<AppAuthClient>();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let user_id = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        error.set(String::new());

        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            user_id: user_id.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(message) = validate_passwords(&form.password, &form.confirm_password) {
            error.set(message.to_owned());
            return;
        }

        loading.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let result = submit_signup(&client, &form).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    log::info!("signup successful");
                    if let Some(on_success) = on_success {
                        on_success.run(());
                    }
                }
                Err(message) => error.set(message),
            }
        });
    };

    view! {
        <div class="responsive-container auth-card">
            <h2>"Create Account"</h2>
            <form class="auth-form" on:submit=on_submit>
                <TextField label="First Name" placeholder="Enter your first name" value=first_name/>
                <TextField label="Last Name" placeholder="Enter your last name" value=last_name/>
                <TextField label="Email" kind="email" placeholder="Enter your email" value=email/>
                <TextField label="User ID" placeholder="Choose a user id" value=user_id/>
                <TextField label="Password" kind="password" placeholder="Enter your password" value=password/>
                <TextField
                    label="Confirm Password"
                    kind="password"
                    placeholder="Confirm your password"
                    value=confirm_password
                />
                <div class="auth-form__actions">
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <div class="error">{move || error.get()}</div>
                </Show>
            </form>
        </div>
    }
}
