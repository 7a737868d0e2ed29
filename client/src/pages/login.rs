//! Login page: email + password against the remote auth API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::{AppAuthClient, AuthClient, Transport};
use crate::state::session::Storage;

/// Sign in with a trimmed email and the password as typed.
///
/// # Errors
///
/// Returns the `AuthError` message to show under the form.
pub async fn submit_login<T: Transport, S: Storage>(
    client: &AuthClient<T, S>,
    email: &str,
    password: &str,
) -> Result<(), String> {
    client.login(email.trim(), password).await.map(|_| ()).map_err(|e| e.to_string())
}

#[component]
pub fn LoginPage(#[prop(optional)] on_success: Option<Callback<()>>) -> impl IntoView {
    let client = expect_context::<AppAuthClient>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        error.set(String::new());
        loading.set(true);

        let client = client.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            let result = submit_login(&client, &email_value, &password_value).await;
            loading.set(false);
            match result {
                Ok(()) => {
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
            <h2>"Login Page"</h2>
            <form class="auth-form" on:submit=on_submit>
                <div>
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label>"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div class="auth-form__actions">
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging..." } else { "Login" }}
                    </button>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <div class="error">{move || error.get()}</div>
                </Show>
            </form>
        </div>
    }
}
