//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="responsive-container home">
            <h2>"Profile"</h2>
            {move || match auth.get().user {
                Some(user) => view! { <p>"Welcome back, " {user.display_name().to_owned()} "."</p> }.into_any(),
                None => view! { <p>"Sign in or create an account from the profile menu."</p> }.into_any(),
            }}
        </div>
    }
}
