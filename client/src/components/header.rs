//! Header bar with the profile dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders from `AuthState` only. Logout clears the session through the auth
//! client, then asks the parent to navigate home; the parent re-reads the
//! session, so the header never writes auth state itself.
//!
//! A mousedown anywhere outside the profile block closes the dropdown.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::net::api::AppAuthClient;
use crate::state::auth::AuthState;
use crate::state::ui::{Page, UiState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(Page),
    Logout,
}

/// One entry of the profile dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

/// Dropdown entries for the current auth state.
pub fn menu_items(auth: &AuthState) -> Vec<MenuItem> {
    if auth.is_authenticated() {
        vec![MenuItem { label: "Logout", action: MenuAction::Logout }]
    } else {
        vec![
            MenuItem { label: "Sign In", action: MenuAction::Navigate(Page::SignIn) },
            MenuItem { label: "Sign Up", action: MenuAction::Navigate(Page::SignUp) },
        ]
    }
}

#[component]
pub fn Header(on_page_change: Callback<Page>) -> impl IntoView {
    let client = expect_context::<AppAuthClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let profile_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            if !ui.get_untracked().dropdown_open {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = match (profile_ref.get_untracked(), target) {
                (Some(profile), Some(target)) => profile.contains(Some(&target)),
                _ => false,
            };
            ui.update(|u| u.press(inside));
        });
        on_cleanup(move || handle.remove());
    }

    let on_select = move |action: MenuAction| match action {
        MenuAction::Logout => {
            client.logout();
            on_page_change.run(Page::Home);
        }
        MenuAction::Navigate(page) => on_page_change.run(page),
    };

    view! {
        <header class="header">
            <div class="header__logo">"LOGO"</div>
            <div class="header__menu">"Menu Items"</div>
            <div class="profile" node_ref=profile_ref>
                <button
                    class="profile__button"
                    title="User Menu"
                    on:click=move |_| ui.update(UiState::toggle_dropdown)
                >
                    <span class="profile__icon">"👤"</span>
                    {move || {
                        auth.get().user.map(|user| view! { <span class="profile__name">{user.display_name().to_owned()}</span> })
                    }}
                </button>
                <Show when=move || ui.get().dropdown_open>
                    <div class="dropdown-menu">
                        {
                            let on_select = on_select.clone();
                            move || {
                                let on_select = on_select.clone();
                                menu_items(&auth.get())
                                    .into_iter()
                                    .map(move |item| {
                                        let on_select = on_select.clone();
                                        view! {
                                            <button class="dropdown-item" on:click=move |_| on_select(item.action)>
                                                {item.label}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                    </div>
                </Show>
            </div>
        </header>
    }
}
