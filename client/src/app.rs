//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::net::api::{AppAuthClient, AuthClient, HttpTransport};
use crate::net::config::{BASE_URL_META, resolve_api_base_url};
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::session::BrowserStorage;
use crate::state::ui::{Page, UiState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base_url` is written into a meta tag the browser reads at startup.
pub fn shell(options: LeptosOptions, api_base_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BASE_URL_META content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth client and the shared state contexts, and owns page
/// switching: every page change re-reads the session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client: AppAuthClient = AuthClient::new(HttpTransport, BrowserStorage, resolve_api_base_url());
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(client.clone());
    provide_context(auth);
    provide_context(ui);

    // The server cannot see localStorage, so the first read happens on mount.
    let mount_client = client.clone();
    Effect::new(move |_| auth.set(AuthState::read(&mount_client)));

    let on_page_change = Callback::new(move |page: Page| {
        ui.update(|u| u.navigate(page));
        auth.set(AuthState::read(&client));
    });
    let on_complete = Callback::new(move |()| on_page_change.run(Page::Home));

    view! {
        <Stylesheet id="leptos" href="/pkg/profile.css"/>
        <Title text="Profile"/>

        <div class="app">
            <Header on_page_change=on_page_change/>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=move || view! { <PageBody on_complete=on_complete/> }/>
                </Routes>
            </Router>
            <Footer/>
        </div>
    }
}

/// Page body: shows whichever page `UiState` selects.
#[component]
fn PageBody(on_complete: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let page = Memo::new(move |_| ui.get().page);

    view! {
        <main class="body">
            {move || match page.get() {
                Page::Home => view! { <HomePage/> }.into_any(),
                Page::SignIn => view! { <LoginPage on_success=on_complete/> }.into_any(),
                Page::SignUp => view! { <SignupPage on_success=on_complete/> }.into_any(),
            }}
        </main>
    }
}
