//! API endpoint configuration.
//!
//! The base URL is resolved once at startup: a compile-time `API_BASE_URL`
//! wins, then the `api-base-url` meta tag the host server writes into the
//! shell, then the empty string (same-origin requests).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Name of the `<meta>` tag carrying the runtime base URL.
pub const BASE_URL_META: &str = "api-base-url";

/// Join a base URL and an endpoint path.
pub fn build_api_url(base: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base.trim_end_matches('/'))
}

/// Pick the first non-empty candidate, or `""`.
fn pick_base_url(compile_time: Option<&str>, runtime: Option<String>) -> String {
    if let Some(url) = compile_time.map(str::trim).filter(|s| !s.is_empty()) {
        return url.to_owned();
    }
    runtime
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Resolve the API base URL for this build and page.
pub fn resolve_api_base_url() -> String {
    pick_base_url(option_env!("API_BASE_URL"), runtime_base_url())
}

fn runtime_base_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let meta = document
            .query_selector(&format!("meta[name=\"{BASE_URL_META}\"]"))
            .ok()
            .flatten()?;
        meta.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
