use shared::ApiClientConfig;
use web_sys::window;

/// Get the base HTTP URL (e.g., "http://localhost:8000" or "https://myapp.com")
///
/// A non-empty `API_BASE_URL` at compile time wins over the page location,
/// which lets a dev server talk to a backend on another port.
pub fn get_base_url() -> String {
    if let Some(base) = option_env!("API_BASE_URL").filter(|b| !b.is_empty()) {
        return base.to_string();
    }

    let Some(window) = window() else {
        return String::new();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8000".to_string());

    format!("{}//{}", protocol, host)
}

/// API client configuration for the current page
pub fn api_config() -> ApiClientConfig {
    ApiClientConfig::new(get_base_url())
}
