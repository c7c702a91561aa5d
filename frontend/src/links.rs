//! Navigation targets used by the landing page.

use crate::Route;
use shared::api::endpoints;
use shared::ApiClientConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    api: ApiClientConfig,
}

impl SiteLinks {
    pub fn new(api: ApiClientConfig) -> Self {
        Self { api }
    }

    /// Backend endpoint that starts the Steam OpenID flow (full page load)
    pub fn steam_login(&self) -> String {
        self.api.url(endpoints::STEAM_LOGIN)
    }

    pub fn player_page(id: &str) -> Route {
        Route::Player { id: id.to_string() }
    }

    pub fn upload_page() -> Route {
        Route::Upload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    #[test]
    fn steam_login_goes_through_the_api() {
        let links = SiteLinks::new(ApiClientConfig::new("http://localhost:8000"));
        assert_eq!(links.steam_login(), "http://localhost:8000/api/auth/steam");
    }

    #[test]
    fn player_page_is_parameterized_by_id() {
        let route = SiteLinks::player_page("76561198055442516");
        assert_eq!(route.to_path(), "/players/76561198055442516/overview");
    }

    #[test]
    fn upload_page_path() {
        assert_eq!(SiteLinks::upload_page().to_path(), "/upload");
    }
}
