//! Render decisions for the landing page.
//!
//! [`HomeView::derive`] is recomputed from scratch on every render. It only
//! looks at the snapshot it is handed, so the order in which the replay
//! count and the signed-in user arrive never matters.

use super::state::HomeState;
use crate::links::SiteLinks;
use crate::viewport::Breakpoint;
use crate::Route;
use shared::LoggedInUser;

pub const LOADING_CAPTION: &str = "Loading replay count...";
pub const SHORT_LOGIN_LABEL: &str = "Log in";
pub const LONG_LOGIN_LABEL: &str = "Log in with Steam";
pub const PROFILE_LABEL: &str = "View Profile";
pub const UPLOAD_LABEL: &str = "Upload replays";

/// What the identity region shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityControl {
    /// Signed in: avatar button leading to the user's player page
    Profile { avatar_link: String, route: Route },
    /// Anonymous: external link that starts the login flow
    Login { label: &'static str, href: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub drawer_open: bool,
    pub replay_caption: String,
    pub identity: IdentityControl,
    pub upload_route: Route,
}

impl HomeView {
    pub fn derive(
        state: &HomeState,
        user: Option<&LoggedInUser>,
        breakpoint: Breakpoint,
        links: &SiteLinks,
    ) -> Self {
        let identity = match user {
            Some(user) => IdentityControl::Profile {
                avatar_link: user.avatar_link.clone(),
                route: SiteLinks::player_page(&user.id),
            },
            None => IdentityControl::Login {
                label: login_label(breakpoint),
                href: links.steam_login(),
            },
        };

        Self {
            drawer_open: state.drawer_open,
            replay_caption: replay_caption(state.replay_count),
            identity,
            upload_route: SiteLinks::upload_page(),
        }
    }
}

pub fn replay_caption(count: Option<u64>) -> String {
    match count {
        Some(count) => format!("{} replays and counting...", count),
        None => LOADING_CAPTION.to_string(),
    }
}

/// Narrow screens get the short label
pub fn login_label(breakpoint: Breakpoint) -> &'static str {
    if breakpoint.is_width_up(Breakpoint::Sm) {
        LONG_LOGIN_LABEL
    } else {
        SHORT_LOGIN_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ApiClientConfig;

    fn links() -> SiteLinks {
        SiteLinks::new(ApiClientConfig::new("https://replays.example"))
    }

    fn user() -> LoggedInUser {
        LoggedInUser {
            id: "76561198055442516".to_string(),
            name: "Sciguymjm".to_string(),
            avatar_link: "https://avatars.example/abc_full.jpg".to_string(),
        }
    }

    #[test]
    fn caption_while_loading() {
        let view = HomeView::derive(&HomeState::default(), None, Breakpoint::Md, &links());
        assert_eq!(view.replay_caption, "Loading replay count...");
    }

    #[test]
    fn caption_once_known() {
        for (count, expected) in [
            (0, "0 replays and counting..."),
            (1, "1 replays and counting..."),
            (4213, "4213 replays and counting..."),
        ] {
            assert_eq!(replay_caption(Some(count)), expected);
        }
    }

    #[test]
    fn anonymous_gets_login_control() {
        let view = HomeView::derive(&HomeState::default(), None, Breakpoint::Md, &links());
        assert_eq!(
            view.identity,
            IdentityControl::Login {
                label: "Log in with Steam",
                href: "https://replays.example/api/auth/steam".to_string(),
            }
        );
    }

    #[test]
    fn login_label_depends_on_breakpoint() {
        let label = |bp| match HomeView::derive(&HomeState::default(), None, bp, &links()).identity
        {
            IdentityControl::Login { label, .. } => label,
            other => panic!("expected login control, got {:?}", other),
        };
        assert_eq!(label(Breakpoint::Xs), "Log in");
        assert_eq!(label(Breakpoint::Sm), "Log in with Steam");
        assert_eq!(label(Breakpoint::Xl), "Log in with Steam");
    }

    #[test]
    fn signed_in_gets_profile_control() {
        let user = user();
        let view = HomeView::derive(&HomeState::default(), Some(&user), Breakpoint::Xs, &links());
        assert_eq!(
            view.identity,
            IdentityControl::Profile {
                avatar_link: "https://avatars.example/abc_full.jpg".to_string(),
                route: Route::Player {
                    id: "76561198055442516".to_string()
                },
            }
        );
    }

    #[test]
    fn drawer_and_upload_pass_through() {
        let state = HomeState {
            drawer_open: true,
            replay_count: None,
        };
        let view = HomeView::derive(&state, None, Breakpoint::Xs, &links());
        assert!(view.drawer_open);
        assert_eq!(view.upload_route, Route::Upload);
    }

    #[test]
    fn caption_ignores_identity_and_vice_versa() {
        let user = user();
        let loaded = HomeState {
            drawer_open: false,
            replay_count: Some(9),
        };
        let with_user = HomeView::derive(&loaded, Some(&user), Breakpoint::Sm, &links());
        let without_user = HomeView::derive(&loaded, None, Breakpoint::Sm, &links());
        assert_eq!(with_user.replay_caption, without_user.replay_caption);

        let loading = HomeView::derive(&HomeState::default(), Some(&user), Breakpoint::Sm, &links());
        assert_eq!(loading.identity, with_user.identity);
    }
}
