//! Home page - composes the widgets around the derived view

use super::bootstrap::{self, WasmSpawner};
use super::state::{HomeAction, HomeState};
use super::view_model::{HomeView, IdentityControl, PROFILE_LABEL, UPLOAD_LABEL};
use crate::components::{
    HomePageAppBar, HomePageFooter, LinkButton, LinkTarget, Logo, Search, SideBar,
    UploadDialogWrapper,
};
use crate::hooks::{use_breakpoint, use_logged_in_user, use_session_store};
use crate::links::SiteLinks;
use crate::services::GlobalApi;
use crate::utils;
use crate::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let state = use_reducer(HomeState::default);
    let store = use_session_store();
    let logged_in_user = use_logged_in_user();
    let breakpoint = use_breakpoint();
    let links = use_memo((), |_| SiteLinks::new(utils::api_config()));

    // Startup fetches run once; unmounting cancels whatever is still pending
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let api = Rc::new(GlobalApi::new(utils::api_config()));
            let on_action = Callback::from(move |action: HomeAction| dispatcher.dispatch(action));
            let handle = match bootstrap::start(&WasmSpawner, api.clone(), api, store, on_action) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::error!("Failed to start home page fetches: {}", e);
                    None
                }
            };
            move || drop(handle)
        });
    }

    let toggle_drawer = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(HomeAction::ToggleDrawer))
    };

    let view = HomeView::derive(&state, logged_in_user.as_deref(), breakpoint, &links);

    html! {
        <div class="home-background">
            <UploadDialogWrapper>
                <div class="home-root">
                    <SideBar open={view.drawer_open} on_close={toggle_drawer.clone()} />
                    <HomePageAppBar on_toggle_side_bar={toggle_drawer} />
                    <main class="home-content">
                        <section class="home-hero">
                            <Logo />
                            <p class="replay-count"><i>{ &view.replay_caption }</i></p>
                        </section>
                        <section class="home-search">
                            <Search />
                        </section>
                        <section class="home-actions">
                            <div class="home-action">
                                { identity_control(&view.identity) }
                            </div>
                            <div class="home-action">
                                <LinkButton
                                    target={LinkTarget::Internal(view.upload_route.clone())}
                                    icon="cloud-upload"
                                >
                                    { UPLOAD_LABEL }
                                </LinkButton>
                            </div>
                        </section>
                        <hr class="divider" />
                        <HomePageFooter />
                    </main>
                </div>
            </UploadDialogWrapper>
        </div>
    }
}

fn identity_control(identity: &IdentityControl) -> Html {
    match identity {
        IdentityControl::Profile { avatar_link, route } => html! {
            <Link<Route> to={route.clone()} classes={classes!("link-button", "profile-link")}>
                <span class="outlined-button">
                    <img class="avatar" src={avatar_link.clone()} alt="Avatar" />
                    { PROFILE_LABEL }
                </span>
            </Link<Route>>
        },
        IdentityControl::Login { label, href } => html! {
            <LinkButton target={LinkTarget::External(href.clone())} icon="steam">
                { *label }
            </LinkButton>
        },
    }
}
