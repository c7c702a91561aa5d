//! Side Bar Component
//!
//! Slide-in navigation drawer. The parent owns the open flag; every way of
//! dismissing the drawer goes through `on_close`.

use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SideBarProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Entries rendered in the drawer; a closed drawer renders none
fn visible_entries(open: bool) -> Vec<(&'static str, Route)> {
    if !open {
        return Vec::new();
    }
    vec![("Home", Route::Home), ("Upload replays", Route::Upload)]
}

/// Forwards a dismissal to `on_close` only while the drawer is open, so a
/// stray dismissal can never toggle a closed drawer back open.
fn dismiss_callback(open: bool, on_close: Callback<()>) -> Callback<()> {
    Callback::from(move |_| {
        if open {
            on_close.emit(());
        }
    })
}

#[function_component(SideBar)]
pub fn side_bar(props: &SideBarProps) -> Html {
    let close = {
        let dismiss = dismiss_callback(props.open, props.on_close.clone());
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };

    html! {
        <>
            if props.open {
                <div class="side-bar-scrim" onclick={close.clone()}></div>
            }
            <nav
                class={classes!("side-bar", props.open.then_some("open"))}
                aria-hidden={(!props.open).to_string()}
            >
                <ul class="side-bar-list">
                    { for visible_entries(props.open).into_iter().map(|(label, route)| html! {
                        <li class="side-bar-entry" onclick={close.clone()}>
                            <Link<Route> to={route}>{ label }</Link<Route>>
                        </li>
                    }) }
                </ul>
            </nav>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::home::state::{HomeAction, HomeState};
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Reducible;

    /// Drawer state plus an `on_close` wired to the toggle, as the home page does
    fn drawer(open: bool) -> (Rc<RefCell<Rc<HomeState>>>, Callback<()>) {
        let state = Rc::new(RefCell::new(Rc::new(HomeState {
            drawer_open: open,
            replay_count: None,
        })));
        let on_close = {
            let state = state.clone();
            Callback::from(move |_: ()| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(HomeAction::ToggleDrawer);
            })
        };
        (state, on_close)
    }

    #[test]
    fn closed_drawer_has_no_entries() {
        assert!(visible_entries(false).is_empty());
    }

    #[test]
    fn open_drawer_lists_home_and_upload() {
        assert_eq!(
            visible_entries(true),
            vec![("Home", Route::Home), ("Upload replays", Route::Upload)]
        );
    }

    #[test]
    fn dismissing_open_drawer_closes_it() {
        let (state, on_close) = drawer(true);
        dismiss_callback(true, on_close).emit(());
        assert!(!state.borrow().drawer_open);
    }

    #[test]
    fn dismissing_closed_drawer_keeps_it_closed() {
        let (state, on_close) = drawer(false);
        let dismiss = dismiss_callback(false, on_close);
        dismiss.emit(());
        dismiss.emit(());
        assert!(!state.borrow().drawer_open);
    }

    #[test]
    fn reopened_drawer_can_be_dismissed_again() {
        let (state, on_close) = drawer(true);
        dismiss_callback(true, on_close.clone()).emit(());
        on_close.emit(());
        assert!(state.borrow().drawer_open);

        let open = state.borrow().drawer_open;
        dismiss_callback(open, on_close).emit(());
        assert!(!state.borrow().drawer_open);
    }
}
