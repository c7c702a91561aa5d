//! Local state owned by one landing page instance

use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// Whether the navigation drawer is open (starts closed)
    pub drawer_open: bool,
    /// Replays processed site-wide; `None` until the first successful fetch
    pub replay_count: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    ToggleDrawer,
    ReplayCountLoaded(u64),
}

impl Reducible for HomeState {
    type Action = HomeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            HomeAction::ToggleDrawer => next.drawer_open = !next.drawer_open,
            HomeAction::ReplayCountLoaded(count) => next.replay_count = Some(count),
        }
        Rc::new(next)
    }
}
