//! Hooks for reading the shared session store.

use crate::session_store::SessionStore;
use shared::LoggedInUser;
use std::rc::Rc;
use yew::prelude::*;

/// The store provided by the app root, or the global one outside a provider.
#[hook]
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(SessionStore::global)
}

/// Hook returning the signed-in user.
///
/// The calling component re-renders whenever anyone writes the store.
#[hook]
pub fn use_logged_in_user() -> Option<Rc<LoggedInUser>> {
    let store = use_session_store();
    let force_update = use_force_update();
    let rendered = store.read();

    {
        let rendered = rendered.clone();
        use_effect_with(store.clone(), move |store| {
            let subscription = {
                let force_update = force_update.clone();
                store.subscribe(Callback::from(move |_| force_update.force_update()))
            };
            // A write may have landed between this render and the subscription
            let changed = match (&rendered, store.read()) {
                (Some(a), Some(b)) => !Rc::ptr_eq(a, &b),
                (None, None) => false,
                _ => true,
            };
            if changed {
                force_update.force_update();
            }
            move || drop(subscription)
        });
    }

    rendered
}
