//! Process-wide store holding the signed-in user, if any.
//!
//! Every page reads the same slot. The only write path is [`SessionStore::set`],
//! which notifies all live subscribers synchronously so their components
//! re-render with the new identity.

use shared::LoggedInUser;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use yew::Callback;

#[derive(Default)]
struct Inner {
    user: RefCell<Option<Rc<LoggedInUser>>>,
    subscribers: RefCell<Vec<(usize, Callback<()>)>>,
    next_id: Cell<usize>,
}

/// Cloneable handle to a shared user slot.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

thread_local! {
    static GLOBAL: SessionStore = SessionStore::default();
}

impl SessionStore {
    /// Create an empty, independent store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store shared by the whole application.
    pub fn global() -> Self {
        GLOBAL.with(Clone::clone)
    }

    /// Current user, or `None` when nobody is signed in.
    pub fn read(&self) -> Option<Rc<LoggedInUser>> {
        self.inner.user.borrow().clone()
    }

    /// Replace the current user and notify subscribers.
    pub fn set(&self, user: LoggedInUser) {
        *self.inner.user.borrow_mut() = Some(Rc::new(user));

        // Snapshot first: a subscriber may unsubscribe while being notified
        let subscribers: Vec<Callback<()>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback.emit(());
        }
    }

    /// Register a change listener. It stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, on_change: Callback<()>) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.subscribers.borrow_mut().push((id, on_change));
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.read())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Guard returned by [`SessionStore::subscribe`].
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<Inner>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}
