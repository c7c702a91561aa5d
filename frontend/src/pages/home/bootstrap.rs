//! Startup fetches for the landing page.
//!
//! Both requests are spawned as independent tasks. Neither waits for the
//! other, and both are tied to the returned [`BootstrapHandle`]: once the
//! handle is dropped, a response that arrives late is discarded instead of
//! being applied to a page that no longer exists.

use super::state::HomeAction;
use crate::services::{ReplayCountService, UserIdentityService};
use crate::session_store::SessionStore;
use futures_util::future::{abortable, AbortHandle};
use futures_util::task::{LocalFutureObj, LocalSpawn, LocalSpawnExt, SpawnError};
use std::rc::Rc;
use yew::Callback;

/// Keeps the startup fetches alive. Dropping it cancels whatever is still pending.
#[must_use = "dropping the handle cancels the fetches"]
pub struct BootstrapHandle {
    tasks: [AbortHandle; 2],
}

impl BootstrapHandle {
    pub fn cancel(&self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

impl Drop for BootstrapHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawns futures onto the browser's event loop
pub struct WasmSpawner;

impl LocalSpawn for WasmSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

/// Start both startup fetches.
///
/// * A replay count is dispatched as [`HomeAction::ReplayCountLoaded`].
/// * A signed-in user is written to `store`, where every other page sees it too.
///
/// Failures are logged and otherwise ignored: the page keeps its loading
/// caption or anonymous controls. No request is retried.
pub fn start<Sp, R, U>(
    spawner: &Sp,
    replay_service: Rc<R>,
    identity_service: Rc<U>,
    store: SessionStore,
    on_action: Callback<HomeAction>,
) -> Result<BootstrapHandle, SpawnError>
where
    Sp: LocalSpawn + ?Sized,
    R: ReplayCountService + 'static,
    U: UserIdentityService + 'static,
{
    let (replay_task, replay_abort) = abortable(async move {
        match replay_service.replay_count().await {
            Ok(count) => on_action.emit(HomeAction::ReplayCountLoaded(count)),
            Err(e) => log::warn!("Failed to fetch replay count: {}", e),
        }
    });

    let (identity_task, identity_abort) = abortable(async move {
        match identity_service.logged_in_user().await {
            Ok(user) => {
                log::debug!("Signed in as {}", user.id);
                store.set(user);
            }
            Err(e) if e.is_unauthenticated() => {
                log::debug!("No signed-in user, showing login control");
            }
            Err(e) => log::warn!("Failed to fetch signed-in user: {}", e),
        }
    });

    // Built before spawning so a failed spawn aborts the task already queued
    let handle = BootstrapHandle {
        tasks: [replay_abort, identity_abort],
    };
    spawner.spawn_local(async move {
        let _ = replay_task.await;
    })?;
    spawner.spawn_local(async move {
        let _ = identity_task.await;
    })?;

    Ok(handle)
}
