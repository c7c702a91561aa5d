//! Hook tracking the viewport width class.

use crate::viewport::Breakpoint;
use gloo::events::EventListener;
use yew::prelude::*;

fn current_breakpoint() -> Breakpoint {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(Breakpoint::from_width)
        .unwrap_or(Breakpoint::Xs)
}

/// Hook returning the current [`Breakpoint`].
///
/// Listens to `resize` on the window and re-renders the component only when
/// the width crosses into another class.
#[hook]
pub fn use_breakpoint() -> Breakpoint {
    let breakpoint = use_state_eq(current_breakpoint);

    {
        let breakpoint = breakpoint.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    breakpoint.set(current_breakpoint());
                })
            });
            move || drop(listener)
        });
    }

    *breakpoint
}
