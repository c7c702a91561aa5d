//! Search Component
//!
//! Player lookup box. Submitting a non-empty query opens that player's page.

use crate::links::SiteLinks;
use crate::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Route for a submitted query, if it names anything
pub fn search_target(query: &str) -> Option<Route> {
    let query = query.trim();
    (!query.is_empty()).then(|| SiteLinks::player_page(query))
}

#[function_component(Search)]
pub fn search() -> Html {
    let navigator = use_navigator();
    let input_ref = use_node_ref();

    let onsubmit = {
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            match (search_target(&input.value()), &navigator) {
                (Some(route), Some(navigator)) => navigator.push(&route),
                (Some(_), None) => log::warn!("Search used outside of a router"),
                (None, _) => {}
            }
        })
    };

    html! {
        <form class="search-paper" {onsubmit}>
            <input
                ref={input_ref}
                class="search-input"
                type="search"
                placeholder="Search for a player..."
                aria-label="Search for a player"
            />
            <button class="search-button" type="submit" title="Search">{ "🔍" }</button>
        </form>
    }
}
