use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found-container">
            <div class="not-found-content">
                <h1>{ "Page not found" }</h1>
                <p class="not-found-message">
                    { "There is nothing here yet." }
                </p>
                <Link<Route> to={Route::Home} classes={classes!("footer-link")}>
                    { "Back to the home page" }
                </Link<Route>>
            </div>
        </div>
    }
}
