use crate::VERSION;
use yew::prelude::*;

#[function_component(HomePageFooter)]
pub fn home_page_footer() -> Html {
    html! {
        <footer class="home-footer">
            <span class="version">{ format!("v{}", VERSION) }</span>
            <a
                href="https://github.com/SaltieRL/DistributedReplays"
                target="_blank"
                rel="noopener noreferrer"
                class="footer-link"
            >
                { "GitHub" }
            </a>
            <a
                href="https://github.com/SaltieRL/DistributedReplays/issues/new"
                target="_blank"
                rel="noopener noreferrer"
                class="footer-link bug-report"
            >
                { "Report a Bug" }
            </a>
        </footer>
    }
}
