//! Button-styled link to either an in-app route or an external URL.

use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum LinkTarget {
    /// Client-side navigation through the router
    Internal(Route),
    /// Full page load, e.g. a backend login endpoint
    External(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct LinkButtonProps {
    pub target: LinkTarget,
    /// Icon name, rendered as an `icon-<name>` class
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(LinkButton)]
pub fn link_button(props: &LinkButtonProps) -> Html {
    let icon = props.icon.as_ref().map(|icon| {
        html! { <span class={classes!("button-icon", format!("icon-{}", icon))}></span> }
    });

    let content = html! {
        <span class="outlined-button">
            { for icon }
            { props.children.clone() }
        </span>
    };

    match &props.target {
        LinkTarget::Internal(route) => html! {
            <Link<Route> to={route.clone()} classes={classes!("link-button")}>
                { content }
            </Link<Route>>
        },
        LinkTarget::External(href) => html! {
            <a class="link-button" href={href.clone()}>
                { content }
            </a>
        },
    }
}
