use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageAppBarProps {
    pub on_toggle_side_bar: Callback<()>,
}

#[function_component(HomePageAppBar)]
pub fn home_page_app_bar(props: &HomePageAppBarProps) -> Html {
    let on_menu = {
        let on_toggle_side_bar = props.on_toggle_side_bar.clone();
        Callback::from(move |_: MouseEvent| on_toggle_side_bar.emit(()))
    };

    html! {
        <header class="home-app-bar">
            <button class="menu-button" onclick={on_menu} title="Open menu" aria-label="Open menu">
                { "☰" }
            </button>
        </header>
    }
}
