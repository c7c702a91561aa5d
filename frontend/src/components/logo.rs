use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(AttrValue::Static("/logo.png"))]
    pub src: AttrValue,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <img class="logo" src={props.src.clone()} alt="Logo" />
    }
}
