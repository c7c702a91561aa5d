//! Upload Dialog Wrapper
//!
//! Renders its children plus a floating upload button. The button opens a
//! small dialog pointing at the upload page.

use super::link_button::{LinkButton, LinkTarget};
use crate::links::SiteLinks;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadDialogWrapperProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(UploadDialogWrapper)]
pub fn upload_dialog_wrapper(props: &UploadDialogWrapperProps) -> Html {
    let open = use_state(|| false);

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            { props.children.clone() }
            <button class="fab upload-fab" onclick={on_open} title="Upload replays">
                { "⇪" }
            </button>
            if *open {
                <div class="dialog-backdrop" onclick={on_close.clone()}>
                    <div class="dialog upload-dialog" onclick={keep_open}>
                        <h2>{ "Upload replays" }</h2>
                        <p>{ "Upload your .replay files to see stats, heatmaps and more." }</p>
                        <div class="dialog-actions">
                            <LinkButton target={LinkTarget::Internal(SiteLinks::upload_page())}>
                                { "Go to upload page" }
                            </LinkButton>
                            <button class="text-button" onclick={on_close}>{ "Close" }</button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
