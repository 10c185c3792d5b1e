//! Confirmation dialog for destructive row actions.
//!
//! # Design
//! - Side-effect free; the owner decides what confirm and cancel mean.
//! - Escape cancels while the dialog is open.

use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub body: AttrValue,
    pub confirm_label: AttrValue,
    pub cancel_label: AttrValue,
    #[prop_or_default]
    pub danger: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub(crate) fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    {
        let open = props.open;
        let on_cancel = props.on_cancel.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = open.then(|| {
                    EventListener::new(&document(), "keydown", move |event| {
                        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                            if key_event.key() == "Escape" {
                                on_cancel.emit(());
                            }
                        }
                    })
                });
                move || drop(listener)
            },
            open,
        );
    }

    if !props.open {
        return html! {};
    }

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="modal-overlay" role="presentation">
            <div class="modal" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
                <h3>{props.title.clone()}</h3>
                <p>{props.body.clone()}</p>
                <div class="modal-actions">
                    <button class="ghost" onclick={on_cancel}>{props.cancel_label.clone()}</button>
                    <button
                        class={classes!("primary", props.danger.then_some("danger"))}
                        onclick={on_confirm}>
                        {props.confirm_label.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
