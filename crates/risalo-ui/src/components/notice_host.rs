//! Single-slot notice banner with auto-expiry.
//!
//! One banner per page; a new notice replaces the old one and restarts the
//! clock. The expiry callback carries the notice's sequence number so the
//! owner can ignore timers that outlived their notice.

use crate::core::notice::{Notice, NoticeKind};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NoticeHostProps {
    #[prop_or_default]
    pub notice: Option<Notice>,
    #[prop_or(4000)]
    pub expiry_ms: u32,
    pub on_expire: Callback<u64>,
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(NoticeHost)]
pub(crate) fn notice_host(props: &NoticeHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let expiry_ms = props.expiry_ms;
    {
        let notice = props.notice.clone();
        let on_expire = props.on_expire.clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                // Dropping the handle on cleanup cancels the timer when a
                // newer notice takes the slot.
                let handle = notice.as_ref().map(|notice| {
                    let seq = notice.seq;
                    Timeout::new(expiry_ms, move || on_expire.emit(seq))
                });
                move || drop(handle)
            },
            notice,
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };
    let kind = match notice.kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
        NoticeKind::Info => "info",
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("notice-host", props.class.clone())} aria-live="polite" aria-atomic="true">
            <div class={classes!("notice", kind)} role="status">
                <span>{notice.message.clone()}</span>
                <button class="ghost" aria-label={bundle.text("common.close", "Close")} onclick={on_close}>{"✕"}</button>
            </div>
        </div>
    }
}
