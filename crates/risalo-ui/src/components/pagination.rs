//! Windowed pagination strip.
//!
//! Renders up to six page numbers around the current page, step controls on
//! both ends and jump-by-six controls that appear once the reader is more
//! than a window away from an edge. Window maths lives in
//! [`crate::core::pager`].

use crate::core::pager::page_window;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    #[prop_or(1)]
    pub page: u32,
    #[prop_or(1)]
    pub total_pages: u32,
    #[prop_or(6)]
    pub window: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_navigate: Callback<u32>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let window = page_window(props.page, props.total_pages, props.window);
    let current = props.page.clamp(1, props.total_pages.max(1));

    if props.total_pages <= 1 {
        return html! {};
    }

    let go_to = |target: u32| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(target))
    };

    html! {
        <nav class={classes!("pagination", props.class.clone())} aria-label={t("pager.page")}>
            {window.jump_back.map(|target| html! {
                <button class="pager-jump" aria-label={t("pager.back_six")} onclick={go_to(target)}>{"««"}</button>
            }).unwrap_or_default()}
            <button
                class="pager-step"
                aria-label={t("pager.prev")}
                disabled={!window.prev_enabled}
                onclick={go_to(current.saturating_sub(1).max(1))}>
                {"«"}
            </button>
            {for window.pages.iter().map(|&number| {
                let active = number == current;
                html! {
                    <button
                        class={classes!("pager-page", active.then_some("active"))}
                        aria-current={active.then_some("page")}
                        disabled={active}
                        onclick={go_to(number)}>
                        {number}
                    </button>
                }
            })}
            <button
                class="pager-step"
                aria-label={t("pager.next")}
                disabled={!window.next_enabled}
                onclick={go_to((current + 1).min(props.total_pages.max(1)))}>
                {"»"}
            </button>
            {window.jump_forward.map(|target| html! {
                <button class="pager-jump" aria-label={t("pager.ahead_six")} onclick={go_to(target)}>{"»»"}</button>
            }).unwrap_or_default()}
        </nav>
    }
}
