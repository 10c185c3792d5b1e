//! Romaniser admin page: lexicon and spelling-rule panels.
//!
//! # Design
//! - Each panel owns its controller, busy set and confirm dialog; the page
//!   owns the notice slot and hands the panels a notify callback.

use std::rc::Rc;

use risalo_api_models::{HesudharEntry, RomanWordEntry};
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::hooks::{use_collection, use_slot};
use crate::components::confirm::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::notice_host::NoticeHost;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::core::collection::MutationSet;
use crate::core::notice::{NoticeKind, NoticeSlot};
use crate::core::query::ListQuery;
use crate::features::romanizer::api::{create_rule, create_word, delete_rule, delete_word};
use crate::features::romanizer::state::{RuleFormState, WordFormState};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

#[function_component(RomanizerPage)]
pub(crate) fn romanizer_page() -> Html {
    let notices = use_slot::<NoticeSlot>();

    let on_notice = {
        let notices = notices.clone();
        Callback::from(move |(kind, message): (NoticeKind, String)| {
            notices.mutate(|slot| {
                slot.push(kind, message);
            });
        })
    };
    let notice = notices.read().current().cloned();
    let on_expire = {
        let notices = notices.clone();
        Callback::from(move |seq: u64| {
            notices.mutate(|slot| {
                slot.expire(seq);
            });
        })
    };
    let on_dismiss = {
        let notices = notices.clone();
        Callback::from(move |()| notices.mutate(NoticeSlot::dismiss))
    };

    html! {
        <section class="romanizer-page">
            <NoticeHost notice={notice} on_expire={on_expire} on_dismiss={on_dismiss} />
            <div class="split">
                <WordsPanel on_notice={on_notice.clone()} />
                <RulesPanel on_notice={on_notice} />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    on_notice: Callback<(NoticeKind, String)>,
}

#[function_component(WordsPanel)]
fn words_panel(props: &PanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    let words = use_collection::<RomanWordEntry>("romanizer/words", ListQuery::new("word_sd", 15));
    let busy = use_slot::<MutationSet>();
    let form = use_state(WordFormState::default);
    let form_error = use_state(|| None as Option<String>);
    let saving = use_state(|| false);
    let pending_delete = use_state(|| None as Option<RomanWordEntry>);
    let api_ctx = use_context::<ApiCtx>();

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_add = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let words = words.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            let body = match form.to_upsert() {
                Ok(body) => body,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);
            saving.set(true);
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let words = words.clone();
            let form = form.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let on_notice = on_notice.clone();
            yew::platform::spawn_local(async move {
                match create_word(&client, &body).await {
                    Ok(_) => {
                        form.set(WordFormState::default());
                        words.refetch();
                        on_notice.emit((NoticeKind::Success, bundle.text("notice.saved", "")));
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |row: RomanWordEntry| pending_delete.set(Some(row)))
    };
    let on_confirm_delete = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let words = words.clone();
        let busy = busy.clone();
        let pending_delete = pending_delete.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |()| {
            let Some(row) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);
            let id = row.id;
            if !busy.mutate(|set| set.begin(id)) {
                return;
            }
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let words = words.clone();
            let busy = busy.clone();
            let on_notice = on_notice.clone();
            yew::platform::spawn_local(async move {
                match delete_word(&client, id).await {
                    Ok(()) => {
                        words.remove_row(id);
                        let message =
                            format!("{} {}", bundle.text("notice.deleted", ""), row.word_sd);
                        on_notice.emit((NoticeKind::Success, message));
                    }
                    Err(err) => {
                        on_notice.emit((NoticeKind::Error, format!("{}: {err}", row.word_sd)));
                    }
                }
                busy.mutate(|set| set.finish(id));
            });
        })
    };
    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |()| pending_delete.set(None))
    };

    let on_echo = {
        let words = words.clone();
        Callback::from(move |text: String| words.echo_search(text))
    };
    let on_search = {
        let words = words.clone();
        Callback::from(move |text: String| words.commit_search(&text))
    };
    let on_page = {
        let words = words.clone();
        Callback::from(move |page: u32| words.set_page(page))
    };

    let state = words.state();
    let table = if state.items.is_empty() {
        if state.loading {
            html! { <p class="muted">{t("common.loading")}</p> }
        } else {
            html! { <EmptyState title={AttrValue::from(t("common.empty"))} /> }
        }
    } else {
        html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{t("romanizer.word_sd")}</th>
                        <th>{t("romanizer.word_roman")}</th>
                        <th>{t("common.actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for state.items.iter().map(|row| {
                        let is_busy = busy.read().contains(row.id);
                        let delete = {
                            let on_delete = on_delete.clone();
                            let row = row.clone();
                            Callback::from(move |_| on_delete.emit(row.clone()))
                        };
                        html! {
                            <tr key={row.id}>
                                <td dir="rtl">{row.word_sd.clone()}</td>
                                <td dir="ltr">{row.word_roman.clone()}</td>
                                <td class="row-actions">
                                    <button class="btn btn-danger btn-sm" disabled={is_busy} onclick={delete}>
                                        {t("common.delete")}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        }
    };

    html! {
        <div class="panel">
            <div class="panel-head">
                <div>
                    <h3>{t("romanizer.words")}</h3>
                    <span class="pill subtle">{state.total}</span>
                </div>
                <div class="panel-tools">
                    <SearchInput
                        value={AttrValue::from(words.query().search_input.clone())}
                        placeholder={AttrValue::from(t("common.search_hint"))}
                        aria_label={AttrValue::from(t("common.search"))}
                        on_input={on_echo}
                        on_search={on_search}
                    />
                </div>
            </div>
            <div class="quick-add">
                <input
                    type="text"
                    dir="rtl"
                    placeholder={t("romanizer.word_sd")}
                    value={form.word_sd.clone()}
                    oninput={{
                        let form = form.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                let mut next = (*form).clone();
                                next.word_sd = input.value();
                                form.set(next);
                            }
                        })
                    }}
                />
                <input
                    type="text"
                    dir="ltr"
                    placeholder={t("romanizer.word_roman")}
                    value={form.word_roman.clone()}
                    oninput={{
                        let form = form.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                let mut next = (*form).clone();
                                next.word_roman = input.value();
                                form.set(next);
                            }
                        })
                    }}
                />
                <button class="btn btn-primary btn-sm" onclick={on_add} disabled={*saving}>
                    {if *saving { t("common.saving") } else { t("romanizer.add_word") }}
                </button>
            </div>
            {if let Some(message) = form_error.as_ref() {
                html! { <p class="text-sm text-error">{message.clone()}</p> }
            } else { html! {} }}
            {if let Some(message) = state.error.as_ref() {
                html! {
                    <div class="banner error">
                        <span>{format!("{}: {message}", t("common.error"))}</span>
                    </div>
                }
            } else {
                html! {}
            }}
            {table}
            <Pagination
                page={words.query().page}
                total_pages={state.total_pages}
                on_navigate={on_page}
            />
            <ConfirmDialog
                open={pending_delete.is_some()}
                title={AttrValue::from(t("confirm.title"))}
                body={AttrValue::from(t("confirm.delete_word"))}
                confirm_label={AttrValue::from(t("common.delete"))}
                cancel_label={AttrValue::from(t("common.cancel"))}
                danger={true}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </div>
    }
}

#[function_component(RulesPanel)]
fn rules_panel(props: &PanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    let rules =
        use_collection::<HesudharEntry>("romanizer/hesudhar", ListQuery::new("incorrect", 15));
    let busy = use_slot::<MutationSet>();
    let form = use_state(RuleFormState::default);
    let form_error = use_state(|| None as Option<String>);
    let saving = use_state(|| false);
    let pending_delete = use_state(|| None as Option<HesudharEntry>);
    let api_ctx = use_context::<ApiCtx>();

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_add = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let rules = rules.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            let body = match form.to_upsert() {
                Ok(body) => body,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);
            saving.set(true);
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let rules = rules.clone();
            let form = form.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let on_notice = on_notice.clone();
            yew::platform::spawn_local(async move {
                match create_rule(&client, &body).await {
                    Ok(_) => {
                        form.set(RuleFormState::default());
                        rules.refetch();
                        on_notice.emit((NoticeKind::Success, bundle.text("notice.saved", "")));
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |row: HesudharEntry| pending_delete.set(Some(row)))
    };
    let on_confirm_delete = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let rules = rules.clone();
        let busy = busy.clone();
        let pending_delete = pending_delete.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |()| {
            let Some(row) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);
            let id = row.id;
            if !busy.mutate(|set| set.begin(id)) {
                return;
            }
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let rules = rules.clone();
            let busy = busy.clone();
            let on_notice = on_notice.clone();
            yew::platform::spawn_local(async move {
                match delete_rule(&client, id).await {
                    Ok(()) => {
                        rules.remove_row(id);
                        let message =
                            format!("{} {}", bundle.text("notice.deleted", ""), row.incorrect);
                        on_notice.emit((NoticeKind::Success, message));
                    }
                    Err(err) => {
                        on_notice.emit((NoticeKind::Error, format!("{}: {err}", row.incorrect)));
                    }
                }
                busy.mutate(|set| set.finish(id));
            });
        })
    };
    let on_cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |()| pending_delete.set(None))
    };

    let on_echo = {
        let rules = rules.clone();
        Callback::from(move |text: String| rules.echo_search(text))
    };
    let on_search = {
        let rules = rules.clone();
        Callback::from(move |text: String| rules.commit_search(&text))
    };
    let on_page = {
        let rules = rules.clone();
        Callback::from(move |page: u32| rules.set_page(page))
    };

    let state = rules.state();
    let table = if state.items.is_empty() {
        if state.loading {
            html! { <p class="muted">{t("common.loading")}</p> }
        } else {
            html! { <EmptyState title={AttrValue::from(t("common.empty"))} /> }
        }
    } else {
        html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{t("romanizer.incorrect")}</th>
                        <th>{t("romanizer.correct")}</th>
                        <th>{t("common.actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for state.items.iter().map(|row| {
                        let is_busy = busy.read().contains(row.id);
                        let delete = {
                            let on_delete = on_delete.clone();
                            let row = row.clone();
                            Callback::from(move |_| on_delete.emit(row.clone()))
                        };
                        html! {
                            <tr key={row.id}>
                                <td dir="rtl">{row.incorrect.clone()}</td>
                                <td dir="rtl">{row.correct.clone()}</td>
                                <td class="row-actions">
                                    <button class="btn btn-danger btn-sm" disabled={is_busy} onclick={delete}>
                                        {t("common.delete")}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        }
    };

    html! {
        <div class="panel">
            <div class="panel-head">
                <div>
                    <h3>{t("romanizer.hesudhar")}</h3>
                    <span class="pill subtle">{state.total}</span>
                </div>
                <div class="panel-tools">
                    <SearchInput
                        value={AttrValue::from(rules.query().search_input.clone())}
                        placeholder={AttrValue::from(t("common.search_hint"))}
                        aria_label={AttrValue::from(t("common.search"))}
                        on_input={on_echo}
                        on_search={on_search}
                    />
                </div>
            </div>
            <div class="quick-add">
                <input
                    type="text"
                    dir="rtl"
                    placeholder={t("romanizer.incorrect")}
                    value={form.incorrect.clone()}
                    oninput={{
                        let form = form.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                let mut next = (*form).clone();
                                next.incorrect = input.value();
                                form.set(next);
                            }
                        })
                    }}
                />
                <input
                    type="text"
                    dir="rtl"
                    placeholder={t("romanizer.correct")}
                    value={form.correct.clone()}
                    oninput={{
                        let form = form.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                let mut next = (*form).clone();
                                next.correct = input.value();
                                form.set(next);
                            }
                        })
                    }}
                />
                <button class="btn btn-primary btn-sm" onclick={on_add} disabled={*saving}>
                    {if *saving { t("common.saving") } else { t("romanizer.add_rule") }}
                </button>
            </div>
            {if let Some(message) = form_error.as_ref() {
                html! { <p class="text-sm text-error">{message.clone()}</p> }
            } else { html! {} }}
            {if let Some(message) = state.error.as_ref() {
                html! {
                    <div class="banner error">
                        <span>{format!("{}: {message}", t("common.error"))}</span>
                    </div>
                }
            } else {
                html! {}
            }}
            {table}
            <Pagination
                page={rules.query().page}
                total_pages={state.total_pages}
                on_navigate={on_page}
            />
            <ConfirmDialog
                open={pending_delete.is_some()}
                title={AttrValue::from(t("confirm.title"))}
                body={AttrValue::from(t("confirm.delete_rule"))}
                confirm_label={AttrValue::from(t("common.delete"))}
                cancel_label={AttrValue::from(t("common.cancel"))}
                danger={true}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </div>
    }
}
