//! Poet-tag admin page: sortable table with an inline quick-add row.

use std::rc::Rc;

use risalo_api_models::{PoetTag, TagPatch};
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::hooks::{use_collection, use_slot};
use crate::components::confirm::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::notice_host::NoticeHost;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::core::collection::MutationSet;
use crate::core::display::display_field;
use crate::core::notice::{NoticeKind, NoticeSlot};
use crate::core::query::ListQuery;
use crate::features::tags::api::{create_tag, delete_tag, patch_tag};
use crate::features::tags::state::TagFormState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

#[function_component(TagsPage)]
pub(crate) fn tags_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let locale = bundle.locale;

    let tags = use_collection::<PoetTag>("tags", ListQuery::new("sindhi_label", 20));
    let busy = use_slot::<MutationSet>();
    let notices = use_slot::<NoticeSlot>();
    let form = use_state(TagFormState::default);
    let form_error = use_state(|| None as Option<String>);
    let saving = use_state(|| false);
    let pending_delete = use_state(|| None as Option<PoetTag>);
    let api_ctx = use_context::<ApiCtx>();

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_toggle_hidden = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let tags = tags.clone();
        let busy = busy.clone();
        let notices = notices.clone();
        Callback::from(move |row: PoetTag| {
            let id = row.id;
            if !busy.mutate(|set| set.begin(id)) {
                return;
            }
            let label = display_field(&row, locale).to_string();
            let hide = !row.is_hidden;
            let patch = TagPatch {
                is_hidden: Some(hide),
            };
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let tags = tags.clone();
            let busy = busy.clone();
            let notices = notices.clone();
            yew::platform::spawn_local(async move {
                match patch_tag(&client, id, &patch).await {
                    Ok(updated) => {
                        tags.replace_row(updated);
                        let key = if hide { "notice.hidden_on" } else { "notice.hidden_off" };
                        let message = format!("{} {label}", bundle.text(key, ""));
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Success, message);
                        });
                    }
                    Err(err) => {
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Error, format!("{label}: {err}"));
                        });
                    }
                }
                busy.mutate(|set| set.finish(id));
            });
        })
    };

    let on_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |row: PoetTag| pending_delete.set(Some(row)))
    };
    let on_confirm_delete = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let tags = tags.clone();
        let busy = busy.clone();
        let notices = notices.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |()| {
            let Some(row) = (*pending_delete).clone() else {
                return;
            };
            pending_delete.set(None);
            let id = row.id;
            if !busy.mutate(|set| set.begin(id)) {
                return;
            }
            let label = display_field(&row, locale).to_string();
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let tags = tags.clone();
            let busy = busy.clone();
            let notices = notices.clone();
            yew::platform::spawn_local(async move {
                match delete_tag(&client, id).await {
                    Ok(()) => {
                        tags.remove_row(id);
                        let message = format!("{} {label}", bundle.text("notice.deleted", ""));
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Success, message);
                        });
                    }
                    Err(err) => {
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Error, format!("{label}: {err}"));
                        });
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

    let on_add = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let tags = tags.clone();
        let notices = notices.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
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
            let tags = tags.clone();
            let notices = notices.clone();
            let form = form.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            yew::platform::spawn_local(async move {
                match create_tag(&client, &body).await {
                    Ok(_) => {
                        form.set(TagFormState::default());
                        // Server ordering decides where the new tag lands.
                        tags.refetch();
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Success, bundle.text("notice.saved", ""));
                        });
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let on_echo = {
        let tags = tags.clone();
        Callback::from(move |text: String| tags.echo_search(text))
    };
    let on_search = {
        let tags = tags.clone();
        Callback::from(move |text: String| tags.commit_search(&text))
    };
    let on_page = {
        let tags = tags.clone();
        Callback::from(move |page: u32| tags.set_page(page))
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

    let sort_header = |key: &'static str, label: String| {
        let marker = tags.query().sort_marker(key);
        let tags = tags.clone();
        html! {
            <th>
                <button class="th-sort" onclick={Callback::from(move |_| tags.toggle_sort(key))}>
                    {label}{marker}
                </button>
            </th>
        }
    };

    let state = tags.state();
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
                        {sort_header("sindhi_label", t("common.name"))}
                        {sort_header("poet_count", t("tags.poets"))}
                        <th>{t("common.actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for state.items.iter().map(|row| {
                        let is_busy = busy.read().contains(row.id);
                        let hidden = {
                            let on_toggle_hidden = on_toggle_hidden.clone();
                            let row = row.clone();
                            Callback::from(move |_| on_toggle_hidden.emit(row.clone()))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let row = row.clone();
                            Callback::from(move |_| on_delete.emit(row.clone()))
                        };
                        html! {
                            <tr key={row.id}>
                                <td>
                                    <strong>{display_field(row, locale).to_string()}</strong>
                                    <span class="muted slug">{row.slug.clone()}</span>
                                </td>
                                <td class="num">{row.poet_count}</td>
                                <td class="row-actions">
                                    <button
                                        class={classes!("btn", "btn-ghost", "btn-sm", row.is_hidden.then_some("active"))}
                                        disabled={is_busy}
                                        onclick={hidden}
                                    >
                                        {if row.is_hidden { t("common.hidden") } else { t("common.visible") }}
                                    </button>
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
        <section class="tags-page">
            <NoticeHost notice={notice} on_expire={on_expire} on_dismiss={on_dismiss} />
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <h3>{t("tags.title")}</h3>
                        <span class="pill subtle">{state.total}</span>
                    </div>
                    <div class="panel-tools">
                        <SearchInput
                            value={AttrValue::from(tags.query().search_input.clone())}
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
                        placeholder={t("common.slug")}
                        value={form.slug.clone()}
                        oninput={{
                            let form = form.clone();
                            Callback::from(move |event: InputEvent| {
                                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                    update_form(&form, |state| state.slug = input.value());
                                }
                            })
                        }}
                    />
                    <input
                        type="text"
                        dir="rtl"
                        placeholder={t("tags.sindhi_label")}
                        value={form.sindhi_label.clone()}
                        oninput={{
                            let form = form.clone();
                            Callback::from(move |event: InputEvent| {
                                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                    update_form(&form, |state| state.sindhi_label = input.value());
                                }
                            })
                        }}
                    />
                    <input
                        type="text"
                        dir="ltr"
                        placeholder={t("tags.english_label")}
                        value={form.english_label.clone()}
                        oninput={{
                            let form = form.clone();
                            Callback::from(move |event: InputEvent| {
                                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                    update_form(&form, |state| state.english_label = input.value());
                                }
                            })
                        }}
                    />
                    <button
                        class="btn btn-primary btn-sm"
                        onclick={on_add}
                        disabled={*saving || form.is_empty()}
                    >
                        {if *saving { t("common.saving") } else { t("tags.new") }}
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
                    page={tags.query().page}
                    total_pages={state.total_pages}
                    on_navigate={on_page}
                />
            </div>
            <ConfirmDialog
                open={pending_delete.is_some()}
                title={AttrValue::from(t("confirm.title"))}
                body={AttrValue::from(t("confirm.delete_tag"))}
                confirm_label={AttrValue::from(t("common.delete"))}
                cancel_label={AttrValue::from(t("common.cancel"))}
                danger={true}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </section>
    }
}

fn update_form(form: &UseStateHandle<TagFormState>, update: impl FnOnce(&mut TagFormState)) {
    let mut next = (**form).clone();
    update(&mut next);
    form.set(next);
}
