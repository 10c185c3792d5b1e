//! Category admin page: sortable table, editor panel, row actions.
//!
//! # Design
//! - Keep API calls in the page controller; the table only emits actions.
//! - Toggles confirm against the server before the row changes.
//! - One notice slot per page; a newer notice replaces the older one.

use std::rc::Rc;

use risalo_api_models::{CategoryPatch, CategorySummary};
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::hooks::{use_collection, use_slot};
use crate::components::confirm::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::notice_host::NoticeHost;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::core::collection::MutationSet;
use crate::core::display::{display_field, format_day};
use crate::core::notice::{NoticeKind, NoticeSlot};
use crate::core::query::ListQuery;
use crate::features::categories::actions::{CategoryAction, success_message};
use crate::features::categories::api::{
    create_category, delete_category, patch_category, update_category,
};
use crate::features::categories::logic::{style_from_value, style_label_key, style_value};
use crate::features::categories::state::CategoryFormState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

#[function_component(CategoriesPage)]
pub(crate) fn categories_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let locale = bundle.locale;

    let categories =
        use_collection::<CategorySummary>("categories", ListQuery::new("sindhi_name", 20));
    let busy = use_slot::<MutationSet>();
    let notices = use_slot::<NoticeSlot>();
    let editor = use_state(|| None as Option<CategoryFormState>);
    let form_error = use_state(|| None as Option<String>);
    let saving = use_state(|| false);
    let pending_delete = use_state(|| None as Option<CategorySummary>);
    let api_ctx = use_context::<ApiCtx>();

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_action = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let categories = categories.clone();
        let busy = busy.clone();
        let notices = notices.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |(row, action): (CategorySummary, CategoryAction)| {
            let id = row.id;
            let name = display_field(&row, locale).to_string();
            let patch = match &action {
                CategoryAction::Delete => {
                    pending_delete.set(Some(row));
                    return;
                }
                CategoryAction::ToggleFeatured { on } => CategoryPatch {
                    is_featured: Some(*on),
                    is_hidden: None,
                },
                CategoryAction::ToggleHidden { on } => CategoryPatch {
                    is_featured: None,
                    is_hidden: Some(*on),
                },
            };
            if !busy.mutate(|set| set.begin(id)) {
                return;
            }
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let categories = categories.clone();
            let busy = busy.clone();
            let notices = notices.clone();
            yew::platform::spawn_local(async move {
                match patch_category(&client, id, &patch).await {
                    Ok(updated) => {
                        categories.replace_row(updated);
                        let message = success_message(&bundle, &action, &name);
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Success, message);
                        });
                    }
                    Err(err) => {
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Error, format!("{name}: {err}"));
                        });
                    }
                }
                busy.mutate(|set| set.finish(id));
            });
        })
    };

    let on_confirm_delete = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let categories = categories.clone();
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
            let name = display_field(&row, locale).to_string();
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let categories = categories.clone();
            let busy = busy.clone();
            let notices = notices.clone();
            yew::platform::spawn_local(async move {
                match delete_category(&client, id).await {
                    Ok(()) => {
                        categories.remove_row(id);
                        let message = success_message(&bundle, &CategoryAction::Delete, &name);
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Success, message);
                        });
                    }
                    Err(err) => {
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Error, format!("{name}: {err}"));
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

    let on_new = {
        let editor = editor.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            editor.set(Some(CategoryFormState::default()));
            form_error.set(None);
        })
    };
    let on_edit = {
        let editor = editor.clone();
        let form_error = form_error.clone();
        Callback::from(move |row: CategorySummary| {
            editor.set(Some(CategoryFormState::from_row(&row)));
            form_error.set(None);
        })
    };
    let on_cancel_edit = {
        let editor = editor.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            editor.set(None);
            form_error.set(None);
        })
    };
    let on_save = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let categories = categories.clone();
        let notices = notices.clone();
        let editor = editor.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let Some(form) = (*editor).clone() else {
                return;
            };
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
            let categories = categories.clone();
            let notices = notices.clone();
            let editor = editor.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            yew::platform::spawn_local(async move {
                let result = match form.id {
                    Some(id) => update_category(&client, id, &body).await,
                    None => create_category(&client, &body).await,
                };
                match result {
                    Ok(saved) => {
                        if form.id.is_some() {
                            categories.replace_row(saved);
                        } else {
                            // Server ordering decides where a new row lands.
                            categories.refetch();
                        }
                        editor.set(None);
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
        let categories = categories.clone();
        Callback::from(move |text: String| categories.echo_search(text))
    };
    let on_search = {
        let categories = categories.clone();
        Callback::from(move |text: String| categories.commit_search(&text))
    };
    let on_page = {
        let categories = categories.clone();
        Callback::from(move |page: u32| categories.set_page(page))
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
        let marker = categories.query().sort_marker(key);
        let categories = categories.clone();
        html! {
            <th>
                <button
                    class="th-sort"
                    onclick={Callback::from(move |_| categories.toggle_sort(key))}
                >
                    {label}{marker}
                </button>
            </th>
        }
    };

    let state = categories.state();
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
                        {sort_header("sindhi_name", t("common.name"))}
                        <th>{t("categories.style")}</th>
                        {sort_header("couplet_count", t("categories.couplets"))}
                        {sort_header("created_at", t("common.created"))}
                        <th>{t("common.actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for state.items.iter().map(|row| {
                        let is_busy = busy.read().contains(row.id);
                        let featured = {
                            let on_action = on_action.clone();
                            let row = row.clone();
                            Callback::from(move |_| {
                                on_action.emit((
                                    row.clone(),
                                    CategoryAction::ToggleFeatured { on: !row.is_featured },
                                ));
                            })
                        };
                        let hidden = {
                            let on_action = on_action.clone();
                            let row = row.clone();
                            Callback::from(move |_| {
                                on_action.emit((
                                    row.clone(),
                                    CategoryAction::ToggleHidden { on: !row.is_hidden },
                                ));
                            })
                        };
                        let delete = {
                            let on_action = on_action.clone();
                            let row = row.clone();
                            Callback::from(move |_| {
                                on_action.emit((row.clone(), CategoryAction::Delete));
                            })
                        };
                        let edit = {
                            let on_edit = on_edit.clone();
                            let row = row.clone();
                            Callback::from(move |_| on_edit.emit(row.clone()))
                        };
                        html! {
                            <tr key={row.id}>
                                <td>
                                    <strong>{display_field(row, locale).to_string()}</strong>
                                    <span class="muted slug">{row.slug.clone()}</span>
                                </td>
                                <td>{t(style_label_key(row.content_style))}</td>
                                <td class="num">{row.couplet_count}</td>
                                <td>{format_day(row.created_at)}</td>
                                <td class="row-actions">
                                    <button
                                        class={classes!("btn", "btn-ghost", "btn-sm", row.is_featured.then_some("active"))}
                                        disabled={is_busy}
                                        onclick={featured}
                                    >
                                        {t("common.featured")}
                                    </button>
                                    <button
                                        class={classes!("btn", "btn-ghost", "btn-sm", row.is_hidden.then_some("active"))}
                                        disabled={is_busy}
                                        onclick={hidden}
                                    >
                                        {if row.is_hidden { t("common.hidden") } else { t("common.visible") }}
                                    </button>
                                    <button class="btn btn-ghost btn-sm" disabled={is_busy} onclick={edit}>
                                        {t("common.edit")}
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
        <section class="categories-page">
            <NoticeHost notice={notice} on_expire={on_expire} on_dismiss={on_dismiss} />
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <h3>{t("categories.title")}</h3>
                        <span class="pill subtle">{state.total}</span>
                    </div>
                    <div class="panel-tools">
                        <SearchInput
                            value={AttrValue::from(categories.query().search_input.clone())}
                            placeholder={AttrValue::from(t("common.search_hint"))}
                            aria_label={AttrValue::from(t("common.search"))}
                            on_input={on_echo}
                            on_search={on_search}
                        />
                        <button class="btn btn-primary btn-sm" onclick={on_new}>
                            {t("categories.new")}
                        </button>
                    </div>
                </div>
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
                    page={categories.query().page}
                    total_pages={state.total_pages}
                    on_navigate={on_page}
                />
            </div>
            {if let Some(form) = editor.as_ref() {
                let title = if form.is_editing() { t("categories.edit") } else { t("categories.new") };
                html! {
                    <div class="panel editor">
                        <div class="panel-subhead">
                            <strong>{title}</strong>
                        </div>
                        <div class="stacked">
                            <label class="stack">
                                <span>{t("common.slug")}</span>
                                <input
                                    type="text"
                                    value={form.slug.clone()}
                                    oninput={{
                                        let editor = editor.clone();
                                        Callback::from(move |event: InputEvent| {
                                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                                update_form(&editor, |state| state.slug = input.value());
                                            }
                                        })
                                    }}
                                />
                            </label>
                            <label class="stack">
                                <span>{t("categories.sindhi_name")}</span>
                                <input
                                    type="text"
                                    dir="rtl"
                                    value={form.sindhi_name.clone()}
                                    oninput={{
                                        let editor = editor.clone();
                                        Callback::from(move |event: InputEvent| {
                                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                                update_form(&editor, |state| state.sindhi_name = input.value());
                                            }
                                        })
                                    }}
                                />
                            </label>
                            <label class="stack">
                                <span>{t("categories.english_name")}</span>
                                <input
                                    type="text"
                                    dir="ltr"
                                    value={form.english_name.clone()}
                                    oninput={{
                                        let editor = editor.clone();
                                        Callback::from(move |event: InputEvent| {
                                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                                update_form(&editor, |state| state.english_name = input.value());
                                            }
                                        })
                                    }}
                                />
                            </label>
                            <label class="stack">
                                <span>{t("categories.style")}</span>
                                <select
                                    value={style_value(form.content_style)}
                                    onchange={{
                                        let editor = editor.clone();
                                        Callback::from(move |event: Event| {
                                            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                                                let next = style_from_value(&select.value());
                                                update_form(&editor, |state| state.content_style = next);
                                            }
                                        })
                                    }}
                                >
                                    <option value="couplet">{t("categories.style_couplet")}</option>
                                    <option value="stanza">{t("categories.style_stanza")}</option>
                                    <option value="story">{t("categories.style_story")}</option>
                                </select>
                            </label>
                            <label class="stack toggle-row">
                                <span>{t("common.featured")}</span>
                                <input
                                    type="checkbox"
                                    checked={form.is_featured}
                                    onchange={{
                                        let editor = editor.clone();
                                        Callback::from(move |event: Event| {
                                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                                let checked = input.checked();
                                                update_form(&editor, |state| state.is_featured = checked);
                                            }
                                        })
                                    }}
                                />
                            </label>
                            <label class="stack toggle-row">
                                <span>{t("common.hidden")}</span>
                                <input
                                    type="checkbox"
                                    checked={form.is_hidden}
                                    onchange={{
                                        let editor = editor.clone();
                                        Callback::from(move |event: Event| {
                                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                                let checked = input.checked();
                                                update_form(&editor, |state| state.is_hidden = checked);
                                            }
                                        })
                                    }}
                                />
                            </label>
                        </div>
                        {if let Some(message) = form_error.as_ref() {
                            html! { <p class="text-sm text-error">{message.clone()}</p> }
                        } else { html! {} }}
                        <div class="actions">
                            <button class="btn btn-primary btn-sm" onclick={on_save} disabled={*saving}>
                                {if *saving { t("common.saving") } else { t("common.save") }}
                            </button>
                            <button class="btn btn-ghost btn-sm" onclick={on_cancel_edit} disabled={*saving}>
                                {t("common.cancel")}
                            </button>
                        </div>
                    </div>
                }
            } else { html! {} }}
            <ConfirmDialog
                open={pending_delete.is_some()}
                title={AttrValue::from(t("confirm.title"))}
                body={AttrValue::from(t("confirm.delete_category"))}
                confirm_label={AttrValue::from(t("common.delete"))}
                cancel_label={AttrValue::from(t("common.cancel"))}
                danger={true}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </section>
    }
}

fn update_form(
    editor: &UseStateHandle<Option<CategoryFormState>>,
    update: impl FnOnce(&mut CategoryFormState),
) {
    if let Some(mut next) = (**editor).clone() {
        update(&mut next);
        editor.set(Some(next));
    }
}
