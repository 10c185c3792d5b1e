//! Poetry admin page: active/trash tabs, category filter, row actions.
//!
//! # Design
//! - One collection controller; the trash tab is just a `view` filter.
//! - Trash and purge go through the confirm dialog; the other actions fire
//!   straight away.
//! - Category filter options load once per mount outside the controller.

use std::rc::Rc;

use gloo::console;
use risalo_api_models::{CategorySummary, PoetryPatch, PoetrySummary};
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::hooks::{CollectionHandle, use_collection, use_slot};
use crate::components::confirm::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::notice_host::NoticeHost;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::core::collection::MutationSet;
use crate::core::display::{display_field, format_day, poetry_title};
use crate::core::notice::{NoticeKind, NoticeSlot};
use crate::core::query::ListQuery;
use crate::features::poetry::actions::{PoetryAction, success_message};
use crate::features::poetry::api::{create_poetry, patch_poetry, purge_poetry, trash_poetry};
use crate::features::poetry::logic::{duplicate_payload, poet_names};
use crate::features::poetry::state::PoetryView;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::api::{ApiClient, ApiError};

#[function_component(PoetryPage)]
pub(crate) fn poetry_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let locale = bundle.locale;

    let poetry = use_collection::<PoetrySummary>(
        "poetry",
        ListQuery::new("created_at", 20).with_filter("view", PoetryView::Active.as_value()),
    );
    let busy = use_slot::<MutationSet>();
    let notices = use_slot::<NoticeSlot>();
    let pending = use_state(|| None as Option<(PoetrySummary, PoetryAction)>);
    let category_options = use_state(Vec::<CategorySummary>::new);
    let api_ctx = use_context::<ApiCtx>();

    {
        let api_ctx = api_ctx.clone();
        let category_options = category_options.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api_ctx {
                    let client = Rc::clone(&api.client);
                    let category_options = category_options.clone();
                    yew::platform::spawn_local(async move {
                        match client
                            .fetch_page::<CategorySummary>(
                                "categories",
                                "page=1&limit=100&sortBy=sindhi_name&sortOrder=asc",
                            )
                            .await
                        {
                            Ok(page) => category_options.set(page.items),
                            Err(err) => {
                                console::error!("category filter load failed", err.to_string());
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let view = PoetryView::from_value(poetry.query().filter("view"));

    let on_action = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let poetry = poetry.clone();
        let busy = busy.clone();
        let notices = notices.clone();
        let pending = pending.clone();
        Callback::from(move |(row, action): (PoetrySummary, PoetryAction)| {
            if matches!(
                action,
                PoetryAction::MoveToTrash | PoetryAction::DeleteForever
            ) {
                pending.set(Some((row, action)));
                return;
            }
            let id = row.id;
            let title = poetry_title(&row, locale).to_string();
            if !busy.mutate(|set| set.begin(id)) {
                return;
            }
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let poetry = poetry.clone();
            let busy = busy.clone();
            let notices = notices.clone();
            yew::platform::spawn_local(async move {
                match run_row_action(&client, &poetry, &row, &action).await {
                    Ok(()) => {
                        let message = success_message(&bundle, &action, &title);
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Success, message);
                        });
                    }
                    Err(err) => {
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Error, format!("{title}: {err}"));
                        });
                    }
                }
                busy.mutate(|set| set.finish(id));
            });
        })
    };

    let on_confirm = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let poetry = poetry.clone();
        let busy = busy.clone();
        let notices = notices.clone();
        let pending = pending.clone();
        Callback::from(move |()| {
            let Some((row, action)) = (*pending).clone() else {
                return;
            };
            pending.set(None);
            let id = row.id;
            if !busy.mutate(|set| set.begin(id)) {
                return;
            }
            let title = poetry_title(&row, locale).to_string();
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let poetry = poetry.clone();
            let busy = busy.clone();
            let notices = notices.clone();
            yew::platform::spawn_local(async move {
                match run_row_action(&client, &poetry, &row, &action).await {
                    Ok(()) => {
                        let message = success_message(&bundle, &action, &title);
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Success, message);
                        });
                    }
                    Err(err) => {
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Error, format!("{title}: {err}"));
                        });
                    }
                }
                busy.mutate(|set| set.finish(id));
            });
        })
    };
    let on_cancel_confirm = {
        let pending = pending.clone();
        Callback::from(move |()| pending.set(None))
    };

    let on_echo = {
        let poetry = poetry.clone();
        Callback::from(move |text: String| poetry.echo_search(text))
    };
    let on_search = {
        let poetry = poetry.clone();
        Callback::from(move |text: String| poetry.commit_search(&text))
    };
    let on_page = {
        let poetry = poetry.clone();
        Callback::from(move |page: u32| poetry.set_page(page))
    };
    let on_category_filter = {
        let poetry = poetry.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                poetry.set_filter("category", select.value());
            }
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

    let sort_header = |key: &'static str, label: String| {
        let marker = poetry.query().sort_marker(key);
        let poetry = poetry.clone();
        html! {
            <th>
                <button class="th-sort" onclick={Callback::from(move |_| poetry.toggle_sort(key))}>
                    {label}{marker}
                </button>
            </th>
        }
    };

    let date_key: &'static str = if view == PoetryView::Trash {
        "deleted_at"
    } else {
        "created_at"
    };
    let date_label = if view == PoetryView::Trash {
        t("poetry.deleted_on")
    } else {
        t("common.created")
    };

    let state = poetry.state();
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
                        <th>{t("poetry.work")}</th>
                        <th>{t("poetry.poets")}</th>
                        <th>{t("poetry.category")}</th>
                        {sort_header("couplet_count", t("poetry.couplets"))}
                        {sort_header(date_key, date_label)}
                        <th>{t("common.actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    {for state.items.iter().map(|row| {
                        let is_busy = busy.read().contains(row.id);
                        let category_name = row.category.as_ref().map_or_else(
                            || "\u{2013}".to_string(),
                            |category| display_field(category, locale).to_string(),
                        );
                        let day = if view == PoetryView::Trash {
                            format_day(row.deleted_at)
                        } else {
                            format_day(row.created_at)
                        };
                        let act = |action: PoetryAction| {
                            let on_action = on_action.clone();
                            let row = row.clone();
                            Callback::from(move |_| on_action.emit((row.clone(), action.clone())))
                        };
                        let buttons = if view == PoetryView::Trash {
                            html! {
                                <>
                                    <button
                                        class="btn btn-ghost btn-sm"
                                        disabled={is_busy}
                                        onclick={act(PoetryAction::Restore)}
                                    >
                                        {t("poetry.restore")}
                                    </button>
                                    <button
                                        class="btn btn-danger btn-sm"
                                        disabled={is_busy}
                                        onclick={act(PoetryAction::DeleteForever)}
                                    >
                                        {t("poetry.delete_forever")}
                                    </button>
                                </>
                            }
                        } else {
                            html! {
                                <>
                                    <button
                                        class={classes!("btn", "btn-ghost", "btn-sm", row.is_featured.then_some("active"))}
                                        disabled={is_busy}
                                        onclick={act(PoetryAction::ToggleFeatured { on: !row.is_featured })}
                                    >
                                        {t("common.featured")}
                                    </button>
                                    <button
                                        class="btn btn-ghost btn-sm"
                                        disabled={is_busy}
                                        onclick={act(PoetryAction::Duplicate)}
                                    >
                                        {t("poetry.duplicate")}
                                    </button>
                                    <button
                                        class="btn btn-danger btn-sm"
                                        disabled={is_busy}
                                        onclick={act(PoetryAction::MoveToTrash)}
                                    >
                                        {t("poetry.move_to_trash")}
                                    </button>
                                </>
                            }
                        };
                        html! {
                            <tr key={row.id}>
                                <td>
                                    <strong>{poetry_title(row, locale).to_string()}</strong>
                                    <span class="muted slug">{row.slug.clone()}</span>
                                </td>
                                <td>{poet_names(row, locale)}</td>
                                <td>{category_name}</td>
                                <td class="num">{row.couplet_count}</td>
                                <td>{day}</td>
                                <td class="row-actions">{buttons}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        }
    };

    let confirm_body = match pending.as_ref() {
        Some((_, PoetryAction::DeleteForever)) => t("confirm.purge_poetry"),
        _ => t("confirm.trash_poetry"),
    };
    let confirm_label = match pending.as_ref() {
        Some((_, PoetryAction::DeleteForever)) => t("poetry.delete_forever"),
        _ => t("poetry.move_to_trash"),
    };

    html! {
        <section class="poetry-page">
            <NoticeHost notice={notice} on_expire={on_expire} on_dismiss={on_dismiss} />
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <h3>{t("poetry.title")}</h3>
                        <span class="pill subtle">{state.total}</span>
                    </div>
                    <div class="panel-tools">
                        <SearchInput
                            value={AttrValue::from(poetry.query().search_input.clone())}
                            placeholder={AttrValue::from(t("common.search_hint"))}
                            aria_label={AttrValue::from(t("common.search"))}
                            on_input={on_echo}
                            on_search={on_search}
                        />
                    </div>
                </div>
                <div class="panel-filters">
                    <div class="tab-row">
                        {for PoetryView::all().iter().map(|tab| {
                            let is_current = *tab == view;
                            let on_select = {
                                let poetry = poetry.clone();
                                let tab = *tab;
                                Callback::from(move |_| {
                                    poetry.set_filter("view", tab.as_value().to_string());
                                })
                            };
                            html! {
                                <button
                                    class={classes!("tab", is_current.then_some("active"))}
                                    onclick={on_select}
                                >
                                    {t(tab.label_key())}
                                </button>
                            }
                        })}
                    </div>
                    <select
                        class="filter-select"
                        value={poetry.query().filter("category").to_string()}
                        onchange={on_category_filter}
                    >
                        <option value="" selected={poetry.query().filter("category").is_empty()}>
                            {t("poetry.all_categories")}
                        </option>
                        {for category_options.iter().map(|category| {
                            let value = category.id.to_string();
                            let selected = poetry.query().filter("category") == value;
                            html! {
                                <option value={value.clone()} selected={selected}>
                                    {display_field(category, locale).to_string()}
                                </option>
                            }
                        })}
                    </select>
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
                    page={poetry.query().page}
                    total_pages={state.total_pages}
                    on_navigate={on_page}
                />
            </div>
            <ConfirmDialog
                open={pending.is_some()}
                title={AttrValue::from(t("confirm.title"))}
                body={AttrValue::from(confirm_body)}
                confirm_label={AttrValue::from(confirm_label)}
                cancel_label={AttrValue::from(t("common.cancel"))}
                danger={true}
                on_confirm={on_confirm}
                on_cancel={on_cancel_confirm}
            />
        </section>
    }
}

// One reconciliation rule per action; confirm routing upstream decides when
// this runs, not whether.
async fn run_row_action(
    client: &ApiClient,
    poetry: &CollectionHandle<PoetrySummary>,
    row: &PoetrySummary,
    action: &PoetryAction,
) -> Result<(), ApiError> {
    match action {
        PoetryAction::ToggleFeatured { on } => {
            let patch = PoetryPatch {
                is_featured: Some(*on),
                deleted_at: None,
            };
            let updated = patch_poetry(client, row.id, &patch).await?;
            poetry.replace_row(updated);
        }
        PoetryAction::MoveToTrash => {
            trash_poetry(client, row.id).await?;
            poetry.remove_row(row.id);
        }
        PoetryAction::Restore => {
            let patch = PoetryPatch {
                is_featured: None,
                deleted_at: Some(None),
            };
            patch_poetry(client, row.id, &patch).await?;
            // The restored row no longer belongs to the trash slice on screen.
            poetry.remove_row(row.id);
        }
        PoetryAction::DeleteForever => {
            purge_poetry(client, row.id).await?;
            poetry.remove_row(row.id);
        }
        PoetryAction::Duplicate => {
            create_poetry(client, &duplicate_payload(row)).await?;
            // The copy's position depends on server ordering.
            poetry.refetch();
        }
    }
    Ok(())
}
