//! Public archive page: searchable, filterable couplet cards.

use std::rc::Rc;

use gloo::console;
use risalo_api_models::{CategorySummary, CoupletItem, SiteSettings, TimelineEra};
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::hooks::use_collection;
use crate::components::empty_state::EmptyState;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::core::display::display_field;
use crate::core::query::ListQuery;
use crate::features::archive::logic::{
    SORT_CHOICES, era_label, sample_couplets, sort_key_from_value,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

#[function_component(ArchivePage)]
pub(crate) fn archive_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let locale = bundle.locale;

    let couplets = use_collection::<CoupletItem>("couplets", ListQuery::new("created_at", 12));
    let show_romanized = use_state(|| true);
    let category_options = use_state(Vec::<CategorySummary>::new);
    let era_options = use_state(Vec::<TimelineEra>::new);
    let api_ctx = use_context::<ApiCtx>();

    {
        let api_ctx = api_ctx.clone();
        let couplets = couplets.clone();
        let show_romanized = show_romanized.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api_ctx {
                    let client = Rc::clone(&api.client);
                    yew::platform::spawn_local(async move {
                        match client.get_json::<SiteSettings>("/settings").await {
                            Ok(settings) => {
                                show_romanized.set(settings.show_romanized);
                                if settings.couplets_per_page != couplets.query().page_size {
                                    couplets.set_page_size(settings.couplets_per_page);
                                }
                            }
                            Err(err) => {
                                // Defaults stand when settings are unreachable.
                                console::error!("settings fetch failed", err.to_string());
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }
    {
        let api_ctx = api_ctx.clone();
        let category_options = category_options.clone();
        let era_options = era_options.clone();
        use_effect_with_deps(
            move |_| {
                // Filter options load once; a failure only costs a dropdown.
                if let Some(api) = api_ctx {
                    {
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
                    let client = Rc::clone(&api.client);
                    yew::platform::spawn_local(async move {
                        match client
                            .fetch_page::<TimelineEra>(
                                "eras",
                                "page=1&limit=50&sortBy=start_year&sortOrder=asc",
                            )
                            .await
                        {
                            Ok(page) => era_options.set(page.items),
                            Err(err) => {
                                console::error!("era filter load failed", err.to_string());
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let Some(_api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_echo = {
        let couplets = couplets.clone();
        Callback::from(move |text: String| couplets.echo_search(text))
    };
    let on_search = {
        let couplets = couplets.clone();
        Callback::from(move |text: String| couplets.commit_search(&text))
    };
    let on_category = {
        let couplets = couplets.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                couplets.set_filter("category", select.value());
            }
        })
    };
    let on_era = {
        let couplets = couplets.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                couplets.set_filter("era", select.value());
            }
        })
    };
    let on_sort = {
        let couplets = couplets.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                couplets.set_sort(sort_key_from_value(&select.value()));
            }
        })
    };
    let on_page_size = {
        let couplets = couplets.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Ok(size) = select.value().parse::<u32>() {
                    couplets.set_page_size(size);
                }
            }
        })
    };
    let on_page = {
        let couplets = couplets.clone();
        Callback::from(move |page: u32| couplets.set_page(page))
    };

    let likes_label = t("archive.likes");
    let views_label = t("archive.views");
    let render_couplet = |couplet: &CoupletItem| -> Html {
        let poet_name = couplet
            .poet
            .as_ref()
            .map(|poet| display_field(poet, locale).to_string());
        html! {
            <article class="couplet-card" key={couplet.id}>
                <div class="couplet-text" lang="sd" dir="rtl">
                    {for couplet.sindhi_text.lines().map(|line| html! { <p>{line.to_string()}</p> })}
                </div>
                {match couplet.roman_text.as_deref() {
                    Some(roman) if *show_romanized => html! {
                        <div class="couplet-roman" dir="ltr">
                            {for roman.lines().map(|line| html! { <p>{line.to_string()}</p> })}
                        </div>
                    },
                    _ => html! {},
                }}
                {match couplet.english_text.as_deref() {
                    Some(english) => html! { <p class="couplet-english" dir="ltr">{english.to_string()}</p> },
                    None => html! {},
                }}
                <footer class="couplet-meta">
                    {poet_name.map(|name| html! { <span class="poet">{name}</span> }).unwrap_or_default()}
                    <span class="stat">{format!("{likes_label}: {}", couplet.likes)}</span>
                    <span class="stat">{format!("{views_label}: {}", couplet.views)}</span>
                </footer>
            </article>
        }
    };

    let state = couplets.state();
    let showing_samples = state.error.is_some() && !state.has_loaded();
    let error_banner = match state.error.as_ref() {
        Some(message) if !showing_samples => html! {
            <div class="banner error">
                <span>{format!("{}: {message}", t("common.error"))}</span>
            </div>
        },
        _ => html! {},
    };
    let cards = if showing_samples {
        let samples = sample_couplets();
        html! {
            <>
                <div class="banner info"><span>{t("notice.samples")}</span></div>
                <div class="couplet-cards">
                    {for samples.iter().map(render_couplet)}
                </div>
            </>
        }
    } else if state.items.is_empty() {
        if state.loading {
            html! { <p class="muted">{t("common.loading")}</p> }
        } else {
            html! { <EmptyState title={AttrValue::from(t("common.empty"))} /> }
        }
    } else {
        html! {
            <div class="couplet-cards">
                {for state.items.iter().map(render_couplet)}
            </div>
        }
    };

    html! {
        <section class="archive-page">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <h3>{t("archive.title")}</h3>
                        <span class="pill subtle">{state.total}</span>
                    </div>
                    <div class="panel-tools">
                        <SearchInput
                            value={AttrValue::from(couplets.query().search_input.clone())}
                            placeholder={AttrValue::from(t("common.search_hint"))}
                            aria_label={AttrValue::from(t("common.search"))}
                            debounce_ms={500}
                            on_input={on_echo}
                            on_search={on_search}
                        />
                    </div>
                </div>
                <div class="panel-filters">
                    <label class="filter-select">
                        <span>{t("archive.category")}</span>
                        <select onchange={on_category}>
                            <option value="" selected={couplets.query().filter("category").is_empty()}>
                                {t("common.all")}
                            </option>
                            {for category_options.iter().map(|category| {
                                let value = category.id.to_string();
                                let selected = couplets.query().filter("category") == value;
                                html! {
                                    <option value={value} selected={selected}>
                                        {display_field(category, locale).to_string()}
                                    </option>
                                }
                            })}
                        </select>
                    </label>
                    <label class="filter-select">
                        <span>{t("archive.era")}</span>
                        <select onchange={on_era}>
                            <option value="" selected={couplets.query().filter("era").is_empty()}>
                                {t("common.all")}
                            </option>
                            {for era_options.iter().map(|era| {
                                let value = era.id.to_string();
                                let selected = couplets.query().filter("era") == value;
                                html! {
                                    <option value={value} selected={selected}>
                                        {era_label(era, locale)}
                                    </option>
                                }
                            })}
                        </select>
                    </label>
                    <label class="filter-select">
                        <span>{t("common.sort")}</span>
                        <select onchange={on_sort}>
                            {for SORT_CHOICES.iter().map(|&(key, label_key)| html! {
                                <option value={key} selected={couplets.query().sort_key == key}>
                                    {t(label_key)}
                                </option>
                            })}
                        </select>
                    </label>
                    <label class="filter-select">
                        <span>{t("common.page_size")}</span>
                        <select onchange={on_page_size}>
                            <option value="12" selected={couplets.query().page_size == 12}>{"12"}</option>
                            <option value="24" selected={couplets.query().page_size == 24}>{"24"}</option>
                            <option value="48" selected={couplets.query().page_size == 48}>{"48"}</option>
                        </select>
                    </label>
                </div>
                {error_banner}
                {cards}
                <Pagination
                    page={couplets.query().page}
                    total_pages={state.total_pages}
                    on_navigate={on_page}
                />
            </div>
        </section>
    }
}
