//! Public glossary page: searchable, paginated term cards.

use risalo_api_models::TermEntry;
use yew::prelude::*;

use crate::app::hooks::use_collection;
use crate::components::empty_state::EmptyState;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::core::display::{display_field, term_detail};
use crate::core::query::ListQuery;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

#[function_component(TermsPage)]
pub(crate) fn terms_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let locale = bundle.locale;

    let terms = use_collection::<TermEntry>("terms", ListQuery::new("sindhi_title", 12));
    let state = terms.state();

    let on_echo = {
        let terms = terms.clone();
        Callback::from(move |text: String| terms.echo_search(text))
    };
    let on_search = {
        let terms = terms.clone();
        Callback::from(move |text: String| terms.commit_search(&text))
    };
    let on_page = {
        let terms = terms.clone();
        Callback::from(move |page: u32| terms.set_page(page))
    };
    let on_retry = {
        let terms = terms.clone();
        Callback::from(move |_| terms.refetch())
    };

    let cards = if state.items.is_empty() {
        if state.loading {
            html! { <p class="muted">{t("common.loading")}</p> }
        } else {
            html! { <EmptyState title={AttrValue::from(t("common.empty"))} /> }
        }
    } else {
        html! {
            <ul class="term-cards">
                {for state.items.iter().map(|term: &TermEntry| {
                    let title = display_field(term, locale).to_string();
                    let detail = term_detail(term, locale).map(str::to_string);
                    html! {
                        <li class="term-card" key={term.id}>
                            <h4>{title}</h4>
                            {detail.map_or_else(|| html! {}, |text| html! { <p class="muted">{text}</p> })}
                        </li>
                    }
                })}
            </ul>
        }
    };

    html! {
        <section class="terms-page">
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <h3>{t("terms.title")}</h3>
                        <span class="pill subtle">{state.total}</span>
                    </div>
                    <SearchInput
                        value={AttrValue::from(terms.query().search_input.clone())}
                        placeholder={AttrValue::from(t("common.search_hint"))}
                        aria_label={AttrValue::from(t("common.search"))}
                        debounce_ms={500}
                        on_input={on_echo}
                        on_search={on_search}
                    />
                </div>
                {if let Some(message) = state.error.as_ref() {
                    html! {
                        <div class="banner error">
                            <span>{format!("{}: {message}", t("common.error"))}</span>
                            <button class="btn btn-ghost btn-sm" onclick={on_retry}>{t("common.retry")}</button>
                        </div>
                    }
                } else {
                    html! {}
                }}
                {cards}
                <Pagination
                    page={terms.query().page}
                    total_pages={state.total_pages}
                    on_navigate={on_page}
                />
            </div>
        </section>
    }
}
