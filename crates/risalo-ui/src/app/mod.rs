//! Application root: store boot, context providers, router and chrome.
//!
//! # Design
//! - The yewdux store carries only app-wide state (session, locale, theme);
//!   every list page owns its collection state locally.
//! - Preferences are read once before anything subscribes, then written
//!   back whenever the store changes them.
//! - Route handling lives in a child of `BrowserRouter` so the active nav
//!   item tracks the address bar.

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::api::ApiCtx;
use crate::components::shell::{AppShell, NavLabels};
use crate::core::session::Session;
use crate::core::store::{AppStore, ThemeMode};
use crate::features::archive::view::ArchivePage;
use crate::features::categories::view::CategoriesPage;
use crate::features::poetry::view::PoetryPage;
use crate::features::romanizer::view::RomanizerPage;
use crate::features::settings::view::SettingsPage;
use crate::features::tags::view::TagsPage;
use crate::features::terms::view::TermsPage;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use crate::app::preferences::{
    api_base_url, load_locale, load_session, load_theme, persist_locale, persist_theme,
};

pub(crate) mod api;
pub(crate) mod hooks;
pub(crate) mod preferences;
mod routes;

pub(crate) use routes::Route;

#[function_component(RisaloApp)]
fn risalo_app() -> Html {
    // Seed the store from storage before anything subscribes to it.
    use_memo(
        |_| {
            Dispatch::<AppStore>::new().reduce_mut(|store| {
                store.locale = load_locale();
                store.theme = load_theme();
                store.session = load_session();
            });
        },
        (),
    );
    let session = use_selector(|store: &AppStore| store.session.clone());
    let locale = use_selector(|store: &AppStore| store.locale);
    let theme = use_selector(|store: &AppStore| store.theme);
    let locale_value = *locale;
    let theme_value = *theme;
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let bundle = use_memo(move |_| TranslationBundle::new(locale_value), locale_value);

    use_effect_with_deps(
        move |theme: &ThemeMode| {
            apply_theme(*theme);
            persist_theme(*theme);
            || ()
        },
        theme_value,
    );
    {
        let rtl = bundle.rtl();
        use_effect_with_deps(
            move |(locale, rtl): &(LocaleCode, bool)| {
                apply_locale(*locale, *rtl);
                persist_locale(*locale);
                || ()
            },
            (locale_value, rtl),
        );
    }
    {
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |session: &Rc<Session>| {
                api_ctx
                    .client
                    .set_token(session.token().map(ToString::to_string));
                || ()
            },
            session,
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <AppChrome />
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

#[function_component(AppChrome)]
fn app_chrome() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let dispatch = Dispatch::<AppStore>::new();
    let theme = use_selector(|store: &AppStore| store.theme);
    let locale = use_selector(|store: &AppStore| store.locale);
    let session = use_selector(|store: &AppStore| store.session.clone());
    let current_route = use_route::<Route>().unwrap_or(Route::Archive);

    let on_toggle_theme = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| store.theme = store.theme.toggled());
        })
    };
    let locale_selector = {
        let locale_value = *locale;
        html! {
            <select value={locale_value.code()} onchange={{
                Callback::from(move |event: Event| {
                    if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                        if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                            Dispatch::<AppStore>::new().reduce_mut(|store| store.locale = next);
                        }
                    }
                })
            }}>
                {for LocaleCode::all().iter().map(|code| html! {
                    <option value={code.code()} selected={*code == locale_value}>{code.label()}</option>
                })}
            </select>
        }
    };

    let nav = NavLabels {
        archive: bundle.text("nav.archive", "Archive"),
        terms: bundle.text("nav.terms", "Glossary"),
        admin: bundle.text("nav.admin", "Admin"),
        poetry: bundle.text("nav.poetry", "Poetry"),
        categories: bundle.text("nav.categories", "Categories"),
        tags: bundle.text("nav.tags", "Tags"),
        romanizer: bundle.text("nav.romanizer", "Romanizer"),
        settings: bundle.text("nav.settings", "Settings"),
    };

    html! {
        <AppShell
            theme={*theme}
            on_toggle_theme={on_toggle_theme}
            active={current_route}
            locale_selector={locale_selector}
            nav={nav}
            site_title={bundle.text("site.title", "Risalo")}
            tagline={bundle.text("site.tagline", "")}
            is_admin={session.is_admin()}
        >
            <Switch<Route> render={switch} />
        </AppShell>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Archive => html! { <ArchivePage /> },
        Route::Terms => html! { <TermsPage /> },
        Route::Admin => html! { <Redirect<Route> to={Route::AdminPoetry} /> },
        Route::AdminPoetry => html! { <PoetryPage /> },
        Route::AdminCategories => html! { <CategoriesPage /> },
        Route::AdminTags => html! { <TagsPage /> },
        Route::AdminRomanizer => html! { <RomanizerPage /> },
        Route::AdminSettings => html! { <SettingsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <div class="placeholder">
            <h2>{bundle.text("site.not_found", "Page not found")}</h2>
            <p class="muted">{bundle.text("site.not_found_body", "")}</p>
        </div>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(body) = gloo::utils::document().body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

fn apply_locale(locale: LocaleCode, rtl: bool) {
    if let Some(body) = gloo::utils::document().body() {
        let _ = body.set_attribute("lang", locale.code());
        let _ = body.set_attribute("dir", if rtl { "rtl" } else { "ltr" });
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<RisaloApp>::with_root(root).render();
    } else {
        yew::Renderer::<RisaloApp>::new().render();
    }
}
