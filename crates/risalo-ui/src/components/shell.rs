use crate::app::Route;
use crate::core::store::ThemeMode;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Clone, PartialEq)]
pub(crate) struct NavLabels {
    pub archive: String,
    pub terms: String,
    pub admin: String,
    pub poetry: String,
    pub categories: String,
    pub tags: String,
    pub romanizer: String,
    pub settings: String,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub active: Route,
    pub locale_selector: Html,
    pub nav: NavLabels,
    pub site_title: String,
    pub tagline: String,
    pub is_admin: bool,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let nav_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };

    let theme_glyph = match props.theme {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "☾",
    };

    html! {
        <div class={classes!("app-shell", format!("theme-{}", props.theme.as_str()))}>
            <aside class={classes!("sidebar", if *nav_open { "open" } else { "closed" })}>
                <div class="brand">
                    <button class="ghost mobile-only" onclick={toggle_nav.clone()} aria-label="Close navigation">{"✕"}</button>
                    <strong>{props.site_title.clone()}</strong>
                    <span class="muted">{props.tagline.clone()}</span>
                </div>
                <nav>
                    {nav_item(Route::Archive, &props.nav.archive, &props.active)}
                    {nav_item(Route::Terms, &props.nav.terms, &props.active)}
                    {if props.is_admin {
                        html! {
                            <>
                                <small class="nav-section muted">{props.nav.admin.clone()}</small>
                                {nav_item(Route::AdminPoetry, &props.nav.poetry, &props.active)}
                                {nav_item(Route::AdminCategories, &props.nav.categories, &props.active)}
                                {nav_item(Route::AdminTags, &props.nav.tags, &props.active)}
                                {nav_item(Route::AdminRomanizer, &props.nav.romanizer, &props.active)}
                            </>
                        }
                    } else {
                        html! {}
                    }}
                    {nav_item(Route::AdminSettings, &props.nav.settings, &props.active)}
                </nav>
                <div class="sidebar-footer">
                    <div class="theme-toggle">
                        <button class="ghost" onclick={props.on_toggle_theme.clone()} aria-label="Toggle theme">{theme_glyph}</button>
                    </div>
                    <div class="locale-toggle">
                        {props.locale_selector.clone()}
                    </div>
                </div>
            </aside>
            <div class="main">
                <header class="topbar">
                    <button class="ghost mobile-only" aria-label="Open navigation" onclick={toggle_nav}>{"☰"}</button>
                    <strong class="mobile-only">{props.site_title.clone()}</strong>
                </header>
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let classes = classes!("nav-item", (*active == route).then_some("active"));
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
