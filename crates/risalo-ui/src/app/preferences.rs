//! Persistence and environment helpers for the app shell.

use crate::core::session::Session;
use crate::core::store::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;
use web_sys::Url;

pub(crate) const LOCALE_KEY: &str = "risalo.locale";
pub(crate) const THEME_KEY: &str = "risalo.theme";
pub(crate) const TOKEN_KEY: &str = "risalo.token";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn load_theme() -> ThemeMode {
    LocalStorage::get::<String>(THEME_KEY)
        .map(|value| ThemeMode::from_storage(&value))
        .unwrap_or_default()
}

pub(crate) fn load_session() -> Session {
    LocalStorage::get::<String>(TOKEN_KEY)
        .map(|token| Session::new(&token))
        .unwrap_or_default()
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    set_storage(THEME_KEY, theme.as_str());
}

pub(crate) fn persist_session(session: &Session) {
    match session.token() {
        Some(token) => set_storage(TOKEN_KEY, token),
        None => delete_storage(TOKEN_KEY),
    }
}

pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        // The trunk dev server sits on 8080 while the API listens on 3000.
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("3000"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:3000".to_string()
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
