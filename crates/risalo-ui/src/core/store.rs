//! App-wide yewdux store slices.
//!
//! # Design
//! - Only state the whole app reads lives here: the admin session, the
//!   reader locale and the theme.
//! - Each paginated page owns its list state locally, so a navigation can
//!   never leak one page's rows or notices into another.

use crate::core::session::Session;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Admin session, when signed in.
    pub session: Session,
    /// Locale the reader is browsing in.
    pub locale: LocaleCode,
    /// Active colour theme.
    pub theme: ThemeMode,
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            session: Session::default(),
            locale: DEFAULT_LOCALE,
            theme: ThemeMode::Light,
        }
    }
}

/// Colour theme applied to the document body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Parchment-light theme.
    #[default]
    Light,
    /// Night-reading theme.
    Dark,
}

impl ThemeMode {
    /// Storage and `data-theme` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value, defaulting to light for anything unknown.
    #[must_use]
    pub fn from_storage(value: &str) -> Self {
        if value.eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The other theme, for the toggle control.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_is_signed_out_sindhi_light() {
        let store = AppStore::default();
        assert!(!store.session.is_admin());
        assert_eq!(store.locale, LocaleCode::Sd);
        assert_eq!(store.theme, ThemeMode::Light);
    }

    #[test]
    fn theme_round_trips_through_storage_strings() {
        assert_eq!(ThemeMode::from_storage("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_storage("Dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_storage("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_storage("speckled"), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
