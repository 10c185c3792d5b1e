//! Settings editor form state.

use risalo_api_models::{Lang, SiteSettings};

/// Mutable editor state for the site settings document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsFormState {
    /// Site title in Sindhi script.
    pub site_title_sd: String,
    /// Site title in English.
    pub site_title_en: String,
    /// Language the public site opens in.
    pub default_lang: Lang,
    /// Archive page size as typed, parsed on save.
    pub couplets_per_page: String,
    /// Whether romanised text renders under Sindhi verse.
    pub show_romanized: bool,
}

impl SettingsFormState {
    /// Seed the form from the stored settings document.
    #[must_use]
    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self {
            site_title_sd: settings.site_title_sd.clone(),
            site_title_en: settings.site_title_en.clone(),
            default_lang: settings.default_lang,
            couplets_per_page: settings.couplets_per_page.to_string(),
            show_romanized: settings.show_romanized,
        }
    }

    /// Rebuild the full settings document the server stores.
    ///
    /// # Errors
    /// Returns a message when the page size is not a number from 1 to 100.
    pub fn to_settings(&self) -> Result<SiteSettings, String> {
        let couplets_per_page = self
            .couplets_per_page
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|size| (1..=100).contains(size))
            .ok_or_else(|| "Couplets per page must be a number from 1 to 100".to_string())?;
        Ok(SiteSettings {
            site_title_sd: self.site_title_sd.trim().to_string(),
            site_title_en: self.site_title_en.trim().to_string(),
            default_lang: self.default_lang,
            couplets_per_page,
            show_romanized: self.show_romanized,
        })
    }
}

/// Map a language select value back to the enum; unknown values fall back
/// to Sindhi, the site default.
#[must_use]
pub fn lang_from_value(value: &str) -> Lang {
    match value {
        "en" => Lang::En,
        _ => Lang::Sd,
    }
}

#[cfg(test)]
mod tests {
    use super::{lang_from_value, SettingsFormState};
    use risalo_api_models::{Lang, SiteSettings};

    fn stored() -> SiteSettings {
        SiteSettings {
            site_title_sd: "رسالو".to_string(),
            site_title_en: "Risalo".to_string(),
            default_lang: Lang::Sd,
            couplets_per_page: 12,
            show_romanized: true,
        }
    }

    #[test]
    fn form_round_trips_the_settings_document() {
        let form = SettingsFormState::from_settings(&stored());
        assert_eq!(form.couplets_per_page, "12");
        assert_eq!(form.to_settings(), Ok(stored()));
    }

    #[test]
    fn page_size_must_be_a_small_positive_number() {
        let mut form = SettingsFormState::from_settings(&stored());
        for bad in ["", "abc", "0", "101", "-3"] {
            form.couplets_per_page = bad.to_string();
            assert!(form.to_settings().is_err(), "accepted {bad:?}");
        }
        form.couplets_per_page = " 24 ".to_string();
        assert_eq!(form.to_settings().map(|s| s.couplets_per_page), Ok(24));
    }

    #[test]
    fn titles_are_trimmed_on_save() {
        let mut form = SettingsFormState::from_settings(&stored());
        form.site_title_sd = "  شاهه جو رسالو ".to_string();
        let saved = form.to_settings().unwrap();
        assert_eq!(saved.site_title_sd, "شاهه جو رسالو");
    }

    #[test]
    fn unknown_language_values_fall_back_to_sindhi() {
        assert_eq!(lang_from_value("en"), Lang::En);
        assert_eq!(lang_from_value("sd"), Lang::Sd);
        assert_eq!(lang_from_value("fr"), Lang::Sd);
    }
}
