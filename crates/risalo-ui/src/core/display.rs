//! Locale-aware display text for bilingual rows.
//!
//! Content arrives with a Sindhi and an English rendering, either of which
//! may be missing or blank. Display always falls back to the other language
//! before resorting to the slug, so tables never show empty cells.

use chrono::{DateTime, Utc};
use risalo_api_models::{
    CategorySummary, Lang, PoetRef, PoetTag, PoetrySummary, TermEntry, TimelineEra,
};

use crate::i18n::LocaleCode;

/// Rows carrying both language renderings of their name.
pub trait Localized {
    /// Name in Sindhi script.
    fn sindhi(&self) -> &str;
    /// Name in English.
    fn english(&self) -> &str;
    /// Slug, the last-resort display text.
    fn slug(&self) -> &str;
}

impl Localized for CategorySummary {
    fn sindhi(&self) -> &str {
        &self.sindhi_name
    }
    fn english(&self) -> &str {
        &self.english_name
    }
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Localized for PoetRef {
    fn sindhi(&self) -> &str {
        &self.sindhi_name
    }
    fn english(&self) -> &str {
        &self.english_name
    }
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Localized for PoetTag {
    fn sindhi(&self) -> &str {
        &self.sindhi_label
    }
    fn english(&self) -> &str {
        &self.english_label
    }
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Localized for TermEntry {
    fn sindhi(&self) -> &str {
        &self.sindhi_title
    }
    fn english(&self) -> &str {
        &self.english_title
    }
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Localized for TimelineEra {
    fn sindhi(&self) -> &str {
        &self.sindhi_title
    }
    fn english(&self) -> &str {
        &self.english_title
    }
    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Name of a row in the reader's locale, falling back to the other language
/// and finally to the slug.
#[must_use]
pub fn display_field<T: Localized>(row: &T, locale: LocaleCode) -> &str {
    let (preferred, other) = match locale {
        LocaleCode::Sd => (row.sindhi(), row.english()),
        LocaleCode::En => (row.english(), row.sindhi()),
    };
    pick(preferred, other, row.slug())
}

/// Title of a poetry work in the reader's locale, read from its
/// translations with the same fallback chain as [`display_field`].
#[must_use]
pub fn poetry_title(poetry: &PoetrySummary, locale: LocaleCode) -> &str {
    let want = Lang::from(locale);
    let titled = |lang: Lang| {
        poetry
            .translations
            .iter()
            .find(|translation| translation.lang == lang)
            .map(|translation| translation.title.trim())
            .filter(|title| !title.is_empty())
    };
    titled(want)
        .or_else(|| titled(opposite(want)))
        .unwrap_or_else(|| poetry.slug.trim())
}

fn pick<'a>(preferred: &'a str, other: &'a str, slug: &'a str) -> &'a str {
    let preferred = preferred.trim();
    if !preferred.is_empty() {
        return preferred;
    }
    let other = other.trim();
    if other.is_empty() { slug } else { other }
}

const fn opposite(lang: Lang) -> Lang {
    match lang {
        Lang::Sd => Lang::En,
        Lang::En => Lang::Sd,
    }
}

/// Glossary explanation in the reader's locale, or the other language when
/// only one was written. `None` when the term has no explanation at all.
#[must_use]
pub fn term_detail(term: &TermEntry, locale: LocaleCode) -> Option<&str> {
    fn written(detail: Option<&str>) -> Option<&str> {
        detail.map(str::trim).filter(|text| !text.is_empty())
    }
    let (preferred, other) = match locale {
        LocaleCode::Sd => (term.detail_sd.as_deref(), term.detail_en.as_deref()),
        LocaleCode::En => (term.detail_en.as_deref(), term.detail_sd.as_deref()),
    };
    written(preferred).or_else(|| written(other))
}

/// Day part of a timestamp for table cells, or a dash when absent.
#[must_use]
pub fn format_day(stamp: Option<DateTime<Utc>>) -> String {
    stamp.map_or_else(|| "\u{2013}".to_string(), |at| at.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use risalo_api_models::PoetryTranslation;

    fn poet(sindhi: &str, english: &str, slug: &str) -> PoetRef {
        PoetRef {
            id: 1,
            slug: slug.to_string(),
            sindhi_name: sindhi.to_string(),
            english_name: english.to_string(),
        }
    }

    #[test]
    fn shows_the_reader_locale_when_present() {
        let row = poet("شاهه لطيف", "Shah Latif", "shah-latif");
        assert_eq!(display_field(&row, LocaleCode::Sd), "شاهه لطيف");
        assert_eq!(display_field(&row, LocaleCode::En), "Shah Latif");
    }

    #[test]
    fn blank_rendering_falls_back_to_the_other_language() {
        let row = poet("   ", "Sachal Sarmast", "sachal");
        assert_eq!(display_field(&row, LocaleCode::Sd), "Sachal Sarmast");
    }

    #[test]
    fn slug_is_the_last_resort() {
        let row = poet("", " ", "bhitai");
        assert_eq!(display_field(&row, LocaleCode::En), "bhitai");
    }

    #[test]
    fn poetry_title_prefers_the_matching_translation() {
        let poetry = PoetrySummary {
            slug: "sur-sarang".to_string(),
            translations: vec![
                PoetryTranslation {
                    id: 1,
                    lang: Lang::Sd,
                    title: "سر سارنگ".to_string(),
                    source: None,
                },
                PoetryTranslation {
                    id: 2,
                    lang: Lang::En,
                    title: "Sur Sarang".to_string(),
                    source: None,
                },
            ],
            ..Default::default()
        };
        assert_eq!(poetry_title(&poetry, LocaleCode::Sd), "سر سارنگ");
        assert_eq!(poetry_title(&poetry, LocaleCode::En), "Sur Sarang");
    }

    #[test]
    fn poetry_title_crosses_languages_before_using_the_slug() {
        let poetry = PoetrySummary {
            slug: "sur-kedaro".to_string(),
            translations: vec![PoetryTranslation {
                id: 1,
                lang: Lang::En,
                title: "Sur Kedaro".to_string(),
                source: None,
            }],
            ..Default::default()
        };
        assert_eq!(poetry_title(&poetry, LocaleCode::Sd), "Sur Kedaro");
        let bare = PoetrySummary {
            slug: "sur-kedaro".to_string(),
            ..Default::default()
        };
        assert_eq!(poetry_title(&bare, LocaleCode::Sd), "sur-kedaro");
    }

    #[test]
    fn term_detail_crosses_languages_and_skips_blank_text() {
        let term = TermEntry {
            id: 4,
            slug: "wai".to_string(),
            sindhi_title: "وائي".to_string(),
            english_title: "Wai".to_string(),
            detail_sd: Some("  ".to_string()),
            detail_en: Some("A refrain-led lyric form.".to_string()),
        };
        assert_eq!(
            term_detail(&term, LocaleCode::Sd),
            Some("A refrain-led lyric form.")
        );
        let unwritten = TermEntry {
            detail_sd: None,
            detail_en: None,
            ..term
        };
        assert_eq!(term_detail(&unwritten, LocaleCode::En), None);
    }

    #[test]
    fn format_day_renders_date_or_dash() {
        let stamp = Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap();
        assert_eq!(format_day(Some(stamp)), "2024-03-09");
        assert_eq!(format_day(None), "\u{2013}");
    }
}
