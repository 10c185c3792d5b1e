#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Risalo content API.
//!
//! Every page controller in the UI reads and writes these types, so the wire
//! contract lives in exactly one place. Listing endpoints answer with several
//! historical envelope shapes; the tolerant decoder that folds them into a
//! single [`Page`] lives in [`page`].
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod page;

pub use page::Page;

/// Content language for translated rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Sindhi (Arabic script, right-to-left).
    #[default]
    Sd,
    /// English.
    En,
}

impl Lang {
    /// Wire value used in query strings and payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sd => "sd",
            Self::En => "en",
        }
    }
}

/// How a category renders its poetry on the public site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentStyle {
    /// Two-line couplets rendered as standalone cards.
    #[default]
    Couplet,
    /// Multi-line stanzas kept together as one block.
    Stanza,
    /// Long-form prose or narrative verse.
    Story,
}

/// Category row returned by `GET /categories`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    /// Server-assigned identifier.
    pub id: u64,
    /// URL-safe unique key.
    pub slug: String,
    /// Display name in Sindhi script.
    pub sindhi_name: String,
    /// Display name in English.
    pub english_name: String,
    #[serde(default)]
    /// Rendering style for poetry filed under the category.
    pub content_style: ContentStyle,
    #[serde(default)]
    /// Whether the category is pinned on the public landing page.
    pub is_featured: bool,
    #[serde(default)]
    /// Whether the category is hidden from public listings.
    pub is_hidden: bool,
    #[serde(default)]
    /// Number of couplets filed under the category.
    pub couplet_count: u64,
    #[serde(default)]
    /// Creation timestamp when the server includes it.
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /categories` and `PUT /categories/{id}` full updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryUpsert {
    /// URL-safe unique key.
    pub slug: String,
    /// Display name in Sindhi script.
    pub sindhi_name: String,
    /// Display name in English.
    pub english_name: String,
    /// Rendering style for poetry filed under the category.
    pub content_style: ContentStyle,
    /// Whether the category is pinned on the public landing page.
    pub is_featured: bool,
    /// Whether the category is hidden from public listings.
    pub is_hidden: bool,
}

/// Partial update for a category; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New featured flag, when it should change.
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New hidden flag, when it should change.
    pub is_hidden: Option<bool>,
}

/// Minimal poet reference embedded in poetry and couplet rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoetRef {
    /// Server-assigned identifier.
    pub id: u64,
    /// URL-safe unique key.
    pub slug: String,
    /// Poet name in Sindhi script.
    pub sindhi_name: String,
    /// Poet name in English.
    pub english_name: String,
}

/// One language rendition of a poetry work.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoetryTranslation {
    /// Server-assigned identifier.
    pub id: u64,
    /// Language of this rendition.
    pub lang: Lang,
    /// Title in the rendition language.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Manuscript or book the rendition was sourced from.
    pub source: Option<String>,
}

/// Translation payload nested inside [`PoetryUpsert`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationUpsert {
    /// Language of this rendition.
    pub lang: Lang,
    /// Title in the rendition language.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Manuscript or book the rendition was sourced from.
    pub source: Option<String>,
}

/// Poetry row returned by `GET /poetry`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoetrySummary {
    /// Server-assigned identifier.
    pub id: u64,
    /// URL-safe unique key.
    pub slug: String,
    #[serde(default)]
    /// Owning category, when assigned.
    pub category_id: Option<u64>,
    #[serde(default)]
    /// Owning category row, when the server expands it.
    pub category: Option<CategorySummary>,
    #[serde(default)]
    /// Poets credited with the work.
    pub poets: Vec<PoetRef>,
    #[serde(default, alias = "poetry_translations")]
    /// Language renditions of the work.
    pub translations: Vec<PoetryTranslation>,
    #[serde(default)]
    /// Whether the work is pinned on the public landing page.
    pub is_featured: bool,
    #[serde(default)]
    /// Number of couplets attached to the work.
    pub couplet_count: u64,
    #[serde(default)]
    /// Soft-delete timestamp; `None` for live rows.
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    /// Creation timestamp when the server includes it.
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /poetry` and `PUT /poetry/{id}` full updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoetryUpsert {
    /// URL-safe unique key.
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Owning category, when assigned.
    pub category_id: Option<u64>,
    #[serde(default)]
    /// Poets credited with the work.
    pub poet_ids: Vec<u64>,
    /// Language renditions of the work.
    pub translations: Vec<TranslationUpsert>,
    /// Whether the work is pinned on the public landing page.
    pub is_featured: bool,
}

/// Partial update for a poetry work; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoetryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New featured flag, when it should change.
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Soft-delete marker; `Some(None)` serialises as `null` and restores the
    /// row from the trash.
    pub deleted_at: Option<Option<DateTime<Utc>>>,
}

/// Couplet row returned by `GET /couplets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoupletItem {
    /// Server-assigned identifier.
    pub id: u64,
    #[serde(default)]
    /// Poetry work the couplet belongs to, when attached.
    pub poetry_id: Option<u64>,
    /// Verse text in Sindhi script; lines separated by `\n`.
    pub sindhi_text: String,
    #[serde(default)]
    /// Romanised transliteration of the verse, when available.
    pub roman_text: Option<String>,
    #[serde(default)]
    /// English rendering of the verse, when available.
    pub english_text: Option<String>,
    #[serde(default)]
    /// Credited poet, when known.
    pub poet: Option<PoetRef>,
    #[serde(default)]
    /// Reader like count.
    pub likes: u64,
    #[serde(default)]
    /// Reader view count.
    pub views: u64,
    #[serde(default)]
    /// Creation timestamp when the server includes it.
    pub created_at: Option<DateTime<Utc>>,
}

/// Poet tag row returned by `GET /tags`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoetTag {
    /// Server-assigned identifier.
    pub id: u64,
    /// URL-safe unique key.
    pub slug: String,
    /// Label in Sindhi script.
    pub sindhi_label: String,
    /// Label in English.
    pub english_label: String,
    #[serde(default)]
    /// Whether the tag is hidden from public poet pages.
    pub is_hidden: bool,
    #[serde(default)]
    /// Number of poets carrying the tag.
    pub poet_count: u64,
}

/// Body for `POST /tags` and `PUT /tags/{id}` full updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagUpsert {
    /// URL-safe unique key.
    pub slug: String,
    /// Label in Sindhi script.
    pub sindhi_label: String,
    /// Label in English.
    pub english_label: String,
    /// Whether the tag is hidden from public poet pages.
    pub is_hidden: bool,
}

/// Partial update for a poet tag; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// New hidden flag, when it should change.
    pub is_hidden: Option<bool>,
}

/// Romanisation lexicon row: one Sindhi word and its Latin-script form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RomanWordEntry {
    /// Server-assigned identifier.
    pub id: u64,
    /// Word in Sindhi script.
    pub word_sd: String,
    /// Latin-script transliteration.
    pub word_roman: String,
}

/// Body for `POST /romanizer/words` and full updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RomanWordUpsert {
    /// Word in Sindhi script.
    pub word_sd: String,
    /// Latin-script transliteration.
    pub word_roman: String,
}

/// Spelling-correction row used by the romaniser pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HesudharEntry {
    /// Server-assigned identifier.
    pub id: u64,
    /// Frequently seen misspelling.
    pub incorrect: String,
    /// Canonical spelling it should be replaced with.
    pub correct: String,
}

/// Body for `POST /romanizer/hesudhar` and full updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HesudharUpsert {
    /// Frequently seen misspelling.
    pub incorrect: String,
    /// Canonical spelling it should be replaced with.
    pub correct: String,
}

/// Glossary term row returned by `GET /terms`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermEntry {
    /// Server-assigned identifier.
    pub id: u64,
    /// URL-safe unique key.
    pub slug: String,
    /// Term in Sindhi script.
    pub sindhi_title: String,
    /// Term in English.
    pub english_title: String,
    #[serde(default)]
    /// Explanation in Sindhi, when written.
    pub detail_sd: Option<String>,
    #[serde(default)]
    /// Explanation in English, when written.
    pub detail_en: Option<String>,
}

/// Historical era used to place couplets on the public timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEra {
    /// Server-assigned identifier.
    pub id: u64,
    /// URL-safe unique key.
    pub slug: String,
    /// First year covered by the era (Gregorian).
    pub start_year: i32,
    #[serde(default)]
    /// Last year covered by the era; `None` for an open era.
    pub end_year: Option<i32>,
    /// Era name in Sindhi script.
    pub sindhi_title: String,
    /// Era name in English.
    pub english_title: String,
}

/// Site-wide settings singleton served by `GET /settings` and replaced via
/// `PUT /settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteSettings {
    #[serde(default)]
    /// Site title in Sindhi script.
    pub site_title_sd: String,
    #[serde(default)]
    /// Site title in English.
    pub site_title_en: String,
    #[serde(default)]
    /// Language the public site opens in.
    pub default_lang: Lang,
    #[serde(default = "default_couplets_per_page")]
    /// Page size applied to the public couplet archive.
    pub couplets_per_page: u32,
    #[serde(default = "default_true")]
    /// Whether romanised text renders under Sindhi verse.
    pub show_romanized: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title_sd: String::new(),
            site_title_en: String::new(),
            default_lang: Lang::Sd,
            couplets_per_page: default_couplets_per_page(),
            show_romanized: true,
        }
    }
}

const fn default_couplets_per_page() -> u32 {
    12
}

const fn default_true() -> bool {
    true
}

/// Error body shape used by mutation endpoints: `{"error": "<reason>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorBody {
    #[serde(default)]
    /// Human-readable failure reason.
    pub error: Option<String>,
}

impl ErrorBody {
    /// Pulls the `error` string out of a raw response body, tolerating bodies
    /// that are not JSON at all.
    #[must_use]
    pub fn extract(body: &str) -> Option<String> {
        let parsed: Self = serde_json::from_str(body).ok()?;
        let message = parsed.error?;
        let trimmed = message.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_patch_serialises_only_set_fields() {
        let patch = CategoryPatch {
            is_featured: Some(true),
            is_hidden: None,
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"is_featured": true}));
    }

    #[test]
    fn poetry_patch_restore_serialises_null_deleted_at() {
        let patch = PoetryPatch {
            is_featured: None,
            deleted_at: Some(None),
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"deleted_at": null}));
    }

    #[test]
    fn poetry_summary_accepts_legacy_translation_key() {
        let row: PoetrySummary = serde_json::from_value(serde_json::json!({
            "id": 7,
            "slug": "sur-sarang",
            "poetry_translations": [
                {"id": 1, "lang": "sd", "title": "سر سارنگ"},
                {"id": 2, "lang": "en", "title": "Sur Sarang"}
            ]
        }))
        .unwrap();
        assert_eq!(row.translations.len(), 2);
        assert_eq!(row.translations[1].lang, Lang::En);
        assert!(row.deleted_at.is_none());
        assert!(!row.is_featured);
    }

    #[test]
    fn site_settings_fills_defaults() {
        let settings: SiteSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.couplets_per_page, 12);
        assert!(settings.show_romanized);
        assert_eq!(settings.default_lang, Lang::Sd);
    }

    #[test]
    fn error_body_extract_handles_garbage() {
        assert_eq!(
            ErrorBody::extract(r#"{"error":"slug already exists"}"#).as_deref(),
            Some("slug already exists")
        );
        assert_eq!(ErrorBody::extract(r#"{"error":"  "}"#), None);
        assert_eq!(ErrorBody::extract("<html>boom</html>"), None);
        assert_eq!(ErrorBody::extract(r"{}"), None);
    }
}
