//! Category editor form state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to the wire payload only on save.

use risalo_api_models::{CategorySummary, CategoryUpsert, ContentStyle};

use crate::core::validate::normalize_slug;

/// Mutable category editor state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryFormState {
    /// Row under edit; `None` while creating.
    pub id: Option<u64>,
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

impl CategoryFormState {
    /// Build form state from an existing row.
    #[must_use]
    pub fn from_row(row: &CategorySummary) -> Self {
        Self {
            id: Some(row.id),
            slug: row.slug.clone(),
            sindhi_name: row.sindhi_name.clone(),
            english_name: row.english_name.clone(),
            content_style: row.content_style,
            is_featured: row.is_featured,
            is_hidden: row.is_hidden,
        }
    }

    /// Convert the form into an upsert payload.
    ///
    /// # Errors
    /// Returns an error when the slug is malformed or both names are blank.
    pub fn to_upsert(&self) -> Result<CategoryUpsert, String> {
        let sindhi_name = self.sindhi_name.trim();
        let english_name = self.english_name.trim();
        if sindhi_name.is_empty() && english_name.is_empty() {
            return Err("Name is required in at least one language".to_string());
        }
        let slug = normalize_slug(&self.slug)?;
        Ok(CategoryUpsert {
            slug,
            sindhi_name: sindhi_name.to_string(),
            english_name: english_name.to_string(),
            content_style: self.content_style,
            is_featured: self.is_featured,
            is_hidden: self.is_hidden,
        })
    }

    /// Whether the form edits an existing row rather than creating one.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_upsert_trims_and_validates() {
        let form = CategoryFormState {
            slug: " kafi ".to_string(),
            sindhi_name: " ڪافي ".to_string(),
            ..CategoryFormState::default()
        };
        let body = form.to_upsert().expect("payload should build");
        assert_eq!(body.slug, "kafi");
        assert_eq!(body.sindhi_name, "ڪافي");
        assert_eq!(body.english_name, "");
        assert_eq!(body.content_style, ContentStyle::Couplet);
    }

    #[test]
    fn to_upsert_requires_a_name_in_some_language() {
        let form = CategoryFormState {
            slug: "kafi".to_string(),
            sindhi_name: "  ".to_string(),
            english_name: String::new(),
            ..CategoryFormState::default()
        };
        let err = form.to_upsert().expect_err("blank names should fail");
        assert!(err.contains("Name is required"));
    }

    #[test]
    fn from_row_maps_every_field() {
        let row = CategorySummary {
            id: 7,
            slug: "wai".to_string(),
            sindhi_name: "وائي".to_string(),
            english_name: "Wai".to_string(),
            content_style: ContentStyle::Stanza,
            is_featured: true,
            is_hidden: false,
            ..CategorySummary::default()
        };
        let form = CategoryFormState::from_row(&row);
        assert_eq!(form.id, Some(7));
        assert!(form.is_editing());
        assert_eq!(form.slug, "wai");
        assert_eq!(form.content_style, ContentStyle::Stanza);
        assert!(form.is_featured);
        assert!(!form.is_hidden);
    }
}
