//! Poet-tag quick-add form state.

use risalo_api_models::TagUpsert;

use crate::core::validate::normalize_slug;

/// Mutable state of the inline new-tag form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagFormState {
    /// URL-safe unique key.
    pub slug: String,
    /// Label in Sindhi script.
    pub sindhi_label: String,
    /// Label in English.
    pub english_label: String,
}

impl TagFormState {
    /// Convert the form into a create payload. New tags start visible.
    ///
    /// # Errors
    /// Returns an error when the slug is malformed or both labels are blank.
    pub fn to_upsert(&self) -> Result<TagUpsert, String> {
        let sindhi_label = self.sindhi_label.trim();
        let english_label = self.english_label.trim();
        if sindhi_label.is_empty() && english_label.is_empty() {
            return Err("Label is required in at least one language".to_string());
        }
        let slug = normalize_slug(&self.slug)?;
        Ok(TagUpsert {
            slug,
            sindhi_label: sindhi_label.to_string(),
            english_label: english_label.to_string(),
            is_hidden: false,
        })
    }

    /// Whether nothing has been typed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slug.is_empty() && self.sindhi_label.is_empty() && self.english_label.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_upsert_trims_and_starts_visible() {
        let form = TagFormState {
            slug: " sufi ".to_string(),
            sindhi_label: " صوفي ".to_string(),
            english_label: String::new(),
        };
        let body = form.to_upsert().expect("payload should build");
        assert_eq!(body.slug, "sufi");
        assert_eq!(body.sindhi_label, "صوفي");
        assert_eq!(body.english_label, "");
        assert!(!body.is_hidden);
    }

    #[test]
    fn to_upsert_requires_a_label_in_some_language() {
        let form = TagFormState {
            slug: "sufi".to_string(),
            sindhi_label: "  ".to_string(),
            english_label: String::new(),
        };
        let err = form.to_upsert().expect_err("blank labels should fail");
        assert!(err.contains("Label is required"));
    }

    #[test]
    fn empty_form_reports_empty() {
        assert!(TagFormState::default().is_empty());
        let form = TagFormState {
            english_label: "Sufi".to_string(),
            ..TagFormState::default()
        };
        assert!(!form.is_empty());
    }
}
