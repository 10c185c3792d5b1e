//! Category form parsing helpers.
//!
//! # Design
//! - Keep select-control mappings centralized for consistency.

use risalo_api_models::ContentStyle;

/// Select-control value for a content style.
#[must_use]
pub const fn style_value(style: ContentStyle) -> &'static str {
    match style {
        ContentStyle::Couplet => "couplet",
        ContentStyle::Stanza => "stanza",
        ContentStyle::Story => "story",
    }
}

/// Content style for a select-control value; unknown values fall back to
/// the couplet layout.
#[must_use]
pub fn style_from_value(value: &str) -> ContentStyle {
    match value {
        "stanza" => ContentStyle::Stanza,
        "story" => ContentStyle::Story,
        _ => ContentStyle::Couplet,
    }
}

/// Translation key for a content style's display label.
#[must_use]
pub const fn style_label_key(style: ContentStyle) -> &'static str {
    match style {
        ContentStyle::Couplet => "categories.style_couplet",
        ContentStyle::Stanza => "categories.style_stanza",
        ContentStyle::Story => "categories.style_story",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_select_values_round_trip() {
        for style in [ContentStyle::Couplet, ContentStyle::Stanza, ContentStyle::Story] {
            assert_eq!(style_from_value(style_value(style)), style);
        }
        assert_eq!(style_from_value("anything"), ContentStyle::Couplet);
    }
}
