//! Category row actions and notice text.

use crate::i18n::TranslationBundle;

/// Row-level category actions emitted from the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryAction {
    /// Pin or unpin the category on the public landing page.
    ToggleFeatured {
        /// New featured value.
        on: bool,
    },
    /// Hide the category from public listings, or show it again.
    ToggleHidden {
        /// New hidden value.
        on: bool,
    },
    /// Delete the category after confirmation.
    Delete,
}

/// Format a notice message for a completed action.
#[must_use]
pub fn success_message(
    bundle: &TranslationBundle,
    action: &CategoryAction,
    name: &str,
) -> String {
    match action {
        CategoryAction::ToggleFeatured { on } => {
            if *on {
                format!("{} {name}", bundle.text("notice.featured_on", ""))
            } else {
                format!("{} {name}", bundle.text("notice.featured_off", ""))
            }
        }
        CategoryAction::ToggleHidden { on } => {
            if *on {
                format!("{} {name}", bundle.text("notice.hidden_on", ""))
            } else {
                format!("{} {name}", bundle.text("notice.hidden_off", ""))
            }
        }
        CategoryAction::Delete => format!("{} {name}", bundle.text("notice.deleted", "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn success_messages_switch_on_action() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let featured_on =
            success_message(&bundle, &CategoryAction::ToggleFeatured { on: true }, "x");
        let featured_off =
            success_message(&bundle, &CategoryAction::ToggleFeatured { on: false }, "x");
        let hidden_on = success_message(&bundle, &CategoryAction::ToggleHidden { on: true }, "x");
        let hidden_off =
            success_message(&bundle, &CategoryAction::ToggleHidden { on: false }, "x");
        let deleted = success_message(&bundle, &CategoryAction::Delete, "x");

        assert!(featured_on.ends_with(" x"));
        assert_ne!(featured_on, featured_off);
        assert_ne!(hidden_on, hidden_off);
        assert_ne!(featured_on, hidden_on);
        assert_ne!(deleted, hidden_off);
    }
}
