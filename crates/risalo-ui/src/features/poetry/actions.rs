//! Poetry row actions and notice text.

use crate::i18n::TranslationBundle;

/// Row-level poetry actions emitted from the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoetryAction {
    /// Pin or unpin the work on the public landing page.
    ToggleFeatured {
        /// New featured value.
        on: bool,
    },
    /// Soft-delete the work into the trash, after confirmation.
    MoveToTrash,
    /// Bring a trashed work back to the live list.
    Restore,
    /// Permanently delete a trashed work, after confirmation.
    DeleteForever,
    /// Create a copy of the work and its translations.
    Duplicate,
}

/// Format a notice message for a completed action.
#[must_use]
pub fn success_message(bundle: &TranslationBundle, action: &PoetryAction, title: &str) -> String {
    let key = match action {
        PoetryAction::ToggleFeatured { on: true } => "notice.featured_on",
        PoetryAction::ToggleFeatured { on: false } => "notice.featured_off",
        PoetryAction::MoveToTrash => "notice.trashed",
        PoetryAction::Restore => "notice.restored",
        PoetryAction::DeleteForever => "notice.purged",
        PoetryAction::Duplicate => "notice.duplicated",
    };
    format!("{} {title}", bundle.text(key, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn success_messages_switch_on_action() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let featured = success_message(&bundle, &PoetryAction::ToggleFeatured { on: true }, "x");
        let trashed = success_message(&bundle, &PoetryAction::MoveToTrash, "x");
        let restored = success_message(&bundle, &PoetryAction::Restore, "x");
        let purged = success_message(&bundle, &PoetryAction::DeleteForever, "x");
        let duplicated = success_message(&bundle, &PoetryAction::Duplicate, "x");

        assert!(trashed.ends_with(" x"));
        assert_ne!(trashed, restored);
        assert_ne!(trashed, purged);
        assert_ne!(restored, purged);
        assert_ne!(featured, duplicated);
    }
}
