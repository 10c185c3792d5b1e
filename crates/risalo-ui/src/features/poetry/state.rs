//! View-model state for the poetry admin page.

/// Which slice of the poetry table is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PoetryView {
    /// Live works.
    #[default]
    Active,
    /// Soft-deleted works awaiting restore or purge.
    Trash,
}

impl PoetryView {
    /// Both views in tab order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Active, Self::Trash]
    }

    /// Wire value carried in the `view` filter.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trash => "trash",
        }
    }

    /// Reads the `view` filter back; unknown values land on the active view.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "trash" => Self::Trash,
            _ => Self::Active,
        }
    }

    /// i18n key of the tab label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Active => "poetry.active",
            Self::Trash => "poetry.trash",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_values_round_trip_and_default_to_active() {
        for view in PoetryView::all() {
            assert_eq!(PoetryView::from_value(view.as_value()), view);
        }
        assert_eq!(PoetryView::from_value(""), PoetryView::Active);
        assert_eq!(PoetryView::from_value("archived"), PoetryView::Active);
    }
}
