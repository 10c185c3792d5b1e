//! Sliding-window page number maths, separated from the pagination
//! component so the window rules are testable natively.

/// What the pagination strip should render for one query state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Page numbers to render, at most `window` of them, always contiguous.
    pub pages: Vec<u32>,
    /// Whether the previous-page control is active.
    pub prev_enabled: bool,
    /// Whether the next-page control is active.
    pub next_enabled: bool,
    /// Target for the jump-back control, present only when the current page
    /// is more than a full window from the start.
    pub jump_back: Option<u32>,
    /// Target for the jump-forward control, present only when the current
    /// page is more than a full window from the end.
    pub jump_forward: Option<u32>,
}

/// Computes the visible page window.
///
/// The window leads the current page by two slots so the reader sees where
/// they are going, and pins to either edge rather than shrinking.
#[must_use]
pub fn page_window(page: u32, total_pages: u32, window: u32) -> PageWindow {
    let window = window.max(1);
    let total = total_pages.max(1);
    let page = page.clamp(1, total);

    let last_start = total.saturating_sub(window - 1).max(1);
    let start = page.saturating_sub(2).clamp(1, last_start);
    let end = total.min(start + window - 1);

    PageWindow {
        pages: (start..=end).collect(),
        prev_enabled: page > 1,
        next_enabled: page < total,
        jump_back: (page > window).then(|| (page - window).max(1)),
        jump_forward: (page + window <= total).then(|| (page + window).min(total)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_disables_everything() {
        let win = page_window(1, 1, 6);
        assert_eq!(win.pages, vec![1]);
        assert!(!win.prev_enabled);
        assert!(!win.next_enabled);
        assert_eq!(win.jump_back, None);
        assert_eq!(win.jump_forward, None);
    }

    #[test]
    fn early_pages_pin_the_window_to_the_start() {
        let win = page_window(2, 20, 6);
        assert_eq!(win.pages, vec![1, 2, 3, 4, 5, 6]);
        assert!(win.prev_enabled);
        assert_eq!(win.jump_back, None);
        assert_eq!(win.jump_forward, Some(8));
    }

    #[test]
    fn middle_pages_lead_the_current_page_by_two() {
        let win = page_window(8, 20, 6);
        assert_eq!(win.pages, vec![6, 7, 8, 9, 10, 11]);
        assert_eq!(win.jump_back, Some(2));
        assert_eq!(win.jump_forward, Some(14));
    }

    #[test]
    fn last_page_pins_the_window_to_the_end() {
        let win = page_window(20, 20, 6);
        assert_eq!(win.pages, vec![15, 16, 17, 18, 19, 20]);
        assert!(!win.next_enabled);
        assert_eq!(win.jump_back, Some(14));
        assert_eq!(win.jump_forward, None);
    }

    #[test]
    fn jump_forward_disappears_within_a_window_of_the_end() {
        assert_eq!(page_window(14, 20, 6).jump_forward, Some(20));
        assert_eq!(page_window(15, 20, 6).jump_forward, None);
    }

    #[test]
    fn short_collections_never_grow_phantom_pages() {
        let win = page_window(1, 3, 6);
        assert_eq!(win.pages, vec![1, 2, 3]);
        let win = page_window(3, 3, 6);
        assert_eq!(win.pages, vec![1, 2, 3]);
        assert!(!win.next_enabled);
    }

    #[test]
    fn out_of_range_page_is_clamped_before_windowing() {
        let win = page_window(9, 4, 6);
        assert_eq!(win.pages, vec![1, 2, 3, 4]);
        assert!(!win.next_enabled);
        assert!(win.prev_enabled);
    }

    #[test]
    fn zero_total_behaves_like_one_page() {
        let win = page_window(1, 0, 6);
        assert_eq!(win.pages, vec![1]);
        assert!(!win.prev_enabled);
        assert!(!win.next_enabled);
    }
}
