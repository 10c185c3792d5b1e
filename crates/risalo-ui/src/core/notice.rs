//! Single-slot page notice, replaced rather than queued.
//!
//! Each push stamps the notice with a fresh sequence number. The expiry
//! timer that a view arms for one notice hands that number back; an expiry
//! carrying a stale number means the slot has been replaced since the timer
//! was armed and must be ignored.

/// Visual flavour of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// A mutation landed.
    Success,
    /// A request failed.
    Error,
    /// Neutral information, e.g. fallback content is showing.
    Info,
}

/// One notice occupying the slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Visual flavour.
    pub kind: NoticeKind,
    /// Already-localised message text.
    pub message: String,
    /// Identity of this occupancy, for expiry matching.
    pub seq: u64,
}

/// The slot itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    seq: u64,
}

impl NoticeSlot {
    /// Replaces whatever is showing and returns the new occupant's
    /// sequence number.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Notice {
            kind,
            message: message.into(),
            seq: self.seq,
        });
        self.seq
    }

    /// Clears the slot if the given sequence number still occupies it.
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, seq: u64) -> bool {
        match &self.current {
            Some(notice) if notice.seq == seq => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Clears the slot unconditionally, for an explicit dismiss control.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// The notice currently showing, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_replaces_the_previous_notice() {
        let mut slot = NoticeSlot::default();
        slot.push(NoticeKind::Success, "saved");
        slot.push(NoticeKind::Error, "failed");
        let showing = slot.current().expect("slot should be occupied");
        assert_eq!(showing.kind, NoticeKind::Error);
        assert_eq!(showing.message, "failed");
    }

    #[test]
    fn stale_expiry_leaves_the_newer_notice_alone() {
        let mut slot = NoticeSlot::default();
        let first = slot.push(NoticeKind::Success, "saved");
        let second = slot.push(NoticeKind::Info, "showing samples");
        assert!(!slot.expire(first));
        assert!(slot.current().is_some());
        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn expiry_on_an_empty_slot_is_a_no_op() {
        let mut slot = NoticeSlot::default();
        let seq = slot.push(NoticeKind::Success, "saved");
        slot.dismiss();
        assert!(!slot.expire(seq));
    }
}
