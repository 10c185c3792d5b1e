//! Shared building blocks used across pages.
pub(crate) mod confirm;
pub(crate) mod empty_state;
pub(crate) mod notice_host;
pub(crate) mod pagination;
pub(crate) mod search_input;
pub(crate) mod shell;
