//! Public couplet archive: browse, search, filter. No admin actions.
//!
//! # Design
//! - Settings seed the page size and the romanised-text toggle once per
//!   mount; the defaults stand when that fetch fails.
//! - A built-in sample set renders only when the first load fails. Rows
//!   that once came from the server are never replaced by samples.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
