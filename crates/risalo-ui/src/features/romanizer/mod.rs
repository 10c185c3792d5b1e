//! Romaniser dictionary administration: transliteration lexicon and
//! hesudhar spelling corrections side by side.
//!
//! # Design
//! - Two independent collection controllers share the page and one notice
//!   slot; a mutation on one table never refetches the other.
//! - The transliteration engine itself lives server-side; this page only
//!   manages its lookup tables.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
