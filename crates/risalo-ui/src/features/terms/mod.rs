//! Poetic-terms glossary (public, read-only).

#[cfg(target_arch = "wasm32")]
pub mod view;
