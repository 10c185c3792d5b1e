//! Site settings: public-archive defaults, site titles, admin session.
//!
//! # Design
//! - The settings document is a singleton; the form loads it once and puts
//!   the whole document back on save.
//! - The token box only installs the session; request headers pick it up
//!   through the shared client.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
