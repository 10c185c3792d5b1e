//! Poet-tag administration: list, inline quick-add, hide toggle, delete.
//!
//! # Design
//! - Tags are small rows; creation happens in an inline form above the
//!   table instead of an editor panel.
//! - Renames go through delete-and-recreate on the server side, so the
//!   form only creates.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
