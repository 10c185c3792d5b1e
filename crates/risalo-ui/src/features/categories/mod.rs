//! Category administration: list, create/edit, flag toggles, delete.
//!
//! # Design
//! - Row toggles wait for server confirmation before the table changes.
//! - The editor works on string form state; conversion to the wire payload
//!   happens on save.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
