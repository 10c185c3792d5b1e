//! Poetry administration: works list with an active and a trash view.
//!
//! # Design
//! - Delete is soft; rows move to the trash and stay restorable until they
//!   are purged for good.
//! - Duplicate posts a derived payload and refetches, because the copy's
//!   position in the list depends on server ordering.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
