//! Page features, one slice per route.
//!
//! Each slice follows the same split: `state`/`logic`/`actions` are
//! target-independent and unit-tested natively, `api`/`view` compile for
//! wasm32 only.

pub mod archive;
pub mod categories;
pub mod poetry;
pub mod romanizer;
pub mod settings;
pub mod tags;
pub mod terms;
