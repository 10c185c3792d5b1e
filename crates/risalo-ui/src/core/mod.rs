//! Core, DOM-free primitives for the Risalo UI.
pub mod collection;
pub mod display;
pub mod notice;
pub mod pager;
pub mod query;
pub mod session;
pub mod store;
pub mod validate;
