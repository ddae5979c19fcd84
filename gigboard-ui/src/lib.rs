//! gigboard-ui - Shared UI types and components for gigboard
//!
//! Contains display types, stores, and pure view components used by the
//! admin web console. Nothing in this crate performs I/O; page behavior
//! lives in plain state structs with pure transition functions so it is
//! testable without rendering.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
