//! Store types for UI state management
//!
//! Plain state structs driven by pure transition functions. Pages hold
//! them in signals and feed them events; the transitions themselves
//! never touch the framework, so they are tested without rendering.

pub mod gig_edit;
pub mod gig_list;

pub use gig_edit::*;
pub use gig_list::*;
