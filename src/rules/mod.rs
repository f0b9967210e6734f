//! Rule implementations.
//!
//! Both checks are pure functions of a [`SemanticModel`](crate::model::SemanticModel)
//! and hold no state, so each call expression and each method declaration is
//! checked as an independent parallel task.
//!
//! ## Module Structure
//!
//! - `marker`: Marker attribute lookup shared by both checks
//! - `call_site`: ICG001, non-interface type arguments at call sites
//! - `declaration`: ICG002, marker applied to an unsuitable method

pub mod call_site;
pub mod declaration;
pub mod marker;

pub use marker::{MARKER_ATTRIBUTE, has_marker};
