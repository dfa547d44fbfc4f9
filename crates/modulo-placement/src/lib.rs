//! # Modulo Placement
//!
//! Decides where a dropped or dragged module ends up. A candidate that
//! overlaps nothing is accepted in place; otherwise its category picks a
//! resolver (lift onto a top, snap against neighbours, or centre over the
//! cabinets) and the result is either accepted or rejected.
//!
//! The engine is pure: it reads a shape slice and returns a [`Placement`],
//! leaving the caller to commit or revert.

pub mod index;
pub mod snap;
pub mod centre;
pub mod outcome;
pub mod engine;

pub use engine::PlacementEngine;
pub use index::ShapeIndex;
pub use outcome::{GhostPreview, Placement, RejectReason, Resolution};
pub use snap::{Side, SnapOutcome};
pub use centre::Stack;
