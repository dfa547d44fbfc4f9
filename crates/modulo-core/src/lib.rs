//! # Modulo Core
//!
//! Shape model for composing furniture from rectangular modules: geometry
//! primitives, module kinds and their collision categories, canvas bounds,
//! editor settings, design documents, and the cut-list deriver.
//!
//! Everything here is plain data and pure functions; the placement engine
//! and the interactive session build on top of it.

pub mod geometry;
pub mod module;
pub mod category;
pub mod canvas;
pub mod shape;
pub mod cutlist;
pub mod design;
pub mod settings;

pub use canvas::Canvas;
pub use category::{category_of, Category};
pub use cutlist::{cut_list, cuts_for, CutLine};
pub use design::{Design, DesignError};
pub use geometry::{overlaps, BBox, Point, Rect};
pub use module::{Footprint, Module};
pub use settings::EditorSettings;
pub use shape::{Count, Dimension, RecordId, Shape, ShapeError, ShapeId, ShapeRecord};
