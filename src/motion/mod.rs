//! Symbolic state of a pictograph.
//!
//! Nothing here knows about scene coordinates beyond unit vectors of grid locations.

/// Letters and their structural groups.
pub mod letter;
/// Colors, motion types, orientations, turns and the per-motion record.
pub mod model;
/// The full per-pictograph input key.
pub mod pictograph;
/// Prop kinds and their size classes.
pub mod prop;
/// Mirror, rotate and color-swap transforms.
pub mod symmetry;
