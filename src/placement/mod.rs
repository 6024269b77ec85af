//! Placement pipeline.
//!
//! Per glyph: default position, directional adjustment (or its override), beta
//! repositioning for props that share a location, then rotation.

/// Beta offset magnitudes and their cache.
pub mod beta;
/// Default grid positions, arrow anchors and adjustment magnitudes.
pub mod default;
/// Quadrant-aware adjustment of arrow offsets.
pub mod directional;
/// The engine.
pub mod orchestrator;
/// Letter-group beta strategies.
pub mod reposition;
/// Arrow and prop rotation angles.
pub mod rotation;
/// Override data store.
pub mod special;
/// Turns-tuple keys.
pub mod turns_key;
