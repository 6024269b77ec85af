//! Pictoplace resolves where the glyphs of a kinetic-movement pictograph go.
//!
//! A pictograph is two colored motions (blue, red) on a grid; each motion is drawn as an arrow
//! and a prop. Given the symbolic state of a pictograph the engine returns the final scene
//! position and rotation of all four glyphs:
//!
//! - Build or parse a [`PictographKey`]
//! - Load override data into a [`SpecialPlacementStore`]
//! - Create a [`PlacementEngine`] and call [`PlacementEngine::compute`]
//!
//! Placement is total: a valid key always gets an answer, falling back to the default
//! placement tables when no override applies.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Symbolic motion model: motions, letters, props and symmetry transforms.
pub mod motion;
/// Placement pipeline stages and the engine that runs them.
pub mod placement;

pub use crate::foundation::core::{
    Direction, GRID_CENTER, GridMode, HAND_POINT_RADIUS, Location, Point, SCENE_SIZE, Vec2,
};
pub use crate::foundation::error::{PictoplaceError, PictoplaceResult};

pub use crate::motion::letter::{BetaLetterGroup, Letter, LetterType};
pub use crate::motion::model::{
    Color, MotionState, MotionType, OriLayer, Orientation, PropRotDir, Turns,
};
pub use crate::motion::pictograph::PictographKey;
pub use crate::motion::prop::{PropClassification, PropSizeClass, PropType};
pub use crate::placement::orchestrator::{
    EngineSettings, PictographPlacement, PlacementEngine, PlacementResult,
};
pub use crate::placement::special::{
    OrientationKey, OverrideTable, OverrideValue, SpecialPlacementStore,
};
pub use crate::placement::turns_key::{TurnsKeyGenerator, TurnsTupleKey};
