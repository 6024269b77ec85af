use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::core::GridMode,
    foundation::error::{PictoplaceError, PictoplaceResult},
    motion::letter::{Letter, LetterType},
    motion::model::{Color, MotionState, MotionType},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Full symbolic state of one pictograph: the engine's only per-call input.
pub struct PictographKey {
    /// Letter assigned by the (external) classifier.
    pub letter: Letter,
    /// Grid the pictograph is drawn on.
    pub grid_mode: GridMode,
    /// Blue motion.
    pub blue: MotionState,
    /// Red motion.
    pub red: MotionState,
}

impl PictographKey {
    /// Build a key, checking that each motion carries its own color.
    pub fn new(
        letter: Letter,
        grid_mode: GridMode,
        blue: MotionState,
        red: MotionState,
    ) -> PictoplaceResult<Self> {
        let key = Self {
            letter,
            grid_mode,
            blue,
            red,
        };
        key.validate()?;
        Ok(key)
    }

    /// Parse and validate a pictograph from JSON.
    pub fn from_json_str(s: &str) -> PictoplaceResult<Self> {
        let key: Self = serde_json::from_str(s)?;
        key.validate()?;
        Ok(key)
    }

    /// Read, parse and validate a pictograph JSON file.
    pub fn from_path(path: &Path) -> PictoplaceResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read pictograph '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check model invariants that serde cannot express.
    pub fn validate(&self) -> PictoplaceResult<()> {
        if self.blue.color != Color::Blue || self.red.color != Color::Red {
            return Err(PictoplaceError::validation(
                "pictograph motions must be colored blue and red respectively",
            ));
        }
        for m in [&self.blue, &self.red] {
            if !m.turns.is_in_range() {
                return Err(PictoplaceError::validation(format!(
                    "{} motion: turns must be 0..=3 in half steps, got {}",
                    m.color.as_str(),
                    m.turns
                )));
            }
            if m.turns.is_float() != (m.motion_type == MotionType::Float) {
                return Err(PictoplaceError::validation(format!(
                    "{} motion: the 'fl' turns sentinel is reserved for float motions",
                    m.color.as_str()
                )));
            }
        }
        Ok(())
    }

    /// Structural category of the letter.
    pub fn letter_type(&self) -> LetterType {
        self.letter.letter_type()
    }

    /// Motion of the given color.
    pub fn motion(&self, color: Color) -> &MotionState {
        match color {
            Color::Blue => &self.blue,
            Color::Red => &self.red,
        }
    }

    /// The motion of the other color.
    pub fn other_motion(&self, color: Color) -> &MotionState {
        self.motion(color.other())
    }

    /// Both motions, blue first.
    pub fn motions(&self) -> [&MotionState; 2] {
        [&self.blue, &self.red]
    }

    /// First motion (blue first) matching `pred`.
    pub fn find_motion(&self, pred: impl Fn(&MotionState) -> bool) -> Option<&MotionState> {
        self.motions().into_iter().find(|&m| pred(m))
    }

    /// First motion of the given type.
    pub fn motion_of_type(&self, motion_type: MotionType) -> Option<&MotionState> {
        self.find_motion(|m| m.motion_type == motion_type)
    }

    /// First shift (`pro`, `anti`, `float`) motion.
    pub fn shift(&self) -> Option<&MotionState> {
        self.find_motion(MotionState::is_shift)
    }

    /// `true` when the two motions have different motion types.
    pub fn has_mixed_motion_types(&self) -> bool {
        self.blue.motion_type != self.red.motion_type
    }

    /// Both props end on the same location.
    pub fn props_share_end_location(&self) -> bool {
        self.blue.end_loc == self.red.end_loc
    }

    /// One motion starts radial and the other non-radial.
    pub fn starts_from_mixed_orientation(&self) -> bool {
        self.blue.start_layer() != self.red.start_layer()
    }

    /// Both motions start in the same orientation layer.
    pub fn starts_from_standard_orientation(&self) -> bool {
        !self.starts_from_mixed_orientation()
    }

    /// One prop ends radial and the other non-radial ("layer 3").
    pub fn ends_with_layer3(&self) -> bool {
        self.blue.end_layer() != self.red.end_layer()
    }

    /// One prop ends `in` and the other `out`.
    pub fn ends_with_in_out_ori(&self) -> bool {
        self.blue.end_ori.is_radial() && self.red.end_ori == self.blue.end_ori.complement()
    }

    /// One prop ends `clock` and the other `counter`.
    pub fn ends_with_clock_counter_ori(&self) -> bool {
        !self.blue.end_ori.is_radial() && self.red.end_ori == self.blue.end_ori.complement()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/pictograph.rs"]
mod tests;
