//! Symmetry transforms used by continuous action patterns (CAP).
//!
//! A reflected or rotated sequence keeps the letter of every beat; only the locations,
//! rotation directions and (for mirrors) the non-radial orientations change.

use crate::{
    foundation::core::GridMode,
    motion::model::{Color, MotionState},
    motion::pictograph::PictographKey,
};

impl MotionState {
    /// Reflect across the vertical axis.
    pub fn mirrored(&self) -> MotionState {
        MotionState {
            start_loc: self.start_loc.mirrored(),
            end_loc: self.end_loc.mirrored(),
            start_ori: self.start_ori.mirrored(),
            end_ori: self.end_ori.mirrored(),
            prop_rot_dir: self.prop_rot_dir.mirrored(),
            prefloat_prop_rot_dir: self.prefloat_prop_rot_dir.map(|d| d.mirrored()),
            ..*self
        }
    }

    /// Rotate locations by `steps` eighth-turns clockwise.
    pub fn rotated(&self, steps: i32) -> MotionState {
        MotionState {
            start_loc: self.start_loc.rotated(steps),
            end_loc: self.end_loc.rotated(steps),
            ..*self
        }
    }

    /// Same motion performed by the other hand.
    pub fn recolored(&self, color: Color) -> MotionState {
        MotionState { color, ..*self }
    }
}

impl PictographKey {
    /// Vertical mirror of the whole pictograph.
    pub fn mirrored(&self) -> PictographKey {
        PictographKey {
            blue: self.blue.mirrored(),
            red: self.red.mirrored(),
            ..*self
        }
    }

    /// Blue and red exchange their motions.
    pub fn color_swapped(&self) -> PictographKey {
        PictographKey {
            blue: self.red.recolored(Color::Blue),
            red: self.blue.recolored(Color::Red),
            ..*self
        }
    }

    /// Rotate both motions by `steps` eighth-turns clockwise.
    ///
    /// An odd step count moves cardinal locations onto diagonals, so the grid mode flips.
    pub fn rotated(&self, steps: i32) -> PictographKey {
        let grid_mode = if steps.rem_euclid(2) == 1 {
            match self.grid_mode {
                GridMode::Diamond => GridMode::Box,
                GridMode::Box => GridMode::Diamond,
            }
        } else {
            self.grid_mode
        };
        PictographKey {
            grid_mode,
            blue: self.blue.rotated(steps),
            red: self.red.rotated(steps),
            ..*self
        }
    }

    /// Counterpart written alongside an override entry: mirrored, then colors swapped.
    pub fn mirrored_counterpart(&self) -> PictographKey {
        self.mirrored().color_swapped()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/symmetry.rs"]
mod tests;
