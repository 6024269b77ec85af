use crate::{
    foundation::core::{Location, Vec2},
    foundation::math::{reflect_across, rotate_deg, turn_cw_n},
    motion::model::{MotionState, MotionType, PropRotDir},
    placement::default::DefaultPlacementProvider,
};

/// Turns an arrow's canonical `(dx, dy)` adjustment into the one for its actual quadrant.
///
/// Adjustments are authored for the north-east quadrant (diagonal anchors) or the north
/// location (cardinal anchors). The eight variants are the four clockwise quarter turns of
/// that base followed by the same four turns of its reflection across the canonical axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectionalAdjustmentCalculator;

impl DirectionalAdjustmentCalculator {
    /// Directional adjustment of `motion`'s arrow; `other` is the pictograph's second motion.
    pub fn compute(base: Vec2, motion: &MotionState, other: &MotionState) -> Vec2 {
        let location = DefaultPlacementProvider::arrow_location(motion, other);
        let variants = Self::variants(base, location.is_cardinal());
        let index = Self::quadrant_index(location, motion.motion_type, rotation_of(motion));
        variants.get(index).copied().unwrap_or(Vec2::ZERO)
    }

    /// The eight candidate adjustments for `base`.
    pub fn variants(base: Vec2, cardinal: bool) -> [Vec2; 8] {
        let (base, axis) = if cardinal {
            (rotate_deg(base, -45.0), Location::North.unit_vec())
        } else {
            (base, Location::NorthEast.unit_vec())
        };
        let reflected = reflect_across(base, axis);
        std::array::from_fn(|i| {
            if i < 4 {
                turn_cw_n(base, i)
            } else {
                turn_cw_n(reflected, i - 4)
            }
        })
    }

    /// Index into [`Self::variants`] for an arrow anchored at `location`.
    ///
    /// `0..4` walks the quadrants clockwise from the canonical one (`ne` or `n`); shifts that
    /// turn counter-clockwise select the reflected family `4..8`.
    pub fn quadrant_index(
        location: Location,
        motion_type: MotionType,
        prop_rot_dir: PropRotDir,
    ) -> usize {
        let canonical = if location.is_cardinal() {
            Location::North
        } else {
            Location::NorthEast
        };
        let steps = i32::from(location.octant()) - i32::from(canonical.octant());
        let quadrant = (steps.rem_euclid(8) / 2) as usize;
        let reflected = motion_type.is_shift() && prop_rot_dir == PropRotDir::CounterClockwise;
        if reflected { quadrant + 4 } else { quadrant }
    }
}

// Floats keep the handedness they had before floating.
fn rotation_of(motion: &MotionState) -> PropRotDir {
    match motion.motion_type {
        MotionType::Float => motion.prefloat_prop_rot_dir.unwrap_or(PropRotDir::NoRotation),
        _ => motion.prop_rot_dir,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/directional.rs"]
mod tests;
