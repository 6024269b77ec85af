use crate::{
    foundation::math::{angle_of, normalize_degrees},
    motion::model::{Color, MotionState, MotionType, Orientation, PropRotDir},
    motion::pictograph::PictographKey,
    placement::special::{OverrideTable, SpecialPlacementStore},
    placement::turns_key::TurnsKeyGenerator,
};

const SUFFIX: &str = "rot_angle_override";

/// Rotation of arrow and prop glyphs, in degrees clockwise from `+x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationAngleResolver;

impl RotationAngleResolver {
    /// Field name a rotation override for `color`'s arrow is stored under.
    ///
    /// Only dash and static arrows can carry one.
    pub fn override_key(pictograph: &PictographKey, color: Color) -> Option<String> {
        let motion = pictograph.motion(color);
        if !matches!(motion.motion_type, MotionType::Dash | MotionType::Static) {
            return None;
        }
        let kind = motion.motion_type.as_str();
        let key = if pictograph.letter.is_pure_rotation() {
            format!("{}_{SUFFIX}", color.as_str())
        } else if pictograph.starts_from_mixed_orientation() {
            format!("{kind}_from_{}_{SUFFIX}", motion.start_layer().as_str())
        } else if pictograph.ends_with_layer3() {
            format!("{kind}_to_{}_{SUFFIX}", motion.end_layer().as_str())
        } else {
            format!("{kind}_{SUFFIX}")
        };
        Some(key)
    }

    /// Overridden angle of `color`'s arrow, if `table` has one.
    pub fn override_angle(
        table: &OverrideTable,
        pictograph: &PictographKey,
        color: Color,
    ) -> Option<f64> {
        let field = Self::override_key(pictograph, color)?;
        let turns_key = TurnsKeyGenerator::generate(pictograph)?;
        let ori_key = SpecialPlacementStore::ori_key_for(pictograph, color);
        table
            .lookup(
                pictograph.grid_mode,
                ori_key,
                pictograph.letter,
                &turns_key,
                &field,
            )?
            .as_rotation()
    }

    /// `true` when `table` overrides the angle of `color`'s arrow.
    pub fn has_override(table: &OverrideTable, pictograph: &PictographKey, color: Color) -> bool {
        Self::override_angle(table, pictograph, color).is_some()
    }

    /// Final arrow angle: the override when present, the computed default otherwise.
    pub fn angle_for(table: &OverrideTable, pictograph: &PictographKey, color: Color) -> f64 {
        Self::override_angle(table, pictograph, color)
            .map(normalize_degrees)
            .unwrap_or_else(|| Self::default_arrow_angle(pictograph.motion(color)))
    }

    /// Arrows point along their travel; a static arrow points outward, quarter-turned by
    /// its rotation direction.
    pub fn default_arrow_angle(motion: &MotionState) -> f64 {
        match motion.motion_type {
            MotionType::Pro | MotionType::Anti | MotionType::Float | MotionType::Dash => {
                angle_of(motion.travel())
            }
            MotionType::Static => {
                let quarter = match motion.prop_rot_dir {
                    PropRotDir::Clockwise => 90.0,
                    PropRotDir::CounterClockwise => 270.0,
                    PropRotDir::NoRotation => 0.0,
                };
                normalize_degrees(motion.start_loc.angle_deg() + quarter)
            }
        }
    }

    /// Prop angle from its end orientation relative to its end location.
    pub fn prop_angle(motion: &MotionState) -> f64 {
        let facing = match motion.end_ori {
            Orientation::Out => 0.0,
            Orientation::Clock => 90.0,
            Orientation::In => 180.0,
            Orientation::Counter => 270.0,
        };
        normalize_degrees(motion.end_loc.angle_deg() + facing)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/rotation.rs"]
mod tests;
