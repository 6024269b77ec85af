//! Beta repositioning: separating two props that end on the same location.
//!
//! Small props and big unilateral props check their guards in a different order, so each
//! class gets its own [`BetaStrategy`]. Both share the letter-group dispatch that picks an
//! anchor prop and its direction; the other prop always moves the opposite way.

use crate::{
    foundation::core::{Direction, Location, Vec2},
    foundation::math::turn_cw,
    motion::letter::BetaLetterGroup,
    motion::model::{Color, MotionState, MotionType, PropRotDir},
    motion::pictograph::PictographKey,
    motion::prop::{PropClassification, PropType},
    placement::beta::PositionOffsetCache,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Displacement of each prop from its default position.
pub struct BetaOffsets {
    /// Blue prop offset.
    pub blue: Vec2,
    /// Red prop offset.
    pub red: Vec2,
}

impl BetaOffsets {
    /// Offset of the given prop.
    pub fn get(&self, color: Color) -> Vec2 {
        match color {
            Color::Blue => self.blue,
            Color::Red => self.red,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Result of beta repositioning. Positions are never mutated; callers apply this.
pub enum BetaOutcome {
    /// Both props go back to their default (non-beta) position.
    Reset,
    /// No conflict or nothing to do.
    Unmoved,
    /// Move the props apart.
    Offset(BetaOffsets),
}

impl BetaOutcome {
    /// Offset to apply to `color`'s prop (zero unless [`BetaOutcome::Offset`]).
    pub fn offset_for(&self, color: Color) -> Vec2 {
        match self {
            BetaOutcome::Offset(offsets) => offsets.get(color),
            BetaOutcome::Reset | BetaOutcome::Unmoved => Vec2::ZERO,
        }
    }
}

/// Guard ordering for one prop class.
pub trait BetaStrategy {
    /// Decide whether and how the two props of `pictograph` separate.
    fn reposition(
        &self,
        pictograph: &PictographKey,
        prop_type: PropType,
        offsets: &mut PositionOffsetCache,
    ) -> BetaOutcome;
}

/// Every prop class except big unilateral props.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmallPropStrategy;

impl BetaStrategy for SmallPropStrategy {
    fn reposition(
        &self,
        pictograph: &PictographKey,
        prop_type: PropType,
        offsets: &mut PositionOffsetCache,
    ) -> BetaOutcome {
        if !pictograph.props_share_end_location() {
            return BetaOutcome::Unmoved;
        }
        if pictograph.ends_with_layer3() {
            return BetaOutcome::Reset;
        }
        if ends_facing_apart(pictograph)
            && prop_type.classification() == PropClassification::SmallUnilateral
        {
            return BetaOutcome::Unmoved;
        }
        match pictograph.letter.beta_group() {
            Some(group) => apply_group(group, pictograph, prop_type, offsets),
            None => BetaOutcome::Unmoved,
        }
    }
}

/// Big unilateral props (big hoop, guitar, sword, ...).
#[derive(Clone, Copy, Debug, Default)]
pub struct BigUnilateralStrategy;

impl BetaStrategy for BigUnilateralStrategy {
    fn reposition(
        &self,
        pictograph: &PictographKey,
        prop_type: PropType,
        offsets: &mut PositionOffsetCache,
    ) -> BetaOutcome {
        // Checked before anything else, shared location or not.
        if pictograph.ends_with_layer3() {
            return BetaOutcome::Reset;
        }
        if !pictograph.props_share_end_location() || ends_facing_apart(pictograph) {
            return BetaOutcome::Unmoved;
        }
        match pictograph.letter.beta_group() {
            Some(group) => apply_group(group, pictograph, prop_type, offsets),
            // Letters outside the groups stay where they are.
            None => BetaOutcome::Unmoved,
        }
    }
}

/// Picks the strategy for the active prop type.
#[derive(Clone, Copy, Debug, Default)]
pub struct LetterGroupRepositioner;

impl LetterGroupRepositioner {
    /// Beta outcome for `pictograph` with props of `prop_type`.
    pub fn reposition(
        pictograph: &PictographKey,
        prop_type: PropType,
        offsets: &mut PositionOffsetCache,
    ) -> BetaOutcome {
        match prop_type.classification() {
            PropClassification::BigUnilateral => {
                BigUnilateralStrategy.reposition(pictograph, prop_type, offsets)
            }
            PropClassification::SmallUnilateral
            | PropClassification::SmallBilateral
            | PropClassification::BigBilateral => {
                SmallPropStrategy.reposition(pictograph, prop_type, offsets)
            }
        }
    }
}

fn ends_facing_apart(p: &PictographKey) -> bool {
    p.ends_with_in_out_ori() || p.ends_with_clock_counter_ori()
}

fn apply_group(
    group: BetaLetterGroup,
    pictograph: &PictographKey,
    prop_type: PropType,
    offsets: &mut PositionOffsetCache,
) -> BetaOutcome {
    let Some((anchor, direction)) = anchor_direction(group, pictograph) else {
        return BetaOutcome::Unmoved;
    };
    let size = prop_type.size_class();
    let moved = offsets.get(size, direction);
    let other = offsets.get(size, direction.opposite());
    let (blue, red) = match anchor {
        Color::Blue => (moved, other),
        Color::Red => (other, moved),
    };
    BetaOutcome::Offset(BetaOffsets { blue, red })
}

/// Prop that leads the separation and the direction it moves in.
fn anchor_direction(group: BetaLetterGroup, p: &PictographKey) -> Option<(Color, Direction)> {
    match group {
        BetaLetterGroup::GH | BetaLetterGroup::JKL => Some((Color::Red, travel_direction(&p.red)?)),
        BetaLetterGroup::I => {
            let pro = p.motion_of_type(MotionType::Pro)?;
            Some((pro.color, travel_direction(pro)?))
        }
        BetaLetterGroup::YZ | BetaLetterGroup::YZDash => {
            let shift = p.shift()?;
            Some((shift.color, travel_direction(shift)?))
        }
        BetaLetterGroup::Beta => Some((
            Color::Red,
            perpendicular(p.red.end_loc, PropRotDir::Clockwise)?,
        )),
        BetaLetterGroup::Psi => {
            let dash = p.motion_of_type(MotionType::Dash)?;
            Some((dash.color, perpendicular(dash.end_loc, dash.prop_rot_dir)?))
        }
        BetaLetterGroup::PsiDash => Some((
            Color::Red,
            perpendicular(p.red.end_loc, p.red.prop_rot_dir)?,
        )),
    }
}

/// Direction the hand was moving in when it arrived, along the grid circle.
fn travel_direction(motion: &MotionState) -> Option<Direction> {
    let travel = motion.travel();
    let radial = motion.end_loc.unit_vec();
    Direction::from_vec(travel - radial * travel.dot(radial))
}

/// Tangent at `location`, clockwise unless the rotation is counter-clockwise.
fn perpendicular(location: Location, rot: PropRotDir) -> Option<Direction> {
    let cw = turn_cw(location.unit_vec());
    match rot {
        PropRotDir::CounterClockwise => Direction::from_vec(-cw),
        PropRotDir::Clockwise | PropRotDir::NoRotation => Direction::from_vec(cw),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/reposition.rs"]
mod tests;
