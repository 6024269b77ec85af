use crate::{
    foundation::core::{GRID_CENTER, GridMode, Location, Point, Vec2},
    foundation::error::PictoplaceResult,
    motion::model::{Color, MotionState, MotionType, PropRotDir},
};

/// Grid-coordinate lookups that give every glyph its base (non-adjusted) position.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPlacementProvider;

impl DefaultPlacementProvider {
    /// Offset of `location` from the grid center.
    ///
    /// Hand points (cardinals in diamond mode, diagonals in box mode) sit at radius 143.1;
    /// the other four locations are the outer layer-2 points.
    pub fn get_default_offset(location: Location, grid_mode: GridMode) -> Vec2 {
        use Location::*;
        match (grid_mode, location) {
            (GridMode::Diamond, North) => Vec2::new(0.0, -143.1),
            (GridMode::Diamond, East) => Vec2::new(143.1, 0.0),
            (GridMode::Diamond, South) => Vec2::new(0.0, 143.1),
            (GridMode::Diamond, West) => Vec2::new(-143.1, 0.0),
            (GridMode::Diamond, NorthEast) => Vec2::new(143.1, -143.1),
            (GridMode::Diamond, SouthEast) => Vec2::new(143.1, 143.1),
            (GridMode::Diamond, SouthWest) => Vec2::new(-143.1, 143.1),
            (GridMode::Diamond, NorthWest) => Vec2::new(-143.1, -143.1),
            (GridMode::Box, NorthEast) => Vec2::new(101.2, -101.2),
            (GridMode::Box, SouthEast) => Vec2::new(101.2, 101.2),
            (GridMode::Box, SouthWest) => Vec2::new(-101.2, 101.2),
            (GridMode::Box, NorthWest) => Vec2::new(-101.2, -101.2),
            (GridMode::Box, North) => Vec2::new(0.0, -202.4),
            (GridMode::Box, East) => Vec2::new(202.4, 0.0),
            (GridMode::Box, South) => Vec2::new(0.0, 202.4),
            (GridMode::Box, West) => Vec2::new(-202.4, 0.0),
        }
    }

    /// Boundary variant of [`Self::get_default_offset`] taking a location name.
    pub fn get_default_offset_by_name(name: &str, grid_mode: GridMode) -> PictoplaceResult<Vec2> {
        let location: Location = name.parse()?;
        Ok(Self::get_default_offset(location, grid_mode))
    }

    /// Absolute scene position of `location`.
    pub fn default_position(location: Location, grid_mode: GridMode) -> Point {
        GRID_CENTER + Self::get_default_offset(location, grid_mode)
    }

    /// Base `(dx, dy)` adjustment of an arrow when no special placement exists.
    ///
    /// Values are authored for the canonical quadrant and turned into the arrow's actual
    /// quadrant by the directional adjustment stage.
    pub fn default_adjustment(motion: &MotionState) -> Vec2 {
        let t = motion.turns;
        match motion.motion_type {
            MotionType::Pro if t.is_whole() => Vec2::new(25.0, 25.0),
            MotionType::Pro => Vec2::new(35.0, 15.0),
            MotionType::Anti if t.is_whole() => Vec2::new(20.0, 30.0),
            MotionType::Anti => Vec2::new(30.0, 10.0),
            MotionType::Float => Vec2::new(20.0, 20.0),
            MotionType::Dash if t.is_zero() => Vec2::ZERO,
            MotionType::Dash if t.is_whole() => Vec2::new(45.0, 0.0),
            MotionType::Dash => Vec2::new(45.0, 15.0),
            MotionType::Static if t.is_zero() => Vec2::ZERO,
            MotionType::Static if t.is_whole() => Vec2::new(40.0, -25.0),
            MotionType::Static => Vec2::new(40.0, -10.0),
        }
    }

    /// Location an arrow is anchored at.
    ///
    /// Shifts sit between their start and end; statics sit on their location; dashes sit on
    /// the side of their travel axis given by their rotation direction.
    pub fn arrow_location(motion: &MotionState, other: &MotionState) -> Location {
        match motion.motion_type {
            MotionType::Pro | MotionType::Anti | MotionType::Float => shift_location(motion),
            MotionType::Static => motion.start_loc,
            MotionType::Dash => dash_location(motion, other),
        }
    }
}

fn shift_location(motion: &MotionState) -> Location {
    let a = i32::from(motion.start_loc.octant());
    let b = i32::from(motion.end_loc.octant());
    match (b - a).rem_euclid(8) {
        2 => Location::from_octant(a + 1),
        6 => Location::from_octant(a - 1),
        _ => motion.end_loc,
    }
}

fn dash_location(motion: &MotionState, other: &MotionState) -> Location {
    let cw_side = motion.start_loc.rotated(2);
    let ccw_side = motion.start_loc.rotated(-2);
    match motion.prop_rot_dir {
        PropRotDir::Clockwise => cw_side,
        PropRotDir::CounterClockwise => ccw_side,
        PropRotDir::NoRotation => match other.motion_type {
            MotionType::Dash if other.start_loc == motion.start_loc => match motion.color {
                Color::Blue => cw_side,
                Color::Red => ccw_side,
            },
            MotionType::Pro | MotionType::Anti | MotionType::Float => {
                let shift_at = shift_location(other).unit_vec();
                let cw_dist = (cw_side.unit_vec() - shift_at).hypot();
                let ccw_dist = (ccw_side.unit_vec() - shift_at).hypot();
                if ccw_dist > cw_dist + 1e-9 {
                    ccw_side
                } else {
                    cw_side
                }
            }
            _ => cw_side,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/default.rs"]
mod tests;
