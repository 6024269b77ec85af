use std::str::FromStr;

use crate::foundation::error::PictoplaceError;

pub use kurbo::{Point, Vec2};

/// Side length of the square scene the grid is drawn on.
pub const SCENE_SIZE: f64 = 950.0;

/// Center of the grid in scene coordinates.
pub const GRID_CENTER: Point = Point::new(SCENE_SIZE / 2.0, SCENE_SIZE / 2.0);

/// Radius of the hand points (where props sit) from the grid center.
pub const HAND_POINT_RADIUS: f64 = 143.1;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Grid variant the pictograph is drawn on.
pub enum GridMode {
    /// Hand points on the cardinal locations.
    Diamond,
    /// Hand points on the diagonal locations.
    Box,
}

impl GridMode {
    /// Both grid modes.
    pub const ALL: [GridMode; 2] = [GridMode::Diamond, GridMode::Box];

    /// Stable lowercase name, also used as the override data folder name.
    pub fn as_str(self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
        }
    }
}

impl FromStr for GridMode {
    type Err = PictoplaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diamond" => Ok(GridMode::Diamond),
            "box" => Ok(GridMode::Box),
            other => Err(PictoplaceError::validation(format!(
                "unknown grid mode '{other}'"
            ))),
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
/// One of the eight canonical grid locations.
pub enum Location {
    /// North.
    #[serde(rename = "n")]
    North,
    /// North-east.
    #[serde(rename = "ne")]
    NorthEast,
    /// East.
    #[serde(rename = "e")]
    East,
    /// South-east.
    #[serde(rename = "se")]
    SouthEast,
    /// South.
    #[serde(rename = "s")]
    South,
    /// South-west.
    #[serde(rename = "sw")]
    SouthWest,
    /// West.
    #[serde(rename = "w")]
    West,
    /// North-west.
    #[serde(rename = "nw")]
    NorthWest,
}

impl Location {
    /// All locations, clockwise from north.
    pub const ALL: [Location; 8] = [
        Location::North,
        Location::NorthEast,
        Location::East,
        Location::SouthEast,
        Location::South,
        Location::SouthWest,
        Location::West,
        Location::NorthWest,
    ];

    /// Stable short name (`"n"`, `"ne"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Location::North => "n",
            Location::NorthEast => "ne",
            Location::East => "e",
            Location::SouthEast => "se",
            Location::South => "s",
            Location::SouthWest => "sw",
            Location::West => "w",
            Location::NorthWest => "nw",
        }
    }

    /// Octant index counted clockwise from east (`e = 0`, `se = 1`, ..., `ne = 7`).
    pub fn octant(self) -> u8 {
        match self {
            Location::East => 0,
            Location::SouthEast => 1,
            Location::South => 2,
            Location::SouthWest => 3,
            Location::West => 4,
            Location::NorthWest => 5,
            Location::North => 6,
            Location::NorthEast => 7,
        }
    }

    /// Inverse of [`Location::octant`], taken modulo 8.
    pub fn from_octant(octant: i32) -> Location {
        match octant.rem_euclid(8) {
            0 => Location::East,
            1 => Location::SouthEast,
            2 => Location::South,
            3 => Location::SouthWest,
            4 => Location::West,
            5 => Location::NorthWest,
            6 => Location::North,
            _ => Location::NorthEast,
        }
    }

    /// Angle of the location seen from the grid center, degrees clockwise from `+x`.
    pub fn angle_deg(self) -> f64 {
        f64::from(self.octant()) * 45.0
    }

    /// Unit vector from the grid center toward this location (screen coordinates).
    pub fn unit_vec(self) -> Vec2 {
        let d = std::f64::consts::FRAC_1_SQRT_2;
        match self {
            Location::North => Vec2::new(0.0, -1.0),
            Location::NorthEast => Vec2::new(d, -d),
            Location::East => Vec2::new(1.0, 0.0),
            Location::SouthEast => Vec2::new(d, d),
            Location::South => Vec2::new(0.0, 1.0),
            Location::SouthWest => Vec2::new(-d, d),
            Location::West => Vec2::new(-1.0, 0.0),
            Location::NorthWest => Vec2::new(-d, -d),
        }
    }

    /// `true` for `n`, `e`, `s`, `w`.
    pub fn is_cardinal(self) -> bool {
        self.octant() % 2 == 0
    }

    /// Rotate by `steps` eighth-turns clockwise.
    pub fn rotated(self, steps: i32) -> Location {
        Location::from_octant(i32::from(self.octant()) + steps)
    }

    /// The diametrically opposite location.
    pub fn opposite(self) -> Location {
        self.rotated(4)
    }

    /// Reflection across the vertical axis (`e <-> w`, `ne <-> nw`, ...).
    pub fn mirrored(self) -> Location {
        Location::from_octant(4 - i32::from(self.octant()))
    }
}

impl FromStr for Location {
    type Err = PictoplaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| PictoplaceError::UnknownLocation(s.to_string()))
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Offset direction used by beta repositioning: four axis-aligned and four diagonal.
pub enum Direction {
    /// Toward `-y`.
    Up,
    /// Toward `+y`.
    Down,
    /// Toward `-x`.
    Left,
    /// Toward `+x`.
    Right,
    /// Toward `(+x, -y)`.
    UpRight,
    /// Toward `(-x, -y)`.
    UpLeft,
    /// Toward `(+x, +y)`.
    DownRight,
    /// Toward `(-x, +y)`.
    DownLeft,
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpRight => "upright",
            Direction::UpLeft => "upleft",
            Direction::DownRight => "downright",
            Direction::DownLeft => "downleft",
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpRight => Direction::DownLeft,
            Direction::UpLeft => Direction::DownRight,
            Direction::DownRight => Direction::UpLeft,
            Direction::DownLeft => Direction::UpRight,
        }
    }

    /// `true` for the four diagonal directions.
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpRight | Direction::UpLeft | Direction::DownRight | Direction::DownLeft
        )
    }

    /// Unit-sign vector of the direction (components in `{-1, 0, 1}`).
    pub fn signs(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::UpRight => Vec2::new(1.0, -1.0),
            Direction::UpLeft => Vec2::new(-1.0, -1.0),
            Direction::DownRight => Vec2::new(1.0, 1.0),
            Direction::DownLeft => Vec2::new(-1.0, 1.0),
        }
    }

    /// Snap a vector to the nearest of the eight directions; `None` for a (near) zero vector.
    pub fn from_vec(v: Vec2) -> Option<Direction> {
        if v.hypot() < 1e-9 {
            return None;
        }
        let deg = v.y.atan2(v.x).to_degrees().rem_euclid(360.0);
        let octant = ((deg / 45.0).round() as i32).rem_euclid(8);
        Some(match octant {
            0 => Direction::Right,
            1 => Direction::DownRight,
            2 => Direction::Down,
            3 => Direction::DownLeft,
            4 => Direction::Left,
            5 => Direction::UpLeft,
            6 => Direction::Up,
            _ => Direction::UpRight,
        })
    }
}

impl FromStr for Direction {
    type Err = PictoplaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| PictoplaceError::UnknownDirection(s.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
