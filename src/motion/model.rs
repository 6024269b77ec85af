use std::{fmt, str::FromStr};

use crate::foundation::core::{Location, Vec2};
use crate::foundation::error::{PictoplaceError, PictoplaceResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
/// Which of the two hands a motion belongs to.
pub enum Color {
    /// Blue (left) hand.
    Blue,
    /// Red (right) hand.
    Red,
}

impl Color {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }

    /// The other color.
    pub fn other(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Kinematic category of one motion.
pub enum MotionType {
    /// Prospin shift.
    Pro,
    /// Antispin shift.
    Anti,
    /// Shift with indeterminate prop rotation.
    Float,
    /// Travel through the center to the opposite location.
    Dash,
    /// Hand stays in place.
    Static,
}

impl MotionType {
    /// Stable lowercase name, also used in override field names.
    pub fn as_str(self) -> &'static str {
        match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Float => "float",
            MotionType::Dash => "dash",
            MotionType::Static => "static",
        }
    }

    /// `pro`, `anti` and `float` move the hand to an adjacent location.
    pub fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Facing of a prop at the start or end of a motion.
pub enum Orientation {
    /// Pointing toward the grid center.
    In,
    /// Pointing away from the grid center.
    Out,
    /// Perpendicular, clockwise.
    Clock,
    /// Perpendicular, counter-clockwise.
    Counter,
}

impl Orientation {
    /// `in` and `out` are radial; `clock` and `counter` are not.
    pub fn is_radial(self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }

    /// Orientation layer this orientation belongs to.
    pub fn layer(self) -> OriLayer {
        if self.is_radial() {
            OriLayer::Layer1
        } else {
            OriLayer::Layer2
        }
    }

    /// Reflected orientation: radial stays, `clock <-> counter`.
    pub fn mirrored(self) -> Orientation {
        match self {
            Orientation::Clock => Orientation::Counter,
            Orientation::Counter => Orientation::Clock,
            other => other,
        }
    }

    /// The orientation paired with this one in an "opposite" end state
    /// (`in <-> out`, `clock <-> counter`).
    pub fn complement(self) -> Orientation {
        match self {
            Orientation::In => Orientation::Out,
            Orientation::Out => Orientation::In,
            Orientation::Clock => Orientation::Counter,
            Orientation::Counter => Orientation::Clock,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Orientation layer: radial (`layer1`) or non-radial (`layer2`).
pub enum OriLayer {
    /// `in` / `out`.
    Layer1,
    /// `clock` / `counter`.
    Layer2,
}

impl OriLayer {
    /// `"layer1"` / `"layer2"`.
    pub fn as_str(self) -> &'static str {
        match self {
            OriLayer::Layer1 => "layer1",
            OriLayer::Layer2 => "layer2",
        }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Rotation direction of the prop during a motion.
pub enum PropRotDir {
    /// Clockwise.
    Clockwise,
    /// Counter-clockwise.
    CounterClockwise,
    /// No rotation (static or dash without turns, float).
    NoRotation,
}

impl PropRotDir {
    /// Short token used in turns keys; `None` for [`PropRotDir::NoRotation`].
    pub fn token(self) -> Option<&'static str> {
        match self {
            PropRotDir::Clockwise => Some("cw"),
            PropRotDir::CounterClockwise => Some("ccw"),
            PropRotDir::NoRotation => None,
        }
    }

    /// Reflected rotation direction.
    pub fn mirrored(self) -> PropRotDir {
        match self {
            PropRotDir::Clockwise => PropRotDir::CounterClockwise,
            PropRotDir::CounterClockwise => PropRotDir::Clockwise,
            PropRotDir::NoRotation => PropRotDir::NoRotation,
        }
    }
}

/// Rotation count of a motion: `0..=3` in half steps, or the `float` sentinel.
///
/// Numeric turns are stored as a half-step count so equality and hashing are exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "TurnsRepr", into = "TurnsRepr")]
pub enum Turns {
    /// `n` half turns, `n` in `0..=6`.
    Half(u8),
    /// Indeterminate orientation ("fl").
    Float,
}

impl Turns {
    /// Zero turns.
    pub const ZERO: Turns = Turns::Half(0);

    const MAX_HALVES: u8 = 6;

    /// Build from a numeric value; must be one of `0, 0.5, ..., 3`.
    pub fn new(value: f64) -> PictoplaceResult<Self> {
        let halves = value * 2.0;
        if !halves.is_finite()
            || halves.fract() != 0.0
            || halves < 0.0
            || halves > f64::from(Self::MAX_HALVES)
        {
            return Err(PictoplaceError::validation(format!(
                "turns must be 0..=3 in half steps, got {value}"
            )));
        }
        Ok(Turns::Half(halves as u8))
    }

    /// Numeric value, `None` for the float sentinel.
    pub fn value(self) -> Option<f64> {
        match self {
            Turns::Half(h) => Some(f64::from(h) / 2.0),
            Turns::Float => None,
        }
    }

    /// `true` for exactly zero numeric turns.
    pub fn is_zero(self) -> bool {
        self == Turns::ZERO
    }

    /// `true` for numeric turns greater than zero.
    pub fn is_turning(self) -> bool {
        matches!(self, Turns::Half(h) if h > 0)
    }

    /// `true` for the float sentinel or a half-step count within `0..=3` turns.
    pub fn is_in_range(self) -> bool {
        matches!(self, Turns::Float) || matches!(self, Turns::Half(h) if h <= Self::MAX_HALVES)
    }

    /// `true` for the float sentinel.
    pub fn is_float(self) -> bool {
        self == Turns::Float
    }

    /// `true` for whole numeric turns.
    pub fn is_whole(self) -> bool {
        matches!(self, Turns::Half(h) if h % 2 == 0)
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Turns::Half(h) if h % 2 == 0 => write!(f, "{}", h / 2),
            Turns::Half(h) => write!(f, "{}.5", h / 2),
            Turns::Float => f.write_str("fl"),
        }
    }
}

impl FromStr for Turns {
    type Err = PictoplaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "fl" {
            return Ok(Turns::Float);
        }
        let v: f64 = s
            .parse()
            .map_err(|_| PictoplaceError::validation(format!("invalid turns token '{s}'")))?;
        Turns::new(v)
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum TurnsRepr {
    Num(f64),
    Token(String),
}

impl TryFrom<TurnsRepr> for Turns {
    type Error = PictoplaceError;

    fn try_from(value: TurnsRepr) -> Result<Self, Self::Error> {
        match value {
            TurnsRepr::Num(v) => Turns::new(v),
            TurnsRepr::Token(s) => s.parse(),
        }
    }
}

impl From<Turns> for TurnsRepr {
    fn from(value: Turns) -> Self {
        match value.value() {
            Some(v) => TurnsRepr::Num(v),
            None => TurnsRepr::Token("fl".to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Symbolic attributes of one colored motion.
pub struct MotionState {
    /// Hand this motion belongs to.
    pub color: Color,
    /// Kinematic category.
    pub motion_type: MotionType,
    /// Location the hand starts at.
    pub start_loc: Location,
    /// Location the hand ends at.
    pub end_loc: Location,
    /// Prop orientation at the start.
    pub start_ori: Orientation,
    /// Prop orientation at the end.
    pub end_ori: Orientation,
    /// Prop rotation direction.
    pub prop_rot_dir: PropRotDir,
    /// Turn count.
    pub turns: Turns,
    /// Motion type before the motion was converted to a float.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefloat_motion_type: Option<MotionType>,
    /// Rotation direction before the motion was converted to a float.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefloat_prop_rot_dir: Option<PropRotDir>,
}

impl MotionState {
    /// A motion with `in -> in` orientation, no rotation and zero turns.
    pub fn new(color: Color, motion_type: MotionType, start_loc: Location, end_loc: Location) -> Self {
        Self {
            color,
            motion_type,
            start_loc,
            end_loc,
            start_ori: Orientation::In,
            end_ori: Orientation::In,
            prop_rot_dir: PropRotDir::NoRotation,
            turns: Turns::ZERO,
            prefloat_motion_type: None,
            prefloat_prop_rot_dir: None,
        }
    }

    /// Replace the turn count and rotation direction.
    pub fn with_turns(mut self, turns: Turns, prop_rot_dir: PropRotDir) -> Self {
        self.turns = turns;
        self.prop_rot_dir = prop_rot_dir;
        self
    }

    /// Replace the start and end orientations.
    pub fn with_oris(mut self, start_ori: Orientation, end_ori: Orientation) -> Self {
        self.start_ori = start_ori;
        self.end_ori = end_ori;
        self
    }

    /// Record the pre-float state of a float motion.
    pub fn with_prefloat(mut self, motion_type: MotionType, prop_rot_dir: PropRotDir) -> Self {
        self.prefloat_motion_type = Some(motion_type);
        self.prefloat_prop_rot_dir = Some(prop_rot_dir);
        self
    }

    /// `pro`, `anti` or `float`.
    pub fn is_shift(&self) -> bool {
        self.motion_type.is_shift()
    }

    /// Vector from the start location to the end location (unit-circle scale).
    pub fn travel(&self) -> Vec2 {
        self.end_loc.unit_vec() - self.start_loc.unit_vec()
    }

    /// Layer of the start orientation.
    pub fn start_layer(&self) -> OriLayer {
        self.start_ori.layer()
    }

    /// Layer of the end orientation.
    pub fn end_layer(&self) -> OriLayer {
        self.end_ori.layer()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/model.rs"]
mod tests;
