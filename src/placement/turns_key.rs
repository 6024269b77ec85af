use std::fmt;

use crate::motion::{
    letter::LetterType,
    model::{Color, MotionState, MotionType, PropRotDir},
    pictograph::PictographKey,
};

#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
/// Canonical turns-tuple string such as `"(s, 1, 2)"` or `"(1.5, fl)"`.
pub struct TurnsTupleKey(String);

impl TurnsTupleKey {
    /// Wrap an already-canonical key string (e.g. read from override data).
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    fn from_parts<I, T>(parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let parts: Vec<String> = parts.into_iter().map(|p| p.to_string()).collect();
        Self(format!("({})", parts.join(", ")))
    }

    /// The key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TurnsTupleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn same_or_opposite(a: PropRotDir, b: PropRotDir) -> &'static str {
    if a == b { "s" } else { "o" }
}

/// Builds turns-tuple keys for override lookup and glyph coloring.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnsKeyGenerator;

impl TurnsKeyGenerator {
    /// Canonical turns key of a pictograph.
    ///
    /// `None` means no key can be formed for this letter/motion combination; callers fall
    /// back to default placement.
    pub fn generate(pictograph: &PictographKey) -> Option<TurnsTupleKey> {
        match pictograph.letter_type() {
            LetterType::Type1 => dual_shift(pictograph),
            LetterType::Type2 => shift_with(pictograph, MotionType::Static),
            LetterType::Type3 => shift_with(pictograph, MotionType::Dash),
            LetterType::Type4 => dash_with_static(pictograph),
            LetterType::Type5 => same_kind(pictograph, MotionType::Dash),
            LetterType::Type6 => same_kind(pictograph, MotionType::Static),
        }
    }

    /// Key of the mirrored, color-swapped counterpart of `pictograph`.
    pub fn mirrored(pictograph: &PictographKey) -> Option<TurnsTupleKey> {
        Self::generate(&pictograph.mirrored_counterpart())
    }

    /// Motion that is ahead of the other: it starts where the other one ends.
    pub fn leading_motion(pictograph: &PictographKey) -> Option<&MotionState> {
        let (b, r) = (&pictograph.blue, &pictograph.red);
        if b.start_loc == r.end_loc && r.start_loc != b.end_loc {
            Some(b)
        } else if r.start_loc == b.end_loc && b.start_loc != r.end_loc {
            Some(r)
        } else {
            None
        }
    }

    /// `(leading, trailing)` turns key used for codex glyph coloring.
    ///
    /// Only letters with a lead state (`S T U V`) reorder; every other letter, and a pictograph
    /// where no motion leads, keeps blue/red order.
    pub fn lead_state(pictograph: &PictographKey) -> TurnsTupleKey {
        let leading = Some(pictograph)
            .filter(|p| p.letter.has_lead_state())
            .and_then(Self::leading_motion)
            .map(|m| m.color)
            .unwrap_or(Color::Blue);
        let lead = pictograph.motion(leading);
        let trail = pictograph.other_motion(leading);
        TurnsTupleKey::from_parts([lead.turns, trail.turns])
    }
}

fn dual_shift(p: &PictographKey) -> Option<TurnsTupleKey> {
    let (b, r) = (&p.blue, &p.red);
    if b.motion_type == MotionType::Float || r.motion_type == MotionType::Float {
        return Some(TurnsTupleKey::from_parts([b.turns, r.turns]));
    }
    match (
        p.motion_of_type(MotionType::Pro),
        p.motion_of_type(MotionType::Anti),
    ) {
        (Some(pro), Some(anti)) => Some(TurnsTupleKey::from_parts([pro.turns, anti.turns])),
        _ if b.is_shift() && b.motion_type == r.motion_type => {
            Some(TurnsTupleKey::from_parts([b.turns, r.turns]))
        }
        _ => None,
    }
}

/// Shift paired with a static (Type2) or a dash (Type3).
fn shift_with(p: &PictographKey, partner_type: MotionType) -> Option<TurnsTupleKey> {
    let shift = p.shift()?;
    let partner = p.motion_of_type(partner_type)?;
    let (s, t) = (shift.turns.to_string(), partner.turns.to_string());
    match shift.motion_type {
        MotionType::Pro | MotionType::Anti => {
            if partner.turns.is_turning() {
                let tag = same_or_opposite(partner.prop_rot_dir, shift.prop_rot_dir);
                Some(TurnsTupleKey::from_parts([tag, s.as_str(), t.as_str()]))
            } else {
                Some(TurnsTupleKey::from_parts([s, t]))
            }
        }
        // A float has no rotation of its own: compare against what it rotated before.
        // A turning partner keeps the tagged form even though the shift reads "fl".
        MotionType::Float => {
            if partner.turns.is_turning() {
                let prefloat = shift
                    .prefloat_prop_rot_dir
                    .filter(|d| *d != PropRotDir::NoRotation)?;
                let tag = same_or_opposite(partner.prop_rot_dir, prefloat);
                Some(TurnsTupleKey::from_parts([tag, s.as_str(), t.as_str()]))
            } else {
                Some(TurnsTupleKey::from_parts([s, t]))
            }
        }
        MotionType::Dash | MotionType::Static => None,
    }
}

fn dash_with_static(p: &PictographKey) -> Option<TurnsTupleKey> {
    let dash = p.motion_of_type(MotionType::Dash)?;
    let stat = p.motion_of_type(MotionType::Static)?;
    let (d, s) = (dash.turns.to_string(), stat.turns.to_string());
    match (dash.turns.is_turning(), stat.turns.is_turning()) {
        (false, false) => Some(TurnsTupleKey::from_parts([d, s])),
        (true, false) => Some(TurnsTupleKey::from_parts([
            dash.prop_rot_dir.token()?,
            d.as_str(),
            s.as_str(),
        ])),
        (false, true) => Some(TurnsTupleKey::from_parts([
            stat.prop_rot_dir.token()?,
            d.as_str(),
            s.as_str(),
        ])),
        (true, true) => {
            let tag = same_or_opposite(dash.prop_rot_dir, stat.prop_rot_dir);
            Some(TurnsTupleKey::from_parts([tag, d.as_str(), s.as_str()]))
        }
    }
}

/// Dual dash (Type5) and dual static (Type6).
fn same_kind(p: &PictographKey, motion_type: MotionType) -> Option<TurnsTupleKey> {
    let (b, r) = (&p.blue, &p.red);
    if b.motion_type != motion_type || r.motion_type != motion_type {
        return None;
    }
    if b.turns.is_turning() && r.turns.is_turning() {
        let tag = same_or_opposite(b.prop_rot_dir, r.prop_rot_dir);
        Some(TurnsTupleKey::from_parts([
            tag.to_string(),
            b.turns.to_string(),
            r.turns.to_string(),
        ]))
    } else {
        Some(TurnsTupleKey::from_parts([b.turns, r.turns]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/turns_key.rs"]
mod tests;
