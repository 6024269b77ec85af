use std::{collections::HashMap, path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    foundation::core::{Point, Vec2},
    foundation::error::PictoplaceResult,
    motion::model::{Color, MotionState},
    motion::pictograph::PictographKey,
    motion::prop::PropType,
    placement::beta::PositionOffsetCache,
    placement::default::DefaultPlacementProvider,
    placement::directional::DirectionalAdjustmentCalculator,
    placement::reposition::{BetaOutcome, LetterGroupRepositioner},
    placement::rotation::RotationAngleResolver,
    placement::special::{OverrideTable, SpecialPlacementStore},
    placement::turns_key::{TurnsKeyGenerator, TurnsTupleKey},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Final placement of one glyph.
pub struct PlacementResult {
    /// Absolute scene position.
    pub position: Point,
    /// Degrees clockwise from `+x`.
    pub rotation_degrees: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Placement of the four glyphs of a pictograph.
pub struct PictographPlacement {
    /// Blue arrow.
    pub arrow_blue: PlacementResult,
    /// Red arrow.
    pub arrow_red: PlacementResult,
    /// Blue prop.
    pub prop_blue: PlacementResult,
    /// Red prop.
    pub prop_red: PlacementResult,
}

impl PictographPlacement {
    /// Arrow of the given color.
    pub fn arrow(&self, color: Color) -> &PlacementResult {
        match color {
            Color::Blue => &self.arrow_blue,
            Color::Red => &self.arrow_red,
        }
    }

    /// Prop of the given color.
    pub fn prop(&self, color: Color) -> &PlacementResult {
        match color {
            Color::Blue => &self.prop_blue,
            Color::Red => &self.prop_red,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Application settings the engine reads. The grid mode travels with each pictograph.
pub struct EngineSettings {
    /// Active prop kind; selects the beta strategy and offset size.
    pub prop_type: PropType,
}

impl EngineSettings {
    /// Read settings from a JSON file; missing fields take their defaults.
    pub fn from_path(path: &Path) -> PictoplaceResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        Ok(serde_json::from_str(&s)?)
    }
}

/// Default bound on memoized placements.
pub const DEFAULT_RESULT_CAPACITY: usize = 4096;

/// Entry point: symbolic pictograph in, glyph placements out.
///
/// Results are memoized per [`PictographKey`]; the memo is dropped when the prop type changes,
/// when the override store swaps its table, or when it reaches its capacity.
#[derive(Debug)]
pub struct PlacementEngine {
    store: Arc<SpecialPlacementStore>,
    settings: EngineSettings,
    offsets: PositionOffsetCache,
    results: HashMap<PictographKey, PictographPlacement>,
    result_capacity: usize,
    seen_generation: u64,
}

impl PlacementEngine {
    /// Engine over `store` with the given settings.
    pub fn new(store: Arc<SpecialPlacementStore>, settings: EngineSettings) -> Self {
        let seen_generation = store.generation();
        Self {
            store,
            settings,
            offsets: PositionOffsetCache::new(),
            results: HashMap::new(),
            result_capacity: DEFAULT_RESULT_CAPACITY,
            seen_generation,
        }
    }

    /// Bound the placement memo to `capacity` entries (at least one).
    pub fn with_result_capacity(mut self, capacity: usize) -> Self {
        self.result_capacity = capacity.max(1);
        self
    }

    /// Active settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Override store the engine reads from.
    pub fn store(&self) -> &Arc<SpecialPlacementStore> {
        &self.store
    }

    /// Place all four glyphs of `pictograph`.
    ///
    /// Every lookup of one call reads the same table snapshot.
    #[tracing::instrument(level = "trace", skip_all, fields(letter = %pictograph.letter))]
    pub fn compute(&mut self, pictograph: &PictographKey) -> PictographPlacement {
        let generation = self.store.generation();
        if generation != self.seen_generation {
            tracing::debug!(
                from = self.seen_generation,
                to = generation,
                "override table changed; dropping memoized placements"
            );
            self.results.clear();
            self.seen_generation = generation;
        }
        if let Some(hit) = self.results.get(pictograph) {
            return *hit;
        }

        let table = self.store.snapshot();
        let placement = self.place(&table, pictograph);
        if self.results.len() >= self.result_capacity {
            tracing::debug!(
                capacity = self.result_capacity,
                "placement memo full; dropping memoized placements"
            );
            self.results.clear();
        }
        self.results.insert(*pictograph, placement);
        placement
    }

    /// Switch the prop kind; clears the offset and result caches when it changes.
    pub fn set_prop_type(&mut self, prop_type: PropType) {
        if self.settings.prop_type != prop_type {
            self.settings.prop_type = prop_type;
            self.invalidate();
        }
    }

    /// Drop every memoized value.
    pub fn invalidate(&mut self) {
        tracing::debug!(results = self.results.len(), "placement caches cleared");
        self.offsets.invalidate();
        self.results.clear();
    }

    /// Number of memoized placements.
    pub fn cached_results(&self) -> usize {
        self.results.len()
    }

    /// Override field holding the position adjustment of `color`'s arrow.
    pub fn attr_field_key(pictograph: &PictographKey, color: Color) -> String {
        let motion = pictograph.motion(color);
        if pictograph.has_mixed_motion_types() {
            if pictograph.starts_from_mixed_orientation() {
                format!(
                    "{}_from_{}",
                    motion.motion_type.as_str(),
                    motion.start_layer().as_str()
                )
            } else {
                motion.motion_type.as_str().to_string()
            }
        } else {
            color.as_str().to_string()
        }
    }

    fn place(&mut self, table: &OverrideTable, pictograph: &PictographKey) -> PictographPlacement {
        let turns_key = TurnsKeyGenerator::generate(pictograph);
        let beta =
            LetterGroupRepositioner::reposition(pictograph, self.settings.prop_type, &mut self.offsets);
        if beta == BetaOutcome::Reset {
            tracing::trace!("layer 3 end state; props stay on their hand points");
        }
        let arrow = |color| arrow_placement(table, pictograph, turns_key.as_ref(), color);
        let prop = |color| prop_placement(pictograph, pictograph.motion(color), &beta, color);
        PictographPlacement {
            arrow_blue: arrow(Color::Blue),
            arrow_red: arrow(Color::Red),
            prop_blue: prop(Color::Blue),
            prop_red: prop(Color::Red),
        }
    }
}

fn arrow_placement(
    table: &OverrideTable,
    pictograph: &PictographKey,
    turns_key: Option<&TurnsTupleKey>,
    color: Color,
) -> PlacementResult {
    let motion = pictograph.motion(color);
    let other = pictograph.other_motion(color);
    let location = DefaultPlacementProvider::arrow_location(motion, other);
    let anchor = DefaultPlacementProvider::default_position(location, pictograph.grid_mode);

    let base = turns_key
        .and_then(|key| adjustment_override(table, pictograph, key, color))
        .unwrap_or_else(|| DefaultPlacementProvider::default_adjustment(motion));
    let adjustment = DirectionalAdjustmentCalculator::compute(base, motion, other);

    PlacementResult {
        position: anchor + adjustment,
        rotation_degrees: RotationAngleResolver::angle_for(table, pictograph, color),
    }
}

fn adjustment_override(
    table: &OverrideTable,
    pictograph: &PictographKey,
    turns_key: &TurnsTupleKey,
    color: Color,
) -> Option<Vec2> {
    let ori_key = SpecialPlacementStore::ori_key_for(pictograph, color);
    let field = PlacementEngine::attr_field_key(pictograph, color);
    table
        .lookup(
            pictograph.grid_mode,
            ori_key,
            pictograph.letter,
            turns_key,
            &field,
        )?
        .as_offset()
}

fn prop_placement(
    pictograph: &PictographKey,
    motion: &MotionState,
    beta: &BetaOutcome,
    color: Color,
) -> PlacementResult {
    let home = DefaultPlacementProvider::default_position(motion.end_loc, pictograph.grid_mode);
    PlacementResult {
        position: home + beta.offset_for(color),
        rotation_degrees: RotationAngleResolver::prop_angle(motion),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/orchestrator.rs"]
mod tests;
