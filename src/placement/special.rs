//! Externally authored placement overrides.
//!
//! The data lives in a directory tree `<root>/<grid_mode>/<orientation_key>/*.json`; every
//! file maps `letter -> turns_key -> field -> value`, and files under one orientation folder
//! merge. The whole table sits behind an [`ArcSwap`] so a reload replaces it in one step.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use anyhow::Context;
use arc_swap::ArcSwap;

use crate::{
    foundation::core::{GridMode, Vec2},
    foundation::error::{PictoplaceError, PictoplaceResult},
    foundation::math::normalize_degrees,
    motion::letter::Letter,
    motion::model::{Color, OriLayer},
    motion::pictograph::PictographKey,
    placement::turns_key::{TurnsKeyGenerator, TurnsTupleKey},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Orientation-layer folder an override lives under.
pub enum OrientationKey {
    /// Both motions start radial.
    FromLayer1,
    /// Both motions start non-radial.
    FromLayer2,
    /// Blue starts radial, red non-radial.
    FromLayer3Blue1Red2,
    /// Blue starts non-radial, red radial.
    FromLayer3Blue2Red1,
}

impl OrientationKey {
    /// Every key, in folder order.
    pub const ALL: [OrientationKey; 4] = [
        OrientationKey::FromLayer1,
        OrientationKey::FromLayer2,
        OrientationKey::FromLayer3Blue1Red2,
        OrientationKey::FromLayer3Blue2Red1,
    ];

    /// Folder name (`"from_layer1"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            OrientationKey::FromLayer1 => "from_layer1",
            OrientationKey::FromLayer2 => "from_layer2",
            OrientationKey::FromLayer3Blue1Red2 => "from_layer3_blue1_red2",
            OrientationKey::FromLayer3Blue2Red1 => "from_layer3_blue2_red1",
        }
    }

    fn from_layer(layer: OriLayer) -> OrientationKey {
        match layer {
            OriLayer::Layer1 => OrientationKey::FromLayer1,
            OriLayer::Layer2 => OrientationKey::FromLayer2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// One override field: a position adjustment or a rotation angle.
pub enum OverrideValue {
    /// `[dx, dy]` replacing the default adjustment.
    Offset([f64; 2]),
    /// Rotation in degrees.
    Rotation(f64),
}

impl OverrideValue {
    /// The offset as a vector, if this is an offset.
    pub fn as_offset(self) -> Option<Vec2> {
        match self {
            OverrideValue::Offset([dx, dy]) => Some(Vec2::new(dx, dy)),
            OverrideValue::Rotation(_) => None,
        }
    }

    /// The angle, if this is a rotation.
    pub fn as_rotation(self) -> Option<f64> {
        match self {
            OverrideValue::Rotation(deg) => Some(deg),
            OverrideValue::Offset(_) => None,
        }
    }
}

/// `field -> value` for one turns key.
pub type FieldOverrides = BTreeMap<String, OverrideValue>;
/// `turns_key -> fields` for one letter.
pub type LetterPlacements = BTreeMap<TurnsTupleKey, FieldOverrides>;
/// `letter -> turns_key -> fields`: the content of one orientation folder.
pub type OrientationPlacements = BTreeMap<Letter, LetterPlacements>;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Complete override table, `grid_mode -> orientation_key -> letter -> turns_key -> field`.
pub struct OverrideTable {
    grids: BTreeMap<GridMode, BTreeMap<OrientationKey, OrientationPlacements>>,
}

impl OverrideTable {
    /// Four-level traversal; any missing level is `None`.
    pub fn lookup(
        &self,
        grid_mode: GridMode,
        ori_key: OrientationKey,
        letter: Letter,
        turns_key: &TurnsTupleKey,
        field: &str,
    ) -> Option<OverrideValue> {
        self.letter(grid_mode, ori_key, letter)?
            .get(turns_key)?
            .get(field)
            .copied()
    }

    /// All entries of one letter.
    pub fn letter(
        &self,
        grid_mode: GridMode,
        ori_key: OrientationKey,
        letter: Letter,
    ) -> Option<&LetterPlacements> {
        self.grids.get(&grid_mode)?.get(&ori_key)?.get(&letter)
    }

    /// Insert or replace one field.
    pub fn insert(
        &mut self,
        grid_mode: GridMode,
        ori_key: OrientationKey,
        letter: Letter,
        turns_key: TurnsTupleKey,
        field: impl Into<String>,
        value: OverrideValue,
    ) {
        self.grids
            .entry(grid_mode)
            .or_default()
            .entry(ori_key)
            .or_default()
            .entry(letter)
            .or_default()
            .entry(turns_key)
            .or_default()
            .insert(field.into(), value);
    }

    /// Number of `(turns_key, field)` entries across the whole table.
    pub fn len(&self) -> usize {
        self.grids
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    /// `true` when no override is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn replace_grid(
        &mut self,
        grid_mode: GridMode,
        folders: BTreeMap<OrientationKey, OrientationPlacements>,
    ) {
        self.grids.insert(grid_mode, folders);
    }
}

/// File-backed, atomically swappable override table.
pub struct SpecialPlacementStore {
    root: PathBuf,
    table: ArcSwap<OverrideTable>,
    generation: AtomicU64,
}

impl std::fmt::Debug for SpecialPlacementStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecialPlacementStore")
            .field("root", &self.root)
            .field("entries", &self.table.load().len())
            .field("generation", &self.generation())
            .finish()
    }
}

impl SpecialPlacementStore {
    /// Empty store reading from `root`. Nothing is read until [`Self::load`] or
    /// [`Self::reload`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            table: ArcSwap::from_pointee(OverrideTable::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Store over a table built in memory; [`Self::save`] still writes under `root`.
    pub fn with_table(root: impl Into<PathBuf>, table: OverrideTable) -> Self {
        Self {
            root: root.into(),
            table: ArcSwap::from_pointee(table),
            generation: AtomicU64::new(0),
        }
    }

    /// Directory the data is read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// (Re)read every orientation folder of one grid mode and swap it in.
    ///
    /// Missing folders are empty. Unreadable or corrupt files are logged and skipped, so this
    /// never fails.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load(&self, grid_mode: GridMode) {
        let folders = read_grid(&self.root, grid_mode);
        self.table.rcu(|current| {
            let mut next = OverrideTable::clone(current);
            next.replace_grid(grid_mode, folders.clone());
            next
        });
        self.bump();
    }

    /// Rebuild the table for every grid mode and swap it in as a whole.
    ///
    /// Computations holding an earlier [`Self::snapshot`] keep seeing the old table.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn reload(&self) {
        let mut next = OverrideTable::default();
        for grid_mode in GridMode::ALL {
            next.replace_grid(grid_mode, read_grid(&self.root, grid_mode));
        }
        tracing::debug!(entries = next.len(), "override table reloaded");
        self.table.store(Arc::new(next));
        self.bump();
    }

    /// The current table.
    pub fn snapshot(&self) -> Arc<OverrideTable> {
        self.table.load_full()
    }

    /// Counter advanced by every swap; used to invalidate derived caches.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Lookup against the current table.
    pub fn lookup(
        &self,
        grid_mode: GridMode,
        ori_key: OrientationKey,
        letter: Letter,
        turns_key: &TurnsTupleKey,
        field: &str,
    ) -> Option<OverrideValue> {
        self.table
            .load()
            .lookup(grid_mode, ori_key, letter, turns_key, field)
    }

    /// Orientation folder holding the overrides of `color`'s glyphs.
    ///
    /// Pure-rotation letters use the motion's own start layer; every other letter uses the
    /// start layers of both motions.
    pub fn ori_key_for(pictograph: &PictographKey, color: Color) -> OrientationKey {
        if pictograph.letter.is_pure_rotation() {
            return OrientationKey::from_layer(pictograph.motion(color).start_layer());
        }
        match (pictograph.blue.start_layer(), pictograph.red.start_layer()) {
            (OriLayer::Layer1, OriLayer::Layer1) => OrientationKey::FromLayer1,
            (OriLayer::Layer2, OriLayer::Layer2) => OrientationKey::FromLayer2,
            (OriLayer::Layer1, OriLayer::Layer2) => OrientationKey::FromLayer3Blue1Red2,
            (OriLayer::Layer2, OriLayer::Layer1) => OrientationKey::FromLayer3Blue2Red1,
        }
    }

    /// Write one field for `pictograph` (copy-on-write swap of the table).
    ///
    /// Returns the turns key the entry was stored under, or `None` when the pictograph has
    /// no turns key and therefore cannot carry overrides.
    pub fn set_entry(
        &self,
        pictograph: &PictographKey,
        color: Color,
        field: &str,
        value: OverrideValue,
    ) -> Option<TurnsTupleKey> {
        let turns_key = TurnsKeyGenerator::generate(pictograph)?;
        let ori_key = Self::ori_key_for(pictograph, color);
        self.table.rcu(|current| {
            let mut next = OverrideTable::clone(current);
            next.insert(
                pictograph.grid_mode,
                ori_key,
                pictograph.letter,
                turns_key.clone(),
                field,
                value,
            );
            next
        });
        self.bump();
        Some(turns_key)
    }

    /// [`Self::set_entry`] plus the same entry on the mirrored, color-swapped counterpart.
    ///
    /// Color names in `field` are exchanged and rotations are reflected across the vertical
    /// axis (`180 - deg`) for the counterpart; offsets are stored as given. When the
    /// counterpart resolves to the very slot just written, only the original is kept.
    pub fn set_entry_with_mirror(
        &self,
        pictograph: &PictographKey,
        color: Color,
        field: &str,
        value: OverrideValue,
    ) -> Option<TurnsTupleKey> {
        let key = TurnsKeyGenerator::generate(pictograph)?;
        let mirrored = pictograph.mirrored_counterpart();
        let mirrored_color = color.other();
        let mirrored_field = swap_color_names(field);

        let slot = (
            pictograph.grid_mode,
            Self::ori_key_for(pictograph, color),
            pictograph.letter,
            Some(key.clone()),
            field,
        );
        let mirrored_slot = (
            mirrored.grid_mode,
            Self::ori_key_for(&mirrored, mirrored_color),
            mirrored.letter,
            TurnsKeyGenerator::generate(&mirrored),
            mirrored_field.as_str(),
        );

        self.set_entry(pictograph, color, field, value)?;
        if slot == mirrored_slot {
            tracing::debug!(field, "mirrored entry shares the original slot; not written");
            return Some(key);
        }

        let mirrored_value = match value {
            OverrideValue::Rotation(deg) => OverrideValue::Rotation(normalize_degrees(180.0 - deg)),
            offset @ OverrideValue::Offset(_) => offset,
        };
        if self
            .set_entry(&mirrored, mirrored_color, &mirrored_field, mirrored_value)
            .is_none()
        {
            tracing::warn!(
                letter = %mirrored.letter,
                "mirrored counterpart has no turns key; only the original entry was written"
            );
        }
        Some(key)
    }

    /// Persist one letter's entries to `<root>/<grid>/<ori>/<letter>_placements.json`.
    pub fn save(
        &self,
        grid_mode: GridMode,
        ori_key: OrientationKey,
        letter: Letter,
    ) -> PictoplaceResult<PathBuf> {
        let table = self.snapshot();
        let mut doc = OrientationPlacements::new();
        if let Some(entries) = table.letter(grid_mode, ori_key, letter) {
            doc.insert(letter, entries.clone());
        }
        let dir = self.root.join(grid_mode.as_str()).join(ori_key.as_str());
        fs::create_dir_all(&dir).map_err(|e| {
            PictoplaceError::data_source(format!("create '{}': {e}", dir.display()))
        })?;
        let path = dir.join(format!("{}_placements.json", letter.as_str()));
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&path, json).map_err(|e| {
            PictoplaceError::data_source(format!("write '{}': {e}", path.display()))
        })?;
        Ok(path)
    }

    fn bump(&self) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(generation, "override table swapped");
    }
}

fn read_grid(root: &Path, grid_mode: GridMode) -> BTreeMap<OrientationKey, OrientationPlacements> {
    OrientationKey::ALL
        .into_iter()
        .map(|ori_key| {
            let dir = root.join(grid_mode.as_str()).join(ori_key.as_str());
            (ori_key, read_folder(&dir))
        })
        .collect()
}

fn read_folder(dir: &Path) -> OrientationPlacements {
    let mut merged = OrientationPlacements::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return merged,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "skipping override folder");
            return merged;
        }
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    for path in files {
        match read_file(&path) {
            Ok(doc) => {
                for (letter, turns) in doc {
                    let slot = merged.entry(letter).or_default();
                    for (turns_key, fields) in turns {
                        slot.entry(turns_key).or_default().extend(fields);
                    }
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping override file");
            }
        }
    }
    merged
}

fn read_file(path: &Path) -> anyhow::Result<OrientationPlacements> {
    let s = fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))?;
    let doc = serde_json::from_str(&s).with_context(|| format!("parse '{}'", path.display()))?;
    Ok(doc)
}

fn swap_color_names(field: &str) -> String {
    const TMP: &str = "\u{0}";
    field
        .replace(Color::Blue.as_str(), TMP)
        .replace(Color::Red.as_str(), Color::Blue.as_str())
        .replace(TMP, Color::Red.as_str())
}

#[cfg(test)]
#[path = "../../tests/unit/placement/special.rs"]
mod tests;
