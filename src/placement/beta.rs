use std::collections::HashMap;

use crate::{
    foundation::core::{Direction, Point, SCENE_SIZE, Vec2},
    motion::prop::PropSizeClass,
};

/// Displacement applied to one of two coincident props.
#[derive(Clone, Copy, Debug, Default)]
pub struct BetaOffsetResolver;

impl BetaOffsetResolver {
    /// Offset length for a size class: the scene size over its divisor.
    pub fn magnitude(size_class: PropSizeClass) -> f64 {
        let divisor = match size_class {
            PropSizeClass::Large => 60.0,
            PropSizeClass::Medium => 50.0,
            PropSizeClass::Small => 45.0,
        };
        SCENE_SIZE / divisor
    }

    /// Offset vector in `direction`.
    ///
    /// Diagonals use `magnitude / sqrt(2)` per component.
    pub fn offset(direction: Direction, size_class: PropSizeClass) -> Vec2 {
        let m = Self::magnitude(size_class);
        let per_axis = if direction.is_diagonal() {
            m / std::f64::consts::SQRT_2
        } else {
            m
        };
        direction.signs() * per_axis
    }

    /// `current` moved by [`Self::offset`].
    pub fn resolve(current: Point, direction: Direction, size_class: PropSizeClass) -> Point {
        current + Self::offset(direction, size_class)
    }
}

/// Memoized [`BetaOffsetResolver::offset`] values for the active prop configuration.
#[derive(Clone, Debug, Default)]
pub struct PositionOffsetCache {
    entries: HashMap<(PropSizeClass, Direction), Vec2>,
}

impl PositionOffsetCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached offset, computing it on first use.
    pub fn get(&mut self, size_class: PropSizeClass, direction: Direction) -> Vec2 {
        *self
            .entries
            .entry((size_class, direction))
            .or_insert_with(|| BetaOffsetResolver::offset(direction, size_class))
    }

    /// Drop every entry (the prop type changed).
    pub fn invalidate(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(entries = self.entries.len(), "beta offset cache cleared");
        }
        self.entries.clear();
    }

    /// Number of memoized offsets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is memoized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
