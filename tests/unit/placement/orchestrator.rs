use super::*;
use crate::foundation::core::{GridMode, Location};
use crate::motion::letter::Letter;
use crate::motion::model::{MotionType, Orientation, PropRotDir, Turns};
use crate::placement::special::{OrientationKey, OverrideValue};

fn y_pictograph() -> PictographKey {
    let blue = MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East)
        .with_turns(Turns::Half(2), PropRotDir::Clockwise);
    let red = MotionState::new(Color::Red, MotionType::Static, Location::South, Location::South);
    PictographKey::new(Letter::Y, GridMode::Diamond, blue, red).unwrap()
}

fn engine(table: OverrideTable) -> PlacementEngine {
    let store = SpecialPlacementStore::with_table("unused-root", table);
    PlacementEngine::new(Arc::new(store), EngineSettings::default())
}

#[test]
fn missing_override_falls_back_to_default_and_directional() {
    let p = y_pictograph();
    let mut engine = engine(OverrideTable::default());
    let placed = engine.compute(&p);

    let anchor = DefaultPlacementProvider::default_position(Location::NorthEast, GridMode::Diamond);
    let base = DefaultPlacementProvider::default_adjustment(&p.blue);
    let expected = anchor + DirectionalAdjustmentCalculator::compute(base, &p.blue, &p.red);
    assert_eq!(placed.arrow_blue.position, expected);

    // A resting static arrow sits on its location.
    let south = DefaultPlacementProvider::default_position(Location::South, GridMode::Diamond);
    assert_eq!(placed.arrow_red.position, south);
    assert_eq!(placed.prop_red.position, south);
    assert!((placed.prop_red.rotation_degrees - 270.0).abs() < 1e-9);
}

#[test]
fn override_replaces_the_default_magnitude() {
    let p = y_pictograph();
    let mut table = OverrideTable::default();
    table.insert(
        GridMode::Diamond,
        OrientationKey::FromLayer1,
        Letter::Y,
        TurnsKeyGenerator::generate(&p).unwrap(),
        "pro",
        OverrideValue::Offset([60.0, -10.0]),
    );
    let mut engine = engine(table);
    let placed = engine.compute(&p);

    let anchor = DefaultPlacementProvider::default_position(Location::NorthEast, GridMode::Diamond);
    let expected =
        anchor + DirectionalAdjustmentCalculator::compute(Vec2::new(60.0, -10.0), &p.blue, &p.red);
    assert_eq!(placed.arrow_blue.position, expected);
}

#[test]
fn attr_field_keys() {
    let mut p = y_pictograph();
    assert_eq!(PlacementEngine::attr_field_key(&p, Color::Blue), "pro");
    assert_eq!(PlacementEngine::attr_field_key(&p, Color::Red), "static");

    p.red.start_ori = Orientation::Counter;
    assert_eq!(PlacementEngine::attr_field_key(&p, Color::Blue), "pro_from_layer1");
    assert_eq!(PlacementEngine::attr_field_key(&p, Color::Red), "static_from_layer2");

    let blue = MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East);
    let red = MotionState::new(Color::Red, MotionType::Pro, Location::South, Location::West);
    let g = PictographKey::new(Letter::G, GridMode::Diamond, blue, red).unwrap();
    assert_eq!(PlacementEngine::attr_field_key(&g, Color::Red), "red");
}

#[test]
fn shared_prop_location_gets_beta_offsets() {
    let blue = MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East)
        .with_turns(Turns::ZERO, PropRotDir::Clockwise);
    let red = blue.recolored(Color::Red);
    let p = PictographKey::new(Letter::G, GridMode::Diamond, blue, red).unwrap();
    let mut engine = engine(OverrideTable::default());
    let placed = engine.compute(&p);

    let home = DefaultPlacementProvider::default_position(Location::East, GridMode::Diamond);
    let blue_shift = placed.prop_blue.position - home;
    let red_shift = placed.prop_red.position - home;
    assert!(blue_shift.hypot() > 1.0);
    assert!((blue_shift + red_shift).hypot() < 1e-9);
}

#[test]
fn memo_is_dropped_on_prop_change_and_store_swap() {
    let p = y_pictograph();
    let store = Arc::new(SpecialPlacementStore::with_table("unused-root", OverrideTable::default()));
    let mut engine = PlacementEngine::new(Arc::clone(&store), EngineSettings::default());

    let first = engine.compute(&p);
    assert_eq!(engine.cached_results(), 1);
    assert_eq!(engine.compute(&p), first);

    engine.set_prop_type(PropType::Staff);
    assert_eq!(engine.cached_results(), 1);
    engine.set_prop_type(PropType::Club);
    assert_eq!(engine.cached_results(), 0);

    engine.compute(&p);
    store.set_entry(&p, Color::Blue, "pro", OverrideValue::Offset([0.0, 0.0]));
    let after = engine.compute(&p);
    assert_eq!(engine.cached_results(), 1);
    let anchor = DefaultPlacementProvider::default_position(Location::NorthEast, GridMode::Diamond);
    assert_eq!(after.arrow_blue.position, anchor);
}

#[test]
fn memo_never_grows_past_its_capacity() {
    let mut engine = engine(OverrideTable::default()).with_result_capacity(2);
    let p = y_pictograph();
    let first = engine.compute(&p);
    for steps in [2, 4, 6] {
        engine.compute(&p.rotated(steps));
        assert!(engine.cached_results() <= 2);
    }
    assert_eq!(engine.compute(&p), first);
    assert!(engine.cached_results() <= 2);
}

#[test]
fn settings_load_from_json() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("settings.json");
    std::fs::write(&path, r#"{"prop_type": "big_hoop"}"#).unwrap();
    let s = EngineSettings::from_path(&path).unwrap();
    assert_eq!(s.prop_type, PropType::BigHoop);

    std::fs::write(&path, "{}").unwrap();
    assert_eq!(EngineSettings::from_path(&path).unwrap(), EngineSettings::default());
    assert!(EngineSettings::from_path(&tmp.path().join("missing.json")).is_err());
}
