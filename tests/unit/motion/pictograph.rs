use super::*;
use crate::foundation::core::Location;
use crate::motion::model::{Orientation, PropRotDir, Turns};

fn g_pictograph() -> PictographKey {
    PictographKey::new(
        Letter::G,
        GridMode::Diamond,
        MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East),
        MotionState::new(Color::Red, MotionType::Pro, Location::North, Location::East),
    )
    .unwrap()
}

#[test]
fn constructor_rejects_swapped_colors() {
    let blue = MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East);
    let red = MotionState::new(Color::Red, MotionType::Pro, Location::South, Location::West);
    assert!(PictographKey::new(Letter::A, GridMode::Diamond, red, blue).is_err());
}

#[test]
fn float_sentinel_requires_float_motion() {
    let blue = MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East)
        .with_turns(Turns::Float, PropRotDir::NoRotation);
    let red = MotionState::new(Color::Red, MotionType::Pro, Location::South, Location::West);
    assert!(PictographKey::new(Letter::A, GridMode::Diamond, blue, red).is_err());
}

#[test]
fn role_lookups_find_motions() {
    let static_red = MotionState::new(Color::Red, MotionType::Static, Location::East, Location::East);
    let shift_blue = MotionState::new(Color::Blue, MotionType::Anti, Location::North, Location::East);
    let key = PictographKey::new(Letter::Y, GridMode::Diamond, shift_blue, static_red).unwrap();
    assert_eq!(key.shift().unwrap().color, Color::Blue);
    assert_eq!(key.motion_of_type(MotionType::Static).unwrap().color, Color::Red);
    assert!(key.motion_of_type(MotionType::Dash).is_none());
    assert!(key.has_mixed_motion_types());
    assert!(key.props_share_end_location());
}

#[test]
fn end_state_checks() {
    let mut key = g_pictograph();
    assert!(!key.ends_with_layer3());
    assert!(!key.ends_with_in_out_ori());

    key.red = key.red.with_oris(Orientation::In, Orientation::Out);
    assert!(key.ends_with_in_out_ori());
    assert!(!key.ends_with_clock_counter_ori());

    key.blue = key.blue.with_oris(Orientation::In, Orientation::Clock);
    key.red = key.red.with_oris(Orientation::In, Orientation::Counter);
    assert!(key.ends_with_clock_counter_ori());
    assert!(!key.ends_with_layer3());

    key.red = key.red.with_oris(Orientation::Clock, Orientation::In);
    assert!(key.ends_with_layer3());
    assert!(key.starts_from_mixed_orientation());
}

#[test]
fn json_round_trip_validates() {
    let key = g_pictograph();
    let json = serde_json::to_string(&key).unwrap();
    assert!(json.contains("\"letter\":\"G\""));
    assert_eq!(PictographKey::from_json_str(&json).unwrap(), key);
    assert!(PictographKey::from_json_str("{}").is_err());
}

#[test]
fn out_of_range_half_steps_are_rejected() {
    let blue = MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East)
        .with_turns(Turns::Half(9), PropRotDir::Clockwise);
    let red = MotionState::new(Color::Red, MotionType::Pro, Location::South, Location::West);
    let err = PictographKey::new(Letter::A, GridMode::Diamond, blue, red).unwrap_err();
    assert!(err.to_string().contains("4.5"), "{err}");

    let top = blue.with_turns(Turns::Half(6), PropRotDir::Clockwise);
    let key = PictographKey::new(Letter::A, GridMode::Diamond, top, red).unwrap();
    let json = serde_json::to_string(&key).unwrap();
    assert_eq!(PictographKey::from_json_str(&json).unwrap(), key);
}
