use super::*;
use crate::foundation::core::{GridMode, Location};
use crate::motion::letter::Letter;
use crate::motion::model::Turns;
use crate::placement::special::{OrientationKey, OverrideValue};
use crate::placement::turns_key::TurnsTupleKey;

fn psi() -> PictographKey {
    let blue = MotionState::new(Color::Blue, MotionType::Dash, Location::South, Location::North);
    let red = MotionState::new(Color::Red, MotionType::Static, Location::North, Location::North)
        .with_turns(Turns::Half(2), PropRotDir::Clockwise);
    PictographKey::new(Letter::Psi, GridMode::Diamond, blue, red).unwrap()
}

#[test]
fn only_dash_and_static_are_eligible() {
    let p = psi();
    assert_eq!(
        RotationAngleResolver::override_key(&p, Color::Blue).as_deref(),
        Some("dash_rot_angle_override")
    );
    assert_eq!(
        RotationAngleResolver::override_key(&p, Color::Red).as_deref(),
        Some("static_rot_angle_override")
    );

    let shift = MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East);
    let other = MotionState::new(Color::Red, MotionType::Static, Location::East, Location::East);
    let y = PictographKey::new(Letter::Y, GridMode::Diamond, shift, other).unwrap();
    assert_eq!(RotationAngleResolver::override_key(&y, Color::Blue), None);
}

#[test]
fn key_shape_follows_orientation_layers() {
    let mut p = psi();
    p.red.start_ori = Orientation::Clock;
    assert_eq!(
        RotationAngleResolver::override_key(&p, Color::Red).as_deref(),
        Some("static_from_layer2_rot_angle_override")
    );
    assert_eq!(
        RotationAngleResolver::override_key(&p, Color::Blue).as_deref(),
        Some("dash_from_layer1_rot_angle_override")
    );

    let mut p = psi();
    p.blue.end_ori = Orientation::Counter;
    assert_eq!(
        RotationAngleResolver::override_key(&p, Color::Blue).as_deref(),
        Some("dash_to_layer2_rot_angle_override")
    );

    let mut p = psi();
    p.letter = Letter::Gamma;
    p.blue = MotionState::new(Color::Blue, MotionType::Static, Location::South, Location::South);
    assert_eq!(
        RotationAngleResolver::override_key(&p, Color::Blue).as_deref(),
        Some("blue_rot_angle_override")
    );
}

#[test]
fn override_wins_over_default() {
    let p = psi();
    let mut table = OverrideTable::default();
    assert!(!RotationAngleResolver::has_override(&table, &p, Color::Red));
    let default = RotationAngleResolver::angle_for(&table, &p, Color::Red);
    assert!((default - 0.0).abs() < 1e-9);

    table.insert(
        GridMode::Diamond,
        OrientationKey::FromLayer1,
        Letter::Psi,
        TurnsTupleKey::new("(cw, 0, 1)"),
        "static_rot_angle_override",
        OverrideValue::Rotation(-45.0),
    );
    assert!(RotationAngleResolver::has_override(&table, &p, Color::Red));
    assert_eq!(RotationAngleResolver::angle_for(&table, &p, Color::Red), 315.0);
    assert!(!RotationAngleResolver::has_override(&table, &p, Color::Blue));
}

#[test]
fn default_angles() {
    let dash = MotionState::new(Color::Blue, MotionType::Dash, Location::North, Location::South);
    assert!((RotationAngleResolver::default_arrow_angle(&dash) - 90.0).abs() < 1e-9);

    let ccw = MotionState::new(Color::Red, MotionType::Static, Location::East, Location::East)
        .with_turns(Turns::Half(1), PropRotDir::CounterClockwise);
    assert_eq!(RotationAngleResolver::default_arrow_angle(&ccw), 270.0);

    let prop = MotionState::new(Color::Red, MotionType::Pro, Location::West, Location::North)
        .with_oris(Orientation::In, Orientation::In);
    assert_eq!(RotationAngleResolver::prop_angle(&prop), 90.0);
    let prop = prop.with_oris(Orientation::In, Orientation::Counter);
    assert_eq!(RotationAngleResolver::prop_angle(&prop), 180.0);
}
