use super::*;

const ALL_TURNS: [Turns; 8] = [
    Turns::Half(0),
    Turns::Half(1),
    Turns::Half(2),
    Turns::Half(3),
    Turns::Half(4),
    Turns::Half(5),
    Turns::Half(6),
    Turns::Float,
];

#[test]
fn turns_validate_half_steps_in_range() {
    assert_eq!(Turns::new(1.5).unwrap(), Turns::Half(3));
    assert_eq!(Turns::new(3.0).unwrap(), Turns::Half(6));
    assert!(Turns::new(3.5).is_err());
    assert!(Turns::new(0.25).is_err());
    assert!(Turns::new(-0.5).is_err());
    assert!(Turns::new(f64::NAN).is_err());
}

#[test]
fn turns_normalize_whole_numbers_without_fraction() {
    assert_eq!(Turns::new(1.0).unwrap().to_string(), "1");
    assert_eq!(Turns::new(0.0).unwrap().to_string(), "0");
    assert_eq!(Turns::new(2.5).unwrap().to_string(), "2.5");
    assert_eq!(Turns::Float.to_string(), "fl");
    assert_eq!("1.0".parse::<Turns>().unwrap().to_string(), "1");
}

#[test]
fn turns_normalization_is_idempotent() {
    for t in ALL_TURNS {
        let once = t.to_string();
        let twice = once.parse::<Turns>().unwrap().to_string();
        assert_eq!(once, twice);
    }
}

#[test]
fn turns_serde_accepts_numbers_and_sentinel() {
    let t: Turns = serde_json::from_str("1.5").unwrap();
    assert_eq!(t, Turns::Half(3));
    let t: Turns = serde_json::from_str("\"fl\"").unwrap();
    assert_eq!(t, Turns::Float);
    assert!(serde_json::from_str::<Turns>("4").is_err());
    assert_eq!(serde_json::to_string(&Turns::Float).unwrap(), "\"fl\"");
}

#[test]
fn orientation_layers() {
    assert_eq!(Orientation::In.layer(), OriLayer::Layer1);
    assert_eq!(Orientation::Counter.layer(), OriLayer::Layer2);
    assert_eq!(Orientation::Clock.mirrored(), Orientation::Counter);
    assert_eq!(Orientation::Out.mirrored(), Orientation::Out);
    assert_eq!(Orientation::In.complement(), Orientation::Out);
}

#[test]
fn motion_state_json_uses_lowercase_names() {
    let m = MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East)
        .with_turns(Turns::Half(2), PropRotDir::CounterClockwise);
    let json = serde_json::to_value(m).unwrap();
    assert_eq!(json["motion_type"], "pro");
    assert_eq!(json["start_loc"], "n");
    assert_eq!(json["prop_rot_dir"], "counter_clockwise");
    assert!(json.get("prefloat_motion_type").is_none());
    let back: MotionState = serde_json::from_value(json).unwrap();
    assert_eq!(back, m);
}
