use super::*;
use crate::foundation::error::PictoplaceError;
use crate::motion::model::Turns;

#[test]
fn default_offsets_are_total_and_deterministic() {
    for mode in GridMode::ALL {
        for loc in Location::ALL {
            let a = DefaultPlacementProvider::get_default_offset(loc, mode);
            let b = DefaultPlacementProvider::get_default_offset(loc, mode);
            assert_eq!(a, b);
            assert!(a.hypot() > 100.0, "{loc:?} in {mode:?}");
        }
    }
}

#[test]
fn hand_points_share_one_radius() {
    let r = |loc, mode| DefaultPlacementProvider::get_default_offset(loc, mode).hypot();
    assert!((r(Location::North, GridMode::Diamond) - 143.1).abs() < 0.1);
    assert!((r(Location::NorthEast, GridMode::Box) - 143.1).abs() < 0.1);
    assert!((r(Location::NorthEast, GridMode::Diamond) - r(Location::North, GridMode::Box)).abs() < 0.1);
}

#[test]
fn offsets_point_toward_their_location() {
    for mode in GridMode::ALL {
        for loc in Location::ALL {
            let v = DefaultPlacementProvider::get_default_offset(loc, mode);
            assert!(v.normalize().dot(loc.unit_vec()) > 0.999);
        }
    }
}

#[test]
fn unknown_location_name_is_rejected() {
    let err = DefaultPlacementProvider::get_default_offset_by_name("up", GridMode::Diamond)
        .unwrap_err();
    assert!(matches!(err, PictoplaceError::UnknownLocation(_)));
    let v = DefaultPlacementProvider::get_default_offset_by_name("e", GridMode::Diamond).unwrap();
    assert_eq!(v, Vec2::new(143.1, 0.0));
}

#[test]
fn default_position_is_relative_to_center() {
    let p = DefaultPlacementProvider::default_position(Location::South, GridMode::Diamond);
    assert!((p - Point::new(475.0, 618.1)).hypot() < 1e-9);
}

#[test]
fn shift_arrows_sit_between_start_and_end() {
    let blue = MotionState::new(Color::Blue, MotionType::Pro, Location::North, Location::East);
    let red = MotionState::new(Color::Red, MotionType::Anti, Location::West, Location::North);
    assert_eq!(
        DefaultPlacementProvider::arrow_location(&blue, &red),
        Location::NorthEast
    );
    assert_eq!(
        DefaultPlacementProvider::arrow_location(&red, &blue),
        Location::NorthWest
    );
    let boxed = MotionState::new(Color::Blue, MotionType::Pro, Location::NorthEast, Location::SouthEast);
    assert_eq!(
        DefaultPlacementProvider::arrow_location(&boxed, &red),
        Location::East
    );
}

#[test]
fn dash_arrows_pick_a_side_of_their_axis() {
    let turning = MotionState::new(Color::Blue, MotionType::Dash, Location::North, Location::South)
        .with_turns(Turns::Half(2), PropRotDir::CounterClockwise);
    let other = MotionState::new(Color::Red, MotionType::Static, Location::East, Location::East);
    assert_eq!(
        DefaultPlacementProvider::arrow_location(&turning, &other),
        Location::West
    );

    let blue = MotionState::new(Color::Blue, MotionType::Dash, Location::North, Location::South);
    let red = MotionState::new(Color::Red, MotionType::Dash, Location::North, Location::South);
    assert_ne!(
        DefaultPlacementProvider::arrow_location(&blue, &red),
        DefaultPlacementProvider::arrow_location(&red, &blue)
    );

    // A resting dash keeps away from the shift arrow it shares the grid with.
    let shift = MotionState::new(Color::Red, MotionType::Pro, Location::North, Location::East);
    assert_eq!(
        DefaultPlacementProvider::arrow_location(&blue, &shift),
        Location::West
    );
}

#[test]
fn resting_arrows_get_no_default_adjustment() {
    let m = MotionState::new(Color::Red, MotionType::Static, Location::East, Location::East);
    assert_eq!(DefaultPlacementProvider::default_adjustment(&m), Vec2::ZERO);
    let m = m.with_turns(Turns::Half(2), PropRotDir::Clockwise);
    assert_ne!(DefaultPlacementProvider::default_adjustment(&m), Vec2::ZERO);
}
