use super::*;

#[test]
fn location_names_round_trip_and_reject_unknown() {
    for loc in Location::ALL {
        assert_eq!(loc.as_str().parse::<Location>().unwrap(), loc);
    }
    let err = "north".parse::<Location>().unwrap_err();
    assert!(matches!(err, PictoplaceError::UnknownLocation(ref s) if s == "north"));
}

#[test]
fn location_octants_are_clockwise_from_east() {
    assert_eq!(Location::East.angle_deg(), 0.0);
    assert_eq!(Location::South.angle_deg(), 90.0);
    assert_eq!(Location::North.angle_deg(), 270.0);
    assert_eq!(Location::North.rotated(2), Location::East);
    assert_eq!(Location::NorthEast.opposite(), Location::SouthWest);
    assert_eq!(Location::from_octant(-1), Location::NorthEast);
}

#[test]
fn mirror_swaps_east_and_west() {
    assert_eq!(Location::East.mirrored(), Location::West);
    assert_eq!(Location::NorthEast.mirrored(), Location::NorthWest);
    assert_eq!(Location::SouthWest.mirrored(), Location::SouthEast);
    assert_eq!(Location::North.mirrored(), Location::North);
    for loc in Location::ALL {
        assert_eq!(loc.mirrored().mirrored(), loc);
    }
}

#[test]
fn direction_opposites_are_involutive() {
    for d in Direction::ALL {
        assert_ne!(d.opposite(), d);
        assert_eq!(d.opposite().opposite(), d);
        assert_eq!(d.signs(), -d.opposite().signs());
    }
}

#[test]
fn direction_snaps_vectors() {
    assert_eq!(Direction::from_vec(Vec2::new(0.0, 3.0)), Some(Direction::Down));
    assert_eq!(Direction::from_vec(Vec2::new(2.0, -2.1)), Some(Direction::UpRight));
    assert_eq!(Direction::from_vec(Vec2::new(-5.0, 0.1)), Some(Direction::Left));
    assert_eq!(Direction::from_vec(Vec2::ZERO), None);
    assert!(matches!(
        "sideways".parse::<Direction>(),
        Err(PictoplaceError::UnknownDirection(_))
    ));
}
