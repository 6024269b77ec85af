use crate::foundation::core::Vec2;

/// Rotate `v` clockwise (screen coordinates) by a quarter turn.
pub(crate) fn turn_cw(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Rotate `v` clockwise (screen coordinates) by `quarters` quarter turns, exactly.
pub(crate) fn turn_cw_n(v: Vec2, quarters: usize) -> Vec2 {
    (0..quarters % 4).fold(v, |acc, _| turn_cw(acc))
}

/// Rotate `v` clockwise (screen coordinates) by `degrees`.
pub(crate) fn rotate_deg(v: Vec2, degrees: f64) -> Vec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Reflect `v` across the line through the origin spanned by `axis`.
pub(crate) fn reflect_across(v: Vec2, axis: Vec2) -> Vec2 {
    let len2 = axis.hypot2();
    if len2 == 0.0 {
        return v;
    }
    let proj = axis * (v.dot(axis) / len2);
    proj * 2.0 - v
}

/// Wrap an angle into `[0, 360)`.
pub(crate) fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs.
    if d >= 360.0 { 0.0 } else { d }
}

/// Angle of `v`, degrees clockwise from `+x` in `[0, 360)`.
pub(crate) fn angle_of(v: Vec2) -> f64 {
    normalize_degrees(v.y.atan2(v.x).to_degrees())
}
