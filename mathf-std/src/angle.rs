//! Wrapping and periodic functions (degrees)

use crate::cmp::clamp;

/// Wrap `t` into `[0, length]`. The trailing clamp absorbs floating error
/// at the boundary.
pub fn repeat(t: f32, length: f32) -> f32 {
    clamp(t - (t / length).floor() * length, 0.0, length)
}

/// Shortest signed angular difference in degrees, in `(-180, 180]`
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = repeat(target - current, 360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Triangle wave over `t` with period `2 * length`, peaking at `length`
pub fn ping_pong(t: f32, length: f32) -> f32 {
    let t = repeat(t, length * 2.0);
    length - (t - length).abs()
}
