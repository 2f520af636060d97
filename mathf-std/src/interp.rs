//! Interpolation and stepping

use crate::angle::{delta_angle, repeat};
use crate::cmp::{approximately, clamp01, sign};

/// Linear interpolation with `t` clamped into `[0, 1]`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}

/// Linear interpolation without clamping
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate along the shortest angular path between `a` and `b`
/// (degrees); `t` is clamped.
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    let mut delta = repeat(b - a, 360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    a + delta * clamp01(t)
}

/// Where `value` sits between `a` and `b`, clamped into `[0, 1]`.
/// A degenerate range (`a` approximately `b`) yields 0.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if approximately(a, b) {
        return 0.0;
    }
    clamp01((value - a) / (b - a))
}

/// Cubic Hermite ease between `from` and `to`
pub fn smooth_step(from: f32, to: f32, t: f32) -> f32 {
    let t = clamp01(t);
    let t = -2.0 * t * t * t + 3.0 * t * t;
    to * t + from * (1.0 - t)
}

/// Step `current` toward `target` by at most `max_delta`. Returns `target`
/// exactly once within range.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        return target;
    }
    current + sign(target - current) * max_delta
}

/// Angular `move_towards`: steps along the wrapped delta rather than the
/// raw difference, so 350 -> 10 goes through 360, not backwards.
pub fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = delta_angle(current, target);
    if -max_delta < delta && delta < max_delta {
        return target;
    }
    move_towards(current, current + delta, max_delta)
}
