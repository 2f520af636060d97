//! Clamping, sign, and comparison helpers

use mathf_core::epsilon;

/// Clamp `value` into `[min, max]`
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Clamp `value` into `[0, 1]`
pub fn clamp01(value: f32) -> f32 {
    if value < 0.0 {
        return 0.0;
    }
    if value > 1.0 {
        return 1.0;
    }
    value
}

/// -1, 0, or 1 exactly. Zero maps to zero, not one.
pub fn sign(f: f32) -> f32 {
    if f < 0.0 {
        return -1.0;
    }
    if f > 0.0 {
        return 1.0;
    }
    0.0
}

/// Relative-tolerance equality with an absolute floor tied to the
/// platform's denormal behavior.
pub fn approximately(a: f32, b: f32) -> bool {
    (b - a).abs() < f32::max(1e-6 * f32::max(a.abs(), b.abs()), epsilon() * 8.0)
}

/// True when `value` lies in `[min, max]`, both ends inclusive
pub fn in_range(value: f32, min: f32, max: f32) -> bool {
    value >= min && value <= max
}

/// Scripted ternary: `t` when `value` is true, `f` otherwise
pub fn if_then(value: bool, t: f32, f: f32) -> f32 {
    if value {
        t
    } else {
        f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp01_range_and_idempotence() {
        for v in [-10.0, -0.5, 0.0, 0.25, 1.0, 3.0, f32::INFINITY] {
            let c = clamp01(v);
            assert!((0.0..=1.0).contains(&c), "clamp01({}) = {}", v, c);
            assert_eq!(clamp01(c), c);
        }
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(-5.0), -1.0);
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
    }

    #[test]
    fn test_approximately() {
        assert!(approximately(1.0000001, 1.0000002));
        assert!(!approximately(1.0, 2.0));
        assert!(approximately(0.0, 0.0));
        // Relative tolerance scales with magnitude
        assert!(approximately(1_000_000.0, 1_000_000.5));
        assert!(!approximately(1.0, 1.5));
    }

    #[test]
    fn test_in_range_inclusive() {
        assert!(in_range(0.0, 0.0, 1.0));
        assert!(in_range(1.0, 0.0, 1.0));
        assert!(in_range(0.5, 0.0, 1.0));
        assert!(!in_range(1.0001, 0.0, 1.0));
        assert!(!in_range(-0.0001, 0.0, 1.0));
    }

    #[test]
    fn test_if_then() {
        assert_eq!(if_then(true, 1.0, 2.0), 1.0);
        assert_eq!(if_then(false, 1.0, 2.0), 2.0);
    }
}
