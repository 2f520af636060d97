//! Single-precision pass-throughs to the platform math library
//!
//! One wrapper per registered name so the binding table points at plain
//! `fn` items. `Log` is the natural logarithm, matching the host API.
//! The `*_to_int` variants narrow with `as`, which saturates and maps NaN
//! to 0; out-of-range behavior is platform-defined and deliberately
//! unguarded.

pub fn abs(f: f32) -> f32 {
    f.abs()
}

pub fn acos(f: f32) -> f32 {
    f.acos()
}

pub fn asin(f: f32) -> f32 {
    f.asin()
}

pub fn atan(f: f32) -> f32 {
    f.atan()
}

pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

pub fn ceil(f: f32) -> f32 {
    f.ceil()
}

pub fn ceil_to_int(f: f32) -> i32 {
    f.ceil() as i32
}

pub fn cos(f: f32) -> f32 {
    f.cos()
}

pub fn exp(p: f32) -> f32 {
    p.exp()
}

pub fn floor(f: f32) -> f32 {
    f.floor()
}

pub fn floor_to_int(f: f32) -> i32 {
    f.floor() as i32
}

pub fn log(f: f32) -> f32 {
    f.ln()
}

pub fn log10(f: f32) -> f32 {
    f.log10()
}

pub fn max(x: f32, y: f32) -> f32 {
    x.max(y)
}

pub fn min(x: f32, y: f32) -> f32 {
    x.min(y)
}

pub fn pow(f: f32, p: f32) -> f32 {
    f.powf(p)
}

/// Rounds half away from zero, like C `roundf`
pub fn round(f: f32) -> f32 {
    f.round()
}

pub fn round_to_int(f: f32) -> i32 {
    f.round() as i32
}

pub fn sin(f: f32) -> f32 {
    f.sin()
}

pub fn sqrt(f: f32) -> f32 {
    f.sqrt()
}

pub fn tan(f: f32) -> f32 {
    f.tan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_int_variants() {
        assert_eq!(ceil_to_int(3.2), 4);
        assert_eq!(ceil_to_int(-2.7), -2);
        assert_eq!(floor_to_int(3.7), 3);
        assert_eq!(floor_to_int(-2.3), -3);
        assert_eq!(round_to_int(3.5), 4);
        assert_eq!(round_to_int(-3.5), -4);
        assert_eq!(round_to_int(3.4), 3);
    }

    #[test]
    fn test_log_is_natural() {
        assert!((log(std::f32::consts::E) - 1.0).abs() < 1e-6);
        assert!((log10(100.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_atan2_argument_order() {
        // Registered as Atan2(y, x)
        assert!((atan2(1.0, 0.0) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_domain_errors_are_ieee_specials() {
        assert!(sqrt(-1.0).is_nan());
        assert!(log(0.0).is_infinite());
        assert!(acos(2.0).is_nan());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(max(1.0, 2.0), 2.0);
        assert_eq!(min(1.0, 2.0), 1.0);
        // fmin/fmax semantics: the non-NaN operand wins
        assert_eq!(max(f32::NAN, 2.0), 2.0);
        assert_eq!(min(1.0, f32::NAN), 1.0);
    }
}
