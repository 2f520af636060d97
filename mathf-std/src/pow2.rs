//! Power-of-two helpers over 32-bit integers
//!
//! These reproduce the host API's bit tricks exactly, wrapping arithmetic
//! included, because scripts depend on the edge-case results.

/// True iff exactly one bit is set in `n` viewed as unsigned 32-bit.
///
/// The mask trick deliberately treats the sign-bit-only pattern
/// (`i32::MIN`) as a power of two.
pub fn is_power_of_two(n: i32) -> bool {
    let u = n as u32;
    (u | 0x8000_0000) & u.wrapping_sub(1) == 0
}

/// Round `n` to the nearer of the surrounding powers of two. The lower
/// value wins only when the upper is strictly farther, so ties go high.
pub fn closest_power_of_two(n: i32) -> i32 {
    let mut v = n.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v = v.wrapping_add(1);

    let x = v >> 1;

    if v.wrapping_sub(n) > n.wrapping_sub(x) {
        x
    } else {
        v
    }
}

/// Smallest power of two >= `n`, via `2^ceil(log2(n))` in double precision.
/// Non-positive input is platform-defined (the log goes NaN and narrows
/// to 0).
pub fn next_power_of_two(n: i32) -> i32 {
    f64::powf(2.0, f64::from(n).log2().ceil()) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_power_of_two() {
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(2));
        assert!(is_power_of_two(16));
        assert!(is_power_of_two(1 << 30));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(17));
        assert!(!is_power_of_two(-2));
    }

    #[test]
    fn test_is_power_of_two_sign_bit_quirk() {
        // The unsigned-mask trick accepts the sign-bit-only pattern
        assert!(is_power_of_two(i32::MIN));
    }

    #[test]
    fn test_closest_power_of_two() {
        assert_eq!(closest_power_of_two(5), 4);
        assert_eq!(closest_power_of_two(6), 8);
        assert_eq!(closest_power_of_two(7), 8);
        assert_eq!(closest_power_of_two(8), 8);
        assert_eq!(closest_power_of_two(9), 8);
        assert_eq!(closest_power_of_two(1), 1);
        assert_eq!(closest_power_of_two(100), 128);
    }

    #[test]
    fn test_closest_power_of_two_ties_go_high() {
        // 12 is equidistant from 8 and 16; the strict compare returns 16
        assert_eq!(closest_power_of_two(12), 16);
        assert_eq!(closest_power_of_two(3), 4);
    }

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(5), 8);
        assert_eq!(next_power_of_two(8), 8);
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(1000), 1024);
    }
}
