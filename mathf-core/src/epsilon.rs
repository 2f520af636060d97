//! Comparison tolerance tied to the FPU's denormal behavior
//!
//! The `approximately` comparison needs an absolute floor below which two
//! floats count as equal. On hardware that flushes denormals to zero the
//! smallest denormal is itself zero, so the floor has to fall back to the
//! smallest normal value. Which case applies depends on the FPU mode the
//! host process runs under, so the selection is a runtime probe made once,
//! not a compile-time constant.

use std::hint::black_box;
use std::sync::LazyLock;

/// Smallest positive normal f32 (~1.175494e-38)
pub const FLOAT_MIN_NORMAL: f32 = f32::MIN_POSITIVE;

/// Smallest positive denormal f32 (~1.401298e-45)
pub const FLOAT_MIN_DENORMAL: f32 = 1.401298e-45;

static EPSILON: LazyLock<f32> = LazyLock::new(|| {
    // black_box keeps the probe out of constant folding; a flush-to-zero
    // FPU mode zeroes the denormal on the round-trip through f64.
    let flush_to_zero = black_box(FLOAT_MIN_DENORMAL) as f64 == 0.0;
    if flush_to_zero {
        FLOAT_MIN_NORMAL
    } else {
        FLOAT_MIN_DENORMAL
    }
});

/// The process-wide comparison floor. Immutable after first use.
pub fn epsilon() -> f32 {
    *EPSILON
}
