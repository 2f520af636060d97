//! Mathf Standard Catalogue
//!
//! The fixed set of pure scalar math utilities the plugin exposes to
//! scripts, and the loader that binds each one to its host-visible name
//! under the `Mathf` namespace.

pub mod angle;
pub mod cmp;
pub mod float;
pub mod interp;
pub mod pow2;

use mathf_plugin::{FunctionTable, NativeFn, ScriptVm};
use tracing::{error, info};

/// Namespace all functions register under
pub const NAMESPACE: &str = "Mathf";

/// Build the full binding table, in registration order (alphabetical,
/// matching the host API it mirrors).
pub fn standard_table() -> FunctionTable {
    FunctionTable::new()
        .with("Abs", NativeFn::Float1(float::abs))
        .with("Acos", NativeFn::Float1(float::acos))
        .with("Approximately", NativeFn::Predicate2(cmp::approximately))
        .with("Asin", NativeFn::Float1(float::asin))
        .with("Atan", NativeFn::Float1(float::atan))
        .with("Atan2", NativeFn::Float2(float::atan2))
        .with("Ceil", NativeFn::Float1(float::ceil))
        .with("CeilToInt", NativeFn::FloatToInt(float::ceil_to_int))
        .with("Clamp", NativeFn::Float3(cmp::clamp))
        .with("Clamp01", NativeFn::Float1(cmp::clamp01))
        .with("ClosestPowerOfTwo", NativeFn::Int1(pow2::closest_power_of_two))
        .with("Cos", NativeFn::Float1(float::cos))
        .with("DeltaAngle", NativeFn::Float2(angle::delta_angle))
        .with("Exp", NativeFn::Float1(float::exp))
        .with("Floor", NativeFn::Float1(float::floor))
        .with("FloorToInt", NativeFn::FloatToInt(float::floor_to_int))
        .with("IfThen", NativeFn::Select(cmp::if_then))
        .with("InRange", NativeFn::Predicate3(cmp::in_range))
        .with("InverseLerp", NativeFn::Float3(interp::inverse_lerp))
        .with("IsPowerOfTwo", NativeFn::IntPredicate(pow2::is_power_of_two))
        .with("Lerp", NativeFn::Float3(interp::lerp))
        .with("LerpAngle", NativeFn::Float3(interp::lerp_angle))
        .with("LerpUnclamped", NativeFn::Float3(interp::lerp_unclamped))
        .with("Log", NativeFn::Float1(float::log))
        .with("Log10", NativeFn::Float1(float::log10))
        .with("Max", NativeFn::Float2(float::max))
        .with("Min", NativeFn::Float2(float::min))
        .with("MoveTowards", NativeFn::Float3(interp::move_towards))
        .with("MoveTowardsAngle", NativeFn::Float3(interp::move_towards_angle))
        .with("NextPowerOfTwo", NativeFn::Int1(pow2::next_power_of_two))
        .with("PingPong", NativeFn::Float2(angle::ping_pong))
        .with("Pow", NativeFn::Float2(float::pow))
        .with("Repeat", NativeFn::Float2(angle::repeat))
        .with("Round", NativeFn::Float1(float::round))
        .with("RoundToInt", NativeFn::FloatToInt(float::round_to_int))
        .with("Sign", NativeFn::Float1(cmp::sign))
        .with("Sin", NativeFn::Float1(float::sin))
        .with("SmoothStep", NativeFn::Float3(interp::smooth_step))
        .with("Sqrt", NativeFn::Float1(float::sqrt))
        .with("Tan", NativeFn::Float1(float::tan))
}

/// Register the whole catalogue into the host VM.
///
/// Called once at plugin load. A missing VM logs and reports failure
/// without registering anything; past that check there is no failure mode.
pub fn register_funcs(vm: Option<&mut dyn ScriptVm>) -> bool {
    let Some(vm) = vm else {
        error!("couldn't get VM state, skipping registration");
        return false;
    };

    let table = standard_table();
    table.register_into(vm, NAMESPACE);
    info!(count = table.len(), namespace = NAMESPACE, "registered functions");
    true
}
