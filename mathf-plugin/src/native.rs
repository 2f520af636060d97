//! Native function adapter
//!
//! The catalogue uses a small fixed set of scalar signatures, so the
//! adapter is an enum over plain `fn` pointers rather than boxed closures:
//! bindings stay `Copy`, allocation-free, and trivially `Send + Sync`.
//! Arity and argument types are checked here, once, at the host boundary;
//! past this point the native functions are total.

use mathf_core::{CallError, Value, ValueType};

/// A native implementation, tagged by its scalar signature
#[derive(Clone, Copy)]
pub enum NativeFn {
    /// f(Float) -> Float
    Float1(fn(f32) -> f32),
    /// f(Float, Float) -> Float
    Float2(fn(f32, f32) -> f32),
    /// f(Float, Float, Float) -> Float
    Float3(fn(f32, f32, f32) -> f32),
    /// f(Float) -> Int
    FloatToInt(fn(f32) -> i32),
    /// f(Int) -> Int
    Int1(fn(i32) -> i32),
    /// f(Int) -> Bool
    IntPredicate(fn(i32) -> bool),
    /// f(Float, Float) -> Bool
    Predicate2(fn(f32, f32) -> bool),
    /// f(Float, Float, Float) -> Bool
    Predicate3(fn(f32, f32, f32) -> bool),
    /// f(Bool, Float, Float) -> Float
    Select(fn(bool, f32, f32) -> f32),
}

const FLOAT_1: &[ValueType] = &[ValueType::Float];
const FLOAT_2: &[ValueType] = &[ValueType::Float, ValueType::Float];
const FLOAT_3: &[ValueType] = &[ValueType::Float, ValueType::Float, ValueType::Float];
const INT_1: &[ValueType] = &[ValueType::Int];
const SELECT: &[ValueType] = &[ValueType::Bool, ValueType::Float, ValueType::Float];

impl NativeFn {
    /// Parameter types, in call order
    pub fn params(&self) -> &'static [ValueType] {
        match self {
            NativeFn::Float1(_) | NativeFn::FloatToInt(_) => FLOAT_1,
            NativeFn::Float2(_) | NativeFn::Predicate2(_) => FLOAT_2,
            NativeFn::Float3(_) | NativeFn::Predicate3(_) => FLOAT_3,
            NativeFn::Int1(_) | NativeFn::IntPredicate(_) => INT_1,
            NativeFn::Select(_) => SELECT,
        }
    }

    /// Return type
    pub fn returns(&self) -> ValueType {
        match self {
            NativeFn::Float1(_) | NativeFn::Float2(_) | NativeFn::Float3(_) | NativeFn::Select(_) => {
                ValueType::Float
            }
            NativeFn::FloatToInt(_) | NativeFn::Int1(_) => ValueType::Int,
            NativeFn::IntPredicate(_) | NativeFn::Predicate2(_) | NativeFn::Predicate3(_) => {
                ValueType::Bool
            }
        }
    }

    pub fn arity(&self) -> usize {
        self.params().len()
    }

    /// Dispatch a host argument list to the native implementation.
    ///
    /// `func` is the registered name, used only for error messages.
    pub fn call(&self, func: &'static str, args: &[Value]) -> Result<Value, CallError> {
        let expected = self.arity();
        if args.len() != expected {
            return Err(CallError::ArgCount {
                func,
                expected,
                got: args.len(),
            });
        }

        match self {
            NativeFn::Float1(f) => Ok(Value::Float(f(float_arg(func, args, 0)?))),
            NativeFn::Float2(f) => Ok(Value::Float(f(
                float_arg(func, args, 0)?,
                float_arg(func, args, 1)?,
            ))),
            NativeFn::Float3(f) => Ok(Value::Float(f(
                float_arg(func, args, 0)?,
                float_arg(func, args, 1)?,
                float_arg(func, args, 2)?,
            ))),
            NativeFn::FloatToInt(f) => Ok(Value::Int(f(float_arg(func, args, 0)?))),
            NativeFn::Int1(f) => Ok(Value::Int(f(int_arg(func, args, 0)?))),
            NativeFn::IntPredicate(f) => Ok(Value::Bool(f(int_arg(func, args, 0)?))),
            NativeFn::Predicate2(f) => Ok(Value::Bool(f(
                float_arg(func, args, 0)?,
                float_arg(func, args, 1)?,
            ))),
            NativeFn::Predicate3(f) => Ok(Value::Bool(f(
                float_arg(func, args, 0)?,
                float_arg(func, args, 1)?,
                float_arg(func, args, 2)?,
            ))),
            NativeFn::Select(f) => Ok(Value::Float(f(
                bool_arg(func, args, 0)?,
                float_arg(func, args, 1)?,
                float_arg(func, args, 2)?,
            ))),
        }
    }
}

impl std::fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params: Vec<&str> = self.params().iter().map(|p| p.name()).collect();
        write!(f, "fn({}) -> {}", params.join(", "), self.returns().name())
    }
}

fn float_arg(func: &'static str, args: &[Value], index: usize) -> Result<f32, CallError> {
    args[index].as_float().ok_or(CallError::ArgType {
        func,
        index,
        expected: "Float",
        got: args[index].type_name(),
    })
}

fn int_arg(func: &'static str, args: &[Value], index: usize) -> Result<i32, CallError> {
    args[index].as_int().ok_or(CallError::ArgType {
        func,
        index,
        expected: "Int",
        got: args[index].type_name(),
    })
}

fn bool_arg(func: &'static str, args: &[Value], index: usize) -> Result<bool, CallError> {
    args[index].as_bool().ok_or(CallError::ArgType {
        func,
        index,
        expected: "Bool",
        got: args[index].type_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(f: f32) -> f32 {
        f * 2.0
    }

    fn both_positive(a: f32, b: f32) -> bool {
        a > 0.0 && b > 0.0
    }

    #[test]
    fn test_dispatch() {
        let f = NativeFn::Float1(double);
        assert_eq!(f.call("Double", &[Value::Float(2.5)]), Ok(Value::Float(5.0)));
    }

    #[test]
    fn test_int_promotes_to_float() {
        let f = NativeFn::Float1(double);
        assert_eq!(f.call("Double", &[Value::Int(3)]), Ok(Value::Float(6.0)));
    }

    #[test]
    fn test_arg_count() {
        let f = NativeFn::Predicate2(both_positive);
        assert_eq!(
            f.call("BothPositive", &[Value::Float(1.0)]),
            Err(CallError::ArgCount {
                func: "BothPositive",
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_arg_type() {
        let f = NativeFn::Float1(double);
        assert_eq!(
            f.call("Double", &[Value::Bool(true)]),
            Err(CallError::ArgType {
                func: "Double",
                index: 0,
                expected: "Float",
                got: "Bool"
            })
        );
    }

    #[test]
    fn test_signature() {
        let f = NativeFn::Select(|c, t, e| if c { t } else { e });
        assert_eq!(f.arity(), 3);
        assert_eq!(f.params()[0], ValueType::Bool);
        assert_eq!(f.returns(), ValueType::Float);
        assert_eq!(format!("{:?}", f), "fn(Bool, Float, Float) -> Float");
    }
}
