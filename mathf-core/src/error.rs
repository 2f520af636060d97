//! Errors for mistyped or misarranged host calls
//!
//! The numeric functions themselves are total and never fail; invalid
//! domains produce IEEE-754 specials. Errors only arise at the binding
//! layer, when the host hands over the wrong shape of argument list.

use thiserror::Error;

/// Error produced when dispatching a host call to a native function
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("{func}() expects {expected} arguments, got {got}")]
    ArgCount {
        func: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{func}() argument {index}: expected {expected}, got {got}")]
    ArgType {
        func: &'static str,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    #[error("unknown function: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CallError::ArgCount {
            func: "Lerp",
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "Lerp() expects 3 arguments, got 2");

        let err = CallError::ArgType {
            func: "Abs",
            index: 0,
            expected: "Float",
            got: "Bool",
        };
        assert_eq!(err.to_string(), "Abs() argument 0: expected Float, got Bool");
    }
}
