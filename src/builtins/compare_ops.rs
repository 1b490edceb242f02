//! Comparison primitives.
//!
//! Values of different tags never compare equal or ordered. Equality on
//! pairs recurses structurally; on vectors and closures it is always false
//! (intentionally unsupported). Ordering is defined for booleans, integers,
//! and strings (byte-wise lexicographic) only.

use crate::{
    exceptions::CallResult,
    value::{self, Value, ValueRef},
};

pub(crate) fn values_equal(a: &ValueRef, b: &ValueRef) -> bool {
    match (a.as_ref(), b.as_ref()) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Pair(car_a, cdr_a), Value::Pair(car_b, cdr_b)) => {
            values_equal(car_a, car_b) && values_equal(cdr_a, cdr_b)
        }
        _ => false,
    }
}

pub fn equals(a: &ValueRef, b: &ValueRef) -> ValueRef {
    value::boolean(values_equal(a, b))
}

pub fn less_than(a: &ValueRef, b: &ValueRef) -> ValueRef {
    let ordered = match (a.as_ref(), b.as_ref()) {
        (Value::Boolean(x), Value::Boolean(y)) => x < y,
        (Value::Integer(x), Value::Integer(y)) => x < y,
        (Value::String(x), Value::String(y)) => x.as_bytes() < y.as_bytes(),
        _ => false,
    };
    value::boolean(ordered)
}

pub fn greater_than(a: &ValueRef, b: &ValueRef) -> ValueRef {
    let ordered = match (a.as_ref(), b.as_ref()) {
        (Value::Boolean(x), Value::Boolean(y)) => x > y,
        (Value::Integer(x), Value::Integer(y)) => x > y,
        (Value::String(x), Value::String(y)) => x.as_bytes() > y.as_bytes(),
        _ => false,
    };
    value::boolean(ordered)
}

pub(super) fn native_equals(a: ValueRef, b: ValueRef) -> CallResult {
    Ok(equals(&a, &b))
}

pub(super) fn native_less_than(a: ValueRef, b: ValueRef) -> CallResult {
    Ok(less_than(&a, &b))
}

pub(super) fn native_greater_than(a: ValueRef, b: ValueRef) -> CallResult {
    Ok(greater_than(&a, &b))
}
