//! Tag-test predicates. Pure, never fail.

use crate::{
    exceptions::CallResult,
    value::{self, Value, ValueRef},
};

pub fn is_null(v: &ValueRef) -> ValueRef {
    value::boolean(matches!(v.as_ref(), Value::Null))
}

pub fn is_boolean(v: &ValueRef) -> ValueRef {
    value::boolean(matches!(v.as_ref(), Value::Boolean(_)))
}

pub fn is_integer(v: &ValueRef) -> ValueRef {
    value::boolean(matches!(v.as_ref(), Value::Integer(_)))
}

pub fn is_string(v: &ValueRef) -> ValueRef {
    value::boolean(matches!(v.as_ref(), Value::String(_)))
}

pub fn is_pair(v: &ValueRef) -> ValueRef {
    value::boolean(matches!(v.as_ref(), Value::Pair(_, _)))
}

pub(super) fn native_is_null(v: ValueRef) -> CallResult {
    Ok(is_null(&v))
}

pub(super) fn native_is_boolean(v: ValueRef) -> CallResult {
    Ok(is_boolean(&v))
}

pub(super) fn native_is_integer(v: ValueRef) -> CallResult {
    Ok(is_integer(&v))
}

pub(super) fn native_is_string(v: ValueRef) -> CallResult {
    Ok(is_string(&v))
}

pub(super) fn native_is_pair(v: ValueRef) -> CallResult {
    Ok(is_pair(&v))
}
