//! Integer arithmetic.
//!
//! Non-integer operands coerce to 0 rather than raising a type fault; this
//! permissive policy is part of the language's observable behavior and is
//! kept as-is. Division is the one exception: a coerced-zero divisor always
//! raises `DivideByZero`. The zero fast paths return the untouched operand,
//! preserving allocation identity.

use crate::{
    errors,
    exceptions::CallResult,
    site::Site,
    value::{self, ValueRef},
};

fn int_or_zero(v: &ValueRef) -> i64 {
    v.as_integer().unwrap_or(0)
}

pub fn add(a: &ValueRef, b: &ValueRef) -> ValueRef {
    let left = int_or_zero(a);
    if left == 0 {
        return b.clone();
    }
    let right = int_or_zero(b);
    if right == 0 {
        return a.clone();
    }
    value::integer(left.wrapping_add(right))
}

pub fn sub(a: &ValueRef, b: &ValueRef) -> ValueRef {
    let right = int_or_zero(b);
    if right == 0 {
        return a.clone();
    }
    value::integer(int_or_zero(a).wrapping_sub(right))
}

pub fn mul(a: &ValueRef, b: &ValueRef) -> ValueRef {
    let left = int_or_zero(a);
    if left == 0 {
        return value::integer(0);
    }
    let right = int_or_zero(b);
    if right == 0 {
        return value::integer(0);
    }
    value::integer(left.wrapping_mul(right))
}

/// Truncating integer division. Raises `DivideByZero` when `b` coerces to 0.
pub fn div(site: &Site, a: &ValueRef, b: &ValueRef) -> CallResult {
    let right = int_or_zero(b);
    if right == 0 {
        return Err(errors::divide_by_zero(site));
    }
    Ok(value::integer(int_or_zero(a).wrapping_div(right)))
}

/// Left fold of [`add`]; the empty fold is the identity 0.
pub fn add_all(args: &[ValueRef]) -> ValueRef {
    match args {
        [] => value::integer(0),
        [first, rest @ ..] => rest.iter().fold(first.clone(), |acc, v| add(&acc, v)),
    }
}

/// Left fold of [`sub`]; zero arguments yield 0, one argument negates.
pub fn sub_all(args: &[ValueRef]) -> ValueRef {
    match args {
        [] => value::integer(0),
        [only] => sub(&value::integer(0), only),
        [first, rest @ ..] => rest.iter().fold(first.clone(), |acc, v| sub(&acc, v)),
    }
}

/// Left fold of [`mul`]; the empty fold is the identity 1.
pub fn mul_all(args: &[ValueRef]) -> ValueRef {
    match args {
        [] => value::integer(1),
        [first, rest @ ..] => rest.iter().fold(first.clone(), |acc, v| mul(&acc, v)),
    }
}

/// Left fold of [`div`]; zero arguments yield 1, one argument divides 1 by
/// it. Any step with a zero divisor raises.
pub fn div_all(site: &Site, args: &[ValueRef]) -> CallResult {
    match args {
        [] => Ok(value::integer(1)),
        [only] => div(site, &value::integer(1), only),
        [first, rest @ ..] => rest
            .iter()
            .try_fold(first.clone(), |acc, v| div(site, &acc, v)),
    }
}

pub(super) fn native_add_all(args: &[ValueRef]) -> CallResult {
    Ok(add_all(args))
}

pub(super) fn native_sub_all(args: &[ValueRef]) -> CallResult {
    Ok(sub_all(args))
}

pub(super) fn native_mul_all(args: &[ValueRef]) -> CallResult {
    Ok(mul_all(args))
}

pub(super) fn native_div_all(site: &Site, args: &[ValueRef]) -> CallResult {
    div_all(site, args)
}
