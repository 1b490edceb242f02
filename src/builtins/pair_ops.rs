//! Cons-cell construction and accessors.

use crate::{
    errors,
    exceptions::CallResult,
    site::Site,
    value::{self, Value, ValueRef},
};

pub fn cons(car: ValueRef, cdr: ValueRef) -> ValueRef {
    value::pair(car, cdr)
}

/// Raises `EmptyList` when `v` is not a pair.
pub fn car(site: &Site, v: &ValueRef) -> CallResult {
    match v.as_ref() {
        Value::Pair(car, _) => Ok(car.clone()),
        _ => Err(errors::empty_list(site, "car", v)),
    }
}

/// Raises `EmptyList` when `v` is not a pair.
pub fn cdr(site: &Site, v: &ValueRef) -> CallResult {
    match v.as_ref() {
        Value::Pair(_, cdr) => Ok(cdr.clone()),
        _ => Err(errors::empty_list(site, "cdr", v)),
    }
}

pub(super) fn native_cons(car: ValueRef, cdr: ValueRef) -> CallResult {
    Ok(cons(car, cdr))
}

pub(super) fn native_car(site: &Site, args: &[ValueRef]) -> CallResult {
    if args.len() != 1 {
        return Err(errors::argument_count_mismatch(site, 1, args.len()));
    }
    car(site, &args[0])
}

pub(super) fn native_cdr(site: &Site, args: &[ValueRef]) -> CallResult {
    if args.len() != 1 {
        return Err(errors::argument_count_mismatch(site, 1, args.len()));
    }
    cdr(site, &args[0])
}
