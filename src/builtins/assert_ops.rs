//! Assertion primitives for compiled test programs.
//!
//! A passing assertion prints `- = <msg>`; a failing one raises `Exit` with
//! an `x = <msg>` message instead of terminating the process directly, so an
//! enclosing try scope (or the driver boundary) decides what happens next.

use crate::{
    errors,
    exceptions::CallResult,
    site::Site,
    value::{self, Value, ValueRef},
};

use super::compare_ops::values_equal;

fn message_text(msg: &ValueRef) -> String {
    match msg.as_ref() {
        Value::String(s) => s.to_string(),
        other => other.to_string(),
    }
}

fn outcome(site: &Site, msg: &ValueRef, passed: bool) -> CallResult {
    let text = message_text(msg);
    if passed {
        println!("- = {}", text);
        Ok(value::null_value())
    } else {
        Err(errors::exit_with(site, &format!("x = {}", text)))
    }
}

pub fn assert_eq_values(site: &Site, msg: &ValueRef, actual: &ValueRef, expected: &ValueRef) -> CallResult {
    outcome(site, msg, values_equal(actual, expected))
}

pub fn assert_neq_values(site: &Site, msg: &ValueRef, actual: &ValueRef, expected: &ValueRef) -> CallResult {
    outcome(site, msg, !values_equal(actual, expected))
}

pub fn assert_true(site: &Site, msg: &ValueRef, v: &ValueRef) -> CallResult {
    outcome(site, msg, matches!(v.as_ref(), Value::Boolean(true)))
}

pub fn assert_false(site: &Site, msg: &ValueRef, v: &ValueRef) -> CallResult {
    outcome(site, msg, matches!(v.as_ref(), Value::Boolean(false)))
}

/// Unconditional user-level abort.
pub fn fail(site: &Site, msg: &ValueRef) -> CallResult {
    Err(errors::exit_with(
        site,
        &format!("x = {}", message_text(msg)),
    ))
}

pub(super) fn native_assert_eq(site: &Site, args: &[ValueRef]) -> CallResult {
    if args.len() != 3 {
        return Err(errors::argument_count_mismatch(site, 3, args.len()));
    }
    assert_eq_values(site, &args[0], &args[1], &args[2])
}

pub(super) fn native_assert_neq(site: &Site, args: &[ValueRef]) -> CallResult {
    if args.len() != 3 {
        return Err(errors::argument_count_mismatch(site, 3, args.len()));
    }
    assert_neq_values(site, &args[0], &args[1], &args[2])
}

pub(super) fn native_assert_true(site: &Site, args: &[ValueRef]) -> CallResult {
    if args.len() != 2 {
        return Err(errors::argument_count_mismatch(site, 2, args.len()));
    }
    assert_true(site, &args[0], &args[1])
}

pub(super) fn native_assert_false(site: &Site, args: &[ValueRef]) -> CallResult {
    if args.len() != 2 {
        return Err(errors::argument_count_mismatch(site, 2, args.len()));
    }
    assert_false(site, &args[0], &args[1])
}

pub(super) fn native_fail(site: &Site, args: &[ValueRef]) -> CallResult {
    if args.len() != 1 {
        return Err(errors::argument_count_mismatch(site, 1, args.len()));
    }
    fail(site, &args[0])
}
