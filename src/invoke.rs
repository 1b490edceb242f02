//! Closure invocation protocol.
//!
//! Generated code only ever emits "call this value with N arguments"; the
//! dispatch below unifies the three callable shapes behind that single
//! operation. Variadic natives skip the arity check entirely, fixed natives
//! are called positionally without a frame, and dynamic closures receive
//! their captured frame as the leading argument.

use crate::{
    closure::VariadicProc,
    errors,
    exceptions::CallResult,
    site::Site,
    value::{Value, ValueRef},
};

/// Calls `callee` with `args`.
///
/// Raises `ArgumentCountMismatch` before any user code runs when a fixed
/// native or a dynamic closure is given the wrong count, and `NotClosure`
/// when `callee` is not callable at all.
pub fn invoke(site: &Site, callee: &ValueRef, args: &[ValueRef]) -> CallResult {
    match callee.as_ref() {
        Value::NativeVariadicClosure(c) => match c.proc {
            VariadicProc::Plain(f) => f(args),
            VariadicProc::WithSite(f) => f(site, args),
        },
        Value::NativeClosure(c) => {
            let expected = c.proc.arity();
            if expected != args.len() {
                return Err(errors::argument_count_mismatch(site, expected, args.len()));
            }
            c.proc.call(args)
        }
        Value::DynamicClosure(c) => {
            let expected = c.proc.arity();
            if expected != args.len() {
                return Err(errors::argument_count_mismatch(site, expected, args.len()));
            }
            c.proc.call(c.frame.clone(), args)
        }
        _ => Err(errors::not_closure(site, callee)),
    }
}
