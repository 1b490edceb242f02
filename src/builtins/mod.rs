//! Primitive operations and the native registry.
//!
//! Each submodule exposes the primitives as plain functions that generated
//! code calls directly, plus `native_*` wrappers with closure-compatible
//! signatures. [`natives`] packages the wrappers as callable values under
//! their surface names, covering every closure shape the invocation
//! protocol supports.

use crate::{
    closure::{NativeProc, VariadicProc},
    errors, exceptions,
    exceptions::CallResult,
    site::Site,
    value::{self, ValueRef},
};

pub mod arith_ops;
pub mod assert_ops;
pub mod compare_ops;
pub mod io_ops;
pub mod pair_ops;
pub mod type_check;

fn native_try(site: &Site, args: &[ValueRef]) -> CallResult {
    if args.len() != 2 {
        return Err(errors::argument_count_mismatch(site, 2, args.len()));
    }
    exceptions::try_block(site, &args[0], &args[1])
}

fn native_throw(site: &Site, args: &[ValueRef]) -> CallResult {
    if args.len() != 1 {
        return Err(errors::argument_count_mismatch(site, 1, args.len()));
    }
    Err(exceptions::throw(site, args[0].clone()))
}

/// All native procedures under their surface names.
///
/// The compiler resolves free references against this table and emits frame
/// bindings for the ones a program uses.
pub fn natives() -> Vec<(&'static str, ValueRef)> {
    vec![
        (
            "+",
            value::native_variadic("+", VariadicProc::Plain(arith_ops::native_add_all)),
        ),
        (
            "-",
            value::native_variadic("-", VariadicProc::Plain(arith_ops::native_sub_all)),
        ),
        (
            "*",
            value::native_variadic("*", VariadicProc::Plain(arith_ops::native_mul_all)),
        ),
        (
            "/",
            value::native_variadic("/", VariadicProc::WithSite(arith_ops::native_div_all)),
        ),
        (
            "=",
            value::native("=", NativeProc::N2(compare_ops::native_equals)),
        ),
        (
            "<",
            value::native("<", NativeProc::N2(compare_ops::native_less_than)),
        ),
        (
            ">",
            value::native(">", NativeProc::N2(compare_ops::native_greater_than)),
        ),
        (
            "cons",
            value::native("cons", NativeProc::N2(pair_ops::native_cons)),
        ),
        (
            "car",
            value::native_variadic("car", VariadicProc::WithSite(pair_ops::native_car)),
        ),
        (
            "cdr",
            value::native_variadic("cdr", VariadicProc::WithSite(pair_ops::native_cdr)),
        ),
        (
            "null?",
            value::native("null?", NativeProc::N1(type_check::native_is_null)),
        ),
        (
            "boolean?",
            value::native("boolean?", NativeProc::N1(type_check::native_is_boolean)),
        ),
        (
            "integer?",
            value::native("integer?", NativeProc::N1(type_check::native_is_integer)),
        ),
        (
            "string?",
            value::native("string?", NativeProc::N1(type_check::native_is_string)),
        ),
        (
            "pair?",
            value::native("pair?", NativeProc::N1(type_check::native_is_pair)),
        ),
        (
            "print",
            value::native_variadic("print", VariadicProc::Plain(io_ops::native_print)),
        ),
        (
            "println",
            value::native_variadic("println", VariadicProc::Plain(io_ops::native_println)),
        ),
        (
            "assert-eq",
            value::native_variadic("assert-eq", VariadicProc::WithSite(assert_ops::native_assert_eq)),
        ),
        (
            "assert-neq",
            value::native_variadic(
                "assert-neq",
                VariadicProc::WithSite(assert_ops::native_assert_neq),
            ),
        ),
        (
            "assert-true",
            value::native_variadic(
                "assert-true",
                VariadicProc::WithSite(assert_ops::native_assert_true),
            ),
        ),
        (
            "assert-false",
            value::native_variadic(
                "assert-false",
                VariadicProc::WithSite(assert_ops::native_assert_false),
            ),
        ),
        (
            "fail",
            value::native_variadic("fail", VariadicProc::WithSite(assert_ops::native_fail)),
        ),
        (
            "try",
            value::native_variadic("try", VariadicProc::WithSite(native_try)),
        ),
        (
            "throw",
            value::native_variadic("throw", VariadicProc::WithSite(native_throw)),
        ),
    ]
}
