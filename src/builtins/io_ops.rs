//! Structural printing to stdout. The only externally observable side
//! channel the runtime has.

use crate::{
    exceptions::CallResult,
    value::{self, ValueRef},
};

/// Renders each argument structurally, no separators, no newline.
pub fn print(args: &[ValueRef]) -> ValueRef {
    for arg in args {
        print!("{}", arg);
    }
    value::null_value()
}

/// Like [`print`], followed by a newline.
pub fn println(args: &[ValueRef]) -> ValueRef {
    for arg in args {
        print!("{}", arg);
    }
    println!();
    value::null_value()
}

pub fn print_newline() {
    println!();
}

pub(super) fn native_print(args: &[ValueRef]) -> CallResult {
    Ok(print(args))
}

pub(super) fn native_println(args: &[ValueRef]) -> CallResult {
    Ok(println(args))
}
