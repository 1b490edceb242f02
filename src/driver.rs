//! Entry contract with the compiled program's driver.
//!
//! The process entry point itself lives outside this crate; what it does is
//! fixed, though: initialize the runtime, install the outermost exception
//! scope, invoke the program's root procedure with the integer 0, and report
//! an uncaught exception before exiting non-zero.

use crate::{
    exceptions::boundary,
    heap,
    heap::AllocStats,
    invoke::invoke,
    site::Site,
    value::{self, ValueRef},
};

/// One-time runtime initialization. Creates the singletons and resets heap
/// accounting. Must precede any value construction.
pub fn init_runtime() {
    heap::init();
    // Touch the singletons so they predate all program allocations.
    let _ = (value::null_value(), value::boolean(true), value::boolean(false));
}

/// Invokes `root` inside the outermost exception scope and returns the
/// process exit status: 0 on success, 1 after reporting an uncaught
/// exception.
///
/// The report goes to stdout as `Unhandled Exception: ` followed by the
/// structural rendering of the captured payload and a newline.
pub fn run_root(root: &ValueRef) -> i32 {
    let entry = Site::entry();
    match boundary(|| invoke(&entry, root, &[value::integer(0)])) {
        Ok(_) => 0,
        Err(payload) => {
            println!("Unhandled Exception: {}", payload);
            1
        }
    }
}

/// Ends the runtime lifecycle, returning final allocation accounting.
pub fn shutdown_runtime() -> AllocStats {
    heap::shutdown()
}
