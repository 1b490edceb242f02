//! Hand-written stand-ins for compiler output, exercising the full entry
//! contract: frames built per scope, closures captured, primitives called
//! directly, and the driver boundary around the root procedure.

use slip_runtime::builtins::{arith_ops, pair_ops};
use slip_runtime::closure::CompiledProc;
use slip_runtime::driver;
use slip_runtime::frame;
use slip_runtime::invoke::invoke;
use slip_runtime::site::Site;
use slip_runtime::value::{self, ValueRef};
use slip_runtime::exceptions::CallResult;

// (define (make-adder n) (lambda (m) (+ n m)))
fn adder_lambda(captured: ValueRef, m: ValueRef) -> CallResult {
    let n = frame::resolve(&captured, 0, 1);
    Ok(arith_ops::add(&n, &m))
}

fn make_adder(parent: ValueRef, n: ValueRef) -> CallResult {
    let scope = frame::make_frame(parent, 1);
    frame::assign(&scope, 0, 1, n);
    Ok(value::dynamic(CompiledProc::C1(adder_lambda), scope))
}

// (define (_main argc)
//   (let ((add10 (make-adder 10)))
//     (- (add10 32) 42)))
fn adder_main(parent: ValueRef, _argc: ValueRef) -> CallResult {
    let make = value::dynamic(CompiledProc::C1(make_adder), parent);
    let add10 = invoke(&Site::new("adder.slip", 3), &make, &[value::integer(10)])?;
    let sum = invoke(&Site::new("adder.slip", 4), &add10, &[value::integer(32)])?;
    Ok(arith_ops::sub(&sum, &value::integer(42)))
}

#[test]
fn adder_program_runs_to_completion() {
    driver::init_runtime();
    let globals = frame::make_frame(value::null_value(), 0);
    let root = value::dynamic(CompiledProc::C1(adder_main), globals);
    assert_eq!(driver::run_root(&root), 0);
    let stats = driver::shutdown_runtime();
    assert!(stats.total > 0);
    assert!(stats.closures >= 3);
}

// (define (_main argc) (car '()))
fn faulting_main(_parent: ValueRef, _argc: ValueRef) -> CallResult {
    pair_ops::car(&Site::new("faulty.slip", 1), &value::null_value())
}

#[test]
fn uncaught_exception_exits_nonzero() {
    driver::init_runtime();
    let globals = frame::make_frame(value::null_value(), 0);
    let root = value::dynamic(CompiledProc::C1(faulting_main), globals);
    assert_eq!(driver::run_root(&root), 1);
}

#[test]
fn root_must_be_callable() {
    driver::init_runtime();
    assert_eq!(driver::run_root(&value::integer(3)), 1);
}

// Shared mutation through a captured frame: two closures over one counter.
fn bump(captured: ValueRef) -> CallResult {
    let current = frame::resolve(&captured, 0, 1);
    let next = arith_ops::add(&current, &value::integer(1));
    frame::assign(&captured, 0, 1, next.clone());
    Ok(next)
}

fn read(captured: ValueRef) -> CallResult {
    Ok(frame::resolve(&captured, 0, 1))
}

#[test]
fn closures_share_their_captured_frame() {
    let scope = frame::make_frame(value::null_value(), 1);
    frame::assign(&scope, 0, 1, value::integer(0));
    let bumper = value::dynamic(CompiledProc::C0(bump), scope.clone());
    let reader = value::dynamic(CompiledProc::C0(read), scope);

    let site = Site::new("counter.slip", 2);
    let run = |callee: &ValueRef| {
        slip_runtime::exceptions::boundary(|| invoke(&site, callee, &[])).unwrap()
    };
    assert_eq!(run(&bumper).as_integer(), Some(1));
    assert_eq!(run(&bumper).as_integer(), Some(2));
    assert_eq!(run(&reader).as_integer(), Some(2));
}
