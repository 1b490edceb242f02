//! Callable payloads: the three closure shapes behind the invocation
//! protocol.
//!
//! Fixed-arity procedures are dispatched through [`NativeProc`] and
//! [`CompiledProc`], tagged enums with one variant per supported arity
//! (0..=10). The tag replaces the hand-maintained function-pointer casts of
//! a C-style arity table: arity and signature cannot disagree by
//! construction.

use crate::{exceptions::CallResult, site::Site, value::ValueRef};

/// Fixed-arity native procedure, one variant per arity in 0..=10.
///
/// Native procedures receive their arguments positionally and no frame:
/// natives are not lexically scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeProc {
    N0(fn() -> CallResult),
    N1(fn(ValueRef) -> CallResult),
    N2(fn(ValueRef, ValueRef) -> CallResult),
    N3(fn(ValueRef, ValueRef, ValueRef) -> CallResult),
    N4(fn(ValueRef, ValueRef, ValueRef, ValueRef) -> CallResult),
    N5(fn(ValueRef, ValueRef, ValueRef, ValueRef, ValueRef) -> CallResult),
    N6(fn(ValueRef, ValueRef, ValueRef, ValueRef, ValueRef, ValueRef) -> CallResult),
    N7(fn(ValueRef, ValueRef, ValueRef, ValueRef, ValueRef, ValueRef, ValueRef) -> CallResult),
    N8(
        fn(
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
        ) -> CallResult,
    ),
    N9(
        fn(
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
        ) -> CallResult,
    ),
    N10(
        fn(
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
        ) -> CallResult,
    ),
}

impl NativeProc {
    pub fn arity(&self) -> usize {
        match self {
            NativeProc::N0(_) => 0,
            NativeProc::N1(_) => 1,
            NativeProc::N2(_) => 2,
            NativeProc::N3(_) => 3,
            NativeProc::N4(_) => 4,
            NativeProc::N5(_) => 5,
            NativeProc::N6(_) => 6,
            NativeProc::N7(_) => 7,
            NativeProc::N8(_) => 8,
            NativeProc::N9(_) => 9,
            NativeProc::N10(_) => 10,
        }
    }

    /// Forwards `args` positionally. The caller has already validated that
    /// `args.len()` equals [`Self::arity`].
    pub(crate) fn call(&self, args: &[ValueRef]) -> CallResult {
        debug_assert_eq!(args.len(), self.arity());
        let a = |i: usize| args[i].clone();
        match self {
            NativeProc::N0(f) => f(),
            NativeProc::N1(f) => f(a(0)),
            NativeProc::N2(f) => f(a(0), a(1)),
            NativeProc::N3(f) => f(a(0), a(1), a(2)),
            NativeProc::N4(f) => f(a(0), a(1), a(2), a(3)),
            NativeProc::N5(f) => f(a(0), a(1), a(2), a(3), a(4)),
            NativeProc::N6(f) => f(a(0), a(1), a(2), a(3), a(4), a(5)),
            NativeProc::N7(f) => f(a(0), a(1), a(2), a(3), a(4), a(5), a(6)),
            NativeProc::N8(f) => f(a(0), a(1), a(2), a(3), a(4), a(5), a(6), a(7)),
            NativeProc::N9(f) => f(a(0), a(1), a(2), a(3), a(4), a(5), a(6), a(7), a(8)),
            NativeProc::N10(f) => f(a(0), a(1), a(2), a(3), a(4), a(5), a(6), a(7), a(8), a(9)),
        }
    }
}

/// Fixed-arity native closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeClosure {
    pub name: &'static str,
    pub proc: NativeProc,
}

/// Variadic native procedure. The `WithSite` form is threaded the current
/// call site for error attribution; the plain form is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariadicProc {
    Plain(fn(&[ValueRef]) -> CallResult),
    WithSite(fn(&Site, &[ValueRef]) -> CallResult),
}

/// Arity-agnostic native closure. `site`, when present, records where the
/// closure was defined and shows up in structural printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeVariadicClosure {
    pub name: &'static str,
    pub proc: VariadicProc,
    pub site: Option<Site>,
}

/// Compiled procedure, one variant per declared arity in 0..=10.
///
/// The first parameter is always the captured frame; the compiled prologue
/// copies the remaining arguments into fresh slots of the frame it builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompiledProc {
    C0(fn(ValueRef) -> CallResult),
    C1(fn(ValueRef, ValueRef) -> CallResult),
    C2(fn(ValueRef, ValueRef, ValueRef) -> CallResult),
    C3(fn(ValueRef, ValueRef, ValueRef, ValueRef) -> CallResult),
    C4(fn(ValueRef, ValueRef, ValueRef, ValueRef, ValueRef) -> CallResult),
    C5(fn(ValueRef, ValueRef, ValueRef, ValueRef, ValueRef, ValueRef) -> CallResult),
    C6(fn(ValueRef, ValueRef, ValueRef, ValueRef, ValueRef, ValueRef, ValueRef) -> CallResult),
    C7(
        fn(
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
        ) -> CallResult,
    ),
    C8(
        fn(
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
        ) -> CallResult,
    ),
    C9(
        fn(
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
        ) -> CallResult,
    ),
    C10(
        fn(
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
            ValueRef,
        ) -> CallResult,
    ),
}

impl CompiledProc {
    pub fn arity(&self) -> usize {
        match self {
            CompiledProc::C0(_) => 0,
            CompiledProc::C1(_) => 1,
            CompiledProc::C2(_) => 2,
            CompiledProc::C3(_) => 3,
            CompiledProc::C4(_) => 4,
            CompiledProc::C5(_) => 5,
            CompiledProc::C6(_) => 6,
            CompiledProc::C7(_) => 7,
            CompiledProc::C8(_) => 8,
            CompiledProc::C9(_) => 9,
            CompiledProc::C10(_) => 10,
        }
    }

    /// Calls the compiled body with the captured frame first, then `args`.
    /// The caller has already validated the argument count.
    pub(crate) fn call(&self, frame: ValueRef, args: &[ValueRef]) -> CallResult {
        debug_assert_eq!(args.len(), self.arity());
        let a = |i: usize| args[i].clone();
        match self {
            CompiledProc::C0(f) => f(frame),
            CompiledProc::C1(f) => f(frame, a(0)),
            CompiledProc::C2(f) => f(frame, a(0), a(1)),
            CompiledProc::C3(f) => f(frame, a(0), a(1), a(2)),
            CompiledProc::C4(f) => f(frame, a(0), a(1), a(2), a(3)),
            CompiledProc::C5(f) => f(frame, a(0), a(1), a(2), a(3), a(4)),
            CompiledProc::C6(f) => f(frame, a(0), a(1), a(2), a(3), a(4), a(5)),
            CompiledProc::C7(f) => f(frame, a(0), a(1), a(2), a(3), a(4), a(5), a(6)),
            CompiledProc::C8(f) => f(frame, a(0), a(1), a(2), a(3), a(4), a(5), a(6), a(7)),
            CompiledProc::C9(f) => f(frame, a(0), a(1), a(2), a(3), a(4), a(5), a(6), a(7), a(8)),
            CompiledProc::C10(f) => {
                f(frame, a(0), a(1), a(2), a(3), a(4), a(5), a(6), a(7), a(8), a(9))
            }
        }
    }
}

/// Dynamic closure produced by compiled code: a compiled procedure plus the
/// frame chain it captured. The frame is shared, not copied; it stays alive
/// for as long as the closure is reachable.
#[derive(Debug, Clone)]
pub struct DynamicClosure {
    pub proc: CompiledProc,
    pub frame: ValueRef,
}
