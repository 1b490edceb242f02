//! Allocation boundary between the runtime and its collector.
//!
//! The reclamation strategy is an external collaborator: this build backs it
//! with `Rc`, so values are reclaimed when their last reference drops and the
//! runtime never frees anything explicitly. What the runtime keeps for itself
//! is the lifecycle bracket (`init`/`shutdown`) and per-kind allocation
//! accounting, so a driver can report heap traffic after a run.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::value::{Value, ValueRef};

/// Per-kind allocation counts since the last [`init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocStats {
    pub integers: usize,
    pub strings: usize,
    pub pairs: usize,
    pub vectors: usize,
    pub closures: usize,
    pub total: usize,
}

static INTEGERS: AtomicUsize = AtomicUsize::new(0);
static STRINGS: AtomicUsize = AtomicUsize::new(0);
static PAIRS: AtomicUsize = AtomicUsize::new(0);
static VECTORS: AtomicUsize = AtomicUsize::new(0);
static CLOSURES: AtomicUsize = AtomicUsize::new(0);
static TOTAL: AtomicUsize = AtomicUsize::new(0);

/// Resets allocation accounting. Called once at process start, before any
/// value is constructed.
pub fn init() {
    INTEGERS.store(0, Ordering::Relaxed);
    STRINGS.store(0, Ordering::Relaxed);
    PAIRS.store(0, Ordering::Relaxed);
    VECTORS.store(0, Ordering::Relaxed);
    CLOSURES.store(0, Ordering::Relaxed);
    TOTAL.store(0, Ordering::Relaxed);
}

/// Ends the heap lifecycle, returning the final accounting snapshot.
pub fn shutdown() -> AllocStats {
    snapshot()
}

/// Allocates one value. This is the single chokepoint every constructor in
/// [`crate::value`] routes through.
pub fn allocate(value: Value) -> ValueRef {
    match &value {
        Value::Integer(_) => INTEGERS.fetch_add(1, Ordering::Relaxed),
        Value::String(_) => STRINGS.fetch_add(1, Ordering::Relaxed),
        Value::Pair(_, _) => PAIRS.fetch_add(1, Ordering::Relaxed),
        Value::Vector(_) => VECTORS.fetch_add(1, Ordering::Relaxed),
        Value::NativeClosure(_)
        | Value::NativeVariadicClosure(_)
        | Value::DynamicClosure(_) => CLOSURES.fetch_add(1, Ordering::Relaxed),
        Value::Null | Value::Boolean(_) => 0,
    };
    TOTAL.fetch_add(1, Ordering::Relaxed);
    Rc::new(value)
}

/// Returns the current allocation counts.
pub fn snapshot() -> AllocStats {
    AllocStats {
        integers: INTEGERS.load(Ordering::Relaxed),
        strings: STRINGS.load(Ordering::Relaxed),
        pairs: PAIRS.load(Ordering::Relaxed),
        vectors: VECTORS.load(Ordering::Relaxed),
        closures: CLOSURES.load(Ordering::Relaxed),
        total: TOTAL.load(Ordering::Relaxed),
    }
}
