//! Exception propagation: a bounded stack of recoverable control-transfer
//! scopes.
//!
//! The original non-local jump becomes ordinary call-stack unwinding: every
//! fallible operation returns [`CallResult`], and `?` carries the opaque
//! [`Thrown`] token outward. The scope stack is what preserves the observable
//! semantics — the innermost active scope at the moment of a throw owns the
//! in-flight payload, each scope's slot is cleared on push and written at
//! most once, and a handler that re-throws targets the next outer scope
//! because its own scope is popped before the handler runs.

use std::cell::RefCell;

use crate::{
    errors,
    invoke::invoke,
    site::Site,
    value::{self, ValueRef},
};

/// Maximum number of concurrently nested try scopes.
pub const MAX_ACTIVE_SCOPES: usize = 100;

/// Opaque token carried by the error side of [`CallResult`].
///
/// The payload itself travels through the scope stack, not the token; only
/// [`throw`] can construct one.
#[derive(Debug)]
pub struct Thrown {
    _private: (),
}

/// Result of every fallible runtime operation.
pub type CallResult = Result<ValueRef, Thrown>;

thread_local! {
    // One Option per active scope: the write-once payload slot.
    static SCOPES: RefCell<Vec<Option<ValueRef>>> = const { RefCell::new(Vec::new()) };
}

/// Number of currently active scopes.
pub fn active_scopes() -> usize {
    SCOPES.with(|scopes| scopes.borrow().len())
}

fn push_scope() {
    SCOPES.with(|scopes| {
        let mut scopes = scopes.borrow_mut();
        if scopes.len() == MAX_ACTIVE_SCOPES {
            errors::fatal_internal("exception scope stack overflow");
        }
        scopes.push(None);
    });
}

fn pop_scope() -> Option<ValueRef> {
    SCOPES.with(|scopes| match scopes.borrow_mut().pop() {
        Some(slot) => slot,
        None => errors::fatal_internal("exception scope stack underflow"),
    })
}

/// Raises `payload` toward the innermost active scope.
///
/// The payload is wrapped as `(payload file line)` so the eventual handler
/// or the driver report sees the raising call site. Throwing with no active
/// scope violates the driver contract (an outermost scope always exists) and
/// terminates the process.
pub fn throw(site: &Site, payload: ValueRef) -> Thrown {
    let wrapped = value::pair(
        payload,
        value::pair(
            value::string(site.file),
            value::pair(value::integer(i64::from(site.line)), value::null_value()),
        ),
    );
    SCOPES.with(|scopes| {
        let mut scopes = scopes.borrow_mut();
        match scopes.last_mut() {
            Some(slot) => {
                debug_assert!(slot.is_none(), "payload slot written twice");
                *slot = Some(wrapped);
            }
            None => errors::fatal_internal("throw with no active exception scope"),
        }
    });
    Thrown { _private: () }
}

/// Runs `f` inside a fresh exception scope.
///
/// Returns the normal result, or the captured payload if `f` threw. This is
/// the catch boundary the driver installs around the root procedure; it is
/// also what [`try_block`] is built on.
pub fn boundary<F>(f: F) -> Result<ValueRef, ValueRef>
where
    F: FnOnce() -> CallResult,
{
    push_scope();
    match f() {
        Ok(result) => {
            pop_scope();
            Ok(result)
        }
        Err(_thrown) => match pop_scope() {
            Some(payload) => Err(payload),
            None => errors::fatal_internal("exception caught with an empty payload slot"),
        },
    }
}

/// The language-level try: invoke `body` with zero arguments inside a new
/// scope; on a throw, invoke `handler` with the captured payload.
///
/// The scope is popped before the handler runs, so a throw inside the
/// handler propagates to the enclosing scope.
pub fn try_block(site: &Site, body: &ValueRef, handler: &ValueRef) -> CallResult {
    match boundary(|| invoke(site, body, &[])) {
        Ok(result) => Ok(result),
        Err(payload) => invoke(site, handler, std::slice::from_ref(&payload)),
    }
}

#[cfg(test)]
mod exceptions_test;
