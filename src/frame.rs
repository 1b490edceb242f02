//! Lexical environment chain.
//!
//! A frame is an ordinary [`Value::Vector`]: slot 0 holds the parent frame
//! (Null at the outermost scope) and slots 1..=size hold bindings, created
//! as Null. Frames link innermost to outermost; chain depth mirrors lexical
//! nesting depth at compile time.
//!
//! # Trust boundary
//!
//! `depth` and `offset` are compile-time constants emitted by the compiler
//! and are not validated here; a mismatch is a code-generation defect, not a
//! runtime fault. Traversal stays O(depth). Unlike the original, a bad
//! offset panics through checked indexing instead of reading out of bounds.

use crate::{
    errors,
    value::{self, Value, ValueRef},
};

/// Creates a frame with `size` binding slots, all Null, chained to `parent`.
pub fn make_frame(parent: ValueRef, size: usize) -> ValueRef {
    let mut slots = Vec::with_capacity(1 + size);
    slots.push(parent);
    slots.resize(1 + size, value::null_value());
    value::vector(slots)
}

/// Walks `depth` parent links from `frame`.
pub fn frame_at(frame: &ValueRef, depth: usize) -> ValueRef {
    let mut current = frame.clone();
    for _ in 0..depth {
        let parent = match current.as_ref() {
            Value::Vector(slots) => slots.borrow()[0].clone(),
            _ => errors::fatal_internal("frame traversal reached a non-vector value"),
        };
        current = parent;
    }
    current
}

/// Reads slot `offset` of the frame `depth` links up the chain.
///
/// Offsets index the raw vector: offset 0 is the parent link, bindings start
/// at 1.
pub fn resolve(frame: &ValueRef, depth: usize, offset: usize) -> ValueRef {
    match frame_at(frame, depth).as_ref() {
        Value::Vector(slots) => slots.borrow()[offset].clone(),
        _ => errors::fatal_internal("frame resolve on a non-vector value"),
    }
}

/// Overwrites slot `offset` of the frame `depth` links up the chain.
pub fn assign(frame: &ValueRef, depth: usize, offset: usize, new_value: ValueRef) {
    match frame_at(frame, depth).as_ref() {
        Value::Vector(slots) => slots.borrow_mut()[offset] = new_value,
        _ => errors::fatal_internal("frame assign on a non-vector value"),
    }
}
