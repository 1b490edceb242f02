use crate::closure::NativeProc;
use crate::site::Site;
use crate::value::{self, ValueRef};

use super::*;

fn ok_body() -> CallResult {
    Ok(value::integer(7))
}

fn throwing_body() -> CallResult {
    Err(throw(&Site::new("t.slip", 5), value::string("boom")))
}

fn identity_handler(payload: ValueRef) -> CallResult {
    Ok(payload)
}

fn sentinel_handler(_payload: ValueRef) -> CallResult {
    Ok(value::string("recovered"))
}

fn rethrow_handler(payload: ValueRef) -> CallResult {
    Err(throw(&Site::new("t.slip", 9), payload))
}

fn inner_catching_body() -> CallResult {
    let body = value::native("inner-body", NativeProc::N0(throwing_body));
    let handler = value::native("inner-handler", NativeProc::N1(sentinel_handler));
    try_block(&Site::internal(), &body, &handler)
}

fn inner_rethrowing_body() -> CallResult {
    let body = value::native("inner-body", NativeProc::N0(throwing_body));
    let handler = value::native("inner-handler", NativeProc::N1(rethrow_handler));
    try_block(&Site::internal(), &body, &handler)
}

#[test]
fn normal_return_pops_the_scope() {
    let depth = active_scopes();
    let body = value::native("body", NativeProc::N0(ok_body));
    let handler = value::native("handler", NativeProc::N1(sentinel_handler));

    let result = boundary(|| try_block(&Site::internal(), &body, &handler)).unwrap();
    assert_eq!(result.as_integer(), Some(7));
    assert_eq!(active_scopes(), depth);
}

#[test]
fn handler_receives_payload_with_provenance() {
    let body = value::native("body", NativeProc::N0(throwing_body));
    let handler = value::native("handler", NativeProc::N1(identity_handler));

    let result = boundary(|| try_block(&Site::internal(), &body, &handler)).unwrap();
    assert_eq!(result.to_string(), "(boom t.slip 5)");
}

#[test]
fn inner_scope_catches_before_outer() {
    let body = value::native("outer-body", NativeProc::N0(inner_catching_body));
    let handler = value::native("outer-handler", NativeProc::N1(identity_handler));

    let result = boundary(|| try_block(&Site::internal(), &body, &handler)).unwrap();
    assert_eq!(result.to_string(), "recovered");
}

#[test]
fn rethrow_from_handler_reaches_the_outer_scope() {
    let body = value::native("outer-body", NativeProc::N0(inner_rethrowing_body));
    let handler = value::native("outer-handler", NativeProc::N1(identity_handler));

    let result = boundary(|| try_block(&Site::internal(), &body, &handler)).unwrap();
    // Rethrown payloads gain a second provenance layer.
    assert_eq!(result.to_string(), "((boom t.slip 5) t.slip 9)");
}

#[test]
fn boundary_yields_the_captured_payload() {
    let caught =
        boundary(|| Err(throw(&Site::new("t.slip", 1), value::integer(13)))).unwrap_err();
    assert_eq!(caught.to_string(), "(13 t.slip 1)");
}

#[test]
fn scope_stack_is_balanced_after_nested_activity() {
    let depth = active_scopes();
    let body = value::native("outer-body", NativeProc::N0(inner_rethrowing_body));
    let handler = value::native("outer-handler", NativeProc::N1(sentinel_handler));
    let _ = boundary(|| try_block(&Site::internal(), &body, &handler));
    assert_eq!(active_scopes(), depth);
}
