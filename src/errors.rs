//! Error taxonomy.
//!
//! Every user-reachable fault is a thrown value: a list whose first element
//! is the symbolic tag, followed by the fault's details, wrapped by
//! [`crate::exceptions::throw`] with call-site provenance. Contract
//! violations between runtime and compiler are not user-reachable and go
//! through [`fatal_internal`] instead.

use std::process;

use crate::{
    exceptions::{Thrown, throw},
    site::Site,
    value::{self, ValueRef},
};

/// Builds the `(tag detail ...)` payload list.
fn tagged(tag: &str, details: Vec<ValueRef>) -> ValueRef {
    let mut tail = value::null_value();
    for detail in details.into_iter().rev() {
        tail = value::pair(detail, tail);
    }
    value::pair(value::string(tag), tail)
}

/// Closure called with the wrong number of arguments.
pub fn argument_count_mismatch(site: &Site, expected: usize, received: usize) -> Thrown {
    throw(
        site,
        tagged(
            "ArgumentCountMismatch",
            vec![
                value::integer(expected as i64),
                value::integer(received as i64),
            ],
        ),
    )
}

/// Attempt to invoke a value that is not one of the closure shapes.
pub fn not_closure(site: &Site, callee: &ValueRef) -> Thrown {
    throw(
        site,
        tagged("NotClosure", vec![value::string(callee.type_name())]),
    )
}

/// `car`/`cdr` applied to a non-pair. `op` names the accessor.
pub fn empty_list(site: &Site, op: &'static str, subject: &ValueRef) -> Thrown {
    throw(
        site,
        tagged(
            "EmptyList",
            vec![value::string(op), value::string(subject.type_name())],
        ),
    )
}

/// Integer division by a coerced-zero divisor.
pub fn divide_by_zero(site: &Site) -> Thrown {
    throw(site, tagged("DivideByZero", vec![]))
}

/// Explicit user-level abort, e.g. a failed assertion.
pub fn exit_with(site: &Site, message: &str) -> Thrown {
    throw(site, tagged("Exit", vec![value::string(message)]))
}

/// Runtime/compiler contract violation. Not catchable: the value invariants
/// themselves are broken, so the process terminates immediately.
pub fn fatal_internal(reason: &str) -> ! {
    eprintln!("Error: InternalError: {}", reason);
    process::exit(255)
}

#[cfg(test)]
mod tests {
    use crate::exceptions::boundary;
    use crate::value::Value;

    use super::*;

    fn payload_tag(payload: &ValueRef) -> String {
        match payload.as_ref() {
            Value::Pair(raw, _provenance) => match raw.as_ref() {
                Value::Pair(tag, _) => tag.to_string(),
                other => other.to_string(),
            },
            other => other.to_string(),
        }
    }

    #[test]
    fn payloads_carry_tag_and_provenance() {
        let site = Site::new("lib.slip", 12);
        let caught = boundary(|| Err(divide_by_zero(&site))).unwrap_err();
        assert_eq!(caught.to_string(), "((DivideByZero) lib.slip 12)");
        assert_eq!(payload_tag(&caught), "DivideByZero");
    }

    #[test]
    fn mismatch_payload_lists_expected_and_received() {
        let site = Site::new("lib.slip", 3);
        let caught = boundary(|| Err(argument_count_mismatch(&site, 2, 3))).unwrap_err();
        assert_eq!(
            caught.to_string(),
            "((ArgumentCountMismatch 2 3) lib.slip 3)"
        );
    }

    #[test]
    fn exit_payload_carries_the_message() {
        let site = Site::internal();
        let caught = boundary(|| Err(exit_with(&site, "x = boom"))).unwrap_err();
        assert_eq!(caught.to_string(), "((Exit x = boom) <runtime> 0)");
    }
}
