//! Structural rendering, pinned with inline snapshots.

use insta::assert_snapshot;
use slip_runtime::builtins::natives;
use slip_runtime::exceptions::boundary;
use slip_runtime::invoke::invoke;
use slip_runtime::site::Site;
use slip_runtime::value::{self, ValueRef};

fn list(items: &[ValueRef]) -> ValueRef {
    let mut tail = value::null_value();
    for item in items.iter().rev() {
        tail = value::pair(item.clone(), tail);
    }
    tail
}

#[test]
fn atoms_render() {
    assert_snapshot!(value::null_value().to_string(), @"()");
    assert_snapshot!(value::boolean(true).to_string(), @"#t");
    assert_snapshot!(value::boolean(false).to_string(), @"#f");
    assert_snapshot!(value::integer(-42).to_string(), @"-42");
    assert_snapshot!(value::string("plain text").to_string(), @"plain text");
}

#[test]
fn lists_render_in_proper_notation() {
    let proper = list(&[value::integer(1), value::integer(2), value::integer(3)]);
    assert_snapshot!(proper.to_string(), @"(1 2 3)");

    let nested = list(&[
        value::integer(1),
        list(&[value::string("two"), value::integer(3)]),
    ]);
    assert_snapshot!(nested.to_string(), @"(1 (two 3))");
}

#[test]
fn dotted_tails_render_with_a_dot() {
    let dotted = value::pair(value::integer(1), value::integer(2));
    assert_snapshot!(dotted.to_string(), @"(1 . 2)");

    let improper = value::pair(
        value::integer(1),
        value::pair(value::integer(2), value::string("tail")),
    );
    assert_snapshot!(improper.to_string(), @"(1 2 . tail)");
}

#[test]
fn registry_closures_render_opaquely() {
    let render = |name: &str| {
        natives()
            .into_iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, closure)| closure.to_string())
            .unwrap()
    };
    assert_snapshot!(render("="), @"#NATIVE_CLOSURE/2");
    assert_snapshot!(render("null?"), @"#NATIVE_CLOSURE/1");
    assert_snapshot!(render("+"), @"#VAR_ARG_CLOSURE");
}

#[test]
fn unhandled_payloads_render_with_provenance() {
    let divide = natives()
        .into_iter()
        .find(|(name, _)| *name == "/")
        .map(|(_, closure)| closure)
        .unwrap();
    let caught = boundary(|| {
        invoke(
            &Site::new("main.slip", 12),
            &divide,
            &[value::integer(1), value::integer(0)],
        )
    })
    .unwrap_err();
    assert_snapshot!(caught.to_string(), @"((DivideByZero) main.slip 12)");
}
