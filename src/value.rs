use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    closure::{DynamicClosure, NativeClosure, NativeProc, NativeVariadicClosure, VariadicProc},
    heap,
    site::Site,
};

/// Shared reference to a runtime value.
///
/// Every value the runtime hands out is an `Rc` clone; generated code never
/// sees a bare `Value`.
pub type ValueRef = Rc<Value>;

/// Runtime value operated on by compiled code, natives, and frames.
///
/// ## Memory Management Model
///
/// Values are immutable, heap-allocated, and shared through `Rc`. The
/// reclamation strategy is an external concern: the runtime allocates through
/// [`crate::heap`] and never explicitly frees a value.
///
/// ### No-Cycle Invariant
///
/// Value graphs must stay acyclic. `Rc` cannot reclaim reference cycles, and
/// nothing in the language surface creates back-edges:
///
/// - Pairs and frames only reference values that already exist.
/// - A dynamic closure shares the frame chain it captured; the chain never
///   references the closure back.
/// - The only mutation anywhere is frame-slot assignment, which overwrites a
///   slot with an already-constructed value.
///
/// ### Singletons
///
/// `Null`, `Boolean(true)`, and `Boolean(false)` exist once per thread of
/// execution and are handed out as clones of the same `Rc`. Everything else
/// compares by structure, never by allocation identity.
#[derive(Debug)]
pub enum Value {
    /// The unit/empty-list value.
    Null,
    /// Boolean value; both singletons.
    Boolean(bool),
    /// 64-bit signed integer. Arithmetic wraps on overflow.
    Integer(i64),
    /// Immutable string. `Rc<str>` avoids double indirection.
    String(Rc<str>),
    /// Cons cell; builds proper and dotted lists.
    Pair(ValueRef, ValueRef),
    /// Fixed-length slot vector. Used exclusively for lexical frames, which
    /// is the reason for the interior mutability: slot assignment is the one
    /// mutation the runtime performs.
    Vector(RefCell<Vec<ValueRef>>),
    /// Native procedure with a fixed arity in 0..=10.
    NativeClosure(NativeClosure),
    /// Native procedure accepting any argument count.
    NativeVariadicClosure(NativeVariadicClosure),
    /// Compiled procedure carrying its captured frame.
    DynamicClosure(DynamicClosure),
}

thread_local! {
    static NULL_SINGLETON: ValueRef = heap::allocate(Value::Null);
    static TRUE_SINGLETON: ValueRef = heap::allocate(Value::Boolean(true));
    static FALSE_SINGLETON: ValueRef = heap::allocate(Value::Boolean(false));
}

/// Returns the `()` singleton.
pub fn null_value() -> ValueRef {
    NULL_SINGLETON.with(Rc::clone)
}

/// Returns the `#t`/`#f` singleton for `b`.
pub fn boolean(b: bool) -> ValueRef {
    if b {
        TRUE_SINGLETON.with(Rc::clone)
    } else {
        FALSE_SINGLETON.with(Rc::clone)
    }
}

/// Allocates a fresh integer value.
pub fn integer(v: i64) -> ValueRef {
    heap::allocate(Value::Integer(v))
}

/// Allocates a string value, copying `s` defensively.
pub fn string(s: &str) -> ValueRef {
    heap::allocate(Value::String(Rc::from(s)))
}

/// Allocates a cons cell sharing `car` and `cdr`.
pub fn pair(car: ValueRef, cdr: ValueRef) -> ValueRef {
    heap::allocate(Value::Pair(car, cdr))
}

/// Allocates a slot vector. Frames go through [`crate::frame::make_frame`]
/// instead, which lays out the parent link.
pub fn vector(items: Vec<ValueRef>) -> ValueRef {
    heap::allocate(Value::Vector(RefCell::new(items)))
}

/// Wraps a fixed-arity native procedure as a callable value.
pub fn native(name: &'static str, proc: NativeProc) -> ValueRef {
    heap::allocate(Value::NativeClosure(NativeClosure { name, proc }))
}

/// Wraps a variadic native procedure as a callable value.
pub fn native_variadic(name: &'static str, proc: VariadicProc) -> ValueRef {
    heap::allocate(Value::NativeVariadicClosure(NativeVariadicClosure {
        name,
        proc,
        site: None,
    }))
}

/// Wraps a variadic native procedure together with its definition site.
pub fn native_variadic_at(name: &'static str, proc: VariadicProc, site: Site) -> ValueRef {
    heap::allocate(Value::NativeVariadicClosure(NativeVariadicClosure {
        name,
        proc,
        site: Some(site),
    }))
}

/// Wraps a compiled procedure and its captured frame as a callable value.
///
/// The frame is shared with the scope that created the closure, never copied.
pub fn dynamic(proc: crate::closure::CompiledProc, frame: ValueRef) -> ValueRef {
    heap::allocate(Value::DynamicClosure(DynamicClosure { proc, frame }))
}

impl Value {
    /// Returns the runtime type label used in diagnostics.
    ///
    /// These labels appear in thrown payloads and are expected to remain
    /// stable.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "()",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::Pair(_, _) => "pair",
            Value::Vector(_) => "vector",
            Value::NativeClosure(_) => "native-closure",
            Value::NativeVariadicClosure(_) => "variadic-closure",
            Value::DynamicClosure(_) => "dynamic-closure",
        }
    }

    /// Returns the integer payload, or `None` for any other variant.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

}

impl fmt::Display for Value {
    /// Structural rendering.
    ///
    /// Pairs print in proper-list notation with a `. tail` dotted tail;
    /// closures print an opaque tag plus arity or provenance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "()"),
            Value::Boolean(true) => write!(f, "#t"),
            Value::Boolean(false) => write!(f, "#f"),
            Value::Integer(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
            Value::Pair(car, cdr) => {
                write!(f, "({}", car)?;
                let mut runner = cdr;
                loop {
                    match runner.as_ref() {
                        Value::Pair(head, tail) => {
                            write!(f, " {}", head)?;
                            runner = tail;
                        }
                        Value::Null => break,
                        tail => {
                            write!(f, " . {}", tail)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
            Value::Vector(items) => write!(f, "#VECTOR/{}", items.borrow().len()),
            Value::NativeClosure(c) => write!(f, "#NATIVE_CLOSURE/{}", c.proc.arity()),
            Value::NativeVariadicClosure(c) => match &c.site {
                Some(site) => write!(f, "#VAR_ARG_CLOSURE@{}", site),
                None => write!(f, "#VAR_ARG_CLOSURE"),
            },
            Value::DynamicClosure(c) => write!(f, "#DYNAMIC_CLOSURE/{}", c.proc.arity()),
        }
    }
}
