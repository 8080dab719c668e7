//! Opaque reference payloads: code, handles and foreign host data.
//!
//! None of these has a structural comparison. Matching treats code by
//! identity and refuses to synthesize equivalence for handles and foreign
//! data.

use std::any::Any;
use std::fmt;

use super::{Heap, Value};

/// Signature of a callable value.
pub type CodeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

struct CodeInner {
    name: String,
    func: Box<CodeFn>,
}

/// A named callable.
#[derive(Clone)]
pub struct CodeValue(Heap<CodeInner>);

impl CodeValue {
    pub(super) fn new(name: String, func: Box<CodeFn>) -> Self {
        CodeValue(Heap::new(CodeInner { name, func }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0.func)(args)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }

    pub fn addr(&self) -> usize {
        self.0.addr()
    }
}

impl fmt::Debug for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self.name())
    }
}

/// An I/O handle or stream descriptor.
#[derive(Clone)]
pub struct HandleValue(Heap<String>);

impl HandleValue {
    pub(super) fn new(name: String) -> Self {
        HandleValue(Heap::new(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }

    pub fn addr(&self) -> usize {
        self.0.addr()
    }
}

impl fmt::Debug for HandleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.name())
    }
}

struct ForeignInner {
    type_name: &'static str,
    data: Box<dyn Any + Send + Sync>,
}

/// Arbitrary host data carried through the value model untouched.
#[derive(Clone)]
pub struct ForeignValue(Heap<ForeignInner>);

impl ForeignValue {
    pub(super) fn new<T: Any + Send + Sync>(data: T) -> Self {
        ForeignValue(Heap::new(ForeignInner {
            type_name: std::any::type_name::<T>(),
            data: Box::new(data),
        }))
    }

    /// Rust type name of the wrapped data.
    pub fn type_name(&self) -> &'static str {
        self.0.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.data.downcast_ref::<T>()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }

    pub fn addr(&self) -> usize {
        self.0.addr()
    }
}

impl fmt::Debug for ForeignValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Foreign({})", self.type_name())
    }
}
