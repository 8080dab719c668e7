//! Runtime values tested by matchers.
//!
//! # Heap Enforcement
//!
//! Every heap payload is allocated through a `Value::` factory method. The
//! `Heap<T>` wrapper has a module-private constructor, so external code
//! cannot build heap variants directly:
//!
//! ```text
//! let s = Value::string("hello");                 // OK
//! let list = Value::list(vec![Value::Int(1)]);    // OK
//! let s = Value::Str(Heap::new(...));             // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Identity
//!
//! Cloning a heap-backed value shares its storage, so `addr()` and
//! `same_storage()` see the clone as the same value. Two separately built
//! lists with equal contents are equal under `PartialEq` but have different
//! identities.
//!
//! # Thread Safety
//!
//! All heap types use `Arc` internally, and code values require
//! `Send + Sync` closures, so `Value` can be shared across threads.

mod class;
mod composite;
mod heap;
mod kind;
mod numeric;
mod ordering;

use std::any::Any;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

pub use class::{Class, ClassBuilder, InstanceValue, Stringifier};
pub use composite::{CodeFn, CodeValue, ForeignValue, HandleValue};
pub use heap::Heap;
pub use kind::{RefKind, UnknownRefKind, ValueKind};
pub use numeric::Number;

use numeric::I64_LIMIT;

/// A dynamic value.
#[derive(Clone)]
pub enum Value {
    // Scalars (inline, no heap allocation except strings)
    /// The undefined value.
    Undef,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Heap<String>),

    // Unblessed containers
    /// Ordered sequence container.
    List(Heap<Vec<Value>>),
    /// Key-value container. Keys are kept sorted.
    Map(Heap<BTreeMap<String, Value>>),

    /// Class instance.
    Instance(Heap<InstanceValue>),

    // Opaque references
    /// Callable value.
    Code(CodeValue),
    /// Reference to another value.
    Ref(Heap<Value>),
    /// I/O handle or stream.
    Handle(HandleValue),
    /// Host data the value model does not interpret.
    Foreign(ForeignValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn map(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Build a map from `(key, value)` pairs. A repeated key keeps its last value.
    ///
    /// ```text
    /// let point = Value::map_from([("x", Value::Int(1)), ("y", Value::Int(2))]);
    /// ```
    pub fn map_from<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create an instance of `class` with a fresh identity.
    pub fn instance<K: Into<String>>(
        class: &Class,
        fields: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Instance(Heap::new(InstanceValue {
            class: class.clone(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }))
    }

    /// Create a named callable.
    pub fn code(
        name: impl Into<String>,
        func: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Value::Code(CodeValue::new(name.into(), Box::new(func)))
    }

    /// Create a reference to `target`.
    #[inline]
    pub fn reference(target: Value) -> Self {
        Value::Ref(Heap::new(target))
    }

    pub fn handle(name: impl Into<String>) -> Self {
        Value::Handle(HandleValue::new(name.into()))
    }

    pub fn foreign<T: Any + Send + Sync>(data: T) -> Self {
        Value::Foreign(ForeignValue::new(data))
    }
}

// Classification

impl Value {
    /// How the value participates in structural equivalence.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undef | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
                ValueKind::Scalar
            }
            Value::List(_) => ValueKind::Sequence,
            Value::Map(_) => ValueKind::Map,
            Value::Instance(_) => ValueKind::Instance,
            Value::Code(_) | Value::Ref(_) => ValueKind::OpaqueRef,
            Value::Handle(_) => ValueKind::Unsupported,
            Value::Foreign(_) => ValueKind::Unknown,
        }
    }

    /// Reference flavour of an unblessed reference; `None` for scalars and
    /// class instances.
    pub fn ref_kind(&self) -> Option<RefKind> {
        match self {
            Value::List(_) => Some(RefKind::List),
            Value::Map(_) => Some(RefKind::Map),
            Value::Code(_) => Some(RefKind::Code),
            Value::Ref(target) if (**target).addr().is_some() => Some(RefKind::Ref),
            Value::Ref(_) => Some(RefKind::Scalar),
            Value::Handle(_) => Some(RefKind::Handle),
            Value::Foreign(_) => Some(RefKind::Foreign),
            Value::Undef
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Str(_)
            | Value::Instance(_) => None,
        }
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        !matches!(self, Value::Undef)
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Host truthiness.
    ///
    /// `Undef`, `false`, `0`, `0.0`, `""` and `"0"` are false. References are
    /// always true, including empty containers.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undef => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty() && s.as_str() != "0",
            _ => true,
        }
    }

    /// Storage address of reference-like values; `None` for scalars.
    pub fn addr(&self) -> Option<usize> {
        match self {
            Value::Undef | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => None,
            Value::List(items) => Some(items.addr()),
            Value::Map(entries) => Some(entries.addr()),
            Value::Instance(inst) => Some(inst.addr()),
            Value::Code(code) => Some(code.addr()),
            Value::Ref(target) => Some(target.addr()),
            Value::Handle(handle) => Some(handle.addr()),
            Value::Foreign(data) => Some(data.addr()),
        }
    }

    /// Whether both values are references to the same storage.
    pub fn same_storage(&self, other: &Value) -> bool {
        match (self.addr(), other.addr()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Get the type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undef => "undef",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Instance(_) => "instance",
            Value::Code(_) => "code",
            Value::Ref(_) => "ref",
            Value::Handle(_) => "handle",
            Value::Foreign(_) => "foreign",
        }
    }
}

// Accessors

impl Value {
    /// Numeric value of `Int` and `Float`; nothing else is numeric.
    #[expect(
        clippy::cast_precision_loss,
        reason = "numeric comparisons are defined on f64"
    )]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Integer value of an `Int`, or of a finite `Float` with no fractional
    /// part that fits in `i64`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "range is checked before the cast"
    )]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f)
                if f.is_finite() && f.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(f) =>
            {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&InstanceValue> {
        match self {
            Value::Instance(inst) => Some(inst),
            _ => None,
        }
    }

    /// Target of a reference.
    pub fn deref_target(&self) -> Option<&Value> {
        match self {
            Value::Ref(target) => Some(target),
            _ => None,
        }
    }

    /// Text conversion.
    ///
    /// Defined for defined non-container scalars and for instances whose
    /// class has a stringifier. Containers, opaque references and `Undef`
    /// have no text.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Int(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(f) => Some(Cow::Owned(f.to_string())),
            Value::Str(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Instance(inst) => inst.to_text().map(Cow::Owned),
            _ => None,
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

// Trait Implementations

impl PartialEq for Value {
    /// Structural equality for scalars and containers, identity for
    /// everything else. Ints and floats are distinct here; numeric
    /// cross-comparison belongs to matchers.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undef, Value::Undef) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Instance(a), Value::Instance(b)) => a.ptr_eq(b),
            (Value::Code(a), Value::Code(b)) => a.ptr_eq(b),
            (Value::Ref(a), Value::Ref(b)) => a.ptr_eq(b),
            (Value::Handle(a), Value::Handle(b)) => a.ptr_eq(b),
            (Value::Foreign(a), Value::Foreign(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "Undef"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Map(entries) => write!(f, "Map({:?})", &**entries),
            Value::Instance(inst) => write!(f, "Instance({:?})", &**inst),
            Value::Code(code) => write!(f, "{code:?}"),
            Value::Ref(target) => write!(f, "Ref({:?})", &**target),
            Value::Handle(handle) => write!(f, "{handle:?}"),
            Value::Foreign(data) => write!(f, "{data:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{k}\": {v}")?;
                }
                write!(f, "}}")
            }
            Value::Instance(inst) => match inst.to_text() {
                Some(text) => write!(f, "{text}"),
                None => write!(f, "<{} instance>", inst.class.name()),
            },
            Value::Code(code) => write!(f, "<code {}>", code.name()),
            Value::Ref(target) => write!(f, "\\{}", &**target),
            Value::Handle(handle) => write!(f, "<handle {}>", handle.name()),
            Value::Foreign(data) => write!(f, "<foreign {}>", data.type_name()),
        }
    }
}
