//! Classes and class instances.
//!
//! A [`Class`] carries its own ancestry table: an ordered list of parent
//! classes. Inheritance and role/interface conformance are the same relation
//! here, so `instance_of` needs nothing beyond [`Class::isa`].

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashSet;
use smatch_stack::ensure_sufficient_stack;

use super::{Heap, Value};

/// Text conversion for instances of a class (an overloaded stringifier).
pub type Stringifier = fn(&InstanceValue) -> String;

struct ClassInfo {
    name: String,
    parents: Vec<Class>,
    stringify: Option<Stringifier>,
}

/// A named class with its parents. Cloning is cheap and keeps identity.
#[derive(Clone)]
pub struct Class(Heap<ClassInfo>);

impl Class {
    /// A class with no parents and no stringifier.
    pub fn new(name: impl Into<String>) -> Self {
        Class::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            parents: Vec::new(),
            stringify: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Direct parents, in declaration order.
    pub fn parents(&self) -> &[Class] {
        &self.0.parents
    }

    /// The class followed by its ancestors, depth-first in declaration
    /// order, each class listed once.
    pub fn linearize(&self) -> Vec<Class> {
        fn visit(class: &Class, seen: &mut FxHashSet<usize>, out: &mut Vec<Class>) {
            ensure_sufficient_stack(|| {
                if !seen.insert(class.0.addr()) {
                    return;
                }
                out.push(class.clone());
                for parent in class.parents() {
                    visit(parent, seen, out);
                }
            });
        }

        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        visit(self, &mut seen, &mut out);
        out
    }

    /// Whether this class is `name` or inherits from / conforms to it.
    pub fn isa(&self, name: &str) -> bool {
        self.name() == name || self.linearize().iter().any(|c| c.name() == name)
    }

    /// The nearest stringifier along the ancestry, if any.
    pub fn stringifier(&self) -> Option<Stringifier> {
        self.linearize().iter().find_map(|c| c.0.stringify)
    }
}

impl PartialEq for Class {
    /// Classes are equal only if they are the same class object.
    fn eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.name())
    }
}

/// Builder for [`Class`].
pub struct ClassBuilder {
    name: String,
    parents: Vec<Class>,
    stringify: Option<Stringifier>,
}

impl ClassBuilder {
    /// Add a parent class (or implemented role).
    #[must_use]
    pub fn parent(mut self, parent: &Class) -> Self {
        self.parents.push(parent.clone());
        self
    }

    /// Give instances a text conversion.
    #[must_use]
    pub fn stringify(mut self, f: Stringifier) -> Self {
        self.stringify = Some(f);
        self
    }

    pub fn build(self) -> Class {
        Class(Heap::new(ClassInfo {
            name: self.name,
            parents: self.parents,
            stringify: self.stringify,
        }))
    }
}

/// A class instance: its class and named fields.
#[derive(Clone)]
pub struct InstanceValue {
    pub class: Class,
    pub fields: BTreeMap<String, Value>,
}

impl InstanceValue {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Text conversion through the class's stringifier.
    pub fn to_text(&self) -> Option<String> {
        self.class.stringifier().map(|f| f(self))
    }
}

impl fmt::Debug for InstanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(self.class.name())
            .field("fields", &self.fields)
            .finish()
    }
}
