//! Instance, reference-kind and identity matchers.

use smatch_value::{RefKind, Value};

use crate::Matcher;

/// Any class instance.
pub fn object() -> Matcher {
    Matcher::new(|subject| subject.as_instance().is_some()).labelled("object")
}

/// An instance whose class is, or inherits from, `class_name`.
pub fn instance_of(class_name: impl Into<String>) -> Matcher {
    let class_name = class_name.into();
    Matcher::new(move |subject| {
        subject
            .as_instance()
            .is_some_and(|inst| inst.class.isa(&class_name))
    })
    .labelled("instance_of")
}

/// An unblessed reference of flavour `kind`. Instances never qualify.
pub fn ref_type(kind: RefKind) -> Matcher {
    Matcher::new(move |subject| subject.ref_kind() == Some(kind)).labelled("ref_type")
}

/// Identity: the subject shares storage with `reference`.
///
/// Scalars have no storage, so the matcher built from one never matches.
pub fn address(reference: &Value) -> Matcher {
    match reference.addr() {
        Some(_) => {
            // Holding the value keeps its storage alive, so the address
            // cannot be reused by another allocation.
            let reference = reference.clone();
            Matcher::new(move |subject| reference.same_storage(subject)).labelled("address")
        }
        None => Matcher::new(|_| false).labelled("address"),
    }
}
