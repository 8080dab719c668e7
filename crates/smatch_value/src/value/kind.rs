//! Closed classification of values.
//!
//! Matchers never inspect concrete variants to decide how to treat a value;
//! they dispatch on [`ValueKind`] (what equivalence means for it) or on
//! [`RefKind`] (which container/reference flavour an unblessed value is).

use std::fmt;
use std::str::FromStr;

/// How a value participates in structural equivalence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Plain, non-container value: undef, booleans, numbers, strings.
    Scalar,
    /// Ordered list-like container.
    Sequence,
    /// Keyed map-like container.
    Map,
    /// Class instance; identity-bearing.
    Instance,
    /// Reference with no natural structural comparison (code, scalar refs).
    OpaqueRef,
    /// Handle or stream; cannot be compared structurally or by value.
    Unsupported,
    /// Host data the value model does not recognise.
    Unknown,
}

impl ValueKind {
    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Scalar => "scalar",
            ValueKind::Sequence => "sequence",
            ValueKind::Map => "map",
            ValueKind::Instance => "instance",
            ValueKind::OpaqueRef => "opaque reference",
            ValueKind::Unsupported => "unsupported resource",
            ValueKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural flavour of an unblessed (non-instance) reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefKind {
    List,
    Map,
    Code,
    /// Reference to a non-reference value.
    Scalar,
    /// Reference to another reference.
    Ref,
    Handle,
    Foreign,
}

impl RefKind {
    pub const ALL: [RefKind; 7] = [
        RefKind::List,
        RefKind::Map,
        RefKind::Code,
        RefKind::Scalar,
        RefKind::Ref,
        RefKind::Handle,
        RefKind::Foreign,
    ];

    /// Canonical tag, e.g. `"LIST"`.
    pub fn name(self) -> &'static str {
        match self {
            RefKind::List => "LIST",
            RefKind::Map => "MAP",
            RefKind::Code => "CODE",
            RefKind::Scalar => "SCALAR",
            RefKind::Ref => "REF",
            RefKind::Handle => "HANDLE",
            RefKind::Foreign => "FOREIGN",
        }
    }
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a known [`RefKind`] tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRefKind(pub String);

impl fmt::Display for UnknownRefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reference kind: {}", self.0)
    }
}

impl std::error::Error for UnknownRefKind {}

impl FromStr for RefKind {
    type Err = UnknownRefKind;

    /// Tags are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RefKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRefKind(s.to_string()))
    }
}
