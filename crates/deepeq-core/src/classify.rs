//! Type classification.
//!
//! Every inspectable type declares a set of [`Capabilities`]. The classifier
//! folds those flags into exactly one [`TypeKind`] using a fixed precedence:
//! scalar capabilities win over iteration, iteration wins over field
//! structure, and a type with none of them is [`TypeKind::Unclassifiable`].
//! A self-describing type (a JSON value) is [`TypeKind::Dynamic`] and gets
//! classified again from each runtime value.
//!
//! Classification is a pure function of the type. Results are cached per
//! [`TypeId`] so recursive comparisons never re-derive them.

use crate::inspect::Inspect;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Capability flags a type declares about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Supports a total ordering (a natural "compare to").
    pub comparable: bool,
    /// Primitive numeric, boolean or char type.
    pub primitive: bool,
    /// Copied-by-value aggregate without identity (enums, simple structs).
    pub value_type: bool,
    /// Iterable in a defined order.
    pub iterable: bool,
    /// Has its own readable field structure.
    pub composite: bool,
    /// Shape is only known per value; every value reports its own kind.
    pub dynamic: bool,
}

impl Capabilities {
    /// No capability at all, e.g. a trait object.
    pub const NONE: Self = Self {
        comparable: false,
        primitive: false,
        value_type: false,
        iterable: false,
        composite: false,
        dynamic: false,
    };

    pub const PRIMITIVE: Self = Self {
        comparable: true,
        primitive: true,
        value_type: true,
        ..Self::NONE
    };

    pub const COMPARABLE: Self = Self {
        comparable: true,
        ..Self::NONE
    };

    pub const VALUE: Self = Self {
        value_type: true,
        ..Self::NONE
    };

    pub const SEQUENCE: Self = Self {
        iterable: true,
        ..Self::NONE
    };

    pub const COMPOSITE: Self = Self {
        composite: true,
        ..Self::NONE
    };

    pub const DYNAMIC: Self = Self {
        dynamic: true,
        ..Self::NONE
    };

    /// Marks the type as iterable in addition to its other capabilities.
    pub const fn with_iterable(mut self) -> Self {
        self.iterable = true;
        self
    }
}

/// The closed set of categories a type can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Sequence,
    Composite,
    Unclassifiable,
    /// Resolved from the runtime value at each comparison.
    Dynamic,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "scalar",
            TypeKind::Sequence => "sequence",
            TypeKind::Composite => "composite",
            TypeKind::Unclassifiable => "unclassifiable",
            TypeKind::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a set of capabilities into a single [`TypeKind`].
///
/// Precedence: dynamic, then comparable / primitive / value type, then
/// iterable, then composite. A string is both comparable and iterable and
/// therefore a scalar.
pub fn classify(caps: Capabilities) -> TypeKind {
    if caps.dynamic {
        TypeKind::Dynamic
    } else if caps.comparable || caps.primitive || caps.value_type {
        TypeKind::Scalar
    } else if caps.iterable {
        TypeKind::Sequence
    } else if caps.composite {
        TypeKind::Composite
    } else {
        TypeKind::Unclassifiable
    }
}

/// Name and category of a type, as used by the comparators and the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: &'static str,
    pub kind: TypeKind,
}

impl TypeInfo {
    pub const fn new(name: &'static str, kind: TypeKind) -> Self {
        Self { name, kind }
    }

    /// Classification of `T`, served from the per-type cache.
    pub fn of<T: Inspect>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            kind: kind_of::<T>(),
        }
    }
}

type KindCache = RwLock<HashMap<TypeId, TypeKind>>;

static KIND_CACHE: OnceLock<KindCache> = OnceLock::new();

fn kind_of<T: Inspect>() -> TypeKind {
    let id = TypeId::of::<T>();
    let cache = KIND_CACHE.get_or_init(KindCache::default);

    if let Some(kind) = cache.read().ok().and_then(|m| m.get(&id).copied()) {
        return kind;
    }

    let kind = classify(T::capabilities());
    if let Ok(mut m) = cache.write() {
        m.insert(id, kind);
    }
    kind
}
