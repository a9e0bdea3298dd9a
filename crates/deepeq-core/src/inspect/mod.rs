//! Runtime structure of values.
//!
//! [`Inspect`] is the capability the comparators work against. A type
//! declares its [`Capabilities`] statically and exposes its structure
//! through one of three views:
//!
//! - scalars return a [`Scalar`] from [`Inspect::as_scalar`]
//! - sequences return their materialized elements from [`Inspect::elements`],
//!   or key/value pairs from [`Inspect::entries`] when they are maps
//! - composites return a field table from [`Inspect::fields`] and resolve
//!   field values by name through [`Inspect::field`]
//!
//! Nullable and pointer wrappers (`Option`, `OnceCell`, `Box`, `Rc`, `Arc`)
//! are transparent: [`Inspect::present`] resolves them to the value they hold
//! or to `None` for an absent value.
//!
//! User types implement the trait through [`inspect_composite!`],
//! [`inspect_scalar!`] and [`inspect_value!`].
//!
//! [`inspect_composite!`]: crate::inspect_composite
//! [`inspect_scalar!`]: crate::inspect_scalar
//! [`inspect_value!`]: crate::inspect_value

pub mod json;
pub mod scalar;
mod std_impls;

pub use scalar::{scalars_equal, DynEq, DynOrd, Scalar};

use crate::classify::{Capabilities, TypeInfo};
use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// A readable field of a composite type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor<'a> {
    pub name: &'a str,
    /// Classification of the field's declared type.
    pub declared: TypeInfo,
}

impl<'a> FieldDescriptor<'a> {
    pub const fn new(name: &'a str, declared: TypeInfo) -> Self {
        Self { name, declared }
    }
}

/// Runtime view over a value's public structure.
pub trait Inspect: fmt::Debug + Any {
    /// Capabilities of the type when it appears as a declared type.
    fn capabilities() -> Capabilities
    where
        Self: Sized;

    /// Classification of the concrete type behind `self`.
    fn type_info(&self) -> TypeInfo;

    /// The value itself, or `None` when it is absent.
    fn present(&self) -> Option<&dyn Inspect>;

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        None
    }

    /// All elements in iteration order.
    fn elements(&self) -> Option<Vec<&dyn Inspect>> {
        None
    }

    /// Key/value pairs in iteration order, for ordered maps.
    fn entries(&self) -> Option<Vec<(&dyn Inspect, &dyn Inspect)>> {
        None
    }

    /// Readable fields of the concrete type.
    fn fields(&self) -> Cow<'_, [FieldDescriptor<'_>]> {
        Cow::Borrowed(&[])
    }

    /// Field value by name. `None` when the concrete type has no such field.
    fn field(&self, _name: &str) -> Option<&dyn Inspect> {
        None
    }
}

/// Identity of a resolved value, used by the cycle guard.
pub(crate) fn identity(value: &dyn Inspect) -> (usize, &'static str) {
    let addr = value as *const dyn Inspect as *const () as usize;
    (addr, value.type_info().name)
}
