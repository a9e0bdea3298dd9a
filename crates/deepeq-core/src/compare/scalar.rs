//! Scalar comparator.

use super::walk::{Presence, Walk};
use crate::classify::TypeInfo;
use crate::inspect::{scalars_equal, Inspect};
use deepeq_core_types::schema::{REASON_SHAPE, REASON_VALUE};

impl Walk<'_> {
    /// Compare two scalar values.
    ///
    /// Ordered scalars are equal when they compare `Equal`; the rest fall
    /// back to equality. A side that cannot produce a scalar is a shape
    /// mismatch.
    pub(super) fn compare_scalar(
        &mut self,
        declared: TypeInfo,
        path: &str,
        a: Option<&dyn Inspect>,
        b: Option<&dyn Inspect>,
    ) -> bool {
        let (a, b) = match self.presence(declared, path, a, b) {
            Presence::Both(a, b) => (a, b),
            Presence::Decided(equal) => return equal,
        };

        let reason = match (a.as_scalar(), b.as_scalar()) {
            (Some(x), Some(y)) if scalars_equal(&x, &y) => return true,
            (Some(_), Some(_)) => REASON_VALUE,
            _ => REASON_SHAPE,
        };
        self.mismatch(declared.name, path, reason, Some(a), Some(b));
        false
    }
}
