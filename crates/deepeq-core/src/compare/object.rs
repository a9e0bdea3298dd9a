//! Composite comparator.
//!
//! Fields are enumerated from the left-hand value. Each field not on the
//! ignore list is looked up by name on both sides and compared according to
//! its declared type. Every field is visited even after a mismatch, so the
//! trace lists all differing fields of an object.

use super::walk::{field_path, Entry, Presence, Walk};
use crate::classify::{TypeInfo, TypeKind};
use crate::inspect::Inspect;
use deepeq_core_types::schema::{REASON_MISSING_FIELD, REASON_SHAPE};

impl Walk<'_> {
    pub(super) fn compare_object(
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

        if b.type_info().kind != TypeKind::Composite {
            self.mismatch(declared.name, path, REASON_SHAPE, Some(a), Some(b));
            return false;
        }

        if let Entry::Decided(equal) = self.enter(declared, path, a, b) {
            return equal;
        }

        let mut equal = true;
        for field in a.fields().iter() {
            if self.options.ignore_fields.contains(field.name) {
                continue;
            }

            let child = field_path(path, field.name);
            let value_a = a.field(field.name).and_then(|v| v.present());
            let Some(value_b) = b.field(field.name) else {
                self.mismatch(field.declared.name, &child, REASON_MISSING_FIELD, value_a, None);
                equal = false;
                continue;
            };

            if !self.dispatch(field.declared, &child, value_a, value_b.present()) {
                equal = false;
            }
        }

        self.leave(a, b);
        equal
    }
}
