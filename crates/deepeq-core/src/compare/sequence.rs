//! Sequence comparator.
//!
//! Sequences are equal when they have the same length and their elements
//! are pairwise equal in iteration order. Each element is classified by its
//! own runtime type, so heterogeneous collections compare element by
//! element. Ordered maps are sequences of key/value pairs: the key is
//! compared at `[i].key` and the value at `[i].value`. The first differing
//! element ends the comparison.

use super::walk::{field_path, index_path, Entry, Presence, Walk};
use crate::classify::TypeInfo;
use crate::inspect::Inspect;
use deepeq_core_types::schema::{REASON_LENGTH, REASON_SHAPE};

enum Item<'v> {
    Element(&'v dyn Inspect),
    Pair(&'v dyn Inspect, &'v dyn Inspect),
}

fn items(value: &dyn Inspect) -> Option<Vec<Item<'_>>> {
    if let Some(elements) = value.elements() {
        return Some(elements.into_iter().map(Item::Element).collect());
    }
    value
        .entries()
        .map(|entries| entries.into_iter().map(|(k, v)| Item::Pair(k, v)).collect())
}

impl Walk<'_> {
    pub(super) fn compare_sequence(
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

        let (items_a, items_b) = match (items(a), items(b)) {
            (Some(items_a), Some(items_b)) => (items_a, items_b),
            _ => {
                self.mismatch(declared.name, path, REASON_SHAPE, Some(a), Some(b));
                return false;
            }
        };

        if items_a.len() != items_b.len() {
            self.mismatch_text(
                declared.name,
                path,
                REASON_LENGTH,
                &format!("len {}", items_a.len()),
                &format!("len {}", items_b.len()),
            );
            return false;
        }

        if let Entry::Decided(equal) = self.enter(declared, path, a, b) {
            return equal;
        }

        let mut equal = true;
        for (index, pair) in items_a.iter().zip(&items_b).enumerate() {
            let at = index_path(path, index);
            let same = match pair {
                (Item::Element(x), Item::Element(y)) => {
                    self.dispatch_runtime(&at, x.present(), y.present())
                }
                (Item::Pair(ka, va), Item::Pair(kb, vb)) => {
                    self.dispatch_runtime(&field_path(&at, "key"), ka.present(), kb.present())
                        && self.dispatch_runtime(
                            &field_path(&at, "value"),
                            va.present(),
                            vb.present(),
                        )
                }
                _ => {
                    self.mismatch(declared.name, &at, REASON_SHAPE, Some(a), Some(b));
                    false
                }
            };
            if !same {
                equal = false;
                break;
            }
        }

        self.leave(a, b);
        equal
    }
}
