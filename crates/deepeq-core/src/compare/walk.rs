//! Traversal state shared by the comparators.
//!
//! A [`Walk`] lives for one top-level comparison. It holds the immutable
//! options (including the ignore set), the active-pair set used by the
//! cycle guard, the current depth, the mismatch count and the first guard
//! violation, if any.

use crate::classify::{TypeInfo, TypeKind};
use crate::errors::DeepEqError;
use crate::inspect::{identity, Inspect};
use crate::options::{CompareOptions, CyclePolicy};
use crate::log_mismatch;
use deepeq_core_types::schema::{REASON_GUARD, REASON_NULL, REASON_UNCLASSIFIABLE};
use std::collections::HashSet;

pub(crate) const ROOT_PATH: &str = "$";

type PairKey = ((usize, &'static str), (usize, &'static str));

pub(crate) struct Walk<'o> {
    pub(super) options: &'o CompareOptions,
    depth: usize,
    active: HashSet<PairKey>,
    mismatches: usize,
    fault: Option<DeepEqError>,
}

/// Result of the shared null checks.
pub(super) enum Presence<'v> {
    Both(&'v dyn Inspect, &'v dyn Inspect),
    Decided(bool),
}

/// Result of entering a nested pair.
pub(super) enum Entry {
    Descend,
    Decided(bool),
}

impl<'o> Walk<'o> {
    pub(crate) fn new(options: &'o CompareOptions) -> Self {
        Self {
            options,
            depth: 0,
            active: HashSet::new(),
            mismatches: 0,
            fault: None,
        }
    }

    pub(crate) fn mismatches(&self) -> usize {
        self.mismatches
    }

    pub(crate) fn into_fault(self) -> Option<DeepEqError> {
        self.fault
    }

    /// Compare two top-level values, classifying by the runtime type of
    /// whichever side is present.
    pub(crate) fn compare_root(&mut self, a: &dyn Inspect, b: &dyn Inspect) -> bool {
        self.dispatch_runtime(ROOT_PATH, a.present(), b.present())
    }

    /// Classify by the runtime type of whichever side is present, then
    /// dispatch. Two absent values are equal.
    pub(super) fn dispatch_runtime(
        &mut self,
        path: &str,
        a: Option<&dyn Inspect>,
        b: Option<&dyn Inspect>,
    ) -> bool {
        match (a, b) {
            (Some(v), _) | (None, Some(v)) => self.dispatch(v.type_info(), path, a, b),
            (None, None) => true,
        }
    }

    /// Route a pair of resolved values to the comparator for `declared`.
    pub(super) fn dispatch(
        &mut self,
        declared: TypeInfo,
        path: &str,
        a: Option<&dyn Inspect>,
        b: Option<&dyn Inspect>,
    ) -> bool {
        match declared.kind {
            TypeKind::Dynamic => match (a, b) {
                (Some(v), _) | (None, Some(v)) if v.type_info().kind != TypeKind::Dynamic => {
                    self.dispatch(v.type_info(), path, a, b)
                }
                (None, None) => true,
                _ => {
                    self.mismatch(declared.name, path, REASON_UNCLASSIFIABLE, a, b);
                    false
                }
            },
            TypeKind::Scalar => self.compare_scalar(declared, path, a, b),
            TypeKind::Sequence => self.compare_sequence(declared, path, a, b),
            TypeKind::Composite => self.compare_object(declared, path, a, b),
            TypeKind::Unclassifiable => {
                self.mismatch(declared.name, path, REASON_UNCLASSIFIABLE, a, b);
                false
            }
        }
    }

    /// Null checks common to every comparator.
    pub(super) fn presence<'v>(
        &mut self,
        declared: TypeInfo,
        path: &str,
        a: Option<&'v dyn Inspect>,
        b: Option<&'v dyn Inspect>,
    ) -> Presence<'v> {
        match (a, b) {
            (Some(a), Some(b)) => Presence::Both(a, b),
            (None, None) => Presence::Decided(true),
            (a, b) => {
                self.mismatch(declared.name, path, REASON_NULL, a, b);
                Presence::Decided(false)
            }
        }
    }

    /// Apply the depth bound, when one is set, and the cycle guard before descending into a
    /// nested pair. Every `Entry::Descend` must be paired with [`Walk::leave`].
    pub(super) fn enter(
        &mut self,
        declared: TypeInfo,
        path: &str,
        a: &dyn Inspect,
        b: &dyn Inspect,
    ) -> Entry {
        if let Some(limit) = self.options.max_depth.filter(|&limit| self.depth >= limit) {
            self.guard_violation(
                declared,
                path,
                a,
                b,
                DeepEqError::DepthLimitExceeded {
                    path: path.to_string(),
                    limit,
                },
            );
            return Entry::Decided(false);
        }

        let key = (identity(a), identity(b));
        if !self.active.insert(key) {
            return match self.options.cycle_policy {
                CyclePolicy::AssumeEqual => Entry::Decided(true),
                CyclePolicy::Reject => {
                    self.guard_violation(
                        declared,
                        path,
                        a,
                        b,
                        DeepEqError::CycleDetected {
                            path: path.to_string(),
                        },
                    );
                    Entry::Decided(false)
                }
            };
        }

        self.depth += 1;
        Entry::Descend
    }

    pub(super) fn leave(&mut self, a: &dyn Inspect, b: &dyn Inspect) {
        self.depth = self.depth.saturating_sub(1);
        self.active.remove(&(identity(a), identity(b)));
    }

    fn guard_violation(
        &mut self,
        declared: TypeInfo,
        path: &str,
        a: &dyn Inspect,
        b: &dyn Inspect,
        err: DeepEqError,
    ) {
        self.mismatch(declared.name, path, REASON_GUARD, Some(a), Some(b));
        self.fault.get_or_insert(err);
    }

    /// Record one mismatch and emit its trace line.
    pub(super) fn mismatch(
        &mut self,
        type_name: &str,
        path: &str,
        reason: &str,
        a: Option<&dyn Inspect>,
        b: Option<&dyn Inspect>,
    ) {
        self.mismatches += 1;
        let (value_a, value_b) = (render(a), render(b));
        log_mismatch!(type_name, path, reason, value_a.as_str(), value_b.as_str());
    }

    /// Same as [`Walk::mismatch`] with pre-rendered values.
    pub(super) fn mismatch_text(
        &mut self,
        type_name: &str,
        path: &str,
        reason: &str,
        value_a: &str,
        value_b: &str,
    ) {
        self.mismatches += 1;
        log_mismatch!(type_name, path, reason, value_a, value_b);
    }
}

/// Render a value for the trace. Only scalars are printed in full; nested
/// values are summarized so that cyclic graphs never recurse through `Debug`.
fn render(value: Option<&dyn Inspect>) -> String {
    let Some(v) = value else {
        return "null".to_string();
    };
    let info = v.type_info();
    match info.kind {
        TypeKind::Scalar | TypeKind::Unclassifiable | TypeKind::Dynamic => format!("{:?}", v),
        TypeKind::Sequence => {
            let len = v
                .elements()
                .map(|items| items.len())
                .or_else(|| v.entries().map(|entries| entries.len()));
            match len {
                Some(len) => format!("{} [len {}]", info.name, len),
                None => format!("{} [..]", info.name),
            }
        }
        TypeKind::Composite => format!("{} {{..}}", info.name),
    }
}

pub(super) fn field_path(parent: &str, name: &str) -> String {
    format!("{}.{}", parent, name)
}

pub(super) fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
