//! Structural comparison.
//!
//! [`compare_objects`] decides whether two values have the same public
//! structure. The top-level pair is classified by its runtime type and
//! handed to one of three comparators:
//!
//! - scalars compare by natural ordering when available, else by equality
//! - sequences compare positionally and stop at the first differing element
//! - composites compare field by field, skipping names on the ignore list,
//!   and visit every field
//!
//! Each detected mismatch emits one `mismatch` trace event (see
//! [`log_mismatch!`](crate::log_mismatch)). A mismatch is a verdict, never
//! an error: the only failures are the traversal guards configured in
//! [`CompareOptions`], reported through [`Comparer::try_compare`].

mod object;
mod scalar;
mod sequence;
mod walk;

use crate::errors::{DeepEqError, ExError};
use crate::inspect::Inspect;
use crate::options::{CompareOptions, IgnoreSet};
use crate::{log_op_end, log_op_error, log_op_start};
use deepeq_core_types::schema::OP_COMPARE_OBJECTS;
use walk::Walk;

/// Verdict of a comparison together with the number of traced mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub equal: bool,
    pub mismatches: usize,
}

/// Reusable comparison entry point carrying its options.
#[derive(Debug, Clone, Default)]
pub struct Comparer {
    options: CompareOptions,
}

impl Comparer {
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compare two values. Guard violations yield `false`.
    pub fn compare(&self, a: &dyn Inspect, b: &dyn Inspect) -> bool {
        self.run(a, b).0.equal
    }

    /// Compare two values and count the mismatches traced on the way.
    pub fn compare_counted(&self, a: &dyn Inspect, b: &dyn Inspect) -> Outcome {
        self.run(a, b).0
    }

    /// Compare two values, surfacing guard violations as errors.
    ///
    /// # Errors
    ///
    /// `CycleDetected` when a cycle is reached under
    /// [`CyclePolicy::Reject`](crate::CyclePolicy::Reject), and
    /// `DepthLimitExceeded` when the graph is deeper than `max_depth`.
    pub fn try_compare(&self, a: &dyn Inspect, b: &dyn Inspect) -> Result<bool, ExError> {
        match self.run(a, b) {
            (_, Some(err)) => Err(err.into()),
            (outcome, None) => Ok(outcome.equal),
        }
    }

    fn run(&self, a: &dyn Inspect, b: &dyn Inspect) -> (Outcome, Option<DeepEqError>) {
        log_op_start!(OP_COMPARE_OBJECTS, max_depth = ?self.options.max_depth);
        let start = std::time::Instant::now();

        let mut walk = Walk::new(&self.options);
        let equal = walk.compare_root(a, b);
        let outcome = Outcome {
            equal,
            mismatches: walk.mismatches(),
        };
        let fault = walk.into_fault();

        let duration_ms = start.elapsed().as_millis() as u64;
        match &fault {
            Some(err) => log_op_error!(OP_COMPARE_OBJECTS, err.clone(), duration_ms = duration_ms),
            None => {
                let mismatches = outcome.mismatches as u64;
                log_op_end!(
                    OP_COMPARE_OBJECTS,
                    duration_ms = duration_ms,
                    equal = equal,
                    mismatches = mismatches
                );
            }
        }

        (outcome, fault)
    }
}

/// Compare two values, ignoring the named fields at every depth.
///
/// ```
/// use deepeq_core::{compare_objects, IgnoreSet};
///
/// let ignore: IgnoreSet = ["id"].into_iter().collect();
/// assert!(compare_objects(&vec![1, 2], &vec![1, 2], &ignore));
/// assert!(!compare_objects(&vec![1, 2], &vec![2, 1], &ignore));
/// ```
pub fn compare_objects(a: &dyn Inspect, b: &dyn Inspect, ignore_fields: &IgnoreSet) -> bool {
    let options = CompareOptions {
        ignore_fields: ignore_fields.clone(),
        ..CompareOptions::default()
    };
    Comparer::new(options).compare(a, b)
}

/// Compare two values with no ignored fields.
pub fn deep_eq(a: &dyn Inspect, b: &dyn Inspect) -> bool {
    Comparer::default().compare(a, b)
}

/// Compare two values, ignoring the given field names.
pub fn deep_eq_ignoring<I, S>(a: &dyn Inspect, b: &dyn Inspect, fields: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Comparer::new(CompareOptions::new().ignore_fields(fields)).compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use crate::logging_facility::capture_scoped;
    use deepeq_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

    #[test]
    fn test_absent_roots() {
        let none: Option<i32> = None;
        assert!(deep_eq(&none, &none));
        assert!(!deep_eq(&none, &Some(1)));
        assert!(!deep_eq(&Some(1), &none));
    }

    #[test]
    fn test_root_is_classified_by_runtime_type() {
        assert!(deep_eq(&Some(vec![1, 2]), &vec![1, 2]));
        assert!(deep_eq(&Box::new(5u8), &5u8));
    }

    #[test]
    fn test_deep_eq_ignoring() {
        let a = serde_json::json!({"id": 1, "name": "a"});
        let b = serde_json::json!({"id": 2, "name": "a"});
        assert!(!deep_eq(&a, &b));
        assert!(deep_eq_ignoring(&a, &b, ["id"]));
    }

    #[test]
    fn test_compare_counted() {
        let a = serde_json::json!({"x": 1, "y": 2, "z": 3});
        let b = serde_json::json!({"x": 9, "y": 2, "z": 9});
        let outcome = Comparer::default().compare_counted(&a, &b);
        assert_eq!(
            outcome,
            Outcome {
                equal: false,
                mismatches: 2
            }
        );
    }

    #[test]
    fn test_depth_limit_is_an_error_from_try_compare() {
        let a = vec![vec![vec![1]]];
        let comparer = Comparer::new(CompareOptions::new().with_max_depth(2));

        assert!(!comparer.compare(&a, &a));
        let err = comparer.try_compare(&a, &a).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::DepthLimitExceeded);
        assert_eq!(err.path(), Some("$[0][0]"));
    }

    #[test]
    fn test_within_depth_limit() {
        let a = vec![vec![vec![1]]];
        let comparer = Comparer::new(CompareOptions::new().with_max_depth(3));
        assert!(comparer.try_compare(&a, &a).unwrap());
    }

    #[test]
    fn test_operation_is_bracketed_by_log_events() {
        let (_, capture) = capture_scoped(|| deep_eq(&1, &1));
        capture.assert_event_exists(OP_COMPARE_OBJECTS, EVENT_START);
        capture.assert_event_exists(OP_COMPARE_OBJECTS, EVENT_END);

        let end = capture
            .events()
            .into_iter()
            .find(|e| e.event.as_deref() == Some(EVENT_END))
            .unwrap();
        assert_eq!(end.field("equal"), Some("true"));
        assert_eq!(end.field("mismatches"), Some("0"));
    }

    #[test]
    fn test_guard_violation_logs_end_error() {
        let a = vec![vec![1]];
        let comparer = Comparer::new(CompareOptions::new().with_max_depth(1));
        let (_, capture) = capture_scoped(|| comparer.compare(&a, &a));
        capture.assert_event_exists(OP_COMPARE_OBJECTS, EVENT_END_ERROR);
    }
}
