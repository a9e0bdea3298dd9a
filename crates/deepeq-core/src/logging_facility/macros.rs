//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations and
//! the mismatch trace.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use deepeq_core::log_op_start;
/// log_op_start!("compare_objects");
/// log_op_start!("compare_objects", max_depth = 8);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use deepeq_core::log_op_end;
/// log_op_end!("compare_objects", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use deepeq_core::{log_op_error, errors::DeepEqError};
/// let err = DeepEqError::CycleDetected { path: "$.next".to_string() };
/// log_op_error!("compare_objects", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Log one detected mismatch
///
/// Emits a single event carrying the declared type, the value path, the
/// mismatch reason and both values.
///
/// # Example
///
/// ```
/// # use deepeq_core::log_mismatch;
/// log_mismatch!("alloc::string::String", "$.name", "value", "\"x\"", "\"y\"");
/// ```
#[macro_export]
macro_rules! log_mismatch {
    ($type_name:expr, $path:expr, $reason:expr, $value_a:expr, $value_b:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $crate::core_types::schema::OP_COMPARE_OBJECTS,
            event = $crate::core_types::schema::EVENT_MISMATCH,
            type_name = $type_name,
            path = $path,
            reason = $reason,
            value_a = $value_a,
            value_b = $value_b,
            "structural mismatch"
        );
    };
}
