//! Canonical schema constants for structured logging and events
//!
//! These constants keep the mismatch trace and the operation brackets
//! consistent between the library, the CLI and test assertions.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Mismatch trace fields
pub const FIELD_TYPE_NAME: &str = "type_name";
pub const FIELD_PATH: &str = "path";
pub const FIELD_REASON: &str = "reason";
pub const FIELD_VALUE_A: &str = "value_a";
pub const FIELD_VALUE_B: &str = "value_b";

// Comparison outcome
pub const FIELD_EQUAL: &str = "equal";
pub const FIELD_MISMATCHES: &str = "mismatches";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical operation names
pub const OP_COMPARE_OBJECTS: &str = "compare_objects";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_MISMATCH: &str = "mismatch";

// Mismatch reasons
pub const REASON_NULL: &str = "null_vs_present";
pub const REASON_VALUE: &str = "value";
pub const REASON_LENGTH: &str = "length";
pub const REASON_UNCLASSIFIABLE: &str = "unclassifiable";
pub const REASON_MISSING_FIELD: &str = "missing_field";
pub const REASON_SHAPE: &str = "shape";
pub const REASON_GUARD: &str = "guard";
