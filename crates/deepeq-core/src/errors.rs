use thiserror::Error;

/// Result type alias using DeepEqError
pub type Result<T> = std::result::Result<T, DeepEqError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// A structural mismatch is never an error: comparisons report it as a
/// `false` verdict. The kinds below cover the traversal guards and the
/// surfaces around the comparer (options, documents, files).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Traversal guards
    CycleDetected,
    DepthLimitExceeded,

    // Configuration
    InvalidOptions,

    // Integration/IO
    Parse,
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::DepthLimitExceeded => "ERR_DEPTH_LIMIT",
            ExErrorKind::InvalidOptions => "ERR_INVALID_OPTIONS",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable classification for programmatic handling plus the
/// operation and value path where the error surfaced.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add value path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the value path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Detailed error taxonomy for deepeq operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeepEqError {
    /// A composite pair was reached again while still being compared
    #[error("Cycle detected at {path}")]
    CycleDetected { path: String },

    /// The object graph is deeper than the configured bound
    #[error("Depth limit of {limit} exceeded at {path}")]
    DepthLimitExceeded { path: String, limit: usize },

    /// Comparison options failed validation
    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },

    /// A document could not be parsed
    #[error("Failed to parse {format} input: {reason}")]
    Parse { format: String, reason: String },

    /// Reading an input failed
    #[error("I/O error on {target}: {reason}")]
    Io { target: String, reason: String },
}

impl From<DeepEqError> for ExError {
    fn from(err: DeepEqError) -> Self {
        match err {
            DeepEqError::CycleDetected { path } => ExError::new(ExErrorKind::CycleDetected)
                .with_op("compare_objects")
                .with_path(path)
                .with_message("Object graph contains a cycle"),

            DeepEqError::DepthLimitExceeded { path, limit } => {
                ExError::new(ExErrorKind::DepthLimitExceeded)
                    .with_op("compare_objects")
                    .with_path(path)
                    .with_message(format!("Object graph exceeds max depth {}", limit))
            }

            DeepEqError::InvalidOptions { reason } => ExError::new(ExErrorKind::InvalidOptions)
                .with_op("load_options")
                .with_message(reason),

            DeepEqError::Parse { format, reason } => ExError::new(ExErrorKind::Parse)
                .with_op("parse_document")
                .with_message(format!("{}: {}", format, reason)),

            DeepEqError::Io { target, reason } => ExError::new(ExErrorKind::Io)
                .with_op("read_input")
                .with_path(target)
                .with_message(reason),
        }
    }
}
