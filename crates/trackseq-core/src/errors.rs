use serde_json::Value;
use thiserror::Error;
use trackseq_core_types::FieldPath;

/// Result type alias using SequenceError
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Rejection produced by a caster when a raw input cannot become an element
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot cast {value}: {reason}")]
pub struct ValidationError {
    /// The raw input that was rejected
    pub value: Value,
    /// Caster-supplied explanation
    pub reason: String,
}

impl ValidationError {
    pub fn new(value: Value, reason: impl Into<String>) -> Self {
        Self {
            value,
            reason: reason.into(),
        }
    }
}

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and reporting through the owning document's
/// save/validate pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// An input was rejected by the element caster
    Validation,
    /// `pop`/`shift` on an empty sequence
    EmptySequence,
    /// An owner was supplied but its schema has no caster for the path
    Construction,
    /// A casting mutation was called on a sequence with no caster
    CasterUnavailable,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::EmptySequence => "ERR_EMPTY_SEQUENCE",
            ExErrorKind::Construction => "ERR_CONSTRUCTION",
            ExErrorKind::CasterUnavailable => "ERR_CASTER_UNAVAILABLE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus the context needed
/// to find the offending field and argument.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    position: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            position: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add field path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add argument position context
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

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
        if let Some(position) = self.position {
            write!(f, " (position: {})", position)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors surfaced by tracked sequence operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    /// An argument of a casting mutation was rejected; nothing was applied
    #[error("Validation failed for {path} at argument {position}: {source}")]
    Validation {
        path: FieldPath,
        position: usize,
        #[source]
        source: ValidationError,
    },

    /// `pop` or `shift` called on an empty sequence
    #[error("Cannot {op} from empty sequence at {path}")]
    EmptySequence { path: FieldPath, op: &'static str },

    /// An owner was supplied but its schema resolves no caster for the path
    #[error("Cannot construct sequence: no caster registered for path {path}")]
    UnresolvedCaster { path: FieldPath },

    /// Casting requested on a sequence built without an owner
    #[error("Sequence at {path} has no caster; it is a value holder only")]
    CasterUnavailable { path: FieldPath },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<SequenceError> for ExError {
    fn from(err: SequenceError) -> Self {
        match err {
            SequenceError::Validation {
                path,
                position,
                source,
            } => ExError::new(ExErrorKind::Validation)
                .with_path(path.as_str())
                .with_position(position)
                .with_message(source.to_string()),

            SequenceError::EmptySequence { path, op } => ExError::new(ExErrorKind::EmptySequence)
                .with_path(path.as_str())
                .with_op(op)
                .with_message("Sequence is empty"),

            SequenceError::UnresolvedCaster { path } => ExError::new(ExErrorKind::Construction)
                .with_path(path.as_str())
                .with_op("construct")
                .with_message("No caster registered for path"),

            SequenceError::CasterUnavailable { path } => {
                ExError::new(ExErrorKind::CasterUnavailable)
                    .with_path(path.as_str())
                    .with_message("Sequence was built without an owner")
            }

            SequenceError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to SequenceError
impl From<serde_json::Error> for SequenceError {
    fn from(err: serde_json::Error) -> Self {
        SequenceError::Serialization {
            message: err.to_string(),
        }
    }
}
