//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Sequence identifiers
pub const FIELD_PATH: &str = "path";
pub const FIELD_OPCODE: &str = "opcode";

// Collection sizes
pub const FIELD_LEN: &str = "len";
pub const FIELD_LOG_LEN: &str = "log_len";
pub const FIELD_OP_COUNT: &str = "op_count";

// Persistence decision
pub const FIELD_STRATEGY: &str = "strategy";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
