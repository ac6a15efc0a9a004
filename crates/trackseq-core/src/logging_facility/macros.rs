//! Boundary logging macros
//!
//! Only the persistence boundary (`persist.rs`) emits these; sequence
//! mutations stay at `debug` and never use them. Every event carries
//! `component`, `op` and an `event` name from
//! `trackseq_core_types::schema`, followed by whatever fields the call site
//! appends (usually `path`, `strategy` and `op_count`).

/// Emit the `start` event for a boundary operation
///
/// ```
/// # use trackseq_core::log_op_start;
/// log_op_start!("plan_field_update");
/// log_op_start!("plan_field_update", path = "tags", len = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = trackseq_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = trackseq_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the `end` event; `duration_ms` is mandatory
///
/// ```
/// # use trackseq_core::log_op_end;
/// log_op_end!("commit_field_update", duration_ms = 0, op_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = trackseq_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = trackseq_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Emit the `end_error` event for a failed boundary operation
///
/// `$err` is anything convertible into `ExError` (normally a
/// `SequenceError`); the event records its `err_kind` and stable `err_code`.
///
/// ```
/// # use trackseq_core::log_op_error;
/// # use trackseq_core::errors::SequenceError;
/// let err = SequenceError::Serialization { message: "key must be a string".to_string() };
/// log_op_error!("render_updates", err, duration_ms = 1, path = "tags");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = trackseq_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = trackseq_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
