pub mod op_log;
pub mod operation;

pub use op_log::OperationLog;
pub use operation::{Opcode, Operation};
