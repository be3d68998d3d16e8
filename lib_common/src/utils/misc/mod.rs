/// Retrieval of process and host information for log records.
pub mod sys_info;
/// General helper functions, currently timestamp formatting.
pub mod utils;
