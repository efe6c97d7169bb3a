pub mod task_parser;
pub mod time_log_parser;

pub use task_parser::parse_tasks;
pub use time_log_parser::parse_time_log;
