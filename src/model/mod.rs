pub mod config;
pub mod file_entry;
pub mod task;
pub mod time_entry;
pub mod workspace;

pub use config::*;
pub use file_entry::*;
pub use task::*;
pub use time_entry::*;
pub use workspace::*;
