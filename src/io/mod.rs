pub mod config_io;
pub mod poller;
pub mod watcher;
pub mod workspace_io;
