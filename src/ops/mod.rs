pub mod files;
pub mod sections;
pub mod timeline;
