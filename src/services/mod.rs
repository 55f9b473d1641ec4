pub mod import;
pub mod report;
pub mod server;
