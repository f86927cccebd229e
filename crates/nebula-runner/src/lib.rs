pub mod config;
pub mod files;
pub mod report;
pub mod runner;
pub mod scenario;

pub use config::*;
pub use files::*;
pub use runner::*;
