pub mod boundary;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod runner;
pub mod ui;
pub mod version;

pub use error::{Result, ValidationError, VersionSaverError};
