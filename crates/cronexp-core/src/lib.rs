//! `cronexp-core`: configuration and shared error types for the cronexp tools.

pub mod config;
pub mod error;

pub use config::{CronexpConfig, OutputConfig, OutputFormat};
pub use error::{CoreError, Result};
