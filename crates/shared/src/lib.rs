//! Shared errors and configuration for the financial service.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, RateEntry, ServerConfig};
pub use error::{AppError, AppResult, ValidationError};
