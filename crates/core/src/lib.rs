//! # Condo Core
//!
//! Core error handling and configuration for Condominio Admin.
//!
//! This crate provides the foundational building blocks used throughout
//! the application:
//!
//! - **Errors**: Unified error handling with `AdminError` and `AdminResult`
//! - **Config**: Environment-driven application configuration
//!

pub mod config;
pub mod error;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{AdminError, AdminResult, ResultExt};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
