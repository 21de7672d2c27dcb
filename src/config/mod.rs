//! Configuration loading and management for the Payroll Audit Engine.
//!
//! This module provides the audit parameters (match tolerance and ranking
//! sizes) with sensible defaults, optionally overridden from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_audit::config::AuditConfig;
//!
//! let config = AuditConfig::load("./audit.yaml").unwrap();
//! println!("Tolerance: {} hours", config.tolerance);
//! ```

mod loader;
mod types;

pub use types::AuditConfig;
