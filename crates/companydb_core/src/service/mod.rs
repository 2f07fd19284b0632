//! Core use-case services.
//!
//! # Responsibility
//! - Expose the per-call data access API to binaries.
//! - Keep callers decoupled from connection handling.

pub mod directory_service;
