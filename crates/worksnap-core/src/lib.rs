//! Worksnap Core Types and Traits
//!
//! This crate provides the fundamental types and traits used throughout Worksnap:
//! - The normalized workshop record model
//! - The platform capability trait the orchestrator consumes
//! - Core error types

pub mod error;
pub mod platform;
pub mod record;

pub use error::{Error, Result};
pub use record::WorkshopRecord;
