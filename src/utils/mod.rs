//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code generation and shape checks

pub mod code_generator;
