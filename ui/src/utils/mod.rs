//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM logging macros for browser console output
//! - **serialization**: Wire serialization and raw input parsing for form values

pub mod console_macros;
pub mod serialization;

pub use serialization::*;
