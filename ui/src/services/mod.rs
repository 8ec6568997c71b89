//! Infrastructure Services
//!
//! - **client**: HTTP client for the energy registry backend
//! - **config**: Registry endpoint configuration and global settings
//! - **errors**: Registration error types
//!
//! The services are designed to be WASM-first, using async traits without
//! Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
pub mod errors;
