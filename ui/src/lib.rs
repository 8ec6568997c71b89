//! Shared UI components and logic for the Rede Alva administration front-end.

pub mod app;
pub use app::{Administration, CommerceListing, CommerceRegistration};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
