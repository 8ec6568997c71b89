//! User Interface Components
//!
//! Reusable Dioxus components for the administration front-end:
//!
//! - **forms**: The commerce registration form
//! - **display**: Administration sections and submission status
//! - **inputs**: Numeric inputs and inline validation messages

pub mod display;
pub mod forms;
pub mod inputs;
