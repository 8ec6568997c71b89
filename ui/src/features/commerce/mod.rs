//! Commerce registration: record model, validation and the submission workflow

pub mod form_validation;
pub mod submission;
pub mod types;

pub use form_validation::*;
pub use submission::*;
pub use types::*;
