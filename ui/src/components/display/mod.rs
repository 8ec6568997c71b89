pub mod admin_section;
pub mod submission_status;

pub use admin_section::*;
pub use submission_status::*;
