pub mod commerce_form;

pub use commerce_form::*;
