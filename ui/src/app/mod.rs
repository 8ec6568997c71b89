pub mod administration;
pub mod commerce_listing;
pub mod commerce_registration;

pub use administration::Administration;
pub use commerce_listing::CommerceListing;
pub use commerce_registration::CommerceRegistration;

pub const ADMINISTRATION_PATH: &str = "/administracao";
pub const COMMERCE_REGISTRATION_PATH: &str = "/comercios/cad-comercios";
