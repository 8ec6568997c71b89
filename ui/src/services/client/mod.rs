// Client-side access to the energy registry backend
//
// Registrations are sent straight from the browser with reqwest; the
// `CommerceSubmitter` trait lets the form workflow run against fakes in tests.

pub mod registry_client;

pub use registry_client::{CommerceSubmitter, RegistryClient};
