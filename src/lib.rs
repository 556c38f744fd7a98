pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod model;
pub mod tracing;

pub use error::AddressLookupError;
pub use error::Result;
pub use error::ValidationError;
pub use handler::HomeScreen;
pub use handler::Navigator;
pub use handler::RealtorRegisterScreen;
pub use handler::RegisterScreen;
pub use handler::RegistrationFormController;
pub use handler::Route;
pub use handler::ViaCepClient;

pub use crate::tracing::setup_tracing;
