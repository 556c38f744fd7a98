pub mod address;
pub mod catalog;
pub mod home;
pub mod navigation;
pub mod registration;
pub mod screen;

pub use address::AddressLookup;
pub use address::ViaCepClient;
pub use catalog::Catalog;
pub use catalog::CatalogFilter;
pub use home::HomeScreen;
pub use navigation::Navigator;
pub use navigation::Route;
pub use registration::RealtorRegistrationController;
pub use registration::RegistrationFormController;
pub use screen::RealtorRegisterScreen;
pub use screen::RegisterScreen;
pub use screen::ScreenCopy;
pub use screen::SubmitResponse;
