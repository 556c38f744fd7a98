pub mod address;
pub mod form;
pub mod notice;
pub mod property;

pub use address::Address;
pub use address::Cep;
pub use form::AccountRole;
pub use form::FieldKey;
pub use form::FormMode;
pub use form::FormState;
pub use form::Outcome;
pub use notice::Notice;
pub use property::PropertyCard;
pub use property::PropertySection;
