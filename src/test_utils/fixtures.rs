use crate::handler::registration::RegistrationFormController;
use crate::model::address::Address;
use crate::model::address::Cep;
use crate::model::form::AccountRole;
use crate::model::form::FieldKey;
use crate::model::form::FormMode;

/// Test fixtures for creating consistent test data
pub struct TestFixtures;

impl TestFixtures {
    pub const NAME: &'static str = "Ana";
    pub const EMAIL: &'static str = "a@b.com";
    pub const PASSWORD: &'static str = "x";
    pub const LICENSE: &'static str = "123456-F";

    /// A controller in the given configuration with every field filled and passwords matching
    pub fn filled_controller(
        mode: FormMode,
        role: AccountRole,
    ) -> RegistrationFormController {
        let mut controller = RegistrationFormController::new();
        if role == AccountRole::Realtor {
            controller.toggle_role();
        }
        if mode == FormMode::Login {
            controller.toggle_mode();
        }
        controller.set_field(FieldKey::Name, Self::NAME);
        controller.set_field(FieldKey::Email, Self::EMAIL);
        controller.set_field(FieldKey::Password, Self::PASSWORD);
        controller.set_field(FieldKey::ConfirmPassword, Self::PASSWORD);
        controller.set_field(FieldKey::License, Self::LICENSE);
        controller
    }

    pub fn sample_cep() -> Cep {
        Cep::parse("11700000").expect("fixture CEP is valid")
    }

    pub fn sample_address() -> Address {
        Address {
            city: "Praia Grande".to_string(),
            state: "SP".to_string(),
            neighborhood: "Boqueirão".to_string(),
        }
    }
}
