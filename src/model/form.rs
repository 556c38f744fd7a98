use std::fmt;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormMode {
    #[serde(rename = "login")]
    Login,
    #[default]
    #[serde(rename = "register")]
    Register,
}

impl FormMode {
    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountRole {
    #[default]
    #[serde(rename = "client")]
    Client,
    #[serde(rename = "realtor")]
    Realtor,
}

impl AccountRole {
    pub fn toggled(self) -> Self {
        match self {
            AccountRole::Client => AccountRole::Realtor,
            AccountRole::Realtor => AccountRole::Client,
        }
    }

    /// Account type as shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            AccountRole::Client => "Cliente",
            AccountRole::Realtor => "Corretor",
        }
    }
}

/// Form inputs, ordered as they are laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "confirmPassword")]
    ConfirmPassword,
    #[serde(rename = "creci")]
    License,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Password,
        FieldKey::ConfirmPassword,
        FieldKey::License,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldKey::Name => "Nome completo",
            FieldKey::Email => "E-mail",
            FieldKey::Password => "Senha",
            FieldKey::ConfirmPassword => "Confirmar Senha",
            FieldKey::License => "CRECI",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, FieldKey::Password | FieldKey::ConfirmPassword)
    }
}

/// Terminal acknowledgment of a successful submit. Nothing is stored or authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    LoginSucceeded,
    AccountCreated(AccountRole),
}

/// In-progress login/registration input for one screen session.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: FormMode,
    pub role: AccountRole,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub license: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        &self,
        key: FieldKey,
    ) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Password => &self.password,
            FieldKey::ConfirmPassword => &self.confirm_password,
            FieldKey::License => &self.license,
        }
    }

    pub fn set_field(
        &mut self,
        key: FieldKey,
        value: String,
    ) {
        let slot = match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Password => &mut self.password,
            FieldKey::ConfirmPassword => &mut self.confirm_password,
            FieldKey::License => &mut self.license,
        };
        *slot = value;
    }
}

// Passwords never end up in logs
impl fmt::Debug for FormState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fn redact(value: &str) -> &'static str {
            if value.is_empty() { "" } else { "<redacted>" }
        }

        f.debug_struct("FormState")
            .field("mode", &self.mode)
            .field("role", &self.role)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .field("confirm_password", &redact(&self.confirm_password))
            .field("license", &self.license)
            .finish()
    }
}
