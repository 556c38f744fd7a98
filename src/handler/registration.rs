use std::collections::BTreeSet;

use tracing::debug;
use tracing::info;

use crate::error::ValidationError;
use crate::model::form::AccountRole;
use crate::model::form::FieldKey;
use crate::model::form::FormMode;
use crate::model::form::FormState;
use crate::model::form::Outcome;

/// Fields rendered for a given `(mode, role)` pair.
pub fn visible_fields(
    mode: FormMode,
    role: AccountRole,
) -> BTreeSet<FieldKey> {
    let mut fields = BTreeSet::from([FieldKey::Email, FieldKey::Password]);
    if mode == FormMode::Register {
        fields.insert(FieldKey::Name);
        fields.insert(FieldKey::ConfirmPassword);
        if role == AccountRole::Realtor {
            fields.insert(FieldKey::License);
        }
    }
    fields
}

/// Checks a form in rule order and stops at the first failure.
pub fn validate(state: &FormState) -> Result<Outcome, ValidationError> {
    if state.email.is_empty() || state.password.is_empty() {
        return Err(ValidationError::MissingRequired);
    }

    match state.mode {
        FormMode::Login => Ok(Outcome::LoginSucceeded),
        FormMode::Register => {
            if state.password != state.confirm_password {
                return Err(ValidationError::PasswordMismatch);
            }
            if state.role == AccountRole::Realtor && state.license.is_empty() {
                return Err(ValidationError::MissingLicense);
            }
            Ok(Outcome::AccountCreated(state.role))
        },
    }
}

/// Combined login / registration / realtor-upgrade form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationFormController {
    state: FormState,
}

impl RegistrationFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn mode(&self) -> FormMode {
        self.state.mode
    }

    pub fn role(&self) -> AccountRole {
        self.state.role
    }

    pub fn field(
        &self,
        key: FieldKey,
    ) -> &str {
        self.state.field(key)
    }

    pub fn set_field(
        &mut self,
        key: FieldKey,
        value: impl Into<String>,
    ) {
        self.state.set_field(key, value.into());
    }

    /// Hidden fields keep their values and come back when toggled again.
    pub fn toggle_mode(&mut self) {
        self.state.mode = self.state.mode.toggled();
        debug!("registration::toggle_mode::{:?}", self.state.mode);
    }

    /// No-op while logging in; leaving the realtor role clears the license.
    pub fn toggle_role(&mut self) {
        if self.state.mode != FormMode::Register {
            debug!("registration::toggle_role::ignored_in_login_mode");
            return;
        }

        if self.state.role == AccountRole::Realtor {
            self.state.license.clear();
        }
        self.state.role = self.state.role.toggled();
        debug!("registration::toggle_role::{:?}", self.state.role);
    }

    pub fn visible_fields(&self) -> BTreeSet<FieldKey> {
        visible_fields(self.state.mode, self.state.role)
    }

    pub fn submit(&self) -> Result<Outcome, ValidationError> {
        let result = validate(&self.state);
        match &result {
            Ok(outcome) => info!("registration::submit::accepted::{:?}", outcome),
            Err(e) => debug!("registration::submit::rejected::{:?}", e),
        }
        result
    }
}

/// Realtor-only sign-up: always `Register` + `Realtor`, no toggles.
#[derive(Debug, Clone)]
pub struct RealtorRegistrationController {
    inner: RegistrationFormController,
}

impl Default for RealtorRegistrationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtorRegistrationController {
    pub fn new() -> Self {
        let state = FormState {
            mode: FormMode::Register,
            role: AccountRole::Realtor,
            ..FormState::default()
        };
        Self {
            inner: RegistrationFormController { state },
        }
    }

    pub fn state(&self) -> &FormState {
        self.inner.state()
    }

    pub fn field(
        &self,
        key: FieldKey,
    ) -> &str {
        self.inner.field(key)
    }

    pub fn set_field(
        &mut self,
        key: FieldKey,
        value: impl Into<String>,
    ) {
        self.inner.set_field(key, value);
    }

    pub fn visible_fields(&self) -> BTreeSet<FieldKey> {
        self.inner.visible_fields()
    }

    pub fn submit(&self) -> Result<Outcome, ValidationError> {
        self.inner.submit()
    }
}
