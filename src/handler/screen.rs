use std::collections::BTreeSet;

use super::navigation::Route;
use super::registration::RealtorRegistrationController;
use super::registration::RegistrationFormController;
use crate::error::ValidationError;
use crate::model::form::AccountRole;
use crate::model::form::FieldKey;
use crate::model::form::FormMode;
use crate::model::form::Outcome;
use crate::model::notice::Notice;

/// Static texts of a form screen for its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub footer_prompt: &'static str,
    pub footer_link: &'static str,
    /// `None` when the role toggle is not displayed.
    pub role_toggle_label: Option<&'static str>,
}

impl ScreenCopy {
    pub fn for_form(
        mode: FormMode,
        role: AccountRole,
    ) -> Self {
        match mode {
            FormMode::Login => Self {
                title: "Acessar Conta",
                subtitle: "Faça login para continuar",
                submit_label: "Entrar",
                footer_prompt: "Não tem uma conta? ",
                footer_link: "Criar conta",
                role_toggle_label: None,
            },
            FormMode::Register => Self {
                title: "Criar Conta",
                subtitle: "Preencha os campos para se cadastrar",
                submit_label: "Cadastrar",
                footer_prompt: "Já tem uma conta? ",
                footer_link: "Faça login",
                role_toggle_label: Some(match role {
                    AccountRole::Client => "Registrar como Corretor? Clique aqui",
                    AccountRole::Realtor => "Voltar para cadastro de cliente",
                }),
            },
        }
    }

    pub fn realtor_only() -> Self {
        Self {
            title: "Cadastro de Corretor",
            subtitle: "Preencha todos os campos obrigatórios",
            submit_label: "Cadastrar como Corretor",
            footer_prompt: "Já é cadastrado? ",
            footer_link: "Faça login",
            role_toggle_label: None,
        }
    }
}

/// What the host shows (and where it goes) after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub result: Result<Outcome, ValidationError>,
    pub notice: Notice,
    pub navigate_to: Option<Route>,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

fn notice_for(result: &Result<Outcome, ValidationError>) -> Notice {
    match result {
        Ok(outcome) => Notice::from(outcome),
        Err(e) => Notice::from(e),
    }
}

/// The combined login / sign-up screen.
#[derive(Debug, Clone, Default)]
pub struct RegisterScreen {
    pub form: RegistrationFormController,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&self) -> ScreenCopy {
        ScreenCopy::for_form(self.form.mode(), self.form.role())
    }

    pub fn visible_fields(&self) -> BTreeSet<FieldKey> {
        self.form.visible_fields()
    }

    pub fn submit(&self) -> SubmitResponse {
        let result = self.form.submit();
        SubmitResponse {
            notice: notice_for(&result),
            result,
            navigate_to: None,
        }
    }
}

/// Sign-up screen reserved to realtors.
#[derive(Debug, Clone, Default)]
pub struct RealtorRegisterScreen {
    pub form: RealtorRegistrationController,
}

impl RealtorRegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&self) -> ScreenCopy {
        ScreenCopy::realtor_only()
    }

    pub fn visible_fields(&self) -> BTreeSet<FieldKey> {
        self.form.visible_fields()
    }

    /// On success the host moves on to the login / sign-up screen.
    pub fn submit(&self) -> SubmitResponse {
        let result = self.form.submit();
        match result {
            Ok(_) => SubmitResponse {
                result,
                notice: Notice::new("Cadastro realizado", "Corretor cadastrado com sucesso!"),
                navigate_to: Some(Route::Register),
            },
            Err(ValidationError::MissingLicense) => SubmitResponse {
                result,
                notice: Notice::new("Erro", "O CRECI é obrigatório para corretores"),
                navigate_to: None,
            },
            Err(_) => SubmitResponse {
                notice: notice_for(&result),
                result,
                navigate_to: None,
            },
        }
    }

    /// Target of the "Faça login" footer link.
    pub fn go_to_login(&self) -> Route {
        Route::Register
    }
}
