use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::AddressLookupError;
use crate::error::ValidationError;
use crate::model::form::Outcome;

/// A user-facing alert: a short title and a message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

impl From<&Outcome> for Notice {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::LoginSucceeded => Notice::new("Login realizado", "Bem-vindo de volta!"),
            Outcome::AccountCreated(role) => {
                Notice::new("Sucesso", format!("Conta de {} criada com sucesso!", role.label()))
            },
        }
    }
}

impl From<&ValidationError> for Notice {
    fn from(error: &ValidationError) -> Self {
        let body = match error {
            ValidationError::MissingRequired => "Preencha todos os campos obrigatórios",
            ValidationError::PasswordMismatch => "As senhas não coincidem",
            ValidationError::MissingLicense => "CRECI é obrigatório para corretores",
        };
        Notice::new("Erro", body)
    }
}

impl From<&AddressLookupError> for Notice {
    fn from(error: &AddressLookupError) -> Self {
        match error {
            AddressLookupError::InvalidCep(_) => Notice::new("CEP inválido", "Digite 8 números"),
            AddressLookupError::NotFound(_) => Notice::new("Erro", "CEP não encontrado"),
            AddressLookupError::Connection(_) => Notice::new("Erro", "Falha na conexão"),
        }
    }
}
