use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use tracing::warn;
use url::Url;

use crate::config::AddressLookupConfig;
use crate::error::AddressLookupError;
use crate::error::ConfigError;
use crate::model::address::Address;
use crate::model::address::Cep;

/// Resolves a CEP to the address it belongs to.
///
/// One call per user-initiated search: implementations do not retry, cache or
/// deduplicate.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn lookup(
        &self,
        cep: &Cep,
    ) -> Result<Address, AddressLookupError>;
}

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    bairro: String,
    // `true` or `"true"` depending on the API revision
    #[serde(default)]
    erro: Option<Value>,
}

impl ViaCepResponse {
    fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    fn into_address(self) -> Address {
        Address {
            city: self.localidade,
            state: self.uf,
            neighborhood: self.bairro,
        }
    }
}

/// [`AddressLookup`] backed by the public ViaCEP JSON API.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http_client: Client,
    base_url: Url,
}

impl ViaCepClient {
    pub fn new(config: &AddressLookupConfig) -> crate::Result<Self> {
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| ConfigError::InvalidValue(format!("address_lookup.base_url {:?}: {}", config.base_url, e)))?;

        Ok(Self {
            http_client: Client::new(),
            base_url,
        })
    }

    pub fn endpoint(
        &self,
        cep: &Cep,
    ) -> Result<Url, AddressLookupError> {
        self.base_url
            .join(&format!("{}/json/", cep))
            .map_err(|e| AddressLookupError::Connection(e.to_string()))
    }
}

#[async_trait]
impl AddressLookup for ViaCepClient {
    async fn lookup(
        &self,
        cep: &Cep,
    ) -> Result<Address, AddressLookupError> {
        let url = self.endpoint(cep)?;
        info!("address::lookup::{}", cep);

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("address::lookup::{}::status::{}", cep, status);
            return Err(AddressLookupError::Connection(format!("unexpected status {}", status)));
        }

        let body: ViaCepResponse = response.json().await?;
        if body.is_not_found() {
            info!("address::lookup::{}::not_found", cep);
            return Err(AddressLookupError::NotFound(cep.to_string()));
        }

        Ok(body.into_address())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::fixtures::TestFixtures;

    fn parse(body: &str) -> ViaCepResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn maps_portuguese_fields() {
        let body = parse(
            r#"{"cep":"11700-000","logradouro":"","bairro":"Boqueirão","localidade":"Praia Grande","uf":"SP"}"#,
        );
        assert!(!body.is_not_found());
        assert_eq!(body.into_address(), TestFixtures::sample_address());
    }

    #[test]
    fn erro_flag_means_not_found_in_both_shapes() {
        assert!(parse(r#"{"erro": true}"#).is_not_found());
        assert!(parse(r#"{"erro": "true"}"#).is_not_found());
        assert!(!parse(r#"{"erro": false}"#).is_not_found());
    }

    #[test]
    fn endpoint_appends_cep_and_json_suffix() {
        let client = ViaCepClient::new(&AddressLookupConfig::default()).unwrap();
        let url = client.endpoint(&TestFixtures::sample_cep()).unwrap();
        assert_eq!(url.as_str(), "https://viacep.com.br/ws/11700000/json/");
    }

    #[test]
    fn base_url_without_trailing_slash_is_normalized() {
        let config = AddressLookupConfig {
            base_url: "http://localhost:8080/ws".to_string(),
        };
        let client = ViaCepClient::new(&config).unwrap();
        let url = client.endpoint(&TestFixtures::sample_cep()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/ws/11700000/json/");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let config = AddressLookupConfig {
            base_url: "not a url".to_string(),
        };
        assert!(ViaCepClient::new(&config).is_err());
    }
}
