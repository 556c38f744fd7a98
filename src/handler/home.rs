use tracing::debug;
use tracing::warn;

use super::catalog::Catalog;
use super::navigation::Route;
use crate::constants::CEP_LENGTH;
use crate::error::AddressLookupError;
use crate::handler::address::AddressLookup;
use crate::model::address::Address;
use crate::model::address::Cep;

/// Landing screen: CEP search box, last found address and the property catalog.
pub struct HomeScreen<L: AddressLookup> {
    lookup: L,
    cep_input: String,
    address: Option<Address>,
    pub catalog: Catalog,
}

impl<L: AddressLookup> HomeScreen<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            cep_input: String::new(),
            address: None,
            catalog: Catalog::default(),
        }
    }

    pub fn cep_input(&self) -> &str {
        &self.cep_input
    }

    /// Input is capped at eight characters, extra ones are dropped.
    pub fn set_cep(
        &mut self,
        value: &str,
    ) {
        self.cep_input = value.chars().take(CEP_LENGTH).collect();
    }

    /// Whether the search button is enabled.
    pub fn can_search(&self) -> bool {
        self.cep_input.chars().count() == CEP_LENGTH
    }

    /// Address shown under the search box, if any lookup has succeeded.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub async fn search(&mut self) -> Result<&Address, AddressLookupError> {
        let cep = Cep::parse(&self.cep_input)?;
        debug!("home::search::{}", cep);

        match self.lookup.lookup(&cep).await {
            Ok(address) => Ok(&*self.address.insert(address)),
            Err(e) => {
                // a failed search keeps whatever was displayed before
                warn!("home::search::{}::failed::{}", cep, e);
                Err(e)
            },
        }
    }

    /// Searches a complete CEP given in one piece, e.g. from the command line.
    ///
    /// Unlike [`HomeScreen::set_cep`] nothing is truncated: anything but eight
    /// digits is rejected before reaching the lookup service.
    pub async fn search_cep(
        &mut self,
        value: &str,
    ) -> Result<&Address, AddressLookupError> {
        let cep = Cep::parse(value)?;
        self.cep_input = cep.to_string();
        self.search().await
    }

    pub fn open_profile(&self) -> Route {
        Route::Register
    }
}
