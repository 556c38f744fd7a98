use async_trait::async_trait;
use mockall::mock;

use crate::error::AddressLookupError;
use crate::handler::address::AddressLookup;
use crate::model::address::Address;
use crate::model::address::Cep;

// Mock for the address lookup collaborator
mock! {
    pub AddressClient {}

    #[async_trait]
    impl AddressLookup for AddressClient {
        async fn lookup(&self, cep: &Cep) -> Result<Address, AddressLookupError>;
    }
}

/// Mock that answers every lookup with the given address
pub fn create_mock_lookup_returning(address: Address) -> MockAddressClient {
    let mut mock = MockAddressClient::new();
    mock.expect_lookup().returning(move |_| Ok(address.clone()));
    mock
}

/// Mock that fails every lookup with the given error
pub fn create_failing_mock_lookup(error: AddressLookupError) -> MockAddressClient {
    let mut mock = MockAddressClient::new();
    mock.expect_lookup().returning(move |_| Err(error.clone()));
    mock
}
