use serde::Deserialize;
use serde::Serialize;

use crate::constants::VIACEP_BASE_URL;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressLookupConfig {
    // Must end with a slash; the CEP path segment is joined onto it
    pub base_url: String,
}

impl Default for AddressLookupConfig {
    fn default() -> Self {
        Self {
            base_url: VIACEP_BASE_URL.to_string(),
        }
    }
}
