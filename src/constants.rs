/// ======================= Address lookup =======================
pub const VIACEP_BASE_URL: &str = "https://viacep.com.br/ws/";

pub const CEP_LENGTH: usize = 8;

/// ======================= Catalog =======================
pub const CATALOG_LOCATION: &str = "Praia Grande - SP";

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/200x100.png?text=Imagem+indispon%C3%ADvel";

pub const DESCRIPTION_UNAVAILABLE: &str = "Descrição não disponível";

pub const APARTMENT_303_GUILHERMINA: &str = "Apartamento 303 Guilhermina";
pub const PRIME_TOWER: &str = "Prime Tower";
pub const MELVI: &str = "Melvi";
pub const OCIAN: &str = "Ocian";

/// ======================= Logging =======================
pub const APP_NAME: &str = "miazy";
