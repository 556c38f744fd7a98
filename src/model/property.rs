use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertySection {
    #[serde(rename = "apartments")]
    Apartments,
    #[serde(rename = "houses")]
    Houses,
}

impl PropertySection {
    pub fn title(&self) -> &'static str {
        match self {
            PropertySection::Apartments => "Apartamentos",
            PropertySection::Houses => "Casas",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyCard {
    pub section: PropertySection,
    pub image: String,
    pub title: String,
}

impl PropertyCard {
    pub fn new(
        section: PropertySection,
        image: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            section,
            image: image.into(),
            title: title.into(),
        }
    }
}
