use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::APARTMENT_303_GUILHERMINA;
use crate::constants::CATALOG_LOCATION;
use crate::constants::DESCRIPTION_UNAVAILABLE;
use crate::constants::MELVI;
use crate::constants::OCIAN;
use crate::constants::PLACEHOLDER_IMAGE_URL;
use crate::constants::PRIME_TOWER;
use crate::model::property::PropertyCard;
use crate::model::property::PropertySection;

/// Filter chips above the listings; `All` is preselected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogFilter {
    #[default]
    #[serde(rename = "tudo")]
    All,
    #[serde(rename = "casa")]
    Houses,
    #[serde(rename = "apartamento")]
    Apartments,
}

impl CatalogFilter {
    pub const ALL: [CatalogFilter; 3] = [CatalogFilter::All, CatalogFilter::Houses, CatalogFilter::Apartments];

    pub fn label(&self) -> &'static str {
        match self {
            CatalogFilter::All => "Tudo",
            CatalogFilter::Houses => "Casa",
            CatalogFilter::Apartments => "Apartamento",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label().eq_ignore_ascii_case(label))
    }

    pub fn includes(
        &self,
        section: PropertySection,
    ) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Houses => section == PropertySection::Houses,
            CatalogFilter::Apartments => section == PropertySection::Apartments,
        }
    }
}

pub fn describe(title: &str) -> &'static str {
    match title {
        APARTMENT_303_GUILHERMINA => "Apartamento com 2 quartos, 72m², vista para o mar, valor R$ 350.000",
        PRIME_TOWER => "Edifício premium com piscina e academia, 110m², valor R$ 550.000",
        MELVI => "Casa térrea com jardim, 3 dormitórios, 150m², valor R$ 480.000",
        OCIAN => "Casa de praia com piscina, 4 suítes, 200m², valor R$ 1.200.000",
        _ => DESCRIPTION_UNAVAILABLE,
    }
}

/// Read-only listing of property cards, plus which card images failed to load.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<PropertyCard>,
    failed_images: HashSet<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            PropertyCard::new(PropertySection::Apartments, "https://i.imgur.com/1NHShuT.jpg", APARTMENT_303_GUILHERMINA),
            PropertyCard::new(PropertySection::Apartments, "https://i.imgur.com/8EaxIYw.jpg", PRIME_TOWER),
            PropertyCard::new(PropertySection::Houses, "https://i.imgur.com/jE5VKKp.jpg", MELVI),
            PropertyCard::new(PropertySection::Houses, "https://i.imgur.com/Y6F5XtM.jpg", OCIAN),
        ])
    }
}

impl Catalog {
    pub fn new(cards: Vec<PropertyCard>) -> Self {
        Self {
            cards,
            failed_images: HashSet::new(),
        }
    }

    pub fn cards(&self) -> &[PropertyCard] {
        &self.cards
    }

    pub fn location(&self) -> &'static str {
        CATALOG_LOCATION
    }

    /// Sections in display order (apartments first), each with its cards.
    pub fn sections(
        &self,
        filter: CatalogFilter,
    ) -> Vec<(PropertySection, Vec<&PropertyCard>)> {
        [PropertySection::Apartments, PropertySection::Houses]
            .into_iter()
            .filter(|section| filter.includes(*section))
            .map(|section| (section, self.cards.iter().filter(|card| card.section == section).collect::<Vec<_>>()))
            .filter(|(_, cards)| !cards.is_empty())
            .collect()
    }

    pub fn find(
        &self,
        title: &str,
    ) -> Option<&PropertyCard> {
        self.cards.iter().find(|card| card.title == title)
    }

    pub fn describe(
        &self,
        title: &str,
    ) -> &'static str {
        describe(title)
    }

    pub fn mark_image_failed(
        &mut self,
        uri: &str,
    ) {
        tracing::debug!("catalog::image_failed::{}", uri);
        self.failed_images.insert(uri.to_string());
    }

    /// Where a card's image should be loaded from: the placeholder once the original failed.
    pub fn image_source<'a>(
        &self,
        uri: &'a str,
    ) -> &'a str {
        if self.failed_images.contains(uri) { PLACEHOLDER_IMAGE_URL } else { uri }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PRIME_TOWER, "Edifício premium com piscina e academia, 110m², valor R$ 550.000")]
    #[case(OCIAN, "Casa de praia com piscina, 4 suítes, 200m², valor R$ 1.200.000")]
    #[case("Casa Nova", DESCRIPTION_UNAVAILABLE)]
    #[case("", DESCRIPTION_UNAVAILABLE)]
    fn descriptions_fall_back_to_default(
        #[case] title: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(Catalog::default().describe(title), expected);
    }

    #[test]
    fn every_builtin_card_has_a_description() {
        let catalog = Catalog::default();
        for card in catalog.cards() {
            assert_ne!(catalog.describe(&card.title), DESCRIPTION_UNAVAILABLE, "{}", card.title);
        }
    }

    #[test]
    fn failed_images_switch_to_placeholder() {
        let mut catalog = Catalog::default();
        let melvi = catalog.find(MELVI).unwrap().image.clone();
        let ocian = catalog.find(OCIAN).unwrap().image.clone();

        catalog.mark_image_failed(&melvi);

        assert_eq!(catalog.image_source(&melvi), PLACEHOLDER_IMAGE_URL);
        assert_eq!(catalog.image_source(&ocian), ocian.as_str());
    }

    #[test]
    fn filters_select_sections() {
        let catalog = Catalog::default();

        let all: Vec<PropertySection> = catalog.sections(CatalogFilter::All).into_iter().map(|(s, _)| s).collect();
        assert_eq!(all, vec![PropertySection::Apartments, PropertySection::Houses]);

        let houses = catalog.sections(CatalogFilter::Houses);
        assert_eq!(houses.len(), 1);
        let titles: Vec<&str> = houses[0].1.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec![MELVI, OCIAN]);
    }

    #[test]
    fn filter_labels_round_trip() {
        for filter in CatalogFilter::ALL {
            assert_eq!(CatalogFilter::from_label(filter.label()), Some(filter));
        }
        assert_eq!(CatalogFilter::from_label("casa"), Some(CatalogFilter::Houses));
        assert_eq!(CatalogFilter::from_label("terreno"), None);
    }
}
