//! Sneaker release records and the built-in catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_iso;
use crate::error::DropCalResult;

/// A sneaker release with a fixed drop date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SneakerRecord {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub release_date: NaiveDate,
    /// Display string, e.g. "$150"
    pub price: String,
    /// Display string, e.g. "Black/White"
    pub color: String,
}

impl SneakerRecord {
    pub fn tag(&self) -> BrandTag {
        BrandTag::for_brand(&self.brand)
    }
}

/// Category tag shown next to each card, picked by brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrandTag {
    Nike,
    Adidas,
    NewBalance,
    Jordan,
    Hoka,
    Converse,
    /// Any brand without a dedicated tag.
    ShoePrints,
}

impl BrandTag {
    /// Brand names are matched exactly; anything else gets `ShoePrints`.
    pub fn for_brand(brand: &str) -> Self {
        match brand {
            "Nike" => BrandTag::Nike,
            "Adidas" => BrandTag::Adidas,
            "New Balance" => BrandTag::NewBalance,
            "Jordan" => BrandTag::Jordan,
            "Hoka" => BrandTag::Hoka,
            "Converse" => BrandTag::Converse,
            _ => BrandTag::ShoePrints,
        }
    }

    /// Font Awesome icon class used by the web catalog.
    pub fn icon_class(&self) -> &'static str {
        match self {
            BrandTag::Nike => "fa-check-circle",
            BrandTag::Adidas => "fa-star",
            BrandTag::NewBalance => "fa-balance-scale",
            BrandTag::Jordan => "fa-basketball-ball",
            BrandTag::Hoka => "fa-mountain",
            BrandTag::Converse => "fa-star-of-life",
            BrandTag::ShoePrints => "fa-shoe-prints",
        }
    }

    /// Terminal stand-in for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            BrandTag::Nike => "✔",
            BrandTag::Adidas => "★",
            BrandTag::NewBalance => "⚖",
            BrandTag::Jordan => "🏀",
            BrandTag::Hoka => "⛰",
            BrandTag::Converse => "✱",
            BrandTag::ShoePrints => "👟",
        }
    }
}

/// Literal catalog entry, validated when the catalog is built.
struct RawRecord {
    id: u32,
    name: &'static str,
    brand: &'static str,
    release_date: &'static str,
    price: &'static str,
    color: &'static str,
}

const SAMPLE_RECORDS: [RawRecord; 6] = [
    RawRecord {
        id: 1,
        name: "Nike Air Max Pulse",
        brand: "Nike",
        release_date: "2024-06-15",
        price: "$150",
        color: "Black/White",
    },
    RawRecord {
        id: 2,
        name: "Adidas Samba OG",
        brand: "Adidas",
        release_date: "2024-06-22",
        price: "$120",
        color: "Cloud White/Gum",
    },
    RawRecord {
        id: 3,
        name: "New Balance 990v6",
        brand: "New Balance",
        release_date: "2024-06-28",
        price: "$185",
        color: "Grey/Black",
    },
    RawRecord {
        id: 4,
        name: "Jordan 1 Retro High OG",
        brand: "Jordan",
        release_date: "2024-07-05",
        price: "$180",
        color: "University Blue",
    },
    RawRecord {
        id: 5,
        name: "Hoka Clifton 9",
        brand: "Hoka",
        release_date: "2024-07-12",
        price: "$145",
        color: "Ocean/Shark",
    },
    RawRecord {
        id: 6,
        name: "Converse Chuck 70",
        brand: "Converse",
        release_date: "2024-07-18",
        price: "$90",
        color: "Sunflower/Yellow",
    },
];

/// Ordered, immutable list of releases.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    records: Vec<SneakerRecord>,
}

impl Catalog {
    pub fn new(records: Vec<SneakerRecord>) -> Self {
        Catalog { records }
    }

    /// The built-in sample releases.
    pub fn sample() -> DropCalResult<Self> {
        let records = SAMPLE_RECORDS
            .iter()
            .map(|raw| {
                Ok(SneakerRecord {
                    id: raw.id,
                    name: raw.name.to_string(),
                    brand: raw.brand.to_string(),
                    release_date: parse_iso(raw.release_date)?,
                    price: raw.price.to_string(),
                    color: raw.color.to_string(),
                })
            })
            .collect::<DropCalResult<Vec<_>>>()?;

        tracing::debug!(count = records.len(), "loaded sample catalog");
        Ok(Catalog { records })
    }

    pub fn records(&self) -> &[SneakerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&SneakerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records dropping on `date`, in catalog order.
    pub fn releases_on(&self, date: NaiveDate) -> impl Iterator<Item = &SneakerRecord> {
        self.records.iter().filter(move |r| r.release_date == date)
    }

    pub fn has_release_on(&self, date: NaiveDate) -> bool {
        self.releases_on(date).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sample_catalog_loads_in_order() {
        let catalog = Catalog::sample().unwrap();
        let ids: Vec<u32> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.records()[0].name, "Nike Air Max Pulse");
        assert_eq!(catalog.records()[0].release_date, date(2024, 6, 15));
        assert_eq!(catalog.records()[5].price, "$90");
    }

    #[test]
    fn sample_ids_are_unique() {
        let catalog = Catalog::sample().unwrap();
        let ids: HashSet<u32> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_sample_brand_has_a_dedicated_tag() {
        let catalog = Catalog::sample().unwrap();
        for record in catalog.records() {
            assert_ne!(record.tag(), BrandTag::ShoePrints, "{}", record.brand);
        }
    }

    #[test]
    fn brand_tags() {
        assert_eq!(BrandTag::for_brand("Nike").icon_class(), "fa-check-circle");
        assert_eq!(BrandTag::for_brand("New Balance").icon_class(), "fa-balance-scale");
        assert_eq!(BrandTag::for_brand("Converse").icon_class(), "fa-star-of-life");
    }

    #[test]
    fn unknown_brand_falls_back_to_shoe_prints() {
        assert_eq!(BrandTag::for_brand("Asics"), BrandTag::ShoePrints);
        assert_eq!(BrandTag::for_brand("nike"), BrandTag::ShoePrints);
        assert_eq!(BrandTag::ShoePrints.icon_class(), "fa-shoe-prints");
    }

    #[test]
    fn releases_on_date() {
        let catalog = Catalog::sample().unwrap();
        let names: Vec<&str> = catalog
            .releases_on(date(2024, 6, 22))
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Adidas Samba OG"]);
        assert!(catalog.has_release_on(date(2024, 7, 18)));
        assert!(!catalog.has_release_on(date(2024, 7, 19)));
        assert!(!catalog.has_release_on(date(2025, 6, 15)));
    }

    #[test]
    fn get_by_id() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.get(4).map(|r| r.brand.as_str()), Some("Jordan"));
        assert!(catalog.get(42).is_none());
    }
}
