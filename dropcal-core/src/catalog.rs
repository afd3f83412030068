//! Catalog render pass: one display card per release.

use chrono::NaiveDate;
use serde::Serialize;

use crate::clock::Now;
use crate::countdown::{Countdown, CountdownMode};
use crate::date::format_long;
use crate::sneaker::{BrandTag, Catalog, SneakerRecord};

/// Everything a front end needs to draw one release.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SneakerCard {
    pub id: u32,
    pub brand: String,
    pub name: String,
    pub release_date: NaiveDate,
    /// e.g. "June 15, 2024"
    pub release_label: String,
    pub countdown: Countdown,
    pub countdown_label: String,
    pub tag: BrandTag,
    pub price: String,
    pub color: String,
}

impl SneakerCard {
    pub fn from_record(record: &SneakerRecord, now: &Now, mode: CountdownMode) -> Self {
        let countdown = Countdown::compute(record.release_date, now, mode);
        SneakerCard {
            id: record.id,
            brand: record.brand.clone(),
            name: record.name.clone(),
            release_date: record.release_date,
            release_label: format_long(record.release_date),
            countdown,
            countdown_label: countdown.to_string(),
            tag: record.tag(),
            price: record.price.clone(),
            color: record.color.clone(),
        }
    }
}

/// Build a fresh set of cards, in catalog order.
pub fn render_catalog(catalog: &Catalog, now: &Now, mode: CountdownMode) -> Vec<SneakerCard> {
    tracing::debug!(today = %now.today, ?mode, "rendering catalog");
    catalog
        .records()
        .iter()
        .map(|record| SneakerCard::from_record(record, now, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now(y: i32, m: u32, d: u32) -> Now {
        Now::on(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn one_card_per_record_in_order() {
        let catalog = Catalog::sample().unwrap();
        let cards = render_catalog(&catalog, &now(2024, 6, 10), CountdownMode::default());
        assert_eq!(cards.len(), catalog.len());
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Nike Air Max Pulse",
                "Adidas Samba OG",
                "New Balance 990v6",
                "Jordan 1 Retro High OG",
                "Hoka Clifton 9",
                "Converse Chuck 70",
            ]
        );
    }

    #[test]
    fn card_fields() {
        let catalog = Catalog::sample().unwrap();
        let cards = render_catalog(&catalog, &now(2024, 6, 10), CountdownMode::default());
        let first = &cards[0];
        assert_eq!(first.brand, "Nike");
        assert_eq!(first.release_label, "June 15, 2024");
        assert_eq!(first.countdown_label, "Drops in 5 days");
        assert_eq!(first.tag, BrandTag::Nike);
        assert_eq!(first.price, "$150");
        assert_eq!(first.color, "Black/White");
    }

    #[test]
    fn release_labels_use_full_month_names() {
        let catalog = Catalog::sample().unwrap();
        let cards = render_catalog(&catalog, &now(2024, 6, 10), CountdownMode::default());
        let labels: Vec<&str> = cards.iter().map(|c| c.release_label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "June 15, 2024",
                "June 22, 2024",
                "June 28, 2024",
                "July 5, 2024",
                "July 12, 2024",
                "July 18, 2024",
            ]
        );
    }

    #[test]
    fn countdowns_on_a_drop_day() {
        let catalog = Catalog::sample().unwrap();
        let cards = render_catalog(&catalog, &now(2024, 6, 22), CountdownMode::default());
        assert_eq!(cards[0].countdown, Countdown::Released);
        assert_eq!(cards[1].countdown, Countdown::Today);
        assert_eq!(cards[2].countdown_label, "Drops in 6 days");
    }

    #[test]
    fn rendering_is_idempotent() {
        let catalog = Catalog::sample().unwrap();
        let today = now(2024, 7, 1);
        assert_eq!(
            render_catalog(&catalog, &today, CountdownMode::default()),
            render_catalog(&catalog, &today, CountdownMode::default())
        );
    }
}
