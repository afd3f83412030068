//! ICS export of release dates.

use chrono::{DateTime, NaiveDate, Utc};
use icalendar::{Calendar, Component, Property, ValueType};

use crate::error::{DropCalError, DropCalResult};
use crate::sneaker::{Catalog, SneakerRecord};

/// Generate .ics content with one all-day event per release.
///
/// `stamp` becomes every event's DTSTAMP so output is reproducible.
pub fn generate_ics(catalog: &Catalog, stamp: DateTime<Utc>) -> DropCalResult<String> {
    let mut cal = Calendar::new();
    cal.name("Sneaker Drops");

    let dtstamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();

    for record in catalog.records() {
        cal.push(release_event(record, &dtstamp)?);
    }

    let cal = cal.done();
    tracing::debug!(events = catalog.len(), "generated ics");

    Ok(strip_ics_bloat(&cal.to_string()))
}

fn release_event(record: &SneakerRecord, dtstamp: &str) -> DropCalResult<icalendar::Event> {
    let end = record.release_date.succ_opt().ok_or_else(|| {
        DropCalError::IcsGenerate(format!(
            "No day after {} for '{}'",
            record.release_date, record.name
        ))
    })?;

    let mut event = icalendar::Event::new();
    event.uid(&format!("sneaker-{}@dropcal", record.id));
    event.summary(&record.name);
    event.description(&format!(
        "Brand: {}\nPrice: {}\nColor: {}",
        record.brand, record.price, record.color
    ));
    event.add_property("DTSTAMP", dtstamp);
    event.append_property(date_property("DTSTART", record.release_date));
    event.append_property(date_property("DTEND", end));
    event.add_property("TRANSP", "TRANSPARENT");

    Ok(event.done())
}

fn date_property(name: &str, date: NaiveDate) -> Property {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    prop
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with DROPCAL
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:DROPCAL\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn one_event_per_release() {
        let catalog = Catalog::sample().unwrap();
        let ics = generate_ics(&catalog, stamp()).unwrap();
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), catalog.len());
        assert!(ics.contains("UID:sneaker-1@dropcal"));
        assert!(ics.contains("SUMMARY:Nike Air Max Pulse"));
    }

    #[test]
    fn events_are_all_day() {
        let catalog = Catalog::sample().unwrap();
        let ics = generate_ics(&catalog, stamp()).unwrap();
        assert!(ics.contains("DTSTART;VALUE=DATE:20240615"));
        assert!(ics.contains("DTEND;VALUE=DATE:20240616"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20240718"));
    }

    #[test]
    fn output_is_reproducible() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(
            generate_ics(&catalog, stamp()).unwrap(),
            generate_ics(&catalog, stamp()).unwrap()
        );
        assert!(generate_ics(&catalog, stamp()).unwrap().contains("DTSTAMP:20240601T120000Z"));
    }

    #[test]
    fn strips_bloat() {
        let catalog = Catalog::sample().unwrap();
        let ics = generate_ics(&catalog, stamp()).unwrap();
        assert!(ics.contains("PRODID:DROPCAL"));
        assert!(!ics.contains("CALSCALE:GREGORIAN"));
    }

    #[test]
    fn last_representable_day_is_rejected() {
        let catalog = Catalog::new(vec![SneakerRecord {
            id: 9,
            name: "Far Future".into(),
            brand: "Nike".into(),
            release_date: NaiveDate::MAX,
            price: "$1".into(),
            color: "Void".into(),
        }]);
        assert!(matches!(generate_ics(&catalog, stamp()), Err(DropCalError::IcsGenerate(_))));
    }
}
