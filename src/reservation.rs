use chrono::{NaiveDate, NaiveTime};
use scraper::Html;
use serde::Serialize;

use crate::fetch::Portal;
use crate::parse::{parse_reservations, ReservationRow};

/// Canteens that take table reservations, by portal id.
pub const CANTEENS: [(u32, &str); 4] = [
    (1, "T. Gar"),
    (3, "Mesiano"),
    (4, "Povo 0"),
    (5, "Povo 1"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub id: i64,
    pub canteen: String,
    pub date: NaiveDate,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
}

impl Reservation {
    pub fn from_row(row: ReservationRow, canteen: &str) -> Self {
        Self {
            id: row.id,
            canteen: canteen.to_owned(),
            date: row.date,
            time_from: row.time_from,
            time_to: row.time_to,
        }
    }

    /// What the barcode shown at the canteen encodes.
    pub fn barcode_payload(&self) -> String {
        format!("PP-{}", self.id)
    }
}

/// Reservations held at one canteen. Any failure just means none are listed.
pub async fn canteen_reservations(portal: &Portal, canteen: u32, label: &str) -> Vec<Reservation> {
    let page = match portal.reservations_page(canteen).await {
        Ok(page) => page,
        Err(e) => {
            log::warn!("No reservations for {label}: {}", e.chain());
            return Vec::new();
        }
    };
    parse_reservations(&Html::parse_document(&page))
        .into_iter()
        .map(|row| Reservation::from_row(row, label))
        .collect()
}

/// Reservations across every canteen, fetched one canteen after the other.
pub async fn list_reservations(portal: &Portal) -> Vec<Reservation> {
    let mut reservations = Vec::new();
    for (canteen, label) in CANTEENS {
        let found = canteen_reservations(portal, canteen, label).await;
        log::debug!("{} reservations at {label}", found.len());
        reservations.extend(found);
    }
    reservations
}
