use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use scraper::{ElementRef, Html};

use super::text_from_selection::{first_match, inner_text};
use super::{collect, Error};
use crate::static_selector;

/// One row of the reservation table, before it is tied to a canteen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationRow {
    pub id: i64,
    pub date: NaiveDate,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
}

/// Reads every well formed row of the reservation table. A page without the
/// table yields nothing; rows that don't decompose are skipped.
pub fn parse_reservations(document: &Html) -> Vec<ReservationRow> {
    static_selector!(TABLE_SELECTOR <- "table.table.table-striped");
    static_selector!(ROW_SELECTOR <- "tbody > tr");

    let Some(table) = document.select(&TABLE_SELECTOR).next() else {
        log::debug!("reservation table not found");
        return Vec::new();
    };
    collect::lenient(table.select(&ROW_SELECTOR).map(parse_row))
}

fn parse_row(row: ElementRef<'_>) -> Result<ReservationRow, Error> {
    static_selector!(CELL_SELECTOR <- "td");
    static_selector!(BUTTON_SELECTOR <- "button[data-prenotazione]");
    static DATE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(\d{2}/\d{2}/\d{4})").expect("regex should be valid"));
    static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\((\d{1,2}:\d{2})\s*-\s*(\d{1,2}:\d{2})\)").expect("regex should be valid")
    });

    let mut cells = row.select(&CELL_SELECTOR);
    let description = cells
        .next()
        .map(inner_text)
        .ok_or(Error::MissingElement("description cell"))?;
    let action = cells.next().ok_or(Error::MissingElement("action cell"))?;

    let date = DATE_RE
        .captures(&description)
        .and_then(|c| NaiveDate::parse_from_str(&c[1], "%d/%m/%Y").ok())
        .ok_or_else(|| Error::text_error(&format!("no date in {description:?}")))?;

    let times = TIME_RE
        .captures(&description)
        .ok_or_else(|| Error::text_error(&format!("no time range in {description:?}")))?;
    let time = |s: &str| {
        NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| Error::text_error(&format!("bad time {s:?}")))
    };
    let time_from = time(&times[1])?;
    let time_to = time(&times[2])?;

    let id = first_match(&BUTTON_SELECTOR, action, "reservation button")?
        .value()
        .attr("data-prenotazione")
        .and_then(|id| id.trim().parse().ok())
        .ok_or_else(|| Error::text_error("reservation id is not an integer"))?;

    Ok(ReservationRow {
        id,
        date,
        time_from,
        time_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_skips_malformed_row() {
        let html =
            fs::read_to_string("./src/parse/html_examples/reservations/reservations.html").unwrap();
        let rows = parse_reservations(&Html::parse_document(&html));
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            ReservationRow {
                id: 48213,
                date: ymd(2024, 10, 14),
                time_from: hm(12, 0),
                time_to: hm(12, 30),
            }
        );
        assert_eq!(rows[1].id, 48250);
        assert_eq!(rows[2].date, ymd(2024, 10, 17));
        assert_eq!(rows[2].time_to, hm(13, 45));
    }

    #[test]
    fn test_missing_table_is_empty() {
        let html = Html::parse_document("<p>Nessuna prenotazione</p>");
        assert!(parse_reservations(&html).is_empty());
    }

    #[test]
    fn test_unstyled_table_is_ignored() {
        let html = Html::parse_document(
            r#"<table><tbody><tr><td>14/10/2024 Pranzo (12:00 - 12:30)</td>
               <td><button data-prenotazione="1">X</button></td></tr></tbody></table>"#,
        );
        assert!(parse_reservations(&html).is_empty());
    }

    #[test]
    fn test_row_without_button() {
        let html = Html::parse_document(
            r#"<table class="table table-striped"><tbody>
               <tr><td>14/10/2024 Pranzo (12:00 - 12:30)</td><td></td></tr>
               </tbody></table>"#,
        );
        assert!(parse_reservations(&html).is_empty());
    }

    #[test]
    fn test_non_numeric_id() {
        let html = Html::parse_document(
            r#"<table class="table table-striped"><tbody>
               <tr><td>14/10/2024 Pranzo (12:00 - 12:30)</td>
               <td><button data-prenotazione="abc">X</button></td></tr>
               </tbody></table>"#,
        );
        assert!(parse_reservations(&html).is_empty());
    }
}
