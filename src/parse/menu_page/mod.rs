mod course;
mod service;

use scraper::Html;

use super::labels::Service;
use super::tables::locate_tables;
use super::Error;

pub use course::{normalize_name, parse_course, CourseWeek};
pub use service::{parse_service, DayItems, ServiceWeek};

/// Monday to Friday.
pub const WEEKDAYS: usize = 5;
/// Columns every course row carries, one per day of the week.
pub const WEEK_COLUMNS: usize = 7;

/// A parsed menu page. Dinner is only present on standard price pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPage {
    pub lunch: ServiceWeek,
    pub dinner: Option<ServiceWeek>,
}

impl MenuPage {
    pub fn from_html(document: &Html, has_dinner: bool) -> Result<Self, Error> {
        let tables = locate_tables(document, if has_dinner { 2 } else { 1 })?;
        let lunch = parse_service(tables[0], Service::Lunch)?;
        let dinner = match tables.get(1) {
            Some(table) => Some(parse_service(*table, Service::Dinner)?),
            None => None,
        };
        Ok(Self { lunch, dinner })
    }

    pub fn parse(text: &str, has_dinner: bool) -> Result<Self, Error> {
        Self::from_html(&Html::parse_document(text), has_dinner)
    }
}
