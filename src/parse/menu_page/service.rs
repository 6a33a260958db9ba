use scraper::ElementRef;

use super::course::{parse_course, CourseWeek};
use super::WEEKDAYS;
use crate::parse::labels::{Course, Service};
use crate::parse::text_from_selection::text_from_selection;
use crate::parse::Error;
use crate::static_selector;
use crate::transpose::transposed;

/// Raw dish names of one day of one service, before any price tagging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayItems {
    pub first: Vec<String>,
    pub second: Vec<String>,
    pub side: Vec<String>,
}

impl DayItems {
    pub fn course(&self, course: Course) -> &[String] {
        match course {
            Course::First => &self.first,
            Course::Second => &self.second,
            Course::Side => &self.side,
        }
    }
}

/// One service, Monday to Friday.
pub type ServiceWeek = [DayItems; WEEKDAYS];

/// Parses a service table: a title row carrying the service label, then the
/// first and second course rows and an optional side dish row.
pub fn parse_service(table: ElementRef<'_>, expected: Service) -> Result<ServiceWeek, Error> {
    static_selector!(ROW_SELECTOR <- "tr");
    static_selector!(SERVICE_TYPE_SELECTOR <- "th h5");

    let rows: Vec<_> = table.select(&ROW_SELECTOR).collect();
    if !(3..=4).contains(&rows.len()) {
        return Err(Error::WrongRowCount(rows.len()));
    }

    let service_type = text_from_selection(&SERVICE_TYPE_SELECTOR, rows[0], "service type")
        .map_err(|_| Error::MissingServiceType)?;
    if Service::from_label(&service_type) != Some(expected) {
        return Err(Error::ServiceTypeMismatch {
            found: service_type,
            expected,
        });
    }

    let first = parse_course(rows[1], Course::First)?;
    let second = parse_course(rows[2], Course::Second)?;
    let side = match rows.get(3) {
        Some(row) => parse_course(*row, Course::Side)?,
        None => CourseWeek::default(),
    };

    Ok(transposed(vec![first, second, side]).map(|courses| {
        let mut courses = courses.into_iter();
        DayItems {
            first: courses.next().unwrap_or_default(),
            second: courses.next().unwrap_or_default(),
            side: courses.next().unwrap_or_default(),
        }
    }))
}
