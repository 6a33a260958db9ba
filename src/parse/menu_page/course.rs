use scraper::ElementRef;

use super::{WEEKDAYS, WEEK_COLUMNS};
use crate::parse::labels::Course;
use crate::parse::text_from_selection::{inner_text, text_from_selection};
use crate::parse::{collect, Error};
use crate::static_selector;

/// Dish names of one course, Monday to Friday.
pub type CourseWeek = [Vec<String>; WEEKDAYS];

/// Parses one course row: a `th` title cell followed by one `td` per day of
/// the week. Saturday and Sunday cells are not read.
pub fn parse_course(row: ElementRef<'_>, expected: Course) -> Result<CourseWeek, Error> {
    static_selector!(TITLE_SELECTOR <- "th");
    static_selector!(DAY_SELECTOR <- "td");

    let title = text_from_selection(&TITLE_SELECTOR, row, "course title")
        .map_err(|_| Error::MissingCourseTitle)?;
    if Course::from_title(&title) != Some(expected) {
        return Err(Error::TitleMismatch {
            found: title,
            expected,
        });
    }

    let columns: Vec<_> = row.select(&DAY_SELECTOR).collect();
    if columns.len() != WEEK_COLUMNS {
        return Err(Error::WrongWeekdayColumnCount(columns.len()));
    }

    let days = collect::strict(
        columns
            .into_iter()
            .take(WEEKDAYS)
            .enumerate()
            .map(|(day, cell)| parse_day(cell).map_err(|e| Error::malformed_dish(day, e))),
    )?;
    CourseWeek::try_from(days).map_err(|days| Error::WrongWeekdayColumnCount(days.len()))
}

fn parse_day(cell: ElementRef<'_>) -> Result<Vec<String>, Error> {
    static_selector!(ITEM_SELECTOR <- "p");
    static_selector!(NAME_SELECTOR <- "a");
    collect::strict(cell.select(&ITEM_SELECTOR).map(|item| -> Result<String, Error> {
        let link = item
            .select(&NAME_SELECTOR)
            .next()
            .ok_or(Error::MissingElement("dish link"))?;
        Ok(normalize_name(&inner_text(link)))
    }))
}

/// Trims and capitalizes a dish name: first letter upper case, rest lower case.
pub fn normalize_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
