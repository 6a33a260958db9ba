use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{DayCourses, Dish};
use crate::parse::{Course, Error, ServiceWeek, WEEKDAYS};

/// Lunch menu of one week, Monday (index 0) to Friday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekMenu([DayCourses; WEEKDAYS]);

impl WeekMenu {
    pub const fn new(days: [DayCourses; WEEKDAYS]) -> Self {
        Self(days)
    }

    pub const fn days(&self) -> &[DayCourses; WEEKDAYS] {
        &self.0
    }

    /// The menu of `date`'s weekday, `None` on weekends. The week itself is
    /// not checked.
    pub fn for_date(&self, date: NaiveDate) -> Option<&DayCourses> {
        let weekday = date.weekday().num_days_from_monday() as usize;
        self.0.get(weekday)
    }
}

/// Tags every standard lunch dish that is also sold at the reduced price.
///
/// The reduced page lists at most one alternative per day and course, so a
/// first or second dish qualifies only when it equals that day's first reduced
/// entry. Side dishes always qualify.
pub fn reconcile(standard: &ServiceWeek, reduced: &ServiceWeek) -> Result<WeekMenu, Error> {
    let mut days: [DayCourses; WEEKDAYS] = Default::default();
    for (day, (out, (standard, reduced))) in days
        .iter_mut()
        .zip(standard.iter().zip(reduced))
        .enumerate()
    {
        let tag = |course: Course| -> Result<Vec<Dish>, Error> {
            let dishes = standard.course(course);
            if dishes.is_empty() {
                return Ok(Vec::new());
            }
            let alternative = reduced
                .course(course)
                .first()
                .ok_or(Error::MissingReducedAlternative { day, course })?;
            Ok(dishes
                .iter()
                .map(|name| Dish::new(name.as_str(), name == alternative))
                .collect())
        };
        out.first = tag(Course::First)?;
        out.second = tag(Course::Second)?;
        out.side = standard
            .side
            .iter()
            .map(|name| Dish::new(name.as_str(), true))
            .collect();
    }
    Ok(WeekMenu(days))
}
