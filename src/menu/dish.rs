use serde::{Deserialize, Serialize};

use crate::parse::Course;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    /// Also offered at the reduced price.
    pub in_reduced: bool,
}

impl Dish {
    pub fn new(name: impl Into<String>, in_reduced: bool) -> Self {
        Self {
            name: name.into(),
            in_reduced,
        }
    }
}

/// Everything served at lunch on one weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCourses {
    pub first: Vec<Dish>,
    pub second: Vec<Dish>,
    pub side: Vec<Dish>,
}

impl DayCourses {
    pub fn course(&self, course: Course) -> &[Dish] {
        match course {
            Course::First => &self.first,
            Course::Second => &self.second,
            Course::Side => &self.side,
        }
    }

    pub fn is_empty(&self) -> bool {
        Course::ALL.iter().all(|c| self.course(*c).is_empty())
    }
}
