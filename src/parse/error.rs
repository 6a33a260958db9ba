use std::fmt::Display;

use super::labels::{Course, Service};

/// A structural invariant of a portal page was violated.
#[derive(Debug)]
pub enum Error {
    WrongTableCount { expected: usize, found: usize },
    WrongRowCount(usize),
    MissingServiceType,
    ServiceTypeMismatch { found: String, expected: Service },
    MissingCourseTitle,
    TitleMismatch { found: String, expected: Course },
    WrongWeekdayColumnCount(usize),
    /// A dish cell on weekday `day` (0 = Monday) did not yield a name.
    MalformedDish { day: usize, cause: Box<Error> },
    MissingElement(&'static str),
    /// The reduced page offers nothing for a day/course the standard page fills.
    MissingReducedAlternative { day: usize, course: Course },
    Text(String),
}

impl Error {
    pub fn malformed_dish(day: usize, cause: Self) -> Self {
        Self::MalformedDish {
            day,
            cause: Box::new(cause),
        }
    }

    pub fn text_error(msg: &str) -> Self {
        Self::Text(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongTableCount { expected, found } => {
                write!(f, "wrong table count: expected {expected}, found {found}")
            }
            Self::WrongRowCount(n) => write!(f, "wrong row count: {n} (expected 3 or 4)"),
            Self::MissingServiceType => write!(f, "missing service type"),
            Self::ServiceTypeMismatch { found, expected } => write!(
                f,
                "service type mismatch ({found:?} != {:?})",
                expected.label()
            ),
            Self::MissingCourseTitle => write!(f, "missing course title"),
            Self::TitleMismatch { found, expected } => {
                write!(f, "title mismatch ({found:?} != {:?})", expected.title())
            }
            Self::WrongWeekdayColumnCount(n) => {
                write!(f, "wrong weekday column count: {n} (expected 7)")
            }
            Self::MalformedDish { day, .. } => write!(f, "malformed dish entry on day {day}"),
            Self::MissingElement(what) => write!(f, "missing {what}"),
            Self::MissingReducedAlternative { day, course } => write!(
                f,
                "no reduced alternative for {} on day {day}",
                course.title()
            ),
            Self::Text(msg) => write!(f, "unreadable text: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedDish { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
