mod local;

use std::fmt::{self, Display, Formatter};
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::menu::WeekMenu;

pub use local::FileStore;

/// ISO year and week a menu belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    pub fn file_name(self) -> String {
        format!("{self}.json")
    }
}

impl Display for WeekKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.week)
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum Store {
    Local(FileStore),
    /// Keeps nothing, so every week is extracted on every run.
    AdHoc,
}

impl Store {
    #[inline]
    pub async fn local(p: impl AsRef<Path>) -> crate::Result<Self> {
        FileStore::open(p).await.map(Self::Local)
    }

    /// Whether `key` still has to be extracted: no menu is stored for it yet.
    pub async fn should_extract(&self, key: WeekKey) -> crate::Result<bool> {
        match self {
            Self::Local(f) => Ok(!f.contains(key).await?),
            Self::AdHoc => Ok(true),
        }
    }

    pub async fn load(&self, key: WeekKey) -> crate::Result<Option<WeekMenu>> {
        match self {
            Self::Local(f) => f.load(key).await,
            Self::AdHoc => Ok(None),
        }
    }

    pub async fn save(&self, key: WeekKey, menu: &WeekMenu) -> crate::Result<()> {
        match self {
            Self::Local(f) => f.save(key, menu).await,
            Self::AdHoc => Ok(()),
        }
    }
}
