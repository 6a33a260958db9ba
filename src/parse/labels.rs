//! Literal labels the portal prints on its menu tables. Matching is exact and
//! case-sensitive.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Service {
    Lunch,
    Dinner,
}

impl Service {
    pub const ALL: [Self; 2] = [Self::Lunch, Self::Dinner];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lunch => "Pranzo",
            Self::Dinner => "Cena",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    First,
    Second,
    Side,
}

impl Course {
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Side];

    pub const fn title(self) -> &'static str {
        match self {
            Self::First => "Primi Piatti",
            Self::Second => "Secondi Piatti",
            Self::Side => "Contorni",
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.title() == title)
    }
}
