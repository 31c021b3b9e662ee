use std::fmt;

use serde::Serialize;

/// Badge tier awarded for a total reputation score
///
/// Variants are ordered from lowest to highest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Badge {
    Human,
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl Badge {
    /// Map a total score (0-100) to its badge
    pub fn from_total(total: u8) -> Self {
        match total {
            80..=u8::MAX => Badge::Diamond,
            60..=79 => Badge::Gold,
            40..=59 => Badge::Silver,
            20..=39 => Badge::Bronze,
            _ => Badge::Human,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::Diamond => "Diamond",
            Badge::Gold => "Gold",
            Badge::Silver => "Silver",
            Badge::Bronze => "Bronze",
            Badge::Human => "Human",
        }
    }

    /// Style hook for front-ends (e.g. `badge-diamond`)
    pub fn css_class(&self) -> String {
        format!("badge-{}", self.label().to_lowercase())
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
