use reelbox_db::{MovieEntry, format_rating};

/// A movie flattened out of a collection map, for listings and picks.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMovie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
}

impl From<(String, MovieEntry)> for RankedMovie {
    fn from((title, entry): (String, MovieEntry)) -> Self {
        Self {
            title,
            year: entry.year,
            rating: entry.rating,
        }
    }
}

impl std::fmt::Display for RankedMovie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.title,
            self.year,
            format_rating(self.rating)
        )
    }
}
