//! Row types returned by the store.

use std::collections::BTreeMap;

/// Primary key of a row in the `users` table.
pub type UserId = i64;

/// A registered collection owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// The mutable-by-rating part of a movie, keyed by title in [`MovieMap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovieEntry {
    pub year: i32,
    pub rating: f64,
}

/// One user's collection: title -> year/rating.
///
/// Titles are unique per user (enforced by the `movies` table), so keying
/// by title never collides.
pub type MovieMap = BTreeMap<String, MovieEntry>;

/// Format a rating with at least one decimal place (`8.0`, `7.25`).
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        rating.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating_keeps_a_decimal() {
        assert_eq!(format_rating(8.0), "8.0");
        assert_eq!(format_rating(0.0), "0.0");
        assert_eq!(format_rating(10.0), "10.0");
        assert_eq!(format_rating(8.8), "8.8");
        assert_eq!(format_rating(7.25), "7.25");
    }
}
