//! Validated parsing of raw user input.
//!
//! Each helper returns a [`CatalogError::Validation`] describing what was
//! wrong, so callers can reprompt without any unwinding.

use crate::error::CatalogError;

/// Highest accepted rating (IMDb scale).
pub const MAX_RATING: f64 = 10.0;

/// Trim a title and reject it if nothing is left.
pub fn normalize_title(raw: &str) -> Result<String, CatalogError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CatalogError::validation("Movie title cannot be empty."));
    }
    Ok(title.to_string())
}

/// Parse a four-digit release year.
///
/// ```
/// use reelbox_catalog::parse_year;
///
/// assert_eq!(parse_year(" 1995 ").unwrap(), 1995);
/// assert!(parse_year("nineteen").is_err());
/// assert!(parse_year("95").is_err());
/// ```
pub fn parse_year(raw: &str) -> Result<i32, CatalogError> {
    let trimmed = raw.trim();
    let year: i32 = trimmed.parse().map_err(|_| {
        CatalogError::validation(format!("Invalid year '{trimmed}'. Please enter a number."))
    })?;
    check_year(year)
}

pub(crate) fn check_year(year: i32) -> Result<i32, CatalogError> {
    if !(1000..=9999).contains(&year) {
        return Err(CatalogError::validation(format!(
            "Invalid year {year}. Expected a four-digit year."
        )));
    }
    Ok(year)
}

/// Parse a rating between 0 and [`MAX_RATING`].
pub fn parse_rating(raw: &str) -> Result<f64, CatalogError> {
    let trimmed = raw.trim();
    let rating: f64 = trimmed.parse().map_err(|_| {
        CatalogError::validation(format!("Invalid rating '{trimmed}'. Please enter a number."))
    })?;
    check_rating(rating)
}

pub(crate) fn check_rating(rating: f64) -> Result<f64, CatalogError> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(CatalogError::validation(format!(
            "Invalid rating {rating}. Expected a value between 0 and {MAX_RATING}."
        )));
    }
    Ok(rating)
}
