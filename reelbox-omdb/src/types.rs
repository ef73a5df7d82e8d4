use serde::Deserialize;

use crate::error::FetchError;

/// Raw response from `?t=<title>` lookups. OMDb returns strings for everything.
#[derive(Debug, Deserialize)]
pub struct OmdbResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
}

/// Canonical title, year and rating for a movie, normalized from OMDb.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieMetadata {
    pub title: String,
    pub year: i32,
    pub rating: f64,
}

impl MovieMetadata {
    /// Decode a response body for the movie that was asked for as `query`.
    pub fn from_json(query: &str, body: &str) -> Result<Self, FetchError> {
        let resp: OmdbResponse = serde_json::from_str(body)?;
        Self::from_response(query, resp)
    }

    pub fn from_response(query: &str, resp: OmdbResponse) -> Result<Self, FetchError> {
        if resp.response != "True" {
            return match resp.error {
                Some(msg) if !msg.contains("not found") => Err(FetchError::Api(msg)),
                _ => Err(FetchError::NotFound(query.to_string())),
            };
        }

        let title = resp
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| FetchError::parse("response has no Title"))?;
        let year_str = resp
            .year
            .ok_or_else(|| FetchError::parse("response has no Year"))?;

        Ok(Self {
            year: parse_year(&year_str)?,
            rating: parse_rating(resp.imdb_rating.as_deref()),
            title,
        })
    }
}

/// Leading four-digit year of an OMDb `Year` field.
///
/// Series come back as ranges such as `2010–2015` or `2010–`; only the
/// start year is kept.
///
/// ```
/// use reelbox_omdb::parse_year;
///
/// assert_eq!(parse_year("2010").unwrap(), 2010);
/// assert_eq!(parse_year("2010–2015").unwrap(), 2010);
/// assert!(parse_year("N/A").is_err());
/// ```
pub fn parse_year(raw: &str) -> Result<i32, FetchError> {
    let leading: String = raw.trim().chars().take(4).collect();
    if leading.len() != 4 || !leading.chars().all(|c| c.is_ascii_digit()) {
        return Err(FetchError::parse(format!("invalid year '{raw}'")));
    }
    leading
        .parse()
        .map_err(|_| FetchError::parse(format!("invalid year '{raw}'")))
}

/// IMDb rating as a number; `N/A`, blank or missing become `0.0`.
pub fn parse_rating(raw: Option<&str>) -> f64 {
    let Some(raw) = raw.map(str::trim) else {
        return 0.0;
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case("N/A") {
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(r) if r.is_finite() && r >= 0.0 => r,
        _ => {
            log::warn!("Unrecognized imdbRating '{raw}', using 0.0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_ranges() {
        assert_eq!(parse_year("1999").unwrap(), 1999);
        assert_eq!(parse_year("2010–2015").unwrap(), 2010);
        assert_eq!(parse_year("2010-2015").unwrap(), 2010);
        assert_eq!(parse_year("2019–").unwrap(), 2019);
    }

    #[test]
    fn test_parse_year_rejects_garbage() {
        assert!(parse_year("").is_err());
        assert!(parse_year("99").is_err());
        assert!(parse_year("N/A").is_err());
        assert!(parse_year("19x9").is_err());
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(Some("8.8")), 8.8);
        assert_eq!(parse_rating(Some("N/A")), 0.0);
        assert_eq!(parse_rating(Some("")), 0.0);
        assert_eq!(parse_rating(None), 0.0);
        assert_eq!(parse_rating(Some("unrated")), 0.0);
    }

    #[test]
    fn test_from_json_found() {
        let body = r#"{"Title":"Inception","Year":"2010","imdbRating":"8.8","Response":"True"}"#;
        let meta = MovieMetadata::from_json("inception", body).unwrap();
        assert_eq!(
            meta,
            MovieMetadata {
                title: "Inception".to_string(),
                year: 2010,
                rating: 8.8,
            }
        );
    }

    #[test]
    fn test_from_json_series_without_rating() {
        let body = r#"{"Title":"Some Show","Year":"2010–2015","imdbRating":"N/A","Response":"True"}"#;
        let meta = MovieMetadata::from_json("some show", body).unwrap();
        assert_eq!(meta.year, 2010);
        assert_eq!(meta.rating, 0.0);
    }

    #[test]
    fn test_from_json_not_found() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let err = MovieMetadata::from_json("asdfgh", body).unwrap_err();
        assert!(matches!(err, FetchError::NotFound(ref q) if q == "asdfgh"));
    }

    #[test]
    fn test_from_json_api_error() {
        let body = r#"{"Response":"False","Error":"Invalid API key!"}"#;
        let err = MovieMetadata::from_json("heat", body).unwrap_err();
        assert!(matches!(err, FetchError::Api(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            MovieMetadata::from_json("heat", "<html>"),
            Err(FetchError::Json(_))
        ));
        let body = r#"{"Title":"Heat","Response":"True"}"#;
        assert!(matches!(
            MovieMetadata::from_json("heat", body),
            Err(FetchError::Parse(_))
        ));
    }
}
