//! Aggregate rating statistics over one collection.

use reelbox_db::MovieMap;

/// Summary of a collection's ratings.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub average: f64,
    pub median: f64,
    /// Every `(title, rating)` tying the highest rating.
    pub best: Vec<(String, f64)>,
    /// Every `(title, rating)` tying the lowest rating.
    pub worst: Vec<(String, f64)>,
}

/// Compute statistics for a collection, or `None` if it is empty.
pub fn compute_stats(movies: &MovieMap) -> Option<Stats> {
    if movies.is_empty() {
        return None;
    }

    let mut ratings: Vec<f64> = movies.values().map(|m| m.rating).collect();
    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;

    ratings.sort_by(f64::total_cmp);
    let mid = ratings.len() / 2;
    let median = if ratings.len() % 2 == 1 {
        ratings[mid]
    } else {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    };

    let lowest = ratings[0];
    let highest = ratings[ratings.len() - 1];

    Some(Stats {
        average,
        median,
        best: tied_at(movies, highest),
        worst: tied_at(movies, lowest),
    })
}

fn tied_at(movies: &MovieMap, rating: f64) -> Vec<(String, f64)> {
    movies
        .iter()
        .filter(|(_, m)| m.rating == rating)
        .map(|(title, m)| (title.clone(), m.rating))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelbox_db::MovieEntry;

    fn map(entries: &[(&str, f64)]) -> MovieMap {
        entries
            .iter()
            .map(|(title, rating)| {
                (
                    title.to_string(),
                    MovieEntry {
                        year: 2000,
                        rating: *rating,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_collection_has_no_stats() {
        assert!(compute_stats(&MovieMap::new()).is_none());
    }

    #[test]
    fn test_single_movie_is_best_and_worst() {
        let stats = compute_stats(&map(&[("Heat", 8.3)])).unwrap();
        assert_eq!(stats.average, 8.3);
        assert_eq!(stats.median, 8.3);
        assert_eq!(stats.best, vec![("Heat".to_string(), 8.3)]);
        assert_eq!(stats.worst, vec![("Heat".to_string(), 8.3)]);
    }

    #[test]
    fn test_all_tied_reports_everything() {
        let stats = compute_stats(&map(&[("A", 5.0), ("B", 5.0), ("C", 5.0)])).unwrap();
        assert_eq!(stats.best.len(), 3);
        assert_eq!(stats.worst.len(), 3);
    }
}
