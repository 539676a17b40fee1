//! Mean rating per genre label.
//!
//! Movies tagged with several genres all land in the `Multiple` bucket, so
//! this is a coarse view of which single-genre movies are rated highest.

use std::collections::BTreeMap;

use data_loader::DataIndex;
use serde::Serialize;

/// Mean rating of every joined rating carrying one genre label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRating {
    pub label: String,
    pub num_ratings: u64,
    pub mean_rating: f64,
}

/// Group all joined ratings by genre label and average them
///
/// Results are ordered by label name.
pub fn genre_mean_ratings(index: &DataIndex) -> Vec<GenreRating> {
    let mut totals: BTreeMap<&str, (u64, u64)> = BTreeMap::new();

    for (movie, rating) in index.joined_ratings() {
        let entry = totals.entry(movie.genres.as_str()).or_insert((0, 0));
        entry.0 += u64::from(rating.rating);
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(label, (sum, count))| GenreRating {
            label: label.to_string(),
            num_ratings: count,
            mean_rating: sum as f64 / count as f64,
        })
        .collect()
}
