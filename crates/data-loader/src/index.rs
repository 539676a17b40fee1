//! DataIndex building and aggregation.
//!
//! Loading happens in three steps:
//! - parse both files (in parallel with rayon)
//! - join ratings onto movies by MovieID
//! - compute per-movie statistics (count, mean, popularity)

use crate::error::Result;
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

impl DataIndex {
    /// Load the MovieLens movies and ratings from a directory
    ///
    /// This is the main entry point for loading data. `images_url` is the
    /// URL prefix that poster links are built from.
    pub fn load_from_files(data_dir: &Path, images_url: &str) -> Result<Self> {
        info!("Loading MovieLens dataset from {:?}", data_dir);

        let movies_path = data_dir.join("movies.dat");
        let ratings_path = data_dir.join("ratings.dat");

        let (movies, ratings) = rayon::join(
            || parser::parse_movies(&movies_path, images_url),
            || parser::parse_ratings(&ratings_path),
        );
        let movies = movies?;
        let ratings = ratings?;

        info!("Parsed {} movies, {} ratings", movies.len(), ratings.len());

        let index = Self::from_records(movies, ratings);

        if index.orphan_ratings > 0 {
            warn!(
                "Dropped {} ratings that reference unknown movies",
                index.orphan_ratings
            );
        }
        info!(
            "DataIndex built: {} movies, {} rated",
            index.movies.len(),
            index.movie_stats.len()
        );
        Ok(index)
    }

    /// Build an index from already-parsed records
    ///
    /// Movies are inserted first so every rating can be joined.
    pub fn from_records(movies: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        let mut index = DataIndex::new();

        for movie in movies {
            index.insert_movie(movie);
        }
        for rating in ratings {
            index.insert_rating(rating);
        }

        index.compute_movie_stats();
        index
    }

    /// Compute aggregate statistics for every rated movie
    ///
    /// Movies without any joined rating get no entry.
    pub fn compute_movie_stats(&mut self) {
        self.movie_stats = self
            .movie_ratings
            .par_iter()
            .filter_map(|(&movie_id, ratings)| {
                movie_stats_from_ratings(movie_id, ratings).map(|stats| (movie_id, stats))
            })
            .collect();

        debug!("Computed stats for {} movies", self.movie_stats.len());
    }
}

/// Aggregate one movie's ratings into [`MovieStats`]
fn movie_stats_from_ratings(movie_id: MovieId, ratings: &[Rating]) -> Option<MovieStats> {
    if ratings.is_empty() {
        return None;
    }
    let num_ratings = ratings.len() as u32;
    let total: u64 = ratings.iter().map(|r| u64::from(r.rating)).sum();
    let avg_rating = total as f64 / f64::from(num_ratings);
    let normalized_rating = normalize_rating(avg_rating);

    Some(MovieStats {
        movie_id,
        num_ratings,
        avg_rating,
        normalized_rating,
        popularity_score: compute_popularity_score(num_ratings, normalized_rating),
    })
}

/// Map a mean rating on the 1-5 scale onto `[0, 1]`
pub fn normalize_rating(avg_rating: f64) -> f64 {
    let min = f64::from(MIN_RATING);
    let max = f64::from(MAX_RATING);
    (avg_rating - min) / (max - min)
}

/// Popularity rewards both many ratings and high ratings:
/// `num_ratings * normalized_rating`
pub fn compute_popularity_score(num_ratings: u32, normalized_rating: f64) -> f64 {
    f64::from(num_ratings) * normalized_rating
}
