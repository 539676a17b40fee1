//! Popularity ranking over the computed movie statistics.

use std::cmp::Ordering;

use data_loader::{DataIndex, MovieId, MovieStats};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Number of movies shown on the dashboard unless configured otherwise
pub const DEFAULT_TOP_N: usize = 10;

/// One row of the popularity ranking: stats joined back onto the movie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularMovie {
    /// 1-based position in the ranking
    pub rank: usize,
    pub movie_id: MovieId,
    pub title: String,
    pub poster_url: String,
    pub num_ratings: u32,
    pub avg_rating: f64,
    pub popularity_score: f64,
}

/// Ranks movies by popularity score and keeps the top `limit`.
#[derive(Debug, Clone, Copy)]
pub struct PopularityRanker {
    limit: usize,
}

impl PopularityRanker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rank every rated movie in the index
    pub fn rank(&self, index: &DataIndex) -> Vec<PopularMovie> {
        top_popular(index, self.limit)
    }
}

impl Default for PopularityRanker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

/// Order stats by popularity score, highest first.
///
/// Equal scores fall back to ascending MovieID.
fn by_popularity(a: &MovieStats, b: &MovieStats) -> Ordering {
    b.popularity_score
        .total_cmp(&a.popularity_score)
        .then_with(|| a.movie_id.cmp(&b.movie_id))
}

/// Sort all rated movies by popularity and return the first `n`
///
/// Stats whose movie record is missing are skipped; `DataIndex` never
/// produces those, but an index built by hand could.
pub fn top_popular(index: &DataIndex, n: usize) -> Vec<PopularMovie> {
    let mut stats: Vec<&MovieStats> = index.movie_stats().collect();
    stats.par_sort_unstable_by(|a, b| by_popularity(a, b));

    let top: Vec<PopularMovie> = stats
        .into_iter()
        .filter_map(|stats| {
            index.get_movie(stats.movie_id).map(|movie| (movie, stats))
        })
        .take(n)
        .enumerate()
        .map(|(i, (movie, stats))| PopularMovie {
            rank: i + 1,
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.poster_url.clone(),
            num_ratings: stats.num_ratings,
            avg_rating: stats.avg_rating,
            popularity_score: stats.popularity_score,
        })
        .collect();

    debug!("Ranked top {} of {} rated movies", top.len(), index.movie_stats().count());
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Genre, GenreLabel, Movie, Rating, poster_url};

    fn index_with(ratings_per_movie: &[(MovieId, Vec<u8>)]) -> DataIndex {
        let movies = ratings_per_movie
            .iter()
            .map(|(id, _)| Movie {
                id: *id,
                title: format!("Movie {}", id),
                genres: GenreLabel::Single(Genre::Comedy),
                poster_url: poster_url("/assets", *id),
            })
            .collect();
        let ratings = ratings_per_movie
            .iter()
            .flat_map(|(movie_id, values)| {
                let movie_id = *movie_id;
                values.iter().enumerate().map(move |(user, &rating)| Rating {
                    user_id: user as u32 + 1,
                    movie_id,
                    rating,
                    timestamp: 0,
                })
            })
            .collect();
        DataIndex::from_records(movies, ratings)
    }

    #[test]
    fn test_orders_by_score_descending() {
        // scores: movie 1 = 1.0, movie 2 = 3.0, movie 3 = 2.0
        let index = index_with(&[(1, vec![5]), (2, vec![5, 5, 5]), (3, vec![5, 5, 1])]);

        let top = top_popular(&index, 10);
        let ids: Vec<MovieId> = top.iter().map(|m| m.movie_id).collect();

        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[2].rank, 3);
        assert!((top[1].popularity_score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_truncates_to_limit() {
        let index = index_with(&[(1, vec![5]), (2, vec![4]), (3, vec![3]), (4, vec![2])]);

        assert_eq!(top_popular(&index, 2).len(), 2);
        assert_eq!(PopularityRanker::new(3).rank(&index).len(), 3);
        assert!(top_popular(&index, 0).is_empty());
    }

    #[test]
    fn test_ties_break_by_movie_id() {
        let index = index_with(&[(30, vec![5]), (10, vec![5]), (20, vec![5])]);

        let ids: Vec<MovieId> = top_popular(&index, 10).iter().map(|m| m.movie_id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_all_one_star_movies_score_zero() {
        let index = index_with(&[(1, vec![1, 1, 1])]);

        let top = top_popular(&index, 10);
        assert_eq!(top[0].popularity_score, 0.0);
        assert_eq!(top[0].avg_rating, 1.0);
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(PopularityRanker::default().limit(), DEFAULT_TOP_N);
    }
}
