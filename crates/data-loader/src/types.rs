//! Core domain types for the MovieLens dataset.
//!
//! This module defines the records loaded from disk (movies, ratings), the
//! derived per-movie statistics, and the [`DataIndex`] that holds the joined
//! data for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user (1-6040 in MovieLens 1M)
pub type UserId = u32;

/// Unique identifier for a movie (varies in MovieLens 1M)
pub type MovieId = u32;

/// Lowest value on the MovieLens rating scale
pub const MIN_RATING: u8 = 1;

/// Highest value on the MovieLens rating scale
pub const MAX_RATING: u8 = 5;

// =============================================================================
// Movie-related Types
// =============================================================================

/// Represents a movie in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Single genre, or [`GenreLabel::Multiple`] when the raw field lists several
    pub genres: GenreLabel,
    /// Where the dashboard fetches the poster image from
    pub poster_url: String,
}

/// Build the poster URL for a movie: `{images_url}/{movie_id}.jpg`
pub fn poster_url(images_url: &str, movie_id: MovieId) -> String {
    format!("{}/{}.jpg", images_url.trim_end_matches('/'), movie_id)
}

/// Movie genres from MovieLens
///
/// These are the 18 genres used in the dataset, represented as an enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Children,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    FilmNoir,
    Horror,
    Musical,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// The genre name exactly as spelled in `movies.dat`
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Children => "Children's",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::FilmNoir => "Film-Noir",
            Genre::Horror => "Horror",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Genre category shown for a movie.
///
/// A raw genre field containing `|` is collapsed into `Multiple`. A single
/// name outside the MovieLens set is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenreLabel {
    Single(Genre),
    Multiple,
    Other(String),
}

impl GenreLabel {
    pub fn as_str(&self) -> &str {
        match self {
            GenreLabel::Single(genre) => genre.as_str(),
            GenreLabel::Multiple => "Multiple",
            GenreLabel::Other(name) => name,
        }
    }
}

impl fmt::Display for GenreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Rating Type
// =============================================================================

/// Represents a single rating from a user for a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    /// Whole-star rating from 1 to 5
    pub rating: u8,
    /// Unix timestamp when rating was made
    pub timestamp: i64,
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Aggregate statistics for a movie that received at least one rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovieStats {
    pub movie_id: MovieId,
    pub num_ratings: u32,
    pub avg_rating: f64,
    /// `(avg_rating - 1) / 4`, in `[0, 1]`
    pub normalized_rating: f64,
    /// `num_ratings * normalized_rating`
    pub popularity_score: f64,
}

// =============================================================================
// DataIndex - The joined, in-memory dataset
// =============================================================================

/// Holds the movies, the ratings joined onto them, and the computed stats.
///
/// Ratings are only kept when their movie is known (inner join on MovieID);
/// the rest are counted in `orphan_ratings`.
#[derive(Debug, Default)]
pub struct DataIndex {
    pub(crate) movies: HashMap<MovieId, Movie>,
    /// All ratings received by each movie
    pub(crate) movie_ratings: HashMap<MovieId, Vec<Rating>>,
    pub(crate) movie_stats: HashMap<MovieId, MovieStats>,
    pub(crate) orphan_ratings: usize,
}

impl DataIndex {
    /// Creates a new, empty DataIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Get all joined ratings for a movie
    ///
    /// Returns an empty slice if the movie has no ratings
    pub fn get_movie_ratings(&self, movie_id: MovieId) -> &[Rating] {
        self.movie_ratings
            .get(&movie_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get computed statistics for a movie
    pub fn get_movie_stats(&self, movie_id: MovieId) -> Option<&MovieStats> {
        self.movie_stats.get(&movie_id)
    }

    /// Iterate over every loaded movie
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// Iterate over the statistics of every rated movie
    pub fn movie_stats(&self) -> impl Iterator<Item = &MovieStats> {
        self.movie_stats.values()
    }

    /// Iterate over every joined rating together with its movie
    pub fn joined_ratings(&self) -> impl Iterator<Item = (&Movie, &Rating)> {
        self.movie_ratings.iter().flat_map(move |(movie_id, ratings)| {
            self.movies
                .get(movie_id)
                .into_iter()
                .flat_map(move |movie| ratings.iter().map(move |rating| (movie, rating)))
        })
    }

    /// Number of ratings dropped because their movie was unknown
    pub fn orphan_ratings(&self) -> usize {
        self.orphan_ratings
    }

    /// Insert a movie into the index
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Join a rating onto its movie.
    ///
    /// Ratings for movies not yet inserted are dropped and counted as
    /// orphans. Returns whether the rating was joined.
    pub fn insert_rating(&mut self, rating: Rating) -> bool {
        if !self.movies.contains_key(&rating.movie_id) {
            self.orphan_ratings += 1;
            return false;
        }
        self.movie_ratings
            .entry(rating.movie_id)
            .or_default()
            .push(rating);
        true
    }

    /// Get (movie, joined rating) counts for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        let total_ratings = self.movie_ratings.values().map(|v| v.len()).sum();
        (self.movies.len(), total_ratings)
    }
}
