//! # Data Loader Crate
//!
//! Loads the MovieLens 1M movies and ratings, joins them on MovieID and
//! computes per-movie rating statistics.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Rating, MovieStats, DataIndex)
//! - **parser**: Parse .dat files into Rust structs
//! - **index**: Join ratings onto movies and aggregate them
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataIndex;
//! use std::path::Path;
//!
//! let index = DataIndex::load_from_files(Path::new("ml-1m"), "/assets")?;
//!
//! let stats = index.get_movie_stats(2858).unwrap();
//! println!("{} ratings, mean {:.2}", stats.num_ratings, stats.avg_rating);
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod types;

pub use error::{DataLoadError, Result};
pub use index::{compute_popularity_score, normalize_rating};
pub use types::{
    DataIndex, Genre, GenreLabel, MAX_RATING, MIN_RATING, Movie, MovieId, MovieStats, Rating,
    UserId, poster_url,
};
