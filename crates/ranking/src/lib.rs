//! Popularity ranking for the movie dashboard.
//!
//! This crate provides:
//! - `PopularityRanker` / `top_popular` for the top-N list
//! - `genre_mean_ratings` for the per-genre-label summary
//!
//! ## Example Usage
//! ```ignore
//! use ranking::PopularityRanker;
//!
//! let index = DataIndex::load_from_files(Path::new("ml-1m"), "/assets")?;
//! for movie in PopularityRanker::default().rank(&index) {
//!     println!("{}. {} ({:.2})", movie.rank, movie.title, movie.popularity_score);
//! }
//! ```

pub mod genres;
pub mod popularity;

pub use genres::{GenreRating, genre_mean_ratings};
pub use popularity::{DEFAULT_TOP_N, PopularMovie, PopularityRanker, top_popular};
