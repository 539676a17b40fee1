//! Parser for MovieLens data files.
//!
//! Both files are `::`-delimited with no header row:
//! - movies.dat: movieId::title::genres
//! - ratings.dat: userId::movieId::rating::timestamp
//!
//! The file-level functions read the whole file and hand the text to the
//! `*_str` variants, which do the actual parsing.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::{FromStr, Split};
use tracing::warn;

const MOVIES_FILE: &str = "movies.dat";
const RATINGS_FILE: &str = "ratings.dat";
const FIELD_SEPARATOR: &str = "::";

/// Read a file with ISO-8859-1 encoding (Latin-1)
///
/// The MovieLens dataset uses ISO-8859-1, not UTF-8. Every Latin-1 byte maps
/// directly to the Unicode code point with the same value.
fn read_latin1(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| DataLoadError::FileNotFound {
        path: path.display().to_string(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Pull the next `::`-separated field off a line
fn next_field<'a>(
    parts: &mut Split<'a, &'static str>,
    file: &str,
    line: usize,
    name: &str,
) -> Result<&'a str> {
    parts.next().ok_or_else(|| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Missing {}", name),
    })
}

/// Parse a numeric field, reporting the field name on failure
fn parse_number<T>(value: &str, file: &str, line: usize, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {}", name, e),
    })
}

/// Iterate over non-empty lines with their 1-based line numbers
fn records(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse the movies.dat file
///
/// Posters are addressed relative to `images_url`, e.g. `/assets/1.jpg`.
pub fn parse_movies(path: &Path, images_url: &str) -> Result<Vec<Movie>> {
    let content = read_latin1(path)?;
    parse_movies_str(&content, images_url)
}

/// Parse movies.dat contents
///
/// Format: movieId::title::genres
///
/// Genres are pipe-separated: "Animation|Children's|Comedy". Any field
/// containing `|` gets the [`GenreLabel::Multiple`] label.
pub fn parse_movies_str(content: &str, images_url: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for (line_no, line) in records(content) {
        let mut parts = line.split(FIELD_SEPARATOR);

        let movie_id = next_field(&mut parts, MOVIES_FILE, line_no, "movieId")?;
        let title = next_field(&mut parts, MOVIES_FILE, line_no, "title")?;
        let genres_str = next_field(&mut parts, MOVIES_FILE, line_no, "genres")?;

        let id: MovieId = parse_number(movie_id, MOVIES_FILE, line_no, "movieId")?;

        movies.push(Movie {
            id,
            title: title.to_string(),
            genres: genre_label(genres_str, line_no),
            poster_url: poster_url(images_url, id),
        });
    }

    Ok(movies)
}

/// Parse the ratings.dat file
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    let content = read_latin1(path)?;
    parse_ratings_str(&content)
}

/// Parse ratings.dat contents
///
/// Format: userId::movieId::rating::timestamp
pub fn parse_ratings_str(content: &str) -> Result<Vec<Rating>> {
    let mut ratings = Vec::new();

    for (line_no, line) in records(content) {
        let mut parts = line.split(FIELD_SEPARATOR);

        let user_id = next_field(&mut parts, RATINGS_FILE, line_no, "userId")?;
        let movie_id = next_field(&mut parts, RATINGS_FILE, line_no, "movieId")?;
        let rating_value = next_field(&mut parts, RATINGS_FILE, line_no, "rating")?;
        let timestamp = next_field(&mut parts, RATINGS_FILE, line_no, "timestamp")?;

        let rating: u8 = parse_number(rating_value, RATINGS_FILE, line_no, "rating")?;
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(DataLoadError::ParseError {
                file: RATINGS_FILE.to_string(),
                line: line_no,
                reason: format!(
                    "Rating {} outside {}..={}",
                    rating, MIN_RATING, MAX_RATING
                ),
            });
        }

        ratings.push(Rating {
            user_id: parse_number(user_id, RATINGS_FILE, line_no, "userId")?,
            movie_id: parse_number(movie_id, RATINGS_FILE, line_no, "movieId")?,
            rating,
            timestamp: parse_number(timestamp, RATINGS_FILE, line_no, "timestamp")?,
        });
    }

    Ok(ratings)
}

/// Parse a genre string into Genre enum
///
/// Example: "Action" -> Ok(Genre::Action)
///          "Sci-Fi" -> Ok(Genre::SciFi)
fn parse_genre(s: &str) -> Result<Genre> {
    match s {
        "Action" => Ok(Genre::Action),
        "Adventure" => Ok(Genre::Adventure),
        "Animation" => Ok(Genre::Animation),
        "Children's" => Ok(Genre::Children),
        "Comedy" => Ok(Genre::Comedy),
        "Crime" => Ok(Genre::Crime),
        "Documentary" => Ok(Genre::Documentary),
        "Drama" => Ok(Genre::Drama),
        "Fantasy" => Ok(Genre::Fantasy),
        "Film-Noir" => Ok(Genre::FilmNoir),
        "Horror" => Ok(Genre::Horror),
        "Musical" => Ok(Genre::Musical),
        "Mystery" => Ok(Genre::Mystery),
        "Romance" => Ok(Genre::Romance),
        "Sci-Fi" => Ok(Genre::SciFi),
        "Thriller" => Ok(Genre::Thriller),
        "War" => Ok(Genre::War),
        "Western" => Ok(Genre::Western),
        _ => Err(DataLoadError::InvalidValue {
            field: "genre".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Label a raw genre field
///
/// Example: "Action|Adventure" -> GenreLabel::Multiple
///          "Sci-Fi"           -> GenreLabel::Single(Genre::SciFi)
///          "IMAX"             -> GenreLabel::Other("IMAX")
fn genre_label(raw: &str, line: usize) -> GenreLabel {
    if raw.contains('|') {
        return GenreLabel::Multiple;
    }
    let name = raw.trim();
    match parse_genre(name) {
        Ok(genre) => GenreLabel::Single(genre),
        Err(_) => {
            warn!("Unknown genre {:?} at line {} in {}", name, line, MOVIES_FILE);
            GenreLabel::Other(name.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genre() {
        assert!(matches!(parse_genre("Action").unwrap(), Genre::Action));
        assert!(matches!(parse_genre("Children's").unwrap(), Genre::Children));
        assert!(parse_genre("Cooking").is_err());
    }

    #[test]
    fn test_parse_movies_collapses_multiple_genres() {
        let content = "1::Toy Story (1995)::Animation|Children's|Comedy\n\
                       2::Heat (1995)::Action\n";
        let movies = parse_movies_str(content, "/assets").unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].genres, GenreLabel::Multiple);
        assert_eq!(movies[0].poster_url, "/assets/1.jpg");
        assert_eq!(movies[1].genres, GenreLabel::Single(Genre::Action));
        assert_eq!(movies[1].title, "Heat (1995)");
    }

    #[test]
    fn test_trailing_pipe_is_multiple() {
        let content = "1::X (1995)::Drama|\n2::Y (1996)::|\n";
        let movies = parse_movies_str(content, "/assets").unwrap();

        assert_eq!(movies[0].genres, GenreLabel::Multiple);
        assert_eq!(movies[1].genres, GenreLabel::Multiple);
    }

    #[test]
    fn test_unknown_genre_keeps_loading() {
        let content = "1::X (1995)::IMAX\n2::Heat (1995)::Action\n";
        let movies = parse_movies_str(content, "/assets").unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].genres, GenreLabel::Other("IMAX".to_string()));
        assert_eq!(movies[0].genres.to_string(), "IMAX");
        assert_eq!(movies[1].genres, GenreLabel::Single(Genre::Action));
    }

    #[test]
    fn test_parse_movies_file_decodes_latin1() {
        let path = std::env::temp_dir().join(format!("movies-latin1-{}.dat", std::process::id()));
        std::fs::write(&path, b"73::Mis\xe9rables, Les (1995)::Drama\n").unwrap();

        let movies = parse_movies(&path, "/assets").unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(movies[0].title, "Misérables, Les (1995)");
        assert_eq!(movies[0].genres, GenreLabel::Single(Genre::Drama));
    }

    #[test]
    fn test_parse_movies_missing_genres() {
        let err = parse_movies_str("5::No Genres (2000)\n", "/assets").unwrap_err();
        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 1);
                assert_eq!(reason, "Missing genres");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_ratings() {
        let content = "1::1193::5::978300760\n\n1::661::3::978302109\n";
        let ratings = parse_ratings_str(content).unwrap();

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].movie_id, 1193);
        assert_eq!(ratings[0].rating, 5);
        assert_eq!(ratings[1].timestamp, 978302109);
    }

    #[test]
    fn test_parse_ratings_reports_line_number() {
        let content = "1::1193::5::978300760\n1::abc::3::978302109\n";
        let err = parse_ratings_str(content).unwrap_err();

        assert!(matches!(err, DataLoadError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_parse_ratings_rejects_out_of_scale_values() {
        let content = "1::1193::5::978300760\n1::1193::6::978300760\n";
        match parse_ratings_str(content).unwrap_err() {
            DataLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, "ratings.dat");
                assert_eq!(line, 2);
                assert!(reason.contains("Rating 6"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_ratings_str("1::1193::0::978300760\n").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_ratings(Path::new("does/not/exist/ratings.dat")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
