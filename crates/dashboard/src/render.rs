//! HTML rendering for the popularity dashboard
//!
//! The page is a single self-contained document: a heading and a five-column
//! grid of movie cards. It is rendered once, since the data never changes
//! while the process runs.

use ranking::PopularMovie;

const POSTER_WIDTH_PX: u32 = 150;
const POSTER_HEIGHT_PX: u32 = 225;
const GRID_COLUMNS: u32 = 5;

/// Render the full dashboard page for the ranked movies
///
/// `limit` is the configured list size shown in the heading, which may be
/// larger than `movies.len()` for small datasets.
pub fn render_dashboard(movies: &[PopularMovie], limit: usize) -> String {
    let heading = format!("Top {} Most Popular Movies", limit);
    let cards: String = movies.iter().map(render_card).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{heading}</title>
    <style>{css}</style>
</head>
<body>
    <div>
        <h1>{heading}</h1>
        <div class="movie-grid" style="display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 20px; padding: 20px;">
{cards}        </div>
    </div>
</body>
</html>
"#,
        heading = heading,
        css = inline_css(),
        columns = GRID_COLUMNS,
        cards = cards,
    )
}

fn render_card(movie: &PopularMovie) -> String {
    let title = html_escape(&movie.title);
    format!(
        r#"            <div class="movie-card">
                <img src="{poster}" alt="{title}" style="width: {width}px; height: {height}px;">
                <h3>{title}</h3>
                <p>Movie ID: {id}</p>
                <p>Popularity: {score:.2}</p>
            </div>
"#,
        poster = html_escape(&movie.poster_url),
        title = title,
        width = POSTER_WIDTH_PX,
        height = POSTER_HEIGHT_PX,
        id = movie.movie_id,
        score = movie.popularity_score,
    )
}

fn inline_css() -> &'static str {
    r#"
body { font-family: sans-serif; margin: 0; }
h1 { padding: 20px 20px 0; }
.movie-card { text-align: center; }
.movie-card h3 { font-size: 1em; margin: 8px 0 4px; }
.movie-card p { margin: 2px 0; color: #444; }
"#
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
