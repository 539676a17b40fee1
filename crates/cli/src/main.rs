use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dashboard::{DashboardConfig, render_dashboard, run_server};
use data_loader::DataIndex;
use ranking::{GenreRating, PopularMovie, PopularityRanker, genre_mean_ratings};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Popular Movies - popularity ranking dashboard for MovieLens ratings
#[derive(Parser)]
#[command(name = "popular-movies")]
#[command(about = "Rank MovieLens movies by popularity and serve the top list as a web page", long_about = None)]
struct Cli {
    /// Path to MovieLens dataset directory (movies.dat, ratings.dat)
    #[arg(short, long, default_value = "ml-1m")]
    data_dir: PathBuf,

    /// URL prefix that poster images are linked and served under
    #[arg(long, default_value = dashboard::config::DEFAULT_IMAGES_URL)]
    images_url: String,

    /// Number of movies in the ranking
    #[arg(long, default_value_t = ranking::DEFAULT_TOP_N)]
    limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranking, render the dashboard and serve it over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(long, default_value_t = dashboard::config::DEFAULT_PORT)]
        port: u16,

        /// Directory holding `{movie_id}.jpg` poster images
        #[arg(long, default_value = dashboard::config::DEFAULT_ASSETS_DIR)]
        assets_dir: PathBuf,
    },

    /// Print the ranking and exit
    Report {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the mean rating per genre label
    Genres,
}

impl Cli {
    /// Checks shared by every subcommand
    fn validate(&self) -> Result<()> {
        ensure!(self.limit > 0, "--limit must be at least 1");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    cli.validate()?;

    let start = Instant::now();
    let data_dir = cli.data_dir.clone();
    let images_url = cli.images_url.clone();
    // Parsing is CPU-bound, keep it off the async workers
    let data_index = tokio::task::spawn_blocking(move || {
        DataIndex::load_from_files(&data_dir, &images_url)
    })
    .await
    .context("Data loading task panicked")?
    .with_context(|| format!("Failed to load MovieLens dataset from {}", cli.data_dir.display()))?;
    info!("Loaded dataset in {:?}", start.elapsed());

    let ranker = PopularityRanker::new(cli.limit);

    match cli.command {
        Commands::Serve {
            host,
            port,
            assets_dir,
        } => {
            let config = DashboardConfig {
                host,
                port,
                assets_dir,
                images_url: cli.images_url,
                top_n: cli.limit,
            };
            handle_serve(&data_index, ranker, &config).await?
        }
        Commands::Report { json } => handle_report(&data_index, ranker, json)?,
        Commands::Genres => handle_genres(&data_index),
    }

    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(
    data_index: &DataIndex,
    ranker: PopularityRanker,
    config: &DashboardConfig,
) -> Result<()> {
    config.validate().context("Invalid dashboard configuration")?;

    let top = ranker.rank(data_index);
    print_ranking(&top);

    let page = render_dashboard(&top, ranker.limit());
    run_server(config, page)
        .await
        .context("Dashboard server failed")
}

/// Handle the 'report' command
fn handle_report(data_index: &DataIndex, ranker: PopularityRanker, json: bool) -> Result<()> {
    let top = ranker.rank(data_index);

    if json {
        let out = serde_json::to_string_pretty(&top).context("Failed to serialize ranking")?;
        println!("{}", out);
    } else {
        print_ranking(&top);
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(data_index: &DataIndex) {
    let genres = genre_mean_ratings(data_index);
    print_genres(&genres);
}

/// Print the ranking table
fn print_ranking(movies: &[PopularMovie]) {
    println!(
        "{}",
        format!("Top {} Most Popular Movies:", movies.len()).bold().blue()
    );
    println!(
        "{:>4}  {:>7}  {:<50}  {:>11}  {:>10}  {:>16}  {}",
        "#", "MovieID", "Title", "num_ratings", "avg_rating", "popularity_score", "PosterURL"
    );
    for movie in movies {
        println!(
            "{}  {:>7}  {:<50}  {:>11}  {:>10.6}  {:>16.6}  {}",
            format!("{:>4}", movie.rank).green(),
            movie.movie_id,
            truncate(&movie.title, 50),
            movie.num_ratings,
            movie.avg_rating,
            movie.popularity_score,
            movie.poster_url
        );
    }
}

/// Print mean rating per genre label
fn print_genres(genres: &[GenreRating]) {
    println!("{}", "Mean rating by genre:".bold().blue());
    for genre in genres {
        println!(
            "{}{:<12} {:.4} ({} ratings)",
            "• ".green(),
            genre.label,
            genre.mean_rating,
            genre.num_ratings
        );
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    }
}
