//! Integration tests for loading and ranking.
//!
//! These write a small MovieLens-shaped dataset to disk, load it through
//! `DataIndex::load_from_files` and check the ranking end to end.

use data_loader::DataIndex;
use ranking::{PopularityRanker, genre_mean_ratings, top_popular};
use std::fs;
use std::path::PathBuf;

const MOVIES: &str = "\
1::Toy Story (1995)::Animation|Children's|Comedy
2::Jumanji (1995)::Adventure|Children's|Fantasy
3::Grumpier Old Men (1995)::Comedy|Romance
4::Waiting to Exhale (1995)::Comedy|Drama
5::Father of the Bride Part II (1995)::Comedy
6::Heat (1995)::Action|Crime|Thriller
";

fn ratings() -> String {
    let mut lines = String::new();
    // Movie 1: 40 ratings of 4 -> 40 * 0.75 = 30
    for user in 1..=40 {
        lines.push_str(&format!("{}::1::4::978300760\n", user));
    }
    // Movie 2: 10 ratings of 5 -> 10
    for user in 1..=10 {
        lines.push_str(&format!("{}::2::5::978300761\n", user));
    }
    // Movie 3: 100 ratings of 1 -> 0
    for user in 1..=100 {
        lines.push_str(&format!("{}::3::1::978300762\n", user));
    }
    // Movie 5: 20 ratings of 3 -> 10, ties with movie 2
    for user in 1..=20 {
        lines.push_str(&format!("{}::5::3::978300763\n", user));
    }
    // Unknown movie, dropped by the join
    lines.push_str("7::999::5::978300764\n");
    lines
}

fn write_dataset(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("popular-movies-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("movies.dat"), MOVIES).unwrap();
    fs::write(dir.join("ratings.dat"), ratings()).unwrap();
    dir
}

#[test]
fn test_load_and_rank() {
    let dir = write_dataset("rank");
    let index = DataIndex::load_from_files(&dir, "/assets").unwrap();

    assert_eq!(index.counts(), (6, 170));
    assert_eq!(index.orphan_ratings(), 1);

    let top = top_popular(&index, 10);
    let ids: Vec<u32> = top.iter().map(|m| m.movie_id).collect();

    // Movies 4 and 6 have no ratings and are not ranked
    assert_eq!(ids, vec![1, 2, 5, 3]);
    assert!((top[0].popularity_score - 30.0).abs() < 1e-9);
    assert_eq!(top[0].poster_url, "/assets/1.jpg");
    assert_eq!(top[3].popularity_score, 0.0);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_ranker_respects_limit() {
    let dir = write_dataset("limit");
    let index = DataIndex::load_from_files(&dir, "/static").unwrap();

    let top = PopularityRanker::new(2).rank(&index);
    assert_eq!(top.len(), 2);
    assert_eq!(top[1].title, "Jumanji (1995)");
    assert_eq!(top[1].poster_url, "/static/2.jpg");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_genre_means_after_join() {
    let dir = write_dataset("genres");
    let index = DataIndex::load_from_files(&dir, "/assets").unwrap();

    let means = genre_mean_ratings(&index);

    // Only movie 5 has a single genre; every other rated movie is "Multiple"
    assert_eq!(means.len(), 2);
    assert_eq!(means[0].label, "Comedy");
    assert_eq!(means[0].num_ratings, 20);
    assert!((means[0].mean_rating - 3.0).abs() < 1e-12);
    assert_eq!(means[1].label, "Multiple");
    assert_eq!(means[1].num_ratings, 150);

    fs::remove_dir_all(dir).ok();
}
