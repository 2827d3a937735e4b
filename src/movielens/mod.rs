mod parse;

pub mod movies;
pub mod ratings;
pub mod tags;

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::read;
use movies::Movie;
use ratings::Rating;
use tags::Tag;

pub const DATASET_FILE_NAMES: [&str; 3] = ["movies.dat", "ratings.dat", "tags.dat"];

pub const FIELD_SEP: &str = "::";

pub const DEFAULT_DATASET_DIR: &str = "private/ml-10M100K";

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub movies: Vec<Movie>,
    pub ratings: Vec<Rating>,
    pub tags: Vec<Tag>,
}

/// Reads `movies.dat`, `ratings.dat` and `tags.dat` from `dataset_dir` into
/// typed tables. The first line of each file is a header and is discarded.
/// The whole load fails on the first missing file or malformed row.
pub fn load_dataset<P>(dataset_dir: P) -> Result<Dataset>
where
    P: AsRef<Path>,
{
    let dir = dataset_dir.as_ref();
    let movies = read::read_table(dir.join(DATASET_FILE_NAMES[0]))?;
    let ratings = read::read_table(dir.join(DATASET_FILE_NAMES[1]))?;
    let tags = read::read_table(dir.join(DATASET_FILE_NAMES[2]))?;

    Ok(Dataset {
        movies,
        ratings,
        tags,
    })
}
