use std::{path::Path, time::Duration};

use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

pub mod movielens;
pub mod read;

use movielens::{
    movies::Movie, ratings::Rating, tags::Tag, Dataset, DATASET_FILE_NAMES, DEFAULT_DATASET_DIR,
};

fn handle_error(e: &anyhow::Error) -> ! {
    eprintln!("An error occurred!\n\n{}\n", e);
    for (i, cause) in e.chain().skip(1).enumerate() {
        if i == 0 {
            eprintln!("Causes:");
        }
        eprintln!("{}. {}", i + 1, cause);
    }
    std::process::exit(1);
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "[{prefix:.bold.dim}] {spinner:.green} {msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {human_pos}/{human_len} ({eta})",
    )
    .unwrap()
    .progress_chars("#>-")
    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏✔")
}

fn progress_bar(
    mp: &MultiProgress,
    index: usize,
    prefix: String,
    msg: String,
    len: u64,
) -> ProgressBar {
    let pb = mp.insert(index, ProgressBar::new(len));
    pb.set_style(bar_style());
    pb.set_prefix(prefix);
    pb.set_message(msg);
    pb
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("[{prefix:.bold.dim}] {spinner:.green} {msg} [{elapsed_precise}]")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏✔")
        .progress_chars("#>-")
}

fn progress_spinner(mp: &MultiProgress, index: usize, prefix: String, msg: String) -> ProgressBar {
    let pb = mp.insert(index, ProgressBar::new_spinner());
    pb.set_style(spinner_style());
    pb.set_prefix(prefix);
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(20));
    pb
}

fn load_table<T>(mp: &MultiProgress, index: usize, dir: &Path, file_name: &str) -> Result<Vec<T>>
where
    T: TryFrom<String, Error = anyhow::Error>,
{
    let path = dir.join(file_name);

    // Count the lines in the file
    let count_pb = progress_spinner(
        mp,
        index,
        file_name.to_string(),
        "Counting lines...".to_string(),
    );
    let line_count = read::count_lines(&path)?;
    count_pb.finish_and_clear();

    // Read the rows, one progress tick per parsed row
    let read_pb = progress_bar(
        mp,
        index,
        file_name.to_string(),
        "Reading rows...".to_string(),
        line_count.saturating_sub(1),
    );
    let reader = read::open_reader(&path)?;
    let rows = read::read_table_from(reader, || read_pb.inc(1))?;
    read_pb.finish_with_message(format!("Read {} rows.", rows.len()));

    Ok(rows)
}

fn load_default_dataset() -> Result<Dataset> {
    let dir = Path::new(DEFAULT_DATASET_DIR);
    let mp = MultiProgress::new();

    let movies: Vec<Movie> = load_table(&mp, 0, dir, DATASET_FILE_NAMES[0])?;
    let ratings: Vec<Rating> = load_table(&mp, 1, dir, DATASET_FILE_NAMES[1])?;
    let tags: Vec<Tag> = load_table(&mp, 2, dir, DATASET_FILE_NAMES[2])?;

    Ok(Dataset {
        movies,
        ratings,
        tags,
    })
}

fn print_table<T: std::fmt::Debug>(name: &str, rows: &[T]) {
    println!("== {} ({} rows) ==", name, rows.len());
    for row in rows {
        println!("{:?}", row);
    }
}

fn main() {
    let dataset = match load_default_dataset() {
        Ok(dataset) => dataset,
        Err(e) => handle_error(&e),
    };

    print_table("movies", &dataset.movies);
    print_table("ratings", &dataset.ratings);
    print_table("tags", &dataset.tags);
}
