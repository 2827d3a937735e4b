use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub fn open_reader<P>(path: P) -> Result<BufReader<File>>
where
    P: AsRef<Path> + std::fmt::Debug,
{
    let file = File::open(&path).context(format!("can't open file {:#?}", &path))?;
    Ok(BufReader::new(file))
}

pub fn count_lines<P>(path: P) -> Result<u64>
where
    P: AsRef<Path> + std::fmt::Debug,
{
    let reader = open_reader(&path)?;
    let mut lines = reader.lines();
    let count = lines.try_fold(0, |acc, line| line.map(|_| acc + 1))?;
    Ok(count)
}

/// Reads every data line of `reader` into a record, skipping the header
/// line. `progress` is invoked once per parsed row.
pub fn read_table_from<R, T, F>(reader: R, mut progress: F) -> Result<Vec<T>>
where
    R: BufRead,
    T: TryFrom<String, Error = anyhow::Error>,
    F: FnMut(),
{
    let mut rows = Vec::new();

    // Process each data line in the file, discarding the header
    for line in reader.lines().skip(1) {
        let line = line.context("Failed to read line")?;
        rows.push(T::try_from(line).context("Failed to parse line")?);
        progress();
    }

    Ok(rows)
}

pub fn read_table<P, T>(path: P) -> Result<Vec<T>>
where
    P: AsRef<Path> + std::fmt::Debug,
    T: TryFrom<String, Error = anyhow::Error>,
{
    let reader = open_reader(&path)?;
    read_table_from(reader, || {})
}
