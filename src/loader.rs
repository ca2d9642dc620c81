use crate::types::{MovieRecord, RawMovieRow};
use crate::util::{parse_date_safe, parse_f64_safe, split_genres};
use chrono::Datelike;
use csv::ReaderBuilder;
use std::error::Error;
use std::io::Read;

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub deserialize_errors: usize,
    pub dropped_unknown_date: usize,
    pub dropped_zero_amounts: usize,
}

/// Load the movie CSV and apply the ingestion rules:
///
/// - dates and amounts are coerced leniently, unparsable values become
///   unknown rather than errors;
/// - rows with an unknown release date are dropped;
/// - rows where budget and revenue are both exactly zero are dropped
///   (an unknown amount does not count as zero);
/// - `year` is derived from the release date.
///
/// Only a file-level failure (missing file, unreadable CSV) is an error.
pub fn load_and_clean(path: &str) -> Result<(Vec<MovieRecord>, LoadReport), Box<dyn Error>> {
    let rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    Ok(clean_from_reader(rdr))
}

pub fn load_and_clean_from_reader<R: Read>(reader: R) -> (Vec<MovieRecord>, LoadReport) {
    let rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    clean_from_reader(rdr)
}

fn clean_from_reader<R: Read>(mut rdr: csv::Reader<R>) -> (Vec<MovieRecord>, LoadReport) {
    let mut total_rows = 0usize;
    let mut deserialize_errors = 0usize;
    let mut dropped_unknown_date = 0usize;
    let mut dropped_zero_amounts = 0usize;
    let mut records: Vec<MovieRecord> = Vec::new();

    for result in rdr.deserialize::<RawMovieRow>() {
        total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(_) => {
                deserialize_errors += 1;
                continue;
            }
        };

        let release_date = match parse_date_safe(row.release_date.as_deref()) {
            Some(d) => d,
            None => {
                dropped_unknown_date += 1;
                continue;
            }
        };

        let budget = parse_f64_safe(row.budget.as_deref());
        let revenue = parse_f64_safe(row.revenue.as_deref());
        if budget == Some(0.0) && revenue == Some(0.0) {
            dropped_zero_amounts += 1;
            continue;
        }

        let title = row.title.unwrap_or_default().trim().to_string();
        let genres = split_genres(row.genres.as_deref());
        let vote_average = parse_f64_safe(row.vote_average.as_deref());

        records.push(MovieRecord {
            title,
            year: release_date.year(),
            release_date,
            budget,
            revenue,
            genres,
            vote_average,
        });
    }

    let kept_rows = records.len();
    let report = LoadReport {
        total_rows,
        kept_rows,
        deserialize_errors,
        dropped_unknown_date,
        dropped_zero_amounts,
    };
    (records, report)
}
