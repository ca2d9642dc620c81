// The filtering/aggregation core. Every function here is a pure transform
// over the immutable working set: records in, records (or labels) out, no
// hidden state. Empty results are normal, not errors.
use crate::types::MovieRecord;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Distinct release years, most recent first (selector order).
pub fn distinct_years(records: &[MovieRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();
    years.into_iter().rev().collect()
}

/// Distinct genre labels across all records, sorted ascending.
pub fn distinct_genres(records: &[MovieRecord]) -> Vec<String> {
    let genres: BTreeSet<String> = records
        .iter()
        .flat_map(|r| r.genres.iter().cloned())
        .collect();
    genres.into_iter().collect()
}

pub fn filter_by_year(records: &[MovieRecord], year: i32) -> Vec<MovieRecord> {
    records.iter().filter(|r| r.year == year).cloned().collect()
}

/// Keep records whose genre list shares at least one label with the
/// selection. An empty selection matches everything; a record with no
/// genres never matches a non-empty selection.
pub fn filter_by_genres(records: &[MovieRecord], selection: &[String]) -> Vec<MovieRecord> {
    if selection.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.genres.iter().any(|g| selection.contains(g)))
        .cloned()
        .collect()
}

/// Movies that lost money: strict `budget > revenue`. An unknown amount on
/// either side excludes the record.
pub fn losing_movies(records: &[MovieRecord]) -> Vec<MovieRecord> {
    records
        .iter()
        .filter(|r| match (r.budget, r.revenue) {
            (Some(b), Some(v)) => b > v,
            _ => false,
        })
        .cloned()
        .collect()
}

pub fn top_by_revenue(records: &[MovieRecord], n: usize) -> Vec<MovieRecord> {
    top_by(records, n, |r| r.revenue)
}

pub fn top_by_rating(records: &[MovieRecord], n: usize) -> Vec<MovieRecord> {
    top_by(records, n, |r| r.vote_average)
}

/// Stable descending sort on an optional field, unknown values last, then
/// truncate. Stability keeps ties in original dataset order.
fn top_by<F>(records: &[MovieRecord], n: usize, key: F) -> Vec<MovieRecord>
where
    F: Fn(&MovieRecord) -> Option<f64>,
{
    let mut sorted: Vec<MovieRecord> = records.to_vec();
    sorted.sort_by(|a, b| match (key(a), key(b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted.truncate(n);
    sorted
}

/// All records with an exact-matching title. Titles are not unique, so this
/// can return more than one record.
pub fn select_by_title<'a>(records: &'a [MovieRecord], title: &str) -> Vec<&'a MovieRecord> {
    records.iter().filter(|r| r.title == title).collect()
}

/// Resolve one record by title plus release date, which disambiguates
/// duplicate titles.
pub fn select_one<'a>(
    records: &'a [MovieRecord],
    title: &str,
    release_date: NaiveDate,
) -> Option<&'a MovieRecord> {
    records
        .iter()
        .find(|r| r.title == title && r.release_date == release_date)
}

/// The two-value series behind the per-movie budget/revenue chart.
pub fn budget_revenue_pair(record: &MovieRecord) -> (Option<f64>, Option<f64>) {
    (record.budget, record.revenue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: i32, budget: Option<f64>, revenue: Option<f64>) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            release_date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
            year,
            budget,
            revenue,
            genres: Vec::new(),
            vote_average: Some(5.0),
        }
    }

    fn sample() -> Vec<MovieRecord> {
        vec![
            movie("A", 2010, Some(100.0), Some(50.0)),
            movie("B", 2010, Some(20.0), Some(80.0)),
            movie("C", 2011, Some(10.0), Some(10.0)),
        ]
    }

    #[test]
    fn year_filter_then_losers_then_top_revenue() {
        // The worked example: filter 2010 -> [A, B]; losers -> [A];
        // top revenue on [A, B] -> [B, A].
        let records = sample();
        let by_year = filter_by_year(&records, 2010);
        assert_eq!(
            by_year.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        let losers = losing_movies(&by_year);
        assert_eq!(losers.len(), 1);
        assert_eq!(losers[0].title, "A");
        let top = top_by_revenue(&by_year, 10);
        assert_eq!(
            top.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec!["B", "A"]
        );
    }

    #[test]
    fn distinct_years_are_descending() {
        assert_eq!(distinct_years(&sample()), vec![2011, 2010]);
    }

    #[test]
    fn distinct_genres_union_sorted() {
        let mut records = sample();
        records[0].genres = vec!["Drama".into(), "Action".into()];
        records[1].genres = vec!["Action".into(), "Comedy".into()];
        assert_eq!(distinct_genres(&records), vec!["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn empty_genre_selection_is_identity() {
        let records = sample();
        assert_eq!(filter_by_genres(&records, &[]), records);
    }

    #[test]
    fn genre_filter_intersects_labels() {
        let mut records = sample();
        records[0].genres = vec!["Drama".into()];
        records[1].genres = vec!["Science Fiction".into()];
        // record C keeps an empty genre list
        let selection = vec!["Science Fiction".to_string(), "Horror".to_string()];
        let hits = filter_by_genres(&records, &selection);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "B");
        // a bare "Fiction" selection is not a substring match
        let miss = filter_by_genres(&records, &["Fiction".to_string()]);
        assert!(miss.is_empty());
    }

    #[test]
    fn losing_movies_excludes_unknown_amounts() {
        let records = vec![
            movie("known-loss", 2010, Some(100.0), Some(50.0)),
            movie("unknown-budget", 2010, None, Some(50.0)),
            movie("unknown-revenue", 2010, Some(100.0), None),
            movie("break-even", 2010, Some(60.0), Some(60.0)),
        ];
        let losers = losing_movies(&records);
        assert_eq!(losers.len(), 1);
        assert_eq!(losers[0].title, "known-loss");
    }

    #[test]
    fn top_by_revenue_is_sorted_truncated_and_stable() {
        let records = vec![
            movie("tie-first", 2010, None, Some(50.0)),
            movie("big", 2010, None, Some(900.0)),
            movie("tie-second", 2010, None, Some(50.0)),
            movie("unknown", 2010, None, None),
            movie("small", 2010, None, Some(10.0)),
        ];
        let top = top_by_revenue(&records, 3);
        assert_eq!(
            top.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec!["big", "tie-first", "tie-second"]
        );
        let all = top_by_revenue(&records, 10);
        assert_eq!(all.len(), 5);
        assert_eq!(all.last().unwrap().title, "unknown");
    }

    #[test]
    fn top_by_rating_orders_descending() {
        let mut records = sample();
        records[0].vote_average = Some(8.1);
        records[1].vote_average = Some(6.4);
        records[2].vote_average = None;
        let top = top_by_rating(&records, 10);
        assert_eq!(
            top.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn filters_are_idempotent_pure_functions() {
        let records = sample();
        let selection = vec!["Drama".to_string()];
        let once = filter_by_genres(&filter_by_year(&records, 2010), &selection);
        let twice = filter_by_genres(&filter_by_year(&records, 2010), &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicate_titles_resolved_by_date() {
        let mut records = sample();
        records[2].title = "A".to_string(); // second "A", year 2011
        assert_eq!(select_by_title(&records, "A").len(), 2);
        let d = NaiveDate::from_ymd_opt(2011, 6, 1).unwrap();
        let picked = select_one(&records, "A", d).unwrap();
        assert_eq!(picked.year, 2011);
        assert!(select_one(&records, "missing", d).is_none());
    }
}
