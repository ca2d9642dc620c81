// Builders that turn working-set slices into displayable report rows.
// Amount formatting happens here so the filter core stays numeric.
use crate::filters::{budget_revenue_pair, distinct_genres, distinct_years, losing_movies};
use crate::types::{
    AmountRow, DatasetSummary, FilteredMovieRow, LosingMovieRow, MovieRecord, SeriesRow,
};
use crate::util::format_amount;

/// The filtered movie table: the columns the dashboard shows for each hit.
pub fn filtered_table(records: &[MovieRecord]) -> Vec<FilteredMovieRow> {
    records
        .iter()
        .map(|r| FilteredMovieRow {
            title: r.title.clone(),
            release_date: r.release_date.format("%Y-%m-%d").to_string(),
            genres: r.genres.join(", "),
            vote_average: format_amount(r.vote_average, 1),
            revenue: format_amount(r.revenue, 0),
        })
        .collect()
}

pub fn losing_table(records: &[MovieRecord]) -> Vec<LosingMovieRow> {
    losing_movies(records)
        .into_iter()
        .map(|r| LosingMovieRow {
            title: r.title.clone(),
            budget: format_amount(r.budget, 0),
            revenue: format_amount(r.revenue, 0),
        })
        .collect()
}

/// Title-to-revenue series for the top movies, already ranked.
pub fn revenue_series(top: &[MovieRecord]) -> Vec<SeriesRow> {
    top.iter()
        .enumerate()
        .map(|(idx, r)| SeriesRow {
            rank: idx + 1,
            title: r.title.clone(),
            value: format_amount(r.revenue, 0),
        })
        .collect()
}

/// Title-to-rating series for the top movies, already ranked.
pub fn rating_series(top: &[MovieRecord]) -> Vec<SeriesRow> {
    top.iter()
        .enumerate()
        .map(|(idx, r)| SeriesRow {
            rank: idx + 1,
            title: r.title.clone(),
            value: format_amount(r.vote_average, 1),
        })
        .collect()
}

/// The two-row budget/revenue view for one selected movie, the console
/// stand-in for the original bar chart.
pub fn amount_table(record: &MovieRecord) -> Vec<AmountRow> {
    let (budget, revenue) = budget_revenue_pair(record);
    vec![
        AmountRow {
            item: "Budget".to_string(),
            amount: format_amount(budget, 0),
        },
        AmountRow {
            item: "Revenue".to_string(),
            amount: format_amount(revenue, 0),
        },
    ]
}

pub fn dataset_summary(records: &[MovieRecord], total_loaded: usize) -> DatasetSummary {
    DatasetSummary {
        movies_loaded: total_loaded,
        movies_kept: records.len(),
        distinct_years: distinct_years(records).len(),
        distinct_genres: distinct_genres(records).len(),
    }
}
