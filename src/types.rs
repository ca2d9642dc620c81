use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

// The raw CSV headers are already snake_case, so no serde renames needed.
#[derive(Debug, Deserialize)]
pub struct RawMovieRow {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub budget: Option<String>,
    pub revenue: Option<String>,
    pub genres: Option<String>,
    pub vote_average: Option<String>,
}

/// One movie in the working set. Amounts that failed numeric parsing stay
/// `None` so later comparisons can tell "unknown" apart from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub release_date: NaiveDate,
    pub year: i32,
    pub budget: Option<f64>,
    pub revenue: Option<f64>,
    pub genres: Vec<String>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct FilteredMovieRow {
    #[serde(rename = "Title")]
    #[tabled(rename = "Title")]
    pub title: String,
    #[serde(rename = "ReleaseDate")]
    #[tabled(rename = "ReleaseDate")]
    pub release_date: String,
    #[serde(rename = "Genres")]
    #[tabled(rename = "Genres")]
    pub genres: String,
    #[serde(rename = "VoteAverage")]
    #[tabled(rename = "VoteAverage")]
    pub vote_average: String,
    #[serde(rename = "Revenue")]
    #[tabled(rename = "Revenue")]
    pub revenue: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct LosingMovieRow {
    #[serde(rename = "Title")]
    #[tabled(rename = "Title")]
    pub title: String,
    #[serde(rename = "Budget")]
    #[tabled(rename = "Budget")]
    pub budget: String,
    #[serde(rename = "Revenue")]
    #[tabled(rename = "Revenue")]
    pub revenue: String,
}

/// One entry of a title-to-amount series (top revenue, top rating).
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct SeriesRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Title")]
    #[tabled(rename = "Title")]
    pub title: String,
    #[serde(rename = "Value")]
    #[tabled(rename = "Value")]
    pub value: String,
}

/// The two-row budget/revenue view for one selected movie.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct AmountRow {
    #[serde(rename = "Item")]
    #[tabled(rename = "Item")]
    pub item: String,
    #[serde(rename = "Amount")]
    #[tabled(rename = "Amount")]
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub movies_loaded: usize,
    pub movies_kept: usize,
    pub distinct_years: usize,
    pub distinct_genres: usize,
}
