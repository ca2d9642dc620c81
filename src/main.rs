// Entry point and high-level CLI flow.
//
// The console app mirrors the original movie dashboard:
// - Option [1] loads and cleans the CSV, printing diagnostics.
// - Option [2] filters by year and genres, prints the derived views
//   (filtered table, losing movies, top-10 revenue, top-10 rating),
//   optionally shows one movie's budget/revenue detail, and exports
//   the tables plus a JSON summary.
mod filters;
mod loader;
mod output;
mod reports;
mod types;
mod util;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::Mutex;
use types::MovieRecord;

// Simple in-memory app state so we only load/clean the CSV once but can
// explore with different filters in a single run.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| {
    Mutex::new(AppState {
        data: None,
        total_loaded: 0,
    })
});

struct AppState {
    data: Option<Vec<MovieRecord>>,
    total_loaded: usize,
}

/// Read a single line of input after printing a prompt.
fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Ask the user whether to go back to the menu after exploring.
///
/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        match read_line("Back to Menu (Y/N): ").to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Handle option [1]: load and clean the movie CSV.
///
/// On success, we store the working set in `APP_STATE` and print a short
/// textual summary of what the ingestion rules did.
fn handle_load(path: &str) {
    match loader::load_and_clean(path) {
        Ok((data, report)) => {
            println!(
                "Processing dataset... ({} rows loaded, {} movies kept)",
                util::format_int(report.total_rows as i64),
                util::format_int(report.kept_rows as i64)
            );
            println!(
                "Note: {} rows dropped for unknown release date, {} for zero budget and revenue, {} unreadable.",
                util::format_int(report.dropped_unknown_date as i64),
                util::format_int(report.dropped_zero_amounts as i64),
                util::format_int(report.deserialize_errors as i64)
            );
            println!("");
            let mut state = APP_STATE.lock().unwrap();
            state.total_loaded = report.total_rows;
            state.data = Some(data);
        }
        Err(e) => {
            eprintln!("Failed to load file: {}\n", e);
        }
    }
}

/// Let the user pick one year from the distinct years, most recent first.
fn prompt_year(years: &[i32]) -> Option<i32> {
    println!("Years:");
    for (idx, y) in years.iter().enumerate() {
        println!("  [{}] {}", idx + 1, y);
    }
    loop {
        let input = read_line("Select a year (number): ");
        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= years.len() => return Some(years[n - 1]),
            _ => {
                if input.is_empty() {
                    return None;
                }
                println!("Invalid choice. Please enter 1-{}.", years.len());
            }
        }
    }
}

/// Let the user pick zero or more genres by comma-separated indices.
/// Blank input means no genre filter.
fn prompt_genres(genres: &[String]) -> Vec<String> {
    if genres.is_empty() {
        return Vec::new();
    }
    println!("Genres:");
    for (idx, g) in genres.iter().enumerate() {
        println!("  [{}] {}", idx + 1, g);
    }
    let input = read_line("Select genres (comma-separated numbers, blank for all): ");
    let mut selection = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.parse::<usize>() {
            Ok(n) if n >= 1 && n <= genres.len() => {
                let g = genres[n - 1].clone();
                if !selection.contains(&g) {
                    selection.push(g);
                }
            }
            _ => println!("Ignoring invalid genre choice: {}", part),
        }
    }
    selection
}

/// Optionally pick one movie from the filtered list for the detail view.
/// The pick resolves through title + release date, so duplicate titles
/// stay unambiguous.
fn prompt_movie(filtered: &[MovieRecord]) -> Option<(String, NaiveDate)> {
    if filtered.is_empty() {
        return None;
    }
    let input = read_line("Select a movie for details (row number, blank to skip): ");
    if input.is_empty() {
        return None;
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= filtered.len() => {
            let r = &filtered[n - 1];
            Some((r.title.clone(), r.release_date))
        }
        _ => {
            println!("Invalid choice, skipping details.");
            None
        }
    }
}

/// Handle option [2]: filter and print every derived view, then export.
///
/// This function is intentionally side-effectful:
/// - writes three CSV files and a JSON summary,
/// - and prints markdown previews of each view to the console.
fn handle_explore() {
    let (data, total_loaded) = {
        let state = APP_STATE.lock().unwrap();
        (state.data.clone(), state.total_loaded)
    };
    let Some(data) = data else {
        println!("Error: No data loaded. Please load the CSV file first (option 1).\n");
        return;
    };

    let years = filters::distinct_years(&data);
    let Some(year) = prompt_year(&years) else {
        println!("No year selected.\n");
        return;
    };
    let selection = prompt_genres(&filters::distinct_genres(&data));

    let by_year = filters::filter_by_year(&data, year);
    let filtered = filters::filter_by_genres(&by_year, &selection);

    let genre_label = if selection.is_empty() {
        "all genres".to_string()
    } else {
        selection.join(", ")
    };
    println!("\nMovies from {} ({}):", year, genre_label);
    println!(
        "Number of movies: {}\n",
        util::format_int(filtered.len() as i64)
    );
    let table = reports::filtered_table(&filtered);
    output::preview_table_rows(&table, 10);
    let file1 = "filtered_movies.csv";
    if let Err(e) = output::write_csv(file1, &table) {
        eprintln!("Write error: {}", e);
    }
    println!("(Full table exported to {})\n", file1);

    if let Some((title, date)) = prompt_movie(&filtered) {
        if let Some(record) = filters::select_one(&filtered, &title, date) {
            println!("\nDetails for {} ({}):", record.title, record.release_date);
            output::preview_table_rows(&reports::filtered_table(&[record.clone()]), 1);
            println!("Budget and Revenue of {}:", record.title);
            output::preview_table_rows(&reports::amount_table(record), 2);
        }
    }

    let losing = reports::losing_table(&filtered);
    println!("Movies with budget greater than revenue:");
    println!(
        "Number of losing movies: {}",
        util::format_int(losing.len() as i64)
    );
    output::preview_table_rows(&losing, 10);

    let top_revenue = reports::revenue_series(&filters::top_by_revenue(&filtered, 10));
    println!("Top 10 movies by revenue:");
    output::preview_table_rows(&top_revenue, 10);
    let file2 = "top10_revenue.csv";
    if let Err(e) = output::write_csv(file2, &top_revenue) {
        eprintln!("Write error: {}", e);
    }
    println!("(Exported to {})\n", file2);

    let top_rating = reports::rating_series(&filters::top_by_rating(&filtered, 10));
    println!("Top 10 movies by rating:");
    output::preview_table_rows(&top_rating, 10);
    let file3 = "top10_rating.csv";
    if let Err(e) = output::write_csv(file3, &top_rating) {
        eprintln!("Write error: {}", e);
    }
    println!("(Exported to {})\n", file3);

    let summary = reports::dataset_summary(&data, total_loaded);
    if let Err(e) = output::write_json("summary.json", &summary) {
        eprintln!("Write error: {}", e);
    }
    println!(
        "Summary (summary.json): {} loaded, {} kept, {} years, {} genres\n",
        util::format_int(summary.movies_loaded as i64),
        util::format_int(summary.movies_kept as i64),
        util::format_int(summary.distinct_years as i64),
        util::format_int(summary.distinct_genres as i64)
    );
}

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "movies.csv".to_string());
    loop {
        println!("Movie Report");
        println!("[1] Load the dataset");
        println!("[2] Explore movies\n");
        match read_line("Enter choice: ").as_str() {
            "1" => {
                handle_load(&path);
            }
            "2" => {
                println!("");
                handle_explore();
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            _ => {
                println!("Invalid choice. Please enter 1 or 2.\n");
            }
        }
    }
}
