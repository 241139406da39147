//! The batch run: fetch the library, load the export, match and report.

use crate::collection::{ensure_export_exists, load_collection, CollectionFilter};
use crate::error::Result;
use crate::formatters::format_report;
use crate::library::LibraryClient;
use crate::matching::find_matching_games;
use std::path::PathBuf;

pub const DEFAULT_LIBRARY_NAME: &str = "Gen Con Games Library";

/// Options for a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub csv_path: PathBuf,
    pub filter: CollectionFilter,
    pub show_checked_out: bool,
    /// Display name of the library, used in the report header
    pub library_name: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("bgg_games.csv"),
            filter: CollectionFilter::default(),
            show_checked_out: false,
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
        }
    }
}

/// How a run ended, short of an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The finished report
    Report(String),
    /// Nothing in the export passed the wishlist/want-to-play filter
    EmptyCollection,
}

/// Run the whole pipeline.
///
/// The export is checked before the (slow) library fetch so a missing file
/// fails fast with `CsvNotFound`.
pub fn run(client: &LibraryClient, options: &RunOptions) -> Result<RunOutcome> {
    ensure_export_exists(&options.csv_path)?;

    let library_games = client.fetch_games()?;
    let collection = load_collection(&options.csv_path, options.filter)?;

    if collection.is_empty() {
        log::warn!(
            "No wishlist or want-to-play games in {}",
            options.csv_path.display()
        );
        return Ok(RunOutcome::EmptyCollection);
    }

    let matching = find_matching_games(&library_games, &collection.games);
    log::info!("{} games match the library", matching.len());

    Ok(RunOutcome::Report(format_report(
        &matching,
        options.show_checked_out,
        &options.library_name,
    )))
}
