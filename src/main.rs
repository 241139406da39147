//! Library Wishlist - find games in both your BGG collection export and a
//! tabletop.events games library.

use clap::Parser;
use library_wishlist::app::DEFAULT_LIBRARY_NAME;
use library_wishlist::library::{DEFAULT_API_URL, GEN_CON_LIBRARY_ID};
use library_wishlist::{
    export_instructions, run, CollectionFilter, LibraryClient, LibraryError, RunOptions,
    RunOutcome,
};
use std::path::PathBuf;
use std::time::Duration;

/// Find games in both your BGG collection CSV and the Gen Con Games Library
#[derive(Parser, Debug)]
#[command(name = "library_wishlist")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to your BGG collection CSV export
    #[arg(long, default_value = "bgg_games.csv")]
    csv: PathBuf,

    /// Only include wishlist games, not 'want to play'
    #[arg(long, default_value_t = false, conflicts_with = "want_to_play_only")]
    wishlist_only: bool,

    /// Only include 'want to play' games, not wishlist
    #[arg(long, default_value_t = false)]
    want_to_play_only: bool,

    /// Include games that are currently checked out
    #[arg(long, default_value_t = false)]
    show_checked_out: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// tabletop.events library id
    #[arg(long, default_value = GEN_CON_LIBRARY_ID)]
    library_id: String,

    /// Library name shown in the report
    #[arg(long, default_value = DEFAULT_LIBRARY_NAME)]
    library_name: String,

    /// Base URL of the tabletop.events API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Delay between page requests in milliseconds
    #[arg(long, default_value_t = 100)]
    page_delay_ms: u64,
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let client = LibraryClient::new(&args.api_url, &args.library_id)
        .with_page_delay(Duration::from_millis(args.page_delay_ms));
    let options = RunOptions {
        csv_path: args.csv.clone(),
        filter: CollectionFilter {
            include_wishlist: !args.want_to_play_only,
            include_want_to_play: !args.wishlist_only,
        },
        show_checked_out: args.show_checked_out,
        library_name: args.library_name.clone(),
    };

    let report = match run(&client, &options) {
        Ok(RunOutcome::Report(report)) => report,
        Ok(RunOutcome::EmptyCollection) => {
            println!("No games found in your CSV. Check the file format.");
            return;
        }
        Err(LibraryError::CsvNotFound(path)) => {
            println!("{}", export_instructions(&path));
            return;
        }
        Err(e) => {
            log::error!("Run failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &report) {
                log::error!("Failed to write {}: {e}", path.display());
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            println!("Results written to {}", path.display());
        }
        None => println!("{report}"),
    }
}
