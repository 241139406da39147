//! Library Wishlist - find borrowable board games
//!
//! Cross-references a BoardGameGeek collection export with a tabletop.events
//! games library and reports which wishlist and want-to-play games can be
//! borrowed.

pub mod app;
pub mod collection;
pub mod error;
pub mod formatters;
pub mod library;
pub mod matching;
pub mod models;

// Re-export commonly used items
pub use app::{run, RunOptions, RunOutcome};
pub use collection::{load_collection, CollectionFilter, CollectionLoad};
pub use error::{LibraryError, Result};
pub use formatters::{export_instructions, filter_availability, format_report};
pub use library::LibraryClient;
pub use matching::find_matching_games;
pub use models::{CollectionGame, LibraryGame, MatchedGame};
