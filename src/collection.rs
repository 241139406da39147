//! Loading of BoardGameGeek collection CSV exports.

use crate::error::{LibraryError, Result};
use crate::models::CollectionGame;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// The columns of a BGG collection export that we care about. Exports carry
/// many more columns; those are ignored.
#[derive(Debug, Deserialize, Default)]
pub struct CollectionRow {
    #[serde(default)]
    pub objectid: Option<String>,
    #[serde(default)]
    pub objectname: Option<String>,
    #[serde(default)]
    pub wishlist: Option<String>,
    #[serde(default)]
    pub wanttoplay: Option<String>,
    #[serde(default)]
    pub wishlistpriority: Option<String>,
}

impl CollectionRow {
    /// BGG id of the row, if present and numeric
    pub fn bgg_id(&self) -> Option<u64> {
        self.objectid
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .and_then(|id| id.parse().ok())
    }

    pub fn is_wishlist(&self) -> bool {
        is_flag_set(self.wishlist.as_deref())
    }

    pub fn is_want_to_play(&self) -> bool {
        is_flag_set(self.wanttoplay.as_deref())
    }

    /// Wishlist priority; blank or unparseable values count as unranked
    pub fn wishlist_priority(&self) -> Option<i32> {
        self.wishlistpriority
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .and_then(|p| p.parse().ok())
    }

    fn name(&self) -> String {
        self.objectname
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

fn is_flag_set(value: Option<&str>) -> bool {
    value == Some("1")
}

/// Which tiers of the collection to include
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionFilter {
    pub include_wishlist: bool,
    pub include_want_to_play: bool,
}

impl Default for CollectionFilter {
    fn default() -> Self {
        Self {
            include_wishlist: true,
            include_want_to_play: true,
        }
    }
}

/// Result of loading a collection export
#[derive(Debug, Default)]
pub struct CollectionLoad {
    pub games: HashMap<u64, CollectionGame>,
    /// Rows included as wishlist games
    pub wishlist_count: usize,
    /// Rows included only because they were marked want-to-play
    pub want_to_play_count: usize,
}

impl CollectionLoad {
    /// Classify a single row and add it to the load if the filter accepts it.
    ///
    /// A row that is both wishlisted and want-to-play goes through the
    /// wishlist branch only, keeping its priority and its want-to-play flag.
    pub fn add_row(&mut self, row: &CollectionRow, filter: CollectionFilter) {
        let Some(bgg_id) = row.bgg_id() else {
            log::debug!("Skipping row without BGG id: {:?}", row.objectname);
            return;
        };

        if filter.include_wishlist && row.is_wishlist() {
            self.games.insert(
                bgg_id,
                CollectionGame {
                    name: row.name(),
                    wishlist_priority: row.wishlist_priority(),
                    want_to_play: row.is_want_to_play(),
                },
            );
            self.wishlist_count += 1;
        } else if filter.include_want_to_play && row.is_want_to_play() {
            // Priority only means something for wishlist entries
            self.games.insert(
                bgg_id,
                CollectionGame {
                    name: row.name(),
                    wishlist_priority: None,
                    want_to_play: true,
                },
            );
            self.want_to_play_count += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Returns `CsvNotFound` if the export is missing
pub fn ensure_export_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(LibraryError::CsvNotFound(path.to_path_buf()))
    }
}

/// Load the wishlist and want-to-play games from a BGG collection export
pub fn load_collection(path: &Path, filter: CollectionFilter) -> Result<CollectionLoad> {
    ensure_export_exists(path)?;
    log::info!("Loading BGG games from {}", path.display());

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut load = CollectionLoad::default();
    for result in rdr.deserialize() {
        let row: CollectionRow = result?;
        load.add_row(&row, filter);
    }

    log::info!(
        "Found {} wishlist games, {} want-to-play games",
        load.wishlist_count,
        load.want_to_play_count
    );
    log::info!("Total: {} unique games", load.len());

    Ok(load)
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
