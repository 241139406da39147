use crate::error::{LibraryError, Result};
use crate::models::LibraryGame;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://tabletop.events";

/// Gen Con Games Library on tabletop.events
pub const GEN_CON_LIBRARY_ID: &str = "04AF9CCA-4007-11E7-B936-583CAF0F8503";

pub const DEFAULT_ITEMS_PER_PAGE: u32 = 100;

/// Pause between page requests so we don't hammer the API
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(100);

/// One page of the `librarygames` listing
#[derive(Debug, Deserialize, Default)]
pub(crate) struct LibraryGamesPage {
    #[serde(default)]
    pub result: LibraryGamesResult,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct LibraryGamesResult {
    #[serde(default)]
    pub items: Vec<LibraryGameItem>,
    #[serde(default)]
    pub paging: Paging,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct Paging {
    #[serde(default)]
    pub total_pages: Option<Value>,
}

impl Paging {
    /// Total page count; a missing or unreadable value means a single page
    pub fn total_pages(&self) -> u64 {
        self.total_pages
            .as_ref()
            .and_then(value_as_u64)
            .unwrap_or(1)
    }
}

/// Raw library game as returned by the API. The API is loosely typed, so ids
/// and flags are kept as JSON values and normalized in `into_game`.
#[derive(Debug, Deserialize)]
pub(crate) struct LibraryGameItem {
    #[serde(default)]
    pub bgg_id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub catalog_number: Option<Value>,
    #[serde(default)]
    pub is_checked_out: Option<Value>,
}

impl LibraryGameItem {
    /// Converts to a `LibraryGame`, or `None` if the item has no usable BGG id
    pub fn into_game(self) -> Option<LibraryGame> {
        let bgg_id = self
            .bgg_id
            .as_ref()
            .and_then(value_as_u64)
            .filter(|id| *id != 0)?;

        Some(LibraryGame {
            bgg_id,
            name: self.name.unwrap_or_else(|| "Unknown".to_string()),
            catalog_number: self.catalog_number.as_ref().and_then(value_as_text),
            is_checked_out: self.is_checked_out.as_ref().is_some_and(value_as_flag),
        })
    }
}

fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_as_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.trim(), "1" | "true" | "True" | "TRUE"),
        _ => false,
    }
}

/// Client for a single tabletop.events games library
#[derive(Debug, Clone)]
pub struct LibraryClient {
    api_url: String,
    library_id: String,
    items_per_page: u32,
    page_delay: Duration,
}

impl Default for LibraryClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, GEN_CON_LIBRARY_ID)
    }
}

impl LibraryClient {
    pub fn new(api_url: &str, library_id: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            library_id: library_id.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    pub fn with_items_per_page(mut self, items_per_page: u32) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// URL of the paginated game listing
    pub fn games_url(&self) -> String {
        format!(
            "{}/api/library/{}/librarygames",
            self.api_url, self.library_id
        )
    }

    /// Fetch every page of the library and index the games by BGG id.
    ///
    /// Items without a BGG id are dropped since they can't be matched. Any
    /// failed page aborts the whole fetch: a partial catalog would make
    /// wanted games look unavailable.
    pub fn fetch_games(&self) -> Result<HashMap<u64, LibraryGame>> {
        let http = reqwest::blocking::Client::new();
        let url = self.games_url();
        let mut games = HashMap::new();
        let mut page: u64 = 1;

        log::info!("Fetching games library from: {}", url);

        loop {
            let listing = self.fetch_page(&http, &url, page)?;
            let total_pages = listing.result.paging.total_pages();

            for item in listing.result.items {
                if let Some(game) = item.into_game() {
                    games.insert(game.bgg_id, game);
                }
            }

            log::info!(
                "Page {}/{} ({} games with BGG IDs so far)",
                page,
                total_pages,
                games.len()
            );

            if page >= total_pages {
                break;
            }

            page += 1;
            if !self.page_delay.is_zero() {
                std::thread::sleep(self.page_delay);
            }
        }

        log::info!("Found {} games with BGG IDs in the library", games.len());
        Ok(games)
    }

    fn fetch_page(
        &self,
        http: &reqwest::blocking::Client,
        url: &str,
        page: u64,
    ) -> Result<LibraryGamesPage> {
        let response = http
            .get(url)
            .query(&[
                ("_page_number", page.to_string()),
                ("_items_per_page", self.items_per_page.to_string()),
                ("_include_relationships", "1".to_string()),
            ])
            .header("User-Agent", "library_wishlist/1.0")
            .send()?;

        if !response.status().is_success() {
            return Err(LibraryError::HttpStatus(response.status()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
