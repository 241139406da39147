/// A game held by the remote library, keyed by its BGG id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryGame {
    pub bgg_id: u64,
    pub name: String,
    /// Shelf/catalog number shown by the library, if it has one
    pub catalog_number: Option<String>,
    pub is_checked_out: bool,
}

/// A game from the user's BGG collection export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionGame {
    pub name: String,
    /// 1-5, where 1 is the highest priority
    pub wishlist_priority: Option<i32>,
    pub want_to_play: bool,
}

/// A library game that is also on the user's list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedGame {
    pub bgg_id: u64,
    pub name: String,
    pub catalog_number: Option<String>,
    pub is_checked_out: bool,
    pub wishlist_priority: Option<i32>,
    pub want_to_play: bool,
}

impl MatchedGame {
    /// Combines a library record with the annotations from the user's collection
    pub fn new(library_game: &LibraryGame, collection_game: &CollectionGame) -> Self {
        Self {
            bgg_id: library_game.bgg_id,
            name: library_game.name.clone(),
            catalog_number: library_game.catalog_number.clone(),
            is_checked_out: library_game.is_checked_out,
            wishlist_priority: collection_game.wishlist_priority,
            want_to_play: collection_game.want_to_play,
        }
    }

    /// Returns the tier label, wishlist taking precedence over want-to-play
    pub fn priority_label(&self) -> Option<String> {
        match self.wishlist_priority {
            Some(priority) => Some(format!("[Wishlist {priority}]")),
            None if self.want_to_play => Some("[Want to Play]".to_string()),
            None => None,
        }
    }
}
