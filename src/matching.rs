use crate::models::{CollectionGame, LibraryGame, MatchedGame};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Find the library games that are also in the user's collection.
///
/// Sorted by wishlist priority (1 first, unranked games after every ranked
/// one), then case-insensitively by name. The BGG id breaks any remaining
/// tie so the output never depends on hash map iteration order.
pub fn find_matching_games(
    library_games: &HashMap<u64, LibraryGame>,
    collection_games: &HashMap<u64, CollectionGame>,
) -> Vec<MatchedGame> {
    let mut matching: Vec<MatchedGame> = collection_games
        .iter()
        .filter_map(|(bgg_id, collection_game)| {
            library_games
                .get(bgg_id)
                .map(|library_game| MatchedGame::new(library_game, collection_game))
        })
        .collect();

    matching.sort_by(compare_matches);
    matching
}

/// Ordering used for the match list
pub fn compare_matches(a: &MatchedGame, b: &MatchedGame) -> Ordering {
    priority_rank(a)
        .cmp(&priority_rank(b))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.bgg_id.cmp(&b.bgg_id))
}

// (false, p) sorts before (true, _), so unranked games come last
fn priority_rank(game: &MatchedGame) -> (bool, i32) {
    match game.wishlist_priority {
        Some(priority) => (false, priority),
        None => (true, 0),
    }
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod tests;
