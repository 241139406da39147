use crate::models::MatchedGame;
use std::path::Path;

/// Matches split by availability
#[derive(Debug)]
pub struct AvailabilityFilter<'a> {
    pub displayed: Vec<&'a MatchedGame>,
    /// Checked-out games left out of `displayed`
    pub hidden_count: usize,
}

/// Drop checked-out games unless they were asked for
pub fn filter_availability(matches: &[MatchedGame], show_checked_out: bool) -> AvailabilityFilter<'_> {
    let displayed: Vec<&MatchedGame> = matches
        .iter()
        .filter(|game| show_checked_out || !game.is_checked_out)
        .collect();
    let hidden_count = matches.len() - displayed.len();

    AvailabilityFilter {
        displayed,
        hidden_count,
    }
}

/// `- [Wishlist 2] Catan (#0042) [CHECKED OUT]`, leaving out whatever is absent
pub fn format_game_line(game: &MatchedGame) -> String {
    let prefix = game
        .priority_label()
        .map(|label| format!("{label} "))
        .unwrap_or_default();
    let catalog = game
        .catalog_number
        .as_ref()
        .map(|number| format!(" (#{number})"))
        .unwrap_or_default();
    let status = if game.is_checked_out {
        " [CHECKED OUT]"
    } else {
        ""
    };

    format!("- {prefix}{}{catalog}{status}", game.name)
}

/// Build the full report for a sorted match list
pub fn format_report(matches: &[MatchedGame], show_checked_out: bool, library_name: &str) -> String {
    let filtered = filter_availability(matches, show_checked_out);

    let mut lines = Vec::with_capacity(filtered.displayed.len() + 5);
    lines.push(format!("Found {} matching games!", matches.len()));
    if filtered.hidden_count > 0 {
        lines.push(format!(
            "({} currently checked out, use --show-checked-out to include)",
            filtered.hidden_count
        ));
    }
    lines.push(String::new());
    lines.push(format!("Games available in the {library_name}:"));
    lines.push("-".repeat(50));

    lines.extend(filtered.displayed.into_iter().map(format_game_line));

    lines.join("\n")
}

/// Instructions printed when the collection export can't be found
pub fn export_instructions(csv_path: &Path) -> String {
    format!(
        "ERROR: CSV file not found: {}\n\
         \n\
         To export your BGG collection:\n\
         1. Go to https://boardgamegeek.com/collection/user/YOUR_USERNAME\n\
         2. Click the download icon (arrow pointing down)\n\
         3. Save as bgg_games.csv in this directory",
        csv_path.display()
    )
}

#[cfg(test)]
#[path = "formatters_tests.rs"]
mod tests;
