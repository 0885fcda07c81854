//! Turning what a player typed into a column index.

use crate::error::InputError;
use crate::game::{column_index, column_label};

/// Parse a typed column letter and check it against the available columns.
///
/// Surrounding whitespace is ignored and letters are case-insensitive. Only a
/// single letter naming a column on the board parses.
pub fn parse_column_choice(text: &str, available: &[usize]) -> Result<usize, InputError> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let column = match (chars.next(), chars.next()) {
        (Some(letter), None) => column_index(letter),
        _ => None,
    }
    .ok_or_else(|| InputError::Unparsable(trimmed.to_string()))?;

    if !available.contains(&column) {
        // column_index only returns on-board columns
        let label = column_label(column).unwrap_or('?');
        return Err(InputError::Unavailable(label));
    }
    Ok(column)
}
