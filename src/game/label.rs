//! Letters shown to players for each column: `A` is column 0.

use super::board::WIDTH;

const FIRST: u8 = b'A';

/// Letter for a column index.
pub fn column_label(column: usize) -> Option<char> {
    (column < WIDTH).then(|| char::from(FIRST + column as u8))
}

/// Column index for a letter, case-insensitive.
pub fn column_index(label: char) -> Option<usize> {
    if !label.is_ascii_alphabetic() {
        return None;
    }
    let offset = (label.to_ascii_uppercase() as u8).checked_sub(FIRST)? as usize;
    (offset < WIDTH).then_some(offset)
}

/// Letters for a list of column indices, skipping anything off the board.
pub fn labels_for(columns: &[usize]) -> Vec<char> {
    columns.iter().filter_map(|&col| column_label(col)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_cover_board() {
        let labels: Vec<char> = (0..WIDTH).filter_map(column_label).collect();
        assert_eq!(labels, vec!['A', 'B', 'C', 'D', 'E', 'F', 'G']);
        assert_eq!(column_label(WIDTH), None);
    }

    #[test]
    fn test_label_round_trip() {
        for col in 0..WIDTH {
            let label = column_label(col).unwrap();
            assert_eq!(column_index(label), Some(col));
            assert_eq!(column_index(label.to_ascii_lowercase()), Some(col));
        }
    }

    #[test]
    fn test_rejects_letters_off_board() {
        assert_eq!(column_index('H'), None);
        assert_eq!(column_index('z'), None);
        assert_eq!(column_index('1'), None);
        assert_eq!(column_index('@'), None);
    }

    #[test]
    fn test_labels_for() {
        assert_eq!(labels_for(&[0, 3, 6, 9]), vec!['A', 'D', 'G']);
    }
}
