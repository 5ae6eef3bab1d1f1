//! Board grid of guess tiles
//!
//! A fixed `max_attempts x WORD_LENGTH` grid. Rows below the current one
//! carry frozen feedback, the current row mirrors the live buffer at render
//! time, and later rows stay empty until reached.

use crate::core::{LetterFeedback, WORD_LENGTH};

/// One character cell, addressed by (row, column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub feedback: Option<LetterFeedback>,
}

impl Tile {
    /// A tile is finalized once its row has been evaluated
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        self.feedback.is_some()
    }
}

/// Fixed grid of evaluated guesses
#[derive(Debug, Clone, Default)]
pub struct Board {
    rows: Vec<[Tile; WORD_LENGTH]>,
}

impl Board {
    /// Empty board sized to the session's attempt budget
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            rows: vec![[Tile::default(); WORD_LENGTH]; max_attempts],
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn tile(&self, row: usize, column: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|tiles| tiles.get(column)).copied()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Tile; WORD_LENGTH]> {
        self.rows.get(row)
    }

    /// Whether a row has been evaluated and frozen
    #[must_use]
    pub fn is_row_finalized(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|tiles| tiles.iter().all(Tile::is_finalized))
    }

    /// Freeze an evaluated row with the authority's classifications
    ///
    /// `entries` is the (letter, classification) sequence in response order.
    /// Callers apply feedback to a row exactly once; tiles never change
    /// after that.
    pub fn apply_feedback(&mut self, row: usize, entries: &[(char, LetterFeedback)]) {
        let Some(tiles) = self.rows.get_mut(row) else {
            return;
        };
        for (tile, &(letter, feedback)) in tiles.iter_mut().zip(entries) {
            tile.letter = Some(letter.to_ascii_uppercase());
            tile.feedback = Some(feedback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(entries: [(char, LetterFeedback); WORD_LENGTH]) -> Vec<(char, LetterFeedback)> {
        entries.to_vec()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6);
        assert_eq!(board.row_count(), 6);

        for row in 0..6 {
            for column in 0..WORD_LENGTH {
                let tile = board.tile(row, column).unwrap();
                assert_eq!(tile, Tile::default());
            }
            assert!(!board.is_row_finalized(row));
        }
    }

    #[test]
    fn tile_out_of_range_is_none() {
        let board = Board::new(4);
        assert!(board.tile(4, 0).is_none());
        assert!(board.tile(0, WORD_LENGTH).is_none());
    }

    #[test]
    fn apply_feedback_freezes_row_in_order() {
        use LetterFeedback::{CorrectPosition, IncorrectPosition, NotInWord};

        let mut board = Board::new(6);
        let entries = row_of([
            ('C', CorrectPosition),
            ('R', IncorrectPosition),
            ('A', NotInWord),
            ('N', NotInWord),
            ('E', CorrectPosition),
        ]);

        board.apply_feedback(0, &entries);

        assert!(board.is_row_finalized(0));
        for (column, &(letter, feedback)) in entries.iter().enumerate() {
            let tile = board.tile(0, column).unwrap();
            assert_eq!(tile.letter, Some(letter));
            assert_eq!(tile.feedback, Some(feedback));
        }
        // Other rows untouched
        assert!(!board.is_row_finalized(1));
    }

    #[test]
    fn apply_feedback_uppercases_letters() {
        let mut board = Board::new(6);
        board.apply_feedback(
            0,
            &row_of([
                ('c', LetterFeedback::NotInWord),
                ('r', LetterFeedback::NotInWord),
                ('a', LetterFeedback::NotInWord),
                ('n', LetterFeedback::NotInWord),
                ('e', LetterFeedback::NotInWord),
            ]),
        );
        assert_eq!(board.tile(0, 0).unwrap().letter, Some('C'));
    }

    #[test]
    fn apply_feedback_out_of_range_is_noop() {
        let mut board = Board::new(2);
        board.apply_feedback(
            5,
            &row_of([
                ('a', LetterFeedback::NotInWord),
                ('b', LetterFeedback::NotInWord),
                ('c', LetterFeedback::NotInWord),
                ('d', LetterFeedback::NotInWord),
                ('e', LetterFeedback::NotInWord),
            ]),
        );
        assert!(!board.is_row_finalized(0));
        assert!(!board.is_row_finalized(1));
    }
}
