//! Matching-puzzle cards.

use serde::{Deserialize, Serialize};

/// One card on a matching-puzzle board.
///
/// `id` is the card's position on the board and only keys UI elements.
/// `value` is the pair key: exactly two cards on a board share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleCard {
    pub id: usize,
    pub value: u32,
    pub flipped: bool,
    pub matched: bool,
}

impl PuzzleCard {
    /// A face-down, unmatched card.
    #[must_use]
    pub const fn new(id: usize, value: u32) -> Self {
        Self {
            id,
            value,
            flipped: false,
            matched: false,
        }
    }

    /// Can this card be turned over?
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }
}
