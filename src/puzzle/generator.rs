//! Puzzle board generation.

use tracing::debug;

use super::card::PuzzleCard;
use crate::core::GameRng;
use crate::economy::Economy;

/// Generate a shuffled board for `floor` with the standard economy.
///
/// See [`generate_puzzle_cards_with`].
pub fn generate_puzzle_cards(floor: u32, rng: &mut GameRng) -> Vec<PuzzleCard> {
    generate_puzzle_cards_with(&Economy::default(), floor, rng)
}

/// Generate a shuffled board for `floor`.
///
/// The board holds `economy.puzzle_card_count(floor)` cards: two of each value
/// in `1..=pair_count`, in uniformly random order, face down. Ids are assigned
/// by position after shuffling.
pub fn generate_puzzle_cards_with(
    economy: &Economy,
    floor: u32,
    rng: &mut GameRng,
) -> Vec<PuzzleCard> {
    let card_count = economy.puzzle_card_count(floor);
    let pair_count = card_count / 2;

    let mut values: Vec<u32> = (1..=pair_count).flat_map(|v| [v, v]).collect();
    rng.shuffle(&mut values);

    debug!(target: "faction_sim::puzzle", floor, card_count, "Puzzle generated");

    values
        .into_iter()
        .enumerate()
        .map(|(id, value)| PuzzleCard::new(id, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_three_board() {
        let mut rng = GameRng::new(42);
        let cards = generate_puzzle_cards(3, &mut rng);

        assert_eq!(cards.len(), 14);
        for value in 1..=7 {
            assert_eq!(cards.iter().filter(|c| c.value == value).count(), 2);
        }
        assert!(cards.iter().all(|c| c.is_selectable()));
    }

    #[test]
    fn test_ids_are_positional() {
        let mut rng = GameRng::new(5);
        let cards = generate_puzzle_cards(6, &mut rng);

        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.id, i);
        }
    }

    #[test]
    fn test_boards_are_shuffled() {
        let mut rng = GameRng::new(11);
        let sorted: Vec<u32> = (1..=5).flat_map(|v| [v, v]).collect();

        let differs = (0..5).any(|_| {
            let values: Vec<u32> =
                generate_puzzle_cards(0, &mut rng).iter().map(|c| c.value).collect();
            values != sorted
        });
        assert!(differs);
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = generate_puzzle_cards(2, &mut GameRng::new(77));
        let b = generate_puzzle_cards(2, &mut GameRng::new(77));
        assert_eq!(a, b);
    }
}
