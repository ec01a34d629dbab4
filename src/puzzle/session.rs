//! Flip resolution for one floor's matching puzzle.
//!
//! The player turns cards over two at a time. Each pair of reveals is an
//! attempt and costs one flip from the budget. A matching pair stays face up;
//! a mismatch is turned back face down. The session ends when the board is
//! cleared or the budget runs out, and [`PuzzleSession::finish`] converts the
//! result into gold and hit-point deltas.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::card::PuzzleCard;
use super::generator::generate_puzzle_cards_with;
use crate::core::GameRng;
use crate::economy::Economy;

/// Errors from an illegal flip.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("no card with id {0}")]
    UnknownCard(usize),
    #[error("card {0} is already matched")]
    AlreadyMatched(usize),
    #[error("card {0} is already face up")]
    AlreadyFaceUp(usize),
    #[error("puzzle is finished")]
    Finished,
    #[error("inconsistent puzzle state: {0}")]
    InvalidState(&'static str),
}

/// What a single flip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of an attempt is now face up.
    Revealed { card: usize },
    /// Second card matched the first; both stay face up.
    Matched { first: usize, second: usize, value: u32 },
    /// Second card did not match; both are face down again.
    Mismatched { first: usize, second: usize },
}

/// Result of a finished (or abandoned) puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleOutcome {
    pub matched_pairs: u32,
    pub unmatched_pairs: u32,
    pub flips_used: u32,
    /// Gold earned; only a cleared board pays out.
    pub gold: u64,
    pub hp_loss: u32,
}

impl PuzzleOutcome {
    #[must_use]
    pub fn cleared(&self) -> bool {
        self.unmatched_pairs == 0
    }
}

/// One floor's puzzle in progress.
///
/// Saved sessions carry their economy, so a restored session pays out under
/// the same tuning. Loading rejects boards that play could not have produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct PuzzleSession {
    floor: u32,
    cards: Vec<PuzzleCard>,
    max_flips: u32,
    flips_used: u32,
    pending: Option<usize>,
    matched_pairs: u32,
    economy: Economy,
}

/// Unchecked wire form of [`PuzzleSession`].
#[derive(Deserialize)]
struct SessionRecord {
    floor: u32,
    cards: Vec<PuzzleCard>,
    max_flips: u32,
    flips_used: u32,
    pending: Option<usize>,
    matched_pairs: u32,
    #[serde(default)]
    economy: Economy,
}

impl TryFrom<SessionRecord> for PuzzleSession {
    type Error = PuzzleError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let cards = &record.cards;
        if cards.len() % 2 != 0 {
            return Err(PuzzleError::InvalidState("odd number of cards"));
        }
        if cards.iter().enumerate().any(|(i, card)| card.id != i) {
            return Err(PuzzleError::InvalidState("card ids are not board positions"));
        }

        let mut copies: FxHashMap<u32, u32> = FxHashMap::default();
        for card in cards {
            *copies.entry(card.value).or_default() += 1;
        }
        if copies.values().any(|&n| n != 2) {
            return Err(PuzzleError::InvalidState("card values are not in pairs"));
        }

        if record.flips_used > record.max_flips {
            return Err(PuzzleError::InvalidState("more flips used than allowed"));
        }

        let matched = cards.iter().filter(|c| c.matched).count();
        if cards.iter().any(|c| c.matched && !c.flipped) {
            return Err(PuzzleError::InvalidState("matched card is face down"));
        }
        if matched != record.matched_pairs as usize * 2 {
            return Err(PuzzleError::InvalidState("matched pair count disagrees with cards"));
        }

        let face_up: Vec<usize> = cards
            .iter()
            .filter(|c| c.flipped && !c.matched)
            .map(|c| c.id)
            .collect();
        if face_up != record.pending.into_iter().collect::<Vec<_>>() {
            return Err(PuzzleError::InvalidState("pending card is not the one face up"));
        }

        Ok(Self {
            floor: record.floor,
            cards: record.cards,
            max_flips: record.max_flips,
            flips_used: record.flips_used,
            pending: record.pending,
            matched_pairs: record.matched_pairs,
            economy: record.economy,
        })
    }
}

impl PuzzleSession {
    /// Start a puzzle on `floor` for a player with `spirit`, standard economy.
    pub fn new(floor: u32, spirit: u32, rng: &mut GameRng) -> Self {
        Self::with_economy(Economy::default(), floor, spirit, rng)
    }

    /// Start a puzzle using a tuned economy.
    pub fn with_economy(economy: Economy, floor: u32, spirit: u32, rng: &mut GameRng) -> Self {
        let cards = generate_puzzle_cards_with(&economy, floor, rng);
        let max_flips = economy.puzzle_max_flips(cards.len() as u32, spirit);
        Self {
            floor,
            cards,
            max_flips,
            flips_used: 0,
            pending: None,
            matched_pairs: 0,
            economy,
        }
    }

    #[must_use]
    pub fn floor(&self) -> u32 {
        self.floor
    }

    #[must_use]
    pub fn cards(&self) -> &[PuzzleCard] {
        &self.cards
    }

    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.cards.len() as u32 / 2
    }

    #[must_use]
    pub fn max_flips(&self) -> u32 {
        self.max_flips
    }

    #[must_use]
    pub fn flips_remaining(&self) -> u32 {
        self.max_flips.saturating_sub(self.flips_used)
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    #[must_use]
    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    /// Is the board cleared or the budget spent?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.matched_pairs == self.pair_count() || self.flips_used >= self.max_flips
    }

    /// Turn over a card.
    pub fn flip(&mut self, card_id: usize) -> Result<FlipOutcome, PuzzleError> {
        if self.is_finished() {
            return Err(PuzzleError::Finished);
        }

        let card = self.cards.get_mut(card_id).ok_or(PuzzleError::UnknownCard(card_id))?;
        if card.matched {
            return Err(PuzzleError::AlreadyMatched(card_id));
        }
        if card.flipped {
            return Err(PuzzleError::AlreadyFaceUp(card_id));
        }
        card.flipped = true;
        let value = card.value;

        let Some(first) = self.pending.take() else {
            self.pending = Some(card_id);
            return Ok(FlipOutcome::Revealed { card: card_id });
        };

        self.flips_used += 1;
        if self.cards[first].value == value {
            self.cards[first].matched = true;
            self.cards[card_id].matched = true;
            self.matched_pairs += 1;
            Ok(FlipOutcome::Matched {
                first,
                second: card_id,
                value,
            })
        } else {
            self.cards[first].flipped = false;
            self.cards[card_id].flipped = false;
            Ok(FlipOutcome::Mismatched {
                first,
                second: card_id,
            })
        }
    }

    /// End the puzzle and settle rewards.
    ///
    /// May be called before the session is finished; every pair not yet
    /// matched then counts against the player.
    pub fn finish(self, rng: &mut GameRng) -> PuzzleOutcome {
        let unmatched_pairs = self.pair_count().saturating_sub(self.matched_pairs);
        let gold = if unmatched_pairs == 0 {
            self.economy.puzzle_gold_reward(self.floor, rng)
        } else {
            0
        };
        let hp_loss = self.economy.puzzle_hp_loss(unmatched_pairs);

        debug!(
            target: "faction_sim::puzzle",
            floor = self.floor,
            matched = self.matched_pairs,
            unmatched = unmatched_pairs,
            gold,
            hp_loss,
            "Puzzle settled"
        );

        PuzzleOutcome {
            matched_pairs: self.matched_pairs,
            unmatched_pairs,
            flips_used: self.flips_used,
            gold,
            hp_loss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Card ids grouped by pair value.
    fn pairs(session: &PuzzleSession) -> Vec<(usize, usize)> {
        (1..=session.pair_count())
            .map(|v| {
                let ids: Vec<_> = session
                    .cards()
                    .iter()
                    .filter(|c| c.value == v)
                    .map(|c| c.id)
                    .collect();
                (ids[0], ids[1])
            })
            .collect()
    }

    fn mismatch(session: &PuzzleSession) -> (usize, usize) {
        let a = session.cards().iter().find(|c| c.is_selectable()).unwrap();
        let b = session
            .cards()
            .iter()
            .find(|c| c.is_selectable() && c.value != a.value)
            .unwrap();
        (a.id, b.id)
    }

    #[test]
    fn test_new_session() {
        let mut rng = GameRng::new(1);
        let session = PuzzleSession::new(3, 2, &mut rng);

        assert_eq!(session.cards().len(), 14);
        assert_eq!(session.pair_count(), 7);
        assert_eq!(session.max_flips(), 9);
        assert_eq!(session.flips_remaining(), 9);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_perfect_clear() {
        let mut rng = GameRng::new(2);
        let mut session = PuzzleSession::new(2, 0, &mut rng);

        for (a, b) in pairs(&session) {
            assert_eq!(session.flip(a), Ok(FlipOutcome::Revealed { card: a }));
            assert!(matches!(session.flip(b), Ok(FlipOutcome::Matched { .. })));
        }

        assert!(session.is_finished());
        assert_eq!(session.flips_remaining(), 0);

        let outcome = session.finish(&mut rng);
        assert!(outcome.cleared());
        assert_eq!(outcome.hp_loss, 0);
        assert!((4..=10).contains(&outcome.gold));
    }

    #[test]
    fn test_mismatch_flips_back_and_costs_a_flip() {
        let mut rng = GameRng::new(3);
        let mut session = PuzzleSession::new(0, 1, &mut rng);
        let (a, b) = mismatch(&session);

        session.flip(a).unwrap();
        assert_eq!(session.flip(b), Ok(FlipOutcome::Mismatched { first: a, second: b }));

        assert!(!session.cards()[a].flipped);
        assert!(!session.cards()[b].flipped);
        assert_eq!(session.flips_remaining(), 5);
    }

    #[test]
    fn test_flip_errors() {
        let mut rng = GameRng::new(4);
        let mut session = PuzzleSession::new(0, 0, &mut rng);
        let (a, b) = pairs(&session)[0];

        assert_eq!(session.flip(99), Err(PuzzleError::UnknownCard(99)));

        session.flip(a).unwrap();
        assert_eq!(session.flip(a), Err(PuzzleError::AlreadyFaceUp(a)));

        session.flip(b).unwrap();
        assert_eq!(session.flip(a), Err(PuzzleError::AlreadyMatched(a)));
    }

    #[test]
    fn test_budget_exhaustion_ends_session() {
        let mut rng = GameRng::new(5);
        let mut session = PuzzleSession::new(0, 0, &mut rng);

        while !session.is_finished() {
            let (a, b) = mismatch(&session);
            session.flip(a).unwrap();
            session.flip(b).unwrap();
        }

        assert_eq!(session.flips_remaining(), 0);
        let any = session.cards()[0].id;
        assert_eq!(session.flip(any), Err(PuzzleError::Finished));

        let outcome = session.finish(&mut rng);
        assert_eq!(outcome.matched_pairs, 0);
        assert_eq!(outcome.unmatched_pairs, 5);
        assert_eq!(outcome.hp_loss, 5);
        assert_eq!(outcome.gold, 0);
    }

    #[test]
    fn test_abandon_counts_remaining_pairs() {
        let mut rng = GameRng::new(6);
        let mut session = PuzzleSession::new(1, 0, &mut rng);
        let (a, b) = pairs(&session)[0];
        session.flip(a).unwrap();
        session.flip(b).unwrap();

        let outcome = session.finish(&mut rng);
        assert_eq!(outcome.matched_pairs, 1);
        assert_eq!(outcome.unmatched_pairs, 5);
        assert_eq!(outcome.flips_used, 1);
        assert_eq!(outcome.gold, 0);
    }

    fn saved(session: &PuzzleSession) -> serde_json::Value {
        serde_json::to_value(session).unwrap()
    }

    fn load(value: serde_json::Value) -> Result<PuzzleSession, String> {
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    #[test]
    fn test_restore_accepts_mid_attempt_board() {
        let mut rng = GameRng::new(7);
        let mut session = PuzzleSession::new(1, 1, &mut rng);
        let (a, _) = pairs(&session)[0];
        session.flip(a).unwrap();

        let restored = load(saved(&session)).unwrap();
        assert_eq!(restored.cards(), session.cards());
        assert_eq!(restored.flips_remaining(), session.flips_remaining());
    }

    #[test]
    fn test_restore_rejects_pending_off_the_board() {
        let mut rng = GameRng::new(8);
        let session = PuzzleSession::new(0, 0, &mut rng);
        let mut value = saved(&session);
        value["pending"] = 99.into();

        let err = load(value).unwrap_err();
        assert!(err.contains("pending card"), "{err}");
    }

    #[test]
    fn test_restore_rejects_overspent_budget() {
        let mut rng = GameRng::new(9);
        let session = PuzzleSession::new(0, 0, &mut rng);
        let mut value = saved(&session);
        value["flips_used"] = (session.max_flips() + 3).into();

        let err = load(value).unwrap_err();
        assert!(err.contains("more flips used than allowed"), "{err}");
    }

    #[test]
    fn test_restore_rejects_inconsistent_cards() {
        let mut rng = GameRng::new(10);
        let session = PuzzleSession::new(0, 0, &mut rng);

        let mut value = saved(&session);
        value["matched_pairs"] = 2.into();
        assert!(load(value).unwrap_err().contains("matched pair count"));

        let mut value = saved(&session);
        value["cards"][0]["id"] = 5.into();
        assert!(load(value).unwrap_err().contains("board positions"));

        let mut value = saved(&session);
        value["cards"].as_array_mut().unwrap().pop();
        assert!(load(value).unwrap_err().contains("odd number"));

        let mut value = saved(&session);
        value["cards"][0]["flipped"] = true.into();
        assert!(load(value).unwrap_err().contains("pending card"));
    }
}
