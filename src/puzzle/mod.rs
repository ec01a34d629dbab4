//! Matching puzzles: board generation and flip resolution.
//!
//! ## Key Types
//!
//! - [`PuzzleCard`]: One card on a board
//! - [`generate_puzzle_cards`]: Shuffled, paired board sized by floor depth
//! - [`PuzzleSession`]: A floor's puzzle in play, settled into gold and HP
//!
//! ## Example
//!
//! ```
//! use faction_sim::core::GameRng;
//! use faction_sim::puzzle::{FlipOutcome, PuzzleSession};
//!
//! let mut rng = GameRng::new(42);
//! let mut session = PuzzleSession::new(3, 2, &mut rng);
//! assert_eq!(session.cards().len(), 14);
//! assert_eq!(session.max_flips(), 9);
//!
//! let first = session.cards()[0].id;
//! assert_eq!(session.flip(first), Ok(FlipOutcome::Revealed { card: first }));
//!
//! let outcome = session.finish(&mut rng);
//! assert_eq!(outcome.hp_loss, 7);
//! ```

pub mod card;
pub mod generator;
pub mod session;

pub use card::PuzzleCard;
pub use generator::{generate_puzzle_cards, generate_puzzle_cards_with};
pub use session::{FlipOutcome, PuzzleError, PuzzleOutcome, PuzzleSession};
