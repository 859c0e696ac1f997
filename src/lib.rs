//! A single-player blackjack engine with pluggable rendering, input, and
//! persistence boundaries.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! dealing, player hits and stands, the dealer's response, and resolution
//! against a persisted balance. Drawing goes through the [`Surface`] trait,
//! key presses map to actions via [`action_for_key`], and the balance lives
//! behind the [`KeyValueStore`] trait.
//!
//! # Example
//!
//! ```
//! use pocketjack::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! if game.new_round()?.is_none() {
//!     let result = game.stand().expect("round is in progress");
//!     println!("{}", result.message());
//! }
//! # Ok::<(), pocketjack::NewRoundError>(())
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod render;
pub mod result;
pub mod rng;
pub mod storage;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError, NewRoundError};
pub use game::{Game, RoundPhase, outcome_for};
pub use hand::{Actor, Hand};
pub use input::{Action, action_for_key};
pub use options::GameOptions;
pub use render::Surface;
pub use result::{Outcome, RoundResult};
pub use rng::{ChaChaSource, RandomSource, ScriptedSource};
pub use storage::{KeyValueStore, MemoryStore};
