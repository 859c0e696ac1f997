//! Game engine and round state management.

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{Actor, Hand};
use crate::options::GameOptions;
use crate::rng::{ChaChaSource, RandomSource};
use crate::storage::{KeyValueStore, MONEY_KEY, MemoryStore};

mod actions;
mod dealer;
mod resolve;
pub mod state;

pub use resolve::outcome_for;
pub use state::RoundPhase;

/// A single-player blackjack table.
///
/// The game owns the deck, both hands, and the round phase. Randomness and
/// persistence are injected capabilities, so rounds can be replayed and
/// observed under test.
#[derive(Debug)]
pub struct Game<R = ChaChaSource, S = MemoryStore> {
    /// The table's cards.
    pub deck: Deck,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// Current phase of the round lifecycle.
    pub phase: RoundPhase,
    /// Table configuration.
    pub options: GameOptions,
    rng: R,
    store: S,
}

impl Game {
    /// Creates a game with the default generator and an in-memory session
    /// store.
    ///
    /// # Example
    ///
    /// ```
    /// use pocketjack::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let _dealt = game.new_round()?;
    /// # Ok::<(), pocketjack::NewRoundError>(())
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_parts(options, ChaChaSource::new(seed), MemoryStore::new())
    }
}

impl<R: RandomSource, S: KeyValueStore> Game<R, S> {
    /// Creates a game from injected randomness and persistence.
    pub fn with_parts(options: GameOptions, rng: R, store: S) -> Self {
        Self {
            deck: Deck::new(),
            player: Hand::new(Actor::Player),
            dealer: Hand::new(Actor::Dealer),
            phase: RoundPhase::NotStarted,
            options,
            rng,
            store,
        }
    }

    /// The persisted balance, if the stored value parses as an integer.
    ///
    /// A malformed value is surfaced as `None` rather than coerced; the
    /// table displays it as `NaN`.
    #[must_use]
    pub fn balance(&self) -> Option<i64> {
        self.store.get_item(MONEY_KEY)?.parse().ok()
    }

    /// Read access to the session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Deals two cards to an actor's hand.
    fn receive_cards(&mut self, actor: Actor) -> Result<(), DeckError> {
        for _ in 0..2 {
            let card = self.deck.draw()?;
            self.hand_mut(actor).add_card(card);
        }
        debug!("{actor} receives their cards.");
        Ok(())
    }

    /// Deals one card to an actor's hand.
    fn draw_to(&mut self, actor: Actor) -> Result<Card, DeckError> {
        let card = self.deck.draw()?;
        self.hand_mut(actor).add_card(card);
        debug!("{actor} hits.");
        Ok(card)
    }

    fn hand_mut(&mut self, actor: Actor) -> &mut Hand {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Dealer => &mut self.dealer,
        }
    }
}
