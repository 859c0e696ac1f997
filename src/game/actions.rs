use log::debug;

use crate::card::Card;
use crate::error::{ActionError, NewRoundError};
use crate::hand::Actor;
use crate::result::RoundResult;
use crate::rng::RandomSource;
use crate::storage::{INITIAL_KEY, KeyValueStore, LOADED_KEY, MONEY_KEY};

use super::{Game, RoundPhase};

impl<R: RandomSource, S: KeyValueStore> Game<R, S> {
    /// Starts a new round: resets hands and deck, shuffles, and deals two
    /// cards each to the player and the dealer.
    ///
    /// The first-ever session seeds the balance with the starting debt,
    /// exactly once. If either actor is dealt 21 outright, the round
    /// resolves immediately and the result is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the opening
    /// deal runs out of cards.
    pub fn new_round(&mut self) -> Result<Option<RoundResult>, NewRoundError> {
        if self.phase == RoundPhase::Playing {
            return Err(NewRoundError::RoundInProgress);
        }

        self.init_balance();
        if self.store.get_item(LOADED_KEY).as_deref() != Some("1") {
            self.store.set_item(LOADED_KEY, "1");
        }

        self.phase = RoundPhase::Playing;
        self.player.clear();
        self.dealer.clear();
        self.deck.shuffle(&mut self.rng);
        self.receive_cards(Actor::Player)?;
        self.receive_cards(Actor::Dealer)?;

        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            return Ok(Some(self.resolve_round()));
        }
        Ok(None)
    }

    /// Seeds the starting debt on the first-ever session.
    fn init_balance(&mut self) {
        if self.store.get_item(INITIAL_KEY).as_deref() != Some("1") {
            self.store
                .set_item(MONEY_KEY, &self.options.starting_balance.to_string());
            self.store.set_item(INITIAL_KEY, "1");
        }
    }

    /// Player action: draw one card.
    ///
    /// Reaching 21 or busting resolves the round on the spot, without the
    /// dealer playing out their hand.
    ///
    /// # Errors
    ///
    /// Returns an error when no round is in progress or the pool is out of
    /// cards.
    pub fn hit(&mut self) -> Result<(Card, Option<RoundResult>), ActionError> {
        if self.phase != RoundPhase::Playing {
            return Err(ActionError::NoActiveRound);
        }

        let card = self.draw_to(Actor::Player)?;

        if self.player.is_blackjack() || self.player.is_bust() {
            return Ok((card, Some(self.resolve_round())));
        }
        Ok((card, None))
    }

    /// Player action: stand. The dealer plays out their hand, then the round
    /// resolves.
    ///
    /// # Errors
    ///
    /// Returns an error when no round is in progress or the dealer's draws
    /// empty the pool.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        if self.phase != RoundPhase::Playing {
            return Err(ActionError::NoActiveRound);
        }

        debug!("{} stands.", Actor::Player);
        debug!("{} has {}", Actor::Player, self.player.total());
        self.dealer_respond()?;
        Ok(self.resolve_round())
    }
}
