use log::debug;

use crate::card::Card;
use crate::error::DeckError;
use crate::hand::Actor;
use crate::rng::RandomSource;
use crate::storage::KeyValueStore;

use super::Game;

/// Dealer totals at or below this always draw another card.
const ALWAYS_HIT_AT: u8 = 15;

/// Dealer totals at or above this always stand.
const ALWAYS_STAND_AT: u8 = 17;

impl<R: RandomSource, S: KeyValueStore> Game<R, S> {
    /// Plays out the dealer's hand after the player stands.
    ///
    /// The dealer draws at 15 and below and stands at 17 and above. On
    /// exactly 16 a six-sided roll decides: three of the six faces hit, the
    /// other three stand. Standing is terminal for the round.
    ///
    /// Returns the cards drawn.
    pub(super) fn dealer_respond(&mut self) -> Result<Vec<Card>, DeckError> {
        let mut drawn = Vec::new();

        loop {
            let total = self.dealer.total();
            if total >= ALWAYS_STAND_AT {
                break;
            }
            if total <= ALWAYS_HIT_AT || self.rng.next_in(6) >= 3 {
                drawn.push(self.draw_to(Actor::Dealer)?);
            } else {
                break;
            }
        }

        debug!("{} stands.", Actor::Dealer);
        debug!("{} has {}", Actor::Dealer, self.dealer.total());
        Ok(drawn)
    }
}
