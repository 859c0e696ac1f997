use log::{debug, info};

use crate::hand::Actor;
use crate::result::{Outcome, RoundResult};
use crate::rng::RandomSource;
use crate::storage::{KeyValueStore, LOADED_KEY, MONEY_KEY};

use super::{Game, RoundPhase};

/// Classifies a finished round from the two final totals.
///
/// Arms are checked in order and the first match wins. Totals above 21 are
/// busts; ties and double busts both push.
#[must_use]
pub fn outcome_for(player_total: u8, dealer_total: u8) -> Outcome {
    let (ps, ds) = (player_total, dealer_total);

    if ps == 21 && ds != 21 {
        Outcome::PlayerBlackjack
    } else if ds == 21 && ps != 21 {
        Outcome::DealerBlackjack
    } else if ps == ds || (ps > 21 && ds > 21) {
        Outcome::Push
    } else if ps <= 21 && ps > ds {
        Outcome::PlayerWin
    } else if ds <= 21 && ds > ps {
        Outcome::DealerWin
    } else if ps > 21 && ds <= 21 {
        Outcome::PlayerBust
    } else {
        // Remaining case: ds > 21 and ps <= 21.
        Outcome::DealerBust
    }
}

impl<R: RandomSource, S: KeyValueStore> Game<R, S> {
    /// Ends the round: leaves the `Playing` phase, classifies the totals,
    /// and moves the balance.
    ///
    /// The phase transition happens first; the balance moves at most once
    /// per completed round, and only outside `Playing`.
    pub(super) fn resolve_round(&mut self) -> RoundResult {
        let dealer_total = self.dealer.total();
        let player_total = self.player.total();
        debug!("{} has: {} --> {dealer_total}", Actor::Dealer, self.dealer);
        debug!("{} has: {} --> {player_total}", Actor::Player, self.player);

        let outcome = outcome_for(player_total, dealer_total);
        self.phase = RoundPhase::Resolved(outcome);

        let delta = outcome.delta(self.options.stake);
        let balance = self.apply_delta(delta);
        self.store.set_item(LOADED_KEY, "0");

        RoundResult {
            outcome,
            player_total,
            dealer_total,
            delta,
            balance,
        }
    }

    /// Moves the persisted balance by `delta` once the round is no longer in
    /// play. A zero delta leaves the store untouched.
    ///
    /// A balance that does not parse stays malformed: the write mirrors the
    /// failed arithmetic and stores `NaN`.
    fn apply_delta(&mut self, delta: i64) -> Option<i64> {
        debug_assert!(self.phase != RoundPhase::Playing);

        if delta == 0 {
            return self.balance();
        }

        if delta > 0 {
            info!("Player wins $ {delta}");
        } else {
            info!("Player loses $ {}", -delta);
        }

        match self.balance() {
            Some(balance) => {
                let next = balance + delta;
                self.store.set_item(MONEY_KEY, &next.to_string());
                Some(next)
            }
            None => {
                self.store.set_item(MONEY_KEY, "NaN");
                None
            }
        }
    }
}
