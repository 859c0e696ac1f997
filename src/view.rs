//! Table layout, drawn onto an injected surface.

use crate::game::{Game, RoundPhase};
use crate::render::Surface;
use crate::rng::RandomSource;
use crate::storage::KeyValueStore;

const CARD_STEP: u32 = 80;

/// Redraws the whole table for the current game state.
///
/// Mid-round only the dealer's up card shows; once the round resolves, the
/// dealer's full hand, their total, and the announcer line are drawn. A
/// balance that does not parse is shown as `NaN`, not coerced.
pub fn draw_table<D, R, S>(surface: &mut D, game: &Game<R, S>)
where
    D: Surface + ?Sized,
    R: RandomSource,
    S: KeyValueStore,
{
    surface.clear();

    let balance = game
        .balance()
        .map_or_else(|| "NaN".to_string(), |b| b.to_string());
    surface.draw_message(&format!("Balance $ {balance}"), 575, 50);

    surface.draw_message("DEALER", 250, 50);
    if let Some(&up_card) = game.dealer.cards().first() {
        surface.draw_card(up_card, 180, 110);
    }

    surface.draw_message("PLAYER", 250, 400);
    surface.draw_message(&game.player.total().to_string(), 250, 430);
    let mut x = 180;
    for &card in game.player.cards() {
        surface.draw_card(card, x, 250);
        x += CARD_STEP;
    }

    if let RoundPhase::Resolved(outcome) = game.phase {
        surface.draw_message(&game.dealer.total().to_string(), 250, 80);
        let mut x = 260;
        for &card in game.dealer.cards().iter().skip(1) {
            surface.draw_card(card, x, 110);
            x += CARD_STEP;
        }
        let message = outcome.message(game.player.total(), game.dealer.total());
        surface.draw_message(&message, 250, 480);
        surface.draw_message("New Game? [Y/N]", 250, 520);
    } else {
        surface.draw_message("Hit [H] or Stand? [S]", 250, 520);
    }
}
