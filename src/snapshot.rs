//! Read-only table views for renderers.

use alloc::vec::Vec;

use crate::card::CardFace;
use crate::game::{Game, Phase};
use crate::hand::Hand;
use crate::result::RoundResult;
use crate::score::Scoreboard;

/// One card as laid out on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    /// Position in the hand, in deal order.
    pub position: usize,
    /// What the viewer sees.
    pub face: CardFace,
}

/// Everything a renderer needs after a command has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// Player's cards in deal order.
    pub player_cards: Vec<CardView>,
    /// Dealer's cards in deal order.
    pub dealer_cards: Vec<CardView>,
    /// Player's total, once the player holds cards.
    pub player_total: Option<u32>,
    /// Dealer's total, unknown while the hole card is face down.
    pub dealer_total: Option<u32>,
    /// Running score.
    pub score: Scoreboard,
    /// Result of the round, present only while resolved.
    pub result: Option<RoundResult>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl TableSnapshot {
    pub(crate) fn capture(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            player_cards: views(game.player_hand()),
            dealer_cards: views(game.dealer_hand()),
            player_total: game.player_hand().visible_total(),
            dealer_total: game.dealer_hand().visible_total(),
            score: game.score(),
            result: game.result(),
            cards_remaining: game.cards_remaining(),
        }
    }

    /// Outcome banner (`"PLAYER WINS"`, `"DEALER WINS"`, `"DRAW"`), shown
    /// only while the round is resolved.
    #[must_use]
    pub fn banner(&self) -> Option<&'static str> {
        self.result.map(|result| result.outcome.banner())
    }
}

fn views(hand: &Hand) -> Vec<CardView> {
    hand.cards()
        .iter()
        .enumerate()
        .map(|(position, card)| CardView {
            position,
            face: card.face(),
        })
        .collect()
}
