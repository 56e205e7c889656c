//! Game engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{Hand, Seat};
use crate::options::GameOptions;
use crate::policy::DealerPolicy;
use crate::result::{Outcome, ResolveReason, RoundResult};
use crate::score::Scoreboard;
use crate::snapshot::TableSnapshot;

mod actions;
mod dealer;
pub mod state;

pub use state::{Command, CommandStatus, Phase};

/// A heads-up blackjack table: one player against the dealer.
///
/// The game owns the deck, both hands, and the scoreboard. It only moves in
/// response to commands; each command is applied completely before it
/// returns, and a command that does not fit the current phase is ignored.
///
/// # Example
///
/// ```
/// use bjduel::{Command, Game, GameOptions, Phase};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.apply(Command::StartRound).unwrap();
/// assert_eq!(game.phase(), Phase::PlayerTurn);
///
/// game.apply(Command::Stand).unwrap();
/// assert_eq!(game.phase(), Phase::Resolved);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Dealer decision rule derived from the options.
    policy: DealerPolicy,
    /// The shared deck, kept across rounds.
    deck: Deck,
    /// Current phase.
    phase: Phase,
    /// Player's hand for the current round.
    player: Hand,
    /// Dealer's hand for the current round.
    dealer: Hand,
    /// Wins across rounds.
    score: Scoreboard,
    /// Outcome of the round, held while resolved.
    result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game whose deck is shuffled from `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new game that deals from the given deck.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let policy = options.dealer_policy();
        Self {
            options,
            policy,
            deck,
            phase: Phase::Idle,
            player: Hand::new(Seat::Player),
            dealer: Hand::new(Seat::Dealer),
            score: Scoreboard::new(),
            result: None,
        }
    }

    /// Applies one input command.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyAfterRebuild`] if the deck fails to rebuild
    /// while dealing, which indicates a bug.
    pub fn apply(&mut self, command: Command) -> Result<CommandStatus, DeckError> {
        match command {
            Command::StartRound => self.start_round(),
            Command::Draw => self.draw(),
            Command::Stand => self.stand(),
            Command::Forfeit => Ok(self.forfeit()),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the running score.
    #[must_use]
    pub const fn score(&self) -> Scoreboard {
        self.score
    }

    /// Returns the result of the round while it is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns a read-only view of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(self)
    }

    /// Clears the resolved round and returns the table to idle.
    ///
    /// The score is kept. Ignored unless the round is resolved.
    pub fn clear_round(&mut self) -> CommandStatus {
        if self.phase != Phase::Resolved {
            log::debug!("clear_round ignored in {:?}", self.phase);
            return CommandStatus::Ignored;
        }

        self.reset_round();
        CommandStatus::Applied
    }

    /// Discards both hands and any result, and returns to idle.
    fn reset_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.set_phase(Phase::Idle);
    }

    fn set_phase(&mut self, phase: Phase) {
        log::debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn ignore(&self, command: Command) -> CommandStatus {
        log::debug!("{command:?} ignored in {:?}", self.phase);
        CommandStatus::Ignored
    }

    /// Deals the top card to one side, face up or down.
    fn deal(&mut self, seat: Seat, face_up: bool) -> Result<Card, DeckError> {
        let drawn = self.deck.draw_top();
        debug_assert!(drawn.is_ok(), "deck ran dry after rebuilding");
        let mut card = drawn?;
        if card.is_face_up() != face_up {
            card.flip();
        }

        log::trace!(
            "dealt {:?} of {:?} to {seat:?} (face up: {face_up})",
            card.rank(),
            card.suit()
        );
        match seat {
            Seat::Player => self.player.add_card(card),
            Seat::Dealer => self.dealer.add_card(card),
        }
        Ok(card)
    }

    /// Ends the round, recording the outcome on the scoreboard.
    fn resolve(&mut self, outcome: Outcome, reason: ResolveReason) {
        let result = RoundResult {
            outcome,
            reason,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
        };

        self.score.record(outcome);
        self.result = Some(result);
        self.set_phase(Phase::Resolved);
        log::debug!(
            "round resolved: {outcome:?} ({reason:?}), {} vs {}, score {}",
            result.player_total,
            result.dealer_total,
            self.score
        );
    }
}
