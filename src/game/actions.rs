use crate::error::DeckError;
use crate::hand::Seat;
use crate::result::{Outcome, ResolveReason};

use super::{Command, CommandStatus, Game, Phase};

impl Game {
    /// Starts a new round: two cards face up to the player, then one face
    /// down and one face up to the dealer.
    ///
    /// A resolved round is cleared first. Ignored while a round is active.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyAfterRebuild`] if the deck fails to rebuild.
    pub fn start_round(&mut self) -> Result<CommandStatus, DeckError> {
        if self.phase.is_round_active() {
            return Ok(self.ignore(Command::StartRound));
        }
        if self.phase == Phase::Resolved {
            self.reset_round();
        }

        self.set_phase(Phase::Dealing);
        if let Err(err) = self.deal_opening() {
            self.abandon_deal();
            return Err(err);
        }
        self.set_phase(Phase::PlayerTurn);

        Ok(CommandStatus::Applied)
    }

    fn deal_opening(&mut self) -> Result<(), DeckError> {
        self.deal(Seat::Player, true)?;
        self.deal(Seat::Player, true)?;
        self.deal(Seat::Dealer, false)?;
        self.deal(Seat::Dealer, true)?;
        Ok(())
    }

    /// Drops a half-dealt round so the table can deal again.
    fn abandon_deal(&mut self) {
        log::warn!(
            "deal abandoned with {} + {} cards out",
            self.player.len(),
            self.dealer.len()
        );
        self.reset_round();
    }

    /// Player action: draw a card face up.
    ///
    /// Going over 21 ends the round in the dealer's favour.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyAfterRebuild`] if the deck fails to rebuild.
    pub fn draw(&mut self) -> Result<CommandStatus, DeckError> {
        if self.phase != Phase::PlayerTurn {
            return Ok(self.ignore(Command::Draw));
        }

        self.deal(Seat::Player, true)?;

        if self.player.is_bust() {
            self.player_loses(ResolveReason::PlayerBust);
        }

        Ok(CommandStatus::Applied)
    }

    /// Player action: stand and hand the turn to the dealer.
    ///
    /// The dealer's hole card is revealed. With dealer autoplay enabled the
    /// dealer turn is played out and the round resolved before returning.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyAfterRebuild`] if the deck fails to rebuild
    /// while the dealer draws.
    pub fn stand(&mut self) -> Result<CommandStatus, DeckError> {
        if self.phase != Phase::PlayerTurn {
            return Ok(self.ignore(Command::Stand));
        }

        self.set_phase(Phase::DealerTurn);
        self.dealer.reveal_hole();

        if self.options.dealer_autoplay {
            self.play_dealer()?;
        }

        Ok(CommandStatus::Applied)
    }

    /// Player action: give up the round, whatever the totals.
    pub fn forfeit(&mut self) -> CommandStatus {
        if self.phase != Phase::PlayerTurn {
            return self.ignore(Command::Forfeit);
        }

        self.player_loses(ResolveReason::Forfeit);
        CommandStatus::Applied
    }

    fn player_loses(&mut self, reason: ResolveReason) {
        if self.options.reveal_hole_on_player_loss {
            self.dealer.reveal_hole();
        }
        self.resolve(Outcome::DealerWins, reason);
    }
}
