use crate::error::DeckError;
use crate::hand::Seat;
use crate::policy::DealerAction;
use crate::result::{Outcome, ResolveReason};

use super::{Game, Phase};

impl Game {
    /// Applies one dealer policy decision.
    ///
    /// On `Draw` the dealer takes a card face up and stays in the dealer
    /// turn. On `Stand` the totals are compared; on `Bust` the player wins.
    /// Both of those resolve the round.
    ///
    /// Returns the decision taken, or `None` outside the dealer turn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyAfterRebuild`] if the deck fails to rebuild.
    pub fn dealer_step(&mut self) -> Result<Option<DealerAction>, DeckError> {
        if self.phase != Phase::DealerTurn {
            log::debug!("dealer_step ignored in {:?}", self.phase);
            return Ok(None);
        }

        let dealer_total = self.dealer.total();
        let action = self.policy.decide(dealer_total);
        log::trace!("dealer at {dealer_total}: {action:?}");

        match action {
            DealerAction::Draw => {
                self.deal(Seat::Dealer, true)?;
            }
            DealerAction::Stand => {
                let outcome = Outcome::compare(self.player.total(), dealer_total);
                self.resolve(outcome, ResolveReason::Comparison);
            }
            DealerAction::Bust => {
                self.resolve(Outcome::PlayerWins, ResolveReason::DealerBust);
            }
        }

        Ok(Some(action))
    }

    /// Plays the dealer turn to the end.
    pub(super) fn play_dealer(&mut self) -> Result<(), DeckError> {
        while self.phase == Phase::DealerTurn {
            self.dealer_step()?;
        }
        Ok(())
    }
}
