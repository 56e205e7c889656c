//! Running win counts.

use core::fmt;

use crate::result::Outcome;

/// Wins for each side across all rounds played by a [`Game`](crate::Game).
///
/// Counts only ever go up. A drawn round changes neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scoreboard {
    player_wins: u32,
    dealer_wins: u32,
}

impl Scoreboard {
    /// Creates a scoreboard at 0 : 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_wins: 0,
            dealer_wins: 0,
        }
    }

    /// Rounds won by the player.
    #[must_use]
    pub const fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Rounds won by the dealer.
    #[must_use]
    pub const fn dealer_wins(&self) -> u32 {
        self.dealer_wins
    }

    /// `(player_wins, dealer_wins)`.
    #[must_use]
    pub const fn pair(&self) -> (u32, u32) {
        (self.player_wins, self.dealer_wins)
    }

    pub(crate) const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player_wins = self.player_wins.saturating_add(1),
            Outcome::DealerWins => self.dealer_wins = self.dealer_wins.saturating_add(1),
            Outcome::Draw => {}
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.player_wins, self.dealer_wins)
    }
}
