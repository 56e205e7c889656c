//! Round result types.

/// Who won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player won (dealer busted or the player's total is higher).
    PlayerWins,
    /// The dealer won (player busted, forfeited, or has the lower total).
    DealerWins,
    /// Equal totals.
    Draw,
}

impl Outcome {
    /// Banner text shown while the round is resolved.
    #[must_use]
    pub const fn banner(self) -> &'static str {
        match self {
            Self::PlayerWins => "PLAYER WINS",
            Self::DealerWins => "DEALER WINS",
            Self::Draw => "DRAW",
        }
    }

    /// Compares final totals of two hands that are both at or under 21.
    #[must_use]
    pub const fn compare(player_total: u32, dealer_total: u32) -> Self {
        if dealer_total < player_total {
            Self::PlayerWins
        } else if dealer_total > player_total {
            Self::DealerWins
        } else {
            Self::Draw
        }
    }
}

/// How the round came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveReason {
    /// The player drew past 21.
    PlayerBust,
    /// The player gave up the round.
    Forfeit,
    /// The dealer drew past 21.
    DealerBust,
    /// Both sides stood and the totals were compared.
    Comparison,
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The winner, if any.
    pub outcome: Outcome,
    /// Why the round ended.
    pub reason: ResolveReason,
    /// The player's final total.
    pub player_total: u32,
    /// The dealer's final total.
    pub dealer_total: u32,
}
