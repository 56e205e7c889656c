//! Round phase and command types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No round in progress; the table is empty.
    #[default]
    Idle,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for the player to draw, stand, or forfeit.
    PlayerTurn,
    /// The dealer plays out their hand.
    DealerTurn,
    /// The round has an outcome, held until the next round starts.
    Resolved,
}

impl Phase {
    /// Returns whether a round is in progress and not yet resolved.
    #[must_use]
    pub const fn is_round_active(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn | Self::DealerTurn)
    }
}

/// A command from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Deal a new round.
    StartRound,
    /// Player takes another card.
    Draw,
    /// Player ends their turn.
    Stand,
    /// Player gives up the round.
    Forfeit,
}

/// Whether a command had any effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandStatus {
    /// The command was accepted and applied.
    Applied,
    /// The command does not apply in the current phase; nothing changed.
    Ignored,
}

impl CommandStatus {
    /// Returns whether the command was applied.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
