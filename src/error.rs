//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur while drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck was still empty after an automatic rebuild.
    #[error("deck is empty after rebuild")]
    EmptyAfterRebuild,
}
