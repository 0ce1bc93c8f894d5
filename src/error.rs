use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("the deck is empty")]
    EmptyDeck,
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("game was cancelled")]
    Cancelled,
    #[error("game is already over")]
    GameOver,
    #[error("a drawn card is waiting for a play/keep decision")]
    DecisionPending,
    #[error("no drawn card is waiting for a decision")]
    NoDecisionPending,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected player input. Never fatal: the player is asked again.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidAction {
    #[error("hand index {index} is out of range (hand has {hand_size} cards)")]
    IndexOutOfRange { index: usize, hand_size: usize },
    #[error("{card} cannot be played on {top}; card returned to hand")]
    IllegalPlay { card: Card, top: Card },
    #[error("unrecognized input '{0}'")]
    InvalidInput(String),
}
