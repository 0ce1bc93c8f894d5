use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidAction;

/// Stable id assigned at setup, 0-based.
pub type PlayerId = usize;

/// What the active player chooses at the start of each decision.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Draw one card from the deck.
    Draw,
    /// Take the whole discard pile into the hand, ending the turn.
    PickUp,
    /// Play the hand card at this index.
    PlayAt(usize),
    /// Abandon the whole game.
    Cancel,
}

impl FromStr for Action {
    type Err = InvalidAction;

    /// Parses a textual token: `draw`, `pickup`, a hand index, or `quit`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let token = input.trim();
        let lower = token.to_ascii_lowercase();
        match lower.as_str() {
            "draw" => Ok(Action::Draw),
            "pickup" | "pick up" => Ok(Action::PickUp),
            "quit" | "q" | "cancel" => Ok(Action::Cancel),
            _ => token
                .parse::<usize>()
                .map(Action::PlayAt)
                .map_err(|_| InvalidAction::InvalidInput(token.to_string())),
        }
    }
}
