use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::Card;
use crate::error::InvalidAction;
use crate::state::GameOutcome;

/// Narration of a state change, passed to [`crate::Interaction::notify`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        players: Vec<PlayerId>,
        starting_player: PlayerId,
    },
    TurnStarted { player: PlayerId },
    CardDrawn { player: PlayerId, card: Card },
    DeckEmpty { player: PlayerId },
    ForcedPass { player: PlayerId, card: Card },
    DrawnCardAccepted { player: PlayerId, card: Card },
    DrawnCardDeclined { player: PlayerId, card: Card },
    CardPlayed { player: PlayerId, card: Card },
    PileBurned { player: PlayerId, cleared: usize },
    PilePickedUp { player: PlayerId, cards: usize },
    HandToppedUp { player: PlayerId, drawn: usize },
    Rejected {
        player: PlayerId,
        reason: InvalidAction,
    },
    PlayerFinished { player: PlayerId, place: usize },
    GameEnded(GameOutcome),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::GameStarted {
                players,
                starting_player,
            } => write!(
                f,
                "New game with {} player(s). Player {starting_player} holds the lowest card and starts.",
                players.len()
            ),
            GameEvent::TurnStarted { player } => write!(f, "Player {player}'s turn."),
            GameEvent::CardDrawn { player, card } => {
                write!(f, "Player {player} drew a card. New Card: {card}")
            }
            GameEvent::DeckEmpty { .. } => write!(f, "Deck is empty. No card drawn."),
            GameEvent::ForcedPass { card, .. } => {
                write!(f, "{card} cannot be played, next turn.")
            }
            GameEvent::DrawnCardAccepted { player, card } => {
                write!(f, "Player {player} keeps the turn to play {card}.")
            }
            GameEvent::DrawnCardDeclined { player, .. } => {
                write!(f, "Player {player} passes.")
            }
            GameEvent::CardPlayed { player, card } => {
                write!(f, "Player {player} played {}", card.long_name())
            }
            GameEvent::PileBurned { cleared, .. } => write!(
                f,
                "Card 10 played! Clearing the pile ({cleared} cards) and player gets another turn."
            ),
            GameEvent::PilePickedUp { player, cards } => {
                write!(f, "Player {player} picked up the pile ({cards} cards).")
            }
            GameEvent::HandToppedUp { player, drawn } => {
                write!(f, "Player {player} drew {drawn} card(s) to refill their hand.")
            }
            GameEvent::Rejected { reason, .. } => write!(f, "Invalid move: {reason}."),
            GameEvent::PlayerFinished { player, place } => write!(
                f,
                "Player {player} has won and is now out of the game! (place {place})"
            ),
            GameEvent::GameEnded(GameOutcome::Finished { loser, .. }) => match loser {
                Some(loser) => write!(f, "Player {loser} has lost the game. Game over!"),
                None => write!(f, "Game over!"),
            },
            GameEvent::GameEnded(GameOutcome::Cancelled { by }) => {
                write!(f, "Player {by} cancelled the game.")
            }
        }
    }
}
