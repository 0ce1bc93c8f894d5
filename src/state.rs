use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, FACE_DOWN_COUNT, MAX_PLAYERS, MIN_HAND_SIZE, MIN_PLAYERS};
use crate::error::GameError;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub hand_size: usize,
    pub face_down_count: usize,
}

impl GameSettings {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 1 and 5",
            ));
        }
        Ok(Self {
            num_players,
            hand_size: MIN_HAND_SIZE,
            face_down_count: FACE_DOWN_COUNT,
        })
    }

    /// Cards removed from the deck by the initial deal.
    pub fn cards_dealt(&self) -> usize {
        self.num_players * (self.hand_size + self.face_down_count)
    }
}

/// How the game ended.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    /// Players in the order they emptied their hands; `loser` is the last one
    /// left holding cards (none in a solo game).
    Finished {
        finishing_order: Vec<PlayerId>,
        loser: Option<PlayerId>,
    },
    Cancelled { by: PlayerId },
}

/// Where the turn state machine currently waits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingAction,
    /// The active player drew a playable card and must say whether to play on.
    AwaitingDrawnCardDecision { card: Card },
    GameOver(GameOutcome),
}

impl TurnPhase {
    pub fn is_over(&self) -> bool {
        matches!(self, TurnPhase::GameOver(_))
    }
}

/// What everyone at the table can see about a player.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub hand_size: usize,
    pub face_down_count: usize,
    pub is_current: bool,
}

/// Snapshot handed to the interaction collaborator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub current_player: Option<PlayerId>,
    pub deck_count: usize,
    pub top_card: Option<Card>,
    pub pile_count: usize,
    pub burned_count: usize,
    /// Active players in turn order.
    pub players: Vec<PlayerPublicState>,
    pub finished: Vec<PlayerId>,
    /// The current player's hand, in selection-index order.
    pub hand: Vec<Card>,
}
