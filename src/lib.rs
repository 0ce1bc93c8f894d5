//! Turn-based engine for the shedding card game "ten clears, seven reverses, two resets".

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod interaction;
pub mod interactions;
pub mod pile;
pub mod player;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, PlayerId};
pub use crate::card::{Card, Rank, Suit, rank_value};
pub use crate::deck::Deck;
pub use crate::error::{GameError, InvalidAction};
pub use crate::event::GameEvent;
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::interaction::Interaction;
pub use crate::interactions::{ScriptedInteraction, TerminalInteraction};
pub use crate::pile::{Pile, is_valid_play};
pub use crate::player::Player;
pub use crate::state::{GameOutcome, GameSettings, GameStateView, PlayerPublicState, TurnPhase};
pub use crate::visualize::{VisualOptions, describe_action, render_state};
