use std::collections::VecDeque;

use crate::action::{Action, PlayerId};
use crate::card::Card;
use crate::error::GameError;
use crate::event::GameEvent;
use crate::interaction::Interaction;
use crate::state::GameStateView;

/// Deterministic responder that replays prepared input and records narration.
///
/// Action tokens are parsed like terminal input, so unrecognized tokens
/// surface as rejected input. An exhausted script cancels the game;
/// exhausted confirmations decline.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    actions: VecDeque<String>,
    confirmations: VecDeque<bool>,
    events: Vec<GameEvent>,
    prompts: usize,
}

impl ScriptedInteraction {
    pub fn new<I, S>(actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            actions: actions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_confirmations(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirmations.extend(answers);
        self
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// How many times an action was asked for.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    pub fn remaining_actions(&self) -> usize {
        self.actions.len()
    }
}

impl Interaction for ScriptedInteraction {
    fn choose_action(
        &mut self,
        _player: PlayerId,
        _state: &GameStateView,
    ) -> Result<Action, GameError> {
        self.prompts += 1;
        match self.actions.pop_front() {
            Some(token) => Ok(token.parse::<Action>()?),
            None => Ok(Action::Cancel),
        }
    }

    fn confirm_play_drawn_card(&mut self, _player: PlayerId, _card: Card) -> bool {
        self.confirmations.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
