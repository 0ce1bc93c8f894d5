use crate::action::{Action, PlayerId};
use crate::card::Card;
use crate::error::GameError;
use crate::event::GameEvent;
use crate::state::GameStateView;

/// The engine's only boundary with whoever is playing.
///
/// Implementations may block. Returning `Err(GameError::InvalidAction(_))`
/// from [`Interaction::choose_action`] makes the engine report the rejection
/// and ask again; `Err(GameError::Cancelled)` ends the game like
/// [`Action::Cancel`].
pub trait Interaction {
    fn choose_action(
        &mut self,
        player: PlayerId,
        state: &GameStateView,
    ) -> Result<Action, GameError>;

    fn confirm_play_drawn_card(&mut self, player: PlayerId, card: Card) -> bool;

    fn notify(&mut self, event: &GameEvent);
}
