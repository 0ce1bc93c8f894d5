use std::fmt::Write;

use crate::action::Action;
use crate::state::{GameOutcome, GameStateView, TurnPhase};

/// Customize state rendering for the terminal.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_table: bool,
    pub show_counts: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_table: true,
            show_counts: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    match &state.phase {
        TurnPhase::GameOver(GameOutcome::Finished { loser, .. }) => {
            let loser = loser
                .map(|id| format!("Player {id} lost"))
                .unwrap_or_else(|| String::from("no loser"));
            let _ = writeln!(out, "Game over ({loser}).");
        }
        TurnPhase::GameOver(GameOutcome::Cancelled { by }) => {
            let _ = writeln!(out, "Game cancelled by Player {by}.");
        }
        _ => {}
    }
    if let Some(current) = state.current_player {
        let _ = writeln!(out, "Player {current}'s turn.");
    }
    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let hand = state
            .hand
            .iter()
            .enumerate()
            .map(|(index, card)| format!("{index}: {card}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Hand: {hand}");
    }
    match state.top_card {
        Some(card) => {
            let _ = writeln!(out, "Last card played: {}", card.long_name());
        }
        None => {
            let _ = writeln!(out, "No card has been played yet.");
        }
    }
    if options.show_counts {
        let _ = writeln!(
            out,
            "Deck: {}  |  Pile: {}  |  Burned: {}",
            state.deck_count, state.pile_count, state.burned_count
        );
    }
    if options.show_table {
        for player in &state.players {
            let current_tag = if player.is_current { " <- current" } else { "" };
            let _ = writeln!(
                out,
                "  Player {} - {} in hand, {} face down{}",
                player.id, player.hand_size, player.face_down_count, current_tag
            );
        }
        if !state.finished.is_empty() {
            let finished = state
                .finished
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  Out: {finished}");
        }
    }
    out
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    match action {
        Action::Draw => String::from("Draw a card"),
        Action::PickUp => format!("Pick up the pile ({} cards)", state.pile_count),
        Action::PlayAt(index) => match state.hand.get(*index) {
            Some(card) => format!("Play hand[{index}] {}", card.long_name()),
            None => format!("Play hand[{index}]"),
        },
        Action::Cancel => String::from("Quit the game"),
    }
}
