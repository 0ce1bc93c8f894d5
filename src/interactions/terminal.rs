use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::action::{Action, PlayerId};
use crate::card::Card;
use crate::error::GameError;
use crate::event::GameEvent;
use crate::interaction::Interaction;
use crate::state::GameStateView;
use crate::visualize::{VisualOptions, describe_action, render_state_with_options};

const ACTION_PROMPT: &str = "Type 'draw' to draw a card, 'pickup' to pick up the pile, \
     or enter the index of the card you want to play ('q' quits):";
const CONFIRM_PROMPT: &str = "Do you want to play the drawn card? (yes/no)";

/// Line-oriented adapter for a human at a terminal. End of input cancels.
pub struct TerminalInteraction<R, W> {
    input: R,
    output: W,
    options: VisualOptions,
}

impl TerminalInteraction<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            options: VisualOptions::default(),
        }
    }

    pub fn with_options(mut self, options: VisualOptions) -> Self {
        self.options = options;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<R, W> {
    fn choose_action(
        &mut self,
        _player: PlayerId,
        state: &GameStateView,
    ) -> Result<Action, GameError> {
        write!(
            self.output,
            "\n{}",
            render_state_with_options(state, self.options)
        )?;
        writeln!(self.output, "{ACTION_PROMPT}")?;
        let Some(line) = self.read_line()? else {
            return Err(GameError::Cancelled);
        };
        let action = line.parse::<Action>()?;
        writeln!(self.output, "You selected: {}", describe_action(state, &action))?;
        Ok(action)
    }

    fn confirm_play_drawn_card(&mut self, _player: PlayerId, card: Card) -> bool {
        let _ = writeln!(self.output, "You drew {}. {CONFIRM_PROMPT}", card.long_name());
        match self.read_line() {
            Ok(Some(answer)) => {
                answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
            }
            _ => false,
        }
    }

    fn notify(&mut self, event: &GameEvent) {
        let _ = writeln!(self.output, "{event}");
    }
}
