use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::action::{Action, PlayerId};
use crate::card::Card;
use crate::deck::Deck;
use crate::error::{GameError, InvalidAction};
use crate::event::GameEvent;
use crate::interaction::Interaction;
use crate::pile::{Pile, is_valid_play};
use crate::player::Player;
use crate::state::{GameOutcome, GameSettings, GameStateView, PlayerPublicState, TurnPhase};

const DEFAULT_SEED: u64 = 0x7E57_0A7E_5EED_0002;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub seed: u64,
}

impl GameConfig {
    pub fn new(num_players: usize, seed: u64) -> Result<Self, GameError> {
        GameSettings::new(num_players)?;
        Ok(Self { num_players, seed })
    }
}

/// Builder that enables deterministic deck injection for tests.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(num_players, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use `deck` as-is instead of a shuffled standard deck. The last card is
    /// dealt first.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Outcome of a single handled action, before hand top-up and turn advance.
enum Step {
    /// Same player decides again.
    Continue,
    /// A playable card was drawn; wait for play/keep decision.
    AwaitDecision(Card),
    EndTurn,
    /// The active player emptied their hand and left; the index already
    /// points at the next player.
    PlayerOut,
    GameEnded,
}

/// Game engine for "ten clears, seven reverses, two resets".
pub struct Game {
    settings: GameSettings,
    phase: TurnPhase,
    deck: Deck,
    /// Active players in turn order.
    players: Vec<Player>,
    /// Players who emptied their hands, in finishing order.
    finished: Vec<Player>,
    pile: Pile,
    current: usize,
}

impl Game {
    pub fn builder(num_players: usize) -> Result<GameBuilder, GameError> {
        GameBuilder::new(num_players)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Id of the player whose decision is pending, or `None` once the game is over.
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.phase.is_over() {
            return None;
        }
        self.players.get(self.current).map(|player| player.id)
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_over()
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        match &self.phase {
            TurnPhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn finished_players(&self) -> &[Player] {
        &self.finished
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players
            .iter()
            .chain(self.finished.iter())
            .find(|player| player.id == id)
    }

    /// Every card the game owns, wherever it currently sits.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = self.deck.cards().to_vec();
        for player in self.players.iter().chain(self.finished.iter()) {
            cards.extend_from_slice(&player.hand);
            cards.extend_from_slice(&player.face_down);
        }
        cards.extend_from_slice(self.pile.accumulated());
        cards.extend_from_slice(self.pile.burned());
        cards
    }

    /// Snapshot from the current player's point of view.
    pub fn state_view(&self) -> GameStateView {
        let current = self.current_player();
        let players = self
            .players
            .iter()
            .map(|player| PlayerPublicState {
                id: player.id,
                hand_size: player.hand.len(),
                face_down_count: player.face_down.len(),
                is_current: Some(player.id) == current,
            })
            .collect();
        let hand = current
            .and_then(|id| self.player(id))
            .map(|player| player.hand.clone())
            .unwrap_or_default();

        GameStateView {
            settings: self.settings,
            phase: self.phase.clone(),
            current_player: current,
            deck_count: self.deck.len(),
            top_card: self.pile.top_card(),
            pile_count: self.pile.len(),
            burned_count: self.pile.burned().len(),
            players,
            finished: self.finished.iter().map(|player| player.id).collect(),
            hand,
        }
    }

    /// Events describing the dealt table, for narrating before the first turn.
    pub fn opening_events(&self) -> Vec<GameEvent> {
        let Some(starting_player) = self.current_player() else {
            return Vec::new();
        };
        vec![
            GameEvent::GameStarted {
                players: self.players.iter().map(|player| player.id).collect(),
                starting_player,
            },
            GameEvent::TurnStarted {
                player: starting_player,
            },
        ]
    }

    /// Performs the active player's chosen action.
    ///
    /// Rejected input (`GameError::InvalidAction`) leaves the state untouched.
    pub fn apply_action(&mut self, action: Action) -> Result<Vec<GameEvent>, GameError> {
        match &self.phase {
            TurnPhase::AwaitingAction => {}
            TurnPhase::AwaitingDrawnCardDecision { .. } => return Err(GameError::DecisionPending),
            TurnPhase::GameOver(outcome) => return Err(Self::closed_error(outcome)),
        }
        let player = self.players[self.current].id;
        debug!(player, ?action, "applying action");

        let mut events = Vec::new();
        let step = match action {
            Action::Draw => self.handle_draw(&mut events)?,
            Action::PickUp => self.handle_pickup(&mut events),
            Action::PlayAt(index) => self.handle_play(index, &mut events)?,
            Action::Cancel => {
                info!(player, "game cancelled");
                let outcome = GameOutcome::Cancelled { by: player };
                self.phase = TurnPhase::GameOver(outcome.clone());
                events.push(GameEvent::GameEnded(outcome));
                return Ok(events);
            }
        };
        self.settle(step, &mut events)?;
        Ok(events)
    }

    /// Answers the "play the card you just drew?" question. Declining ends the turn.
    pub fn resolve_drawn_card(&mut self, play: bool) -> Result<Vec<GameEvent>, GameError> {
        let card = match &self.phase {
            TurnPhase::AwaitingDrawnCardDecision { card } => *card,
            TurnPhase::AwaitingAction => return Err(GameError::NoDecisionPending),
            TurnPhase::GameOver(outcome) => return Err(Self::closed_error(outcome)),
        };
        let player = self.players[self.current].id;
        debug!(player, %card, play, "drawn card decision");

        let mut events = Vec::new();
        let step = if play {
            events.push(GameEvent::DrawnCardAccepted { player, card });
            Step::Continue
        } else {
            events.push(GameEvent::DrawnCardDeclined { player, card });
            Step::EndTurn
        };
        self.settle(step, &mut events)?;
        Ok(events)
    }

    /// Asks `io` for the next decision, applies it and narrates the result.
    pub fn step<I: Interaction + ?Sized>(&mut self, io: &mut I) -> Result<(), GameError> {
        if let TurnPhase::GameOver(outcome) = &self.phase {
            return Err(Self::closed_error(outcome));
        }
        let Some(player) = self.current_player() else {
            return Err(GameError::GameOver);
        };

        let pending = match &self.phase {
            TurnPhase::AwaitingDrawnCardDecision { card } => Some(*card),
            _ => None,
        };
        let result = if let Some(card) = pending {
            let play = io.confirm_play_drawn_card(player, card);
            self.resolve_drawn_card(play)
        } else {
            let view = self.state_view();
            match io.choose_action(player, &view) {
                Ok(action) => self.apply_action(action),
                Err(GameError::Cancelled) => self.apply_action(Action::Cancel),
                Err(err) => Err(err),
            }
        };

        match result {
            Ok(events) => {
                for event in &events {
                    io.notify(event);
                }
                Ok(())
            }
            Err(GameError::InvalidAction(reason)) => {
                warn!(player, %reason, "action rejected");
                io.notify(&GameEvent::Rejected { player, reason });
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Drives the game through `io` until it is won or cancelled.
    pub fn run<I: Interaction + ?Sized>(&mut self, io: &mut I) -> Result<GameOutcome, GameError> {
        for event in self.opening_events() {
            io.notify(&event);
        }
        loop {
            if let TurnPhase::GameOver(outcome) = &self.phase {
                return Ok(outcome.clone());
            }
            self.step(io)?;
        }
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let settings = GameSettings::new(config.num_players)?;
        let mut deck = match deck {
            Some(cards) => {
                let unique: HashSet<Card> = cards.iter().copied().collect();
                if unique.len() != cards.len() {
                    return Err(GameError::InvalidConfiguration(
                        "deck contains duplicate cards",
                    ));
                }
                Deck::from_cards(cards)
            }
            None => {
                let mut deck = Deck::standard();
                deck.shuffle(&mut StdRng::seed_from_u64(config.seed));
                deck
            }
        };
        if deck.len() < settings.cards_dealt() {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal",
            ));
        }

        let mut players: Vec<Player> = (0..settings.num_players).map(Player::new).collect();
        for player in &mut players {
            for _ in 0..settings.face_down_count {
                player.face_down.push(deck.deal()?);
                player.draw_card(&mut deck)?;
            }
        }

        let current = Self::starting_index(&players);
        debug!(
            seed = config.seed,
            players = settings.num_players,
            starting_player = players[current].id,
            "game dealt"
        );

        Ok(Game {
            settings,
            phase: TurnPhase::AwaitingAction,
            deck,
            players,
            finished: Vec::new(),
            pile: Pile::new(),
            current,
        })
    }

    /// Index of the player holding the lowest card by (rank value, suit).
    fn starting_index(players: &[Player]) -> usize {
        players
            .iter()
            .enumerate()
            .filter_map(|(index, player)| {
                player
                    .lowest_card()
                    .map(|card| (card.value(), card.suit, index))
            })
            .min()
            .map(|(_, _, index)| index)
            .unwrap_or(0)
    }

    fn closed_error(outcome: &GameOutcome) -> GameError {
        match outcome {
            GameOutcome::Cancelled { .. } => GameError::Cancelled,
            GameOutcome::Finished { .. } => GameError::GameOver,
        }
    }

    fn handle_draw(&mut self, events: &mut Vec<GameEvent>) -> Result<Step, GameError> {
        let player = &mut self.players[self.current];
        if self.deck.is_empty() {
            events.push(GameEvent::DeckEmpty { player: player.id });
            return Ok(Step::Continue);
        }
        let card = player.draw_card(&mut self.deck)?;
        events.push(GameEvent::CardDrawn {
            player: player.id,
            card,
        });
        if self.pile.accepts(card) {
            Ok(Step::AwaitDecision(card))
        } else {
            events.push(GameEvent::ForcedPass {
                player: player.id,
                card,
            });
            Ok(Step::EndTurn)
        }
    }

    fn handle_pickup(&mut self, events: &mut Vec<GameEvent>) -> Step {
        let cards = self.pile.take_all();
        let player = &mut self.players[self.current];
        events.push(GameEvent::PilePickedUp {
            player: player.id,
            cards: cards.len(),
        });
        player.hand.extend(cards);
        Step::EndTurn
    }

    fn handle_play(&mut self, index: usize, events: &mut Vec<GameEvent>) -> Result<Step, GameError> {
        let player = &mut self.players[self.current];
        let card = player.play_card(index)?;
        if let Some(top) = self.pile.top_card() {
            if !is_valid_play(card, Some(top)) {
                player.return_card(index, card);
                return Err(InvalidAction::IllegalPlay { card, top }.into());
            }
        }
        let id = player.id;
        let emptied = player.hand.is_empty();
        events.push(GameEvent::CardPlayed { player: id, card });

        if card.is_burn() {
            let cleared = self.pile.burn(card);
            debug!(player = id, cleared, "pile burned");
            events.push(GameEvent::PileBurned {
                player: id,
                cleared,
            });
            if emptied {
                return Ok(self.retire_current(events));
            }
            return Ok(Step::Continue);
        }

        self.pile.place(card);
        if emptied {
            return Ok(self.retire_current(events));
        }
        Ok(Step::EndTurn)
    }

    /// Removes the active player, whose hand is empty, and ends the game if
    /// at most one player is left.
    fn retire_current(&mut self, events: &mut Vec<GameEvent>) -> Step {
        let player = self.players.remove(self.current);
        let id = player.id;
        self.finished.push(player);
        let place = self.finished.len();
        info!(player = id, place, "player finished");
        events.push(GameEvent::PlayerFinished { player: id, place });

        match self.players.len() {
            0 => {
                self.end_game(None, events);
                Step::GameEnded
            }
            1 => {
                let loser = self.players[0].id;
                self.end_game(Some(loser), events);
                Step::GameEnded
            }
            remaining => {
                self.current %= remaining;
                Step::PlayerOut
            }
        }
    }

    fn end_game(&mut self, loser: Option<PlayerId>, events: &mut Vec<GameEvent>) {
        let outcome = GameOutcome::Finished {
            finishing_order: self.finished.iter().map(|player| player.id).collect(),
            loser,
        };
        info!(?loser, "game over");
        self.phase = TurnPhase::GameOver(outcome.clone());
        events.push(GameEvent::GameEnded(outcome));
    }

    fn settle(&mut self, step: Step, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        match step {
            Step::Continue => {
                self.top_up(events)?;
                self.phase = TurnPhase::AwaitingAction;
            }
            Step::AwaitDecision(card) => {
                self.top_up(events)?;
                self.phase = TurnPhase::AwaitingDrawnCardDecision { card };
            }
            Step::EndTurn => {
                self.top_up(events)?;
                self.current = (self.current + 1) % self.players.len();
                self.begin_turn(events);
            }
            Step::PlayerOut => self.begin_turn(events),
            Step::GameEnded => {}
        }
        Ok(())
    }

    fn begin_turn(&mut self, events: &mut Vec<GameEvent>) {
        self.phase = TurnPhase::AwaitingAction;
        events.push(GameEvent::TurnStarted {
            player: self.players[self.current].id,
        });
    }

    /// Refills the active hand to the minimum while the deck lasts.
    fn top_up(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let hand_target = self.settings.hand_size;
        let player = &mut self.players[self.current];
        let mut drawn = 0;
        while player.hand.len() < hand_target && !self.deck.is_empty() {
            player.draw_card(&mut self.deck)?;
            drawn += 1;
        }
        if drawn > 0 {
            events.push(GameEvent::HandToppedUp {
                player: player.id,
                drawn,
            });
        }
        Ok(())
    }
}
