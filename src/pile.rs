use crate::card::Card;

/// Shared discard stack.
///
/// The top card is always the last accumulated card. Burned cards leave play
/// and are only tallied.
#[derive(Clone, Debug, Default)]
pub struct Pile {
    accumulated: Vec<Card>,
    burned: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_card(&self) -> Option<Card> {
        self.accumulated.last().copied()
    }

    pub fn accumulated(&self) -> &[Card] {
        &self.accumulated
    }

    pub fn burned(&self) -> &[Card] {
        &self.burned
    }

    pub fn len(&self) -> usize {
        self.accumulated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accumulated.is_empty()
    }

    pub fn accepts(&self, card: Card) -> bool {
        is_valid_play(card, self.top_card())
    }

    pub fn place(&mut self, card: Card) {
        self.accumulated.push(card);
    }

    /// Sends `card` and everything under it out of play. Returns how many
    /// cards were cleared, `card` included.
    pub fn burn(&mut self, card: Card) -> usize {
        self.accumulated.push(card);
        let cleared = self.accumulated.len();
        self.burned.append(&mut self.accumulated);
        cleared
    }

    /// Empties the pile into the caller's hands.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.accumulated)
    }
}

/// Whether `card` may be played on a pile whose top is `top`.
///
/// Checked in order: empty pile, a two on either side, a ten, then the
/// numeric comparison (reversed when a seven is on top).
pub fn is_valid_play(card: Card, top: Option<Card>) -> bool {
    let Some(top) = top else {
        return true;
    };
    if card.is_wild() || top.is_wild() {
        return true;
    }
    if card.is_burn() {
        return true;
    }
    let last_value = top.value();
    let current_value = card.value();
    if top.is_reversal() {
        current_value <= last_value
    } else {
        current_value >= last_value
    }
}
