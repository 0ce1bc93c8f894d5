use crate::action::PlayerId;
use crate::card::{Card, FACE_DOWN_COUNT, MIN_HAND_SIZE};
use crate::deck::Deck;
use crate::error::{GameError, InvalidAction};

/// A seat at the table.
///
/// `hand` is an ordered list; an index into it is a selection handle for the
/// current turn, not a card identity. Playing a card shifts later indices.
#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Vec<Card>,
    /// Dealt at setup and never playable.
    pub face_down: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::with_capacity(MIN_HAND_SIZE),
            face_down: Vec::with_capacity(FACE_DOWN_COUNT),
        }
    }

    pub fn draw_card(&mut self, deck: &mut Deck) -> Result<Card, GameError> {
        let card = deck.deal()?;
        self.hand.push(card);
        Ok(card)
    }

    pub fn play_card(&mut self, index: usize) -> Result<Card, InvalidAction> {
        if index >= self.hand.len() {
            return Err(InvalidAction::IndexOutOfRange {
                index,
                hand_size: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Puts a card taken by [`Player::play_card`] back where it was.
    pub fn return_card(&mut self, index: usize, card: Card) {
        let index = index.min(self.hand.len());
        self.hand.insert(index, card);
    }

    /// `0: 7H, 1: KS, ...` with indices matching [`Player::play_card`].
    pub fn describe_hand(&self) -> String {
        self.hand
            .iter()
            .enumerate()
            .map(|(index, card)| format!("{index}: {card}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn lowest_card(&self) -> Option<Card> {
        self.hand
            .iter()
            .copied()
            .min_by_key(|card| (card.value(), card.suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn player_with(cards: &[Card]) -> Player {
        let mut player = Player::new(0);
        player.hand.extend_from_slice(cards);
        player
    }

    #[test]
    fn describe_hand_is_index_annotated() {
        let player = player_with(&[
            Card::new(Suit::Hearts, Rank::Seven),
            Card::new(Suit::Spades, Rank::King),
        ]);
        assert_eq!(player.describe_hand(), "0: 7H, 1: KS");
    }

    #[test]
    fn play_and_return_preserves_order() {
        let cards = [
            Card::new(Suit::Clubs, Rank::Three),
            Card::new(Suit::Clubs, Rank::Four),
            Card::new(Suit::Clubs, Rank::Five),
        ];
        let mut player = player_with(&cards);
        let taken = player.play_card(1).expect("in range");
        assert_eq!(taken, cards[1]);
        player.return_card(1, taken);
        assert_eq!(player.hand, cards);
    }

    #[test]
    fn play_out_of_range_is_rejected() {
        let mut player = player_with(&[Card::new(Suit::Hearts, Rank::Ace)]);
        assert_eq!(
            player.play_card(1),
            Err(InvalidAction::IndexOutOfRange {
                index: 1,
                hand_size: 1
            })
        );
        assert_eq!(player.hand.len(), 1);
    }

    #[test]
    fn draw_from_empty_deck_propagates() {
        let mut player = Player::new(3);
        let mut deck = Deck::from_cards(Vec::new());
        assert!(matches!(player.draw_card(&mut deck), Err(GameError::EmptyDeck)));
        assert!(player.hand.is_empty());
    }

    #[test]
    fn lowest_card_treats_two_as_high_and_breaks_ties_by_suit() {
        let player = player_with(&[
            Card::new(Suit::Clubs, Rank::Two),
            Card::new(Suit::Spades, Rank::Three),
            Card::new(Suit::Diamonds, Rank::Three),
        ]);
        assert_eq!(player.lowest_card(), Some(Card::new(Suit::Diamonds, Rank::Three)));
    }
}
