use std::fmt;

use serde::{Deserialize, Serialize};

/// Card suit. Declaration order is the tie-break order used when picking the
/// starting player (alphabetical by name).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// Suits in the order a fresh deck is built.
    pub const DEAL_ORDER: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    pub fn initial(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Card rank. Identity only; ordering for play validity goes through [`rank_value`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A single playing card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

pub const DECK_SIZE: usize = 52;
pub const MIN_HAND_SIZE: usize = 3;
pub const FACE_DOWN_COUNT: usize = 3;
pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 5;

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    #[inline]
    pub fn value(&self) -> u8 {
        rank_value(self.rank)
    }

    /// Wild: playable on anything, and anything is playable on it.
    #[inline]
    pub fn is_wild(&self) -> bool {
        self.rank == Rank::Two
    }

    /// Burn card: always playable, clears the pile.
    #[inline]
    pub fn is_burn(&self) -> bool {
        self.rank == Rank::Ten
    }

    /// Reversal: the next play must be equal or lower.
    #[inline]
    pub fn is_reversal(&self) -> bool {
        self.rank == Rank::Seven
    }

    /// Long form, e.g. `7 of Hearts`.
    pub fn long_name(&self) -> String {
        format!("{} of {}", self.rank.label(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.initial())
    }
}

/// Ordering value used for play validity and starting-player selection.
/// Twos rank above aces.
pub fn rank_value(rank: Rank) -> u8 {
    match rank {
        Rank::Two => 15,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Jack => 11,
        Rank::Queen => 12,
        Rank::King => 13,
        Rank::Ace => 14,
    }
}

/// Builds the 52-card deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::DEAL_ORDER {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}
