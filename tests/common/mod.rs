#![allow(dead_code)]

use std::collections::HashSet;

use burnpile::card::{FACE_DOWN_COUNT, full_deck};
use burnpile::{Card, Rank, Suit};

/// Parses short names like `7H`, `10S`, `QD`.
pub fn c(name: &str) -> Card {
    let (rank, suit) = name.split_at(name.len() - 1);
    let rank = match rank {
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        other => panic!("unknown rank {other}"),
    };
    let suit = match suit {
        "C" => Suit::Clubs,
        "D" => Suit::Diamonds,
        "H" => Suit::Hearts,
        "S" => Suit::Spades,
        other => panic!("unknown suit {other}"),
    };
    Card::new(suit, rank)
}

pub fn cards(names: &[&str]) -> Vec<Card> {
    names.iter().map(|name| c(name)).collect()
}

/// Builds a deck that deals `hands` (three cards per player, in seat order),
/// then yields `draws` in order. Face-down cards come from the unused cards.
/// With `fill`, every other card ends up at the bottom of the deck.
pub fn stacked_deck(hands: &[&[&str]], draws: &[&str], fill: bool) -> Vec<Card> {
    let hands: Vec<Vec<Card>> = hands.iter().map(|hand| cards(hand)).collect();
    let draws = cards(draws);
    let used: HashSet<Card> = hands.iter().flatten().chain(draws.iter()).copied().collect();
    let mut pool = full_deck().into_iter().filter(|card| !used.contains(card));

    let mut order = Vec::new();
    for hand in &hands {
        assert_eq!(hand.len(), FACE_DOWN_COUNT, "hands hold three cards");
        for card in hand {
            order.push(pool.next().expect("enough spare cards for face-down"));
            order.push(*card);
        }
    }
    order.extend(draws);
    if fill {
        order.extend(pool);
    }
    order.reverse();
    order
}

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| String::from("warn")),
        )
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
