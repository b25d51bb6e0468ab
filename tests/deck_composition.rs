use mmillion::cards::{Card, Rank, Suit};
use mmillion::deck::{make_deck, Deck};
use mmillion::rules::{CARDS_PER_SUIT, DECK_SIZE, RANKS};
use std::collections::HashSet;

#[test]
fn every_card_has_a_domain_rank() {
    for card in make_deck() {
        assert!(RANKS.contains(&card.rank().value()), "{card} has an unknown rank");
    }
}

#[test]
fn thirteen_distinct_ranks_per_color_suit() {
    let deck = make_deck();
    let expected: HashSet<u8> = RANKS.iter().copied().filter(|r| ![0, 6, 41].contains(r)).collect();
    for suit in Suit::COLORS {
        let ranks: Vec<u8> = deck.iter().filter(|c| c.suit() == suit).map(|c| c.rank().value()).collect();
        assert_eq!(ranks.len(), CARDS_PER_SUIT, "13 cards in {suit}");
        let set: HashSet<u8> = ranks.iter().copied().collect();
        assert_eq!(set, expected, "no duplicate ranks in {suit}");
    }
}

#[test]
fn one_of_each_animal() {
    let deck = make_deck();
    for animal in Suit::ANIMALS {
        let cards: Vec<&Card> = deck.iter().filter(|c| c.suit() == animal).collect();
        assert_eq!(cards.len(), 1, "1 {animal}");
    }
    assert!(deck.contains(&Card::BEAR));
    assert!(deck.contains(&Card::BULL));
    assert!(deck.contains(&Card::TIGER));
}

#[test]
fn no_duplicates_and_55_cards() {
    let deck = make_deck();
    let set: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.len(), 13 * 4 + 3);
    assert_eq!(set.len(), deck.len());
}

#[test]
fn construction_is_deterministic() {
    assert_eq!(make_deck(), make_deck());
    assert_eq!(Deck::standard(), Deck::standard());
}

#[test]
fn face_value_for_every_rank() {
    for rank in Rank::ALL {
        let expected = match rank.value() {
            5 | 10 | 15 | 30 | 40 => rank.value() as u64 * 1000,
            _ => 0,
        };
        assert_eq!(rank.face_value(), expected, "rank {}", rank.value());
    }
    assert_eq!(Card::TIGER.value(), 0);
    assert_eq!(Card::BEAR.value(), 0);
    assert_eq!(Card::new(Suit::Red, 30).value(), 30_000);
}

#[test]
fn seeded_deal_is_reproducible() {
    let mut a = Deck::standard();
    let mut b = Deck::standard();
    a.shuffle_seeded(2024);
    b.shuffle_seeded(2024);
    assert_eq!(a.draw_n(13), b.draw_n(13));
    assert_eq!(a.len(), DECK_SIZE - 13);
}
