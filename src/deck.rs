use crate::cards::{Card, Rank, Suit};
use crate::rules::{self, DECK_SIZE};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Built once; every new deck is a copy of this ordering.
static STANDARD: Lazy<Vec<Card>> = Lazy::new(|| {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::COLORS {
        for rank in Rank::ALL {
            if rules::is_reserved_rank(rank.value()) {
                continue;
            }
            cards.push(Card::new(suit, rank.value()));
        }
    }
    cards.extend([Card::BEAR, Card::BULL, Card::TIGER]);
    cards
});

/// The 55-card deck: 13 cards in each colour suit plus Bear, Bull and Tiger.
///
/// ```
/// use mmillion::deck::Deck;
///
/// let deck = Deck::standard();
/// assert_eq!(deck.len(), 55);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Colour suits in `Suit::COLORS` order, ranks ascending, then Bear, Bull, Tiger.
    pub fn standard() -> Self {
        Self { cards: STANDARD.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

/// The full deck as a plain list, in [`Deck::standard`] order.
pub fn make_deck() -> Vec<Card> {
    STANDARD.to_vec()
}

/// Uniform in-place permutation of `cards`. Seeding is the caller's business.
pub fn shuffle_cards<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}
