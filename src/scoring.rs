use crate::cards::{Card, Suit};

/// Point value of a set of collected cards.
///
/// The base is the sum of face values. The last Bear or Bull in the list
/// decides the modifier: Bear cancels the whole score, Bull doubles it. Any
/// earlier Bear/Bull is ignored, and the Tiger is worth nothing.
///
/// ```
/// use mmillion::cards::{Card, Suit};
/// use mmillion::scoring::score_hand;
///
/// let cards = [Card::new(Suit::Red, 40), Card::new(Suit::Black, 5), Card::BULL];
/// assert_eq!(score_hand(&cards), 90_000);
/// ```
pub fn score_hand(cards: &[Card]) -> u64 {
    let base: u64 = cards.iter().map(|c| c.value()).sum();
    match cards.iter().rev().find(|c| c.is_bear_or_bull()).map(|c| c.suit()) {
        Some(Suit::Bear) => 0,
        Some(Suit::Bull) => base * 2,
        _ => base,
    }
}
