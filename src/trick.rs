//! Lead suit and trick winner resolution.
//!
//! A trick is the ordered list of cards played so far, first card first.

use crate::cards::{Card, Suit};
use tracing::{debug, trace};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrickError {
    #[error("cannot resolve the winner of an empty trick")]
    Empty,
    #[error("no card in the trick establishes a lead suit")]
    NoLeadSuit,
    #[error("trump must be a colour suit, got {0}")]
    AnimalTrump(Suit),
}

/// Suit of the first card that can establish a lead: a colour card or the
/// Tiger. Bear and Bull are skipped. `None` if no such card was played.
///
/// ```
/// use mmillion::cards::{Card, Suit};
/// use mmillion::trick::find_lead_suit;
///
/// let trick = [Card::BULL, Card::new(Suit::Green, 7), Card::new(Suit::Red, 40)];
/// assert_eq!(find_lead_suit(&trick), Some(Suit::Green));
/// assert_eq!(find_lead_suit(&[]), None);
/// ```
pub fn find_lead_suit(cards: &[Card]) -> Option<Suit> {
    cards.iter().find(|c| !c.is_bear_or_bull()).map(|c| c.suit())
}

/// Where a card stands relative to trump and the lead suit, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Standing {
    Other,
    Lead,
    Trump,
}

fn standing(card: Card, trump: Suit, lead: Suit) -> Standing {
    if card.suit() == trump {
        Standing::Trump
    } else if card.suit() == lead {
        Standing::Lead
    } else {
        Standing::Other
    }
}

/// Index of the winning card in a completed (or partial) trick.
///
/// The Tiger beats everything. Otherwise trump beats lead suit, lead suit
/// beats everything else, and within the same standing the strictly higher
/// rank wins, so the earlier card keeps ties. Leading the Tiger makes trump
/// the lead suit.
///
/// ```
/// use mmillion::cards::{Card, Suit};
/// use mmillion::trick::winner;
///
/// let trick = [
///     Card::new(Suit::Black, 10),
///     Card::new(Suit::Black, 30),
///     Card::new(Suit::Black, 40),
///     Card::new(Suit::Yellow, 1),
/// ];
/// assert_eq!(winner(Suit::Yellow, &trick), Ok(3));
/// assert_eq!(winner(Suit::Red, &trick), Ok(2));
/// ```
pub fn winner(trump: Suit, cards: &[Card]) -> Result<usize, TrickError> {
    if trump.is_animal() {
        return Err(TrickError::AnimalTrump(trump));
    }
    if cards.is_empty() {
        return Err(TrickError::Empty);
    }
    let lead = match find_lead_suit(cards).ok_or(TrickError::NoLeadSuit)? {
        Suit::Tiger => trump,
        suit => suit,
    };

    let mut high = 0usize;
    for (i, &card) in cards.iter().enumerate().skip(1) {
        let best = cards[high];
        if best.is_tiger() {
            break;
        }
        if card.is_tiger() {
            high = i;
            break;
        }
        let (hs, cs) = (standing(best, trump, lead), standing(card, trump, lead));
        trace!(%best, %card, ?hs, ?cs, "compare");
        if cs > hs || (cs == hs && card.rank() > best.rank()) {
            high = i;
        }
    }
    debug!(%trump, %lead, winner = high, card = %cards[high], "trick resolved");
    Ok(high)
}
