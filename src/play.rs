//! Play legality: leading rules, following suit and breaking trump.
//!
//! A rejected play is `Ok(false)`. An `Err` means the caller's state is
//! inconsistent (a card outside the hand, a card played twice, an animal trump).

use crate::cards::{Card, Suit};
use crate::trick::find_lead_suit;
use tracing::{debug, trace};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("{0} is not in the hand")]
    NotInHand(Card),
    #[error("{0} has already been played in this trick")]
    AlreadyPlayed(Card),
    #[error("trump must be a colour suit, got {0}")]
    AnimalTrump(Suit),
}

/// Whether `card` may be played from `hand` onto `trick`.
///
/// Leading:
/// - trump or the Tiger only once trump is broken;
/// - Bear or Bull only if no other card in the hand could lead;
/// - any other colour card freely.
///
/// Following: play the lead suit if you hold it. The Tiger may always follow
/// a trump lead.
///
/// ```
/// use mmillion::cards::{Card, Suit};
/// use mmillion::play::valid_play;
///
/// let hand = [Card::new(Suit::Red, 3), Card::new(Suit::Black, 40)];
/// let trick = [Card::new(Suit::Red, 10)];
/// assert_eq!(valid_play(hand[0], &hand, &trick, Suit::Black, false), Ok(true));
/// assert_eq!(valid_play(hand[1], &hand, &trick, Suit::Black, false), Ok(false));
/// ```
pub fn valid_play(
    card: Card,
    hand: &[Card],
    trick: &[Card],
    trump: Suit,
    trump_broken: bool,
) -> Result<bool, PlayError> {
    if trump.is_animal() {
        return Err(PlayError::AnimalTrump(trump));
    }
    if !hand.contains(&card) {
        return Err(PlayError::NotInHand(card));
    }
    if trick.contains(&card) {
        return Err(PlayError::AlreadyPlayed(card));
    }

    let legal = if trick.is_empty() {
        lead_is_legal(card, &without(hand, card), trump, trump_broken)
    } else {
        follow_is_legal(card, hand, find_lead_suit(trick), trump)
    };

    if legal {
        trace!(%card, %trump, trump_broken, leading = trick.is_empty(), "play accepted");
    } else {
        debug!(%card, %trump, trump_broken, leading = trick.is_empty(), "play rejected");
    }
    Ok(legal)
}

/// Every card of `hand` that [`valid_play`] accepts, in hand order.
pub fn valid_plays(
    hand: &[Card],
    trick: &[Card],
    trump: Suit,
    trump_broken: bool,
) -> Result<Vec<Card>, PlayError> {
    let mut out = Vec::with_capacity(hand.len());
    for &card in hand {
        if valid_play(card, hand, trick, trump, trump_broken)? {
            out.push(card);
        }
    }
    Ok(out)
}

fn without(cards: &[Card], card: Card) -> Vec<Card> {
    cards.iter().copied().filter(|&c| c != card).collect()
}

// `rest` is the hand with `card` already taken out.
fn lead_is_legal(card: Card, rest: &[Card], trump: Suit, trump_broken: bool) -> bool {
    if card.is_bear_or_bull() {
        !has_other_lead(rest, trump, trump_broken)
    } else if card.is_tiger() || card.suit() == trump {
        trump_broken
    } else {
        true
    }
}

/// Whether some card of `rest` could lead by itself. Each nested check sees a
/// strictly smaller set, so the depth is bounded by `rest.len()`.
fn has_other_lead(rest: &[Card], trump: Suit, trump_broken: bool) -> bool {
    rest.iter()
        .any(|&alt| lead_is_legal(alt, &without(rest, alt), trump, trump_broken))
}

fn follow_is_legal(card: Card, hand: &[Card], lead: Option<Suit>, trump: Suit) -> bool {
    let Some(lead) = lead else {
        // only Bear/Bull so far: nothing to follow
        return true;
    };
    if card.suit() == lead || (card.is_tiger() && lead == trump) {
        return true;
    }
    !hand.iter().any(|&c| c != card && c.suit() == lead)
}
