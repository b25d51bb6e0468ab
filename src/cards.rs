use crate::rules::{self, MONEY_UNIT};
use std::fmt;
use std::str::FromStr;

/// Seven suits: four colours that follow and trump normally, and three animal
/// singletons with their own rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Red,
    Yellow,
    Black,
    Green,
    Bear,
    Bull,
    Tiger,
}

impl Suit {
    pub const ALL: [Suit; 7] = [
        Suit::Red,
        Suit::Yellow,
        Suit::Black,
        Suit::Green,
        Suit::Bear,
        Suit::Bull,
        Suit::Tiger,
    ];

    pub const COLORS: [Suit; 4] = [Suit::Red, Suit::Yellow, Suit::Black, Suit::Green];

    pub const ANIMALS: [Suit; 3] = [Suit::Bear, Suit::Bull, Suit::Tiger];

    pub const fn is_animal(self) -> bool {
        matches!(self, Suit::Bear | Suit::Bull | Suit::Tiger)
    }

    pub const fn is_color(self) -> bool {
        !self.is_animal()
    }

    /// The only rank an animal suit may carry.
    pub const fn animal_rank(self) -> Option<u8> {
        match self {
            Suit::Bear | Suit::Bull => Some(0),
            Suit::Tiger => Some(41),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Red => "Red",
            Suit::Yellow => "Yellow",
            Suit::Black => "Black",
            Suit::Green => "Green",
            Suit::Bear => "Bear",
            Suit::Bull => "Bull",
            Suit::Tiger => "Tiger",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| SuitParseError::Invalid(s.to_string()))
    }
}

/// A rank from the fixed domain in [`rules::RANKS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankError {
    #[error("rank {0} is not in the rank domain")]
    OutOfDomain(u8),
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl Rank {
    pub const ALL: [Rank; 15] = {
        let mut out = [Rank(0); 15];
        let mut i = 0;
        while i < rules::RANKS.len() {
            out[i] = Rank(rules::RANKS[i]);
            i += 1;
        }
        out
    };

    pub const fn new(value: u8) -> Result<Self, RankError> {
        if rules::is_legal_rank(value) {
            Ok(Rank(value))
        } else {
            Err(RankError::OutOfDomain(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_money(self) -> bool {
        rules::is_money_rank(self.0)
    }

    /// `rank * 1000` for money ranks, zero otherwise.
    pub const fn face_value(self) -> u64 {
        if self.is_money() {
            self.0 as u64 * MONEY_UNIT
        } else {
            0
        }
    }
}

/// Money ranks print as currency (`$40,000`), the rest as bare numbers.
impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_money() {
            write!(f, "${},000", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let invalid = || RankError::Invalid(s.to_string());
        if let Some(money) = t.strip_prefix('$') {
            let digits: String = money.chars().filter(|&c| c != ',').collect();
            let amount: u64 = digits.parse().map_err(|_| invalid())?;
            if amount % MONEY_UNIT != 0 {
                return Err(invalid());
            }
            let value = u8::try_from(amount / MONEY_UNIT).map_err(|_| invalid())?;
            let rank = Rank::new(value)?;
            if !rank.is_money() {
                return Err(invalid());
            }
            return Ok(rank);
        }
        let value: u8 = t.parse().map_err(|_| invalid())?;
        Rank::new(value)
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("{suit} must carry rank {expected}, got {rank}")]
    AnimalRank { suit: Suit, rank: u8, expected: u8 },
    #[error("rank {rank} is reserved for animal cards, not {suit}")]
    ReservedRank { suit: Suit, rank: u8 },
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

/// An immutable (suit, rank) pair. Equality is by value.
///
/// ```
/// use mmillion::cards::{Card, Suit};
///
/// let card = Card::new(Suit::Black, 40);
/// assert_eq!(card.value(), 40_000);
/// assert_eq!(card.to_string(), "Black $40,000");
/// assert_eq!(Card::TIGER.to_string(), "Tiger");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const BEAR: Card = Card { suit: Suit::Bear, rank: Rank(0) };
    pub const BULL: Card = Card { suit: Suit::Bull, rank: Rank(0) };
    pub const TIGER: Card = Card { suit: Suit::Tiger, rank: Rank(41) };

    /// Build a card, rejecting ranks outside the domain, colour cards on a
    /// reserved rank, and animal cards on anything but their fixed rank.
    pub fn try_new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        let rank = Rank::new(rank)?;
        match suit.animal_rank() {
            Some(expected) if expected != rank.value() => Err(CardError::AnimalRank {
                suit,
                rank: rank.value(),
                expected,
            }),
            Some(_) => Ok(Self { suit, rank }),
            None if rules::is_reserved_rank(rank.value()) => {
                Err(CardError::ReservedRank { suit, rank: rank.value() })
            }
            None => Ok(Self { suit, rank }),
        }
    }

    /// Build a card from a known-good literal.
    ///
    /// # Panics
    /// Panics if the pair is not a legal card; see [`Card::try_new`].
    pub fn new(suit: Suit, rank: u8) -> Self {
        match Self::try_new(suit, rank) {
            Ok(card) => card,
            Err(e) => panic!("illegal card: {e}"),
        }
    }

    /// The singleton card of an animal suit.
    pub const fn animal(suit: Suit) -> Option<Self> {
        match suit {
            Suit::Bear => Some(Card::BEAR),
            Suit::Bull => Some(Card::BULL),
            Suit::Tiger => Some(Card::TIGER),
            _ => None,
        }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Face value in currency units.
    pub const fn value(self) -> u64 {
        self.rank.face_value()
    }

    pub const fn is_tiger(self) -> bool {
        matches!(self.suit, Suit::Tiger)
    }

    /// Bear and Bull can neither establish a lead suit nor win on suit.
    pub const fn is_bear_or_bull(self) -> bool {
        matches!(self.suit, Suit::Bear | Suit::Bull)
    }

    pub const fn to_tuple(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suit.is_animal() {
            write!(f, "{}", self.suit)
        } else {
            write!(f, "{} {}", self.suit, self.rank)
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let Some((suit_str, rank_str)) = t.split_once(char::is_whitespace) else {
            // a lone word can only name an animal
            let suit = Suit::from_str(t)?;
            return Card::animal(suit).ok_or_else(|| CardError::Invalid(s.to_string()));
        };
        let suit = Suit::from_str(suit_str)?;
        let rank = Rank::from_str(rank_str)?;
        Card::try_new(suit, rank.value())
    }
}

/// Parse a `;`-separated list of cards.
///
/// ```
/// use mmillion::cards::{parse_cards, Card, Suit};
///
/// let cards = parse_cards("Black 40; Tiger; red $5,000").unwrap();
/// assert_eq!(cards, vec![Card::new(Suit::Black, 40), Card::TIGER, Card::new(Suit::Red, 5)]);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input
        .split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
