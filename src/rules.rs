//! Fixed rules data shared by the whole engine.
//!
//! These are read-only tables: the deck composition, the rank domain and the
//! bidding thresholds consumed by an external bidding/scoring layer. The engine
//! itself never enforces `MIN_BID` or `GOAL_AMOUNT`.

/// Smallest bid an external bidding layer should accept, in currency units.
pub const MIN_BID: u64 = 175_000;

/// Cumulative amount that ends the game, in currency units.
pub const GOAL_AMOUNT: u64 = 1_000_000;

/// Every legal rank value, ascending. There is no 6.
pub const RANKS: [u8; 15] = [0, 1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 15, 30, 40, 41];

/// Ranks carried only by animal cards: 0 for Bear and Bull, 41 for Tiger.
pub const RESERVED_RANKS: [u8; 2] = [0, 41];

/// Ranks whose face value is `rank * 1000`.
pub const MONEY_RANKS: [u8; 5] = [5, 10, 15, 30, 40];

/// Face value multiplier for money ranks.
pub const MONEY_UNIT: u64 = 1_000;

pub const CARDS_PER_SUIT: usize = 13;

/// Four colour suits of 13 cards plus Bear, Bull and Tiger.
pub const DECK_SIZE: usize = 4 * CARDS_PER_SUIT + 3;

pub const fn is_legal_rank(rank: u8) -> bool {
    let mut i = 0;
    while i < RANKS.len() {
        if RANKS[i] == rank {
            return true;
        }
        i += 1;
    }
    false
}

pub const fn is_money_rank(rank: u8) -> bool {
    let mut i = 0;
    while i < MONEY_RANKS.len() {
        if MONEY_RANKS[i] == rank {
            return true;
        }
        i += 1;
    }
    false
}

pub const fn is_reserved_rank(rank: u8) -> bool {
    rank == RESERVED_RANKS[0] || rank == RESERVED_RANKS[1]
}
