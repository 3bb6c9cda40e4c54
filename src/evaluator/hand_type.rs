//! Hand classification ladder.
//!
//! Thirteen categories in ascending strength, including the three
//! multi-deck categories (five of a kind and its flush variants) that only
//! arise because the supply can issue duplicate cards. `Null` exists so an
//! empty hand evaluates to something rather than erroring.

use serde::{Deserialize, Serialize};

/// Poker-style hand category, ordered by strength (`Null` weakest,
/// `FlushFiveOfAKind` strongest). The derived `Ord` follows declaration
/// order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum HandType {
    /// Empty hand.
    Null = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    /// Five cards of one rank, suits mixed. Multi-deck only.
    FiveOfAKind = 10,
    /// A full house in a single suit. Multi-deck only.
    FlushFullHouse = 11,
    /// Five identical cards. Multi-deck only.
    FlushFiveOfAKind = 12,
}

impl HandType {
    /// All categories, weakest first.
    pub const ALL: [HandType; 13] = [
        HandType::Null,
        HandType::HighCard,
        HandType::OnePair,
        HandType::TwoPair,
        HandType::ThreeOfAKind,
        HandType::Straight,
        HandType::Flush,
        HandType::FullHouse,
        HandType::FourOfAKind,
        HandType::StraightFlush,
        HandType::FiveOfAKind,
        HandType::FlushFullHouse,
        HandType::FlushFiveOfAKind,
    ];

    /// Ordinal strength tier: 0 for `Null`, 1 for `HighCard`, up to 12
    /// for `FlushFiveOfAKind`.
    #[must_use]
    pub const fn tier(self) -> u32 {
        self as u32
    }

    /// Base score contributed by the category alone: 1000 per tier.
    #[must_use]
    pub const fn base_score(self) -> u32 {
        self.tier() * 1000
    }
}

impl std::fmt::Display for HandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HandType::Null => "empty",
            HandType::HighCard => "high card",
            HandType::OnePair => "one pair",
            HandType::TwoPair => "two pair",
            HandType::ThreeOfAKind => "three of a kind",
            HandType::Straight => "straight",
            HandType::Flush => "flush",
            HandType::FullHouse => "full house",
            HandType::FourOfAKind => "four of a kind",
            HandType::StraightFlush => "straight flush",
            HandType::FiveOfAKind => "five of a kind",
            HandType::FlushFullHouse => "flush full house",
            HandType::FlushFiveOfAKind => "flush five of a kind",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_order() {
        for pair in HandType::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_tiers() {
        assert_eq!(HandType::Null.tier(), 0);
        assert_eq!(HandType::HighCard.tier(), 1);
        assert_eq!(HandType::StraightFlush.tier(), 9);
        assert_eq!(HandType::FlushFiveOfAKind.tier(), 12);
    }

    #[test]
    fn test_base_scores() {
        assert_eq!(HandType::Null.base_score(), 0);
        assert_eq!(HandType::HighCard.base_score(), 1000);
        assert_eq!(HandType::TwoPair.base_score(), 3000);
        assert_eq!(HandType::StraightFlush.base_score(), 9000);
        assert_eq!(HandType::FlushFiveOfAKind.base_score(), 12000);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&HandType::FullHouse).unwrap();
        let deserialized: HandType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, HandType::FullHouse);
    }
}
