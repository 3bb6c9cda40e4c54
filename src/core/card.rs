//! Card identity and per-card runtime state.
//!
//! Every card has a process-unique `CardId` assigned by the supply and
//! never reused. Suit and rank are fixed at creation; the area tag and the
//! clickable flag change as the card moves through the game.
//!
//! ## Rank Encoding
//!
//! Ace is encoded *low* (1), matching the scoring rules: the straight
//! detector special-cases the two Ace straights (wheel and broadway)
//! instead of sorting Ace high.
//!
//! ## Usage
//!
//! ```
//! use poker_stacks::core::{Card, CardId, Rank, Suit, Area};
//!
//! let card = Card::new(CardId(7), Suit::Heart, Rank::Nine);
//!
//! assert_eq!(card.area, Area::Hand);
//! assert!(card.clickable);
//! assert_eq!(card.rank.value(), 9);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Assigned monotonically by `CardSupply`; never reused within a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    /// All suits, in index order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    /// Suit for a 0-based index. Used by the random card supply.
    ///
    /// Panics if `index >= 4`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
        };
        write!(f, "{symbol}")
    }
}

/// Card rank, Ace (1) through King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// The numeric rank value (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value in 1..=13, or `None` outside that range.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Rank::Ace => "A",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            other => return write!(f, "{}", other.value()),
        };
        write!(f, "{text}")
    }
}

/// The three disjoint locations a card can occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    /// The player's stacked hand; cards here may be obscured.
    Hand,
    /// The staging area scored when it holds five cards.
    Play,
    /// The holding row for cards swept out of the hand.
    Wait,
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Area::Hand => "hand",
            Area::Play => "play",
            Area::Wait => "wait",
        };
        write!(f, "{name}")
    }
}

/// A card in play.
///
/// `suit` and `rank` never change. `area` tracks which collection owns the
/// card and is kept in sync by `AreaModel`. `clickable` is meaningful only
/// while the card is in the hand; it is recomputed by the visibility engine
/// after every change to hand membership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity.
    pub id: CardId,

    /// Suit, fixed at creation.
    pub suit: Suit,

    /// Rank, fixed at creation.
    pub rank: Rank,

    /// Current area. Mirrors the owning collection in `AreaModel`.
    pub area: Area,

    /// Whether the card is currently selectable (hand cards only).
    pub clickable: bool,
}

impl Card {
    /// Create a card. New cards start in the hand and clickable.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            area: Area::Hand,
            clickable: true,
        }
    }

    /// Check whether the card is in the hand area.
    #[must_use]
    pub fn is_in_hand(&self) -> bool {
        self.area == Area::Hand
    }

    /// Check whether the card is in the play area.
    #[must_use]
    pub fn is_in_play(&self) -> bool {
        self.area == Area::Play
    }

    /// Check whether the card is in the wait area.
    #[must_use]
    pub fn is_in_wait(&self) -> bool {
        self.area == Area::Wait
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} ({}, {})", self.suit, self.rank, self.id, self.area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Queen.value(), 12);
        assert_eq!(Rank::King.value(), 13);
    }

    #[test]
    fn test_rank_from_value() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
    }

    #[test]
    fn test_suit_from_index() {
        assert_eq!(Suit::from_index(0), Suit::Spade);
        assert_eq!(Suit::from_index(3), Suit::Diamond);
    }

    #[test]
    fn test_new_card_defaults() {
        let card = Card::new(CardId(3), Suit::Club, Rank::Queen);

        assert_eq!(card.area, Area::Hand);
        assert!(card.clickable);
        assert!(card.is_in_hand());
        assert!(!card.is_in_play());
        assert!(!card.is_in_wait());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
        assert_eq!(format!("{}", Rank::Ten), "10");
        assert_eq!(format!("{}", Rank::Seven), "7");
        assert_eq!(format!("{}", Rank::Ace), "A");
        assert_eq!(format!("{}{}", Suit::Heart, Rank::King), "♥K");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId(5), Suit::Diamond, Rank::Ten);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
