//! Card supply: identity assignment and card creation.
//!
//! The supply is the only place cards come from. It owns the id counter
//! (monotonic, never reused) and the RNG for random draws.
//!
//! ## Random draws never produce an Ace
//!
//! `generate_card` draws ranks from Two through King; the fixed sample
//! hands below are the only source of Ace-valued cards. Duplicate
//! (suit, rank) pairs across draws are legitimate: they model distinct
//! physical cards from multiple decks, and the multi-deck hand categories
//! (five of a kind and friends) exist because of them.
//!
//! ```
//! use poker_stacks::supply::CardSupply;
//! use poker_stacks::core::{CardId, Rank};
//!
//! let mut supply = CardSupply::new(42);
//! let cards = supply.generate_cards(3);
//!
//! assert_eq!(cards[0].id, CardId(0));
//! assert_eq!(cards[2].id, CardId(2));
//! assert!(cards.iter().all(|c| c.rank != Rank::Ace));
//! ```

use crate::core::card::{Card, CardId, Rank, Suit};
use crate::core::rng::GameRng;
use crate::evaluator::HandType;

/// Ranks eligible for random draws: everything but the Ace.
const RANDOM_RANKS: [Rank; 12] = [
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

/// Creates cards with unique, monotonically assigned ids.
#[derive(Clone, Debug)]
pub struct CardSupply {
    next_id: u32,
    rng: GameRng,
}

impl CardSupply {
    /// Create a supply with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a supply over an existing RNG.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { next_id: 0, rng }
    }

    fn card(&mut self, suit: Suit, rank: Rank) -> Card {
        let id = CardId(self.next_id);
        self.next_id += 1;
        Card::new(id, suit, rank)
    }

    /// Generate one card with a uniformly random suit and a uniformly
    /// random rank in Two..=King.
    pub fn generate_card(&mut self) -> Card {
        let suit = Suit::from_index(self.rng.gen_range_usize(0..Suit::ALL.len()));
        let rank = RANDOM_RANKS[self.rng.gen_range_usize(0..RANDOM_RANKS.len())];
        self.card(suit, rank)
    }

    /// Generate `count` random cards.
    pub fn generate_cards(&mut self, count: usize) -> Vec<Card> {
        (0..count).map(|_| self.generate_card()).collect()
    }

    /// Restart the id counter at zero. Already-issued ids are unaffected
    /// and the RNG stream continues where it left off.
    pub fn reset(&mut self) {
        log::debug!("card supply id counter reset");
        self.next_id = 0;
    }

    /// A fixed, literal layout demonstrating the given category; the
    /// debugging/test counterpart to `generate_card`. `Null` yields an
    /// empty hand. These layouts are the only source of Aces.
    pub fn sample_hand(&mut self, category: HandType) -> Vec<Card> {
        use Suit::{Club, Diamond, Heart, Spade};

        let layout: &[(Suit, Rank)] = match category {
            HandType::Null => &[],
            HandType::FlushFiveOfAKind => &[(Spade, Rank::Ace); 5],
            HandType::FlushFullHouse => &[
                (Club, Rank::Jack),
                (Club, Rank::Jack),
                (Club, Rank::Jack),
                (Club, Rank::Eight),
                (Club, Rank::Eight),
            ],
            HandType::FiveOfAKind => &[
                (Spade, Rank::Queen),
                (Heart, Rank::Queen),
                (Club, Rank::Queen),
                (Diamond, Rank::Queen),
                (Spade, Rank::Queen),
            ],
            HandType::StraightFlush => &[
                (Heart, Rank::Nine),
                (Heart, Rank::Eight),
                (Heart, Rank::Seven),
                (Heart, Rank::Six),
                (Heart, Rank::Five),
            ],
            HandType::FourOfAKind => &[
                (Spade, Rank::Queen),
                (Heart, Rank::Queen),
                (Club, Rank::Queen),
                (Diamond, Rank::Queen),
                (Spade, Rank::Two),
            ],
            HandType::FullHouse => &[
                (Spade, Rank::Jack),
                (Heart, Rank::Jack),
                (Club, Rank::Jack),
                (Spade, Rank::Eight),
                (Heart, Rank::Eight),
            ],
            HandType::Flush => &[
                (Club, Rank::Ace),
                (Club, Rank::Ten),
                (Club, Rank::Eight),
                (Club, Rank::Six),
                (Club, Rank::Four),
            ],
            HandType::Straight => &[
                (Spade, Rank::Ten),
                (Heart, Rank::Nine),
                (Club, Rank::Eight),
                (Diamond, Rank::Seven),
                (Spade, Rank::Six),
            ],
            HandType::ThreeOfAKind => &[
                (Spade, Rank::Seven),
                (Heart, Rank::Seven),
                (Club, Rank::Seven),
                (Spade, Rank::King),
                (Heart, Rank::Five),
            ],
            HandType::TwoPair => &[
                (Spade, Rank::Nine),
                (Heart, Rank::Nine),
                (Spade, Rank::Five),
                (Heart, Rank::Five),
                (Spade, Rank::Two),
            ],
            HandType::OnePair => &[
                (Spade, Rank::Eight),
                (Heart, Rank::Eight),
                (Spade, Rank::King),
                (Heart, Rank::Queen),
                (Club, Rank::Three),
            ],
            HandType::HighCard => &[
                (Spade, Rank::Ace),
                (Heart, Rank::Jack),
                (Club, Rank::Nine),
                (Diamond, Rank::Seven),
                (Spade, Rank::Two),
            ],
        };

        layout
            .iter()
            .map(|&(suit, rank)| self.card(suit, rank))
            .collect()
    }
}
