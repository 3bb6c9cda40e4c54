//! Hand evaluation: classification and scoring of 0–5 card hands.
//!
//! Classification tests categories strongest-first over a rank histogram,
//! suit uniformity, and the sorted rank values; the first match wins. The
//! categories are mutually exclusive by construction, so the order only
//! matters for the shared-shape families (five-of-a-kind vs. its flush
//! variant, full house vs. trips).
//!
//! Scoring is `1000 × tier` for the category plus a category-specific
//! tie-break drawn from the rank values. Ace is encoded low (1), so the
//! two Ace straights are special-cased in detection, and the broadway
//! straight's tie-break comes from the King rather than the Ace.
//!
//! ```
//! use poker_stacks::evaluator::{evaluate, HandType};
//! use poker_stacks::core::{Card, CardId, Rank, Suit};
//!
//! let hand: Vec<Card> = [Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six, Rank::Five]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, rank)| Card::new(CardId(i as u32), Suit::Heart, rank))
//!     .collect();
//!
//! let result = evaluate(&hand).unwrap();
//! assert_eq!(result.hand_type, HandType::StraightFlush);
//! assert_eq!(result.score, 9009);
//! ```

pub mod hand_type;

pub use hand_type::HandType;

use serde::{Deserialize, Serialize};

use crate::core::card::Card;

/// Largest hand the evaluator accepts.
pub const MAX_HAND_SIZE: usize = 5;

/// Validation failure from [`evaluate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvaluateError {
    /// More cards than a hand can hold.
    #[error("hand of {0} cards exceeds the {MAX_HAND_SIZE}-card limit")]
    TooManyCards(usize),
}

/// Classification result: category plus total score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub hand_type: HandType,
    pub score: u32,
}

/// Rank/suit shape of a hand, computed once and consulted by every
/// category predicate.
struct HandProfile {
    len: usize,
    /// Occurrences per rank value, indexed 1..=13.
    counts: [u8; 14],
    same_suit: bool,
    /// Rank values, descending. Ace stays low (1).
    sorted_desc: Vec<u8>,
}

impl HandProfile {
    fn new(cards: &[Card]) -> Self {
        let mut counts = [0u8; 14];
        for card in cards {
            counts[card.rank.value() as usize] += 1;
        }
        let mut sorted_desc: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
        sorted_desc.sort_unstable_by(|a, b| b.cmp(a));
        let same_suit = cards
            .split_first()
            .is_some_and(|(first, rest)| rest.iter().all(|c| c.suit == first.suit));
        Self {
            len: cards.len(),
            counts,
            same_suit,
            sorted_desc,
        }
    }

    fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    fn distinct_ranks(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Highest rank value occurring at least `min` times.
    fn highest_rank_with_count(&self, min: u8) -> Option<u8> {
        (1..=13u8).rev().find(|&v| self.counts[v as usize] >= min)
    }

    /// Rank values with at least a pair, descending.
    fn pair_ranks(&self) -> Vec<u8> {
        (1..=13u8)
            .rev()
            .filter(|&v| self.counts[v as usize] >= 2)
            .collect()
    }

    /// Histogram is exactly {3, 2} over five cards.
    fn is_full_house_shape(&self) -> bool {
        self.len == 5 && self.distinct_ranks() == 2 && self.max_count() == 3
    }

    fn is_straight(&self) -> bool {
        if self.len != 5 {
            return false;
        }
        // Ace is encoded low, so neither Ace straight sorts adjacent:
        // the wheel (A-2-3-4-5) and broadway (10-J-Q-K-A) are matched
        // literally.
        if self.sorted_desc == [5, 4, 3, 2, 1] || self.sorted_desc == [13, 12, 11, 10, 1] {
            return true;
        }
        self.sorted_desc.windows(2).all(|w| w[0] == w[1] + 1)
    }

    fn highest_rank(&self) -> u32 {
        self.sorted_desc.first().map_or(0, |&v| u32::from(v))
    }
}

fn classify(profile: &HandProfile) -> HandType {
    if profile.len == 0 {
        return HandType::Null;
    }
    let five = profile.len == 5;

    if five && profile.same_suit && profile.max_count() == 5 {
        HandType::FlushFiveOfAKind
    } else if profile.same_suit && profile.is_full_house_shape() {
        HandType::FlushFullHouse
    } else if five && profile.max_count() == 5 {
        HandType::FiveOfAKind
    } else if five && profile.same_suit && profile.is_straight() {
        HandType::StraightFlush
    } else if profile.max_count() >= 4 {
        HandType::FourOfAKind
    } else if profile.is_full_house_shape() {
        HandType::FullHouse
    } else if five && profile.same_suit {
        HandType::Flush
    } else if profile.is_straight() {
        HandType::Straight
    } else if profile.max_count() >= 3 {
        HandType::ThreeOfAKind
    } else if profile.pair_ranks().len() >= 2 {
        HandType::TwoPair
    } else if is_one_pair(profile) {
        HandType::OnePair
    } else {
        HandType::HighCard
    }
}

fn is_one_pair(profile: &HandProfile) -> bool {
    if profile.len == 5 {
        // Full hands demand the exact one-pair shape; stronger
        // co-occurring patterns were already taken by earlier checks.
        profile.max_count() == 2 && profile.pair_ranks().len() == 1
    } else {
        // Partial hands: any repeated rank reads as a pair.
        profile.max_count() >= 2
    }
}

fn extra_score(profile: &HandProfile, hand_type: HandType) -> u32 {
    match hand_type {
        HandType::FiveOfAKind | HandType::FlushFiveOfAKind => profile
            .highest_rank_with_count(5)
            .map_or(0, u32::from),
        HandType::FlushFullHouse | HandType::FullHouse | HandType::ThreeOfAKind => profile
            .highest_rank_with_count(3)
            .map_or(0, u32::from),
        HandType::FourOfAKind => profile.highest_rank_with_count(4).map_or(0, u32::from),
        HandType::TwoPair => {
            let pairs = profile.pair_ranks();
            u32::from(pairs[0]) * 10 + u32::from(pairs[1])
        }
        HandType::OnePair => profile.highest_rank_with_count(2).map_or(0, u32::from),
        // High card, straights, flushes, and the empty hand all fall back
        // to the highest rank present. Ace is 1 here, so the broadway
        // straight's tie-break is the King.
        _ => profile.highest_rank(),
    }
}

/// Classify a 0–5 card hand and compute its score.
///
/// More than [`MAX_HAND_SIZE`] cards is a validation error; everything
/// shorter classifies, down to [`HandType::Null`] for an empty hand. The
/// result depends only on the multiset of (suit, rank) pairs, never on
/// card order.
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvaluateError> {
    if cards.len() > MAX_HAND_SIZE {
        log::error!("asked to evaluate {} cards", cards.len());
        return Err(EvaluateError::TooManyCards(cards.len()));
    }

    let profile = HandProfile::new(cards);
    let hand_type = classify(&profile);
    let score = hand_type.base_score() + extra_score(&profile, hand_type);

    Ok(Evaluation { hand_type, score })
}
