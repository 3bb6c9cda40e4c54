//! Undo ledger: a bounded history of area-changing operations.
//!
//! Each record snapshots the cards involved and the area each occupied
//! *immediately before* the operation ran, so records must be
//! created before the mutation they describe. The ledger keeps the most
//! recent [`MAX_RECORDS`] records, evicting the oldest first; undo always
//! consumes the tail.
//!
//! The ledger only stores history. Reversing a record against the area
//! model is the session layer's job, dispatched on [`OperationKind`].
//!
//! ```
//! use poker_stacks::history::{HistoryLedger, OperationKind};
//! use poker_stacks::core::{Area, Card, CardId, Rank, Suit};
//!
//! let card = Card::new(CardId(0), Suit::Spade, Rank::Nine);
//!
//! let mut ledger = HistoryLedger::new();
//! ledger.record(OperationKind::MoveToPlay, std::slice::from_ref(&card));
//!
//! let record = ledger.peek_last().unwrap();
//! assert_eq!(record.previous_area(CardId(0)), Some(Area::Hand));
//! ```

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Area, Card, CardId};

/// Maximum records retained; the oldest is evicted past this.
pub const MAX_RECORDS: usize = 20;

/// What kind of operation a record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// A card moved into the play area (from hand or wait).
    MoveToPlay,
    /// The clickable hand cards were swept to the wait area.
    MoveToWait,
    /// Cards were drawn into the hand.
    AddToHand,
    /// The hand order was permuted.
    Shuffle,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperationKind::MoveToPlay => "move to play",
            OperationKind::MoveToWait => "move to wait",
            OperationKind::AddToHand => "add to hand",
            OperationKind::Shuffle => "shuffle",
        };
        write!(f, "{name}")
    }
}

/// One recorded operation: the cards involved, in operation order, and
/// the area each occupied before the operation. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    kind: OperationKind,
    /// Involved card ids, in operation order. Operations touch at most a
    /// handful of cards, so the ids live inline.
    card_ids: SmallVec<[CardId; 5]>,
    previous_areas: FxHashMap<CardId, Area>,
}

impl OperationRecord {
    /// Snapshot a record from the cards' *current* state. Call before
    /// mutating the area model.
    #[must_use]
    pub fn new(kind: OperationKind, cards: &[Card]) -> Self {
        Self {
            kind,
            card_ids: cards.iter().map(|c| c.id).collect(),
            previous_areas: cards.iter().map(|c| (c.id, c.area)).collect(),
        }
    }

    /// The operation kind.
    #[must_use]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The involved card ids, in operation order.
    #[must_use]
    pub fn card_ids(&self) -> &[CardId] {
        &self.card_ids
    }

    /// The area `id` occupied immediately before the operation.
    #[must_use]
    pub fn previous_area(&self, id: CardId) -> Option<Area> {
        self.previous_areas.get(&id).copied()
    }
}

/// Bounded FIFO of operation records, most recent last.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryLedger {
    records: VecDeque<OperationRecord>,
}

impl HistoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot and append a record, evicting the oldest past capacity.
    pub fn record(&mut self, kind: OperationKind, cards: &[Card]) {
        self.records.push_back(OperationRecord::new(kind, cards));
        if self.records.len() > MAX_RECORDS {
            self.records.pop_front();
        }
    }

    /// Whether there is anything to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.records.is_empty()
    }

    /// The most recent record, if any.
    #[must_use]
    pub fn peek_last(&self) -> Option<&OperationRecord> {
        self.records.back()
    }

    /// Remove and return the most recent record.
    pub fn pop_last(&mut self) -> Option<OperationRecord> {
        self.records.pop_back()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn card_in(id: u32, area: Area) -> Card {
        let mut card = Card::new(CardId(id), Suit::Heart, Rank::Seven);
        card.area = area;
        card
    }

    #[test]
    fn test_record_snapshots_previous_areas() {
        let cards = vec![card_in(0, Area::Hand), card_in(1, Area::Wait)];

        let record = OperationRecord::new(OperationKind::MoveToPlay, &cards);

        assert_eq!(record.kind(), OperationKind::MoveToPlay);
        assert_eq!(record.card_ids(), &[CardId(0), CardId(1)]);
        assert_eq!(record.previous_area(CardId(0)), Some(Area::Hand));
        assert_eq!(record.previous_area(CardId(1)), Some(Area::Wait));
        assert_eq!(record.previous_area(CardId(2)), None);
    }

    #[test]
    fn test_snapshot_is_immune_to_later_mutation() {
        let mut cards = vec![card_in(0, Area::Hand)];
        let record = OperationRecord::new(OperationKind::MoveToPlay, &cards);

        cards[0].area = Area::Play;

        assert_eq!(record.previous_area(CardId(0)), Some(Area::Hand));
    }

    #[test]
    fn test_undo_targets_the_tail() {
        let mut ledger = HistoryLedger::new();
        ledger.record(OperationKind::AddToHand, &[card_in(0, Area::Hand)]);
        ledger.record(OperationKind::MoveToPlay, &[card_in(0, Area::Hand)]);

        assert!(ledger.can_undo());
        assert_eq!(ledger.peek_last().unwrap().kind(), OperationKind::MoveToPlay);

        let popped = ledger.pop_last().unwrap();
        assert_eq!(popped.kind(), OperationKind::MoveToPlay);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.peek_last().unwrap().kind(), OperationKind::AddToHand);
    }

    #[test]
    fn test_capacity_evicts_oldest_first() {
        let mut ledger = HistoryLedger::new();
        for i in 0..25 {
            ledger.record(OperationKind::MoveToPlay, &[card_in(i, Area::Hand)]);
        }

        assert_eq!(ledger.len(), MAX_RECORDS);

        // Records 0..5 were evicted; 5 is now the oldest.
        let oldest = ledger.records.front().unwrap();
        assert_eq!(oldest.card_ids(), &[CardId(5)]);
        let newest = ledger.peek_last().unwrap();
        assert_eq!(newest.card_ids(), &[CardId(24)]);
    }

    #[test]
    fn test_empty_ledger_is_inert() {
        let mut ledger = HistoryLedger::new();

        assert!(!ledger.can_undo());
        assert!(ledger.peek_last().is_none());
        assert!(ledger.pop_last().is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut ledger = HistoryLedger::new();
        ledger.record(OperationKind::Shuffle, &[card_in(0, Area::Hand)]);
        ledger.clear();

        assert!(ledger.is_empty());
        assert!(!ledger.can_undo());
    }

    #[test]
    fn test_serialization() {
        let mut ledger = HistoryLedger::new();
        ledger.record(OperationKind::MoveToWait, &[card_in(0, Area::Hand)]);

        let json = serde_json::to_string(&ledger).unwrap();
        let deserialized: HistoryLedger = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(
            deserialized.peek_last().unwrap(),
            ledger.peek_last().unwrap()
        );
    }
}
