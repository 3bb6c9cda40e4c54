//! Area model: card custody and movement legality.
//!
//! `AreaModel` owns every live card and tracks which of the three areas
//! (hand, play, wait) holds it. Moving a card is a transfer between the
//! ordered area sequences, never a copy; a card id appears in exactly one
//! sequence at a time.
//!
//! Hand order doubles as z-order for the visibility engine; play order is
//! the placement order a presentation layer lays cards out by.
//!
//! ## Guarded moves
//!
//! Player-facing moves validate their preconditions and report
//! [`MoveOutcome::Ignored`] instead of erroring when a guard fails; the
//! presentation layer is expected to have filtered such requests out
//! already via the query methods.
//!
//! ```
//! use poker_stacks::areas::{AreaModel, MoveOutcome};
//! use poker_stacks::core::{Card, CardId, Rank, Suit};
//!
//! let mut areas = AreaModel::new();
//! areas.add_cards_to_hand(vec![Card::new(CardId(0), Suit::Spade, Rank::Nine)]);
//!
//! assert_eq!(areas.move_hand_to_play(CardId(0)), MoveOutcome::Applied);
//! assert_eq!(areas.move_hand_to_play(CardId(0)), MoveOutcome::Ignored);
//! assert_eq!(areas.play_count(), 1);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::card::{Area, Card, CardId};
use crate::core::rng::GameRng;

/// Number of cards that fills the play area and triggers scoring.
pub const PLAY_AREA_CAPACITY: usize = 5;

/// Result of a guarded move: applied, or ignored because a precondition
/// failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub enum MoveOutcome {
    /// The move ran and area state changed.
    Applied,
    /// A precondition failed; nothing was mutated.
    Ignored,
}

impl MoveOutcome {
    /// Whether the move ran.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// Owns the three area sequences and every card in them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AreaModel {
    /// Card storage keyed by id. The `area` field of each card mirrors
    /// which sequence below holds its id.
    cards: FxHashMap<CardId, Card>,
    hand: Vec<CardId>,
    play: Vec<CardId>,
    wait: Vec<CardId>,
}

impl AreaModel {
    /// Create an empty area model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn sequence_mut(&mut self, area: Area) -> &mut Vec<CardId> {
        match area {
            Area::Hand => &mut self.hand,
            Area::Play => &mut self.play,
            Area::Wait => &mut self.wait,
        }
    }

    fn insert(&mut self, mut card: Card, area: Area) {
        if self.cards.contains_key(&card.id) {
            panic!("{} is already tracked by the area model", card.id);
        }
        card.area = area;
        let id = card.id;
        self.cards.insert(id, card);
        self.sequence_mut(area).push(id);
    }

    fn extract(&mut self, id: CardId, area: Area) -> Option<Card> {
        let position = self.sequence_mut(area).iter().position(|&c| c == id)?;
        self.sequence_mut(area).remove(position);
        self.cards.remove(&id)
    }

    /// Append cards to the hand, taking ownership and tagging each with
    /// `Area::Hand`. Always legal.
    ///
    /// Panics if any card id is already tracked.
    pub fn add_cards_to_hand(&mut self, cards: Vec<Card>) {
        for card in cards {
            self.insert(card, Area::Hand);
        }
    }

    /// Append a single card to the hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.insert(card, Area::Hand);
    }

    /// Append a single card to the play area.
    pub fn add_to_play(&mut self, card: Card) {
        self.insert(card, Area::Play);
    }

    /// Append a single card to the wait area.
    pub fn add_to_wait(&mut self, card: Card) {
        self.insert(card, Area::Wait);
    }

    /// Move a hand card to the play area.
    ///
    /// Requires the card to be in the hand and clickable; otherwise the
    /// request is ignored.
    pub fn move_hand_to_play(&mut self, id: CardId) -> MoveOutcome {
        match self.cards.get(&id) {
            Some(card) if card.area == Area::Hand && card.clickable => {}
            _ => return MoveOutcome::Ignored,
        }
        self.relocate(id, Area::Hand, Area::Play);
        MoveOutcome::Applied
    }

    /// Move a wait card to the play area.
    ///
    /// Requires the card to be in the wait area; otherwise ignored.
    pub fn move_wait_to_play(&mut self, id: CardId) -> MoveOutcome {
        match self.cards.get(&id) {
            Some(card) if card.area == Area::Wait => {}
            _ => return MoveOutcome::Ignored,
        }
        self.relocate(id, Area::Wait, Area::Play);
        MoveOutcome::Applied
    }

    /// Move every clickable hand card to the wait area, preserving their
    /// relative order. Returns the moved ids; an empty result is valid.
    pub fn move_clickable_hand_to_wait(&mut self) -> Vec<CardId> {
        let movable: Vec<CardId> = self
            .hand
            .iter()
            .copied()
            .filter(|id| self.cards[id].clickable)
            .collect();
        for &id in &movable {
            self.relocate(id, Area::Hand, Area::Wait);
        }
        movable
    }

    fn relocate(&mut self, id: CardId, from: Area, to: Area) {
        let position = self
            .sequence_mut(from)
            .iter()
            .position(|&c| c == id)
            .expect("card sequence out of sync with card area tag");
        self.sequence_mut(from).remove(position);
        self.sequence_mut(to).push(id);
        if let Some(card) = self.cards.get_mut(&id) {
            card.area = to;
        }
    }

    /// Remove a card from the hand sequence, returning it.
    ///
    /// Unconditional (no clickability check); used by undo, not by forward
    /// player actions. Returns `None` if the card is not in the hand.
    pub fn remove_from_hand(&mut self, id: CardId) -> Option<Card> {
        self.extract(id, Area::Hand)
    }

    /// Remove a card from the play sequence, returning it.
    pub fn remove_from_play(&mut self, id: CardId) -> Option<Card> {
        self.extract(id, Area::Play)
    }

    /// Remove a card from the wait sequence, returning it.
    pub fn remove_from_wait(&mut self, id: CardId) -> Option<Card> {
        self.extract(id, Area::Wait)
    }

    /// Empty the play area, returning the cards in placement order.
    /// The model tracks the returned cards no further.
    pub fn clear_play(&mut self) -> Vec<Card> {
        let ids: Vec<CardId> = self.play.drain(..).collect();
        ids.into_iter()
            .filter_map(|id| self.cards.remove(&id))
            .collect()
    }

    /// Permute the hand order in place. Cards outside the hand are
    /// unaffected.
    pub fn shuffle_hand(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.hand);
    }

    /// Set a card's clickable flag. Visibility engine hook.
    pub fn set_clickable(&mut self, id: CardId, clickable: bool) {
        if let Some(card) = self.cards.get_mut(&id) {
            card.clickable = clickable;
        }
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// The area currently holding `id`, if tracked.
    #[must_use]
    pub fn area_of(&self, id: CardId) -> Option<Area> {
        self.cards.get(&id).map(|card| card.area)
    }

    /// Whether the model tracks `id`.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Hand ids in sequence order (index order is z-order, last on top).
    #[must_use]
    pub fn hand_order(&self) -> &[CardId] {
        &self.hand
    }

    /// Play ids in placement order.
    #[must_use]
    pub fn play_order(&self) -> &[CardId] {
        &self.play
    }

    /// Wait ids in arrival order.
    #[must_use]
    pub fn wait_order(&self) -> &[CardId] {
        &self.wait
    }

    fn cloned_cards(&self, ids: &[CardId]) -> Vec<Card> {
        ids.iter().map(|id| self.cards[id].clone()).collect()
    }

    /// Fresh copies of the hand cards in sequence order.
    #[must_use]
    pub fn hand_cards(&self) -> Vec<Card> {
        self.cloned_cards(&self.hand)
    }

    /// Fresh copies of the play cards in placement order.
    #[must_use]
    pub fn play_cards(&self) -> Vec<Card> {
        self.cloned_cards(&self.play)
    }

    /// Fresh copies of the wait cards in arrival order.
    #[must_use]
    pub fn wait_cards(&self) -> Vec<Card> {
        self.cloned_cards(&self.wait)
    }

    /// Fresh copies of the currently clickable hand cards, in hand order.
    ///
    /// The returned collection is independent of the model; callers may
    /// mutate it freely.
    #[must_use]
    pub fn clickable_hand_cards(&self) -> Vec<Card> {
        self.hand
            .iter()
            .map(|id| &self.cards[id])
            .filter(|card| card.clickable)
            .cloned()
            .collect()
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hand.len()
    }

    /// Number of cards in the play area.
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play.len()
    }

    /// Number of cards in the wait area.
    #[must_use]
    pub fn wait_count(&self) -> usize {
        self.wait.len()
    }

    /// Total cards across all three areas.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_hand_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Whether the play area has reached capacity.
    #[must_use]
    pub fn is_play_full(&self) -> bool {
        self.play.len() >= PLAY_AREA_CAPACITY
    }
}
