//! Session layer: the thin orchestrator driving the engine.
//!
//! `GameSession` wires the supply, area model, ledger, and evaluator
//! together and owns the policies the core components deliberately leave
//! out: when to score (play area reaches five cards), when to clear, when
//! to advance levels, and how undo records replay against the area model.
//!
//! Everything is explicit construction and dependency passing; there are
//! no ambient globals. Geometry stays with the caller: every operation
//! that can change hand membership takes an [`OverlapPredicate`] and
//! re-runs the visibility pass before returning, which keeps the
//! "recompute after every hand change" obligation inside one place.
//!
//! ```
//! use poker_stacks::core::LevelConfig;
//! use poker_stacks::session::{GameSession, PlayOutcome};
//! use poker_stacks::visibility::WorldRects;
//!
//! // Headless: no geometry registered, so nothing overlaps.
//! let geometry = WorldRects::new();
//!
//! let mut session = GameSession::new(LevelConfig::default(), 42);
//! session.start(&geometry);
//! assert_eq!(session.areas().hand_count(), 20);
//!
//! let top = session.areas().hand_order()[0];
//! assert_eq!(session.play_from_hand(top, &geometry), PlayOutcome::Applied);
//! assert!(session.can_undo());
//! ```

use serde::{Deserialize, Serialize};

use crate::areas::{AreaModel, MoveOutcome};
use crate::core::card::{Area, CardId};
use crate::core::config::LevelConfig;
use crate::core::rng::GameRng;
use crate::evaluator::{evaluate, Evaluation};
use crate::history::{HistoryLedger, OperationKind};
use crate::supply::CardSupply;
use crate::visibility::{self, OverlapPredicate};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    Playing,
    Ended,
}

/// Result of a play request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum PlayOutcome {
    /// A precondition failed; nothing changed and nothing was recorded.
    Ignored,
    /// The card moved to the play area.
    Applied,
    /// The card moved, filled the play area, and the hand was scored and
    /// cleared.
    Scored(Evaluation),
}

/// One game in progress: areas, history, supply, score, and level flow.
pub struct GameSession {
    areas: AreaModel,
    ledger: HistoryLedger,
    supply: CardSupply,
    config: LevelConfig,
    /// Shuffle stream, independent of the supply's draw stream.
    rng: GameRng,
    level: u32,
    score: u32,
    phase: GamePhase,
    won: bool,
}

impl GameSession {
    /// Create a session with a seeded supply and shuffle stream.
    #[must_use]
    pub fn new(config: LevelConfig, seed: u64) -> Self {
        Self::with_parts(
            config,
            CardSupply::new(seed),
            GameRng::new(seed.wrapping_add(0x9E37_79B9_7F4A_7C15)),
        )
    }

    /// Create a session from explicitly constructed parts.
    #[must_use]
    pub fn with_parts(config: LevelConfig, supply: CardSupply, rng: GameRng) -> Self {
        Self {
            areas: AreaModel::new(),
            ledger: HistoryLedger::new(),
            supply,
            config,
            rng,
            level: 0,
            score: 0,
            phase: GamePhase::NotStarted,
            won: false,
        }
    }

    /// Begin (or restart) the game at level 1 with a fresh deal.
    ///
    /// The initial deal is not recorded in the ledger; there is nothing
    /// sensible to undo back to.
    pub fn start(&mut self, overlap: &impl OverlapPredicate) {
        self.areas = AreaModel::new();
        self.ledger.clear();
        self.level = 1;
        self.score = 0;
        self.won = false;
        self.phase = GamePhase::Playing;
        self.deal_level_cards(overlap);
    }

    fn deal_level_cards(&mut self, overlap: &impl OverlapPredicate) {
        let count = self.config.initial_card_count(self.level);
        log::debug!("dealing {count} cards for level {}", self.level);
        let cards = self.supply.generate_cards(count);
        self.areas.add_cards_to_hand(cards);
        visibility::recompute(&mut self.areas, overlap);
    }

    /// Draw this level's additional cards into the hand. Recorded as a
    /// single undoable operation. Returns how many cards were drawn.
    pub fn draw_additional(&mut self, overlap: &impl OverlapPredicate) -> usize {
        if self.phase != GamePhase::Playing {
            return 0;
        }
        let count = self.config.additional_card_count(self.level);
        let cards = self.supply.generate_cards(count);
        self.ledger.record(OperationKind::AddToHand, &cards);
        self.areas.add_cards_to_hand(cards);
        visibility::recompute(&mut self.areas, overlap);
        count
    }

    /// Play a clickable hand card into the play area.
    pub fn play_from_hand(
        &mut self,
        id: CardId,
        overlap: &impl OverlapPredicate,
    ) -> PlayOutcome {
        if self.phase != GamePhase::Playing {
            return PlayOutcome::Ignored;
        }
        // Snapshot before the move; the record needs the pre-move area.
        let snapshot = match self.areas.card(id) {
            Some(card) if card.area == Area::Hand && card.clickable => card.clone(),
            _ => return PlayOutcome::Ignored,
        };
        if !self.areas.move_hand_to_play(id).is_applied() {
            return PlayOutcome::Ignored;
        }
        self.ledger
            .record(OperationKind::MoveToPlay, std::slice::from_ref(&snapshot));
        visibility::recompute(&mut self.areas, overlap);

        let outcome = match self.settle_if_full() {
            Some(evaluation) => PlayOutcome::Scored(evaluation),
            None => PlayOutcome::Applied,
        };
        self.check_level_state(overlap);
        outcome
    }

    /// Play a wait-area card into the play area.
    pub fn play_from_wait(
        &mut self,
        id: CardId,
        overlap: &impl OverlapPredicate,
    ) -> PlayOutcome {
        if self.phase != GamePhase::Playing {
            return PlayOutcome::Ignored;
        }
        let snapshot = match self.areas.card(id) {
            Some(card) if card.area == Area::Wait => card.clone(),
            _ => return PlayOutcome::Ignored,
        };
        if !self.areas.move_wait_to_play(id).is_applied() {
            return PlayOutcome::Ignored;
        }
        self.ledger
            .record(OperationKind::MoveToPlay, std::slice::from_ref(&snapshot));

        // Hand membership is untouched, so no visibility pass is needed.
        match self.settle_if_full() {
            Some(evaluation) => PlayOutcome::Scored(evaluation),
            None => PlayOutcome::Applied,
        }
    }

    /// Sweep every clickable hand card into the wait area as one undoable
    /// operation. Returns how many cards moved; zero means nothing was
    /// clickable and nothing was recorded.
    pub fn sweep_hand_to_wait(&mut self, overlap: &impl OverlapPredicate) -> usize {
        if self.phase != GamePhase::Playing {
            return 0;
        }
        let clickable = self.areas.clickable_hand_cards();
        if clickable.is_empty() {
            return 0;
        }
        self.ledger.record(OperationKind::MoveToWait, &clickable);
        let moved = self.areas.move_clickable_hand_to_wait();
        visibility::recompute(&mut self.areas, overlap);
        self.check_level_state(overlap);
        moved.len()
    }

    /// Shuffle the hand order. Requires at least two hand cards.
    pub fn shuffle_hand(&mut self, overlap: &impl OverlapPredicate) -> MoveOutcome {
        if self.phase != GamePhase::Playing || self.areas.hand_count() < 2 {
            return MoveOutcome::Ignored;
        }
        let snapshot = self.areas.hand_cards();
        self.ledger.record(OperationKind::Shuffle, &snapshot);
        self.areas.shuffle_hand(&mut self.rng);
        visibility::recompute(&mut self.areas, overlap);
        MoveOutcome::Applied
    }

    /// Undo the most recent recorded operation. Returns whether anything
    /// was undone.
    pub fn undo(&mut self, overlap: &impl OverlapPredicate) -> bool {
        if self.phase != GamePhase::Playing || !self.ledger.can_undo() {
            return false;
        }
        let Some(record) = self.ledger.pop_last() else {
            return false;
        };
        match record.kind() {
            OperationKind::MoveToPlay => {
                for &id in record.card_ids() {
                    // Cards already scored and cleared out of the play
                    // area stay gone.
                    let Some(card) = self.areas.remove_from_play(id) else {
                        continue;
                    };
                    match record.previous_area(id) {
                        Some(Area::Wait) => self.areas.add_to_wait(card),
                        _ => self.areas.add_to_hand(card),
                    }
                }
            }
            OperationKind::MoveToWait => {
                for &id in record.card_ids() {
                    if let Some(card) = self.areas.remove_from_wait(id) {
                        self.areas.add_to_hand(card);
                    }
                }
            }
            OperationKind::AddToHand => {
                // There is no deck to un-draw into; the cards are
                // discarded.
                for &id in record.card_ids() {
                    self.areas.remove_from_hand(id);
                }
            }
            OperationKind::Shuffle => {
                // The pre-shuffle order was never captured; a fresh
                // shuffle stands in, unrecorded.
                self.areas.shuffle_hand(&mut self.rng);
            }
        }
        visibility::recompute(&mut self.areas, overlap);
        true
    }

    /// Re-run the visibility pass without changing area state, e.g. after
    /// the presentation layer re-lays-out the hand.
    pub fn recompute_visibility(&mut self, overlap: &impl OverlapPredicate) {
        visibility::recompute(&mut self.areas, overlap);
    }

    fn settle_if_full(&mut self) -> Option<Evaluation> {
        if !self.areas.is_play_full() {
            return None;
        }
        let cards = self.areas.play_cards();
        match evaluate(&cards) {
            Ok(evaluation) => {
                self.score += evaluation.score;
                log::debug!(
                    "play area scored as {} for {} points",
                    evaluation.hand_type,
                    evaluation.score
                );
                self.areas.clear_play();
                Some(evaluation)
            }
            Err(err) => {
                log::warn!("play area could not be scored: {err}");
                None
            }
        }
    }

    /// Advance the level or end the game once the hand is exhausted.
    ///
    /// Runs automatically after any operation that can drain the hand;
    /// exposed so a host can also poll it directly. Does nothing while
    /// the hand still holds cards.
    pub fn check_level_state(&mut self, overlap: &impl OverlapPredicate) {
        if self.phase != GamePhase::Playing || !self.areas.is_hand_empty() {
            return;
        }
        if self.config.has_level(self.level + 1) {
            self.level += 1;
            log::debug!("hand exhausted, advancing to level {}", self.level);
            self.deal_level_cards(overlap);
        } else {
            self.won = self.score >= self.config.win_score(self.level);
            self.phase = GamePhase::Ended;
            log::debug!(
                "game over at {} points ({})",
                self.score,
                if self.won { "won" } else { "lost" }
            );
        }
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current level (1-based; 0 before the first `start`).
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Game result: `None` until the game ends.
    #[must_use]
    pub fn won(&self) -> Option<bool> {
        (self.phase == GamePhase::Ended).then_some(self.won)
    }

    /// The area model, for queries.
    #[must_use]
    pub fn areas(&self) -> &AreaModel {
        &self.areas
    }

    /// The undo ledger, for queries.
    #[must_use]
    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    /// Whether an undo is currently possible.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.phase == GamePhase::Playing && self.ledger.can_undo()
    }
}
