//! Area state machine for card custody and movement.
//!
//! ## Key Types
//!
//! - `AreaModel`: owns the hand, play, and wait sequences and every card
//!   in them
//! - `MoveOutcome`: whether a guarded move applied or was a silent no-op
//! - `PLAY_AREA_CAPACITY`: the five-card play area limit that triggers
//!   scoring

pub mod model;

pub use model::{AreaModel, MoveOutcome, PLAY_AREA_CAPACITY};
