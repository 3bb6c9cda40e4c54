//! Core engine types: cards, RNG, and session configuration.
//!
//! These are the fundamental building blocks shared by every component.
//! Nothing here depends on the area model, the evaluator, or the session
//! layer.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{Area, Card, CardId, Rank, Suit};
pub use config::{LevelConfig, LevelSettings};
pub use rng::GameRng;
