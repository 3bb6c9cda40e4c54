//! Visibility engine: which hand cards are currently selectable.
//!
//! Hand sequence order doubles as z-order: a higher index is stacked
//! visually on top. A card overlapped by any later-indexed card cannot be
//! the top of its stack, so it loses interactivity until the stack above
//! it is played away.
//!
//! [`recompute`] must run after every operation that changes hand
//! membership, before the next `clickable_hand_cards()` result is trusted.
//! The engine does not enforce that ordering; it is the caller's
//! obligation (the session layer honors it for every mutator).

pub mod overlap;

pub use overlap::{CardFootprint, CenterDistance, OverlapPredicate, Rect, WorldRects};

use crate::areas::AreaModel;
use crate::core::card::CardId;

/// Recompute the clickable flag for every hand card.
///
/// Every hand card is first reset to clickable, then each ordered pair
/// `(i, j)` with `i < j` is tested: an overlap clears card `i`'s flag.
/// A flag cleared within the pass is never set back within the same pass.
///
/// Pairwise O(n²) over the hand; hand size is content-bounded (tens of
/// cards), so no spatial index is warranted.
pub fn recompute(areas: &mut AreaModel, overlap: &impl OverlapPredicate) {
    let order: Vec<CardId> = areas.hand_order().to_vec();

    for &id in &order {
        areas.set_clickable(id, true);
    }

    for (i, &lower) in order.iter().enumerate() {
        for &upper in &order[i + 1..] {
            if overlap.overlaps(lower, upper) {
                areas.set_clickable(lower, false);
                break;
            }
        }
    }
}
