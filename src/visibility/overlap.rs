//! Overlap predicates: how two hand cards are judged to obscure each other.
//!
//! The visibility pass does not know where cards sit on screen; a
//! presentation layer supplies geometry through one of two strategies:
//!
//! - [`WorldRects`]: world-space bounding rectangles, tested with
//!   axis-aligned intersection. The normal renderer-backed mode.
//! - [`CenterDistance`]: card center positions against a nominal card
//!   footprint. The headless fallback when no renderer geometry exists.
//!
//! Both implement [`OverlapPredicate`], so either can drive
//! [`recompute`](super::recompute).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::card::CardId;

/// Axis-aligned rectangle in world space. `x`/`y` is the min corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its min corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether two rectangles intersect. Shared edges do not count.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Decides whether the bounding shapes of two hand cards intersect.
///
/// `lower` precedes `upper` in hand order, i.e. `upper` is stacked
/// visually on top. Implementations are free to ignore the distinction.
pub trait OverlapPredicate {
    /// Whether the two cards' shapes intersect.
    fn overlaps(&self, lower: CardId, upper: CardId) -> bool;
}

/// Rectangle-intersection strategy over caller-supplied world rects.
///
/// Cards with no registered rectangle never overlap anything.
#[derive(Clone, Debug, Default)]
pub struct WorldRects {
    rects: FxHashMap<CardId, Rect>,
}

impl WorldRects {
    /// Create an empty rect table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a card's world rectangle.
    pub fn set(&mut self, id: CardId, rect: Rect) {
        self.rects.insert(id, rect);
    }

    /// Drop a card's rectangle (e.g. after it leaves the hand).
    pub fn remove(&mut self, id: CardId) {
        self.rects.remove(&id);
    }

    /// Look up a card's rectangle.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Rect> {
        self.rects.get(&id)
    }
}

impl FromIterator<(CardId, Rect)> for WorldRects {
    fn from_iter<I: IntoIterator<Item = (CardId, Rect)>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

impl OverlapPredicate for WorldRects {
    fn overlaps(&self, lower: CardId, upper: CardId) -> bool {
        match (self.rects.get(&lower), self.rects.get(&upper)) {
            (Some(a), Some(b)) => a.intersects(b),
            _ => false,
        }
    }
}

/// Nominal card size and the overlap threshold fraction used by
/// [`CenterDistance`].
///
/// Two centers overlap when both |Δx| < `width × fraction` and
/// |Δy| < `height × fraction`. With fraction 1.0 this coincides with
/// rectangle intersection for uniformly sized cards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardFootprint {
    pub width: f32,
    pub height: f32,
    pub fraction: f32,
}

impl CardFootprint {
    /// Create a footprint with an explicit threshold fraction.
    #[must_use]
    pub const fn new(width: f32, height: f32, fraction: f32) -> Self {
        Self {
            width,
            height,
            fraction,
        }
    }
}

impl Default for CardFootprint {
    /// The stock card sprite size with full-footprint threshold.
    fn default() -> Self {
        Self::new(100.0, 145.0, 1.0)
    }
}

/// Center-distance strategy: compares the x/y delta between two card
/// centers against the footprint thresholds. Used headless, where no
/// renderer geometry is available.
#[derive(Clone, Debug)]
pub struct CenterDistance {
    positions: FxHashMap<CardId, (f32, f32)>,
    footprint: CardFootprint,
}

impl CenterDistance {
    /// Create an empty position table with the given footprint.
    #[must_use]
    pub fn new(footprint: CardFootprint) -> Self {
        Self {
            positions: FxHashMap::default(),
            footprint,
        }
    }

    /// Register (or replace) a card's center position.
    pub fn set(&mut self, id: CardId, x: f32, y: f32) {
        self.positions.insert(id, (x, y));
    }

    /// Drop a card's position.
    pub fn remove(&mut self, id: CardId) {
        self.positions.remove(&id);
    }

    /// The configured footprint.
    #[must_use]
    pub fn footprint(&self) -> CardFootprint {
        self.footprint
    }
}

impl Default for CenterDistance {
    fn default() -> Self {
        Self::new(CardFootprint::default())
    }
}

impl OverlapPredicate for CenterDistance {
    fn overlaps(&self, lower: CardId, upper: CardId) -> bool {
        let (Some(&(ax, ay)), Some(&(bx, by))) =
            (self.positions.get(&lower), self.positions.get(&upper))
        else {
            return false;
        };
        let threshold_x = self.footprint.width * self.footprint.fraction;
        let threshold_y = self.footprint.height * self.footprint.fraction;
        (ax - bx).abs() < threshold_x && (ay - by).abs() < threshold_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 0.0, 5.0, 5.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);

        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_world_rects_overlap() {
        let mut rects = WorldRects::new();
        rects.set(CardId(0), Rect::new(0.0, 0.0, 100.0, 145.0));
        rects.set(CardId(1), Rect::new(50.0, 20.0, 100.0, 145.0));
        rects.set(CardId(2), Rect::new(500.0, 0.0, 100.0, 145.0));

        assert!(rects.overlaps(CardId(0), CardId(1)));
        assert!(!rects.overlaps(CardId(0), CardId(2)));
    }

    #[test]
    fn test_missing_geometry_never_overlaps() {
        let mut rects = WorldRects::new();
        rects.set(CardId(0), Rect::new(0.0, 0.0, 100.0, 145.0));

        assert!(!rects.overlaps(CardId(0), CardId(1)));

        let distance = CenterDistance::default();
        assert!(!distance.overlaps(CardId(0), CardId(1)));
    }

    #[test]
    fn test_center_distance_thresholds() {
        let mut distance = CenterDistance::new(CardFootprint::new(100.0, 145.0, 1.0));
        distance.set(CardId(0), 0.0, 0.0);
        distance.set(CardId(1), 99.0, 0.0);
        distance.set(CardId(2), 100.0, 0.0);
        distance.set(CardId(3), 0.0, 145.0);

        assert!(distance.overlaps(CardId(0), CardId(1)));
        assert!(!distance.overlaps(CardId(0), CardId(2)));
        assert!(!distance.overlaps(CardId(0), CardId(3)));
    }

    #[test]
    fn test_center_distance_matches_rects_for_uniform_cards() {
        // Same layout expressed both ways: full-footprint center distance
        // must agree with rectangle intersection.
        let footprint = CardFootprint::default();
        let centers = [(0.0_f32, 0.0_f32), (60.0, 30.0), (300.0, 0.0)];

        let mut distance = CenterDistance::new(footprint);
        let mut rects = WorldRects::new();
        for (i, &(x, y)) in centers.iter().enumerate() {
            let id = CardId(i as u32);
            distance.set(id, x, y);
            rects.set(
                id,
                Rect::new(
                    x - footprint.width / 2.0,
                    y - footprint.height / 2.0,
                    footprint.width,
                    footprint.height,
                ),
            );
        }

        for i in 0..centers.len() as u32 {
            for j in 0..centers.len() as u32 {
                assert_eq!(
                    distance.overlaps(CardId(i), CardId(j)),
                    rects.overlaps(CardId(i), CardId(j)),
                    "strategies disagree on ({i}, {j})"
                );
            }
        }
    }
}
