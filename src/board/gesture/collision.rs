//! Nearest-corners drop target detection.

use super::{Point, Rect};
use crate::board::domain::DropTarget;

/// A droppable area and the target it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropZone {
    /// What a drop here means.
    pub target: DropTarget,
    /// Area in board coordinates.
    pub rect: Rect,
}

/// Picks the zone under `pointer` whose corners are closest to the corners
/// of `dragged`.
///
/// The score of a zone is the sum of the distances between corresponding
/// corners. Zones are expected in document order; the earliest zone wins a
/// tie.
#[must_use]
pub fn closest_corners(dragged: Rect, pointer: Point, zones: &[DropZone]) -> Option<&DropZone> {
    let dragged_corners = dragged.corners();
    let mut best: Option<(&DropZone, f64)> = None;
    for zone in zones.iter().filter(|zone| zone.rect.contains(pointer)) {
        let score = corner_score(&dragged_corners, zone.rect);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((zone, score)),
        }
    }
    best.map(|(zone, _)| zone)
}

fn corner_score(dragged: &[Point; 4], zone: Rect) -> f64 {
    dragged
        .iter()
        .zip(zone.corners())
        .map(|(corner, zone_corner)| corner.distance(zone_corner))
        .sum()
}
