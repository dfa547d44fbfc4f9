//! Snap resolver: move a colliding candidate to the nearest free spot flush
//! against one of a set of reference shapes.

use serde::{Deserialize, Serialize};

use modulo_core::{Canvas, Point, Rect, Shape, ShapeId};

use crate::index::ShapeIndex;

/// Side of a reference shape a candidate can be snapped to, in search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Right,
    Left,
    Below,
    Above,
}

impl Side {
    pub const SEARCH_ORDER: [Side; 4] = [Side::Right, Side::Left, Side::Below, Side::Above];

    /// Top-left corner for `candidate` flush against `reference` on this side.
    pub fn anchor(self, reference: &Rect, candidate: &Rect, gap: f64) -> Point {
        match self {
            Side::Right => Point::new(reference.right() + gap, reference.y),
            Side::Left => Point::new(reference.x - candidate.width - gap, reference.y),
            Side::Below => Point::new(reference.x, reference.bottom() + gap),
            Side::Above => Point::new(reference.x, reference.y - candidate.height - gap),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    /// Best free anchor, or the candidate's clamped position when none was free.
    pub position: Point,
    /// Which reference and side produced `position`, if any anchor was free.
    pub anchor: Option<(ShapeId, Side)>,
}

impl SnapOutcome {
    pub fn is_anchored(&self) -> bool {
        self.anchor.is_some()
    }
}

/// Search every side of every reference shape for the collision-free anchor
/// closest to the candidate's position.
///
/// Anchors are clamped into the canvas and then tested against the whole
/// `universe`, not only the references. Ties keep the first anchor found,
/// so reference order and [`Side::SEARCH_ORDER`] decide.
pub fn snap<'a>(
    candidate: &Rect,
    references: impl IntoIterator<Item = &'a Shape>,
    universe: &ShapeIndex<'_>,
    canvas: &Canvas,
    gap: f64,
) -> SnapOutcome {
    let origin = candidate.origin();
    let mut best: Option<(Point, ShapeId, Side)> = None;
    let mut best_distance = f64::INFINITY;

    for reference in references {
        let bounds = reference.bounds();
        for side in Side::SEARCH_ORDER {
            let anchor = side.anchor(&bounds, candidate, gap);
            let clamped = canvas.clamp_origin(anchor, candidate.width, candidate.height);
            if universe.collides(&candidate.at(clamped)) {
                continue;
            }
            let distance = clamped.distance_to(&origin);
            if distance < best_distance {
                best_distance = distance;
                best = Some((clamped, reference.id, side));
            }
        }
    }

    match best {
        Some((position, id, side)) => {
            log::debug!(
                "snap: {:?} of {} at ({:.1}, {:.1}), distance {:.1}",
                side,
                id,
                position.x,
                position.y,
                best_distance
            );
            SnapOutcome {
                position,
                anchor: Some((id, side)),
            }
        }
        None => {
            log::debug!("snap: no free anchor, falling back to clamped position");
            SnapOutcome {
                position: canvas.clamp_origin(origin, candidate.width, candidate.height),
                anchor: None,
            }
        }
    }
}
