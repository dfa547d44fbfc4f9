//! Centre resolver for bases and tops.

use serde::{Deserialize, Serialize};

use modulo_core::canvas::{FAR_MARGIN, MARGIN};
use modulo_core::{BBox, Canvas, Category, Module, Point, Rect, Shape};

/// Whether a horizontal module goes over or under the cabinets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stack {
    /// Tops sit above the highest top edge.
    Over,
    /// Bases sit below the lowest bottom edge.
    Under,
}

impl Stack {
    pub fn of(module: &Module) -> Self {
        match module {
            Module::Base => Stack::Under,
            _ => Stack::Over,
        }
    }
}

/// Footprint the horizontal module is centred on: the principal shapes,
/// or every shape when there are no principal ones.
pub fn reference_bbox(universe: &[&Shape]) -> Option<BBox> {
    let principal: Vec<Rect> = universe
        .iter()
        .filter(|s| s.category() == Category::Principal)
        .map(|s| s.bounds())
        .collect();
    if !principal.is_empty() {
        return BBox::enclosing(&principal);
    }
    let all: Vec<Rect> = universe.iter().map(|s| s.bounds()).collect();
    BBox::enclosing(&all)
}

/// Top-left corner for `candidate` centred horizontally over (or under) the
/// reference footprint, `gap` away from it, clamped into the canvas.
///
/// With nothing on the canvas a base goes to the bottom edge and a top to the
/// top edge, both horizontally centred. The engine never gets here with an
/// empty set (a free candidate is accepted first); that branch serves direct
/// callers.
pub fn centre_position(
    stack: Stack,
    candidate: &Rect,
    universe: &[&Shape],
    canvas: &Canvas,
    gap: f64,
) -> Point {
    let target = match reference_bbox(universe) {
        Some(bb) => {
            let x = bb.center().x - candidate.width / 2.0;
            let y = match stack {
                Stack::Over => bb.min.y - candidate.height - gap,
                Stack::Under => bb.max.y + gap,
            };
            Point::new(x, y)
        }
        None => {
            let x = (canvas.width - candidate.width) / 2.0;
            let y = match stack {
                Stack::Over => MARGIN,
                Stack::Under => canvas.height - FAR_MARGIN - candidate.height,
            };
            Point::new(x, y)
        }
    };
    log::debug!(
        "centre: {:?} target ({:.1}, {:.1})",
        stack,
        target.x,
        target.y
    );
    canvas.clamp_origin(target, candidate.width, candidate.height)
}
