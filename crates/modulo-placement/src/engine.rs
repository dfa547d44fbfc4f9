//! Placement orchestration.
//!
//! A candidate is clamped into the canvas and tested for overlap. If it is
//! free it is accepted as-is; otherwise the candidate's category picks a
//! resolver, and the resolver's answer is re-checked against the full set
//! before being accepted. Nothing here mutates the shape collection.

use modulo_core::{Canvas, Category, EditorSettings, Point, Rect, Shape};

use crate::centre::{centre_position, Stack};
use crate::index::ShapeIndex;
use crate::outcome::{GhostPreview, Placement, RejectReason, Resolution};
use crate::snap::snap;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementEngine {
    canvas: Canvas,
    principal_gap: f64,
    horizontal_gap: f64,
    internal_gap: f64,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(&EditorSettings::default())
    }
}

impl PlacementEngine {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            canvas: settings.canvas(),
            principal_gap: settings.principal_gap,
            horizontal_gap: settings.horizontal_gap,
            internal_gap: settings.internal_gap,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Place a brand-new candidate into `shapes`.
    ///
    /// The first cabinet on an empty canvas is centred on the canvas
    /// regardless of where it was dropped.
    pub fn place_new(&self, candidate: &Shape, shapes: &[Shape]) -> Placement {
        if shapes.is_empty() && candidate.category() == Category::Principal {
            let centred = self.canvas.centred_origin(candidate.width, candidate.height);
            let position = self
                .canvas
                .clamp_origin(centred, candidate.width, candidate.height);
            log::debug!("place: first {} centred on canvas", candidate.module);
            return Placement::Accepted {
                position,
                resolution: Resolution::CanvasCentre,
            };
        }
        self.resolve(candidate, shapes.iter())
    }

    /// Move an existing shape to `target`. The shape itself (matched by id)
    /// is left out of both the collision set and the snap references.
    pub fn relocate(&self, shape: &Shape, target: Point, shapes: &[Shape]) -> Placement {
        let others = shapes.iter().filter(|s| s.id != shape.id);
        self.resolve(&shape.moved_to(target), others)
    }

    /// Same pipeline as [`place_new`](Self::place_new), packaged for display.
    pub fn preview(&self, candidate: &Shape, shapes: &[Shape]) -> GhostPreview {
        GhostPreview::from_placement(candidate, &self.place_new(candidate, shapes))
    }

    /// Resolve `candidate` against `universe`, which is both the collision set
    /// and the pool reference shapes are drawn from.
    pub fn resolve<'a>(
        &self,
        candidate: &Shape,
        universe: impl IntoIterator<Item = &'a Shape>,
    ) -> Placement {
        let index = ShapeIndex::build(universe);
        let rect = self.canvas.clamp(&candidate.bounds());

        if !index.collides(&rect) {
            return Placement::Accepted {
                position: rect.origin(),
                resolution: Resolution::Direct,
            };
        }

        let placement = match candidate.category() {
            Category::Internal => self.resolve_internal(&rect, &index),
            Category::Horizontal => self.resolve_horizontal(candidate, &rect, &index),
            Category::Principal => self.resolve_principal(&rect, &index),
        };
        match &placement {
            Placement::Accepted {
                position,
                resolution,
            } => log::debug!(
                "resolve: {} accepted at ({:.1}, {:.1}) via {:?}",
                candidate.module,
                position.x,
                position.y,
                resolution
            ),
            Placement::Rejected { reason, .. } => {
                log::debug!("resolve: {} rejected ({:?})", candidate.module, reason)
            }
        }
        placement
    }

    fn resolve_internal(&self, rect: &Rect, index: &ShapeIndex<'_>) -> Placement {
        if let Some(top) = index.first_overlapping(rect, |s| s.module.is_cubierta()) {
            let lifted = Point::new(rect.x, top.y - rect.height - self.internal_gap);
            let lifted = self.canvas.clamp(&rect.at(lifted));
            if !index.collides(&lifted) {
                return Placement::Accepted {
                    position: lifted.origin(),
                    resolution: Resolution::AboveCubierta,
                };
            }
            log::debug!("resolve: slot above top {} is taken", top.id);
        }

        let references = index
            .shapes()
            .iter()
            .copied()
            .filter(|s| s.module.is_cubierta() || s.category() == Category::Principal);
        self.snap_or_reject(rect, references, index, 0.0)
    }

    fn resolve_horizontal(
        &self,
        candidate: &Shape,
        rect: &Rect,
        index: &ShapeIndex<'_>,
    ) -> Placement {
        let position = centre_position(
            Stack::of(&candidate.module),
            rect,
            index.shapes(),
            &self.canvas,
            self.horizontal_gap,
        );
        if index.collides(&rect.at(position)) {
            Placement::Rejected {
                attempted: position,
                reason: RejectReason::CentreOccupied,
            }
        } else {
            Placement::Accepted {
                position,
                resolution: Resolution::Centred,
            }
        }
    }

    fn resolve_principal(&self, rect: &Rect, index: &ShapeIndex<'_>) -> Placement {
        let references = index
            .shapes()
            .iter()
            .copied()
            .filter(|s| s.category() == Category::Principal);
        self.snap_or_reject(rect, references, index, self.principal_gap)
    }

    fn snap_or_reject<'a>(
        &self,
        rect: &Rect,
        references: impl IntoIterator<Item = &'a Shape>,
        index: &ShapeIndex<'_>,
        gap: f64,
    ) -> Placement {
        let outcome = snap(rect, references, index, &self.canvas, gap);
        if index.collides(&rect.at(outcome.position)) {
            Placement::Rejected {
                attempted: outcome.position,
                reason: RejectReason::NoFreeAnchor,
            }
        } else {
            Placement::Accepted {
                position: outcome.position,
                resolution: Resolution::Snapped,
            }
        }
    }
}
