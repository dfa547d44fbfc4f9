//! Interactive editing session.
//!
//! Holds the shape collection together with the transient editor state
//! (selection, armed module, ghost preview, viewport) and turns pointer and
//! wheel events into placement attempts. A single session is driven from one
//! event loop; nothing here is shared across threads.

use serde::Serialize;
use thiserror::Error;

use modulo_core::{
    cut_list, Count, CutLine, Design, DesignError, Dimension, EditorSettings, Module, Point,
    Shape, ShapeError, ShapeId,
};
use modulo_placement::{GhostPreview, Placement, PlacementEngine, RejectReason, Resolution};
use modulo_renderer::{RenderFrame, Viewport};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("No shape with id {0}")]
    UnknownShape(ShapeId),

    #[error("Invalid edit: {0}")]
    Shape(#[from] ShapeError),

    #[error("Invalid design: {0}")]
    Design(#[from] DesignError),
}

/// What a pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DropOutcome {
    /// No module was armed.
    Idle,
    /// A new shape was appended and selected.
    Placed {
        id: ShapeId,
        position: Point,
        resolution: Resolution,
    },
    /// The drop was refused; nothing changed.
    Refused {
        attempted: Point,
        reason: RejectReason,
    },
}

/// What a drag-end did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DragOutcome {
    Moved {
        position: Point,
        resolution: Resolution,
    },
    /// The shape stayed at its last committed position.
    Reverted { position: Point, reason: RejectReason },
}

pub struct Session {
    settings: EditorSettings,
    engine: PlacementEngine,
    viewport: Viewport,
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    armed: Option<Module>,
    ghost: Option<GhostPreview>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl Session {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            engine: PlacementEngine::new(&settings),
            viewport: Viewport::from_settings(&settings),
            settings,
            shapes: Vec::new(),
            selected: None,
            armed: None,
            ghost: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == *id)
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn armed(&self) -> Option<&Module> {
        self.armed.as_ref()
    }

    pub fn ghost(&self) -> Option<&GhostPreview> {
        self.ghost.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Snapshot for the view layer.
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::build(&self.shapes, self.selected, self.ghost.as_ref(), self.viewport)
    }

    // ── Placement ────────────────────────────────────────────────────

    /// Pick a module from the palette. The next pointer-down drops it.
    pub fn arm(&mut self, module: Module) {
        log::debug!("armed {}", module);
        self.armed = Some(module);
        self.ghost = None;
    }

    pub fn disarm(&mut self) {
        self.armed = None;
        self.ghost = None;
    }

    /// Recompute the ghost preview under the pointer.
    pub fn pointer_move(&mut self, screen: Point) {
        let Some(module) = self.armed.clone() else {
            return;
        };
        let candidate = Shape::centred_on(module, self.viewport.screen_to_model(screen));
        self.ghost = Some(self.engine.preview(&candidate, &self.shapes));
    }

    pub fn pointer_leave(&mut self) {
        self.ghost = None;
    }

    /// Drop the armed module at the pointer.
    pub fn pointer_down(&mut self, screen: Point) -> DropOutcome {
        let Some(module) = self.armed.clone() else {
            return DropOutcome::Idle;
        };
        let model = self.viewport.screen_to_model(screen);
        self.place(module, model)
    }

    /// Drop `module` centred on a model-space point. Accepted drops append
    /// and select the new shape and clear the armed module and ghost.
    pub fn place(&mut self, module: Module, model: Point) -> DropOutcome {
        let candidate = Shape::centred_on(module, model);
        match self.engine.place_new(&candidate, &self.shapes) {
            Placement::Accepted {
                position,
                resolution,
            } => {
                let shape = candidate.moved_to(position);
                let id = shape.id;
                log::info!(
                    "placed {} at ({:.1}, {:.1}) via {:?}",
                    shape.module,
                    position.x,
                    position.y,
                    resolution
                );
                self.shapes.push(shape);
                self.selected = Some(id);
                self.armed = None;
                self.ghost = None;
                DropOutcome::Placed {
                    id,
                    position,
                    resolution,
                }
            }
            Placement::Rejected { attempted, reason } => {
                log::warn!("drop of {} refused: {:?}", candidate.module, reason);
                DropOutcome::Refused { attempted, reason }
            }
        }
    }

    /// Commit or revert a finished drag. Only `x`/`y` of the shape change.
    pub fn drag_end(&mut self, id: ShapeId, target: Point) -> Result<DragOutcome, SessionError> {
        let index = self.index_of(&id)?;
        let original = self.shapes[index].origin();
        let placement = self.engine.relocate(&self.shapes[index], target, &self.shapes);

        let outcome = match placement {
            Placement::Accepted {
                position,
                resolution,
            } => {
                log::info!(
                    "moved {} to ({:.1}, {:.1}) via {:?}",
                    id,
                    position.x,
                    position.y,
                    resolution
                );
                let shape = &mut self.shapes[index];
                shape.x = position.x;
                shape.y = position.y;
                DragOutcome::Moved {
                    position,
                    resolution,
                }
            }
            Placement::Rejected { reason, .. } => {
                log::warn!("drag of {} reverted: {:?}", id, reason);
                DragOutcome::Reverted {
                    position: original,
                    reason,
                }
            }
        };
        Ok(outcome)
    }

    // ── Selection & edits ────────────────────────────────────────────

    pub fn select(&mut self, id: ShapeId) -> Result<(), SessionError> {
        self.index_of(&id)?;
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Manual numeric edit. Not collision-corrected.
    pub fn set_dimension(
        &mut self,
        id: ShapeId,
        field: Dimension,
        value: f64,
    ) -> Result<(), SessionError> {
        let index = self.index_of(&id)?;
        self.shapes[index].set_dimension(field, value)?;
        Ok(())
    }

    /// Returns `false` when the count does not apply to the shape's kind.
    pub fn set_count(
        &mut self,
        id: ShapeId,
        count: Count,
        value: Option<u32>,
    ) -> Result<bool, SessionError> {
        let index = self.index_of(&id)?;
        Ok(self.shapes[index].set_count(count, value))
    }

    pub fn remove(&mut self, id: ShapeId) -> Result<Shape, SessionError> {
        let index = self.index_of(&id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(self.shapes.remove(index))
    }

    fn index_of(&self, id: &ShapeId) -> Result<usize, SessionError> {
        self.shapes
            .iter()
            .position(|s| s.id == *id)
            .ok_or(SessionError::UnknownShape(*id))
    }

    // ── Documents ────────────────────────────────────────────────────

    pub fn new_design(&mut self) {
        self.shapes.clear();
        self.selected = None;
        self.ghost = None;
    }

    pub fn load(&mut self, design: Design) {
        log::info!(
            "loaded design '{}' ({} shapes)",
            design.name,
            design.shape_count()
        );
        self.shapes = design.shapes;
        self.selected = None;
        self.ghost = None;
    }

    pub fn to_design(&self, name: &str) -> Result<Design, SessionError> {
        Ok(Design::with_shapes(name, self.shapes.clone())?)
    }

    pub fn cut_list(&self) -> Vec<CutLine> {
        cut_list(&self.shapes)
    }

    // ── Viewport ─────────────────────────────────────────────────────

    pub fn wheel(&mut self, screen: Point, delta_y: f64) {
        self.viewport.wheel(screen, delta_y);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    pub fn resize(&mut self, container_width: f64, container_height: f64) {
        self.viewport.fit_container(container_width, container_height);
    }
}
