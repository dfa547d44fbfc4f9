use serde::{Deserialize, Serialize};

use modulo_core::{Shape, ShapeId};
use modulo_placement::{GhostPreview, Resolution};

/// A shape ready for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderShape {
    pub shape: Shape,
    /// Whether this shape is the current selection.
    pub selected: bool,
}

/// How the ghost preview should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostStyle {
    /// Plain preview at (or snapped near) the pointer.
    Normal,
    /// Internal module resting on a top.
    Resting,
    /// Base or top centred on the cabinets.
    Centred,
    /// A drop here would be refused.
    Rejected,
}

impl GhostStyle {
    pub fn of(ghost: &GhostPreview) -> Self {
        if !ghost.is_valid {
            return GhostStyle::Rejected;
        }
        match ghost.resolution {
            Some(Resolution::AboveCubierta) => GhostStyle::Resting,
            Some(Resolution::Centred) => GhostStyle::Centred,
            _ => GhostStyle::Normal,
        }
    }
}

/// The ghost plus its draw style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderGhost {
    pub preview: GhostPreview,
    pub style: GhostStyle,
}

/// Complete frame handed from the session to the view layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    /// In z-order.
    pub shapes: Vec<RenderShape>,
    pub selected: Option<ShapeId>,
    pub ghost: Option<RenderGhost>,
    pub viewport: super::Viewport,
    /// Stage size in screen pixels: [width, height]
    pub stage_size: [f64; 2],
}

impl RenderFrame {
    pub fn empty(viewport: super::Viewport) -> Self {
        let (w, h) = viewport.stage_size();
        Self {
            shapes: Vec::new(),
            ghost: None,
            selected: None,
            viewport,
            stage_size: [w, h],
        }
    }

    pub fn build(
        shapes: &[Shape],
        selected: Option<ShapeId>,
        ghost: Option<&GhostPreview>,
        viewport: super::Viewport,
    ) -> Self {
        let mut frame = Self::empty(viewport);
        frame.shapes = shapes
            .iter()
            .map(|s| RenderShape {
                shape: s.clone(),
                selected: Some(s.id) == selected,
            })
            .collect();
        frame.selected = selected;
        frame.ghost = ghost.map(|g| RenderGhost {
            preview: g.clone(),
            style: GhostStyle::of(g),
        });
        frame
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;
    use modulo_core::{Module, Point};

    #[test]
    fn test_frame_marks_selection() {
        let a = Shape::new(Module::Estante, Point::new(8.0, 8.0));
        let b = Shape::new(Module::Puerta, Point::new(200.0, 8.0));
        let frame = RenderFrame::build(
            &[a.clone(), b.clone()],
            Some(b.id),
            None,
            Viewport::new(700.0, 480.0),
        );
        assert!(!frame.shapes[0].selected);
        assert!(frame.shapes[1].selected);
        assert!(frame.ghost.is_none());
        assert_eq!(frame.stage_size, [700.0, 480.0]);
    }

    #[test]
    fn test_ghost_style() {
        let shape = Shape::new(Module::Estante, Point::new(8.0, 8.0));
        let ghost = |is_valid, resolution| GhostPreview {
            shape: shape.clone(),
            is_valid,
            resolution,
        };
        assert_eq!(GhostStyle::of(&ghost(false, None)), GhostStyle::Rejected);
        assert_eq!(
            GhostStyle::of(&ghost(true, Some(Resolution::AboveCubierta))),
            GhostStyle::Resting
        );
        assert_eq!(
            GhostStyle::of(&ghost(true, Some(Resolution::Centred))),
            GhostStyle::Centred
        );
        assert_eq!(
            GhostStyle::of(&ghost(true, Some(Resolution::Snapped))),
            GhostStyle::Normal
        );
    }

    #[test]
    fn test_frame_serializes() {
        let frame = RenderFrame::empty(Viewport::new(700.0, 480.0));
        let json = frame.to_json().unwrap();
        assert!(json.contains("\"stage_size\""));
    }
}
