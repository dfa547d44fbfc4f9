use serde::{Deserialize, Serialize};

use modulo_core::{Point, Shape};

/// How an accepted position was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The candidate did not overlap anything.
    Direct,
    /// First cabinet on an empty canvas, centred on it.
    CanvasCentre,
    /// Internal module lifted to rest on a top.
    AboveCubierta,
    /// Flush against a reference shape.
    Snapped,
    /// Base or top centred under/over the cabinets.
    Centred,
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Every snap anchor (and the candidate's own spot) collides.
    NoFreeAnchor,
    /// The centred slot is already taken.
    CentreOccupied,
}

/// Result of a single placement attempt. Rejection is a value, not an error:
/// the caller simply commits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    Accepted {
        position: Point,
        resolution: Resolution,
    },
    Rejected {
        /// Last position tried; ghosts render here in the rejection style.
        attempted: Point,
        reason: RejectReason,
    },
}

impl Placement {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Placement::Accepted { .. })
    }

    /// Committable position, if accepted.
    pub fn position(&self) -> Option<Point> {
        match self {
            Placement::Accepted { position, .. } => Some(*position),
            Placement::Rejected { .. } => None,
        }
    }

    /// Where the candidate ends up for display purposes, accepted or not.
    pub fn display_position(&self) -> Point {
        match self {
            Placement::Accepted { position, .. } => *position,
            Placement::Rejected { attempted, .. } => *attempted,
        }
    }

    pub fn resolution(&self) -> Option<Resolution> {
        match self {
            Placement::Accepted { resolution, .. } => Some(*resolution),
            Placement::Rejected { .. } => None,
        }
    }
}

/// Transient preview of where an armed module would land. Never committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostPreview {
    pub shape: Shape,
    /// `false` means a drop right now would be refused.
    pub is_valid: bool,
    pub resolution: Option<Resolution>,
}

impl GhostPreview {
    pub fn from_placement(candidate: &Shape, placement: &Placement) -> Self {
        Self {
            shape: candidate.moved_to(placement.display_position()),
            is_valid: placement.is_accepted(),
            resolution: placement.resolution(),
        }
    }
}
