use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shape::{Shape, ShapeId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    #[error("design name must not be empty")]
    EmptyName,
}

/// A named shape collection, the unit exchanged with persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    /// Generated when the document carries none.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Display name.
    #[serde(alias = "nombre")]
    pub name: String,
    /// Insertion order is z-order.
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Design {
    pub fn new(name: &str) -> Result<Self, DesignError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: validate_name(name)?,
            shapes: Vec::new(),
        })
    }

    pub fn with_shapes(name: &str, shapes: Vec<Shape>) -> Result<Self, DesignError> {
        let mut design = Self::new(name)?;
        design.shapes = shapes;
        Ok(design)
    }

    // ── Shape access ─────────────────────────────────────────────────

    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        self.shapes.push(shape);
        id
    }

    pub fn get_shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == *id)
    }

    pub fn remove_shape(&mut self, id: &ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id == *id)?;
        Some(self.shapes.remove(index))
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn validate_name(name: &str) -> Result<String, DesignError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DesignError::EmptyName);
    }
    Ok(trimmed.to_string())
}
