use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::category::Category;
use crate::geometry::{Point, Rect};
use crate::module::{Module, DEFAULT_DRAWERS};

/// Unique shape identifier.
pub type ShapeId = Uuid;

/// Depth assumed for records persisted without one.
pub const DEFAULT_DEPTH: f64 = 20.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{field} must be positive, got {value}")]
    NonPositiveExtent { field: Dimension, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: Dimension },
}

/// Editable scalar fields of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    X,
    Y,
    Width,
    Height,
    Depth,
    Rotation,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::X => "x",
            Dimension::Y => "y",
            Dimension::Width => "width",
            Dimension::Height => "height",
            Dimension::Depth => "depth",
            Dimension::Rotation => "rotation",
        };
        f.write_str(name)
    }
}

/// Per-kind sub-element counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Count {
    NumCajones,
    NumEstantes,
    NumDivisores,
    NumPuertas,
}

/// A placed module instance.
///
/// Serializes through [`ShapeRecord`], so the on-the-wire form is the flat
/// record shared with persistence while in memory every optional field has
/// already been defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ShapeRecord", into = "ShapeRecord")]
pub struct Shape {
    pub id: ShapeId,
    pub module: Module,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Not used for collision; carried for the cut list.
    pub depth: f64,
    /// Degrees. Stored only: collision always uses the unrotated box.
    pub rotation: f64,
}

impl Shape {
    /// A fresh shape of `module` with its default footprint at `origin`.
    pub fn new(module: Module, origin: Point) -> Self {
        let fp = module.default_footprint();
        Self {
            id: Uuid::new_v4(),
            module,
            x: origin.x,
            y: origin.y,
            width: fp.width,
            height: fp.height,
            depth: fp.depth,
            rotation: 0.0,
        }
    }

    /// A fresh shape of `module` whose footprint is centred on `centre`.
    pub fn centred_on(module: Module, centre: Point) -> Self {
        let fp = module.default_footprint();
        let origin = centre.translate(-fp.width / 2.0, -fp.height / 2.0);
        Self::new(module, origin)
    }

    pub fn category(&self) -> Category {
        Category::of(&self.module)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn moved_to(&self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self.clone()
        }
    }

    pub fn overlaps(&self, other: &Shape) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    /// Manual edit of a scalar field. Width and height must stay positive.
    /// No collision correction happens here.
    pub fn set_dimension(&mut self, field: Dimension, value: f64) -> Result<(), ShapeError> {
        if !value.is_finite() {
            return Err(ShapeError::NotFinite { field });
        }
        match field {
            Dimension::Width | Dimension::Height if value <= 0.0 => {
                return Err(ShapeError::NonPositiveExtent { field, value });
            }
            Dimension::X => self.x = value,
            Dimension::Y => self.y = value,
            Dimension::Width => self.width = value,
            Dimension::Height => self.height = value,
            Dimension::Depth => self.depth = value,
            Dimension::Rotation => self.rotation = value,
        }
        Ok(())
    }

    /// Manual edit of a sub-element count. `None` restores the default.
    /// Returns `false` when the count does not apply to this kind.
    pub fn set_count(&mut self, count: Count, value: Option<u32>) -> bool {
        match (&mut self.module, count) {
            (Module::Cajonera { drawers }, Count::NumCajones) => {
                *drawers = normalize_drawers(value.map(i64::from));
            }
            (Module::Modular { shelves, .. }, Count::NumEstantes) => *shelves = value.unwrap_or(0),
            (Module::Modular { dividers, .. }, Count::NumDivisores) => {
                *dividers = value.unwrap_or(0)
            }
            (Module::Modular { doors, .. }, Count::NumPuertas) => *doors = value.unwrap_or(0),
            _ => return false,
        }
        true
    }
}

/// Shape id as persisted. Older stores wrote millisecond timestamps instead
/// of UUIDs; those map onto a stable UUID so they stay unique on reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Uuid(ShapeId),
    Number(u64),
}

impl RecordId {
    pub fn to_shape_id(self) -> ShapeId {
        match self {
            RecordId::Uuid(id) => id,
            RecordId::Number(n) => Uuid::from_u64_pair(0, n),
        }
    }
}

impl From<ShapeId> for RecordId {
    fn from(id: ShapeId) -> Self {
        RecordId::Uuid(id)
    }
}

/// Flat shape record as exchanged with persistence. Optional fields may be
/// absent or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_cajones: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_estantes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_divisores: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_puertas: Option<i64>,
}

fn normalize_drawers(value: Option<i64>) -> u32 {
    match value {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => DEFAULT_DRAWERS,
    }
}

fn normalize_count(value: Option<i64>) -> u32 {
    value
        .map(|n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

impl From<ShapeRecord> for Shape {
    fn from(record: ShapeRecord) -> Self {
        let id = record.id.to_shape_id();
        let module = match Module::from_type_name(&record.kind) {
            Module::Cajonera { .. } => Module::Cajonera {
                drawers: normalize_drawers(record.num_cajones),
            },
            Module::Modular { .. } => Module::Modular {
                shelves: normalize_count(record.num_estantes),
                dividers: normalize_count(record.num_divisores),
                doors: normalize_count(record.num_puertas),
            },
            Module::Other(name) => {
                log::debug!("shape {}: unknown type '{}', treated as a cabinet", id, name);
                Module::Other(name)
            }
            other => other,
        };
        Self {
            id,
            module,
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            depth: record.depth.unwrap_or(DEFAULT_DEPTH),
            rotation: record.rotation.unwrap_or(0.0),
        }
    }
}

impl From<Shape> for ShapeRecord {
    fn from(shape: Shape) -> Self {
        let mut record = ShapeRecord {
            id: shape.id.into(),
            kind: shape.module.type_name().to_string(),
            x: shape.x,
            y: shape.y,
            width: shape.width,
            height: shape.height,
            depth: Some(shape.depth),
            rotation: Some(shape.rotation),
            num_cajones: None,
            num_estantes: None,
            num_divisores: None,
            num_puertas: None,
        };
        match shape.module {
            Module::Cajonera { drawers } => record.num_cajones = Some(i64::from(drawers)),
            Module::Modular {
                shelves,
                dividers,
                doors,
            } => {
                record.num_estantes = Some(i64::from(shelves));
                record.num_divisores = Some(i64::from(dividers));
                record.num_puertas = Some(i64::from(doors));
            }
            _ => {}
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centred_on_uses_default_footprint() {
        let s = Shape::centred_on(Module::from_type_name("cajonera"), Point::new(350.0, 240.0));
        assert_eq!(s.bounds(), Rect::new(300.0, 205.0, 100.0, 70.0));
        assert!((s.depth - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_record_defaults_are_applied() {
        let json = r#"{
            "id": "6f1c1f7e-4d1c-4b8e-9a64-2d0f5e8b7a10",
            "type": "cajonera",
            "x": 10, "y": 20, "width": 100, "height": 70,
            "numCajones": 0
        }"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.module, Module::Cajonera { drawers: 3 });
        assert!((shape.depth - DEFAULT_DEPTH).abs() < 1e-10);
        assert!((shape.rotation - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_numeric_record_id() {
        let json = r#"{"id": 1712345678901, "type": "estante",
                       "x": 8, "y": 8, "width": 120, "height": 20}"#;
        let first: Shape = serde_json::from_str(json).unwrap();
        let again: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(first.id, again.id);
        assert_eq!(first.id, Uuid::from_u64_pair(0, 1_712_345_678_901));

        let other: Shape = serde_json::from_str(&json.replace("901", "902")).unwrap();
        assert_ne!(first.id, other.id);

        // Written back as a UUID string.
        let out = serde_json::to_value(&first).unwrap();
        assert_eq!(out["id"], serde_json::json!(first.id.to_string()));
    }

    #[test]
    fn test_modular_counts_default_independently() {
        let json = r#"{
            "id": "6f1c1f7e-4d1c-4b8e-9a64-2d0f5e8b7a11",
            "type": "modular",
            "x": 0, "y": 0, "width": 120, "height": 140,
            "numEstantes": 2, "numDivisores": null
        }"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(
            shape.module,
            Module::Modular {
                shelves: 2,
                dividers: 0,
                doors: 0
            }
        );
    }

    #[test]
    fn test_wire_form_uses_record_field_names() {
        let shape = Shape::new(Module::Cajonera { drawers: 4 }, Point::new(8.0, 8.0));
        let value = serde_json::to_value(&shape).unwrap();
        assert_eq!(value["type"], "cajonera");
        assert_eq!(value["numCajones"], 4);
        assert!(value.get("numEstantes").is_none());
    }

    #[test]
    fn test_unknown_type_survives_serialization() {
        let shape = Shape::new(Module::Other("banco".into()), Point::new(8.0, 8.0));
        let json = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back.module, Module::Other("banco".into()));
    }

    #[test]
    fn test_set_dimension_rejects_non_positive_extent() {
        let mut shape = Shape::new(Module::Estante, Point::new(8.0, 8.0));
        assert!(shape.set_dimension(Dimension::Width, 0.0).is_err());
        assert!(shape.set_dimension(Dimension::Height, -3.0).is_err());
        assert!(shape.set_dimension(Dimension::Depth, f64::NAN).is_err());
        shape.set_dimension(Dimension::Width, 80.0).unwrap();
        assert!((shape.width - 80.0).abs() < 1e-10);
    }

    #[test]
    fn test_set_count_applies_to_matching_kind_only() {
        let mut cajonera = Shape::new(Module::from_type_name("cajonera"), Point::new(8.0, 8.0));
        assert!(cajonera.set_count(Count::NumCajones, Some(5)));
        assert_eq!(cajonera.module, Module::Cajonera { drawers: 5 });
        assert!(cajonera.set_count(Count::NumCajones, Some(0)));
        assert_eq!(cajonera.module, Module::Cajonera { drawers: 3 });
        assert!(!cajonera.set_count(Count::NumPuertas, Some(2)));

        let mut modular = Shape::new(Module::from_type_name("modular"), Point::new(8.0, 8.0));
        assert!(modular.set_count(Count::NumPuertas, Some(2)));
        assert!(modular.set_count(Count::NumEstantes, None));
        assert_eq!(
            modular.module,
            Module::Modular {
                shelves: 0,
                dividers: 0,
                doors: 2
            }
        );
    }
}
