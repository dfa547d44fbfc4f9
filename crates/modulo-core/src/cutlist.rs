//! Cut list derivation.
//!
//! Every shape maps to one or more cut lines. Dimensions are rounded to whole
//! centimetres before any division so the lines match what a workshop would
//! measure on the rounded drawing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::module::Module;
use crate::shape::Shape;

/// One line of the cut list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutLine {
    /// Type name of the module the piece belongs to.
    pub module: String,
    /// Piece label, or `None` for the generic fallback line.
    pub label: Option<String>,
    /// Rounded piece dimensions in centimetres, 2 or 3 values.
    pub dimensions: Vec<i64>,
    /// How many identical pieces, printed as `(xN)`. `None` for single
    /// pieces, which print no count.
    pub quantity: Option<u32>,
    /// Extra qualifier printed after the module name, e.g. the drawer count.
    pub note: Option<String>,
}

impl CutLine {
    fn piece(module: &Module, label: &str, dimensions: &[i64], quantity: Option<u32>) -> Self {
        Self {
            module: module.type_name().to_string(),
            label: Some(label.to_string()),
            dimensions: dimensions.to_vec(),
            quantity,
            note: None,
        }
    }

    fn with_note(mut self, note: String) -> Self {
        self.note = Some(note);
        self
    }
}

impl fmt::Display for CutLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self
            .dimensions
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join("x");
        write!(f, "- {}", self.module)?;
        if let Some(note) = &self.note {
            write!(f, " ({note})")?;
        }
        match &self.label {
            Some(label) => write!(f, " | {label}: {dims} CM")?,
            None => write!(f, ": {dims} CM")?,
        }
        if let Some(quantity) = self.quantity {
            write!(f, " (x{quantity})")?;
        }
        Ok(())
    }
}

fn round_cm(value: f64) -> i64 {
    value.round() as i64
}

fn divide_rounded(total: i64, parts: u32) -> i64 {
    round_cm(total as f64 / f64::from(parts))
}

/// Cut lines for a single shape, in workshop order.
pub fn cuts_for(shape: &Shape) -> Vec<CutLine> {
    let w = round_cm(shape.width);
    let h = round_cm(shape.height);
    let d = round_cm(shape.depth);
    let m = &shape.module;

    match m {
        Module::Cajonera { drawers } => {
            let n = if *drawers > 0 { *drawers } else { 3 };
            vec![
                CutLine::piece(m, "Frente", &[w, divide_rounded(h, n)], Some(n))
                    .with_note(format!("{n} cajones")),
                CutLine::piece(m, "Laterales", &[d, h], Some(2)),
                CutLine::piece(m, "Fondo", &[w, d], None),
            ]
        }
        Module::Modular {
            shelves,
            dividers,
            doors,
        } => {
            let mut lines = vec![
                CutLine::piece(m, "Marco", &[w, h], None),
                CutLine::piece(m, "Laterales", &[d, h], Some(2)),
                CutLine::piece(m, "Fondo", &[w, h], None),
            ];
            if *shelves > 0 {
                lines.push(CutLine::piece(m, "Estantes", &[w, d], Some(*shelves)));
            }
            if *dividers > 0 {
                let divider_height = divide_rounded(h, dividers + 1);
                lines.push(CutLine::piece(
                    m,
                    "Divisores",
                    &[w, divider_height],
                    Some(*dividers),
                ));
            }
            if *doors > 0 {
                let door_width = divide_rounded(w, *doors);
                lines.push(CutLine::piece(m, "Puertas", &[door_width, h], Some(*doors)));
            }
            lines
        }
        Module::Estante => vec![CutLine::piece(m, "Estante", &[w, d], None)],
        Module::Cubierta => vec![CutLine::piece(m, "Cubierta", &[w, d], None)],
        Module::Puerta => vec![CutLine::piece(m, "Puerta", &[w, h], None)],
        Module::Base => vec![CutLine::piece(m, "Base", &[w, h, d], None)],
        Module::Divisor => vec![CutLine::piece(m, "Divisor", &[w, h], None)],
        Module::Other(name) => vec![CutLine {
            module: name.clone(),
            label: None,
            dimensions: vec![w, h, d],
            quantity: None,
            note: None,
        }],
    }
}

/// Cut lines for a whole collection, shape by shape in collection order.
pub fn cut_list(shapes: &[Shape]) -> Vec<CutLine> {
    shapes.iter().flat_map(cuts_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn shape(module: Module, width: f64, height: f64, depth: f64) -> Shape {
        let mut s = Shape::new(module, Point::new(8.0, 8.0));
        s.width = width;
        s.height = height;
        s.depth = depth;
        s
    }

    #[test]
    fn test_cajonera_front_height() {
        let s = shape(Module::Cajonera { drawers: 3 }, 100.0, 70.0, 40.0);
        let cuts = cuts_for(&s);
        assert_eq!(cuts.len(), 3);
        assert_eq!(cuts[0].dimensions, vec![100, 23]);
        assert_eq!(cuts[0].quantity, Some(3));
        assert_eq!(
            cuts[0].to_string(),
            "- cajonera (3 cajones) | Frente: 100x23 CM (x3)"
        );
        assert_eq!(cuts[1].to_string(), "- cajonera | Laterales: 40x70 CM (x2)");
        assert_eq!(cuts[2].to_string(), "- cajonera | Fondo: 100x40 CM");
    }

    #[test]
    fn test_cajonera_zero_drawers_uses_three() {
        let s = shape(Module::Cajonera { drawers: 0 }, 100.0, 90.0, 40.0);
        let cuts = cuts_for(&s);
        assert_eq!(cuts[0].quantity, Some(3));
        assert_eq!(cuts[0].dimensions, vec![100, 30]);
    }

    #[test]
    fn test_single_drawer_keeps_count() {
        let s = shape(Module::Cajonera { drawers: 1 }, 100.0, 70.0, 40.0);
        assert_eq!(
            cuts_for(&s)[0].to_string(),
            "- cajonera (1 cajones) | Frente: 100x70 CM (x1)"
        );
    }

    #[test]
    fn test_modular_single_elements_keep_count() {
        let s = shape(
            Module::Modular {
                shelves: 1,
                dividers: 1,
                doors: 1,
            },
            120.0,
            140.0,
            40.0,
        );
        let cuts = cuts_for(&s);
        assert_eq!(cuts[0].to_string(), "- modular | Marco: 120x140 CM");
        assert_eq!(cuts[3].to_string(), "- modular | Estantes: 120x40 CM (x1)");
        assert_eq!(cuts[4].to_string(), "- modular | Divisores: 120x70 CM (x1)");
        assert_eq!(cuts[5].to_string(), "- modular | Puertas: 120x140 CM (x1)");
    }

    #[test]
    fn test_bare_modular_has_only_frame_sides_back() {
        let s = shape(
            Module::Modular {
                shelves: 0,
                dividers: 0,
                doors: 0,
            },
            120.0,
            140.0,
            40.0,
        );
        let labels: Vec<_> = cuts_for(&s)
            .into_iter()
            .map(|c| c.label.unwrap())
            .collect();
        assert_eq!(labels, vec!["Marco", "Laterales", "Fondo"]);
    }

    #[test]
    fn test_modular_with_everything() {
        let s = shape(
            Module::Modular {
                shelves: 2,
                dividers: 3,
                doors: 2,
            },
            121.0,
            140.0,
            40.0,
        );
        let cuts = cuts_for(&s);
        assert_eq!(cuts.len(), 6);
        assert_eq!(cuts[3].to_string(), "- modular | Estantes: 121x40 CM (x2)");
        assert_eq!(cuts[4].to_string(), "- modular | Divisores: 121x35 CM (x3)");
        // 121 / 2 = 60.5 rounds up
        assert_eq!(cuts[5].to_string(), "- modular | Puertas: 61x140 CM (x2)");
    }

    #[test]
    fn test_simple_kinds() {
        assert_eq!(
            cuts_for(&shape(Module::Estante, 120.4, 20.0, 30.0))[0].to_string(),
            "- estante | Estante: 120x30 CM"
        );
        assert_eq!(
            cuts_for(&shape(Module::Cubierta, 140.0, 6.0, 60.0))[0].to_string(),
            "- cubierta | Cubierta: 140x60 CM"
        );
        assert_eq!(
            cuts_for(&shape(Module::Puerta, 60.0, 120.0, 2.0))[0].to_string(),
            "- puerta | Puerta: 60x120 CM"
        );
        assert_eq!(
            cuts_for(&shape(Module::Base, 140.0, 12.0, 40.0))[0].to_string(),
            "- base | Base: 140x12x40 CM"
        );
        assert_eq!(
            cuts_for(&shape(Module::Divisor, 4.0, 120.0, 2.0))[0].to_string(),
            "- divisor | Divisor: 4x120 CM"
        );
    }

    #[test]
    fn test_unknown_kind_uses_generic_line() {
        let s = shape(Module::Other("mesa".into()), 60.0, 60.0, 20.0);
        assert_eq!(cuts_for(&s)[0].to_string(), "- mesa: 60x60x20 CM");
    }

    #[test]
    fn test_cut_list_keeps_collection_order() {
        let shapes = vec![
            shape(Module::Estante, 120.0, 20.0, 30.0),
            shape(Module::Puerta, 60.0, 120.0, 2.0),
        ];
        let cuts = cut_list(&shapes);
        assert_eq!(cuts.len(), 2);
        assert_eq!(cuts[0].module, "estante");
        assert_eq!(cuts[1].module, "puerta");
    }
}
