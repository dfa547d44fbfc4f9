use std::fmt;

use serde::{Deserialize, Serialize};

/// Drawer count a `cajonera` gets when none (or zero) is specified.
pub const DEFAULT_DRAWERS: u32 = 3;

/// A placeable furniture component. Kinds with sub-elements carry their
/// counts inline so nothing downstream has to default them again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Module {
    /// Shelf.
    Estante,
    /// Drawer unit.
    Cajonera { drawers: u32 },
    /// Cabinet with optional shelves, dividers and doors.
    Modular {
        shelves: u32,
        dividers: u32,
        doors: u32,
    },
    Base,
    Divisor,
    /// Top.
    Cubierta,
    /// Door.
    Puerta,
    /// A type name this build does not know about, kept verbatim.
    Other(String),
}

/// Width, height and depth of a module as first dropped on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Footprint {
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

impl Module {
    /// Every known type name, in palette order.
    pub const TYPE_NAMES: [&'static str; 7] = [
        "estante", "cajonera", "modular", "base", "divisor", "cubierta", "puerta",
    ];

    /// Build a module from its wire type name with default sub-counts.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "estante" => Module::Estante,
            "cajonera" => Module::Cajonera {
                drawers: DEFAULT_DRAWERS,
            },
            "modular" => Module::Modular {
                shelves: 0,
                dividers: 0,
                doors: 0,
            },
            "base" => Module::Base,
            "divisor" => Module::Divisor,
            "cubierta" => Module::Cubierta,
            "puerta" => Module::Puerta,
            other => Module::Other(other.to_string()),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Module::Estante => "estante",
            Module::Cajonera { .. } => "cajonera",
            Module::Modular { .. } => "modular",
            Module::Base => "base",
            Module::Divisor => "divisor",
            Module::Cubierta => "cubierta",
            Module::Puerta => "puerta",
            Module::Other(name) => name,
        }
    }

    pub fn is_cubierta(&self) -> bool {
        matches!(self, Module::Cubierta)
    }

    pub fn default_footprint(&self) -> Footprint {
        match self {
            Module::Estante => Footprint::new(120.0, 20.0, 30.0),
            Module::Cajonera { .. } => Footprint::new(100.0, 70.0, 40.0),
            Module::Modular { .. } => Footprint::new(120.0, 140.0, 40.0),
            Module::Base => Footprint::new(140.0, 12.0, 40.0),
            Module::Divisor => Footprint::new(4.0, 120.0, 2.0),
            Module::Cubierta => Footprint::new(140.0, 6.0, 60.0),
            Module::Puerta => Footprint::new(60.0, 120.0, 2.0),
            Module::Other(_) => Footprint::new(60.0, 60.0, 20.0),
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_round_trip() {
        for name in Module::TYPE_NAMES {
            assert_eq!(Module::from_type_name(name).type_name(), name);
        }
    }

    #[test]
    fn test_unknown_name_is_kept() {
        let m = Module::from_type_name("mesa");
        assert_eq!(m, Module::Other("mesa".to_string()));
        assert_eq!(m.to_string(), "mesa");
        assert_eq!(m.default_footprint(), Footprint::new(60.0, 60.0, 20.0));
    }

    #[test]
    fn test_cajonera_defaults() {
        assert_eq!(
            Module::from_type_name("cajonera"),
            Module::Cajonera { drawers: 3 }
        );
        let fp = Module::from_type_name("cajonera").default_footprint();
        assert_eq!((fp.width, fp.height), (100.0, 70.0));
    }
}
