use serde::{Deserialize, Serialize};

use crate::module::Module;

/// Collision-handling group of a module type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Doors, shelves and dividers: hug tops, else snap to tops and cabinets.
    Internal,
    /// Bases and tops: centred under/over the principal footprint.
    Horizontal,
    /// Cabinets. Also the fallback for any type not in the table.
    #[default]
    Principal,
}

/// Fixed type-name → category table.
const CATEGORY_TABLE: [(&str, Category); 7] = [
    ("puerta", Category::Internal),
    ("estante", Category::Internal),
    ("divisor", Category::Internal),
    ("base", Category::Horizontal),
    ("cubierta", Category::Horizontal),
    ("cajonera", Category::Principal),
    ("modular", Category::Principal),
];

impl Category {
    pub fn of(module: &Module) -> Self {
        Self::of_type_name(module.type_name())
    }

    pub fn of_type_name(name: &str) -> Self {
        CATEGORY_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
            .unwrap_or_default()
    }
}

pub fn category_of(module: &Module) -> Category {
    Category::of(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_known_kinds() {
        for name in Module::TYPE_NAMES {
            assert!(CATEGORY_TABLE.iter().any(|(n, _)| *n == name), "{name}");
        }
    }

    #[test]
    fn test_groups() {
        assert_eq!(category_of(&Module::Puerta), Category::Internal);
        assert_eq!(category_of(&Module::Estante), Category::Internal);
        assert_eq!(category_of(&Module::Divisor), Category::Internal);
        assert_eq!(category_of(&Module::Base), Category::Horizontal);
        assert_eq!(category_of(&Module::Cubierta), Category::Horizontal);
        assert_eq!(
            category_of(&Module::Cajonera { drawers: 2 }),
            Category::Principal
        );
    }

    #[test]
    fn test_unknown_falls_back_to_principal() {
        assert_eq!(
            category_of(&Module::Other("banco".into())),
            Category::Principal
        );
    }
}
