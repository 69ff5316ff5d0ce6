//! Cooking units recognised after a quantity
//!
//! To add a new unit, add an enum variant and an entry to the UNITS array.
//! The ingredient parser picks it up automatically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories of units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitType {
    Volume,
    Weight,
    /// Loose measures and counted pieces: pinch, dash, clove, can...
    Descriptor,
}

/// Unit metadata - single source of truth for each unit
pub struct UnitDef {
    /// The unit enum variant
    pub unit: Unit,
    /// Unit category
    pub unit_type: UnitType,
    /// Short display name (e.g., "tbsp", "oz")
    pub short_name: &'static str,
    /// All accepted spellings for parsing (lowercase)
    pub aliases: &'static [&'static str],
}

/// Complete registry of all supported units.
pub static UNITS: &[UnitDef] = &[
    // Volume
    UnitDef {
        unit: Unit::Cup,
        unit_type: UnitType::Volume,
        short_name: "cup",
        aliases: &["cup", "cups"],
    },
    UnitDef {
        unit: Unit::Tablespoon,
        unit_type: UnitType::Volume,
        short_name: "tbsp",
        aliases: &["tablespoon", "tablespoons", "tbsp", "tbsps", "tbs"],
    },
    UnitDef {
        unit: Unit::Teaspoon,
        unit_type: UnitType::Volume,
        short_name: "tsp",
        aliases: &["teaspoon", "teaspoons", "tsp", "tsps"],
    },
    UnitDef {
        unit: Unit::FluidOunce,
        unit_type: UnitType::Volume,
        short_name: "fl-oz",
        aliases: &["fl-oz", "floz"],
    },
    UnitDef {
        unit: Unit::Pint,
        unit_type: UnitType::Volume,
        short_name: "pt",
        aliases: &["pint", "pints", "pt"],
    },
    UnitDef {
        unit: Unit::Quart,
        unit_type: UnitType::Volume,
        short_name: "qt",
        aliases: &["quart", "quarts", "qt"],
    },
    UnitDef {
        unit: Unit::Gallon,
        unit_type: UnitType::Volume,
        short_name: "gal",
        aliases: &["gallon", "gallons", "gal"],
    },
    UnitDef {
        unit: Unit::Milliliter,
        unit_type: UnitType::Volume,
        short_name: "ml",
        aliases: &[
            "milliliter",
            "milliliters",
            "millilitre",
            "millilitres",
            "ml",
        ],
    },
    UnitDef {
        unit: Unit::Liter,
        unit_type: UnitType::Volume,
        short_name: "l",
        aliases: &["liter", "liters", "litre", "litres", "l"],
    },
    // Weight
    UnitDef {
        unit: Unit::Gram,
        unit_type: UnitType::Weight,
        short_name: "g",
        aliases: &["gram", "grams", "g"],
    },
    UnitDef {
        unit: Unit::Kilogram,
        unit_type: UnitType::Weight,
        short_name: "kg",
        aliases: &["kilogram", "kilograms", "kg"],
    },
    UnitDef {
        unit: Unit::Milligram,
        unit_type: UnitType::Weight,
        short_name: "mg",
        aliases: &["milligram", "milligrams", "mg"],
    },
    UnitDef {
        unit: Unit::Ounce,
        unit_type: UnitType::Weight,
        short_name: "oz",
        aliases: &["ounce", "ounces", "oz"],
    },
    UnitDef {
        unit: Unit::Pound,
        unit_type: UnitType::Weight,
        short_name: "lb",
        aliases: &["pound", "pounds", "lb", "lbs"],
    },
    // Descriptors
    UnitDef {
        unit: Unit::Pinch,
        unit_type: UnitType::Descriptor,
        short_name: "pinch",
        aliases: &["pinch", "pinches"],
    },
    UnitDef {
        unit: Unit::Dash,
        unit_type: UnitType::Descriptor,
        short_name: "dash",
        aliases: &["dash", "dashes"],
    },
    UnitDef {
        unit: Unit::Handful,
        unit_type: UnitType::Descriptor,
        short_name: "handful",
        aliases: &["handful", "handfuls"],
    },
    UnitDef {
        unit: Unit::Clove,
        unit_type: UnitType::Descriptor,
        short_name: "clove",
        aliases: &["clove", "cloves"],
    },
    UnitDef {
        unit: Unit::Can,
        unit_type: UnitType::Descriptor,
        short_name: "can",
        aliases: &["can", "cans"],
    },
    UnitDef {
        unit: Unit::Slice,
        unit_type: UnitType::Descriptor,
        short_name: "slice",
        aliases: &["slice", "slices"],
    },
    UnitDef {
        unit: Unit::Stick,
        unit_type: UnitType::Descriptor,
        short_name: "stick",
        aliases: &["stick", "sticks"],
    },
    UnitDef {
        unit: Unit::Sprig,
        unit_type: UnitType::Descriptor,
        short_name: "sprig",
        aliases: &["sprig", "sprigs"],
    },
];

/// Supported units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    // Volume
    Cup,
    Tablespoon,
    Teaspoon,
    FluidOunce,
    Pint,
    Quart,
    Gallon,
    Milliliter,
    Liter,
    // Weight
    Gram,
    Kilogram,
    Milligram,
    Ounce,
    Pound,
    // Descriptors
    Pinch,
    Dash,
    Handful,
    Clove,
    Can,
    Slice,
    Stick,
    Sprig,
}

impl Unit {
    /// Get the unit definition
    pub fn def(&self) -> &'static UnitDef {
        &UNITS[self.registry_index()]
    }

    /// Position of this unit's entry in `UNITS`
    const fn registry_index(&self) -> usize {
        match self {
            Unit::Cup => 0,
            Unit::Tablespoon => 1,
            Unit::Teaspoon => 2,
            Unit::FluidOunce => 3,
            Unit::Pint => 4,
            Unit::Quart => 5,
            Unit::Gallon => 6,
            Unit::Milliliter => 7,
            Unit::Liter => 8,
            Unit::Gram => 9,
            Unit::Kilogram => 10,
            Unit::Milligram => 11,
            Unit::Ounce => 12,
            Unit::Pound => 13,
            Unit::Pinch => 14,
            Unit::Dash => 15,
            Unit::Handful => 16,
            Unit::Clove => 17,
            Unit::Can => 18,
            Unit::Slice => 19,
            Unit::Stick => 20,
            Unit::Sprig => 21,
        }
    }

    /// Get the unit type/category
    pub fn unit_type(&self) -> UnitType {
        self.def().unit_type
    }

    /// Get short display name
    pub fn short_name(&self) -> &'static str {
        self.def().short_name
    }

    /// Get all unit aliases
    pub fn all_aliases() -> impl Iterator<Item = &'static str> {
        UNITS.iter().flat_map(|d| d.aliases.iter().copied())
    }

    /// Parse unit from a single word, case-insensitively.
    /// One trailing period is ignored, so "Tbsp." is a tablespoon.
    pub fn parse(s: &str) -> Option<Unit> {
        let lower = normalize_word(s);
        if lower.is_empty() {
            return None;
        }
        UNITS
            .iter()
            .find(|d| d.aliases.iter().any(|a| *a == lower))
            .map(|d| d.unit)
    }

    /// Iterator over all units
    pub fn all() -> impl Iterator<Item = Unit> {
        UNITS.iter().map(|d| d.unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Lowercase a unit word and drop one trailing period
pub(crate) fn normalize_word(s: &str) -> String {
    let lower = s.to_lowercase();
    match lower.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}
