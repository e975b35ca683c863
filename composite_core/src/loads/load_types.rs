//! Load type definitions per ASCE 7-16
//!
//! A composite floor beam carries only gravity loads, so only the dead and
//! live categories are modelled.

use serde::{Deserialize, Serialize};

/// Load types per ASCE 7-16 Section 2
///
/// # Example
/// ```
/// use composite_core::loads::LoadType;
///
/// let dead = LoadType::Dead;
/// assert_eq!(dead.code(), "D");
/// assert_eq!(dead.description(), "Dead load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Dead load (slab, deck, beam self-weight, superimposed dead)
    Dead,
    /// L - Live load (floor occupancy)
    Live,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 2] = [LoadType::Dead, LoadType::Live];

    /// Standard abbreviation code (D, L)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(LoadType::Live.code(), "L");
        assert_eq!(LoadType::Live.to_string(), "L");
        assert_eq!(LoadType::ALL.len(), 2);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadType::Dead).unwrap();
        assert_eq!(json, "\"Dead\"");
    }
}
