//! ASCE 7-16 Load Combinations
//!
//! The composite beam check uses exactly two combinations: the LRFD gravity
//! combination for strength and the unfactored service combination for
//! deflection. No governing-case search is performed.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use super::load_types::LoadType;
use super::LoadCase;

/// A load combination with factors for each load type
///
/// # Example
/// ```
/// use composite_core::loads::{LoadCombination, LoadCase, LoadType};
///
/// let combo = LoadCombination::new("SERVICE", "D + L")
///     .with_factor(LoadType::Dead, 1.0)
///     .with_factor(LoadType::Live, 1.0);
///
/// let case = LoadCase::new("Floor")
///     .with_load(LoadType::Dead, 57.0)
///     .with_load(LoadType::Live, 100.0);
///
/// assert_eq!(combo.apply(&case), 157.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "LRFD-2")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.2D + 1.6L")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: HashMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a LoadCase, returning the combined load
    ///
    /// Terms are summed in [`LoadType::ALL`] order so the result does not
    /// depend on map iteration order.
    pub fn apply(&self, case: &LoadCase) -> f64 {
        LoadType::ALL
            .iter()
            .map(|load_type| self.get_factor(*load_type) * case.get(*load_type))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }
}

/// LRFD gravity combination, `1.2D + 1.6L` (ASCE 7-16 Section 2.3.2, Comb. 2)
///
/// # Example
/// ```
/// use composite_core::loads::{lrfd_gravity, LoadType};
///
/// let combo = lrfd_gravity();
/// assert_eq!(combo.get_factor(LoadType::Dead), 1.2);
/// assert_eq!(combo.get_factor(LoadType::Live), 1.6);
/// ```
pub fn lrfd_gravity() -> LoadCombination {
    LoadCombination::new("LRFD-2", "1.2D + 1.6L")
        .with_factor(LoadType::Dead, 1.2)
        .with_factor(LoadType::Live, 1.6)
}

/// Unfactored service combination, `D + L`
pub fn service() -> LoadCombination {
    LoadCombination::new("SERVICE", "D + L")
        .with_factor(LoadType::Dead, 1.0)
        .with_factor(LoadType::Live, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> LoadCase {
        LoadCase::new("Floor")
            .with_load(LoadType::Dead, 57.0)
            .with_load(LoadType::Live, 100.0)
    }

    #[test]
    fn test_lrfd_gravity() {
        let wu = lrfd_gravity().apply(&floor());
        assert!((wu - 228.4).abs() < 1e-9);
    }

    #[test]
    fn test_service() {
        assert!((service().apply(&floor()) - 157.0).abs() < 1e-12);
    }

    #[test]
    fn test_factored_not_less_than_service() {
        for (d, l) in [(0.0, 0.0), (57.0, 100.0), (10.0, 0.0), (0.0, 250.0)] {
            let case = LoadCase::new("c")
                .with_load(LoadType::Dead, d)
                .with_load(LoadType::Live, l);
            assert!(lrfd_gravity().apply(&case) >= service().apply(&case));
        }
    }

    #[test]
    fn test_missing_factor_is_zero() {
        let combo = LoadCombination::new("D", "D").with_factor(LoadType::Dead, 1.4);
        assert_eq!(combo.get_factor(LoadType::Live), 0.0);
        assert!((combo.apply(&floor()) - 79.8).abs() < 1e-9);
    }
}
