//! Gravity loads and load combinations
//!
//! Area loads (psf) are collected in a [`LoadCase`] and combined with a
//! [`LoadCombination`]; the load analysis stage then spreads the combined
//! area load over the beam's tributary width.
//!
//! # Example
//!
//! ```
//! use composite_core::loads::{lrfd_gravity, service, LoadCase, LoadType};
//!
//! let floor = LoadCase::new("Office floor")
//!     .with_load(LoadType::Dead, 57.0)
//!     .with_load(LoadType::Live, 100.0);
//!
//! assert!((lrfd_gravity().apply(&floor) - 228.4).abs() < 1e-9);
//! assert_eq!(service().apply(&floor), 157.0);
//! ```

pub mod load_types;
pub mod combinations;

pub use load_types::LoadType;
pub use combinations::{lrfd_gravity, service, LoadCombination};

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::errors::{CalcError, CalcResult};

/// Unfactored area loads by type for one loading scenario
///
/// # Example
/// ```
/// use composite_core::loads::{LoadCase, LoadType};
///
/// let case = LoadCase::new("Typical Floor").with_load(LoadType::Dead, 57.0);
///
/// assert_eq!(case.get(LoadType::Dead), 57.0);
/// assert_eq!(case.get(LoadType::Live), 0.0);  // Not specified, defaults to 0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    /// User-provided label for this load case
    pub label: String,

    /// Load values keyed by type (psf)
    pub loads: HashMap<LoadType, f64>,
}

impl LoadCase {
    /// Create a new empty load case with a label
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: HashMap::new(),
        }
    }

    /// Add or update a load value (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, value: f64) -> Self {
        self.loads.insert(load_type, value);
        self
    }

    /// Get the load value for a type, defaulting to 0.0 if not set
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Validate the load case
    ///
    /// Gravity loads must be finite and non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        for load_type in LoadType::ALL {
            let value = self.get(load_type);
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("load_{}", load_type.code()),
                    value.to_string(),
                    format!("{} cannot be negative", load_type.description()),
                ));
            }
        }
        Ok(())
    }
}

impl Default for LoadCase {
    fn default() -> Self {
        LoadCase::new("Unnamed")
    }
}
