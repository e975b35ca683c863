//! # Structural Calculations
//!
//! The composite beam check runs as a chain of stages, each a pure function
//! of the input, the design settings and the results of earlier stages:
//!
//! - [`load_analysis`] - Factored and service line loads, M_u and V_u
//! - [`effective_width`] - Slab width acting with the beam
//! - [`connectors`] - Shear connector strength and percent composite action
//! - [`flexure`] - Stress block, lever arm and φMn
//! - [`shear`] - Web shear yielding
//! - [`deflection`] - Transformed section, I_eff and deflection limits
//! - [`composite_beam`] - Runs every stage and collects the result
//!
//! Every type follows the `*Input` / `*Result` pattern and serializes to
//! clean JSON. Each result carries a [`DerivationTrail`](crate::derivation::DerivationTrail)
//! with the substituted formulas.

pub mod composite_beam;
pub mod connectors;
pub mod deflection;
pub mod effective_width;
pub mod flexure;
pub mod input;
pub mod load_analysis;
pub mod settings;
pub mod shear;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use composite_beam::{calculate, calculate_with, CompositeBeamResult};
pub use connectors::{connector_capacity, ConnectorResult, StudStrength};
pub use deflection::{check_deflection, DeflectionCase, DeflectionCheck, DeflectionResult, TransformedSection};
pub use effective_width::{compute_effective_width, EffectiveWidthResult};
pub use flexure::{check_flexure, StrengthResult, StressBlock, StressBlockShape};
pub use input::{parse_numeric, Connector, DeckOrientation, DesignInput};
pub use load_analysis::{analyze_loads, LoadResult};
pub use settings::DesignSettings;
pub use shear::{check_shear, ShearResult};

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    #[serde(rename = "OK")]
    Ok,
    /// Strength or short-term limit exceeded
    #[serde(rename = "FAIL")]
    Fail,
    /// Long-term limit exceeded; flagged for review
    #[serde(rename = "CHECK")]
    Check,
}

impl CheckStatus {
    /// `Ok` when `ratio ≤ 1.0`, otherwise `Fail`
    pub fn strength(ratio: f64) -> Self {
        if ratio <= 1.0 {
            CheckStatus::Ok
        } else {
            CheckStatus::Fail
        }
    }

    /// `Ok` when `ratio ≤ 1.0`, otherwise `Check`
    pub fn serviceability(ratio: f64) -> Self {
        if ratio <= 1.0 {
            CheckStatus::Ok
        } else {
            CheckStatus::Check
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Check => "CHECK",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enum wrapper for all calculation types.
///
/// This allows storing calculations in a project collection while keeping
/// clean tagged serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Simply-supported composite floor beam
    CompositeBeam(DesignInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::CompositeBeam(input) => &input.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::CompositeBeam(_) => "CompositeBeam",
        }
    }

    /// Run the calculation with the given settings
    pub fn run(&self, settings: &DesignSettings) -> crate::errors::CalcResult<CompositeBeamResult> {
        match self {
            CalculationItem::CompositeBeam(input) => calculate_with(input, settings),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(CheckStatus::strength(0.99), CheckStatus::Ok);
        assert_eq!(CheckStatus::strength(1.01), CheckStatus::Fail);
        assert_eq!(CheckStatus::serviceability(1.0), CheckStatus::Ok);
        assert_eq!(CheckStatus::serviceability(1.01), CheckStatus::Check);
        assert_eq!(CheckStatus::strength(f64::NAN), CheckStatus::Fail);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&CheckStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(serde_json::to_string(&CheckStatus::Check).unwrap(), "\"CHECK\"");
        assert_eq!(CheckStatus::Fail.to_string(), "FAIL");
    }

    #[test]
    fn test_calculation_item_tagged() {
        let item = CalculationItem::CompositeBeam(DesignInput::typical_floor_beam());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"CompositeBeam\""));
        assert_eq!(item.label(), "B-1");
        assert_eq!(item.calc_type(), "CompositeBeam");

        let back: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
