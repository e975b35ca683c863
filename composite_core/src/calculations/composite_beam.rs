//! # Composite Beam Check
//!
//! Runs every stage for one simply-supported composite floor beam: loads,
//! effective width, connectors, flexure, shear and deflection. Each stage
//! reads only the input, the settings and earlier results, so the same input
//! always produces bit-identical output.
//!
//! ## Example
//!
//! ```rust
//! use composite_core::calculations::{calculate, CheckStatus, DesignInput};
//!
//! let result = calculate(&DesignInput::typical_floor_beam()).unwrap();
//!
//! assert_eq!(result.connectors.connector_count, 15);
//! assert!((result.flexure.phi_mn_kipft - 328.31).abs() < 0.01);
//! assert_eq!(result.flexure.status, CheckStatus::Ok);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use super::{
    analyze_loads, check_deflection, check_flexure, check_shear, compute_effective_width, connector_capacity,
    CheckStatus, ConnectorResult, DeflectionResult, DesignInput, DesignSettings, EffectiveWidthResult, LoadResult,
    ShearResult, StrengthResult,
};
use crate::derivation::DerivationTrail;
use crate::errors::CalcResult;

/// Every stage result for one beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeBeamResult {
    /// Beam label from the input
    pub label: String,
    /// Steel section designation
    pub beam_label: String,
    pub loads: LoadResult,
    pub effective_width: EffectiveWidthResult,
    pub connectors: ConnectorResult,
    pub flexure: StrengthResult,
    pub shear: ShearResult,
    pub deflection: DeflectionResult,
}

impl CompositeBeamResult {
    /// Whether the strength and short-term checks all pass.
    ///
    /// A long-term `CHECK` does not fail the beam.
    pub fn passes(&self) -> bool {
        self.flexure.status != CheckStatus::Fail
            && self.shear.status != CheckStatus::Fail
            && self.deflection.short_term.status != CheckStatus::Fail
    }

    /// The check with the highest ratio, as `(name, ratio, status)`
    pub fn governing_check(&self) -> (&'static str, f64, CheckStatus) {
        self.checks()
            .into_iter()
            .fold(("Flexure", f64::NEG_INFINITY, CheckStatus::Ok), |best, check| {
                if check.1 > best.1 {
                    check
                } else {
                    best
                }
            })
    }

    fn checks(&self) -> [(&'static str, f64, CheckStatus); 4] {
        [
            ("Flexure", self.flexure.ratio, self.flexure.status),
            ("Shear", self.shear.ratio, self.shear.status),
            ("Deflection (short term)", self.deflection.short_term.ratio, self.deflection.short_term.status),
            ("Deflection (long term)", self.deflection.long_term.ratio, self.deflection.long_term.status),
        ]
    }

    /// Stage derivations in evaluation order
    pub fn derivations(&self) -> impl Iterator<Item = (&'static str, &DerivationTrail)> {
        [
            ("Loads", &self.loads.derivation),
            ("Effective Width", &self.effective_width.derivation),
            ("Shear Connectors", &self.connectors.derivation),
            ("Flexural Strength", &self.flexure.derivation),
            ("Shear Strength", &self.shear.derivation),
            ("Deflection", &self.deflection.derivation),
        ]
        .into_iter()
    }

    /// One line per check, suitable for a terminal report
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{}: {}", self.label, self.beam_label),
            format!(
                "  Loads: w_u = {:.3} klf, M_u = {:.2} k-ft, V_u = {:.2} kips",
                self.loads.factored_line_load_klf, self.loads.factored_moment_kipft, self.loads.factored_shear_kips
            ),
            format!(
                "  b_eff = {:.2} in ({}), N = {}, ΣQn = {:.2} kips, {:.1}% composite",
                self.effective_width.b_eff_in,
                self.effective_width.governing_limit(),
                self.connectors.connector_count,
                self.connectors.total_capacity_kips,
                self.connectors.percent_composite
            ),
        ];
        for (name, ratio, status) in self.checks() {
            lines.push(format!("  {:<24} ratio {:>7.3}  {}", name, ratio, status));
        }
        let (name, ratio, _) = self.governing_check();
        lines.push(format!(
            "  Governing: {} ({:.3}) → {}",
            name,
            ratio,
            if self.passes() { "PASS" } else { "FAIL" }
        ));
        lines
    }
}

/// Run the full check with the default AISC 360-16 settings.
pub fn calculate(input: &DesignInput) -> CalcResult<CompositeBeamResult> {
    calculate_with(input, &DesignSettings::default())
}

/// Run the full check with explicit settings.
///
/// The input and settings are validated before any stage runs.
pub fn calculate_with(input: &DesignInput, settings: &DesignSettings) -> CalcResult<CompositeBeamResult> {
    input.validate()?;
    settings.validate()?;

    let loads = analyze_loads(input);
    let effective_width = compute_effective_width(input);
    let b_eff = effective_width.b_eff_in;
    let connectors = connector_capacity(input, b_eff, settings)?;
    let flexure = check_flexure(input, &loads, b_eff, &connectors, settings)?;
    let shear = check_shear(input, &loads, settings)?;
    let deflection = check_deflection(input, &loads, b_eff, &connectors, settings)?;

    tracing::debug!(
        label = %input.label,
        beam = %input.beam.label,
        percent_composite = connectors.percent_composite,
        flexure_ratio = flexure.ratio,
        shear_ratio = shear.ratio,
        deflection_ratio = deflection.short_term.ratio,
        "composite beam evaluated"
    );

    Ok(CompositeBeamResult {
        label: input.label.clone(),
        beam_label: input.beam.label.clone(),
        loads,
        effective_width,
        connectors,
        flexure,
        shear,
        deflection,
    })
}
