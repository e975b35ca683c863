//! # Effective Width
//!
//! Slab width acting with an interior beam, [AISC I3.1a]. Computed once per
//! evaluation and passed explicitly to the connector, flexure and deflection
//! stages.

use serde::{Deserialize, Serialize};

use super::DesignInput;
use crate::derivation::DerivationTrail;
use crate::equations::composite::effective_width;
use crate::equations::Equation;
use crate::units::{Feet, Inches};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveWidthResult {
    /// One quarter of the span (in)
    pub quarter_span_in: f64,

    /// Beam spacing (in)
    pub spacing_in: f64,

    /// Governing effective width b_eff (in)
    pub b_eff_in: f64,

    pub derivation: DerivationTrail,
}

impl EffectiveWidthResult {
    /// Which limit governs
    pub fn governing_limit(&self) -> &'static str {
        if self.quarter_span_in <= self.spacing_in {
            "L/4"
        } else {
            "spacing"
        }
    }
}

pub fn compute_effective_width(input: &DesignInput) -> EffectiveWidthResult {
    let span: Inches = Feet(input.span_ft).into();
    let spacing: Inches = Feet(input.spacing_ft).into();
    let quarter_span = span.value() / 4.0;
    let b_eff = effective_width(span.value(), spacing.value());

    let mut derivation = DerivationTrail::new();
    derivation.push("L/4", format!("12 × {:.2} / 4 = {:.2} in", input.span_ft, quarter_span));
    derivation.push("s", format!("12 × {:.2} = {:.2} in", input.spacing_ft, spacing.value()));
    derivation.push_eq(
        "b_eff",
        Equation::EffectiveWidth,
        format!("min({:.2}, {:.2}) = {:.2} in", quarter_span, spacing.value(), b_eff),
    );

    EffectiveWidthResult {
        quarter_span_in: quarter_span,
        spacing_in: spacing.value(),
        b_eff_in: b_eff,
        derivation,
    }
}
