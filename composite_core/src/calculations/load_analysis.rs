//! # Load Analysis
//!
//! Converts the dead and live area loads into factored and service line
//! loads over the beam's tributary width, then into the simple-span moment
//! and shear demand.

use serde::{Deserialize, Serialize};

use super::DesignInput;
use crate::derivation::DerivationTrail;
use crate::equations::beam::{uniform_load_max_moment, uniform_load_max_shear};
use crate::equations::Equation;
use crate::loads::{lrfd_gravity, service};
use crate::units::{Feet, KlF, Psf};

/// Demand on the beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Factored line load w_u (klf)
    pub factored_line_load_klf: f64,

    /// Factored midspan moment M_u (k-ft)
    pub factored_moment_kipft: f64,

    /// Factored end shear V_u (kips)
    pub factored_shear_kips: f64,

    /// Service line load w_s (klf)
    pub service_line_load_klf: f64,

    /// Step-by-step substitutions
    pub derivation: DerivationTrail,
}

/// Factored and service loads and the resulting demand. No error conditions.
///
/// # Example
/// ```rust
/// use composite_core::calculations::{load_analysis::analyze_loads, DesignInput};
///
/// let loads = analyze_loads(&DesignInput::typical_floor_beam());
/// assert!((loads.factored_line_load_klf - 2.284).abs() < 1e-9);
/// assert!((loads.factored_moment_kipft - 256.95).abs() < 1e-9);
/// ```
pub fn analyze_loads(input: &DesignInput) -> LoadResult {
    let case = input.load_case();
    let strength = lrfd_gravity();
    let serviceability = service();
    let tributary = Feet(input.spacing_ft);
    let span = input.span_ft;

    let w_u = KlF::from_area_load(Psf(strength.apply(&case)), tributary).value();
    let w_s = KlF::from_area_load(Psf(serviceability.apply(&case)), tributary).value();
    let m_u = uniform_load_max_moment(w_u, span);
    let v_u = uniform_load_max_shear(w_u, span);

    let mut derivation = DerivationTrail::new();
    derivation.push_eq(
        "w_u",
        Equation::FactoredLineLoad,
        format!(
            "s({}) = {:.2} × (1.2 × {:.1} + 1.6 × {:.1}) / 1000 = {:.3} klf",
            strength.equation, input.spacing_ft, input.dead_load_psf, input.live_load_psf, w_u
        ),
    );
    derivation.push_eq(
        "w_s",
        Equation::ServiceLineLoad,
        format!(
            "s({}) = {:.2} × ({:.1} + {:.1}) / 1000 = {:.3} klf",
            serviceability.equation, input.spacing_ft, input.dead_load_psf, input.live_load_psf, w_s
        ),
    );
    derivation.push_eq(
        "M_u",
        Equation::UniformLoadMaxMoment,
        format!("w_u·L²/8 = {:.3} × {:.2}² / 8 = {:.2} k-ft", w_u, span, m_u),
    );
    derivation.push_eq(
        "V_u",
        Equation::UniformLoadMaxShear,
        format!("w_u·L/2 = {:.3} × {:.2} / 2 = {:.2} kips", w_u, span, v_u),
    );

    LoadResult {
        factored_line_load_klf: w_u,
        factored_moment_kipft: m_u,
        factored_shear_kips: v_u,
        service_line_load_klf: w_s,
        derivation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_floor_beam_demand() {
        let loads = analyze_loads(&DesignInput::typical_floor_beam());
        assert!((loads.factored_line_load_klf - 2.284).abs() < 1e-9);
        assert!((loads.service_line_load_klf - 1.57).abs() < 1e-9);
        assert!((loads.factored_moment_kipft - 256.95).abs() < 1e-9);
        assert!((loads.factored_shear_kips - 34.26).abs() < 1e-9);
        assert_eq!(
            loads.derivation.get("M_u"),
            Some("w_u·L²/8 = 2.284 × 30.00² / 8 = 256.95 k-ft")
        );
    }

    #[test]
    fn test_factored_at_least_service() {
        let mut input = DesignInput::typical_floor_beam();
        for (d, l) in [(0.0, 0.0), (40.0, 0.0), (0.0, 80.0), (120.0, 250.0)] {
            input.dead_load_psf = d;
            input.live_load_psf = l;
            let loads = analyze_loads(&input);
            assert!(loads.factored_line_load_klf >= loads.service_line_load_klf);
        }
    }

    #[test]
    fn test_moment_exact() {
        let mut input = DesignInput::typical_floor_beam();
        input.span_ft = 42.5;
        let loads = analyze_loads(&input);
        let w = loads.factored_line_load_klf;
        assert_eq!(loads.factored_moment_kipft, w * 42.5 * 42.5 / 8.0);
    }
}
