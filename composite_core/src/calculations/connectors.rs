//! # Connector Capacity
//!
//! Strength of one shear connector, the number of connectors between the
//! support and midspan, the horizontal shear needed for full composite
//! action, and the resulting percent composite.
//!
//! ## Assumptions
//!
//! - Studs project a fixed height above the deck ([`DesignSettings`])
//! - Deck reduction multiplies the concrete term before the `Asc·Fu` limit
//! - Rib concrete counts toward `Ac` only when ribs run parallel to the beam
//! - Connector count is truncated, never rounded up

use serde::{Deserialize, Serialize};

use super::{Connector, DeckOrientation, DesignInput, DesignSettings};
use crate::derivation::DerivationTrail;
use crate::equations::composite::{
    channel_nominal_strength, connectors_over_half_span,
    deck_reduction_factor, horizontal_shear_concrete, horizontal_shear_steel,
    percent_composite, perpendicular_deck_coefficient, stud_area, stud_concrete_strength,
    stud_nominal_strength, stud_rupture_strength, PARALLEL_DECK_COEFFICIENT,
};
use crate::equations::Equation;
use crate::errors::{nonzero, CalcResult};
use crate::materials::Concrete;
use crate::units::Kips;

const STAGE: &str = "Connector Capacity";

/// Intermediate values of the headed stud strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudStrength {
    /// Shank area Asc (in²)
    pub asc_in2: f64,
    /// Stud height Hs (in)
    pub stud_height_in: f64,
    /// Orientation coefficient k
    pub deck_coefficient: f64,
    /// Formed deck reduction factor R (≤ 1.0)
    pub reduction_factor: f64,
    /// Concrete-crushing term 0.5·Asc·√(f'c·Ec) (kips)
    pub concrete_strength_kips: f64,
    /// Steel-rupture term Asc·Fu (kips)
    pub rupture_strength_kips: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorResult {
    /// Concrete modulus Ec (ksi)
    pub ec_ksi: f64,

    /// Stud strength breakdown; `None` for channels
    pub stud: Option<StudStrength>,

    /// Nominal strength of one connector Qn (kips)
    pub unit_capacity_kips: f64,

    /// Connectors between support and midspan
    pub connector_count: u32,

    /// ΣQn over the half span (kips)
    pub total_capacity_kips: f64,

    /// Effective concrete area Ac (in²)
    pub concrete_area_in2: f64,

    /// Concrete limit 0.85·f'c·Ac (kips)
    pub concrete_limit_kips: f64,

    /// Steel limit As·Fy (kips)
    pub steel_limit_kips: f64,

    /// Horizontal shear for full composite action Vh (kips)
    pub required_shear_kips: f64,

    /// Percent composite action, 0 to 100
    pub percent_composite: f64,

    /// ΣQn ≥ Vh
    pub full_composite: bool,

    pub derivation: DerivationTrail,
}

/// Connector strength and composite action for a given effective width.
///
/// # Example
/// ```rust
/// use composite_core::calculations::connectors::connector_capacity;
/// use composite_core::calculations::{DesignInput, DesignSettings};
///
/// let input = DesignInput::typical_floor_beam();
/// let result = connector_capacity(&input, 90.0, &DesignSettings::default()).unwrap();
///
/// assert_eq!(result.connector_count, 15);
/// assert!((result.percent_composite - 62.27).abs() < 0.01);
/// ```
pub fn connector_capacity(
    input: &DesignInput,
    b_eff_in: f64,
    settings: &DesignSettings,
) -> CalcResult<ConnectorResult> {
    let fc = input.fc_ksi;
    let ec = Concrete::new(fc).modulus_ksi();
    let mut derivation = DerivationTrail::new();

    derivation.push_eq(
        "Ec",
        Equation::ConcreteModulus,
        format!("57000√({:.0} psi) / 1000 = {:.1} ksi", fc * 1000.0, ec),
    );

    let (qn, stud) = match &input.connector {
        Connector::Stud { diameter_in, fu_ksi, studs_per_rib } => {
            let hr = nonzero(STAGE, "rib_height_in", input.rib_height_in)?;
            let asc = stud_area(*diameter_in);
            let hs = hr + settings.stud_height_above_rib_in;
            let k = match input.deck_orientation {
                DeckOrientation::Perpendicular => perpendicular_deck_coefficient(*studs_per_rib),
                DeckOrientation::Parallel => PARALLEL_DECK_COEFFICIENT,
            };
            let r = deck_reduction_factor(k, input.rib_width_in, hr, hs);
            let concrete = stud_concrete_strength(asc, fc, ec);
            let rupture = stud_rupture_strength(asc, *fu_ksi);
            let qn = stud_nominal_strength(concrete, rupture, r);

            derivation.push_eq(
                "Asc",
                Equation::StudArea,
                format!("π × {:.3}² / 4 = {:.4} in²", diameter_in, asc),
            );
            derivation.push("Hs", format!("{:.2} + {:.2} = {:.2} in", hr, settings.stud_height_above_rib_in, hs));
            let k_text = match input.deck_orientation {
                DeckOrientation::Perpendicular => format!("0.85/√{} = {:.3}", studs_per_rib, k),
                DeckOrientation::Parallel => format!("{:.2} (parallel ribs)", k),
            };
            derivation.push("k", k_text);
            derivation.push_eq(
                "R",
                Equation::DeckReductionFactor,
                format!(
                    "min(1.0, {:.3} × ({:.2}/{:.2}) × ({:.2}/{:.2} − 1)) = {:.3}",
                    k, input.rib_width_in, hr, hs, hr, r
                ),
            );
            derivation.push_eq(
                "Qn",
                Equation::StudNominalStrength,
                format!(
                    "min({:.3} × 0.5 × {:.4} × √({:.1} × {:.1}), {:.4} × {:.1}) = min({:.2}, {:.2}) = {:.2} kips",
                    r, asc, fc, ec, asc, fu_ksi, r * concrete, rupture, qn
                ),
            );

            let stud = StudStrength {
                asc_in2: asc,
                stud_height_in: hs,
                deck_coefficient: k,
                reduction_factor: r,
                concrete_strength_kips: concrete,
                rupture_strength_kips: rupture,
            };
            (qn, Some(stud))
        }
        Connector::Channel { flange_thickness_in, web_thickness_in, length_in } => {
            let qn = channel_nominal_strength(*flange_thickness_in, *web_thickness_in, *length_in, fc, ec);
            derivation.push_eq(
                "Qn",
                Equation::ChannelNominalStrength,
                format!(
                    "0.3 × ({:.3} + 0.5 × {:.3}) × {:.2} × √({:.1} × {:.1}) = {:.2} kips",
                    flange_thickness_in, web_thickness_in, length_in, fc, ec, qn
                ),
            );
            (qn, None)
        }
    };

    let span_in = input.span_ft * 12.0;
    let count = connectors_over_half_span(span_in, input.connector_spacing_in);
    let total = (Kips(qn) * f64::from(count)).value();
    derivation.push_eq(
        "N",
        Equation::ConnectorCount,
        format!("floor(({:.2}/2) / {:.2}) = {}", span_in, input.connector_spacing_in, count),
    );
    derivation.push("ΣQn", format!("{} × {:.2} = {:.2} kips", count, qn, total));

    let tc = input.slab_thickness_in;
    let slab_area = b_eff_in * tc;
    let concrete_area = match input.deck_orientation {
        DeckOrientation::Perpendicular => {
            derivation.push("Ac", format!("{:.2} × {:.2} = {:.2} in² (ribs excluded)", b_eff_in, tc, slab_area));
            slab_area
        }
        DeckOrientation::Parallel => {
            let pitch = nonzero(STAGE, "rib_pitch_in", settings.rib_pitch_in)?;
            let rib_area = b_eff_in * (input.rib_width_in / pitch) * input.rib_height_in;
            derivation.push(
                "Ac",
                format!(
                    "{:.2} × {:.2} + {:.2} × ({:.2}/{:.0}) × {:.2} = {:.2} in²",
                    b_eff_in, tc, b_eff_in, input.rib_width_in, pitch, input.rib_height_in,
                    slab_area + rib_area
                ),
            );
            slab_area + rib_area
        }
    };

    let concrete_limit = horizontal_shear_concrete(fc, concrete_area);
    let steel_limit = horizontal_shear_steel(input.beam.area_in2, input.fy_ksi);
    let vh = concrete_limit.min(steel_limit);
    derivation.push_eq(
        "Vh",
        Equation::RequiredHorizontalShear,
        format!(
            "min(0.85 × {:.1} × {:.2}, {:.2} × {:.1}) = min({:.2}, {:.2}) = {:.2} kips",
            fc, concrete_area, input.beam.area_in2, input.fy_ksi, concrete_limit, steel_limit, vh
        ),
    );

    let percent = percent_composite(total, vh);
    derivation.push_eq(
        "%comp",
        Equation::PercentComposite,
        format!("min(100, {:.2} / {:.2} × 100) = {:.1} %", total, vh, percent),
    );

    Ok(ConnectorResult {
        ec_ksi: ec,
        stud,
        unit_capacity_kips: qn,
        connector_count: count,
        total_capacity_kips: total,
        concrete_area_in2: concrete_area,
        concrete_limit_kips: concrete_limit,
        steel_limit_kips: steel_limit,
        required_shear_kips: vh,
        percent_composite: percent,
        full_composite: total >= vh,
        derivation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::test_inputs::{channel_input, parallel_input};

    fn run(input: &DesignInput) -> ConnectorResult {
        connector_capacity(input, 90.0, &DesignSettings::default()).unwrap()
    }

    #[test]
    fn test_typical_stud_perpendicular() {
        let result = run(&DesignInput::typical_floor_beam());
        let stud = result.stud.unwrap();

        assert!((result.ec_ksi - 3122.0186).abs() < 1e-3);
        assert!((stud.asc_in2 - 0.441786).abs() < 1e-6);
        assert_eq!(stud.stud_height_in, 5.0);
        assert_eq!(stud.reduction_factor, 1.0);
        assert!((result.unit_capacity_kips - 21.37769).abs() < 1e-4);
        assert_eq!(result.connector_count, 15);
        assert!((result.total_capacity_kips - 320.6654).abs() < 1e-3);
        assert_eq!(result.concrete_area_in2, 225.0);
        assert!((result.concrete_limit_kips - 573.75).abs() < 1e-9);
        assert!((result.steel_limit_kips - 515.0).abs() < 1e-9);
        assert!((result.required_shear_kips - 515.0).abs() < 1e-9);
        assert!((result.percent_composite - 62.2651).abs() < 1e-3);
        assert!(!result.full_composite);
    }

    #[test]
    fn test_parallel_ribs_reduce_studs_and_add_rib_concrete() {
        let result = run(&parallel_input());
        let stud = result.stud.unwrap();

        assert!((stud.reduction_factor - 0.8).abs() < 1e-12);
        assert!((result.unit_capacity_kips - 17.10215).abs() < 1e-4);
        assert!((result.total_capacity_kips - 256.5323).abs() < 1e-3);
        assert!((result.concrete_area_in2 - 360.0).abs() < 1e-9);
        assert!((result.percent_composite - 49.8121).abs() < 1e-3);
    }

    #[test]
    fn test_channel_full_composite() {
        let result = run(&channel_input());
        assert!(result.stud.is_none());
        assert!((result.unit_capacity_kips - 45.98909).abs() < 1e-4);
        assert!((result.total_capacity_kips - 689.836).abs() < 1e-2);
        assert_eq!(result.percent_composite, 100.0);
        assert!(result.full_composite);
        assert!(result.derivation.get("R").is_none());
    }

    #[test]
    fn test_rupture_limit_governs_strong_concrete() {
        let mut input = DesignInput::typical_floor_beam();
        input.fc_ksi = 8.0;
        let result = run(&input);
        let stud = result.stud.unwrap();
        assert_eq!(result.unit_capacity_kips, stud.rupture_strength_kips);
    }

    #[test]
    fn test_two_studs_per_rib_reduce_capacity() {
        let mut input = DesignInput::typical_floor_beam();
        input.rib_width_in = 4.5;
        let one = run(&input).unit_capacity_kips;

        input.connector = Connector::Stud { diameter_in: 0.75, fu_ksi: 65.0, studs_per_rib: 2 };
        let two = run(&input);
        assert!(two.unit_capacity_kips < one);
        // 0.85/√2 × 1.5 × 2/3 = 0.601
        assert!((two.stud.unwrap().reduction_factor - 0.601041).abs() < 1e-6);
    }

    #[test]
    fn test_count_monotonic_in_spacing() {
        let mut input = DesignInput::typical_floor_beam();
        let mut previous = 0;
        for spacing in [36.0, 24.0, 16.0, 12.0, 8.0, 6.0] {
            input.connector_spacing_in = spacing;
            let n = run(&input).connector_count;
            assert!(n >= previous);
            previous = n;
        }
    }

    #[test]
    fn test_no_connectors_gives_zero_percent() {
        let mut input = DesignInput::typical_floor_beam();
        input.connector_spacing_in = 400.0;
        let result = run(&input);
        assert_eq!(result.connector_count, 0);
        assert_eq!(result.total_capacity_kips, 0.0);
        assert_eq!(result.percent_composite, 0.0);
    }

    #[test]
    fn test_deterministic() {
        let input = parallel_input();
        let a = run(&input);
        let b = run(&input);
        assert_eq!(a.total_capacity_kips.to_bits(), b.total_capacity_kips.to_bits());
        assert_eq!(a.percent_composite.to_bits(), b.percent_composite.to_bits());
        assert_eq!(a, b);
    }
}
