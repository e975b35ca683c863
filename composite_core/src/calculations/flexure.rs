//! # Flexural Strength
//!
//! Plastic stress distribution for a composite section with the plastic
//! neutral axis in the steel [AISC I3.2a]. The compression resultant
//! `C = min(ΣQn, Vh)` sits in a 0.85f'c stress block at the top of the slab;
//! the tension resultant acts at the steel centroid.
//!
//! When ribs run parallel to the beam and the block is deeper than the
//! topping, the block continues into the ribs as a T: the full topping
//! carries `0.85·f'c·b_eff·tc` and the rest is spread over the rib width
//! `b_eff·wr/pitch`.

use serde::{Deserialize, Serialize};

use super::{CheckStatus, ConnectorResult, DeckOrientation, DesignInput, DesignSettings, LoadResult};
use crate::derivation::DerivationTrail;
use crate::equations::Equation;
use crate::errors::{nonzero, CalcResult};
use crate::units::{KipFt, KipIn};

const STAGE: &str = "Flexural Strength";

/// Ratio reported when the design capacity is zero (no connectors)
pub const ZERO_CAPACITY_RATIO: f64 = 999.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressBlockShape {
    /// Block within the topping (or any perpendicular-rib block)
    Rectangular,
    /// Block extends into parallel ribs
    TShaped,
}

/// Location of the concrete compression resultant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressBlock {
    pub shape: StressBlockShape,
    /// Depth below the slab top, a (in)
    pub depth_in: f64,
    /// Centroid depth below the slab top, y_c (in)
    pub centroid_in: f64,
    /// Force carried by the topping (kips)
    pub slab_force_kips: f64,
    /// Force carried by rib concrete (kips)
    pub rib_force_kips: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// Compression resultant C = min(ΣQn, Vh) (kips)
    pub compression_kips: f64,

    pub block_shape: StressBlockShape,

    /// Stress block depth a (in)
    pub block_depth_in: f64,

    /// Compression centroid depth below slab top y_c (in)
    pub compression_centroid_in: f64,

    /// Lever arm Y between compression and tension resultants (in)
    pub lever_arm_in: f64,

    /// Effective width used (in)
    pub b_eff_in: f64,

    /// Design flexural strength φMn (k-ft)
    pub phi_mn_kipft: f64,

    /// M_u / φMn
    pub ratio: f64,

    pub status: CheckStatus,

    /// Block depth at full composite action, C = Vh (in)
    pub full_composite_block_depth_in: f64,

    /// φMn at full composite action (k-ft), reference only
    pub full_composite_phi_mn_kipft: f64,

    /// Plastic neutral axis height above the beam bottom (in)
    pub pna_height_in: f64,

    /// Bare steel φMp = φ·Fy·Zx (k-ft), reference only
    pub steel_phi_mp_kipft: f64,

    pub derivation: DerivationTrail,
}

/// Stress block carrying `compression_kips` in a slab of width `b_eff_in`.
///
/// # Example
/// ```rust
/// use composite_core::calculations::flexure::{stress_block, StressBlockShape};
/// use composite_core::calculations::{DesignInput, DesignSettings};
///
/// let input = DesignInput::typical_floor_beam();
/// let block = stress_block(229.5, &input, 90.0, &DesignSettings::default()).unwrap();
/// assert_eq!(block.shape, StressBlockShape::Rectangular);
/// assert!((block.depth_in - 1.0).abs() < 1e-12);
/// ```
pub fn stress_block(
    compression_kips: f64,
    input: &DesignInput,
    b_eff_in: f64,
    settings: &DesignSettings,
) -> CalcResult<StressBlock> {
    let fc = input.fc_ksi;
    let tc = input.slab_thickness_in;
    let slab_capacity = 0.85 * fc * b_eff_in * tc;

    let into_ribs = input.deck_orientation == DeckOrientation::Parallel && compression_kips > slab_capacity;
    if !into_ribs {
        let unit_force = nonzero(STAGE, "0.85·f'c·b_eff", 0.85 * fc * b_eff_in)?;
        let a = compression_kips / unit_force;
        return Ok(StressBlock {
            shape: StressBlockShape::Rectangular,
            depth_in: a,
            centroid_in: a / 2.0,
            slab_force_kips: compression_kips,
            rib_force_kips: 0.0,
        });
    }

    let pitch = nonzero(STAGE, "rib_pitch_in", settings.rib_pitch_in)?;
    let rib_width = b_eff_in * input.rib_width_in / pitch;
    let rib_unit_force = nonzero(STAGE, "0.85·f'c·b_rib", 0.85 * fc * rib_width)?;
    let rib_force = compression_kips - slab_capacity;
    let rib_depth = rib_force / rib_unit_force;
    let c = nonzero(STAGE, "C", compression_kips)?;
    let centroid = (slab_capacity * tc / 2.0 + rib_force * (tc + rib_depth / 2.0)) / c;

    Ok(StressBlock {
        shape: StressBlockShape::TShaped,
        depth_in: tc + rib_depth,
        centroid_in: centroid,
        slab_force_kips: slab_capacity,
        rib_force_kips: rib_force,
    })
}

/// Lever arm from the compression centroid to the steel centroid (in)
fn lever_arm(input: &DesignInput, centroid_in: f64) -> f64 {
    input.rib_height_in + input.slab_thickness_in + input.beam.depth_in / 2.0 - centroid_in
}

/// Design flexural strength and demand/capacity ratio.
pub fn check_flexure(
    input: &DesignInput,
    loads: &LoadResult,
    b_eff_in: f64,
    connectors: &ConnectorResult,
    settings: &DesignSettings,
) -> CalcResult<StrengthResult> {
    let phi = settings.phi_flexure;
    let c = connectors.total_capacity_kips.min(connectors.required_shear_kips);
    let block = stress_block(c, input, b_eff_in, settings)?;
    let y = lever_arm(input, block.centroid_in);
    let phi_mn = KipFt::from(KipIn(phi * c * y)).value();
    let m_u = loads.factored_moment_kipft;

    // No demand is never a failure, even with no capacity
    let ratio = if m_u == 0.0 {
        0.0
    } else if phi_mn > 0.0 {
        m_u / phi_mn
    } else {
        ZERO_CAPACITY_RATIO
    };
    let status = CheckStatus::strength(ratio);

    let full_block = stress_block(connectors.required_shear_kips, input, b_eff_in, settings)?;
    let full_lever_arm = lever_arm(input, full_block.centroid_in);
    let full_phi_mn = KipFt::from(KipIn(phi * connectors.required_shear_kips * full_lever_arm)).value();

    let total_height = input.beam.depth_in + input.rib_height_in + input.slab_thickness_in;
    let pna_height = total_height - block.depth_in;
    let steel_phi_mp = phi * input.fy_ksi * input.beam.zx_in3 / 12.0;

    let mut derivation = DerivationTrail::new();
    derivation.push(
        "C",
        format!(
            "min(ΣQn, Vh) = min({:.2}, {:.2}) = {:.2} kips",
            connectors.total_capacity_kips, connectors.required_shear_kips, c
        ),
    );
    match block.shape {
        StressBlockShape::Rectangular => {
            derivation.push_eq(
                "a",
                Equation::StressBlockDepth,
                format!("C / (0.85·f'c·b_eff) = {:.2} / (0.85 × {:.1} × {:.2}) = {:.3} in", c, input.fc_ksi, b_eff_in, block.depth_in),
            );
            derivation.push("y_c", format!("a/2 = {:.3} in", block.centroid_in));
        }
        StressBlockShape::TShaped => {
            derivation.push(
                "Cs",
                format!(
                    "0.85 × {:.1} × {:.2} × {:.2} = {:.2} kips",
                    input.fc_ksi, b_eff_in, input.slab_thickness_in, block.slab_force_kips
                ),
            );
            derivation.push("Cr", format!("{:.2} − {:.2} = {:.2} kips", c, block.slab_force_kips, block.rib_force_kips));
            derivation.push_eq(
                "a",
                Equation::StressBlockDepth,
                format!(
                    "tc + Cr / (0.85·f'c·b_eff·wr/{:.0}) = {:.2} + {:.3} = {:.3} in",
                    settings.rib_pitch_in,
                    input.slab_thickness_in,
                    block.depth_in - input.slab_thickness_in,
                    block.depth_in
                ),
            );
            derivation.push(
                "y_c",
                format!("(Cs·tc/2 + Cr·(tc + ar/2)) / C = {:.3} in", block.centroid_in),
            );
        }
    }
    derivation.push(
        "Y",
        format!(
            "({:.2} + {:.2} + {:.2}/2) − {:.3} = {:.3} in",
            input.rib_height_in, input.slab_thickness_in, input.beam.depth_in, block.centroid_in, y
        ),
    );
    derivation.push_eq(
        "φMn",
        Equation::CompositeFlexuralStrength,
        format!("{:.2} × {:.2} × {:.3} / 12 = {:.2} k-ft", phi, c, y, phi_mn),
    );
    derivation.push(
        "ratio",
        format!("M_u / φMn = {:.2} / {:.2} = {:.3} → {}", m_u, phi_mn, ratio, status),
    );
    derivation.push(
        "φMn_full",
        format!("C = Vh = {:.2} kips, a = {:.3} in → {:.2} k-ft", connectors.required_shear_kips, full_block.depth_in, full_phi_mn),
    );
    derivation.push("PNA", format!("{:.3} − {:.3} = {:.3} in above beam bottom", total_height, block.depth_in, pna_height));
    derivation.push_eq(
        "φMp",
        Equation::SteelPlasticMoment,
        format!("{:.2} × {:.1} × {:.2} / 12 = {:.2} k-ft", phi, input.fy_ksi, input.beam.zx_in3, steel_phi_mp),
    );

    Ok(StrengthResult {
        compression_kips: c,
        block_shape: block.shape,
        block_depth_in: block.depth_in,
        compression_centroid_in: block.centroid_in,
        lever_arm_in: y,
        b_eff_in,
        phi_mn_kipft: phi_mn,
        ratio,
        status,
        full_composite_block_depth_in: full_block.depth_in,
        full_composite_phi_mn_kipft: full_phi_mn,
        pna_height_in: pna_height,
        steel_phi_mp_kipft: steel_phi_mp,
        derivation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::connectors::connector_capacity;
    use crate::calculations::load_analysis::analyze_loads;
    use crate::calculations::test_inputs::{channel_input, parallel_input, t_block_input};
    use crate::errors::CalcError;

    fn run(input: &DesignInput) -> StrengthResult {
        let settings = DesignSettings::default();
        let loads = analyze_loads(input);
        let connectors = connector_capacity(input, 90.0, &settings).unwrap();
        check_flexure(input, &loads, 90.0, &connectors, &settings).unwrap()
    }

    #[test]
    fn test_typical_partial_composite() {
        let result = run(&DesignInput::typical_floor_beam());
        assert_eq!(result.block_shape, StressBlockShape::Rectangular);
        assert!((result.compression_kips - 320.665).abs() < 1e-3);
        assert!((result.block_depth_in - 1.39723).abs() < 1e-5);
        assert!((result.compression_centroid_in - 0.69862).abs() < 1e-5);
        assert!((result.lever_arm_in - 13.65138).abs() < 1e-5);
        assert!((result.phi_mn_kipft - 328.3144).abs() < 1e-3);
        assert!((result.ratio - 0.78263).abs() < 1e-5);
        assert_eq!(result.status, CheckStatus::Ok);

        assert!((result.full_composite_block_depth_in - 2.24401).abs() < 1e-5);
        assert!((result.full_composite_phi_mn_kipft - 510.9313).abs() < 1e-3);
        assert!((result.steel_phi_mp_kipft - 249.375).abs() < 1e-9);
        assert!((result.pna_height_in - (23.2 - 1.39723)).abs() < 1e-5);
    }

    #[test]
    fn test_parallel_ribs_block_stays_in_topping() {
        let result = run(&parallel_input());
        assert_eq!(result.block_shape, StressBlockShape::Rectangular);
        assert!((result.block_depth_in - 1.117788).abs() < 1e-5);
        assert!((result.phi_mn_kipft - 265.3398).abs() < 1e-3);
        assert!((result.ratio - 0.968381).abs() < 1e-5);
        assert_eq!(result.status, CheckStatus::Ok);
    }

    #[test]
    fn test_channel_full_composite_matches_reference() {
        let result = run(&channel_input());
        assert!((result.compression_kips - 515.0).abs() < 1e-9);
        assert!((result.phi_mn_kipft - 510.9313).abs() < 1e-3);
        assert!((result.phi_mn_kipft - result.full_composite_phi_mn_kipft).abs() < 1e-9);
        assert!((result.ratio - 0.502905).abs() < 1e-5);
    }

    #[test]
    fn test_t_shaped_block_into_parallel_ribs() {
        let result = run(&t_block_input());
        assert_eq!(result.block_shape, StressBlockShape::TShaped);
        assert!((result.compression_kips - 515.0).abs() < 1e-9);
        assert!((result.block_depth_in - 3.48802).abs() < 1e-5);
        assert!((result.compression_centroid_in - 1.466824).abs() < 1e-5);
        assert!((result.lever_arm_in - 11.383176).abs() < 1e-5);
        assert!((result.phi_mn_kipft - 439.67516).abs() < 1e-3);
        assert!(result.derivation.get("Cr").is_some());
    }

    #[test]
    fn test_perpendicular_block_never_t_shaped() {
        let mut input = t_block_input();
        input.deck_orientation = DeckOrientation::Perpendicular;
        let block = stress_block(515.0, &input, 90.0, &DesignSettings::default()).unwrap();
        assert_eq!(block.shape, StressBlockShape::Rectangular);
        assert!(block.depth_in > input.slab_thickness_in);
    }

    #[test]
    fn test_status_boundary() {
        assert_eq!(CheckStatus::strength(1.0), CheckStatus::Ok);
        assert_eq!(CheckStatus::strength(1.0 + 1e-12), CheckStatus::Fail);
    }

    #[test]
    fn test_overloaded_beam_fails() {
        let mut input = DesignInput::typical_floor_beam();
        input.live_load_psf = 250.0;
        let result = run(&input);
        assert!(result.ratio > 1.0);
        assert_eq!(result.status, CheckStatus::Fail);
    }

    #[test]
    fn test_zero_capacity_sentinel() {
        let mut input = DesignInput::typical_floor_beam();
        input.connector_spacing_in = 400.0;
        let result = run(&input);
        assert_eq!(result.phi_mn_kipft, 0.0);
        assert_eq!(result.ratio, ZERO_CAPACITY_RATIO);
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(serde_json::to_string(&result).is_ok());
    }

    #[test]
    fn test_zero_demand_with_zero_capacity_passes() {
        let mut input = DesignInput::typical_floor_beam();
        input.connector_spacing_in = 400.0;
        input.dead_load_psf = 0.0;
        input.live_load_psf = 0.0;
        let result = run(&input);
        assert_eq!(result.phi_mn_kipft, 0.0);
        assert!(result.ratio.abs() < 1e-12);
        assert_eq!(result.status, CheckStatus::Ok);
    }

    #[test]
    fn test_zero_effective_width_is_degenerate() {
        let input = DesignInput::typical_floor_beam();
        let settings = DesignSettings::default();
        let loads = analyze_loads(&input);
        let connectors = connector_capacity(&input, 90.0, &settings).unwrap();
        let err = check_flexure(&input, &loads, 0.0, &connectors, &settings).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_GEOMETRY");
        match err {
            CalcError::DegenerateGeometry { stage, quantity, .. } => {
                assert_eq!(stage, STAGE);
                assert_eq!(quantity, "0.85·f'c·b_eff");
            }
            other => panic!("expected DegenerateGeometry, got {:?}", other),
        }
    }
}
