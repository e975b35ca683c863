//! # Composite Beam Provisions
//!
//! AISC 360-16 Chapter I (composite members) and Chapter G (shear) formulas,
//! plus the ACI 318 concrete modulus they rely on.
//!
//! ## Units
//!
//! US customary throughout: inches, kips, ksi. `f'c` is passed in ksi.
//!
//! ## References
//!
//! - AISC 360-16 Section I3.1a (effective width)
//! - AISC 360-16 Section I3.2d (horizontal shear transfer)
//! - AISC 360-16 Section I8.2a (steel headed stud anchors)
//! - AISC 360-16 Section I8.2b (steel channel anchors)
//! - AISC 360-16 Section G2.1 (web shear)
//! - ACI 318-14 Section 19.2.2.1 (Ec for normal-weight concrete)

use std::f64::consts::PI;

/// Coefficient of the normal-weight concrete modulus, `Ec = 57000√f'c` (psi)
pub const CONCRETE_MODULUS_COEFFICIENT: f64 = 57_000.0;

/// Deck coefficient for ribs perpendicular to the beam, one stud per rib
pub const PERPENDICULAR_DECK_COEFFICIENT: f64 = 0.85;

/// Deck coefficient for ribs parallel to the beam
pub const PARALLEL_DECK_COEFFICIENT: f64 = 0.6;

/// Effective slab width, `b_eff = min(L/4, s)` [AISC I3.1a]
///
/// Both arguments must already be in the same length unit.
///
/// # Example
/// ```rust
/// use composite_core::equations::composite::effective_width;
///
/// // 30 ft span, 10 ft spacing, in inches
/// assert_eq!(effective_width(360.0, 120.0), 90.0);
/// ```
#[inline]
pub fn effective_width(span: f64, spacing: f64) -> f64 {
    (span / 4.0).min(spacing)
}

/// Concrete modulus in ksi, `Ec = 57000·√(f'c·1000)/1000`
///
/// # Example
/// ```rust
/// use composite_core::equations::composite::concrete_modulus_ksi;
///
/// let ec = concrete_modulus_ksi(3.0);
/// assert!((ec - 3122.0).abs() < 0.1);
/// ```
#[inline]
pub fn concrete_modulus_ksi(fc_ksi: f64) -> f64 {
    CONCRETE_MODULUS_COEFFICIENT * (fc_ksi * 1000.0).sqrt() / 1000.0
}

/// Stud shank area, `Asc = π·d²/4`
#[inline]
pub fn stud_area(diameter: f64) -> f64 {
    PI * diameter * diameter / 4.0
}

/// Perpendicular-rib deck coefficient, `0.85/√Nr`
#[inline]
pub fn perpendicular_deck_coefficient(studs_per_rib: u32) -> f64 {
    PERPENDICULAR_DECK_COEFFICIENT / f64::from(studs_per_rib.max(1)).sqrt()
}

/// Formed-deck reduction factor, `min(1.0, k·(wr/hr)·(Hs/hr − 1))`
///
/// `k` is the orientation coefficient (see [`perpendicular_deck_coefficient`]
/// and [`PARALLEL_DECK_COEFFICIENT`]). Callers guarantee `hr > 0`.
#[inline]
pub fn deck_reduction_factor(coefficient: f64, rib_width: f64, rib_height: f64, stud_height: f64) -> f64 {
    let term = coefficient * (rib_width / rib_height) * (stud_height / rib_height - 1.0);
    term.min(1.0)
}

/// Concrete-crushing strength of one stud, `0.5·Asc·√(f'c·Ec)`
#[inline]
pub fn stud_concrete_strength(asc: f64, fc_ksi: f64, ec_ksi: f64) -> f64 {
    0.5 * asc * (fc_ksi * ec_ksi).sqrt()
}

/// Steel-rupture strength of one stud, `Asc·Fu`
#[inline]
pub fn stud_rupture_strength(asc: f64, fu_ksi: f64) -> f64 {
    asc * fu_ksi
}

/// Nominal stud strength, reduction applied to the concrete term before the
/// rupture limit: `Qn = min(R·0.5·Asc·√(f'c·Ec), Asc·Fu)` [AISC I8.2a]
#[inline]
pub fn stud_nominal_strength(concrete_strength: f64, rupture_strength: f64, reduction: f64) -> f64 {
    (reduction * concrete_strength).min(rupture_strength)
}

/// Nominal channel anchor strength, `Qn = 0.3·(tf + 0.5·tw)·La·√(f'c·Ec)` [AISC I8.2b]
#[inline]
pub fn channel_nominal_strength(flange_thickness: f64, web_thickness: f64, length: f64, fc_ksi: f64, ec_ksi: f64) -> f64 {
    0.3 * (flange_thickness + 0.5 * web_thickness) * length * (fc_ksi * ec_ksi).sqrt()
}

/// Connectors between the support and midspan, `floor((L/2)/s)`
///
/// Truncates, never rounds up. Lengths in the same unit.
///
/// # Example
/// ```rust
/// use composite_core::equations::composite::connectors_over_half_span;
///
/// assert_eq!(connectors_over_half_span(360.0, 12.0), 15);
/// assert_eq!(connectors_over_half_span(360.0, 13.0), 13); // 13.85 truncated
/// ```
#[inline]
pub fn connectors_over_half_span(span: f64, spacing: f64) -> u32 {
    let count = (span / 2.0 / spacing).floor();
    if count.is_finite() && count > 0.0 {
        count as u32
    } else {
        0
    }
}

/// Concrete limit on horizontal shear, `0.85·f'c·Ac` [AISC I3.2d]
#[inline]
pub fn horizontal_shear_concrete(fc_ksi: f64, concrete_area: f64) -> f64 {
    0.85 * fc_ksi * concrete_area
}

/// Steel limit on horizontal shear, `As·Fy` [AISC I3.2d]
#[inline]
pub fn horizontal_shear_steel(steel_area: f64, fy_ksi: f64) -> f64 {
    steel_area * fy_ksi
}

/// Percent composite action, `min(100, ΣQn/Vh·100)`, 0 when `Vh = 0`
///
/// # Example
/// ```rust
/// use composite_core::equations::composite::percent_composite;
///
/// assert_eq!(percent_composite(250.0, 500.0), 50.0);
/// assert_eq!(percent_composite(900.0, 500.0), 100.0);
/// assert_eq!(percent_composite(100.0, 0.0), 0.0);
/// ```
#[inline]
pub fn percent_composite(total_capacity: f64, required_shear: f64) -> f64 {
    if required_shear <= 0.0 {
        return 0.0;
    }
    (total_capacity / required_shear * 100.0).clamp(0.0, 100.0)
}

/// Partial-composite effective inertia, `I_eff = Is + √(pct/100)·(Itr − Is)`
#[inline]
pub fn effective_moment_of_inertia(steel_inertia: f64, transformed_inertia: f64, percent: f64) -> f64 {
    steel_inertia + (percent / 100.0).sqrt() * (transformed_inertia - steel_inertia)
}

/// Nominal web shear strength, `Vn = 0.6·Fy·Aw·Cv1` [AISC Eq. G2-1]
#[inline]
pub fn web_shear_nominal(fy_ksi: f64, web_area: f64, cv1: f64) -> f64 {
    0.6 * fy_ksi * web_area * cv1
}

/// Web slenderness limit for `Cv1 = 1.0` in rolled I-shapes, `2.24·√(E/Fy)` [AISC G2.1(a)]
#[inline]
pub fn compact_web_limit(es_ksi: f64, fy_ksi: f64) -> f64 {
    2.24 * (es_ksi / fy_ksi).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_width_binding_term() {
        assert_eq!(effective_width(360.0, 120.0), 90.0);
        assert_eq!(effective_width(720.0, 120.0), 120.0);
        // Equality on the binding term
        assert_eq!(effective_width(480.0, 120.0), 120.0);
    }

    #[test]
    fn test_stud_strength_components() {
        let asc = stud_area(0.75);
        assert!((asc - 0.441786).abs() < 1e-6);

        let ec = concrete_modulus_ksi(3.0);
        let concrete = stud_concrete_strength(asc, 3.0, ec);
        let rupture = stud_rupture_strength(asc, 65.0);
        assert!((concrete - 21.3777).abs() < 1e-3);
        assert!((rupture - 28.7161).abs() < 1e-3);

        // Full reduction: concrete governs
        assert!((stud_nominal_strength(concrete, rupture, 1.0) - concrete).abs() < 1e-12);
        // Rupture caps a strong concrete term
        assert_eq!(stud_nominal_strength(40.0, rupture, 1.0), rupture);
        // Reduction applied before the rupture limit
        assert!((stud_nominal_strength(concrete, rupture, 0.8) - 0.8 * concrete).abs() < 1e-12);
    }

    #[test]
    fn test_deck_reduction_capped() {
        // wr/hr = 2, Hs/hr - 1 = 2/3: 0.85 * 2 * 0.667 = 1.133 -> 1.0
        let r = deck_reduction_factor(perpendicular_deck_coefficient(1), 6.0, 3.0, 5.0);
        assert_eq!(r, 1.0);
        // Parallel: 0.6 * 2 * 0.667 = 0.8
        let r = deck_reduction_factor(PARALLEL_DECK_COEFFICIENT, 6.0, 3.0, 5.0);
        assert!((r - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_two_studs_per_rib_coefficient() {
        let k = perpendicular_deck_coefficient(2);
        assert!((k - 0.85 / 2f64.sqrt()).abs() < 1e-12);
        // Zero studs per rib is treated as one
        assert_eq!(perpendicular_deck_coefficient(0), PERPENDICULAR_DECK_COEFFICIENT);
    }

    #[test]
    fn test_channel_strength() {
        let ec = concrete_modulus_ksi(3.0);
        let qn = channel_nominal_strength(0.296, 0.2, 4.0, 3.0, ec);
        assert!((qn - 45.989).abs() < 1e-3);
    }

    #[test]
    fn test_connector_count_monotonic() {
        let span = 360.0;
        let mut previous = 0;
        for spacing in [24.0, 18.0, 12.0, 9.0, 6.0, 4.0] {
            let n = connectors_over_half_span(span, spacing);
            assert!(n >= previous);
            previous = n;
        }
        // Spacing longer than the half span gives no connectors
        assert_eq!(connectors_over_half_span(360.0, 200.0), 0);
    }

    #[test]
    fn test_percent_composite_bounds() {
        for (q, vh) in [(0.0, 500.0), (320.0, 515.0), (1000.0, 515.0), (10.0, 0.0)] {
            let pct = percent_composite(q, vh);
            assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn test_effective_inertia_endpoints() {
        assert_eq!(effective_moment_of_inertia(510.0, 1762.8, 0.0), 510.0);
        assert_eq!(effective_moment_of_inertia(510.0, 1762.8, 100.0), 1762.8);
        let half = effective_moment_of_inertia(510.0, 1510.0, 25.0);
        assert!((half - 1010.0).abs() < 1e-9);
    }

    #[test]
    fn test_web_shear() {
        // W18X35: 0.6 * 50 * 17.7 * 0.3 = 159.3
        assert!((web_shear_nominal(50.0, 17.7 * 0.3, 1.0) - 159.3).abs() < 1e-9);
        assert!((compact_web_limit(29000.0, 50.0) - 53.946).abs() < 1e-3);
    }
}
