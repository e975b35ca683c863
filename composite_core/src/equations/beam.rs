//! # Simply-Supported Beam Formulas
//!
//! Closed-form results for a simply-supported span under a full-length
//! uniform load, the only loading the composite beam check considers.
//!
//! ## Notation
//!
//! - `w` = Uniform load intensity (force per unit length)
//! - `L` = Span length
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//!
//! Units are whatever the caller passes, as long as they are consistent.
//! The pipeline uses klf with feet for demand (k-ft, kips) and kip/in with
//! inches for deflection.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 2a

/// Maximum moment at midspan, `M = wL²/8`
///
/// ```text
///    w w w w w w w w
///    ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓
///    ────────────────
///    △              △
///   R1 ←────L─────→ R2
/// ```
///
/// # Example
/// ```rust
/// use composite_core::equations::beam::uniform_load_max_moment;
///
/// // 2.284 klf over 30 ft
/// let m = uniform_load_max_moment(2.284, 30.0);
/// assert!((m - 256.95).abs() < 1e-9);
/// ```
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// End shear (equal to each reaction), `V = wL/2`
#[inline]
pub fn uniform_load_max_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Midspan deflection, `δ = 5wL⁴/(384EI)`
///
/// # Example
/// ```rust
/// use composite_core::equations::beam::uniform_load_max_deflection;
///
/// let d1 = uniform_load_max_deflection(0.1, 360.0, 29000.0, 1000.0);
/// let d2 = uniform_load_max_deflection(0.1, 720.0, 29000.0, 1000.0);
/// assert!((d2 / d1 - 16.0).abs() < 1e-9);
/// ```
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}
