//! # Unit Types
//!
//! Lightweight newtype wrappers for the unit conversions the composite beam
//! pipeline performs. Input and result records keep plain `f64` fields with
//! unit suffixes (`span_ft`, `b_eff_in`) so JSON stays flat; these wrappers are
//! used at the points where a value changes units.
//!
//! ## Units in use
//!
//! - Length: feet (ft), inches (in)
//! - Force: kips (k)
//! - Area load: pounds per square foot (psf)
//! - Line load: kips per linear foot (klf), kips per inch (k/in)
//! - Moment: kip-feet (k-ft), kip-inches (k-in)
//!
//! ## Example
//!
//! ```rust
//! use composite_core::units::{Feet, Inches, Psf, KlF};
//!
//! let span: Inches = Feet(30.0).into();
//! assert_eq!(span.0, 360.0);
//!
//! // 100 psf over a 10 ft tributary width
//! let w = KlF::from_area_load(Psf(100.0), Feet(10.0));
//! assert!((w.0 - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Loads
// ============================================================================

/// Area load in pounds per square foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

/// Line load in kips per linear foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KlF(pub f64);

/// Line load in kips per inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipPerIn(pub f64);

impl KlF {
    /// Convert an area load acting on a tributary width into a line load.
    ///
    /// psf × ft = plf, then / 1000 for klf.
    pub fn from_area_load(load: Psf, tributary: Feet) -> Self {
        KlF(load.0 * tributary.0 / 1000.0)
    }
}

impl From<KlF> for KipPerIn {
    fn from(klf: KlF) -> Self {
        KipPerIn(klf.0 / 12.0)
    }
}

/// Force in kips
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kip-feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipFt(pub f64);

/// Moment in kip-inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipIn(pub f64);

impl From<KipFt> for KipIn {
    fn from(kipft: KipFt) -> Self {
        KipIn(kipft.0 * 12.0)
    }
}

impl From<KipIn> for KipFt {
    fn from(kipin: KipIn) -> Self {
        KipFt(kipin.0 / 12.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Psf);
impl_arithmetic!(KlF);
impl_arithmetic!(KipPerIn);
impl_arithmetic!(Kips);
impl_arithmetic!(KipFt);
impl_arithmetic!(KipIn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let inches: Inches = Feet(10.0).into();
        assert_eq!(inches.0, 120.0);
        let back: Feet = inches.into();
        assert_eq!(back.0, 10.0);
    }

    #[test]
    fn test_area_load_to_line_load() {
        // 228.4 psf on 10 ft = 2.284 klf
        let w = KlF::from_area_load(Psf(228.4), Feet(10.0));
        assert!((w.0 - 2.284).abs() < 1e-12);

        let per_in: KipPerIn = w.into();
        assert!((per_in.0 - 2.284 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_moment_conversion() {
        let m: KipIn = KipFt(100.0).into();
        assert_eq!(m.0, 1200.0);
        let back: KipFt = m.into();
        assert_eq!(back.0, 100.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Feet(10.0);
        let b = Feet(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 4.0).value(), 2.5);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Psf(57.0)).unwrap();
        assert_eq!(json, "57.0");
        let roundtrip: Psf = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Psf(57.0));
    }
}
