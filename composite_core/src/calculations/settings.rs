//! Design constants that a project may override.
//!
//! Defaults are the AISC 360-16 values; they live in the project's
//! `GlobalSettings` and are passed to
//! [`calculate_with`](super::composite_beam::calculate_with) explicitly.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::ES_KSI;

/// Tunable constants of the composite beam check.
///
/// Missing fields deserialize to their defaults, so older project files keep
/// loading when a constant is added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Steel modulus of elasticity Es (ksi)
    pub es_ksi: f64,

    /// Modular-ratio multiplier for long-term (creep) deflection
    pub long_term_multiplier: f64,

    /// Stud projection above the top of the deck, `Hs = hr + this` (in)
    pub stud_height_above_rib_in: f64,

    /// Deck rib pitch used to convert rib width to a fraction of the slab (in)
    pub rib_pitch_in: f64,

    /// Resistance factor for composite flexure
    pub phi_flexure: f64,

    /// Resistance factor for web shear yielding of rolled I-shapes
    pub phi_shear: f64,

    /// Short-term deflection limit is `L / this`
    pub short_term_limit_divisor: f64,

    /// Long-term deflection limit is `L / this`
    pub long_term_limit_divisor: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            es_ksi: ES_KSI,
            long_term_multiplier: 2.0,
            stud_height_above_rib_in: 2.0,
            rib_pitch_in: 12.0,
            phi_flexure: 0.90,
            phi_shear: 1.00,
            short_term_limit_divisor: 360.0,
            long_term_limit_divisor: 240.0,
        }
    }
}

impl DesignSettings {
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("es_ksi", self.es_ksi),
            ("long_term_multiplier", self.long_term_multiplier),
            ("stud_height_above_rib_in", self.stud_height_above_rib_in),
            ("rib_pitch_in", self.rib_pitch_in),
            ("short_term_limit_divisor", self.short_term_limit_divisor),
            ("long_term_limit_divisor", self.long_term_limit_divisor),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("settings.{}", field),
                    value.to_string(),
                    "Must be a positive number",
                ));
            }
        }

        for (field, value) in [("phi_flexure", self.phi_flexure), ("phi_shear", self.phi_shear)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(CalcError::invalid_input(
                    format!("settings.{}", field),
                    value.to_string(),
                    "Resistance factor must be in (0, 1]",
                ));
            }
        }

        Ok(())
    }
}
