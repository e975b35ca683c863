//! Normal-weight concrete and the elastic moduli used by the transformed
//! section.

use serde::{Deserialize, Serialize};

use crate::equations::composite::concrete_modulus_ksi;

/// Modulus of elasticity of structural steel (ksi)
pub const ES_KSI: f64 = 29_000.0;

/// Normal-weight concrete defined by its specified compressive strength.
///
/// # Example
/// ```rust
/// use composite_core::materials::{Concrete, ES_KSI};
///
/// let slab = Concrete::new(3.0);
/// assert!((slab.modulus_ksi() - 3122.0).abs() < 0.1);
/// assert!((slab.modular_ratio(ES_KSI) - 9.289).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concrete {
    /// Specified compressive strength f'c (ksi)
    pub fc_ksi: f64,
}

impl Concrete {
    pub fn new(fc_ksi: f64) -> Self {
        Self { fc_ksi }
    }

    /// Ec per ACI 318 for normal-weight concrete (ksi)
    pub fn modulus_ksi(&self) -> f64 {
        concrete_modulus_ksi(self.fc_ksi)
    }

    /// Short-term modular ratio `n = Es/Ec`
    pub fn modular_ratio(&self, es_ksi: f64) -> f64 {
        es_ksi / self.modulus_ksi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_increases_with_strength() {
        let low = Concrete::new(3.0).modulus_ksi();
        let high = Concrete::new(5.0).modulus_ksi();
        assert!(high > low);
        assert!((high - 4030.5).abs() < 0.1);
    }
}
