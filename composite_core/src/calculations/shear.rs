//! # Shear Strength
//!
//! Web shear yielding of the steel beam alone [AISC G2.1]. The slab is
//! ignored for shear. Rolled I-shapes with `h/tw ≤ 2.24√(E/Fy)` take
//! `Cv1 = 1.0` and `φv = 1.0`; the slenderness is reported so the
//! assumption can be checked, but it does not change the capacity.

use serde::{Deserialize, Serialize};

use super::{CheckStatus, DesignInput, DesignSettings, LoadResult};
use crate::derivation::DerivationTrail;
use crate::equations::composite::{compact_web_limit, web_shear_nominal};
use crate::equations::Equation;
use crate::errors::{nonzero, CalcResult};

const STAGE: &str = "Shear Strength";

/// Web shear strength coefficient
pub const CV1: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearResult {
    /// Web area Aw = d·tw (in²)
    pub web_area_in2: f64,

    /// Nominal shear strength Vn (kips)
    pub vn_kips: f64,

    /// Design shear strength φVn (kips)
    pub phi_vn_kips: f64,

    /// V_u / φVn
    pub ratio: f64,

    pub status: CheckStatus,

    /// Web slenderness h/tw: the tabulated value, else h = d − 2tf
    pub web_slenderness: f64,

    /// 2.24√(E/Fy)
    pub compact_web_limit: f64,

    /// Whether the Cv1 = 1.0, φv = 1.0 assumption holds
    pub web_compact: bool,

    pub derivation: DerivationTrail,
}

pub fn check_shear(input: &DesignInput, loads: &LoadResult, settings: &DesignSettings) -> CalcResult<ShearResult> {
    let beam = &input.beam;
    let aw = beam.web_area();
    let vn = web_shear_nominal(input.fy_ksi, aw, CV1);
    let phi_vn = settings.phi_shear * vn;
    let v_u = loads.factored_shear_kips;
    let ratio = v_u / nonzero(STAGE, "φVn", phi_vn)?;
    let status = CheckStatus::strength(ratio);

    nonzero(STAGE, "tw", beam.tw_in)?;
    let slenderness = beam.web_slenderness();
    let limit = compact_web_limit(settings.es_ksi, input.fy_ksi);
    let compact = slenderness <= limit;
    if !compact {
        tracing::warn!(
            beam = %beam.label,
            h_tw = slenderness,
            limit,
            "web exceeds the Cv1 = 1.0 slenderness limit"
        );
    }

    let mut derivation = DerivationTrail::new();
    derivation.push("Aw", format!("{:.2} × {:.3} = {:.3} in²", beam.depth_in, beam.tw_in, aw));
    derivation.push_eq(
        "φVn",
        Equation::WebShearStrength,
        format!(
            "{:.2} × 0.6 × {:.1} × {:.3} × {:.1} = {:.2} kips",
            settings.phi_shear, input.fy_ksi, aw, CV1, phi_vn
        ),
    );
    derivation.push(
        "ratio",
        format!("V_u / φVn = {:.2} / {:.2} = {:.3} → {}", v_u, phi_vn, ratio, status),
    );
    let source = match beam.h_tw {
        Some(_) => "tabulated".to_string(),
        None => format!("({:.2} − 2 × {:.3}) / {:.3}", beam.depth_in, beam.tf_in, beam.tw_in),
    };
    derivation.push(
        "h/tw",
        format!(
            "{} = {:.2} {} 2.24√({:.0}/{:.1}) = {:.2}",
            source,
            slenderness,
            if compact { "≤" } else { ">" },
            settings.es_ksi,
            input.fy_ksi,
            limit
        ),
    );

    Ok(ShearResult {
        web_area_in2: aw,
        vn_kips: vn,
        phi_vn_kips: phi_vn,
        ratio,
        status,
        web_slenderness: slenderness,
        compact_web_limit: limit,
        web_compact: compact,
        derivation,
    })
}
