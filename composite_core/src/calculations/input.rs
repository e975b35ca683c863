//! # Design Input
//!
//! The immutable record every stage reads. It is fully populated (section
//! properties included) before the engine runs; [`DesignInput::validate`]
//! rejects anything non-positive with a structured error.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "B-1",
//!   "span_ft": 30.0,
//!   "spacing_ft": 10.0,
//!   "slab_thickness_in": 2.5,
//!   "fc_ksi": 3.0,
//!   "fy_ksi": 50.0,
//!   "rib_width_in": 6.0,
//!   "rib_height_in": 3.0,
//!   "dead_load_psf": 57.0,
//!   "live_load_psf": 100.0,
//!   "deck_orientation": "Perpendicular",
//!   "connector_spacing_in": 12.0,
//!   "connector": { "type": "Stud", "diameter_in": 0.75, "fu_ksi": 65.0, "studs_per_rib": 1 },
//!   "beam": {
//!     "label": "W18X35", "area_in2": 10.3, "depth_in": 17.7, "tw_in": 0.3,
//!     "bf_in": 6.0, "tf_in": 0.425, "ix_in4": 510.0, "zx_in3": 66.5, "h_tw": 53.5
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadCase, LoadType};
use crate::materials::SteelShape;

/// Direction of the deck ribs relative to the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeckOrientation {
    /// Ribs cross the beam; rib concrete does not act compositely
    #[default]
    Perpendicular,
    /// Ribs run along the beam; rib concrete is part of the slab
    Parallel,
}

impl DeckOrientation {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeckOrientation::Perpendicular => "perpendicular",
            DeckOrientation::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for DeckOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn one_stud() -> u32 {
    1
}

/// Shear connector family with exactly the properties of its type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Connector {
    /// Steel headed stud anchor [AISC I8.2a]
    Stud {
        /// Shank diameter (in)
        diameter_in: f64,
        /// Specified tensile strength Fu (ksi)
        fu_ksi: f64,
        /// Studs in one deck rib (perpendicular ribs)
        #[serde(default = "one_stud")]
        studs_per_rib: u32,
    },
    /// Hot-rolled channel anchor [AISC I8.2b]
    Channel {
        /// Channel flange thickness (in)
        flange_thickness_in: f64,
        /// Channel web thickness (in)
        web_thickness_in: f64,
        /// Channel length (in)
        length_in: f64,
    },
}

impl Connector {
    /// 3/4 in stud with Fu = 65 ksi, one per rib
    pub fn standard_stud() -> Self {
        Connector::Stud {
            diameter_in: 0.75,
            fu_ksi: 65.0,
            studs_per_rib: 1,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Connector::Stud { .. } => "Stud",
            Connector::Channel { .. } => "Channel",
        }
    }

    fn validate(&self) -> CalcResult<()> {
        match self {
            Connector::Stud { diameter_in, fu_ksi, studs_per_rib } => {
                require_positive("connector.diameter_in", *diameter_in)?;
                require_positive("connector.fu_ksi", *fu_ksi)?;
                if *studs_per_rib == 0 {
                    return Err(CalcError::invalid_input(
                        "connector.studs_per_rib",
                        "0",
                        "At least one stud per rib is required",
                    ));
                }
            }
            Connector::Channel { flange_thickness_in, web_thickness_in, length_in } => {
                require_positive("connector.flange_thickness_in", *flange_thickness_in)?;
                require_positive("connector.web_thickness_in", *web_thickness_in)?;
                require_positive("connector.length_in", *length_in)?;
            }
        }
        Ok(())
    }
}

/// Input parameters for one composite beam.
///
/// US customary units throughout; each field name carries its unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// User label for this beam (e.g., "B-1")
    pub label: String,

    /// Simply-supported span (ft)
    pub span_ft: f64,

    /// Center-to-center beam spacing (ft)
    pub spacing_ft: f64,

    /// Concrete thickness above the deck ribs, tc (in)
    pub slab_thickness_in: f64,

    /// Concrete compressive strength f'c (ksi)
    pub fc_ksi: f64,

    /// Steel yield strength Fy (ksi)
    pub fy_ksi: f64,

    /// Average deck rib width wr (in)
    pub rib_width_in: f64,

    /// Deck rib height hr (in)
    pub rib_height_in: f64,

    /// Superimposed plus self dead load (psf)
    pub dead_load_psf: f64,

    /// Floor live load (psf)
    pub live_load_psf: f64,

    /// Rib direction relative to the beam
    pub deck_orientation: DeckOrientation,

    /// Connector spacing along the beam (in)
    pub connector_spacing_in: f64,

    /// Connector family and properties
    pub connector: Connector,

    /// Steel section properties
    pub beam: SteelShape,
}

impl DesignInput {
    /// Typical office floor: 30 ft W18X35 at 10 ft, 3 in deck with 2.5 in
    /// topping, 3/4 in studs at 12 in.
    ///
    /// # Example
    /// ```rust
    /// use composite_core::calculations::DesignInput;
    ///
    /// let input = DesignInput::typical_floor_beam();
    /// assert!(input.validate().is_ok());
    /// assert_eq!(input.beam.label, "W18X35");
    /// ```
    pub fn typical_floor_beam() -> Self {
        DesignInput {
            label: "B-1".to_string(),
            span_ft: 30.0,
            spacing_ft: 10.0,
            slab_thickness_in: 2.5,
            fc_ksi: 3.0,
            fy_ksi: 50.0,
            rib_width_in: 6.0,
            rib_height_in: 3.0,
            dead_load_psf: 57.0,
            live_load_psf: 100.0,
            deck_orientation: DeckOrientation::Perpendicular,
            connector_spacing_in: 12.0,
            connector: Connector::standard_stud(),
            beam: SteelShape::w18x35(),
        }
    }

    /// Same input with another steel section
    pub fn with_section(mut self, beam: SteelShape) -> Self {
        self.beam = beam;
        self
    }

    /// Dead and live area loads as a load case
    pub fn load_case(&self) -> LoadCase {
        LoadCase::new(self.label.clone())
            .with_load(LoadType::Dead, self.dead_load_psf)
            .with_load(LoadType::Live, self.live_load_psf)
    }

    /// Validate input parameters.
    ///
    /// Geometry and materials must be finite and strictly positive, loads
    /// finite and non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_ft", self.span_ft)?;
        require_positive("spacing_ft", self.spacing_ft)?;
        require_positive("slab_thickness_in", self.slab_thickness_in)?;
        require_positive("fc_ksi", self.fc_ksi)?;
        require_positive("fy_ksi", self.fy_ksi)?;
        require_positive("rib_width_in", self.rib_width_in)?;
        require_positive("rib_height_in", self.rib_height_in)?;
        require_positive("connector_spacing_in", self.connector_spacing_in)?;

        self.load_case().validate()?;
        self.connector.validate()?;

        let beam = &self.beam;
        if beam.label.trim().is_empty() {
            return Err(CalcError::missing_field("beam.label"));
        }
        require_positive("beam.area_in2", beam.area_in2)?;
        require_positive("beam.depth_in", beam.depth_in)?;
        require_positive("beam.tw_in", beam.tw_in)?;
        require_positive("beam.bf_in", beam.bf_in)?;
        require_positive("beam.tf_in", beam.tf_in)?;
        require_positive("beam.ix_in4", beam.ix_in4)?;
        require_positive("beam.zx_in3", beam.zx_in3)?;
        if let Some(h_tw) = beam.h_tw {
            require_positive("beam.h_tw", h_tw)?;
        }

        if beam.web_height() <= 0.0 {
            return Err(CalcError::invalid_input(
                "beam.tf_in",
                beam.tf_in.to_string(),
                "Flanges are thicker than half the section depth",
            ));
        }

        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a positive number",
        ));
    }
    Ok(())
}

/// Parse a form field as a number, before any calculation runs.
///
/// # Example
/// ```rust
/// use composite_core::calculations::parse_numeric;
///
/// assert_eq!(parse_numeric("span_ft", " 30 ").unwrap(), 30.0);
/// let err = parse_numeric("span_ft", "thirty").unwrap_err();
/// assert_eq!(err.error_code(), "INVALID_NUMBER");
/// ```
pub fn parse_numeric(field: &str, text: &str) -> CalcResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::invalid_number(field, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_floor_beam_valid() {
        assert!(DesignInput::typical_floor_beam().validate().is_ok());
    }

    #[test]
    fn test_non_positive_geometry_rejected() {
        let mut input = DesignInput::typical_floor_beam();
        input.rib_height_in = 0.0;
        match input.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "rib_height_in"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        let mut input = DesignInput::typical_floor_beam();
        input.connector_spacing_in = -12.0;
        assert!(input.validate().is_err());

        let mut input = DesignInput::typical_floor_beam();
        input.fc_ksi = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_tabulated_h_tw_must_be_positive() {
        let mut input = DesignInput::typical_floor_beam();
        input.beam.h_tw = None;
        assert!(input.validate().is_ok());

        input.beam.h_tw = Some(0.0);
        match input.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "beam.h_tw"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_loads_allowed_negative_rejected() {
        let mut input = DesignInput::typical_floor_beam();
        input.live_load_psf = 0.0;
        assert!(input.validate().is_ok());

        input.dead_load_psf = -1.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_connector_validation() {
        let mut input = DesignInput::typical_floor_beam();
        input.connector = Connector::Stud { diameter_in: 0.75, fu_ksi: 65.0, studs_per_rib: 0 };
        assert!(input.validate().is_err());

        input.connector = Connector::Channel {
            flange_thickness_in: 0.296,
            web_thickness_in: 0.0,
            length_in: 4.0,
        };
        match input.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "connector.web_thickness_in"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_beam_validation() {
        let mut beam = SteelShape::w18x35();
        beam.zx_in3 = 0.0;
        let input = DesignInput::typical_floor_beam().with_section(beam);
        assert!(input.validate().is_err());

        let mut beam = SteelShape::w18x35();
        beam.label = "  ".to_string();
        let input = DesignInput::typical_floor_beam().with_section(beam);
        assert_eq!(input.validate().unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_json_roundtrip_and_default_studs_per_rib() {
        let input = DesignInput::typical_floor_beam();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"type\":\"Stud\""));
        let back: DesignInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);

        let stud: Connector =
            serde_json::from_str(r#"{"type":"Stud","diameter_in":0.625,"fu_ksi":65.0}"#).unwrap();
        assert_eq!(
            stud,
            Connector::Stud { diameter_in: 0.625, fu_ksi: 65.0, studs_per_rib: 1 }
        );
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("fc_ksi", "4.5").unwrap(), 4.5);
        assert_eq!(parse_numeric("fc_ksi", "-2").unwrap(), -2.0);
        for bad in ["", "abc", "1,5", "inf", "NaN"] {
            assert!(matches!(
                parse_numeric("fc_ksi", bad),
                Err(CalcError::InvalidNumber { .. })
            ));
        }
    }
}
