//! # Equation Registry
//!
//! Central registry of every formula the composite beam check applies. Each
//! equation carries metadata (plain-text formula, code reference, variables)
//! so a derivation step can point at the provision it evaluates, and so the
//! `gen-equations` binary can produce an audit document.
//!
//! ## Usage
//!
//! ```rust
//! use composite_core::equations::registry::Equation;
//!
//! let meta = Equation::StudNominalStrength.metadata();
//! assert_eq!(meta.reference.citation(), "AISC 360-16 Section I8.2a");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// AISC 360 - Specification for Structural Steel Buildings
    AISC360 {
        year: u16,
        section: &'static str,
    },
    /// ASCE 7 - Minimum Design Loads for Buildings
    ASCE7 {
        year: u16,
        section: &'static str,
    },
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::AISC360 { year, section } => {
                format!("AISC 360-{} Section {}", year % 100, section)
            }
            CodeReference::ASCE7 { year, section } => {
                format!("ASCE 7-{} Section {}", year % 100, section)
            }
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references (e.g. "[AISC I8.2a]")
    pub fn short_form(&self) -> String {
        match self {
            CodeReference::Roarks { .. } => "Roark's".to_string(),
            CodeReference::AISC360 { section, .. } => format!("AISC {}", section),
            CodeReference::ASCE7 { section, .. } => format!("ASCE 7 {}", section),
            CodeReference::ACI318 { section, .. } => format!("ACI {}", section),
            CodeReference::Mechanics => "Mechanics".to_string(),
        }
    }
}

const AISC: u16 = 2016;

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Factored and service loads
    Loads,
    /// Moment and shear demand
    InternalForces,
    /// Effective width, transformed section, inertia
    SectionProperties,
    /// Shear connector strength and composite action
    ShearConnectors,
    /// Plastic stress block and flexural capacity
    FlexuralStrength,
    /// Web shear capacity
    ShearStrength,
    /// Deflection and serviceability limits
    Deflections,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Loads => "Loads",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::ShearConnectors => "Shear Connectors",
            EquationCategory::FlexuralStrength => "Flexural Strength",
            EquationCategory::ShearStrength => "Shear Strength",
            EquationCategory::Deflections => "Deflections",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Loads => 1,
            EquationCategory::InternalForces => 2,
            EquationCategory::SectionProperties => 3,
            EquationCategory::ShearConnectors => 4,
            EquationCategory::FlexuralStrength => 5,
            EquationCategory::ShearStrength => 6,
            EquationCategory::Deflections => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Qn", "b_eff")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kips", "in")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation applied by the composite beam pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// w_u = s(1.2D + 1.6L)
    FactoredLineLoad,
    /// w_s = s(D + L)
    ServiceLineLoad,
    /// M_u = w_u L^2 / 8
    UniformLoadMaxMoment,
    /// V_u = w_u L / 2
    UniformLoadMaxShear,
    /// b_eff = min(L/4, s)
    EffectiveWidth,
    /// Ec = 57000 sqrt(f'c)
    ConcreteModulus,
    /// Asc = pi d^2 / 4
    StudArea,
    /// R = min(1, k (wr/hr)(Hs/hr - 1))
    DeckReductionFactor,
    /// Qn = min(R 0.5 Asc sqrt(f'c Ec), Asc Fu)
    StudNominalStrength,
    /// Qn = 0.3(tf + 0.5tw) La sqrt(f'c Ec)
    ChannelNominalStrength,
    /// N = floor((L/2)/s)
    ConnectorCount,
    /// Vh = min(0.85 f'c Ac, As Fy)
    RequiredHorizontalShear,
    /// %comp = min(100, SumQn / Vh)
    PercentComposite,
    /// a = C / (0.85 f'c b_eff), T-shaped when into parallel ribs
    StressBlockDepth,
    /// phi Mn = 0.9 C Y
    CompositeFlexuralStrength,
    /// phi Mp = 0.9 Fy Zx
    SteelPlasticMoment,
    /// phi Vn = 1.0 (0.6 Fy Aw Cv1)
    WebShearStrength,
    /// n = Es / Ec
    ModularRatio,
    /// I_tr = sum(Io + A d^2)
    TransformedMomentOfInertia,
    /// I_eff = Is + sqrt(pct)(I_tr - Is)
    EffectiveMomentOfInertia,
    /// delta = 5 w L^4 / (384 E I)
    UniformLoadMaxDeflection,
    /// L/360, L/240
    DeflectionLimit,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::FactoredLineLoad => EquationMetadata {
                name: "Factored Line Load",
                description: "LRFD gravity combination applied over the beam's tributary width",
                formula_plain: "w_u = s(1.2D + 1.6L) / 1000",
                reference: CodeReference::ASCE7 { year: 2016, section: "2.3.2 (Comb. 2)" },
                variables: vec![
                    Variable::new("w_u", "Factored line load", "klf"),
                    Variable::new("s", "Beam spacing (tributary width)", "ft"),
                    Variable::new("D", "Dead load", "psf"),
                    Variable::new("L", "Live load", "psf"),
                ],
                assumptions: vec!["Only the 1.2D + 1.6L combination is evaluated"],
                category: EquationCategory::Loads,
                source_module: "loads/combinations.rs",
                source_function: "lrfd_gravity",
            },

            Equation::ServiceLineLoad => EquationMetadata {
                name: "Service Line Load",
                description: "Unfactored dead plus live load used for deflection",
                formula_plain: "w_s = s(D + L) / 1000",
                reference: CodeReference::ASCE7 { year: 2016, section: "2.4" },
                variables: vec![
                    Variable::new("w_s", "Service line load", "klf"),
                    Variable::new("s", "Beam spacing (tributary width)", "ft"),
                ],
                assumptions: vec![],
                category: EquationCategory::Loads,
                source_module: "loads/combinations.rs",
                source_function: "service",
            },

            Equation::UniformLoadMaxMoment => EquationMetadata {
                name: "Maximum Moment for Uniform Load",
                description: "Midspan moment of a simply-supported span",
                formula_plain: "M_u = w_u L^2 / 8",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("M_u", "Factored moment", "k-ft"),
                    Variable::new("L", "Span length", "ft"),
                ],
                assumptions: vec!["Simply-supported (pin-roller)", "Full-length uniform load"],
                category: EquationCategory::InternalForces,
                source_module: "equations/beam.rs",
                source_function: "uniform_load_max_moment",
            },

            Equation::UniformLoadMaxShear => EquationMetadata {
                name: "Maximum Shear for Uniform Load",
                description: "End shear of a simply-supported span",
                formula_plain: "V_u = w_u L / 2",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![Variable::new("V_u", "Factored shear", "kips")],
                assumptions: vec!["Simply-supported (pin-roller)"],
                category: EquationCategory::InternalForces,
                source_module: "equations/beam.rs",
                source_function: "uniform_load_max_shear",
            },

            Equation::EffectiveWidth => EquationMetadata {
                name: "Effective Slab Width",
                description: "Slab width acting compositely with an interior beam",
                formula_plain: "b_eff = min(L/4, s)",
                reference: CodeReference::AISC360 { year: AISC, section: "I3.1a" },
                variables: vec![
                    Variable::new("b_eff", "Effective width", "in"),
                    Variable::new("L", "Span length", "in"),
                    Variable::new("s", "Beam spacing", "in"),
                ],
                assumptions: vec!["Interior beam with slab on both sides"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/composite.rs",
                source_function: "effective_width",
            },

            Equation::ConcreteModulus => EquationMetadata {
                name: "Concrete Modulus of Elasticity",
                description: "Normal-weight concrete modulus from compressive strength",
                formula_plain: "Ec = 57000 sqrt(f'c [psi]) / 1000",
                reference: CodeReference::ACI318 { year: 2014, section: "19.2.2.1" },
                variables: vec![
                    Variable::new("Ec", "Concrete modulus", "ksi"),
                    Variable::new("f'c", "Concrete compressive strength", "ksi"),
                ],
                assumptions: vec!["Normal-weight concrete"],
                category: EquationCategory::ShearConnectors,
                source_module: "equations/composite.rs",
                source_function: "concrete_modulus_ksi",
            },

            Equation::StudArea => EquationMetadata {
                name: "Stud Shank Area",
                description: "Cross-sectional area of a headed stud",
                formula_plain: "Asc = pi d^2 / 4",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("d", "Stud diameter", "in")],
                assumptions: vec![],
                category: EquationCategory::ShearConnectors,
                source_module: "equations/composite.rs",
                source_function: "stud_area",
            },

            Equation::DeckReductionFactor => EquationMetadata {
                name: "Formed Deck Reduction Factor",
                description: "Stud strength reduction for studs placed in deck ribs",
                formula_plain: "R = min(1.0, k (wr/hr)(Hs/hr - 1)), k = 0.85/sqrt(Nr) perpendicular, 0.6 parallel",
                reference: CodeReference::AISC360 { year: AISC, section: "I8.2a" },
                variables: vec![
                    Variable::new("wr", "Average rib width", "in"),
                    Variable::new("hr", "Rib height", "in"),
                    Variable::new("Hs", "Stud height (hr + 2.0)", "in"),
                    Variable::new("Nr", "Studs per rib", "-"),
                ],
                assumptions: vec!["Stud extends 2 in above the top of the deck"],
                category: EquationCategory::ShearConnectors,
                source_module: "equations/composite.rs",
                source_function: "deck_reduction_factor",
            },

            Equation::StudNominalStrength => EquationMetadata {
                name: "Headed Stud Nominal Strength",
                description: "Shear strength of one steel headed stud anchor",
                formula_plain: "Qn = min(R 0.5 Asc sqrt(f'c Ec), Asc Fu)",
                reference: CodeReference::AISC360 { year: AISC, section: "I8.2a" },
                variables: vec![
                    Variable::new("Qn", "Nominal anchor strength", "kips"),
                    Variable::new("Asc", "Stud shank area", "in^2"),
                    Variable::new("Fu", "Stud tensile strength", "ksi"),
                ],
                assumptions: vec!["Deck reduction applied to the concrete term before the rupture limit"],
                category: EquationCategory::ShearConnectors,
                source_module: "equations/composite.rs",
                source_function: "stud_nominal_strength",
            },

            Equation::ChannelNominalStrength => EquationMetadata {
                name: "Channel Anchor Nominal Strength",
                description: "Shear strength of one hot-rolled channel anchor",
                formula_plain: "Qn = 0.3(tf + 0.5tw) La sqrt(f'c Ec)",
                reference: CodeReference::AISC360 { year: AISC, section: "I8.2b" },
                variables: vec![
                    Variable::new("tf", "Channel flange thickness", "in"),
                    Variable::new("tw", "Channel web thickness", "in"),
                    Variable::new("La", "Channel length", "in"),
                ],
                assumptions: vec![],
                category: EquationCategory::ShearConnectors,
                source_module: "equations/composite.rs",
                source_function: "channel_nominal_strength",
            },

            Equation::ConnectorCount => EquationMetadata {
                name: "Connectors Over Half Span",
                description: "Anchors between the point of zero moment and midspan",
                formula_plain: "N = floor((L/2) / s_c)",
                reference: CodeReference::AISC360 { year: AISC, section: "I8.2c" },
                variables: vec![
                    Variable::new("N", "Number of anchors", "-"),
                    Variable::new("s_c", "Connector spacing", "in"),
                ],
                assumptions: vec!["Uniform spacing, truncated (never rounded up)"],
                category: EquationCategory::ShearConnectors,
                source_module: "equations/composite.rs",
                source_function: "connectors_over_half_span",
            },

            Equation::RequiredHorizontalShear => EquationMetadata {
                name: "Horizontal Shear for Full Composite Action",
                description: "Lesser of concrete crushing and steel yielding",
                formula_plain: "Vh = min(0.85 f'c Ac, As Fy)",
                reference: CodeReference::AISC360 { year: AISC, section: "I3.2d" },
                variables: vec![
                    Variable::new("Ac", "Effective concrete area", "in^2"),
                    Variable::new("As", "Steel area", "in^2"),
                    Variable::new("Fy", "Steel yield strength", "ksi"),
                ],
                assumptions: vec!["Rib concrete counted only when ribs run parallel to the beam"],
                category: EquationCategory::ShearConnectors,
                source_module: "equations/composite.rs",
                source_function: "horizontal_shear_concrete",
            },

            Equation::PercentComposite => EquationMetadata {
                name: "Percent Composite Action",
                description: "Provided anchor strength relative to full composite demand",
                formula_plain: "%comp = min(100, SumQn / Vh * 100)",
                reference: CodeReference::AISC360 { year: AISC, section: "Commentary I3.2" },
                variables: vec![Variable::new("SumQn", "Total anchor strength over half span", "kips")],
                assumptions: vec!["Defined as 0 when Vh = 0"],
                category: EquationCategory::ShearConnectors,
                source_module: "equations/composite.rs",
                source_function: "percent_composite",
            },

            Equation::StressBlockDepth => EquationMetadata {
                name: "Plastic Stress Block Depth",
                description: "Depth of the 0.85f'c block carrying the compression resultant",
                formula_plain: "a = C / (0.85 f'c b_eff); into parallel ribs: a = tc + (C - 0.85 f'c b_eff tc) / (0.85 f'c b_eff wr/12)",
                reference: CodeReference::AISC360 { year: AISC, section: "I3.2a" },
                variables: vec![
                    Variable::new("C", "Compression resultant min(SumQn, Vh)", "kips"),
                    Variable::new("a", "Stress block depth", "in"),
                ],
                assumptions: vec!["Plastic stress distribution", "PNA in the steel section"],
                category: EquationCategory::FlexuralStrength,
                source_module: "calculations/flexure.rs",
                source_function: "stress_block",
            },

            Equation::CompositeFlexuralStrength => EquationMetadata {
                name: "Composite Design Flexural Strength",
                description: "Compression-tension couple times the resistance factor",
                formula_plain: "phi Mn = 0.9 C Y / 12, Y = (hr + tc + d/2) - y_c",
                reference: CodeReference::AISC360 { year: AISC, section: "I3.2a" },
                variables: vec![
                    Variable::new("Y", "Lever arm from steel centroid to compression centroid", "in"),
                    Variable::new("phi", "Resistance factor", "0.90"),
                ],
                assumptions: vec!["Tension resultant at the steel centroid"],
                category: EquationCategory::FlexuralStrength,
                source_module: "calculations/flexure.rs",
                source_function: "check_flexure",
            },

            Equation::SteelPlasticMoment => EquationMetadata {
                name: "Bare Steel Plastic Moment",
                description: "Reference capacity of the steel beam alone",
                formula_plain: "phi Mp = 0.9 Fy Zx / 12",
                reference: CodeReference::AISC360 { year: AISC, section: "F2.1" },
                variables: vec![Variable::new("Zx", "Plastic section modulus", "in^3")],
                assumptions: vec!["Reported for comparison only"],
                category: EquationCategory::FlexuralStrength,
                source_module: "calculations/flexure.rs",
                source_function: "check_flexure",
            },

            Equation::WebShearStrength => EquationMetadata {
                name: "Web Shear Strength",
                description: "Shear yielding of the web of a rolled I-shape",
                formula_plain: "phi Vn = 1.0 (0.6 Fy Aw Cv1), Aw = d tw",
                reference: CodeReference::AISC360 { year: AISC, section: "G2.1 (Eq. G2-1)" },
                variables: vec![
                    Variable::new("Aw", "Web area", "in^2"),
                    Variable::new("Cv1", "Web shear strength coefficient", "1.0"),
                ],
                assumptions: vec!["Cv1 = 1.0 and phi = 1.0 (compact rolled web, h/tw <= 2.24 sqrt(E/Fy))"],
                category: EquationCategory::ShearStrength,
                source_module: "equations/composite.rs",
                source_function: "web_shear_nominal",
            },

            Equation::ModularRatio => EquationMetadata {
                name: "Modular Ratio",
                description: "Steel-to-concrete modulus ratio; doubled for long-term creep",
                formula_plain: "n = Es / Ec (short), 2n (long)",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("Es", "Steel modulus", "29000 ksi")],
                assumptions: vec!["Creep approximated by doubling n"],
                category: EquationCategory::SectionProperties,
                source_module: "calculations/deflection.rs",
                source_function: "transformed_section",
            },

            Equation::TransformedMomentOfInertia => EquationMetadata {
                name: "Transformed Moment of Inertia",
                description: "Elastic inertia of the steel plus transformed concrete",
                formula_plain: "Y = SumAy / SumA, I_tr = Sum(Io + A d^2)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("Y", "Elastic neutral axis above beam bottom", "in"),
                    Variable::new("I_tr", "Transformed moment of inertia", "in^4"),
                ],
                assumptions: vec!["Uncracked concrete in compression", "Perpendicular rib concrete ignored"],
                category: EquationCategory::SectionProperties,
                source_module: "equations/section.rs",
                source_function: "combine_pieces",
            },

            Equation::EffectiveMomentOfInertia => EquationMetadata {
                name: "Effective Moment of Inertia (Partial Composite)",
                description: "Interpolation between bare steel and transformed inertia",
                formula_plain: "I_eff = Is + sqrt(%comp/100) (I_tr - Is)",
                reference: CodeReference::AISC360 { year: AISC, section: "Commentary I3.2 (Eq. C-I3-4)" },
                variables: vec![Variable::new("Is", "Steel moment of inertia", "in^4")],
                assumptions: vec![],
                category: EquationCategory::SectionProperties,
                source_module: "equations/composite.rs",
                source_function: "effective_moment_of_inertia",
            },

            Equation::UniformLoadMaxDeflection => EquationMetadata {
                name: "Maximum Deflection for Uniform Load",
                description: "Midspan deflection of a simply-supported span",
                formula_plain: "delta = 5 w L^4 / (384 E I_eff)",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("w", "Service load", "kip/in"),
                    Variable::new("L", "Span length", "in"),
                ],
                assumptions: vec!["Linear elastic material", "Small deflections"],
                category: EquationCategory::Deflections,
                source_module: "equations/beam.rs",
                source_function: "uniform_load_max_deflection",
            },

            Equation::DeflectionLimit => EquationMetadata {
                name: "Deflection Limits",
                description: "Span-based serviceability limits",
                formula_plain: "short term L/360, long term L/240",
                reference: CodeReference::Mechanics,
                variables: vec![],
                assumptions: vec!["Serviceability only; long-term exceedance flagged CHECK"],
                category: EquationCategory::Deflections,
                source_module: "calculations/deflection.rs",
                source_function: "check_deflection",
            },
        }
    }

    /// All equations in the category, in declaration order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }

    /// All categories sorted for display
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories = vec![
            EquationCategory::Loads,
            EquationCategory::InternalForces,
            EquationCategory::SectionProperties,
            EquationCategory::ShearConnectors,
            EquationCategory::FlexuralStrength,
            EquationCategory::ShearStrength,
            EquationCategory::Deflections,
        ];
        categories.sort_by_key(|c| c.sort_order());
        categories
    }
}

/// All registered equations
pub const ALL_EQUATIONS: &[Equation] = &[
    Equation::FactoredLineLoad,
    Equation::ServiceLineLoad,
    Equation::UniformLoadMaxMoment,
    Equation::UniformLoadMaxShear,
    Equation::EffectiveWidth,
    Equation::ConcreteModulus,
    Equation::StudArea,
    Equation::DeckReductionFactor,
    Equation::StudNominalStrength,
    Equation::ChannelNominalStrength,
    Equation::ConnectorCount,
    Equation::RequiredHorizontalShear,
    Equation::PercentComposite,
    Equation::StressBlockDepth,
    Equation::CompositeFlexuralStrength,
    Equation::SteelPlasticMoment,
    Equation::WebShearStrength,
    Equation::ModularRatio,
    Equation::TransformedMomentOfInertia,
    Equation::EffectiveMomentOfInertia,
    Equation::UniformLoadMaxDeflection,
    Equation::DeflectionLimit,
];

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate the EQUATIONS.md reference document.
///
/// # Example
///
/// ```rust
/// use composite_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Composite Beam Equations Reference"));
/// assert!(markdown.contains("Shear Connectors"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Composite Beam Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula applied by the composite beam check, grouped by stage, with its
code reference and the function that implements it.

Units: inches, kips, ksi, klf, k-ft.

---

"#,
    );

    for category in Equation::all_categories() {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** `{}` → `{}()`\n\n",
                meta.source_module, meta.source_function
            ));
            output.push_str("---\n\n");
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_equation_has_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty());
            assert!(!meta.formula_plain.is_empty());
            assert!(!meta.source_function.is_empty());
        }
    }

    #[test]
    fn test_categories_cover_all_equations() {
        let counted: usize = Equation::all_categories()
            .into_iter()
            .map(|c| Equation::in_category(c).len())
            .sum();
        assert_eq!(counted, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_citations() {
        let aisc = CodeReference::AISC360 { year: 2016, section: "I3.1a" };
        assert_eq!(aisc.citation(), "AISC 360-16 Section I3.1a");
        assert_eq!(aisc.short_form(), "AISC I3.1a");
        assert_eq!(CodeReference::Mechanics.citation(), "Fundamental Mechanics");
    }

    #[test]
    fn test_markdown_lists_every_equation() {
        let markdown = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(markdown.contains(eq.metadata().name), "missing {:?}", eq);
        }
    }
}
