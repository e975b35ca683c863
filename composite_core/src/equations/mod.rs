//! # Structural Engineering Equations
//!
//! Every formula the composite beam check applies lives here, separate from
//! the pipeline stages that thread values between them. Keeping the equations
//! in one place enables:
//! - Verification against AISC 360-16, ACI 318 and Roark's
//! - Documentation of assumptions and units next to the formula
//! - A generated reference document (`EQUATIONS.md`)
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam formulas (moment, shear, deflection)
//! - [`composite`] - AISC Chapter I/G provisions (effective width, anchors, web shear)
//! - [`section`] - Cross-section properties and built-up section combination
//! - [`registry`] - Equation metadata referenced by derivation trails
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Heights**: Measured upward from the bottom of the steel beam
//! - **Deflection**: Positive downward
//!
//! ## References
//!
//! - AISC 360-16: Specification for Structural Steel Buildings
//! - ACI 318-14: Building Code Requirements for Structural Concrete
//! - ASCE 7-16: Minimum Design Loads for Buildings
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod beam;
pub mod composite;
pub mod registry;
pub mod section;

// Re-export commonly used items
pub use beam::{
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_max_shear,
};

pub use composite::{
    channel_nominal_strength,
    concrete_modulus_ksi,
    connectors_over_half_span,
    deck_reduction_factor,
    effective_moment_of_inertia,
    effective_width,
    percent_composite,
    stud_area,
    stud_nominal_strength,
    web_shear_nominal,
};

pub use section::{
    combine_pieces,
    parallel_axis_term,
    rectangular_area,
    rectangular_moment_of_inertia,
    SectionPiece,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
