//! # composite_core - Composite Beam Design Engine
//!
//! `composite_core` checks simply-supported composite steel-concrete floor
//! beams to AISC 360-16 LRFD: flexural strength with partial composite
//! action, web shear, and short/long-term deflection of the transformed
//! section. All inputs and outputs are JSON-serializable, and every result
//! carries a derivation trail of substituted formulas.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Deterministic**: The same input always gives bit-identical output
//!
//! ## Quick Start
//!
//! ```rust
//! use composite_core::calculations::{calculate, DesignInput};
//! use composite_core::materials::builtin_common_shapes;
//!
//! let shapes = builtin_common_shapes();
//! let input = DesignInput::typical_floor_beam()
//!     .with_section(shapes.lookup("W21X44").unwrap().clone());
//!
//! let result = calculate(&input).unwrap();
//! for line in result.summary_lines() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Design input and the staged composite beam check
//! - [`equations`] - Formulas and their code references
//! - [`derivation`] - Step-by-step calculation records
//! - [`loads`] - Load types and LRFD/service combinations
//! - [`materials`] - Steel sections, section table, concrete
//! - [`project`] - Project container, metadata, and settings
//! - [`file_io`] - Atomic project saves and version-checked loads
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`logging`] - `tracing` subscriber setup for hosts

pub mod calculations;
pub mod derivation;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod logging;
pub mod materials;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_with, CompositeBeamResult, DesignInput, DesignSettings};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use materials::{SectionCatalog, SteelShape};
pub use project::{GlobalSettings, Project, ProjectMetadata};
