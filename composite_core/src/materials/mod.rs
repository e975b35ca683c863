//! # Materials
//!
//! Steel sections and concrete for composite floor beams.
//!
//! - [`steel`] - W-shape properties, the CSV section table and its
//!   initialize-once catalog
//! - [`concrete`] - Normal-weight concrete modulus and the steel modulus
//! - [`text_encoding`] - Encodings tried when decoding the section dataset
//!
//! ## Example
//!
//! ```rust
//! use composite_core::materials::{builtin_common_shapes, Concrete};
//!
//! let shapes = builtin_common_shapes();
//! let beam = shapes.lookup("W21X44").unwrap();
//! let slab = Concrete::new(4.0);
//!
//! println!("{} with Ec = {:.0} ksi", beam, slab.modulus_ksi());
//! ```

pub mod concrete;
pub mod steel;
pub mod text_encoding;

pub use concrete::{Concrete, ES_KSI};
pub use steel::{
    builtin_common_shapes, resolve_dataset_path, SectionCatalog, SectionTable, SteelShape,
    TableSource, DEFAULT_DATASET_PATH, SECTIONS_ENV_VAR,
};
pub use text_encoding::TextEncoding;
