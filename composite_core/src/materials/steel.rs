//! Steel Shapes Table (AISC W-shapes)
//!
//! Section properties for the wide-flange beams a composite floor is built
//! from, read from a CSV export of the AISC Shapes Database.
//!
//! ## Data Source
//!
//! The CSV is keyed by `AISC_Manual_Label` and must provide the numeric
//! columns `A, d, tw, bf, tf, Ix, Zx`. The `W` and `h/tw` columns are read
//! when present. Rows whose `Type` is not `W` are ignored, as are rows with a missing or malformed numeric field. A table
//! that cannot be located, decoded or parsed is replaced by a single built-in
//! W18X35 record so the host always has something to offer.
//!
//! ## Example
//!
//! ```rust
//! use composite_core::materials::steel::SectionTable;
//!
//! let csv = "Type,AISC_Manual_Label,A,d,tw,bf,tf,Ix,Zx\n\
//!            W,W16X26,7.68,15.7,0.25,5.5,0.345,301,44.2\n";
//! let table = SectionTable::from_csv_bytes(csv.as_bytes()).unwrap();
//!
//! let shape = table.lookup("w16x26").unwrap();
//! assert_eq!(shape.zx_in3, 44.2);
//! ```

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::text_encoding::TextEncoding;
use crate::errors::{CalcError, CalcResult};

/// Environment variable naming the section dataset
pub const SECTIONS_ENV_VAR: &str = "COMPOSITE_SECTIONS_CSV";

/// Dataset location relative to the working directory or executable
pub const DEFAULT_DATASET_PATH: &str = "assets/w_sections.csv";

const LABEL_COLUMN: &str = "AISC_Manual_Label";
const TYPE_COLUMN: &str = "Type";

/// Wide-flange shape with the properties the composite check consumes.
///
/// All dimensional values are in inches, in², in³, in⁴.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelShape {
    /// AISC Manual label (e.g., "W18X35")
    pub label: String,

    /// Nominal weight per linear foot (lb/ft), when the table provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_plf: Option<f64>,

    /// Cross-sectional area (in²)
    pub area_in2: f64,

    /// Overall depth (in)
    pub depth_in: f64,

    /// Web thickness (in)
    pub tw_in: f64,

    /// Flange width (in)
    pub bf_in: f64,

    /// Flange thickness (in)
    pub tf_in: f64,

    /// Moment of inertia about X-axis (in⁴)
    pub ix_in4: f64,

    /// Plastic section modulus about X-axis (in³)
    pub zx_in3: f64,

    /// Tabulated web slenderness h/tw, with h clear of the fillets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_tw: Option<f64>,
}

impl SteelShape {
    /// The W18X35 record used when no dataset can be read
    pub fn w18x35() -> Self {
        SteelShape {
            label: "W18X35".to_string(),
            weight_plf: Some(35.0),
            area_in2: 10.3,
            depth_in: 17.7,
            tw_in: 0.3,
            bf_in: 6.0,
            tf_in: 0.425,
            ix_in4: 510.0,
            zx_in3: 66.5,
            h_tw: Some(53.5),
        }
    }

    /// Web area `Aw = d·tw` (in²)
    pub fn web_area(&self) -> f64 {
        self.depth_in * self.tw_in
    }

    /// Clear web height between flanges, `h = d − 2tf` (in)
    pub fn web_height(&self) -> f64 {
        self.depth_in - 2.0 * self.tf_in
    }

    /// Web slenderness `h/tw`: the tabulated value, else `(d − 2tf)/tw`
    pub fn web_slenderness(&self) -> f64 {
        self.h_tw.unwrap_or_else(|| self.web_height() / self.tw_in)
    }
}

impl std::fmt::Display for SteelShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.2} in², d={:.2} in, Ix={:.1} in⁴, Zx={:.1} in³)",
            self.label, self.area_in2, self.depth_in, self.ix_in4, self.zx_in3
        )
    }
}

/// Where a [`SectionTable`]'s rows came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TableSource {
    /// Parsed from a dataset in the given encoding
    Csv { path: Option<PathBuf>, encoding: TextEncoding },
    /// Built-in catalog compiled into the library
    Builtin,
    /// Single-record fallback after a failed load
    Fallback,
}

impl TableSource {
    /// Name of the encoding the dataset decoded with, for CSV sources
    pub fn encoding_name(&self) -> Option<&'static str> {
        match self {
            TableSource::Csv { encoding, .. } => Some(encoding.name()),
            TableSource::Builtin | TableSource::Fallback => None,
        }
    }
}

/// In-memory section table, indexed by uppercase label.
#[derive(Debug, Clone)]
pub struct SectionTable {
    shapes: HashMap<String, SteelShape>,
    /// Uppercase labels in insertion order
    order: Vec<String>,
    source: TableSource,
}

impl SectionTable {
    fn empty(source: TableSource) -> Self {
        SectionTable {
            shapes: HashMap::new(),
            order: Vec::new(),
            source,
        }
    }

    /// The single-record W18X35 table
    pub fn fallback() -> Self {
        let mut table = SectionTable::empty(TableSource::Fallback);
        table.insert(SteelShape::w18x35());
        table
    }

    /// Load a dataset from disk, falling back to [`SectionTable::fallback`]
    /// when the file is missing, undecodable, or yields no W rows.
    pub fn load_or_fallback(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::warn!("section dataset not found; using built-in W18X35");
            return SectionTable::fallback();
        };

        match SectionTable::load(path) {
            Ok(table) => {
                tracing::info!(
                    path = %path.display(),
                    shapes = table.len(),
                    encoding = table.source.encoding_name().unwrap_or("none"),
                    "loaded section dataset"
                );
                table
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "section dataset unusable; using built-in W18X35");
                SectionTable::fallback()
            }
        }
    }

    /// Load a dataset from disk without falling back
    pub fn load(path: &Path) -> CalcResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let mut table = SectionTable::from_csv_bytes(&bytes)?;
        if let TableSource::Csv { path: source_path, .. } = &mut table.source {
            *source_path = Some(path.to_path_buf());
        }
        Ok(table)
    }

    /// Parse raw dataset bytes, trying each encoding in
    /// [`TextEncoding::FALLBACK_ORDER`] until one decodes and parses.
    ///
    /// Fails when no encoding works or the result has no W rows.
    pub fn from_csv_bytes(bytes: &[u8]) -> CalcResult<Self> {
        let mut last_error = None;

        for encoding in TextEncoding::FALLBACK_ORDER {
            let Some(text) = encoding.decode(bytes) else {
                tracing::debug!(encoding = encoding.name(), "dataset does not decode");
                continue;
            };

            match SectionTable::parse_csv(&text, encoding) {
                Ok(table) if table.is_empty() => {
                    return Err(CalcError::file_error("parse", "section dataset", "no W-shape rows"));
                }
                Ok(table) => return Ok(table),
                Err(e) => {
                    tracing::debug!(encoding = encoding.name(), error = %e, "dataset does not parse");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            CalcError::file_error("decode", "section dataset", "no supported text encoding")
        }))
    }

    fn parse_csv(text: &str, encoding: TextEncoding) -> CalcResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| CalcError::file_error("parse", "section dataset", e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // Exact match first: the AISC export has both "B" and "b"
        let col_index = |name: &str| -> Option<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
        };

        let label_idx = col_index(LABEL_COLUMN).ok_or_else(|| {
            CalcError::file_error("parse", "section dataset", format!("Missing '{}' column", LABEL_COLUMN))
        })?;
        let type_idx = col_index(TYPE_COLUMN);
        let weight_idx = col_index("W");
        let h_tw_idx = col_index("h/tw");

        let mut numeric_idx = [0usize; 7];
        for (slot, name) in numeric_idx.iter_mut().zip(["A", "d", "tw", "bf", "tf", "Ix", "Zx"]) {
            *slot = col_index(name).ok_or_else(|| {
                CalcError::file_error("parse", "section dataset", format!("Missing '{}' column", name))
            })?;
        }

        let mut table = SectionTable::empty(TableSource::Csv { path: None, encoding });
        let mut skipped = 0usize;

        for (row, record) in reader.records().enumerate() {
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    tracing::debug!(row = row + 2, error = %e, "skipping unreadable row");
                    skipped += 1;
                    continue;
                }
            };

            // A missing Type column counts as W
            let is_w = type_idx
                .map(|i| record.get(i).unwrap_or("").trim().eq_ignore_ascii_case("W"))
                .unwrap_or(true);
            if !is_w {
                continue;
            }

            let label = record.get(label_idx).unwrap_or("").trim();
            if label.is_empty() {
                skipped += 1;
                continue;
            }

            let values: Option<Vec<f64>> = numeric_idx
                .iter()
                .map(|&i| record.get(i).and_then(parse_optional_f64))
                .collect();
            let Some(values) = values else {
                tracing::debug!(row = row + 2, label, "skipping row with missing numeric field");
                skipped += 1;
                continue;
            };

            table.insert(SteelShape {
                label: label.to_string(),
                weight_plf: weight_idx.and_then(|i| record.get(i)).and_then(parse_optional_f64),
                area_in2: values[0],
                depth_in: values[1],
                tw_in: values[2],
                bf_in: values[3],
                tf_in: values[4],
                ix_in4: values[5],
                zx_in3: values[6],
                h_tw: h_tw_idx.and_then(|i| record.get(i)).and_then(parse_optional_f64),
            });
        }

        if skipped > 0 {
            tracing::warn!(skipped, "section dataset rows skipped");
        }

        Ok(table)
    }

    /// Insert a shape; a later row with the same label replaces the earlier one
    pub fn insert(&mut self, shape: SteelShape) {
        let key = shape.label.to_uppercase();
        if self.shapes.insert(key.clone(), shape).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a shape by its AISC label (case-insensitive, surrounding
    /// whitespace ignored)
    pub fn lookup(&self, label: &str) -> CalcResult<&SteelShape> {
        let key = label.trim().to_uppercase();
        self.shapes
            .get(&key)
            .ok_or_else(|| CalcError::section_not_found(label.trim()))
    }

    /// Labels in dataset order
    pub fn labels(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter_map(|k| self.shapes.get(k))
            .map(|s| s.label.as_str())
            .collect()
    }

    /// Where the rows came from
    pub fn source(&self) -> &TableSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Parse an optional f64 from a CSV field
///
/// Returns None for empty strings, dashes, invalid or non-finite numbers.
fn parse_optional_f64(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "—" {
        return None;
    }
    f64::from_str(trimmed).ok().filter(|v| v.is_finite())
}

// ============================================================================
// Dataset location and the initialize-once catalog
// ============================================================================

/// Resolve the dataset path.
///
/// Order: `explicit`, then [`SECTIONS_ENV_VAR`], then
/// [`DEFAULT_DATASET_PATH`] under the working directory, then under the
/// executable's directory. The first two are returned even if the file does
/// not exist so the load failure gets logged against the requested path.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(SECTIONS_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let cwd_candidate = PathBuf::from(DEFAULT_DATASET_PATH);
    if cwd_candidate.is_file() {
        return Some(cwd_candidate);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DATASET_PATH)))
        .filter(|p| p.is_file())
}

/// Host-owned section table, loaded on first access and read-only after.
///
/// Safe to share across threads; concurrent first accesses load once.
///
/// # Example
/// ```rust
/// use composite_core::materials::steel::{SectionCatalog, SectionTable};
///
/// let catalog = SectionCatalog::from_table(SectionTable::fallback());
/// assert_eq!(catalog.lookup("W18X35").unwrap().depth_in, 17.7);
/// ```
#[derive(Debug, Default)]
pub struct SectionCatalog {
    path: Option<PathBuf>,
    table: OnceCell<SectionTable>,
}

impl SectionCatalog {
    /// Catalog that resolves the dataset location on first access
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog reading an explicit dataset path on first access
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        SectionCatalog {
            path: Some(path.into()),
            table: OnceCell::new(),
        }
    }

    /// Catalog around an already-built table
    pub fn from_table(table: SectionTable) -> Self {
        let cell = OnceCell::new();
        // A fresh cell is always empty
        let _ = cell.set(table);
        SectionCatalog { path: None, table: cell }
    }

    /// The table, loading it on first call
    pub fn table(&self) -> &SectionTable {
        self.table.get_or_init(|| {
            let path = resolve_dataset_path(self.path.as_deref());
            SectionTable::load_or_fallback(path.as_deref())
        })
    }

    /// Whether the table has been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Look up a shape, returning an owned copy for a design input
    pub fn lookup(&self, label: &str) -> CalcResult<SteelShape> {
        self.table().lookup(label).cloned()
    }

    /// All labels in dataset order
    pub fn labels(&self) -> Vec<&str> {
        self.table().labels()
    }
}

// ============================================================================
// Built-in Common Shapes (for use without CSV file)
// ============================================================================

/// Table with common floor-beam W-shapes pre-loaded
///
/// Provides a minimal set of shapes for tests and demos without requiring
/// the dataset file.
pub fn builtin_common_shapes() -> SectionTable {
    let mut table = SectionTable::empty(TableSource::Builtin);

    // (label, W, A, d, tw, bf, tf, Ix, Zx, h/tw), AISC Manual 15th Ed
    let common_w_shapes = [
        ("W12X26", 26.0, 7.65, 12.2, 0.23, 6.49, 0.38, 204.0, 37.2, 47.2),
        ("W14X22", 22.0, 6.49, 13.7, 0.23, 5.0, 0.335, 199.0, 33.2, 53.3),
        ("W14X30", 30.0, 8.85, 13.8, 0.27, 6.73, 0.385, 291.0, 47.3, 45.4),
        ("W16X26", 26.0, 7.68, 15.7, 0.25, 5.5, 0.345, 301.0, 44.2, 56.8),
        ("W16X31", 31.0, 9.13, 15.9, 0.275, 5.53, 0.44, 375.0, 54.0, 51.6),
        ("W16X36", 36.0, 10.6, 15.9, 0.295, 6.99, 0.43, 448.0, 64.0, 48.1),
        ("W18X35", 35.0, 10.3, 17.7, 0.3, 6.0, 0.425, 510.0, 66.5, 53.5),
        ("W18X40", 40.0, 11.8, 17.9, 0.315, 6.02, 0.525, 612.0, 78.4, 50.9),
        ("W18X50", 50.0, 14.7, 18.0, 0.355, 7.5, 0.57, 800.0, 101.0, 45.2),
        ("W21X44", 44.0, 13.0, 20.7, 0.35, 6.5, 0.45, 843.0, 95.4, 53.6),
        ("W21X50", 50.0, 14.7, 20.8, 0.38, 6.53, 0.535, 984.0, 110.0, 49.4),
        ("W21X62", 62.0, 18.3, 21.0, 0.4, 8.24, 0.615, 1330.0, 144.0, 46.9),
        ("W24X55", 55.0, 16.2, 23.6, 0.395, 7.01, 0.505, 1350.0, 134.0, 54.6),
        ("W24X62", 62.0, 18.2, 23.7, 0.43, 7.04, 0.59, 1550.0, 153.0, 50.1),
        ("W24X76", 76.0, 22.4, 23.9, 0.44, 8.99, 0.68, 2100.0, 200.0, 49.0),
    ];

    for (label, w, a, d, tw, bf, tf, ix, zx, h_tw) in common_w_shapes {
        table.insert(SteelShape {
            label: label.to_string(),
            weight_plf: Some(w),
            area_in2: a,
            depth_in: d,
            tw_in: tw,
            bf_in: bf,
            tf_in: tf,
            ix_in4: ix,
            zx_in3: zx,
            h_tw: Some(h_tw),
        });
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Type,EDI_Std_Nomenclature,AISC_Manual_Label,W,A,d,tw,bf,tf,Ix,Zx\n";

    #[test]
    fn test_fallback_record() {
        let table = SectionTable::fallback();
        assert_eq!(table.len(), 1);
        assert_eq!(table.source(), &TableSource::Fallback);

        let shape = table.lookup("W18X35").unwrap();
        assert_eq!(shape.depth_in, 17.7);
        assert_eq!(shape.tw_in, 0.3);
        assert_eq!(shape.bf_in, 6.0);
        assert_eq!(shape.tf_in, 0.425);
        assert_eq!(shape.area_in2, 10.3);
        assert_eq!(shape.ix_in4, 510.0);
        assert_eq!(shape.zx_in3, 66.5);
    }

    #[test]
    fn test_type_filter_and_malformed_rows() {
        let csv = format!(
            "{HEADER}\
             W,W18X35,W18X35,35,10.3,17.7,0.3,6,0.425,510,66.5\n\
             C,C10X15.3,C10X15.3,15.3,4.48,10,0.24,2.6,0.436,67.3,13.6\n\
             w ,W16X26,W16X26,26,7.68,15.7,0.25,5.5,0.345,301,44.2\n\
             W,W99X1,W99X1,1,abc,1,1,1,1,1,1\n\
             W,W98X1,W98X1,1,1,1,1,1,1,–,1\n"
        );
        let table = SectionTable::from_csv_bytes(csv.as_bytes()).unwrap();

        assert_eq!(table.labels(), vec!["W18X35", "W16X26"]);
        assert!(matches!(
            table.lookup("C10X15.3"),
            Err(CalcError::SectionNotFound { .. })
        ));
        assert_eq!(table.lookup("w16x26").unwrap().weight_plf, Some(26.0));
    }

    #[test]
    fn test_missing_type_column_counts_as_w() {
        let csv = "AISC_Manual_Label,A,d,tw,bf,tf,Ix,Zx\nW21X44,13,20.7,0.35,6.5,0.45,843,95.4\n";
        let table = SectionTable::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("W21X44").unwrap().weight_plf, None);
    }

    #[test]
    fn test_cp1252_dataset() {
        // 0x96 (en dash) in a text column is invalid UTF-8
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"W,W18\x9635,W18X35,35,10.3,17.7,0.3,6,0.425,510,66.5\n");

        let table = SectionTable::from_csv_bytes(&bytes).unwrap();
        assert_eq!(
            table.source(),
            &TableSource::Csv { path: None, encoding: TextEncoding::Windows1252 }
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_latin1_dataset() {
        // 0x81 is undefined in cp1252, so only latin-1 decodes it
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"W,\x81,W18X35,35,10.3,17.7,0.3,6,0.425,510,66.5\n");

        let table = SectionTable::from_csv_bytes(&bytes).unwrap();
        assert_eq!(
            table.source(),
            &TableSource::Csv { path: None, encoding: TextEncoding::Latin1 }
        );
    }

    #[test]
    fn test_utf8_bom_header() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(HEADER.as_bytes());
        bytes.extend_from_slice(b"W,W18X35,W18X35,35,10.3,17.7,0.3,6,0.425,510,66.5\n");

        let table = SectionTable::from_csv_bytes(&bytes).unwrap();
        assert!(table.lookup("W18X35").is_ok());
    }

    #[test]
    fn test_no_w_rows_is_an_error() {
        let csv = format!("{HEADER}C,C10X15.3,C10X15.3,15.3,4.48,10,0.24,2.6,0.436,67.3,13.6\n");
        assert!(SectionTable::from_csv_bytes(csv.as_bytes()).is_err());
        assert!(SectionTable::from_csv_bytes(b"Type,A\nW,1\n").is_err());
    }

    #[test]
    fn test_load_or_fallback() {
        let missing = SectionTable::load_or_fallback(Some(Path::new("/nonexistent/w_sections.csv")));
        assert_eq!(missing.source(), &TableSource::Fallback);
        assert!(SectionTable::load_or_fallback(None).lookup("W18X35").is_ok());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{HEADER}W,W24X55,W24X55,55,16.2,23.6,0.395,7.01,0.505,1350,134\n").unwrap();

        let table = SectionTable::load_or_fallback(Some(file.path()));
        assert_eq!(table.len(), 1);
        match table.source() {
            TableSource::Csv { path, encoding } => {
                assert_eq!(path.as_deref(), Some(file.path()));
                assert_eq!(*encoding, TextEncoding::Utf8Sig);
            }
            other => panic!("unexpected source {:?}", other),
        }
        assert_eq!(table.source().encoding_name(), Some(TextEncoding::Utf8Sig.name()));
        assert_eq!(missing.source().encoding_name(), None);
    }

    #[test]
    fn test_catalog_loads_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{HEADER}W,W21X44,W21X44,44,13,20.7,0.35,6.5,0.45,843,95.4\n").unwrap();

        let catalog = SectionCatalog::with_path(file.path());
        assert!(!catalog.is_loaded());
        assert_eq!(catalog.labels(), vec!["W21X44"]);
        assert!(catalog.is_loaded());

        // Later file changes are not observed
        std::fs::write(file.path(), "garbage").unwrap();
        assert!(catalog.lookup("W21X44").is_ok());
        assert!(matches!(
            catalog.lookup("W18X35"),
            Err(CalcError::SectionNotFound { label }) if label == "W18X35"
        ));
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SectionCatalog>();

        let catalog = SectionCatalog::from_table(builtin_common_shapes());
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert!(catalog.lookup("W18X35").is_ok()));
            }
        });
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = Path::new("/tmp/custom.csv");
        assert_eq!(resolve_dataset_path(Some(explicit)), Some(explicit.to_path_buf()));
    }

    #[test]
    fn test_builtin_shapes() {
        let table = builtin_common_shapes();
        assert!(table.len() >= 15);
        assert_eq!(table.lookup("W18X35").unwrap(), &SteelShape::w18x35());
        assert!((table.lookup("W16X26").unwrap().web_slenderness() - 56.8).abs() < 1e-12);
    }

    #[test]
    fn test_web_properties() {
        let shape = SteelShape::w18x35();
        assert!((shape.web_area() - 5.31).abs() < 1e-12);
        assert!((shape.web_slenderness() - 53.5).abs() < 1e-12);

        // Without a tabulated value h runs flange to flange
        let untabulated = SteelShape { h_tw: None, ..shape };
        assert!((untabulated.web_slenderness() - 16.85 / 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_h_tw_column_is_optional() {
        let csv = "Type,AISC_Manual_Label,W,A,d,tw,bf,tf,Ix,Zx,h/tw
                   W,W18X35,35,10.3,17.7,0.3,6,0.425,510,66.5,53.5
                   W,W30X90,90,26.3,29.5,0.47,10.4,0.61,3610,283,
";
        let table = SectionTable::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.lookup("W18X35").unwrap().h_tw, Some(53.5));
        let blank = table.lookup("W30X90").unwrap();
        assert_eq!(blank.h_tw, None);
        assert!((blank.web_slenderness() - (29.5 - 1.22) / 0.47).abs() < 1e-9);

        let csv = "AISC_Manual_Label,A,d,tw,bf,tf,Ix,Zx
W21X44,13,20.7,0.35,6.5,0.45,843,95.4
";
        let table = SectionTable::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.lookup("W21X44").unwrap().h_tw, None);
    }

    #[test]
    fn test_parse_optional_f64() {
        assert_eq!(parse_optional_f64("123.45"), Some(123.45));
        assert_eq!(parse_optional_f64("  456  "), Some(456.0));
        assert_eq!(parse_optional_f64(""), None);
        assert_eq!(parse_optional_f64("-"), None);
        assert_eq!(parse_optional_f64("—"), None);
        assert_eq!(parse_optional_f64("NaN"), None);
        assert_eq!(parse_optional_f64("not a number"), None);
    }
}
