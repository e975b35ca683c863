//! # Cross-Section Property Formulas
//!
//! Geometric helpers for building up a composite cross-section from simple
//! pieces: rectangles, the parallel-axis theorem, and first-moment
//! combination of several areas about a common reference.
//!
//! ## Notation
//!
//! - `A` = Area
//! - `y` = Centroid height above the reference line (beam bottom)
//! - `Io` = Moment of inertia of a piece about its own centroid
//! - `d` = Distance between a piece's centroid and the combined centroid
//!
//! ## References
//!
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

/// Cross-sectional area of a rectangle, `A = b·h`
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Centroidal moment of inertia of a rectangle, `I = b·h³/12`
///
/// # Example
/// ```rust
/// use composite_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(12.0, 2.0);
/// assert!((i - 8.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Transfer term of the parallel-axis theorem, `A·d²`
#[inline]
pub fn parallel_axis_term(area: f64, distance: f64) -> f64 {
    area * distance * distance
}

/// A piece of a built-up section, located by its centroid height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionPiece {
    /// Area of the piece
    pub area: f64,
    /// Centroid height above the reference line
    pub centroid: f64,
    /// Moment of inertia about the piece's own centroid
    pub inertia: f64,
}

impl SectionPiece {
    pub fn new(area: f64, centroid: f64, inertia: f64) -> Self {
        Self { area, centroid, inertia }
    }

    /// Rectangle of width `b` and height `h` whose centroid sits at `centroid`
    pub fn rectangle(b: f64, h: f64, centroid: f64) -> Self {
        Self::new(rectangular_area(b, h), centroid, rectangular_moment_of_inertia(b, h))
    }

    /// First moment about the reference line, `A·y`
    pub fn first_moment(&self) -> f64 {
        self.area * self.centroid
    }
}

/// Combine pieces into one, returning total area, combined centroid and the
/// moment of inertia about that centroid.
///
/// Returns `None` when the total area is zero, since no centroid exists.
///
/// # Example
/// ```rust
/// use composite_core::equations::section::{combine_pieces, SectionPiece};
///
/// // Two equal squares stacked: combined centroid halfway between them
/// let lower = SectionPiece::rectangle(1.0, 1.0, 0.5);
/// let upper = SectionPiece::rectangle(1.0, 1.0, 1.5);
/// let combined = combine_pieces(&[lower, upper]).unwrap();
/// assert!((combined.centroid - 1.0).abs() < 1e-12);
/// // Equivalent to one 1x2 rectangle: 1*8/12
/// assert!((combined.inertia - 8.0 / 12.0).abs() < 1e-12);
/// ```
pub fn combine_pieces(pieces: &[SectionPiece]) -> Option<SectionPiece> {
    let area: f64 = pieces.iter().map(|p| p.area).sum();
    if area <= 0.0 {
        return None;
    }
    let centroid = pieces.iter().map(SectionPiece::first_moment).sum::<f64>() / area;
    let inertia = pieces
        .iter()
        .map(|p| p.inertia + parallel_axis_term(p.area, p.centroid - centroid))
        .sum();
    Some(SectionPiece::new(area, centroid, inertia))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_properties() {
        assert!((rectangular_area(9.689, 2.5) - 24.2225).abs() < 1e-9);
        assert!((rectangular_moment_of_inertia(6.0, 3.0) - 13.5).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_axis() {
        assert!((parallel_axis_term(10.0, 3.0) - 90.0).abs() < 1e-12);
        assert_eq!(parallel_axis_term(10.0, -3.0), parallel_axis_term(10.0, 3.0));
    }

    #[test]
    fn test_combine_single_piece_is_identity() {
        let piece = SectionPiece::rectangle(4.0, 2.0, 10.0);
        let combined = combine_pieces(&[piece]).unwrap();
        assert!((combined.area - piece.area).abs() < 1e-12);
        assert!((combined.centroid - 10.0).abs() < 1e-12);
        assert!((combined.inertia - piece.inertia).abs() < 1e-12);
    }

    #[test]
    fn test_combine_zero_area() {
        assert!(combine_pieces(&[]).is_none());
        assert!(combine_pieces(&[SectionPiece::new(0.0, 1.0, 0.0)]).is_none());
    }
}
