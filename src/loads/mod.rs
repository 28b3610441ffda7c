//! Load model and load combinations
//!
//! # Overview
//!
//! - [`PointLoad`] - Concentrated transverse force or applied couple
//! - [`DistLoad`] - Linearly varying (trapezoidal) distributed load
//! - [`LoadType`] - ASCE 7 load categories (D, L, Lr, S, R, W, E)
//! - [`LoadCombination`] - One factored combination row
//! - [`DesignMethod`] - ASD vs LRFD table selection
//!
//! Sign convention follows the analysis engine: downward forces are entered
//! negative, sagging moment comes out positive, downward deflection comes
//! out negative.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{DistLoad, LoadType, PointLoad};
//!
//! // 2 kip downward force at midspan of a 12 ft beam, categorized Live
//! let p = PointLoad::shear(6.0, -2000.0).with_category(LoadType::Live);
//! assert_eq!(p.category(), Some(LoadType::Live));
//!
//! // 50 plf downward uniform load over the full span, categorized Dead
//! let w = DistLoad::uniform(0.0, 12.0, -50.0).with_category(LoadType::Dead);
//! assert_eq!(w.resultant(), -600.0);
//! assert_eq!(w.centroid(), Some(6.0));
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{asce7_asd_combinations, asce7_lrfd_combinations, LoadCombination};
pub use load_types::LoadType;

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Design methodology selection
///
/// Picks which ASCE 7-22 combination table the sweep driver iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DesignMethod {
    /// Allowable Stress Design - service-level load factors
    #[default]
    Asd,
    /// Load and Resistance Factor Design - strength-level load factors
    Lrfd,
}

impl DesignMethod {
    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            DesignMethod::Asd => "ASD",
            DesignMethod::Lrfd => "LRFD",
        }
    }

    /// The combination table for this method
    pub fn combinations(&self) -> &'static [LoadCombination] {
        match self {
            DesignMethod::Asd => asce7_asd_combinations(),
            DesignMethod::Lrfd => asce7_lrfd_combinations(),
        }
    }
}

impl std::fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A concentrated load at a single position
///
/// Two payload shapes: a transverse force (`Shear`) producing a step in the
/// shear diagram, and an applied couple (`Moment`) producing a step in the
/// moment diagram. Magnitudes are signed; positions are measured from the
/// beam's left end.
///
/// # JSON Format
/// ```json
/// { "kind": "Shear", "position": 6.0, "magnitude": -2000.0, "category": "Live" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PointLoad {
    /// Transverse force (force units)
    Shear {
        position: f64,
        magnitude: f64,
        #[serde(default)]
        category: Option<LoadType>,
    },
    /// Applied couple (force·length units)
    Moment {
        position: f64,
        magnitude: f64,
        #[serde(default)]
        category: Option<LoadType>,
    },
}

impl PointLoad {
    /// Create an uncategorized transverse force
    pub fn shear(position: f64, magnitude: f64) -> Self {
        PointLoad::Shear {
            position,
            magnitude,
            category: None,
        }
    }

    /// Create an uncategorized applied couple
    pub fn moment(position: f64, magnitude: f64) -> Self {
        PointLoad::Moment {
            position,
            magnitude,
            category: None,
        }
    }

    /// Attach an ASCE 7 category (builder pattern)
    pub fn with_category(mut self, load_type: LoadType) -> Self {
        match &mut self {
            PointLoad::Shear { category, .. } | PointLoad::Moment { category, .. } => {
                *category = Some(load_type)
            }
        }
        self
    }

    /// Position measured from the beam's left end
    pub fn position(&self) -> f64 {
        match self {
            PointLoad::Shear { position, .. } | PointLoad::Moment { position, .. } => *position,
        }
    }

    /// Signed magnitude
    pub fn magnitude(&self) -> f64 {
        match self {
            PointLoad::Shear { magnitude, .. } | PointLoad::Moment { magnitude, .. } => *magnitude,
        }
    }

    /// Category used for combination factoring, if any
    pub fn category(&self) -> Option<LoadType> {
        match self {
            PointLoad::Shear { category, .. } | PointLoad::Moment { category, .. } => *category,
        }
    }

    /// Check position and magnitude against the beam length
    pub fn validate(&self, beam_length: f64) -> BeamResult<()> {
        let d = self.position();
        if !d.is_finite() || d < 0.0 || d > beam_length {
            return Err(BeamError::invalid_input(
                "point_load.position",
                d.to_string(),
                format!("position must lie within [0, {beam_length}]"),
            ));
        }
        if !self.magnitude().is_finite() {
            return Err(BeamError::invalid_input(
                "point_load.magnitude",
                self.magnitude().to_string(),
                "magnitude must be finite",
            ));
        }
        Ok(())
    }
}

/// A linearly varying (trapezoidal) distributed load
///
/// Intensity runs from `start_magnitude` at `start` to `end_magnitude` at
/// `end` (force-per-length units). Uniform and triangular loads are the
/// equal- and zero-ended special cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistLoad {
    /// Span start, measured from the beam's left end
    pub start: f64,

    /// Span end, measured from the beam's left end
    pub end: f64,

    /// Intensity at `start` (force/length)
    pub start_magnitude: f64,

    /// Intensity at `end` (force/length)
    pub end_magnitude: f64,

    /// Category used for combination factoring, if any
    #[serde(default)]
    pub category: Option<LoadType>,
}

impl DistLoad {
    /// Create an uncategorized trapezoidal load
    pub fn new(start: f64, end: f64, start_magnitude: f64, end_magnitude: f64) -> Self {
        DistLoad {
            start,
            end,
            start_magnitude,
            end_magnitude,
            category: None,
        }
    }

    /// Create a uniform load of constant intensity
    pub fn uniform(start: f64, end: f64, magnitude: f64) -> Self {
        DistLoad::new(start, end, magnitude, magnitude)
    }

    /// Attach an ASCE 7 category (builder pattern)
    pub fn with_category(mut self, load_type: LoadType) -> Self {
        self.category = Some(load_type);
        self
    }

    /// Loaded span length
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Total load: area of the intensity trapezoid
    pub fn resultant(&self) -> f64 {
        (self.start_magnitude + self.end_magnitude) / 2.0 * self.span()
    }

    /// Centroid of the load measured from the beam's left end
    ///
    /// `None` when the intensities sum to zero (a pure reversal load has no
    /// defined centroid). Such loads also have zero resultant, so the engine
    /// never needs the centroid for them.
    pub fn centroid(&self) -> Option<f64> {
        let sum = self.start_magnitude + self.end_magnitude;
        if sum == 0.0 {
            return None;
        }
        Some(self.start + (self.start_magnitude + 2.0 * self.end_magnitude) / (3.0 * sum) * self.span())
    }

    /// Check span and intensities against the beam length
    pub fn validate(&self, beam_length: f64) -> BeamResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start >= self.end {
            return Err(BeamError::invalid_input(
                "dist_load.start/end",
                format!("{}/{}", self.start, self.end),
                "load span must satisfy start < end",
            ));
        }
        if self.start < 0.0 || self.end > beam_length {
            return Err(BeamError::invalid_input(
                "dist_load.start/end",
                format!("{}/{}", self.start, self.end),
                format!("load span must lie within [0, {beam_length}]"),
            ));
        }
        if !self.start_magnitude.is_finite() || !self.end_magnitude.is_finite() {
            return Err(BeamError::invalid_input(
                "dist_load.magnitude",
                format!("{}/{}", self.start_magnitude, self.end_magnitude),
                "intensities must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_method_default_and_tables() {
        assert_eq!(DesignMethod::default(), DesignMethod::Asd);
        assert!(!DesignMethod::Asd.combinations().is_empty());
        assert!(!DesignMethod::Lrfd.combinations().is_empty());
        assert_eq!(DesignMethod::Lrfd.code(), "LRFD");
    }

    #[test]
    fn test_point_load_accessors() {
        let p = PointLoad::shear(3.0, -500.0).with_category(LoadType::Snow);
        assert_eq!(p.position(), 3.0);
        assert_eq!(p.magnitude(), -500.0);
        assert_eq!(p.category(), Some(LoadType::Snow));

        let m = PointLoad::moment(5.0, 1200.0);
        assert_eq!(m.category(), None);
        assert_eq!(m.magnitude(), 1200.0);
    }

    #[test]
    fn test_point_load_validation() {
        assert!(PointLoad::shear(5.0, -1.0).validate(10.0).is_ok());
        assert!(PointLoad::shear(10.0, -1.0).validate(10.0).is_ok());
        assert!(PointLoad::shear(-0.1, -1.0).validate(10.0).is_err());
        assert!(PointLoad::shear(10.1, -1.0).validate(10.0).is_err());
        assert!(PointLoad::shear(5.0, f64::NAN).validate(10.0).is_err());
    }

    #[test]
    fn test_point_load_serde_tag() {
        let p = PointLoad::moment(5.0, 1200.0);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"kind\":\"Moment\""));
        let parsed: PointLoad = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn test_dist_load_resultant_and_centroid() {
        // Uniform: centroid at the middle of the loaded span
        let w = DistLoad::uniform(2.0, 8.0, -100.0);
        assert_eq!(w.span(), 6.0);
        assert_eq!(w.resultant(), -600.0);
        assert_eq!(w.centroid(), Some(5.0));

        // Triangular ramp from 0 to w: centroid at 2/3 of the span
        let t = DistLoad::new(0.0, 9.0, 0.0, -100.0);
        assert_eq!(t.resultant(), -450.0);
        assert_eq!(t.centroid(), Some(6.0));
    }

    #[test]
    fn test_dist_load_zero_sum_has_no_centroid() {
        let reversal = DistLoad::new(0.0, 4.0, -100.0, 100.0);
        assert_eq!(reversal.resultant(), 0.0);
        assert_eq!(reversal.centroid(), None);
    }

    #[test]
    fn test_dist_load_validation() {
        assert!(DistLoad::uniform(0.0, 10.0, -50.0).validate(10.0).is_ok());
        assert!(DistLoad::uniform(4.0, 4.0, -50.0).validate(10.0).is_err());
        assert!(DistLoad::uniform(6.0, 4.0, -50.0).validate(10.0).is_err());
        assert!(DistLoad::uniform(-1.0, 4.0, -50.0).validate(10.0).is_err());
        assert!(DistLoad::uniform(0.0, 11.0, -50.0).validate(10.0).is_err());
    }
}
