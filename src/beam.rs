//! Beam geometry and discretization parameters
//!
//! A [`Beam`] describes a straight prismatic member with constant flexural
//! rigidity and one of two support conditions:
//!
//! - **Simply supported**: two point supports at `support_left` / `support_right`
//! - **Cantilever**: fixed at the left end (position 0), free at the right
//!
//! All positions and lengths use one consistent length unit, and `ei` uses
//! the matching force·length² unit. The engine never converts units.
//!
//! ## Example
//! ```rust
//! use beam_core::beam::{Beam, DiscretizationConfig};
//!
//! let beam = Beam::simply_supported(12.0, 1.0e8).unwrap();
//! assert_eq!(beam.support_span(), 12.0);
//!
//! let config = DiscretizationConfig::default().with_sections(500);
//! assert_eq!(config.sections, 500);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Support condition of the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SupportMode {
    /// Two point supports; both deflect to zero
    #[default]
    SimplySupported,
    /// Fixed at position 0 (zero rotation and deflection), free at the far end
    Cantilever,
}

impl SupportMode {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportMode::SimplySupported => "Simply supported",
            SupportMode::Cantilever => "Cantilever",
        }
    }
}

/// Beam geometry and stiffness
///
/// Construct through [`Beam::simply_supported`], [`Beam::with_supports`] or
/// [`Beam::cantilever`]; all constructors normalize the support positions and
/// reject invalid geometry up front. After normalization the invariant
/// `0 <= support_left <= support_right <= length` holds, and for the
/// simply-supported mode the two supports are strictly apart.
///
/// # JSON Format
/// ```json
/// {
///   "length": 12.0,
///   "ei": 100000000.0,
///   "support": "SimplySupported",
///   "support_left": 0.0,
///   "support_right": 12.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Total beam length (length units)
    pub length: f64,

    /// Flexural rigidity E*I (force·length² units)
    pub ei: f64,

    /// Support condition
    pub support: SupportMode,

    /// Left support position, measured from the left end
    pub support_left: f64,

    /// Right support position, measured from the left end
    pub support_right: f64,
}

impl Beam {
    /// Create a beam with explicit support mode and positions
    ///
    /// Support positions are normalized per the mode before validation; see
    /// [`Beam::normalized`].
    pub fn new(
        length: f64,
        ei: f64,
        support: SupportMode,
        support_left: f64,
        support_right: f64,
    ) -> BeamResult<Self> {
        Beam {
            length,
            ei,
            support,
            support_left,
            support_right,
        }
        .normalized()
    }

    /// Create a simply-supported beam with supports at both ends
    pub fn simply_supported(length: f64, ei: f64) -> BeamResult<Self> {
        Beam::new(length, ei, SupportMode::SimplySupported, 0.0, length)
    }

    /// Create a simply-supported beam with supports at arbitrary positions
    /// (overhangs on either side are allowed)
    pub fn with_supports(
        length: f64,
        ei: f64,
        support_left: f64,
        support_right: f64,
    ) -> BeamResult<Self> {
        Beam::new(
            length,
            ei,
            SupportMode::SimplySupported,
            support_left,
            support_right,
        )
    }

    /// Create a cantilever fixed at position 0
    pub fn cantilever(length: f64, ei: f64) -> BeamResult<Self> {
        Beam::new(length, ei, SupportMode::Cantilever, 0.0, length)
    }

    /// Normalize support positions and validate the geometry
    ///
    /// Cantilever mode forces `support_left = 0` and `support_right = length`
    /// regardless of the stored values. Simply-supported mode clamps the
    /// supports into `[0, length]` and requires them to remain strictly
    /// apart (the reaction computation divides by the support span).
    pub fn normalized(mut self) -> BeamResult<Self> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(BeamError::invalid_input(
                "length",
                self.length.to_string(),
                "beam length must be positive and finite",
            ));
        }
        if !self.ei.is_finite() || self.ei <= 0.0 {
            return Err(BeamError::invalid_input(
                "ei",
                self.ei.to_string(),
                "flexural rigidity must be positive and finite",
            ));
        }

        match self.support {
            SupportMode::Cantilever => {
                self.support_left = 0.0;
                self.support_right = self.length;
            }
            SupportMode::SimplySupported => {
                if !self.support_left.is_finite() || !self.support_right.is_finite() {
                    return Err(BeamError::invalid_input(
                        "support_left/support_right",
                        format!("{}/{}", self.support_left, self.support_right),
                        "support positions must be finite",
                    ));
                }
                self.support_left = self.support_left.max(0.0);
                self.support_right = self.support_right.min(self.length);
                if self.support_left >= self.support_right {
                    return Err(BeamError::invalid_input(
                        "support_right",
                        self.support_right.to_string(),
                        "simply-supported beams need two distinct supports with left < right",
                    ));
                }
            }
        }

        Ok(self)
    }

    /// Distance between the two supports
    pub fn support_span(&self) -> f64 {
        self.support_right - self.support_left
    }
}

/// Discretization parameters for the sampled analysis grid
///
/// The beam is sampled at `sections + 1` evenly spaced positions. `rot_delta`
/// scales the step of the initial-rotation search in the boundary-value
/// solver: the actual step is `rot_delta / ei`, so the search precision (and
/// its cost) is independent of the beam stiffness.
///
/// # Example
/// ```rust
/// use beam_core::beam::DiscretizationConfig;
///
/// let config = DiscretizationConfig::default();
/// assert_eq!(config.sections, 1000);
/// assert_eq!(config.rot_delta, 1.0e-4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscretizationConfig {
    /// Number of integration sections (grid has `sections + 1` samples)
    pub sections: usize,

    /// Rotation search step scale (multiplied by `1/ei` to get the step)
    pub rot_delta: f64,
}

impl Default for DiscretizationConfig {
    fn default() -> Self {
        DiscretizationConfig {
            sections: 1000,
            rot_delta: 1.0e-4,
        }
    }
}

impl DiscretizationConfig {
    /// Set the number of integration sections (builder pattern)
    pub fn with_sections(mut self, sections: usize) -> Self {
        self.sections = sections;
        self
    }

    /// Set the rotation search step scale (builder pattern)
    pub fn with_rot_delta(mut self, rot_delta: f64) -> Self {
        self.rot_delta = rot_delta;
        self
    }

    /// Validate the discretization parameters
    pub fn validate(&self) -> BeamResult<()> {
        if self.sections < 1 {
            return Err(BeamError::invalid_input(
                "sections",
                self.sections.to_string(),
                "at least one integration section is required",
            ));
        }
        if !self.rot_delta.is_finite() || self.rot_delta <= 0.0 {
            return Err(BeamError::invalid_input(
                "rot_delta",
                self.rot_delta.to_string(),
                "rotation search step scale must be positive and finite",
            ));
        }
        Ok(())
    }
}
