//! Sampled position grid
//!
//! The analysis works on `sections + 1` evenly spaced positions spanning
//! `[0, length]` inclusive. The grid also records which sample sits nearest
//! each support; the boundary-value solver enforces its zero-deflection
//! conditions at those indices.

use serde::{Deserialize, Serialize};

use crate::beam::{Beam, DiscretizationConfig};
use crate::errors::BeamResult;

/// Uniformly sampled positions along the beam, plus support sample indices
///
/// # Example
/// ```rust
/// use beam_core::beam::{Beam, DiscretizationConfig};
/// use beam_core::grid::Grid;
///
/// let beam = Beam::simply_supported(10.0, 1.0e6).unwrap();
/// let config = DiscretizationConfig::default().with_sections(100);
/// let grid = Grid::generate(&beam, &config).unwrap();
///
/// assert_eq!(grid.positions.len(), 101);
/// assert_eq!(grid.spacing, 0.1);
/// assert_eq!(grid.support_index_left, 0);
/// assert_eq!(grid.support_index_right, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Sample positions from 0 to the beam length, inclusive
    pub positions: Vec<f64>,

    /// Uniform spacing between samples (`length / sections`)
    pub spacing: f64,

    /// Index of the sample nearest the left support
    pub support_index_left: usize,

    /// Index of the sample nearest the right support
    pub support_index_right: usize,
}

impl Grid {
    /// Build the sampled grid for a normalized beam
    ///
    /// Fails if the discretization has fewer than one section. The last
    /// sample is pinned to the exact beam length so loads applied at the
    /// free/right end always register on the final sample.
    pub fn generate(beam: &Beam, config: &DiscretizationConfig) -> BeamResult<Grid> {
        config.validate()?;

        let n = config.sections;
        let spacing = beam.length / n as f64;
        let positions: Vec<f64> = (0..=n)
            .map(|i| {
                if i == n {
                    beam.length
                } else {
                    i as f64 * spacing
                }
            })
            .collect();

        let support_index_left = nearest_index(&positions, beam.support_left);
        let support_index_right = nearest_index(&positions, beam.support_right);

        Ok(Grid {
            positions,
            spacing,
            support_index_left,
            support_index_right,
        })
    }

    /// Number of samples (`sections + 1`)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the grid holds no samples (cannot occur for a generated grid)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Index of the position closest to `target`; ties resolve to the first
/// (lowest) index, so results are deterministic.
fn nearest_index(positions: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &x) in positions.iter().enumerate() {
        let dist = (x - target).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
