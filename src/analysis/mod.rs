//! # Beam Analysis Pipeline
//!
//! The full analysis runs in four steps:
//!
//! 1. Validate the beam, discretization, and every load (fail fast, before
//!    any array work)
//! 2. Build the sampled [`Grid`]
//! 3. Superpose all load contributions into shear and moment arrays
//! 4. Solve the boundary-value problem for rotation and deflection
//!
//! [`analyze`] runs the whole pipeline once (optionally under a single
//! combination row); [`sweep_combinations`] repeats the superposition step
//! across a full ASD/LRFD table and envelopes the extremes.
//!
//! Results are recomputed fresh on every call and owned by the caller;
//! nothing is cached.

pub mod deflection;
pub mod envelope;
pub mod superposition;

pub use envelope::{sweep_combinations, CombinationSweep, ComboExtremes, Governing};

use serde::{Deserialize, Serialize};

use crate::beam::{Beam, DiscretizationConfig};
use crate::errors::{BeamError, BeamResult};
use crate::grid::Grid;
use crate::loads::{DistLoad, LoadCombination, PointLoad};

/// An extreme value and the position where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    /// Signed value at the extreme
    pub value: f64,
    /// Position measured from the beam's left end
    pub position: f64,
}

/// Complete analysis output: parallel arrays over the sampled grid
///
/// `shear`, `moment`, `rotation`, and `deflection` are indexed consistently
/// with `grid.positions`. The tracked extremes save consumers a re-scan when
/// formatting summaries or scaling diagrams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The sampled grid the arrays are defined over
    pub grid: Grid,

    /// Internal shear at each sample (force units)
    pub shear: Vec<f64>,

    /// Internal bending moment at each sample (force·length units)
    pub moment: Vec<f64>,

    /// Slope of the deflected shape at each sample (radians)
    pub rotation: Vec<f64>,

    /// Transverse displacement at each sample (length units, downward negative)
    pub deflection: Vec<f64>,

    /// Largest shear value and its position
    pub max_shear: Extreme,
    /// Smallest shear value and its position
    pub min_shear: Extreme,
    /// Largest moment value and its position
    pub max_moment: Extreme,
    /// Smallest moment value and its position
    pub min_moment: Extreme,
    /// Largest deflection value and its position
    pub max_deflection: Extreme,
    /// Smallest deflection value and its position
    pub min_deflection: Extreme,
}

/// Analyze a beam under the given loads
///
/// When `combination` is provided, every categorized load is scaled by the
/// row's factor for its category before superposition; uncategorized loads
/// always carry factor 1. Pass `None` for an unfactored (service-level)
/// analysis.
///
/// # Example
/// ```rust
/// use beam_core::analysis::analyze;
/// use beam_core::beam::{Beam, DiscretizationConfig};
/// use beam_core::loads::PointLoad;
///
/// // 1 ft simply-supported beam, 2 lb downward at midspan
/// let beam = Beam::simply_supported(1.0, 2.9e8).unwrap();
/// let config = DiscretizationConfig::default();
/// let loads = [PointLoad::shear(0.5, -2.0)];
///
/// let result = analyze(&beam, &config, &loads, &[], None).unwrap();
/// assert!((result.max_moment.value - 0.5).abs() < 0.01); // P*L/4
/// ```
pub fn analyze(
    beam: &Beam,
    config: &DiscretizationConfig,
    point_loads: &[PointLoad],
    dist_loads: &[DistLoad],
    combination: Option<&LoadCombination>,
) -> BeamResult<AnalysisResult> {
    let beam = beam.clone().normalized()?;
    config.validate()?;
    for load in point_loads {
        load.validate(beam.length)?;
    }
    for load in dist_loads {
        load.validate(beam.length)?;
    }

    let grid = Grid::generate(&beam, config)?;
    let (shear, moment) =
        superposition::superpose(&beam, &grid, point_loads, dist_loads, combination);

    if !shear.iter().chain(moment.iter()).all(|v| v.is_finite()) {
        return Err(BeamError::calculation_failed(
            "superposition",
            "non-finite value in shear/moment arrays",
        ));
    }

    let rot = deflection::solve_initial_rotation(&beam, &grid, &moment, config.rot_delta);
    let rotation = deflection::rotation_curve(&beam, &grid, &moment, rot);
    let defl = deflection::deflection_curve(&grid, &rotation);

    let (max_shear, min_shear) = extremes(&grid, &shear);
    let (max_moment, min_moment) = extremes(&grid, &moment);
    let (max_deflection, min_deflection) = extremes(&grid, &defl);

    Ok(AnalysisResult {
        grid,
        shear,
        moment,
        rotation,
        deflection: defl,
        max_shear,
        min_shear,
        max_moment,
        min_moment,
        max_deflection,
        min_deflection,
    })
}

/// Max and min of an array with their positions; ties resolve to the first
/// (leftmost) sample.
fn extremes(grid: &Grid, values: &[f64]) -> (Extreme, Extreme) {
    let mut max = Extreme {
        value: f64::NEG_INFINITY,
        position: 0.0,
    };
    let mut min = Extreme {
        value: f64::INFINITY,
        position: 0.0,
    };
    for (i, &v) in values.iter().enumerate() {
        if v > max.value {
            max = Extreme {
                value: v,
                position: grid.positions[i],
            };
        }
        if v < min.value {
            min = Extreme {
                value: v,
                position: grid.positions[i],
            };
        }
    }
    (max, min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{LoadCombination, LoadType};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_central_load_symmetry_and_support_deflection() {
        let ei = 1.0e6;
        let beam = Beam::simply_supported(8.0, ei).unwrap();
        let config = DiscretizationConfig::default()
            .with_sections(512)
            .with_rot_delta(5.0e-2);
        let loads = [PointLoad::shear(4.0, -200.0)];

        let result = analyze(&beam, &config, &loads, &[], None).unwrap();

        // Reactions split evenly: shear diagram runs +P/2 / -P/2
        assert!(approx_eq(result.max_shear.value, 100.0, 1e-9));
        assert!(approx_eq(result.min_shear.value, -100.0, 1e-9));

        // Both supports deflect to zero within the search resolution
        let delta = config.rot_delta / ei;
        let tol = beam.support_span() * 2.0 * delta;
        assert_eq!(result.deflection[result.grid.support_index_left], 0.0);
        assert!(result.deflection[result.grid.support_index_right].abs() < tol);

        // Midspan deflection near the closed form P*L^3/(48*EI), downward
        let expected = -200.0 * 512.0 / (48.0 * ei);
        assert!(
            approx_eq(result.min_deflection.value, expected, 2.0e-4),
            "got {}, expected ~{}",
            result.min_deflection.value,
            expected
        );
        assert!(approx_eq(result.min_deflection.position, 4.0, 0.1));
    }

    #[test]
    fn test_cantilever_tip_deflection_converges() {
        // Tip load: exact tip deflection m*L^3/(3*EI); trapezoidal
        // integration converges at O(1/N^2)
        let ei = 1.0e6;
        let length: f64 = 8.0;
        let m = -100.0;
        let exact = m * length.powi(3) / (3.0 * ei);

        let beam = Beam::cantilever(length, ei).unwrap();
        let loads = [PointLoad::shear(length, m)];

        let tip_error = |sections: usize| -> f64 {
            let config = DiscretizationConfig::default().with_sections(sections);
            let result = analyze(&beam, &config, &loads, &[], None).unwrap();
            (result.deflection[result.grid.len() - 1] - exact).abs()
        };

        let coarse = tip_error(128);
        let fine = tip_error(1024);

        assert!(fine < exact.abs() * 1.0e-4, "fine error {fine}");
        // 8x finer grid: error should drop by ~64; allow generous margin
        assert!(fine < coarse / 8.0, "coarse {coarse}, fine {fine}");
    }

    #[test]
    fn test_uniform_load_closed_form_deflection() {
        // 5*w*L^4/(384*EI) at midspan
        let ei = 1.0e6;
        let beam = Beam::simply_supported(4.0, ei).unwrap();
        let config = DiscretizationConfig::default()
            .with_sections(512)
            .with_rot_delta(5.0e-2);
        let loads = [DistLoad::uniform(0.0, 4.0, -100.0)];

        let result = analyze(&beam, &config, &[], &loads, None).unwrap();

        let expected = -5.0 * 100.0 * 256.0 / (384.0 * ei);
        assert!(
            approx_eq(result.min_deflection.value, expected, 5.0e-5),
            "got {}, expected ~{}",
            result.min_deflection.value,
            expected
        );
    }

    #[test]
    fn test_idempotence_bit_identical() {
        let beam = Beam::simply_supported(8.0, 1.0e6).unwrap();
        let config = DiscretizationConfig::default()
            .with_sections(256)
            .with_rot_delta(1.0e-1);
        let point_loads = [PointLoad::shear(3.0, -500.0), PointLoad::moment(5.0, 400.0)];
        let dist_loads = [DistLoad::new(1.0, 7.0, -20.0, -80.0)];

        let a = analyze(&beam, &config, &point_loads, &dist_loads, None).unwrap();
        let b = analyze(&beam, &config, &point_loads, &dist_loads, None).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_superposition_linearity_of_arrays() {
        let beam = Beam::cantilever(8.0, 1.0e6).unwrap();
        let config = DiscretizationConfig::default().with_sections(256);
        let a = [PointLoad::shear(3.0, -500.0)];
        let b = [PointLoad::shear(8.0, -200.0)];
        let both = [a[0].clone(), b[0].clone()];

        let ra = analyze(&beam, &config, &a, &[], None).unwrap();
        let rb = analyze(&beam, &config, &b, &[], None).unwrap();
        let rab = analyze(&beam, &config, &both, &[], None).unwrap();

        for i in 0..rab.grid.len() {
            assert!(approx_eq(rab.shear[i], ra.shear[i] + rb.shear[i], 1e-9));
            assert!(approx_eq(rab.moment[i], ra.moment[i] + rb.moment[i], 1e-6));
        }
    }

    #[test]
    fn test_factored_analysis_scales_result() {
        let beam = Beam::cantilever(8.0, 1.0e6).unwrap();
        let config = DiscretizationConfig::default().with_sections(256);
        let loads = [PointLoad::shear(8.0, -100.0).with_category(LoadType::Dead)];
        let combo = LoadCombination::new("LRFD-1", "1.4D").with_factor(LoadType::Dead, 1.4);

        let base = analyze(&beam, &config, &loads, &[], None).unwrap();
        let factored = analyze(&beam, &config, &loads, &[], Some(&combo)).unwrap();

        for i in 0..base.grid.len() {
            assert!(approx_eq(factored.shear[i], 1.4 * base.shear[i], 1e-9));
            assert!(approx_eq(factored.moment[i], 1.4 * base.moment[i], 1e-6));
        }
    }

    #[test]
    fn test_invalid_inputs_fail_before_analysis() {
        let beam = Beam::simply_supported(8.0, 1.0e6).unwrap();
        let config = DiscretizationConfig::default();

        // Load past the end of the beam
        let off_beam = [PointLoad::shear(9.0, -100.0)];
        assert!(analyze(&beam, &config, &off_beam, &[], None).is_err());

        // Degenerate discretization
        let bad_config = DiscretizationConfig::default().with_sections(0);
        assert!(analyze(&beam, &bad_config, &[], &[], None).is_err());

        // Backwards distributed load span
        let backwards = [DistLoad::uniform(6.0, 2.0, -50.0)];
        assert!(analyze(&beam, &config, &[], &backwards, None).is_err());
    }

    #[test]
    fn test_zero_resultant_dist_load_analyzes_cleanly() {
        let beam = Beam::simply_supported(8.0, 1.0e6).unwrap();
        let config = DiscretizationConfig::default()
            .with_sections(256)
            .with_rot_delta(1.0e-1);
        let loads = [DistLoad::new(0.0, 8.0, -100.0, 100.0)];

        let result = analyze(&beam, &config, &[], &loads, None).unwrap();
        assert!(result.deflection.iter().all(|v| v.is_finite()));
        assert!(result.moment.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_result_serialization() {
        let beam = Beam::cantilever(4.0, 1.0e6).unwrap();
        let config = DiscretizationConfig::default().with_sections(16);
        let loads = [PointLoad::shear(4.0, -10.0)];

        let result = analyze(&beam, &config, &loads, &[], None).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }
}
