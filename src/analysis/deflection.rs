//! Boundary-value solver for rotation and deflection
//!
//! Rotation is the cumulative trapezoidal integral of curvature (M/EI),
//! deflection the cumulative trapezoidal integral of rotation, shifted so
//! the left support sits at exactly zero. The unknown initial rotation is
//! found by a shooting method: guess, integrate, and compare the deflection
//! at the right support against zero.
//!
//! For a cantilever the initial rotation is zero by definition (fixed end),
//! so no search runs.

use crate::beam::{Beam, SupportMode};
use crate::grid::Grid;

/// Rotation curve for a given initial rotation at the left boundary.
pub(crate) fn rotation_curve(beam: &Beam, grid: &Grid, moment: &[f64], rot: f64) -> Vec<f64> {
    let h = grid.spacing;
    let mut rotation = vec![0.0; moment.len()];
    rotation[0] = rot;
    for i in 1..rotation.len() {
        rotation[i] = rotation[i - 1] + h / beam.ei * (moment[i - 1] + moment[i]) / 2.0;
    }
    rotation
}

/// Deflection curve from a rotation curve, shifted so the left support
/// deflects exactly zero.
pub(crate) fn deflection_curve(grid: &Grid, rotation: &[f64]) -> Vec<f64> {
    let h = grid.spacing;
    let mut deflection = vec![0.0; rotation.len()];
    for i in 1..deflection.len() {
        deflection[i] = deflection[i - 1] + h * (rotation[i - 1] + rotation[i]) / 2.0;
    }
    let shift = deflection[grid.support_index_left];
    for v in deflection.iter_mut() {
        *v -= shift;
    }
    deflection
}

/// Deflection at the right support for a trial initial rotation.
fn right_support_deflection(beam: &Beam, grid: &Grid, moment: &[f64], rot: f64) -> f64 {
    let rotation = rotation_curve(beam, grid, moment, rot);
    let deflection = deflection_curve(grid, &rotation);
    deflection[grid.support_index_right]
}

/// Find the initial rotation satisfying the right-support boundary condition.
///
/// Fixed-step bracketing walk: evaluate the boundary residual for trial
/// rotations {-delta, 0, +delta} with `delta = rot_delta / EI`, pick the
/// direction that improves the residual magnitude, then step until a step
/// stops improving and return the rotation one step back. The result is
/// therefore within `delta` of the exact root; a smaller `rot_delta` buys
/// precision at the cost of more steps.
pub(crate) fn solve_initial_rotation(
    beam: &Beam,
    grid: &Grid,
    moment: &[f64],
    rot_delta: f64,
) -> f64 {
    if beam.support == SupportMode::Cantilever {
        return 0.0;
    }

    let delta = rot_delta / beam.ei;
    let def_minus = right_support_deflection(beam, grid, moment, -delta);
    let def_zero = right_support_deflection(beam, grid, moment, 0.0);
    let def_plus = right_support_deflection(beam, grid, moment, delta);

    if def_zero == 0.0 {
        return 0.0;
    }
    let (direction, first_trial) = if def_minus.abs() < def_plus.abs() {
        (-1.0, def_minus)
    } else if def_minus.abs() > def_plus.abs() {
        (1.0, def_plus)
    } else {
        // Both side trials tie: rotation does not move the residual
        return 0.0;
    };

    let mut def_last = def_zero;
    let mut def_test = first_trial;
    let mut rot = delta * direction;
    while def_test.abs() < def_last.abs() {
        def_last = def_test;
        rot += delta * direction;
        def_test = right_support_deflection(beam, grid, moment, rot);
    }
    rot - delta * direction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::superposition::point_load_pass;
    use crate::beam::DiscretizationConfig;
    use crate::loads::PointLoad;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_cantilever_skips_search() {
        let beam = Beam::cantilever(8.0, 1.0e6).unwrap();
        let config = DiscretizationConfig::default().with_sections(256);
        let grid = Grid::generate(&beam, &config).unwrap();
        let loads = [PointLoad::shear(8.0, -100.0)];
        let (_, moment) = point_load_pass(&beam, &grid, &loads, None);

        assert_eq!(solve_initial_rotation(&beam, &grid, &moment, 1.0e-4), 0.0);
    }

    #[test]
    fn test_unloaded_beam_returns_zero_rotation() {
        let beam = Beam::simply_supported(8.0, 1.0e6).unwrap();
        let config = DiscretizationConfig::default().with_sections(128);
        let grid = Grid::generate(&beam, &config).unwrap();
        let moment = vec![0.0; grid.len()];

        assert_eq!(solve_initial_rotation(&beam, &grid, &moment, 1.0e-4), 0.0);
    }

    #[test]
    fn test_search_finds_symmetric_slope() {
        // Central point load: exact end slope is P*L^2/(16*EI)
        let ei = 1.0e6;
        let beam = Beam::simply_supported(8.0, ei).unwrap();
        let config = DiscretizationConfig::default().with_sections(512);
        let grid = Grid::generate(&beam, &config).unwrap();
        let loads = [PointLoad::shear(4.0, -200.0)];
        let (_, moment) = point_load_pass(&beam, &grid, &loads, None);

        // Step 5e-8 against a root near -8e-4: ~16k walk steps
        let rot_delta = 5.0e-2;
        let delta = rot_delta / ei;
        let rot = solve_initial_rotation(&beam, &grid, &moment, rot_delta);

        // Downward load sags the beam: negative slope at the left end.
        // Tolerance covers the search resolution plus the O(h) shift of the
        // sampled moment diagram against the closed form.
        let expected = -200.0 * 64.0 / (16.0 * ei); // -8.0e-4
        assert!(
            approx_eq(rot, expected, 1.0e-5),
            "rot = {rot}, expected ~{expected}"
        );

        // Boundary condition satisfied to within the search resolution
        let rotation = rotation_curve(&beam, &grid, &moment, rot);
        let deflection = deflection_curve(&grid, &rotation);
        assert_eq!(deflection[grid.support_index_left], 0.0);
        assert!(deflection[grid.support_index_right].abs() < beam.support_span() * 2.0 * delta);
    }

    #[test]
    fn test_left_support_rezeroing_with_interior_supports() {
        // Supports away from the beam ends: the shift must zero the left
        // support sample, not the first sample
        let beam = Beam::with_supports(10.0, 1.0e6, 2.0, 10.0).unwrap();
        let config = DiscretizationConfig::default().with_sections(100);
        let grid = Grid::generate(&beam, &config).unwrap();
        let loads = [PointLoad::shear(6.0, -100.0)];
        let (_, moment) = point_load_pass(&beam, &grid, &loads, None);

        let rotation = rotation_curve(&beam, &grid, &moment, 1.0e-5);
        let deflection = deflection_curve(&grid, &rotation);
        assert_eq!(deflection[grid.support_index_left], 0.0);
    }
}
