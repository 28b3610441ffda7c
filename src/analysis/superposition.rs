//! Load superposition engine
//!
//! Converts point and distributed loads into shear and moment arrays over
//! the sampled grid. Each pass is a pure function returning fresh arrays:
//! load steps and support reactions are accumulated into shear first, then
//! moment is obtained by cumulative trapezoidal integration of the final
//! combined shear curve, on top of any moment-step contributions placed
//! directly by applied couples.
//!
//! Sign convention: a downward force (negative magnitude) on a simply
//! supported beam produces positive (sagging) internal moment.

use crate::beam::{Beam, SupportMode};
use crate::grid::Grid;
use crate::loads::{DistLoad, LoadCombination, LoadType, PointLoad};

/// Scale factor for one load under an optional combination row.
///
/// Uncategorized loads are never factored; categorized loads take the row's
/// factor for their category (0.0 when the row omits it).
pub(crate) fn load_multiplier(
    category: Option<LoadType>,
    combination: Option<&LoadCombination>,
) -> f64 {
    match (category, combination) {
        (Some(cat), Some(combo)) => combo.factor(cat),
        _ => 1.0,
    }
}

/// Shear and moment contributions of all point loads, reactions included.
pub(crate) fn point_load_pass(
    beam: &Beam,
    grid: &Grid,
    loads: &[PointLoad],
    combination: Option<&LoadCombination>,
) -> (Vec<f64>, Vec<f64>) {
    let mut shear = vec![0.0; grid.len()];
    let mut moment = vec![0.0; grid.len()];

    for load in loads {
        let m = load.magnitude() * load_multiplier(load.category(), combination);
        let d = load.position();

        match load {
            PointLoad::Shear { .. } => {
                for (i, &x) in grid.positions.iter().enumerate() {
                    if x >= d {
                        shear[i] += m;
                    }
                }

                match beam.support {
                    SupportMode::Cantilever => {
                        // Fixed end carries the whole load and its moment about x = 0
                        for v in shear.iter_mut() {
                            *v -= m;
                        }
                        for v in moment.iter_mut() {
                            *v += d * m;
                        }
                    }
                    SupportMode::SimplySupported => {
                        let vr = m * (d - beam.support_left) / beam.support_span();
                        let vl = m - vr;
                        apply_reaction_steps(&mut shear, grid, beam, vl, vr);
                    }
                }
            }
            PointLoad::Moment { .. } => {
                // An applied couple steps the moment diagram, not the shear
                for (i, &x) in grid.positions.iter().enumerate() {
                    if x >= d {
                        moment[i] -= m;
                    }
                }

                match beam.support {
                    SupportMode::Cantilever => {
                        for v in moment.iter_mut() {
                            *v += m;
                        }
                    }
                    SupportMode::SimplySupported => {
                        // Reacted as a shear couple across the supports
                        let vr = m / beam.support_span();
                        let vl = -vr;
                        apply_reaction_steps(&mut shear, grid, beam, vl, vr);
                    }
                }
            }
        }
    }

    integrate_moment(&mut moment, &shear, grid.spacing);
    (shear, moment)
}

/// Shear and moment contributions of all distributed loads, reactions included.
pub(crate) fn dist_load_pass(
    beam: &Beam,
    grid: &Grid,
    loads: &[DistLoad],
    combination: Option<&LoadCombination>,
) -> (Vec<f64>, Vec<f64>) {
    let mut shear = vec![0.0; grid.len()];
    let mut moment = vec![0.0; grid.len()];

    for load in loads {
        let mult = load_multiplier(load.category, combination);
        let ml = load.start_magnitude * mult;
        let mr = load.end_magnitude * mult;
        let len = load.span();
        let mag = (ml + mr) / 2.0 * len;

        for (i, &x) in grid.positions.iter().enumerate() {
            if x >= load.start && x <= load.end {
                let dx = x - load.start;
                shear[i] += ml * dx + dx * dx * (mr - ml) / (2.0 * len);
            } else if x > load.end {
                shear[i] += mag;
            }
        }

        // Zero-resultant loads have no net reaction and no defined centroid
        if mag == 0.0 {
            continue;
        }
        let pos = load.start + (ml + 2.0 * mr) / (3.0 * (ml + mr)) * len;

        match beam.support {
            SupportMode::Cantilever => {
                for v in shear.iter_mut() {
                    *v -= mag;
                }
                for v in moment.iter_mut() {
                    *v += mag * pos;
                }
            }
            SupportMode::SimplySupported => {
                let vr = mag * (pos - beam.support_left) / beam.support_span();
                let vl = mag - vr;
                apply_reaction_steps(&mut shear, grid, beam, vl, vr);
            }
        }
    }

    integrate_moment(&mut moment, &shear, grid.spacing);
    (shear, moment)
}

/// Subtract the support reactions as step discontinuities in shear.
fn apply_reaction_steps(shear: &mut [f64], grid: &Grid, beam: &Beam, vl: f64, vr: f64) {
    for (i, &x) in grid.positions.iter().enumerate() {
        if x >= beam.support_left {
            shear[i] -= vl;
        }
        if x >= beam.support_right {
            shear[i] -= vr;
        }
    }
}

/// Cumulative trapezoidal integration of the combined shear curve, added on
/// top of the moment steps already in place. Must run only once every shear
/// contribution of the pass has been summed.
fn integrate_moment(moment: &mut [f64], shear: &[f64], spacing: f64) {
    let mut sum = 0.0;
    for i in 1..moment.len() {
        sum += (shear[i] + shear[i - 1]) / 2.0 * spacing;
        moment[i] += sum;
    }
}

/// Run both passes and superpose them element-wise.
pub(crate) fn superpose(
    beam: &Beam,
    grid: &Grid,
    point_loads: &[PointLoad],
    dist_loads: &[DistLoad],
    combination: Option<&LoadCombination>,
) -> (Vec<f64>, Vec<f64>) {
    let (p_shear, p_moment) = point_load_pass(beam, grid, point_loads, combination);
    let (d_shear, d_moment) = dist_load_pass(beam, grid, dist_loads, combination);

    let shear = p_shear
        .iter()
        .zip(&d_shear)
        .map(|(a, b)| a + b)
        .collect();
    let moment = p_moment
        .iter()
        .zip(&d_moment)
        .map(|(a, b)| a + b)
        .collect();
    (shear, moment)
}
