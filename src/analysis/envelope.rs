//! Load-combination sweep driver
//!
//! Repeats the superposition step across every row of an ASD or LRFD
//! combination table and envelopes the shear/moment extremes. This is a
//! linear envelope over combinations, not a code check: no capacities are
//! compared, the driver only reports which row governs each metric.
//!
//! Rows are independent of one another; the scan is sequential but carries
//! no state between rows.

use serde::{Deserialize, Serialize};

use crate::beam::{Beam, DiscretizationConfig};
use crate::errors::{BeamError, BeamResult};
use crate::grid::Grid;
use crate::loads::{DesignMethod, DistLoad, PointLoad};

use super::superposition;

/// Shear/moment extremes for one combination row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboExtremes {
    /// Row identifier (e.g., "LRFD-2a")
    pub combination: String,
    /// Human-readable equation for the row
    pub equation: String,
    pub max_shear: f64,
    pub min_shear: f64,
    pub max_moment: f64,
    pub min_moment: f64,
}

/// A governing value and the combination row that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Governing {
    pub value: f64,
    /// Name of the governing combination row
    pub combination: String,
}

/// Envelope over all combination rows of one design method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationSweep {
    /// Design method whose table was swept
    pub method: DesignMethod,
    /// Per-row extremes, in table order
    pub rows: Vec<ComboExtremes>,
    pub max_shear: Governing,
    pub min_shear: Governing,
    pub max_moment: Governing,
    pub min_moment: Governing,
}

/// Sweep every combination row of the selected method and envelope the
/// shear/moment extremes
///
/// Each row reruns the superposition step with per-load multipliers from
/// that row (uncategorized loads always carry factor 1). Deflection is not
/// solved per row: the envelope covers strength metrics only.
///
/// # Example
/// ```rust
/// use beam_core::analysis::sweep_combinations;
/// use beam_core::beam::{Beam, DiscretizationConfig};
/// use beam_core::loads::{DesignMethod, LoadType, PointLoad};
///
/// let beam = Beam::simply_supported(10.0, 1.0e8).unwrap();
/// let config = DiscretizationConfig::default().with_sections(200);
/// let loads = [PointLoad::shear(5.0, -1000.0).with_category(LoadType::Dead)];
///
/// let sweep = sweep_combinations(&beam, &config, &loads, &[], DesignMethod::Lrfd).unwrap();
/// assert_eq!(sweep.max_shear.combination, "LRFD-1"); // 1.4D governs
/// ```
pub fn sweep_combinations(
    beam: &Beam,
    config: &DiscretizationConfig,
    point_loads: &[PointLoad],
    dist_loads: &[DistLoad],
    method: DesignMethod,
) -> BeamResult<CombinationSweep> {
    let beam = beam.clone().normalized()?;
    config.validate()?;
    for load in point_loads {
        load.validate(beam.length)?;
    }
    for load in dist_loads {
        load.validate(beam.length)?;
    }

    let grid = Grid::generate(&beam, config)?;

    let mut rows = Vec::with_capacity(method.combinations().len());
    let mut max_shear = Governing {
        value: f64::NEG_INFINITY,
        combination: String::new(),
    };
    let mut min_shear = Governing {
        value: f64::INFINITY,
        combination: String::new(),
    };
    let mut max_moment = Governing {
        value: f64::NEG_INFINITY,
        combination: String::new(),
    };
    let mut min_moment = Governing {
        value: f64::INFINITY,
        combination: String::new(),
    };

    for combo in method.combinations() {
        let (shear, moment) =
            superposition::superpose(&beam, &grid, point_loads, dist_loads, Some(combo));

        if !shear.iter().chain(moment.iter()).all(|v| v.is_finite()) {
            return Err(BeamError::calculation_failed(
                "combination_sweep",
                format!("non-finite value under combination '{}'", combo.name),
            ));
        }

        let row = ComboExtremes {
            combination: combo.name.clone(),
            equation: combo.equation.clone(),
            max_shear: fold_max(&shear),
            min_shear: fold_min(&shear),
            max_moment: fold_max(&moment),
            min_moment: fold_min(&moment),
        };

        if row.max_shear > max_shear.value {
            max_shear = Governing {
                value: row.max_shear,
                combination: row.combination.clone(),
            };
        }
        if row.min_shear < min_shear.value {
            min_shear = Governing {
                value: row.min_shear,
                combination: row.combination.clone(),
            };
        }
        if row.max_moment > max_moment.value {
            max_moment = Governing {
                value: row.max_moment,
                combination: row.combination.clone(),
            };
        }
        if row.min_moment < min_moment.value {
            min_moment = Governing {
                value: row.min_moment,
                combination: row.combination.clone(),
            };
        }

        rows.push(row);
    }

    Ok(CombinationSweep {
        method,
        rows,
        max_shear,
        min_shear,
        max_moment,
        min_moment,
    })
}

fn fold_max(values: &[f64]) -> f64 {
    values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

fn fold_min(values: &[f64]) -> f64 {
    values.iter().cloned().fold(f64::INFINITY, f64::min)
}
