//! ASCE 7-22 load combination tables
//!
//! Standard load combinations per ASCE 7-22 for Allowable Stress Design
//! (ASD, Section 2.4.1) and Load and Resistance Factor Design (LRFD,
//! Section 2.3.1). The tables are immutable statics; the combination
//! driver receives them by reference and never mutates them.
//!
//! ## Wind Load Sign Convention
//!
//! Wind (W) is entered as a positive magnitude. The tables include both
//! +W (downward pressure) and -W (uplift) rows, so an envelope over all
//! rows captures uplift-governed minimums as well as gravity maximums.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::load_types::LoadType;

/// One load combination row: a named set of factors per load category
///
/// A load carrying category `c` is scaled by `factor(c)` when analyzed under
/// this combination; categories absent from the row contribute factor 0.
///
/// # Example
/// ```
/// use beam_core::loads::{LoadCombination, LoadType};
///
/// let combo = LoadCombination::new("LRFD-2", "1.2D + 1.6L")
///     .with_factor(LoadType::Dead, 1.2)
///     .with_factor(LoadType::Live, 1.6);
///
/// assert_eq!(combo.factor(LoadType::Dead), 1.2);
/// assert_eq!(combo.factor(LoadType::Snow), 0.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Row identifier (e.g., "ASD-2", "LRFD-3b")
    pub name: String,

    /// Human-readable equation (e.g., "D + L", "1.2D + 1.6L")
    pub equation: String,

    /// Scale factors keyed by load category
    pub factors: HashMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create an empty combination row
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a factor for a category (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Factor for a category; 0.0 when the category is not in this row
    pub fn factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }
}

static ASD_COMBINATIONS: Lazy<Vec<LoadCombination>> = Lazy::new(|| {
    vec![
        // 1. D
        LoadCombination::new("ASD-1", "D").with_factor(LoadType::Dead, 1.0),
        // 2. D + L
        LoadCombination::new("ASD-2", "D + L")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 1.0),
        // 3a-3c. D + (Lr | S | R)
        LoadCombination::new("ASD-3a", "D + Lr")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::LiveRoof, 1.0),
        LoadCombination::new("ASD-3b", "D + S")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Snow, 1.0),
        LoadCombination::new("ASD-3c", "D + R")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Rain, 1.0),
        // 4a-4c. D + 0.75L + 0.75(Lr | S | R)
        LoadCombination::new("ASD-4a", "D + 0.75L + 0.75Lr")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::LiveRoof, 0.75),
        LoadCombination::new("ASD-4b", "D + 0.75L + 0.75S")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Snow, 0.75),
        LoadCombination::new("ASD-4c", "D + 0.75L + 0.75R")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Rain, 0.75),
        // 5a/5a'. D +/- 0.6W
        LoadCombination::new("ASD-5a", "D + 0.6W")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Wind, 0.6),
        LoadCombination::new("ASD-5a'", "D - 0.6W")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Wind, -0.6),
        // 5b. D + 0.7E
        LoadCombination::new("ASD-5b", "D + 0.7E")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Seismic, 0.7),
        // 6a-6c (and uplift variants). D + 0.75L + 0.75(0.6W) + 0.75(Lr | S | R)
        LoadCombination::new("ASD-6a", "D + 0.75L + 0.45W + 0.75Lr")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Wind, 0.45)
            .with_factor(LoadType::LiveRoof, 0.75),
        LoadCombination::new("ASD-6a'", "D + 0.75L - 0.45W + 0.75Lr")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Wind, -0.45)
            .with_factor(LoadType::LiveRoof, 0.75),
        LoadCombination::new("ASD-6b", "D + 0.75L + 0.45W + 0.75S")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Wind, 0.45)
            .with_factor(LoadType::Snow, 0.75),
        LoadCombination::new("ASD-6b'", "D + 0.75L - 0.45W + 0.75S")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Wind, -0.45)
            .with_factor(LoadType::Snow, 0.75),
        LoadCombination::new("ASD-6c", "D + 0.75L + 0.45W + 0.75R")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Wind, 0.45)
            .with_factor(LoadType::Rain, 0.75),
        LoadCombination::new("ASD-6c'", "D + 0.75L - 0.45W + 0.75R")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Wind, -0.45)
            .with_factor(LoadType::Rain, 0.75),
        // 7. D + 0.75L + 0.75(0.7E) + 0.75S
        LoadCombination::new("ASD-7", "D + 0.75L + 0.525E + 0.75S")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Seismic, 0.525)
            .with_factor(LoadType::Snow, 0.75),
        // 8/8'. 0.6D +/- 0.6W
        LoadCombination::new("ASD-8", "0.6D + 0.6W")
            .with_factor(LoadType::Dead, 0.6)
            .with_factor(LoadType::Wind, 0.6),
        LoadCombination::new("ASD-8'", "0.6D - 0.6W")
            .with_factor(LoadType::Dead, 0.6)
            .with_factor(LoadType::Wind, -0.6),
        // 9. 0.6D + 0.7E
        LoadCombination::new("ASD-9", "0.6D + 0.7E")
            .with_factor(LoadType::Dead, 0.6)
            .with_factor(LoadType::Seismic, 0.7),
    ]
});

static LRFD_COMBINATIONS: Lazy<Vec<LoadCombination>> = Lazy::new(|| {
    vec![
        // 1. 1.4D
        LoadCombination::new("LRFD-1", "1.4D").with_factor(LoadType::Dead, 1.4),
        // 2a-2c. 1.2D + 1.6L + 0.5(Lr | S | R)
        LoadCombination::new("LRFD-2a", "1.2D + 1.6L + 0.5Lr")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Live, 1.6)
            .with_factor(LoadType::LiveRoof, 0.5),
        LoadCombination::new("LRFD-2b", "1.2D + 1.6L + 0.5S")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Live, 1.6)
            .with_factor(LoadType::Snow, 0.5),
        LoadCombination::new("LRFD-2c", "1.2D + 1.6L + 0.5R")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Live, 1.6)
            .with_factor(LoadType::Rain, 0.5),
        // 3a-3f (and uplift variants). 1.2D + 1.6(Lr | S | R) + (L | 0.5W)
        LoadCombination::new("LRFD-3a", "1.2D + 1.6Lr + L")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::LiveRoof, 1.6)
            .with_factor(LoadType::Live, 1.0),
        LoadCombination::new("LRFD-3b", "1.2D + 1.6Lr + 0.5W")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::LiveRoof, 1.6)
            .with_factor(LoadType::Wind, 0.5),
        LoadCombination::new("LRFD-3b'", "1.2D + 1.6Lr - 0.5W")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::LiveRoof, 1.6)
            .with_factor(LoadType::Wind, -0.5),
        LoadCombination::new("LRFD-3c", "1.2D + 1.6S + L")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Snow, 1.6)
            .with_factor(LoadType::Live, 1.0),
        LoadCombination::new("LRFD-3d", "1.2D + 1.6S + 0.5W")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Snow, 1.6)
            .with_factor(LoadType::Wind, 0.5),
        LoadCombination::new("LRFD-3d'", "1.2D + 1.6S - 0.5W")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Snow, 1.6)
            .with_factor(LoadType::Wind, -0.5),
        LoadCombination::new("LRFD-3e", "1.2D + 1.6R + L")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Rain, 1.6)
            .with_factor(LoadType::Live, 1.0),
        LoadCombination::new("LRFD-3f", "1.2D + 1.6R + 0.5W")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Rain, 1.6)
            .with_factor(LoadType::Wind, 0.5),
        LoadCombination::new("LRFD-3f'", "1.2D + 1.6R - 0.5W")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Rain, 1.6)
            .with_factor(LoadType::Wind, -0.5),
        // 4a-4c (and uplift variants). 1.2D +/- 1.0W + L + 0.5(Lr | S | R)
        LoadCombination::new("LRFD-4a", "1.2D + 1.0W + L + 0.5Lr")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Wind, 1.0)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::LiveRoof, 0.5),
        LoadCombination::new("LRFD-4a'", "1.2D - 1.0W + L + 0.5Lr")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Wind, -1.0)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::LiveRoof, 0.5),
        LoadCombination::new("LRFD-4b", "1.2D + 1.0W + L + 0.5S")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Wind, 1.0)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::Snow, 0.5),
        LoadCombination::new("LRFD-4b'", "1.2D - 1.0W + L + 0.5S")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Wind, -1.0)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::Snow, 0.5),
        LoadCombination::new("LRFD-4c", "1.2D + 1.0W + L + 0.5R")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Wind, 1.0)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::Rain, 0.5),
        LoadCombination::new("LRFD-4c'", "1.2D - 1.0W + L + 0.5R")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Wind, -1.0)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::Rain, 0.5),
        // 5. 1.2D + 1.0E + L + 0.2S
        LoadCombination::new("LRFD-5", "1.2D + 1.0E + L + 0.2S")
            .with_factor(LoadType::Dead, 1.2)
            .with_factor(LoadType::Seismic, 1.0)
            .with_factor(LoadType::Live, 1.0)
            .with_factor(LoadType::Snow, 0.2),
        // 6/6'. 0.9D +/- 1.0W
        LoadCombination::new("LRFD-6", "0.9D + 1.0W")
            .with_factor(LoadType::Dead, 0.9)
            .with_factor(LoadType::Wind, 1.0),
        LoadCombination::new("LRFD-6'", "0.9D - 1.0W")
            .with_factor(LoadType::Dead, 0.9)
            .with_factor(LoadType::Wind, -1.0),
        // 7. 0.9D + 1.0E
        LoadCombination::new("LRFD-7", "0.9D + 1.0E")
            .with_factor(LoadType::Dead, 0.9)
            .with_factor(LoadType::Seismic, 1.0),
    ]
});

/// ASCE 7-22 ASD combinations (Section 2.4.1), including wind-uplift rows
pub fn asce7_asd_combinations() -> &'static [LoadCombination] {
    &ASD_COMBINATIONS
}

/// ASCE 7-22 LRFD combinations (Section 2.3.1), including wind-uplift rows
pub fn asce7_lrfd_combinations() -> &'static [LoadCombination] {
    &LRFD_COMBINATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asd_combination_count() {
        // 16 basic + 5 wind uplift variants
        assert_eq!(asce7_asd_combinations().len(), 21);
    }

    #[test]
    fn test_lrfd_combination_count() {
        // 16 basic + 7 wind uplift variants
        assert_eq!(asce7_lrfd_combinations().len(), 23);
    }

    #[test]
    fn test_lrfd_dead_only_factor() {
        let lrfd1 = asce7_lrfd_combinations()
            .iter()
            .find(|c| c.name == "LRFD-1")
            .unwrap();
        assert_eq!(lrfd1.factor(LoadType::Dead), 1.4);
        assert_eq!(lrfd1.factor(LoadType::Live), 0.0);
    }

    #[test]
    fn test_row_names_unique() {
        for table in [asce7_asd_combinations(), asce7_lrfd_combinations()] {
            let mut names: Vec<&str> = table.iter().map(|c| c.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn test_dead_factor_positive_in_every_row() {
        // Every ASCE 7-22 row factors Dead load with a positive coefficient
        for table in [asce7_asd_combinations(), asce7_lrfd_combinations()] {
            for combo in table {
                assert!(combo.factor(LoadType::Dead) > 0.0, "{}", combo.name);
            }
        }
    }

    #[test]
    fn test_combination_serialization() {
        let combo = LoadCombination::new("ASD-1", "D").with_factor(LoadType::Dead, 1.0);
        let json = serde_json::to_string(&combo).unwrap();
        let parsed: LoadCombination = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.name, "ASD-1");
        assert_eq!(parsed.factor(LoadType::Dead), 1.0);
    }
}
