//! ASCE 7 load categories
//!
//! Loads may optionally carry one of these categories; the combination
//! driver uses the category to look up the scale factor in each
//! combination row. Uncategorized loads are never factored.

use serde::{Deserialize, Serialize};

/// Load categories per ASCE 7-22 Section 2
///
/// Each category has the standard one- or two-letter abbreviation used in
/// load combination equations.
///
/// # Example
/// ```
/// use beam_core::loads::LoadType;
///
/// assert_eq!(LoadType::Dead.code(), "D");
/// assert_eq!(LoadType::LiveRoof.code(), "Lr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Dead load (self-weight and permanent attachments)
    Dead,
    /// L - Live load (occupancy)
    Live,
    /// Lr - Roof live load (maintenance, workers)
    LiveRoof,
    /// S - Snow load
    Snow,
    /// R - Rain load
    Rain,
    /// W - Wind load
    Wind,
    /// E - Seismic (earthquake) load
    Seismic,
}

impl LoadType {
    /// All categories in standard order
    pub const ALL: [LoadType; 7] = [
        LoadType::Dead,
        LoadType::Live,
        LoadType::LiveRoof,
        LoadType::Snow,
        LoadType::Rain,
        LoadType::Wind,
        LoadType::Seismic,
    ];

    /// Standard abbreviation code (D, L, Lr, S, R, W, E)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
            LoadType::LiveRoof => "Lr",
            LoadType::Snow => "S",
            LoadType::Rain => "R",
            LoadType::Wind => "W",
            LoadType::Seismic => "E",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
            LoadType::LiveRoof => "Roof live load",
            LoadType::Snow => "Snow load",
            LoadType::Rain => "Rain load",
            LoadType::Wind => "Wind load",
            LoadType::Seismic => "Seismic load",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
