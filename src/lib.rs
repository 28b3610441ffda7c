//! # beam_core - Euler-Bernoulli Beam Analysis Engine
//!
//! `beam_core` computes internal shear, bending moment, rotation, and
//! deflection along a loaded beam using classical beam theory, for
//! simply-supported and cantilever support conditions. It targets
//! hand-calculation-grade structural analysis: superposition of point and
//! distributed loads over a sampled grid, with a shooting-method solver for
//! the deflection boundary conditions and an ASCE 7-22 load-combination
//! envelope for ASD/LRFD workflows.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take inputs and return fresh arrays
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Fail Fast**: invalid geometry or loads error out before any array work
//!
//! ## Sign Convention
//!
//! Downward forces are entered negative. Sagging moment comes out positive,
//! downward deflection negative.
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::analysis::analyze;
//! use beam_core::beam::{Beam, DiscretizationConfig};
//! use beam_core::loads::{DistLoad, PointLoad};
//!
//! // 1 ft simply-supported beam with a 2 lb downward midspan load
//! let beam = Beam::simply_supported(1.0, 2.9e8).unwrap();
//! let config = DiscretizationConfig::default();
//! let point_loads = [PointLoad::shear(0.5, -2.0)];
//! let dist_loads: [DistLoad; 0] = [];
//!
//! let result = analyze(&beam, &config, &point_loads, &dist_loads, None).unwrap();
//! println!("max moment: {:.3}", result.max_moment.value);
//! println!("tip-to-tip deflection range: {:.3e}", result.min_deflection.value);
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam geometry, support modes, discretization parameters
//! - [`grid`] - Sampled position grid and support sample indices
//! - [`loads`] - Point/distributed loads, ASCE 7 categories and combinations
//! - [`analysis`] - Superposition engine, boundary-value solver, sweep driver
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod beam;
pub mod errors;
pub mod grid;
pub mod loads;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, sweep_combinations, AnalysisResult, CombinationSweep};
pub use beam::{Beam, DiscretizationConfig, SupportMode};
pub use errors::{BeamError, BeamResult};
pub use grid::Grid;
pub use loads::{DesignMethod, DistLoad, LoadCombination, LoadType, PointLoad};
