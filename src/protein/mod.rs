//! Protein calculation module
//!
//! Multiplier tables and the intake calculator.

pub mod calculator;
pub mod multipliers;

pub use calculator::{
    compute_lean_mass, CalcError, CalcResult, CalculatorConfig, ProteinCalculator,
    DEFAULT_MEALS_PER_DAY,
};
pub use multipliers::{
    activity_multiplier, activity_range, goal_multiplier, goal_range, MultiplierRange,
    LEAN_MASS_MULTIPLIER,
};
