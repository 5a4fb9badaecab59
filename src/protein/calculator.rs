//! Protein intake calculator
//!
//! Turns a [`UserProfile`] into daily protein targets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::multipliers::{activity_range, goal_range, MultiplierRange, LEAN_MASS_MULTIPLIER};
use crate::models::{FormulaBasis, ProteinRecommendation, UserProfile};

/// Meals per day used when none is configured
pub const DEFAULT_MEALS_PER_DAY: u32 = 4;

/// Calculation error types
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Unknown {field}: '{value}'")]
    UnknownCategory { field: &'static str, value: String },

    #[error("Division by zero: meals_per_day must be greater than 0")]
    DivisionByZero,
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Number of portions the optimal daily intake is split into
    pub meals_per_day: u32,
}

impl CalculatorConfig {
    pub fn new(meals_per_day: u32) -> Self {
        Self { meals_per_day }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            meals_per_day: DEFAULT_MEALS_PER_DAY,
        }
    }
}

/// Lean mass in kilograms: `weight * (1 - body_fat_percentage / 100)`
///
/// No clamping is applied; body fat of 100% or more gives a non-positive
/// result.
pub fn compute_lean_mass(weight: f64, body_fat_percentage: f64) -> f64 {
    weight * (1.0 - body_fat_percentage / 100.0)
}

/// Protein intake calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct ProteinCalculator {
    config: CalculatorConfig,
}

impl ProteinCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Calculator splitting intake into `meals_per_day` portions
    pub fn with_meals_per_day(meals_per_day: u32) -> Self {
        Self::new(CalculatorConfig::new(meals_per_day))
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Calculate daily protein targets for a profile
    ///
    /// With a non-zero body fat percentage the lean-mass range is applied to
    /// lean mass and the activity level and goal are ignored. A body fat of
    /// exactly zero counts as not provided. Otherwise total weight is used
    /// with the elementwise maximum of the activity and goal ranges.
    pub fn calculate_protein(&self, profile: &UserProfile) -> CalcResult<ProteinRecommendation> {
        let (basis, base_weight, multiplier) = match profile.effective_body_fat() {
            Some(body_fat) => {
                let lean_mass = compute_lean_mass(profile.weight, body_fat);
                if lean_mass <= 0.0 {
                    tracing::warn!(
                        "Non-positive lean mass {:.2} kg (weight {} kg, body fat {}%)",
                        lean_mass,
                        profile.weight,
                        body_fat
                    );
                }
                (FormulaBasis::LeanMass, lean_mass, LEAN_MASS_MULTIPLIER)
            }
            None => {
                let activity = activity_range(&profile.activity_level)?;
                let goal = goal_range(&profile.goal)?;
                (
                    FormulaBasis::ActivityGoal,
                    profile.weight,
                    activity.elementwise_max(&goal),
                )
            }
        };

        tracing::debug!(
            basis = basis.as_str(),
            base_weight,
            mult_min = multiplier.min,
            mult_max = multiplier.max,
            "Selected protein formula"
        );

        self.targets(basis, base_weight, multiplier)
    }

    fn targets(
        &self,
        basis: FormulaBasis,
        base_weight: f64,
        multiplier: MultiplierRange,
    ) -> CalcResult<ProteinRecommendation> {
        let min_protein = base_weight * multiplier.min;
        let max_protein = base_weight * multiplier.max;
        let optimal = (min_protein + max_protein) / 2.0;

        if self.config.meals_per_day == 0 {
            return Err(CalcError::DivisionByZero);
        }
        let per_meal = optimal / f64::from(self.config.meals_per_day);

        Ok(ProteinRecommendation {
            min_protein,
            optimal,
            max_protein,
            per_meal,
            basis,
            base_weight,
            multiplier,
        })
    }
}
