//! Protein recommendation model
//!
//! Output of a single calculation.

use serde::Serialize;

use crate::protein::MultiplierRange;

/// Which formula produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaBasis {
    /// Lean mass times the fixed lean-mass range
    LeanMass,
    /// Total weight times the combined activity/goal range
    ActivityGoal,
}

impl FormulaBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormulaBasis::LeanMass => "lean_mass",
            FormulaBasis::ActivityGoal => "activity_goal",
        }
    }
}

/// Daily protein targets in grams
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProteinRecommendation {
    pub min_protein: f64, // grams/day
    pub optimal: f64,     // grams/day
    pub max_protein: f64, // grams/day
    pub per_meal: f64,    // grams
    pub basis: FormulaBasis,
    pub base_weight: f64, // kilograms the multipliers were applied to
    pub multiplier: MultiplierRange,
}

impl ProteinRecommendation {
    /// Copy with every gram value rounded to one decimal place
    ///
    /// Rounds exactly as the `{:.1}` text report does, so ties go to even
    /// (12.25 becomes 12.2).
    pub fn rounded(&self) -> Self {
        Self {
            min_protein: round1(self.min_protein),
            optimal: round1(self.optimal),
            max_protein: round1(self.max_protein),
            per_meal: round1(self.per_meal),
            ..self.clone()
        }
    }
}

fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
