//! Protein multiplier tables
//!
//! Grams of protein per kilogram of body weight, as (min, max) ranges keyed
//! by activity level and goal, plus the fixed range used for lean mass.

use serde::{Deserialize, Serialize};

use super::calculator::{CalcError, CalcResult};
use crate::models::{ActivityLevel, Goal};

/// A (min, max) grams-per-kilogram coefficient pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierRange {
    pub min: f64,
    pub max: f64,
}

impl MultiplierRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Elementwise maximum of two ranges
    pub fn elementwise_max(&self, other: &MultiplierRange) -> Self {
        Self {
            min: self.min.max(other.min),
            max: self.max.max(other.max),
        }
    }
}

// ============================================================================
// Activity Multipliers (g/kg)
// ============================================================================

pub const SEDENTARY_MULTIPLIER: MultiplierRange = MultiplierRange::new(0.8, 1.0);
pub const LIGHT_MULTIPLIER: MultiplierRange = MultiplierRange::new(1.0, 1.2);
pub const MODERATE_MULTIPLIER: MultiplierRange = MultiplierRange::new(1.2, 1.6);
pub const ACTIVE_MULTIPLIER: MultiplierRange = MultiplierRange::new(1.6, 2.2);
pub const ATHLETE_MULTIPLIER: MultiplierRange = MultiplierRange::new(1.8, 2.5);

// ============================================================================
// Goal Multipliers (g/kg)
// ============================================================================

pub const FAT_LOSS_MULTIPLIER: MultiplierRange = MultiplierRange::new(1.6, 2.2);
pub const MUSCLE_GAIN_MULTIPLIER: MultiplierRange = MultiplierRange::new(1.6, 2.4);
pub const MAINTENANCE_MULTIPLIER: MultiplierRange = MultiplierRange::new(1.2, 1.6);
pub const RECOMPOSITION_MULTIPLIER: MultiplierRange = MultiplierRange::new(1.8, 2.4);

/// Range applied to lean mass when body fat is known (g/kg lean mass)
pub const LEAN_MASS_MULTIPLIER: MultiplierRange = MultiplierRange::new(2.2, 3.0);

// ============================================================================
// Lookup
// ============================================================================

pub fn activity_multiplier(level: ActivityLevel) -> MultiplierRange {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULTIPLIER,
        ActivityLevel::Light => LIGHT_MULTIPLIER,
        ActivityLevel::Moderate => MODERATE_MULTIPLIER,
        ActivityLevel::Active => ACTIVE_MULTIPLIER,
        ActivityLevel::Athlete => ATHLETE_MULTIPLIER,
    }
}

pub fn goal_multiplier(goal: Goal) -> MultiplierRange {
    match goal {
        Goal::FatLoss => FAT_LOSS_MULTIPLIER,
        Goal::MuscleGain => MUSCLE_GAIN_MULTIPLIER,
        Goal::Maintenance => MAINTENANCE_MULTIPLIER,
        Goal::Recomposition => RECOMPOSITION_MULTIPLIER,
    }
}

/// Look up the activity range by its string name
pub fn activity_range(activity_level: &str) -> CalcResult<MultiplierRange> {
    ActivityLevel::from_str(activity_level)
        .map(activity_multiplier)
        .ok_or_else(|| CalcError::UnknownCategory {
            field: "activity_level",
            value: activity_level.to_string(),
        })
}

/// Look up the goal range by its string name
pub fn goal_range(goal: &str) -> CalcResult<MultiplierRange> {
    Goal::from_str(goal)
        .map(goal_multiplier)
        .ok_or_else(|| CalcError::UnknownCategory {
            field: "goal",
            value: goal.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ranges_ordered() {
        for level in ActivityLevel::ALL {
            let r = activity_multiplier(level);
            assert!(r.min <= r.max, "{:?} range inverted", level);
        }
        for goal in Goal::ALL {
            let r = goal_multiplier(goal);
            assert!(r.min <= r.max, "{:?} range inverted", goal);
        }
        assert!(LEAN_MASS_MULTIPLIER.min <= LEAN_MASS_MULTIPLIER.max);
    }

    #[test]
    fn test_elementwise_max() {
        let combined = SEDENTARY_MULTIPLIER.elementwise_max(&RECOMPOSITION_MULTIPLIER);
        assert_eq!(combined, MultiplierRange::new(1.8, 2.4));

        // Mixed: athlete has the higher max, muscle gain ties on min
        let combined = MUSCLE_GAIN_MULTIPLIER.elementwise_max(&ATHLETE_MULTIPLIER);
        assert_eq!(combined, MultiplierRange::new(1.8, 2.5));
    }

    #[test]
    fn test_activity_range_lookup() {
        assert_eq!(activity_range("active").unwrap(), ACTIVE_MULTIPLIER);
        match activity_range("extreme") {
            Err(CalcError::UnknownCategory { field, value }) => {
                assert_eq!(field, "activity_level");
                assert_eq!(value, "extreme");
            }
            other => panic!("Expected UnknownCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_goal_range_lookup() {
        assert_eq!(goal_range("maintenance").unwrap(), MAINTENANCE_MULTIPLIER);
        assert!(matches!(
            goal_range("bulking"),
            Err(CalcError::UnknownCategory { field: "goal", .. })
        ));
    }
}
