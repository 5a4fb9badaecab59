//! User profile model
//!
//! Body metrics, activity level and goal for a single calculation.

use serde::{Deserialize, Serialize};

/// Activity level category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Athlete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Athlete => "athlete",
        }
    }

    /// Parse from string (exact match on the canonical name)
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "athlete" => Some(ActivityLevel::Athlete),
            _ => None,
        }
    }
}

/// Fitness goal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Maintenance,
    Recomposition,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::FatLoss,
        Goal::MuscleGain,
        Goal::Maintenance,
        Goal::Recomposition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::FatLoss => "fat_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintenance => "maintenance",
            Goal::Recomposition => "recomposition",
        }
    }

    /// Parse from string (exact match on the canonical name)
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fat_loss" => Some(Goal::FatLoss),
            "muscle_gain" => Some(Goal::MuscleGain),
            "maintenance" => Some(Goal::Maintenance),
            "recomposition" => Some(Goal::Recomposition),
            _ => None,
        }
    }
}

/// Profile of the person a recommendation is calculated for
///
/// Categories are kept as plain strings; they are resolved against
/// [`ActivityLevel`] and [`Goal`] by the calculator, which reports
/// unrecognized values as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: String,
    pub weight: f64,             // kilograms
    pub height: f64,             // centimeters
    pub activity_level: String,
    pub goal: String,
    pub training_frequency: u32, // sessions per week
    /// Body fat in percent (0-100).
    ///
    /// `Some(0.0)` is treated the same as `None`: the calculator falls back
    /// to the activity/goal formula.
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
}

impl UserProfile {
    /// Body fat percentage if it selects the lean-mass formula
    pub fn effective_body_fat(&self) -> Option<f64> {
        self.body_fat_percentage.filter(|bf| *bf != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(body_fat: Option<f64>) -> UserProfile {
        UserProfile {
            age: 30,
            gender: "male".to_string(),
            weight: 80.0,
            height: 180.0,
            activity_level: "moderate".to_string(),
            goal: "maintenance".to_string(),
            training_frequency: 3,
            body_fat_percentage: body_fat,
        }
    }

    #[test]
    fn test_activity_level_round_trip_names() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(ActivityLevel::from_str("extreme"), None);
        assert_eq!(ActivityLevel::from_str("Moderate"), None);
    }

    #[test]
    fn test_goal_names() {
        for goal in Goal::ALL {
            assert_eq!(Goal::from_str(goal.as_str()), Some(goal));
        }
        assert_eq!(Goal::from_str("bulk"), None);
    }

    #[test]
    fn test_effective_body_fat() {
        assert_eq!(profile(None).effective_body_fat(), None);
        assert_eq!(profile(Some(0.0)).effective_body_fat(), None);
        assert_eq!(profile(Some(18.5)).effective_body_fat(), Some(18.5));
        assert!(profile(Some(f64::NAN)).effective_body_fat().is_some());
    }

    #[test]
    fn test_deserialize_without_body_fat() {
        let json = r#"{
            "age": 41,
            "gender": "female",
            "weight": 62.5,
            "height": 168.0,
            "activity_level": "light",
            "goal": "fat_loss",
            "training_frequency": 2
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.body_fat_percentage, None);
        assert_eq!(profile.activity_level, "light");
    }

    #[test]
    fn test_enum_serde_names() {
        assert_eq!(
            serde_json::to_string(&Goal::MuscleGain).unwrap(),
            "\"muscle_gain\""
        );
        let level: ActivityLevel = serde_json::from_str("\"athlete\"").unwrap();
        assert_eq!(level, ActivityLevel::Athlete);
    }
}
