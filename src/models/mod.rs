//! Data models
//!
//! Input profile and calculated recommendation.

mod profile;
mod recommendation;

pub use profile::{ActivityLevel, Goal, UserProfile};
pub use recommendation::{FormulaBasis, ProteinRecommendation};
