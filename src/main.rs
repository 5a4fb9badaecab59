//! Protein Intake Calculator
//!
//! Prints a protein recommendation for the built-in example profile.

use protein_intake::models::UserProfile;
use protein_intake::protein::{CalculatorConfig, ProteinCalculator};
use protein_intake::report;
use tracing_subscriber::EnvFilter;

/// Example profile used by the binary
fn example_profile() -> UserProfile {
    UserProfile {
        age: 26,
        gender: "female".to_string(),
        weight: 55.0,
        height: 160.0,
        activity_level: "active".to_string(),
        goal: "fat_loss".to_string(),
        training_frequency: 5,
        body_fat_percentage: Some(22.0),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("protein_intake=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "{} v{} starting",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = CalculatorConfig::default();
    let calculator = ProteinCalculator::new(config);
    let profile = example_profile();
    tracing::info!(
        meals_per_day = config.meals_per_day,
        weight = profile.weight,
        "Calculating protein intake"
    );

    let recommendation = calculator.calculate_protein(&profile)?;
    tracing::debug!("Recommendation: {}", report::render_json(&recommendation)?);

    print!("{}", report::render_report(&recommendation));

    Ok(())
}
