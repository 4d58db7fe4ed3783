use anyhow::Result;
use colored::*;

use crate::client::GeminiClient;
use crate::config::Config;
use crate::trip::{self, TripRequest};

use super::form;

pub(crate) async fn handle_plan(destination_words: Vec<String>, config: &Config) -> Result<()> {
    let preset = destination_words.join(" ").trim().to_owned();
    let preset = if preset.is_empty() {
        None
    } else {
        Some(preset)
    };

    println!("{}", "🌍 Personalized Travel Itinerary Generator".bold());

    let trip = form::collect_trip(preset)?;
    render_trip_summary(&trip, config);

    // Blocks until the model responds; no cancellation once in flight.
    println!("\n🧭 Planning your adventure...");

    let client = GeminiClient::new(&config.llm)?;
    let itinerary = trip::generate_itinerary(&client, &trip, &config.models.generator).await?;

    println!(
        "\n{}",
        format!(
            "🗓️  Your {}-Day {} Itinerary",
            trip.duration_days(),
            trip.destination
        )
        .bold()
        .cyan()
    );
    println!("\n{}", itinerary.trim());
    println!("\n{}", "✅ Trip planning complete! Bon voyage!".green());

    Ok(())
}

fn render_trip_summary(trip: &TripRequest, config: &Config) {
    println!("\n=== Trip Details ===");
    println!("Model: {}", config.models.generator);
    println!("Destination: {}", trip.destination);
    println!(
        "Dates: {} to {} ({} days)",
        trip.start_date.format("%b %d"),
        trip.end_date.format("%b %d"),
        trip.duration_days()
    );
    println!("Budget: {}", trip.budget);
    println!("Party size: {}", trip.party_size);
    println!("Walking tolerance: {}", trip.mobility);
}
