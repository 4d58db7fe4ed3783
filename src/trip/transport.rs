use anyhow::{Context, Result, bail};

use crate::client::TextModel;

use super::prompt::build_prompt;
use super::types::TripRequest;

/// Build the prompt for `trip` and perform the single generation call.
///
/// The destination guard runs before any network activity; everything else
/// the model returns is passed through verbatim.
pub async fn generate_itinerary(
    client: &dyn TextModel,
    trip: &TripRequest,
    model: &str,
) -> Result<String> {
    if trip.destination.trim().is_empty() {
        bail!("Destination cannot be empty");
    }

    let prompt = build_prompt(trip);

    client
        .generate_content(model, &prompt)
        .await
        .context("Itinerary generation failed")
}
