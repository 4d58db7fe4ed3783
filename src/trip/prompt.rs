use super::types::TripRequest;

// Wording substituted for optional fields the user left empty.
pub(crate) const FALLBACK_PURPOSE: &str = "Not specified";
pub(crate) const FALLBACK_ACTIVITIES: &str = "General Exploration";
pub(crate) const FALLBACK_DIETARY: &str = "No restrictions";
pub(crate) const FALLBACK_ALLERGIES: &str = "None";
pub(crate) const FALLBACK_ACCOMMODATION: &str = "Not specified";
pub(crate) const FALLBACK_FEATURES: &str = "Not specified";
pub(crate) const FALLBACK_PLACES: &str = "Not specified";

const DATE_FORMAT: &str = "%b %d";

const REFINEMENT_BLOCK: &str = "\
Structure this itinerary:
1. Group nearby attractions to minimize travel time
2. Balance popular spots with unique local experiences
3. Include time buffers for meals and transit that respect the dietary needs above
4. Add safety tips and cultural notes
5. Format with clear daily headings and emojis
6. Write the itinerary in English
7. End with a total cost estimate and an overall time summary";

/// Render the full prompt for a trip: the base block listing every field
/// (with fallback substitution) followed by the fixed refinement directives.
/// Pure and deterministic; the only branching is the empty-field fallbacks.
pub fn build_prompt(trip: &TripRequest) -> String {
    format!("{}\n\n{}", base_block(trip), REFINEMENT_BLOCK)
}

fn base_block(trip: &TripRequest) -> String {
    let start = trip.start_date.format(DATE_FORMAT);
    let end = trip.end_date.format(DATE_FORMAT);

    format!(
        "\
Create a {duration}-day itinerary for {destination} ({start} to {end}) with:
- Budget: {budget}
- Travel Purpose: {purpose}
- Group Size: {party_size}
- Desired Activities: {activities}
- Dietary Needs: {dietary}
- Allergies: {allergies}
- Mobility Level: {mobility}
- Accommodation: {accommodation}
- Must-Have Features: {features}
- Preferred Places: {places}

Include for each day:
🌅 Morning, 🌇 Afternoon, and 🌃 Evening activities
🍽️ 2-3 dining options with dietary accommodations
🚗 Transportation tips between locations
💰 Cost estimates for each major activity
🕶️ Local insider tips and hidden gems",
        duration = trip.duration_days(),
        destination = trip.destination,
        budget = trip.budget,
        purpose = or_fallback(&trip.purpose, FALLBACK_PURPOSE),
        party_size = trip.party_size,
        activities = or_fallback(&trip.activities, FALLBACK_ACTIVITIES),
        dietary = or_fallback(&trip.dietary, FALLBACK_DIETARY),
        allergies = or_fallback(&trip.allergies, FALLBACK_ALLERGIES),
        mobility = trip.mobility,
        accommodation = or_fallback(&trip.accommodation, FALLBACK_ACCOMMODATION),
        features = or_fallback(&trip.features, FALLBACK_FEATURES),
        places = or_fallback(&trip.place_preference, FALLBACK_PLACES),
    )
}

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}
