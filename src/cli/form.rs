use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{self, Write};

use crate::trip::{BudgetTier, MobilityLevel, TripRequest};

use super::util::read_trimmed_line;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Walk the user through the trip form and produce one `TripRequest`.
///
/// Only widget-level constraints are enforced: a non-empty destination, end
/// date not before start date, enumerated budget/mobility choices, and the
/// party-size clamp. Every free-text field may be left empty.
pub(crate) fn collect_trip(preset_destination: Option<String>) -> Result<TripRequest> {
    println!("\n📝 Tell us about your trip\n");

    let destination = match preset_destination {
        Some(destination) => {
            println!("🌍 Destination: {destination}");
            destination
        }
        None => prompt_destination()?,
    };

    let today = Local::now().date_naive();
    let start_date = prompt_date("🗓️  Start date", today)?;
    let end_date = prompt_end_date(start_date)?;

    let budget = prompt_budget()?;
    let party_size = prompt_party_size()?;
    let purpose = prompt_optional("🎯 Trip purpose (e.g. Friends Getaway, Solo Adventure)")?;
    let activities = prompt_optional("🤿 Activities you want to try (e.g. Scuba Diving, Museum Hopping)")?;
    let dietary = prompt_optional("🥗 Dietary preferences (e.g. Vegan, Gluten-Free)")?;
    let allergies = prompt_optional("⚠️  Allergies")?;
    let mobility = prompt_mobility()?;
    let accommodation = prompt_optional("🏨 Accommodation preferences (e.g. Hotels, AirBnb, Resort, Hostels)")?;
    let features = prompt_optional("✨ Must-have features")?;
    let place_preference = prompt_optional("📍 Preferred places or neighborhoods")?;

    Ok(TripRequest {
        destination,
        start_date,
        end_date,
        budget,
        party_size,
        purpose,
        activities,
        dietary,
        allergies,
        mobility,
        accommodation,
        features,
        place_preference,
    })
}

fn prompt_destination() -> Result<String> {
    loop {
        print!("🌍 Destination: ");
        io::stdout().flush()?;

        let destination = read_trimmed_line()?;
        if destination.is_empty() {
            println!("❌ Destination cannot be empty.");
            continue;
        }
        return Ok(destination);
    }
}

fn prompt_date(label: &str, default: NaiveDate) -> Result<NaiveDate> {
    loop {
        print!("{label} (YYYY-MM-DD, default: {default}): ");
        io::stdout().flush()?;

        let input = read_trimmed_line()?;
        if input.is_empty() {
            return Ok(default);
        }

        match NaiveDate::parse_from_str(&input, DATE_INPUT_FORMAT) {
            Ok(date) => return Ok(date),
            Err(_) => println!("❌ Please enter a date as YYYY-MM-DD."),
        }
    }
}

fn prompt_end_date(start_date: NaiveDate) -> Result<NaiveDate> {
    loop {
        let end_date = prompt_date("🗓️  End date", start_date)?;
        if end_date < start_date {
            println!("❌ End date cannot be before the start date.");
            continue;
        }
        return Ok(end_date);
    }
}

fn prompt_budget() -> Result<BudgetTier> {
    println!("💰 Budget level:");
    for (idx, tier) in BudgetTier::ALL.iter().enumerate() {
        println!("  {}. {}", idx + 1, tier);
    }

    loop {
        print!("Select budget (1-{}, default: 1): ", BudgetTier::ALL.len());
        io::stdout().flush()?;

        let input = read_trimmed_line()?;
        if input.is_empty() {
            return Ok(BudgetTier::ALL[0]);
        }

        match input.parse::<usize>() {
            Ok(num) if num >= 1 && num <= BudgetTier::ALL.len() => {
                return Ok(BudgetTier::ALL[num - 1]);
            }
            _ => println!(
                "❌ Please enter a number between 1 and {}.",
                BudgetTier::ALL.len()
            ),
        }
    }
}

fn prompt_mobility() -> Result<MobilityLevel> {
    println!("🚶 Walking tolerance:");
    for (idx, level) in MobilityLevel::ALL.iter().enumerate() {
        println!("  {}. {}", idx + 1, level);
    }

    loop {
        print!(
            "Select walking tolerance (1-{}, default: 1): ",
            MobilityLevel::ALL.len()
        );
        io::stdout().flush()?;

        let input = read_trimmed_line()?;
        if input.is_empty() {
            return Ok(MobilityLevel::ALL[0]);
        }

        match input.parse::<usize>() {
            Ok(num) if num >= 1 && num <= MobilityLevel::ALL.len() => {
                return Ok(MobilityLevel::ALL[num - 1]);
            }
            _ => println!(
                "❌ Please enter a number between 1 and {}.",
                MobilityLevel::ALL.len()
            ),
        }
    }
}

fn prompt_party_size() -> Result<u32> {
    loop {
        print!("👥 Party size (1-30, default: 1): ");
        io::stdout().flush()?;

        let input = read_trimmed_line()?;
        if input.is_empty() {
            return Ok(1);
        }

        match input.parse::<i64>() {
            // Out-of-range values are clamped rather than rejected.
            Ok(raw) => return Ok(TripRequest::clamp_party_size(raw)),
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

fn prompt_optional(label: &str) -> Result<Option<String>> {
    print!("{label} (optional): ");
    io::stdout().flush()?;

    let input = read_trimmed_line()?;
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}
