use std::fmt;

use chrono::NaiveDate;

pub const MIN_PARTY_SIZE: i64 = 1;
pub const MAX_PARTY_SIZE: i64 = 30;

/// The parameters for one itinerary generation attempt.
///
/// Built once from the collected form input, read-only afterwards, and
/// discarded as soon as the prompt string has been rendered. Optional fields
/// are `None` when the user left them empty; fallback wording is substituted
/// at prompt-build time, not stored here.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: BudgetTier,
    pub party_size: u32,
    pub purpose: Option<String>,
    pub activities: Option<String>,
    pub dietary: Option<String>,
    pub allergies: Option<String>,
    pub mobility: MobilityLevel,
    pub accommodation: Option<String>,
    pub features: Option<String>,
    pub place_preference: Option<String>,
}

impl TripRequest {
    /// Trip length in days, counting both endpoints. The form guarantees
    /// `end_date >= start_date`, so this is always at least 1.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn clamp_party_size(raw: i64) -> u32 {
        raw.clamp(MIN_PARTY_SIZE, MAX_PARTY_SIZE) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    LowBudget,
    LowToModerate,
    Moderate,
    ModerateToHigh,
    Luxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 5] = [
        BudgetTier::LowBudget,
        BudgetTier::LowToModerate,
        BudgetTier::Moderate,
        BudgetTier::ModerateToHigh,
        BudgetTier::Luxury,
    ];
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetTier::LowBudget => "Low Budget",
            BudgetTier::LowToModerate => "Low To Moderate",
            BudgetTier::Moderate => "Moderate",
            BudgetTier::ModerateToHigh => "Moderate To High",
            BudgetTier::Luxury => "Luxury",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobilityLevel {
    Low,
    Moderate,
    High,
}

impl MobilityLevel {
    pub const ALL: [MobilityLevel; 3] = [
        MobilityLevel::Low,
        MobilityLevel::Moderate,
        MobilityLevel::High,
    ];
}

impl fmt::Display for MobilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MobilityLevel::Low => "Low",
            MobilityLevel::Moderate => "Moderate",
            MobilityLevel::High => "High",
        };
        write!(f, "{label}")
    }
}
