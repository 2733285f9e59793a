use std::ops::{Range, RangeInclusive};

use crate::error::GenerateError;

pub const DEFAULT_OUTPUT_FILE: &str = "test_data.sql";

/// Environment variable consulted when no seed is passed on the command line.
pub const SEED_ENV_VAR: &str = "SURVEYSEED_SEED";

/// Picks the explicit seed if there is one, else the value of
/// [`SEED_ENV_VAR`]. A value that is not a `u64` is ignored with a warning.
pub fn resolve_seed(
    explicit: Option<u64>,
    env: Option<String>,
) -> Option<u64> {
    explicit.or_else(|| {
        let var = env?;
        match var.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!("Ignoring unparseable {SEED_ENV_VAR}={var}");
                None
            }
        }
    })
}

/// The numeric knobs of a generation pass. The defaults are the values the
/// seed script has always used; tests construct their own to shrink the
/// dataset.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub creators: u32,
    pub admins: u32,
    pub surveys_per_creator: RangeInclusive<u32>,
    /// How many days before "now" a survey window may open.
    pub lookback_days: RangeInclusive<i64>,
    pub duration_days: RangeInclusive<i64>,
    /// Days between a survey being created and its window opening.
    pub lead_days: RangeInclusive<i64>,
    pub active_probability: f64,
    pub deleted_probability: f64,
    pub questions_per_survey: RangeInclusive<u32>,
    /// Share of a survey's questions that are multiple choice (rounded down).
    pub multiple_choice_fraction: Range<f64>,
    /// Sessions for surveys which are active and have not yet ended.
    pub sessions_open: RangeInclusive<u32>,
    pub sessions_ended: RangeInclusive<u32>,
    pub sessions_other: RangeInclusive<u32>,
    /// A session may leave up to this many questions unanswered.
    pub max_skipped_questions: usize,
    pub device_suffix: RangeInclusive<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            creators: 8,
            admins: 2,
            surveys_per_creator: 3..=5,
            lookback_days: 0..=180,
            duration_days: 7..=90,
            lead_days: 1..=5,
            active_probability: 0.8,
            deleted_probability: 0.1,
            questions_per_survey: 3..=7,
            multiple_choice_fraction: 0.5..0.6,
            sessions_open: 30..=50,
            sessions_ended: 15..=30,
            sessions_other: 5..=15,
            max_skipped_questions: 2,
            device_suffix: 1000..=9999,
        }
    }
}

fn check_range<T: PartialOrd + Copy + Into<i64>>(
    name: &'static str,
    range: &RangeInclusive<T>,
) -> Result<(), GenerateError> {
    if range.is_empty() {
        return Err(GenerateError::InvalidRange {
            name,
            min: (*range.start()).into(),
            max: (*range.end()).into(),
        });
    }
    Ok(())
}

fn check_probability(
    name: &'static str,
    value: f64,
) -> Result<(), GenerateError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GenerateError::InvalidProbability { name, value });
    }
    Ok(())
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerateError> {
        check_range("surveys_per_creator", &self.surveys_per_creator)?;
        check_range("lookback_days", &self.lookback_days)?;
        check_range("duration_days", &self.duration_days)?;
        check_range("lead_days", &self.lead_days)?;
        check_range("questions_per_survey", &self.questions_per_survey)?;
        check_range("sessions_open", &self.sessions_open)?;
        check_range("sessions_ended", &self.sessions_ended)?;
        check_range("sessions_other", &self.sessions_other)?;
        check_range("device_suffix", &self.device_suffix)?;

        if *self.lookback_days.start() < 0 {
            return Err(GenerateError::InvalidRange {
                name: "lookback_days",
                min: *self.lookback_days.start(),
                max: *self.lookback_days.end(),
            });
        }

        // Surveys are created strictly before their window opens.
        if *self.lead_days.start() < 1 {
            return Err(GenerateError::InvalidRange {
                name: "lead_days",
                min: *self.lead_days.start(),
                max: *self.lead_days.end(),
            });
        }

        // A survey must stay open for a positive amount of time.
        if *self.duration_days.start() < 1 {
            return Err(GenerateError::InvalidRange {
                name: "duration_days",
                min: *self.duration_days.start(),
                max: *self.duration_days.end(),
            });
        }

        if *self.questions_per_survey.start() < 1 {
            return Err(GenerateError::InvalidRange {
                name: "questions_per_survey",
                min: (*self.questions_per_survey.start()).into(),
                max: (*self.questions_per_survey.end()).into(),
            });
        }

        let fraction = &self.multiple_choice_fraction;
        if fraction.is_empty() || fraction.start < 0.0 || fraction.end > 1.0 {
            return Err(GenerateError::InvalidProbability {
                name: "multiple_choice_fraction",
                value: fraction.start,
            });
        }

        check_probability("active_probability", self.active_probability)?;
        check_probability("deleted_probability", self.deleted_probability)?;

        Ok(())
    }
}
