//! Chronological and human-equivalent age calculation.
//!
//! Everything here is pure: the current instant is passed in, so results
//! only depend on the arguments.

use crate::domain::model::{AgeResult, ChronologicalAge, Species};
use crate::utils::error::{PetAgeError, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Utc};

/// Days per year used to turn elapsed time into fractional years.
pub const DAYS_PER_YEAR: f64 = 365.25;
const MILLIS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * DAYS_PER_YEAR;

// Wang T. et al. (2020), "Quantitative Translation of Dog-to-Human Aging by
// Conserved Remodeling of the DNA Methylome", Cell Systems 11(2):176-185.
// human_age = 16 * ln(dog_age) + 31
pub const DOG_LOG_COEFFICIENT: f64 = 16.0;
pub const DOG_LOG_INTERCEPT: f64 = 31.0;
/// Below three months the log regression goes negative, so puppies use a
/// linear ramp instead (three months is roughly a 5-8 year old child).
pub const DOG_PUPPY_THRESHOLD_YEARS: f64 = 0.25;
pub const DOG_PUPPY_RATE: f64 = 25.0;

// 2021 AAHA/AAFP Feline Life Stage Guidelines:
// first year reaches 15, second year adds 9 (24 at two), then 4 per year.
pub const CAT_FIRST_YEAR_RATE: f64 = 15.0;
pub const CAT_SECOND_YEAR_RATE: f64 = 9.0;
pub const CAT_AGE_AT_TWO: f64 = 24.0;
pub const CAT_ADULT_RATE: f64 = 4.0;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the raw birthdate input. Empty input is a missing birthdate.
pub fn parse_birthdate(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PetAgeError::MissingBirthdate);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| PetAgeError::InvalidBirthdate {
        value: value.to_string(),
    })
}

/// Time elapsed between midnight UTC of `birthdate` and `now`.
pub fn elapsed_since(birthdate: NaiveDate, now: DateTime<Utc>) -> Result<TimeDelta> {
    let midnight = birthdate
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| PetAgeError::InvalidBirthdate {
            value: birthdate.to_string(),
        })?;
    let born = Utc.from_utc_datetime(&midnight);

    let elapsed = now - born;
    if elapsed < TimeDelta::zero() {
        return Err(PetAgeError::FutureBirthdate {
            birthdate: birthdate.format(DATE_FORMAT).to_string(),
        });
    }
    Ok(elapsed)
}

/// Years and months read off the elapsed time rebased onto the Unix epoch.
/// Display only; the formulas use [`exact_years`].
pub fn chronological_age(elapsed: TimeDelta) -> ChronologicalAge {
    match DateTime::from_timestamp_millis(elapsed.num_milliseconds()) {
        Some(rebased) => ChronologicalAge {
            years: (rebased.year() - 1970).abs(),
            months: rebased.month0(),
        },
        None => ChronologicalAge {
            years: 0,
            months: 0,
        },
    }
}

pub fn exact_years(elapsed: TimeDelta) -> f64 {
    elapsed.num_milliseconds() as f64 / MILLIS_PER_YEAR
}

pub fn dog_human_age(exact_years: f64) -> f64 {
    if exact_years < DOG_PUPPY_THRESHOLD_YEARS {
        exact_years * DOG_PUPPY_RATE
    } else {
        DOG_LOG_COEFFICIENT * exact_years.ln() + DOG_LOG_INTERCEPT
    }
}

pub fn cat_human_age(exact_years: f64) -> f64 {
    if exact_years <= 1.0 {
        exact_years * CAT_FIRST_YEAR_RATE
    } else if exact_years <= 2.0 {
        CAT_FIRST_YEAR_RATE + (exact_years - 1.0) * CAT_SECOND_YEAR_RATE
    } else {
        CAT_AGE_AT_TWO + (exact_years - 2.0) * CAT_ADULT_RATE
    }
}

pub fn human_age(species: Species, exact_years: f64) -> f64 {
    match species {
        Species::Dog => dog_human_age(exact_years),
        Species::Cat => cat_human_age(exact_years),
    }
}

/// Validate `birthdate_input` and compute both ages as of `now`.
pub fn calculate(birthdate_input: &str, species: Species, now: DateTime<Utc>) -> Result<AgeResult> {
    let birthdate = parse_birthdate(birthdate_input)?;
    let elapsed = elapsed_since(birthdate, now)?;

    let exact = exact_years(elapsed);
    let human = human_age(species, exact);

    Ok(AgeResult {
        chronological: chronological_age(elapsed),
        exact_years: exact,
        human_age_years: human.round() as i64,
    })
}
