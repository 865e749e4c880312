//! Whole-year age arithmetic.
//!
//! The core functions take the reference date as a parameter so results are
//! deterministic; [`calculate_age_today`] is the only place the wall clock is
//! read.

use chrono::{Datelike, NaiveDate};

use crate::profile::Profile;
use crate::AgeError;

const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Computes the age in whole years on `today` for a `YYYY-MM-DD` birthdate.
///
/// Only the exact zero-padded form is accepted; surrounding whitespace,
/// signs and single-digit fields are rejected.
///
/// The year difference is reduced by one when `today`'s month/day falls
/// strictly before the birth month/day. A matching month/day counts as the
/// birthday having occurred. February 29 birthdates are compared as-is, so in
/// non-leap years the birthday is reached on March 1.
///
/// # Errors
///
/// Returns [`AgeError::InvalidBirthdate`] if `birthdate` is not a valid
/// calendar date in exactly `YYYY-MM-DD` form.
pub fn calculate_age(birthdate: &str, today: NaiveDate) -> Result<i32, AgeError> {
    let invalid = |reason: String| AgeError::InvalidBirthdate {
        input: birthdate.to_string(),
        reason,
    };

    // chrono alone would also take unpadded fields and signed years.
    if !is_zero_padded_iso_date(birthdate) {
        return Err(invalid("expected YYYY-MM-DD".to_string()));
    }
    let born = NaiveDate::parse_from_str(birthdate, BIRTHDATE_FORMAT)
        .map_err(|e| invalid(e.to_string()))?;

    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    Ok(age)
}

fn is_zero_padded_iso_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// [`calculate_age`] against the local calendar date.
///
/// # Errors
///
/// Returns [`AgeError::InvalidBirthdate`] if `birthdate` does not parse.
pub fn calculate_age_today(birthdate: &str) -> Result<i32, AgeError> {
    calculate_age(birthdate, chrono::Local::now().date_naive())
}

/// Resolves a profile's age on `today`.
///
/// A non-empty `birthdate` always wins, even if a stored `age` disagrees with
/// it. Without one the stored `age` is returned unchanged, which may be `None`.
///
/// # Errors
///
/// Returns [`AgeError::InvalidBirthdate`] if the profile's birthdate does not
/// parse. The stored `age` is not used as a fallback in that case.
pub fn get_age(profile: &Profile, today: NaiveDate) -> Result<Option<i32>, AgeError> {
    match profile.birthdate.as_deref() {
        Some(birthdate) if !birthdate.is_empty() => calculate_age(birthdate, today).map(Some),
        _ => Ok(profile.age),
    }
}

#[cfg(test)]
#[path = "age_test.rs"]
mod tests;
