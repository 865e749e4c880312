use serde::{Deserialize, Serialize};

use crate::age::get_age;
use crate::AgeError;

/// The slice of a user profile the age accessor reads.
///
/// Both fields are optional: older records only carry a stored `age`,
/// newer ones carry a `birthdate` that supersedes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// ISO 8601 calendar date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl Profile {
    /// Returns the profile's age as of the local wall-clock date.
    ///
    /// # Errors
    ///
    /// Returns [`AgeError::InvalidBirthdate`] if `birthdate` is set but is
    /// not a `YYYY-MM-DD` date.
    pub fn age_today(&self) -> Result<Option<i32>, AgeError> {
        get_age(self, chrono::Local::now().date_naive())
    }
}
