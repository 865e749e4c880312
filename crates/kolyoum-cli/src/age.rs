use chrono::NaiveDate;
use kolyoum_core::{get_age, Profile};

/// Resolve and print an age the same way profile pages do.
///
/// # Errors
///
/// Returns an error if the birthdate does not parse, or if neither a
/// birthdate nor a stored age is available.
pub(crate) fn run_age(
    birthdate: Option<String>,
    stored_age: Option<i32>,
    today: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let profile = Profile {
        birthdate,
        age: stored_age,
    };
    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());

    match get_age(&profile, today)? {
        Some(age) => {
            println!("{age}");
            Ok(())
        }
        None => anyhow::bail!("profile has neither a birthdate nor a stored age"),
    }
}
