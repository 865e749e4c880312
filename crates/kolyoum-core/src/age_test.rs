use chrono::NaiveDate;

use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn reference() -> NaiveDate {
    day(2024, 6, 15)
}

#[test]
fn birthday_already_passed_this_year() {
    assert_eq!(calculate_age("1990-01-01", reference()).unwrap(), 34);
    assert_eq!(calculate_age("1990-06-14", reference()).unwrap(), 34);
    assert_eq!(calculate_age("2010-05-31", reference()).unwrap(), 14);
}

#[test]
fn birthday_not_yet_reached_this_year() {
    assert_eq!(calculate_age("1990-06-16", reference()).unwrap(), 33);
    assert_eq!(calculate_age("1990-07-01", reference()).unwrap(), 33);
    assert_eq!(calculate_age("1990-12-31", reference()).unwrap(), 33);
}

#[test]
fn birthday_today_counts_as_occurred() {
    assert_eq!(calculate_age("1990-06-15", reference()).unwrap(), 34);
}

#[test]
fn born_on_reference_date_is_zero() {
    assert_eq!(calculate_age("2024-06-15", reference()).unwrap(), 0);
}

#[test]
fn leap_day_birthdate_in_non_leap_year() {
    assert_eq!(calculate_age("2000-02-29", day(2023, 2, 28)).unwrap(), 22);
    assert_eq!(calculate_age("2000-02-29", day(2023, 3, 1)).unwrap(), 23);
    assert_eq!(calculate_age("2000-02-29", day(2024, 2, 29)).unwrap(), 24);
}

#[test]
fn only_zero_padded_iso_dates_are_accepted() {
    for input in [
        "2000-6-5",
        "2000-06-5",
        "+2000-06-15",
        " 2000-06-15",
        "2000-06-15\n",
        "2000/06/15",
        "2000-06-15T00:00",
    ] {
        let result = calculate_age(input, reference());
        assert!(
            matches!(result, Err(AgeError::InvalidBirthdate { .. })),
            "expected InvalidBirthdate for {input:?}, got: {result:?}"
        );
    }
}

#[test]
fn unparseable_birthdate_is_an_error() {
    for input in ["", "not-a-date", "2000-13-01", "2001-02-29", "15/06/2000"] {
        let result = calculate_age(input, reference());
        assert!(
            matches!(result, Err(AgeError::InvalidBirthdate { input: ref got, .. }) if got == input),
            "expected InvalidBirthdate for {input:?}, got: {result:?}"
        );
    }
}

#[test]
fn get_age_prefers_birthdate_on_the_day() {
    let profile = Profile {
        birthdate: Some("2000-06-15".to_string()),
        age: None,
    };
    assert_eq!(get_age(&profile, reference()).unwrap(), Some(24));
}

#[test]
fn get_age_prefers_birthdate_the_day_before() {
    let profile = Profile {
        birthdate: Some("2000-06-16".to_string()),
        age: None,
    };
    assert_eq!(get_age(&profile, reference()).unwrap(), Some(23));
}

#[test]
fn get_age_falls_back_to_stored_age() {
    let profile = Profile {
        birthdate: None,
        age: Some(30),
    };
    assert_eq!(get_age(&profile, reference()).unwrap(), Some(30));
}

#[test]
fn get_age_treats_empty_birthdate_as_absent() {
    let profile = Profile {
        birthdate: Some(String::new()),
        age: Some(30),
    };
    assert_eq!(get_age(&profile, reference()).unwrap(), Some(30));
}

#[test]
fn get_age_ignores_inconsistent_stored_age() {
    let profile = Profile {
        birthdate: Some("2000-06-15".to_string()),
        age: Some(99),
    };
    assert_eq!(get_age(&profile, reference()).unwrap(), Some(24));
}

#[test]
fn get_age_returns_none_for_empty_profile() {
    assert_eq!(get_age(&Profile::default(), reference()).unwrap(), None);
}

#[test]
fn get_age_propagates_invalid_birthdate() {
    let profile = Profile {
        birthdate: Some("2000-02-30".to_string()),
        age: Some(24),
    };
    assert!(get_age(&profile, reference()).is_err());
}
