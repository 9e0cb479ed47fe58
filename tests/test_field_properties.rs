//! Property tests for the phone and birthday validators.

use address_book::{Birthday, Phone, ValidationError};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn well_formed_phones_are_accepted(phone in r"\+[0-9]{2}-[0-9]{3}-[0-9]{3}-[0-9]{3}") {
        let parsed = Phone::new(phone.clone()).unwrap();
        prop_assert_eq!(parsed.as_str(), phone.as_str());
    }

    #[test]
    fn other_strings_are_rejected_as_phones(raw in ".*") {
        let shaped = raw.len() == 15
            && raw.starts_with('+')
            && raw.char_indices().skip(1).all(|(i, c)| match i {
                3 | 7 | 11 => c == '-',
                _ => c.is_ascii_digit(),
            });
        prop_assume!(!shaped);
        prop_assert_eq!(
            Phone::new(raw.clone()),
            Err(ValidationError::InvalidPhoneFormat(raw))
        );
    }

    #[test]
    fn real_dates_are_accepted(days in 0i64..(365 * 200)) {
        let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let date = base + chrono::Duration::days(days);
        let raw = date.format("%Y-%m-%d").to_string();
        let birthday = Birthday::new(raw.clone()).unwrap();
        prop_assert_eq!(birthday.as_str(), raw.as_str());
        prop_assert_eq!(birthday.date(), date);
    }

    #[test]
    fn day_past_month_end_is_rejected(year in 1900i32..2100, month in 1u32..=12) {
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .unwrap();
        let last_day = next_month.pred_opt().unwrap();
        let raw = format!("{:04}-{:02}-{:02}", year, month, last_day.day() + 1);
        prop_assert!(matches!(
            Birthday::new(raw),
            Err(ValidationError::InvalidDateFormat(_))
        ));
    }
}

#[test]
fn test_february_thirtieth_is_rejected() {
    assert_eq!(
        Birthday::new("2023-02-30"),
        Err(ValidationError::InvalidDateFormat("2023-02-30".to_string()))
    );
}
