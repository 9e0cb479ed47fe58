//! Text rendering of records for the shell.

use crate::domain::ValidatedField;
use crate::models::Record;
use chrono::NaiveDate;

pub const SEPARATOR: &str = "--------------------";

fn join_or_dash<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let joined = values.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

/// Multi-line description of a record, followed by a separator line.
pub fn format_record(record: &Record, today: NaiveDate) -> String {
    let phones = join_or_dash(record.phones().iter().map(|p| p.value()));
    let emails = join_or_dash(record.emails().iter().map(String::as_str));
    let birthday = match (record.birthday(), record.days_to_next_birthday(today)) {
        (Some(birthday), Some(days)) => format!("{} ({})", birthday, format_days(days)),
        _ => "-".to_string(),
    };

    format!(
        "Name: {}\nPhones: {}\nEmails: {}\nBirthday: {}\n{}",
        record.name(),
        phones,
        emails,
        birthday,
        SEPARATOR
    )
}

/// Human wording for a day count until a birthday.
pub fn format_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {} days", n),
    }
}
