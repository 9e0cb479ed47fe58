//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidatedField};
use crate::error::{AddressBookError, BookResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A contact: name, phone numbers, email addresses and an optional birthday.
///
/// Phones keep insertion order and never hold two equal values. Emails are
/// stored as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default, deserialize_with = "deserialize_phones")]
    phones: Vec<Phone>,

    #[serde(default)]
    emails: Vec<String>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

/// Deserialize phones, dropping repeated values so a hand-edited save file
/// cannot break the no-duplicates rule.
fn deserialize_phones<'de, D>(deserializer: D) -> Result<Vec<Phone>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries: Vec<Phone> = Vec::deserialize(deserializer)?;
    let mut phones: Vec<Phone> = Vec::with_capacity(entries.len());
    for phone in entries {
        if !phones.contains(&phone) {
            phones.push(phone);
        }
    }
    Ok(phones)
}

impl Record {
    /// Create a record with no phones, emails or birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
        }
    }

    /// The record's name. It doubles as the key in an address book.
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Adding a value that is already stored is a no-op.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = Phone::new(raw)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// First phone whose value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Remove the phone equal to `phone`, if present.
    pub fn delete_phone(&mut self, phone: &Phone) {
        if let Some(index) = self.phone_index(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace `old` with a newly validated number at the same position.
    ///
    /// # Errors
    ///
    /// - `PhoneNotFound` if `old` is not stored on this record
    /// - `Validation` if `new` is not a well-formed phone number
    pub fn edit_phone(&mut self, old: &Phone, new: &str) -> BookResult<()> {
        let index = self
            .phone_index(old)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;
        let phone = Phone::new(new)?;

        match self.phone_index(&phone) {
            // Already stored elsewhere: drop the old slot instead of duplicating.
            Some(existing) if existing != index => {
                self.phones.remove(index);
            }
            _ => self.phones[index] = phone,
        }

        tracing::debug!(name = %self.name, old = %old, new = %new, "Phone edited");
        Ok(())
    }

    fn phone_index(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }

    /// Replace all phones at once.
    ///
    /// Every value is validated before anything changes; the first invalid
    /// entry aborts and leaves the current phones in place.
    pub fn replace_phones<S: AsRef<str>>(&mut self, raws: &[S]) -> BookResult<()> {
        self.phones = Self::validate_phones(raws)?;
        Ok(())
    }

    pub(crate) fn validate_phones<S: AsRef<str>>(raws: &[S]) -> BookResult<Vec<Phone>> {
        let mut phones: Vec<Phone> = Vec::with_capacity(raws.len());
        for raw in raws {
            let phone = Phone::new(raw.as_ref())?;
            if !phones.contains(&phone) {
                phones.push(phone);
            }
        }
        Ok(phones)
    }

    pub(crate) fn commit_phones(&mut self, phones: Vec<Phone>) {
        self.phones = phones;
    }

    /// Append an email address unless it is already stored.
    pub fn add_email(&mut self, email: impl Into<String>) {
        let email = email.into();
        if !self.emails.contains(&email) {
            self.emails.push(email);
        }
    }

    /// Remove an email address, if present.
    pub fn remove_email(&mut self, email: &str) {
        self.emails.retain(|e| e != email);
    }

    pub fn set_emails(&mut self, emails: Vec<String>) {
        self.emails = emails;
    }

    /// Set or clear the birthday.
    ///
    /// `None` clears it; a string is validated exactly like
    /// [`Birthday::new`] and the current value is kept on error.
    pub fn set_birthday(&mut self, raw: Option<&str>) -> BookResult<()> {
        self.birthday = match raw {
            Some(raw) => Some(Birthday::parse(raw)?),
            None => None,
        };
        Ok(())
    }

    pub(crate) fn commit_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// Returns `None` when no birthday is set. A birthday falling on `today`
    /// yields 0.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let mut next = birthday.anniversary_in(today.year())?;
        if next < today {
            next = birthday.anniversary_in(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }

    /// Case-insensitive substring match against the name or any phone.
    ///
    /// `query` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, query: &str) -> bool {
        self.name.as_str().to_lowercase().contains(query)
            || self
                .phones
                .iter()
                .any(|p| p.as_str().to_lowercase().contains(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record_is_empty() {
        let r = record("Alice");
        assert_eq!(r.name().as_str(), "Alice");
        assert!(r.phones().is_empty());
        assert!(r.emails().is_empty());
        assert!(r.birthday().is_none());
    }

    #[test]
    fn test_add_phone_ignores_duplicates() {
        let mut r = record("Alice");
        r.add_phone("+12-345-345-345").unwrap();
        r.add_phone("+12-345-345-345").unwrap();
        r.add_phone("+99-111-111-111").unwrap();
        assert_eq!(r.phones().len(), 2);
        assert_eq!(r.phones()[0].as_str(), "+12-345-345-345");
        assert_eq!(r.phones()[1].as_str(), "+99-111-111-111");
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut r = record("Alice");
        let err = r.add_phone("12345").unwrap_err();
        assert_eq!(
            err,
            AddressBookError::Validation(ValidationError::InvalidPhoneFormat("12345".into()))
        );
        assert!(r.phones().is_empty());
    }

    #[test]
    fn test_find_and_delete_phone() {
        let mut r = record("Alice");
        r.add_phone("+12-345-345-345").unwrap();
        r.add_phone("+99-111-111-111").unwrap();

        let found = r.find_phone("+99-111-111-111").cloned().unwrap();
        assert!(r.find_phone("+00-000-000-000").is_none());

        r.delete_phone(&found);
        assert_eq!(r.phones().len(), 1);
        assert!(r.find_phone("+99-111-111-111").is_none());

        // Deleting an absent phone is a no-op.
        r.delete_phone(&found);
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_keeps_position() {
        let mut r = record("Alice");
        r.add_phone("+11-111-111-111").unwrap();
        r.add_phone("+22-222-222-222").unwrap();
        r.add_phone("+33-333-333-333").unwrap();

        let old = Phone::new("+22-222-222-222").unwrap();
        r.edit_phone(&old, "+44-444-444-444").unwrap();

        let values: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(
            values,
            vec!["+11-111-111-111", "+44-444-444-444", "+33-333-333-333"]
        );
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut r = record("Alice");
        r.add_phone("+11-111-111-111").unwrap();
        let old = Phone::new("+22-222-222-222").unwrap();
        let err = r.edit_phone(&old, "+44-444-444-444").unwrap_err();
        assert_eq!(
            err,
            AddressBookError::PhoneNotFound("+22-222-222-222".to_string())
        );
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record() {
        let mut r = record("Alice");
        r.add_phone("+11-111-111-111").unwrap();
        let old = Phone::new("+11-111-111-111").unwrap();
        assert!(matches!(
            r.edit_phone(&old, "bad"),
            Err(AddressBookError::Validation(_))
        ));
        assert_eq!(r.phones(), &[old]);
    }

    #[test]
    fn test_edit_phone_onto_existing_value_collapses() {
        let mut r = record("Alice");
        r.add_phone("+11-111-111-111").unwrap();
        r.add_phone("+22-222-222-222").unwrap();
        let old = Phone::new("+11-111-111-111").unwrap();
        r.edit_phone(&old, "+22-222-222-222").unwrap();
        assert_eq!(r.phones().len(), 1);
        assert_eq!(r.phones()[0].as_str(), "+22-222-222-222");
    }

    #[test]
    fn test_replace_phones_is_all_or_nothing() {
        let mut r = record("Alice");
        r.add_phone("+11-111-111-111").unwrap();
        assert!(r
            .replace_phones(&["+22-222-222-222", "oops", "+33-333-333-333"])
            .is_err());
        assert_eq!(r.phones().len(), 1);
        assert_eq!(r.phones()[0].as_str(), "+11-111-111-111");

        r.replace_phones(&["+22-222-222-222", "+22-222-222-222"]).unwrap();
        assert_eq!(r.phones().len(), 1);
        assert_eq!(r.phones()[0].as_str(), "+22-222-222-222");
    }

    #[test]
    fn test_emails() {
        let mut r = record("Alice");
        r.add_email("alice@example.com");
        r.add_email("alice@example.com");
        r.add_email("a@work.example");
        assert_eq!(r.emails().len(), 2);
        r.remove_email("alice@example.com");
        assert_eq!(r.emails(), &["a@work.example".to_string()]);
    }

    #[test]
    fn test_set_birthday() {
        let mut r = record("Alice");
        r.set_birthday(Some("1990-07-15")).unwrap();
        assert_eq!(r.birthday().unwrap().as_str(), "1990-07-15");

        assert!(r.set_birthday(Some("1990-02-30")).is_err());
        assert_eq!(r.birthday().unwrap().as_str(), "1990-07-15");

        r.set_birthday(None).unwrap();
        assert!(r.birthday().is_none());
    }

    #[test]
    fn test_days_to_next_birthday() {
        let mut r = record("Alice");
        assert_eq!(r.days_to_next_birthday(date(2024, 3, 10)), None);

        r.set_birthday(Some("2000-03-10")).unwrap();
        assert_eq!(r.days_to_next_birthday(date(2024, 3, 10)), Some(0));
        assert_eq!(r.days_to_next_birthday(date(2024, 3, 11)), Some(364));
        assert_eq!(r.days_to_next_birthday(date(2024, 3, 9)), Some(1));
        assert_eq!(r.days_to_next_birthday(date(2023, 3, 11)), Some(365));
    }

    #[test]
    fn test_days_to_leap_day_birthday() {
        let mut r = record("Leap");
        r.set_birthday(Some("2000-02-29")).unwrap();
        assert_eq!(r.days_to_next_birthday(date(2023, 2, 28)), Some(0));
        assert_eq!(r.days_to_next_birthday(date(2024, 2, 28)), Some(1));
    }

    #[test]
    fn test_matches_lowercase() {
        let mut r = record("Alice Smith");
        r.add_phone("+12-345-345-345").unwrap();
        assert!(r.matches_lowercase("alice"));
        assert!(r.matches_lowercase("smith"));
        assert!(r.matches_lowercase("345-345"));
        assert!(r.matches_lowercase(""));
        assert!(!r.matches_lowercase("bob"));
    }

    #[test]
    fn test_deserialize_rejects_invalid_phone() {
        let json = r#"{"name":"Alice","phones":["123"],"emails":[],"birthday":null}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
