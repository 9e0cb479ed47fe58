//! The address book: a name-keyed collection of records.

use super::record::Record;
use crate::domain::{Birthday, ValidatedField};
use crate::error::{AddressBookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A collection of contact records keyed by name.
///
/// Records keep the order in which their names were first added. Re-adding a
/// name replaces the stored record in place (last write wins). The key of
/// every entry always equals its record's name: records enter only through
/// [`AddressBook::add_record`], and stored records are changed only through
/// the book's name-keyed mutators, which never touch the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    entries: HashMap<String, Record>,
    order: Vec<String>,
    page_size: usize,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    /// Number of records per page yielded by [`AddressBook::paginate`].
    pub const DEFAULT_PAGE_SIZE: usize = 5;

    /// Create an empty address book.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Use a different page size. Values below 1 are clamped to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    /// Insert a record under its name, replacing any record with that name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.entries.insert(key.clone(), record);
        if previous.is_some() {
            tracing::warn!(name = %key, "Overwriting existing contact");
        } else {
            tracing::debug!(name = %key, "Contact added");
            self.order.push(key);
        }
        previous
    }

    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    /// Stored records are only mutated through the book, so a key always
    /// matches its record's name.
    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))
    }

    /// Validate and add a phone to the record stored under `name`.
    pub fn add_phone(&mut self, name: &str, raw: &str) -> BookResult<()> {
        self.record_mut(name)?.add_phone(raw)
    }

    /// Replace the phone `old` on the record stored under `name`.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if no record has this name
    /// - `PhoneNotFound` if the record has no phone equal to `old`
    /// - `Validation` if `new` is not a well-formed phone number
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        let record = self.record_mut(name)?;
        let old = record
            .find_phone(old)
            .cloned()
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;
        record.edit_phone(&old, new)
    }

    /// Remove a phone from the record stored under `name`. An absent phone
    /// is a no-op.
    pub fn delete_phone(&mut self, name: &str, value: &str) -> BookResult<()> {
        let record = self.record_mut(name)?;
        if let Some(phone) = record.find_phone(value).cloned() {
            record.delete_phone(&phone);
        }
        Ok(())
    }

    pub fn add_email(&mut self, name: &str, email: impl Into<String>) -> BookResult<()> {
        self.record_mut(name)?.add_email(email);
        Ok(())
    }

    pub fn remove_email(&mut self, name: &str, email: &str) -> BookResult<()> {
        self.record_mut(name)?.remove_email(email);
        Ok(())
    }

    /// Set or clear the birthday of the record stored under `name`.
    pub fn set_birthday(&mut self, name: &str, raw: Option<&str>) -> BookResult<()> {
        self.record_mut(name)?.set_birthday(raw)
    }

    /// Replace a record's phones and emails, and optionally its birthday.
    ///
    /// All phones and the birthday are validated before anything is written,
    /// so a single invalid value leaves the record exactly as it was. An
    /// empty or missing `new_birthday` keeps the current birthday.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if no record has this name
    /// - `Validation` for the first invalid phone or an invalid birthday
    pub fn edit_record<S: AsRef<str>>(
        &mut self,
        name: &str,
        new_phones: &[S],
        new_emails: Vec<String>,
        new_birthday: Option<&str>,
    ) -> BookResult<()> {
        let record = self.record_mut(name)?;

        let phones = Record::validate_phones(new_phones)?;
        let birthday = match new_birthday {
            Some(raw) if !raw.is_empty() => Some(Birthday::parse(raw)?),
            _ => None,
        };

        record.commit_phones(phones);
        record.set_emails(new_emails);
        if let Some(birthday) = birthday {
            record.commit_birthday(birthday);
        }

        tracing::debug!(name = %name, "Contact edited");
        Ok(())
    }

    /// Remove the record stored under `name`.
    pub fn delete_record(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .entries
            .remove(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        tracing::debug!(name = %name, "Contact deleted");
        Ok(record)
    }

    /// Iterate over the book in chunks of up to `page_size` records.
    ///
    /// The records are snapshotted when this is called, so later changes to
    /// the book do not affect the pages. Each call starts from the beginning.
    pub fn paginate(&self) -> Pages {
        Pages {
            records: self.iter().cloned().collect::<Vec<_>>().into_iter(),
            page_size: self.page_size,
        }
    }

    /// Records whose name or any phone contains `query`, ignoring case.
    ///
    /// Results follow insertion order. An empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.iter()
            .filter(|record| record.matches_lowercase(&query))
            .collect()
    }

    /// Records with a birthday in the next `within_days` days (inclusive),
    /// paired with the day count and sorted soonest first.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .iter()
            .filter_map(|record| {
                record
                    .days_to_next_birthday(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();
        // Stable sort keeps insertion order between equal day counts.
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }
}

/// Lazy sequence of pages produced by [`AddressBook::paginate`].
#[derive(Debug)]
pub struct Pages {
    records: std::vec::IntoIter<Record>,
    page_size: usize,
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<Record> = self.records.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}

// Serde support - the book is stored as its records in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records: Vec<Record> = Vec::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
