//! Interactive menu shell.
//!
//! The shell reads menu choices and answers from any [`BufRead`], writes to
//! any [`Write`], and drives [`AddressBook`] operations. Comma-separated
//! phone and email lists are split here; the core only sees clean values.
//! Operation errors are printed and the loop carries on. Exit and end of
//! input both save the book.

pub mod input;
pub mod render;

use crate::domain::{Name, Phone};
use crate::error::AddressBookError;
use crate::models::{AddressBook, Record};
use crate::repositories::AddressBookRepository;
use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

pub use input::MenuChoice;
use input::{non_empty, split_list};
use render::{format_days, format_record};

/// Interactive address book session.
pub struct Shell<R, I, O> {
    book: AddressBook,
    repo: R,
    input: I,
    output: O,
    autosave: bool,
    today: Option<NaiveDate>,
}

impl<R, I, O> Shell<R, I, O>
where
    R: AddressBookRepository,
    I: BufRead,
    O: Write,
{
    /// Create a shell over an already loaded book.
    pub fn new(book: AddressBook, repo: R, input: I, output: O) -> Self {
        Self {
            book,
            repo,
            input,
            output,
            autosave: true,
            today: None,
        }
    }

    /// Save after every change (default: on).
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Pin "today" for birthday calculations instead of the local date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails or the final save fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };
            tracing::debug!(?choice, "Menu choice");

            match choice {
                MenuChoice::Add => self.add_contact()?,
                MenuChoice::Find => self.find_contact()?,
                MenuChoice::Search => self.search_contacts()?,
                MenuChoice::Edit => self.edit_contact()?,
                MenuChoice::Delete => self.delete_contact()?,
                MenuChoice::List => self.list_contacts()?,
                MenuChoice::DaysToBirthday => self.days_to_birthday()?,
                MenuChoice::UpcomingBirthdays => self.upcoming_birthdays()?,
                MenuChoice::Save => {
                    if self.save()? {
                        writeln!(self.output, "Address book saved.")?;
                    }
                }
                MenuChoice::Exit => break,
            }
        }

        self.repo.save(&self.book)?;
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Menu:")?;
        for (_, key, label) in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", key, label)?;
        }
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &AddressBookError) -> Result<()> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    /// Save now. Failures are printed rather than ending the session.
    fn save(&mut self) -> Result<bool> {
        match self.repo.save(&self.book) {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::error!("Failed to save address book: {}", e);
                writeln!(self.output, "Error: {}", e)?;
                Ok(false)
            }
        }
    }

    fn autosave(&mut self) -> Result<()> {
        if self.autosave {
            self.save()?;
        }
        Ok(())
    }

    fn add_contact(&mut self) -> Result<()> {
        let Some(raw_name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let name = match Name::new(raw_name) {
            Ok(name) => name,
            Err(e) => return self.report(&e.into()),
        };

        let Some(phones) = self.prompt("Phones (comma separated, +11-111-111-111): ")? else {
            return Ok(());
        };
        let Some(emails) = self.prompt("Emails (comma separated): ")? else {
            return Ok(());
        };
        let Some(birthday) = self.prompt("Birthday (yyyy-mm-dd, blank to skip): ")? else {
            return Ok(());
        };

        let mut record = Record::new(name);
        let built = record
            .replace_phones(split_list(&phones).as_slice())
            .and_then(|_| record.set_birthday(non_empty(&birthday)));
        if let Err(e) = built {
            return self.report(&e);
        }
        for email in split_list(&emails) {
            record.add_email(email);
        }

        let existed = self.book.add_record(record).is_some();
        if existed {
            writeln!(self.output, "Contact updated (name already existed).")?;
        } else {
            writeln!(self.output, "Contact added.")?;
        }
        self.autosave()
    }

    fn find_contact(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let today = self.today();
        match self.book.find_record(&name) {
            Some(record) => writeln!(self.output, "{}", format_record(record, today))?,
            None => {
                let err = AddressBookError::RecordNotFound(name);
                self.report(&err)?;
            }
        }
        Ok(())
    }

    fn search_contacts(&mut self) -> Result<()> {
        let Some(query) = self.prompt("Name or phone to search for: ")? else {
            return Ok(());
        };
        let today = self.today();
        let results = self.book.search(&query);
        if results.is_empty() {
            writeln!(self.output, "No contacts found.")?;
        }
        for record in results {
            writeln!(self.output, "{}", format_record(record, today))?;
        }
        Ok(())
    }

    fn edit_contact(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Name of contact to edit: ")? else {
            return Ok(());
        };
        if !self.book.contains(&name) {
            return self.report(&AddressBookError::RecordNotFound(name));
        }

        let Some(phones) = self.prompt("New phones (comma separated): ")? else {
            return Ok(());
        };
        let Some(emails) = self.prompt("New emails (comma separated): ")? else {
            return Ok(());
        };
        let Some(birthday) = self.prompt("New birthday (yyyy-mm-dd, blank to keep): ")? else {
            return Ok(());
        };

        let phones = split_list(&phones);
        match self.book.edit_record(
            &name,
            phones.as_slice(),
            split_list(&emails),
            non_empty(&birthday),
        ) {
            Ok(()) => {
                writeln!(self.output, "Contact updated.")?;
                self.autosave()
            }
            Err(e) => self.report(&e),
        }
    }

    fn delete_contact(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Name of contact to delete: ")? else {
            return Ok(());
        };
        match self.book.delete_record(&name) {
            Ok(_) => {
                writeln!(self.output, "Contact deleted.")?;
                self.autosave()
            }
            Err(e) => self.report(&e),
        }
    }

    fn list_contacts(&mut self) -> Result<()> {
        if self.book.is_empty() {
            writeln!(self.output, "Address book is empty.")?;
            return Ok(());
        }

        let today = self.today();
        let mut pages = self.book.paginate().enumerate().peekable();
        while let Some((index, page)) = pages.next() {
            writeln!(self.output, "Page {}:", index + 1)?;
            for record in &page {
                writeln!(self.output, "{}", format_record(record, today))?;
            }
            if pages.peek().is_none() {
                break;
            }
            match self.prompt("Press Enter for the next page, q to stop: ")? {
                Some(answer) if answer.eq_ignore_ascii_case("q") => break,
                Some(_) => {}
                None => break,
            }
        }
        Ok(())
    }

    fn days_to_birthday(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let today = self.today();
        let days = match self.book.find_record(&name) {
            Some(record) => record.days_to_next_birthday(today),
            None => return self.report(&AddressBookError::RecordNotFound(name)),
        };
        match days {
            Some(days) => writeln!(self.output, "{}'s birthday is {}.", name, format_days(days))?,
            None => writeln!(self.output, "{} has no birthday set.", name)?,
        }
        Ok(())
    }

    fn upcoming_birthdays(&mut self) -> Result<()> {
        let Some(raw) = self.prompt("Within how many days? ")? else {
            return Ok(());
        };
        let within_days = match raw.parse::<i64>() {
            Ok(days) if days >= 0 => days,
            _ => {
                writeln!(self.output, "Please enter a non-negative number of days.")?;
                return Ok(());
            }
        };

        let today = self.today();
        let upcoming: Vec<String> = self
            .book
            .upcoming_birthdays(today, within_days)
            .into_iter()
            .map(|(record, days)| {
                let phone = record.phones().first().map(Phone::as_str).unwrap_or("-");
                format!("{} ({}): {}", record.name(), phone, format_days(days))
            })
            .collect();

        if upcoming.is_empty() {
            writeln!(self.output, "No birthdays in the next {} days.", within_days)?;
        }
        for line in upcoming {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }
}
