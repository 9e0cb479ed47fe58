//! Parsing of menu choices and list-valued answers.

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Find,
    Search,
    Edit,
    Delete,
    List,
    DaysToBirthday,
    UpcomingBirthdays,
    Save,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order, with their key and label.
    pub const ALL: [(MenuChoice, &'static str, &'static str); 10] = [
        (MenuChoice::Add, "1", "Add contact"),
        (MenuChoice::Find, "2", "Find contact by name"),
        (MenuChoice::Search, "3", "Search by name or phone"),
        (MenuChoice::Edit, "4", "Edit contact"),
        (MenuChoice::Delete, "5", "Delete contact"),
        (MenuChoice::List, "6", "List all contacts"),
        (MenuChoice::DaysToBirthday, "7", "Days to birthday"),
        (MenuChoice::UpcomingBirthdays, "8", "Upcoming birthdays"),
        (MenuChoice::Save, "9", "Save"),
        (MenuChoice::Exit, "0", "Exit"),
    ];

    /// Parse a menu key. Besides the numeric keys, `q`, `quit` and `exit`
    /// select [`MenuChoice::Exit`].
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => return Some(MenuChoice::Exit),
            _ => {}
        }
        Self::ALL
            .iter()
            .find(|(_, key, _)| *key == input)
            .map(|(choice, _, _)| *choice)
    }
}

/// Split a comma-separated answer into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Treat a blank answer as "no value".
pub fn non_empty(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}
