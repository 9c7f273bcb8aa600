use std::collections::BTreeMap;

use unicode_width::UnicodeWidthStr;

use crate::command::Command;

/// Column width child names are padded to in help listings.
const NAME_WIDTH: usize = 10;

/// The named children of a [`Command`].
///
/// Backed by a sorted map so the help listing renders in a stable,
/// name-sorted order.
#[derive(Default)]
pub struct CommandSet {
    entries: BTreeMap<String, Command>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.entries.get_mut(name)
    }

    /// Children in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.entries.values()
    }

    pub(crate) fn insert(&mut self, command: Command) {
        self.entries.insert(command.name().to_string(), command);
    }

    /// One listing line per child: the name padded to a fixed column, then
    /// its description.
    pub fn help(&self) -> String {
        let mut out = String::new();
        for command in self.entries.values() {
            let pad = NAME_WIDTH.saturating_sub(command.name().width());
            out.push_str("  ");
            out.push_str(command.name());
            out.push_str(&" ".repeat(pad));
            out.push_str("  ");
            out.push_str(&command.description);
            out.push('\n');
        }
        out
    }
}
