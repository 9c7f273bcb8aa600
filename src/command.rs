//! Command nodes and the recursive dispatch algorithm.
//!
//! A [`Command`] is one node of a tree: a name, a flag set, a registry of
//! children, and a handler. [`Command::run`] walks the tree with the raw
//! argument vector, consuming one leading token per level, until it reaches
//! a node with no matching child — that node's handler runs. Flags are
//! parsed at every level on the way down, so each level rejects tokens it
//! does not understand before any deeper level sees them.

use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::flags::{ErrorHandling, FlagSet};
use crate::registry::CommandSet;

/// Completion logic attached to a [`Command`].
pub enum Handler {
    /// Placeholder used until real logic is registered; reports that the
    /// command is a work in progress.
    Wip,
    /// User-supplied logic, invoked with the owning command.
    Func(Box<dyn Fn(&Command) -> Result<()>>),
}

/// One node of a command tree.
pub struct Command {
    level: usize,
    name: String,
    /// Usage prefix shown in help, typically the path of parent command
    /// names (e.g. `"cli"` for a child of the `cli` root).
    pub usage: String,
    pub description: String,
    flags: FlagSet,
    commands: CommandSet,
    handler: Handler,
}

/// Returns the first token when it names a command, `None` when the
/// sequence is empty or the token is flag-prefixed. Only the first element
/// is ever inspected.
fn is_command(args: &[String]) -> Option<&str> {
    let first = args.first()?;
    if first.is_empty() || first.starts_with('-') {
        return None;
    }
    Some(first)
}

impl Command {
    /// Creates an unattached command with an empty child set, a fresh flag
    /// set carrying the built-in `help` flag, and the placeholder handler.
    pub fn new(name: impl Into<String>, handling: ErrorHandling) -> Self {
        let name = name.into();
        Command {
            level: 0,
            flags: FlagSet::new(name.clone(), handling),
            name,
            usage: String::new(),
            description: String::new(),
            commands: CommandSet::new(),
            handler: Handler::Wip,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Depth from the root of the tree this command is attached to; 0 for
    /// a root or a not-yet-attached command.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }

    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Mutable access to the children, used to wire grandchildren after a
    /// child has been attached. Trees are built top-down: attach a node
    /// first, then reach it here to attach its own children, so that every
    /// level is assigned exactly once.
    pub fn commands_mut(&mut self) -> &mut CommandSet {
        &mut self.commands
    }

    /// Installs the logic run when dispatch lands on this node.
    pub fn set_handler<F>(&mut self, handler: F)
    where
        F: Fn(&Command) -> Result<()> + 'static,
    {
        self.handler = Handler::Func(Box::new(handler));
    }

    /// Attaches `command` as a child of this node.
    ///
    /// The child is taken by value: once attached it lives inside this
    /// node's registry, so it cannot also be attached elsewhere and a tree
    /// can never contain a cycle. Fails without touching the existing
    /// child when a sibling of the same name is already present.
    pub fn add(&mut self, mut command: Command) -> Result<()> {
        if self.commands.contains(command.name()) {
            return Err(Error::DuplicateCommand(command.name().to_string()));
        }
        command.level = self.level + 1;
        self.commands.insert(command);
        Ok(())
    }

    /// Attaches each command in order, stopping at and returning the first
    /// failure. Commands attached before the failing one stay attached.
    pub fn add_commands(&mut self, commands: Vec<Command>) -> Result<()> {
        for command in commands {
            self.add(command)?;
        }
        Ok(())
    }

    /// Parses `args` against this command's flag set.
    pub fn init(&mut self, args: &[String]) -> Result<()> {
        self.flags.parse(args)
    }

    /// The usage block of the help text. The format is stable.
    pub fn help(&self) -> String {
        format!(
            "Usage: {} {}\n\n{}\n\n",
            self.usage, self.name, self.description
        )
    }

    /// Writes the full help: the usage block, then the flag listing, then
    /// the child listing (empty when there are no children).
    pub fn write_help<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{}", self.help())?;
        self.flags.write_defaults(w)?;
        write!(w, "{}", self.commands.help())
    }

    /// [`Command::write_help`] to stdout.
    pub fn print_help(&self) {
        let _ = self.write_help(&mut io::stdout());
    }

    /// Routes `args` down the tree and runs the command it selects.
    ///
    /// At each level: an empty vector prints this node's help and fails;
    /// otherwise the flags parse first, then the leading token picks a
    /// child to recurse into with the remaining tokens. When no child
    /// matches — the token is a flag, a free argument, or absent from the
    /// registry — this node is the dispatch target and its handler runs.
    /// Child results come back verbatim, success and failure alike.
    pub fn run(&mut self, args: &[String]) -> Result<()> {
        if args.is_empty() {
            self.print_help();
            return Err(Error::InvalidOperation("required args length > 0"));
        }

        self.init(args)?;

        if let Some(name) = is_command(args) {
            if let Some(child) = self.commands.get_mut(name) {
                return child.run(&args[1..]);
            }
        }

        match &self.handler {
            Handler::Wip => {
                println!("\n** {} is a work in progress **\n", self.name);
                Ok(())
            }
            Handler::Func(func) => func(self),
        }
    }
}
