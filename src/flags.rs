//! Per-command flag parsing.
//!
//! Every [`Command`](crate::Command) owns one `FlagSet`; there is no shared
//! parser state between commands. The set records which long options a
//! command understands and delegates the actual token parsing to clap's
//! builder API. Parsing stops consuming at the first non-flag token, so a
//! parent command can parse `["get", "--user"]` without ever seeing
//! `--user` — that token belongs to whichever level dispatch hands it to
//! next.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Arg, ArgAction, ArgMatches};

use crate::error::{Error, Result};

/// What [`FlagSet::parse`] does with a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorHandling {
    /// Print the error and terminate the process.
    #[default]
    Exit,
    /// Hand the error back to the caller.
    Propagate,
}

#[derive(Debug, Clone)]
enum FlagKind {
    Bool,
    Value { default: String },
}

#[derive(Debug, Clone)]
struct FlagDef {
    name: String,
    usage: String,
    kind: FlagKind,
}

/// An instance-owned set of named long options.
#[derive(Debug)]
pub struct FlagSet {
    name: String,
    handling: ErrorHandling,
    flags: Vec<FlagDef>,
    matches: Option<ArgMatches>,
}

impl FlagSet {
    /// Creates an empty set carrying only the built-in boolean `help` flag.
    pub fn new(name: impl Into<String>, handling: ErrorHandling) -> Self {
        let mut set = FlagSet {
            name: name.into(),
            handling,
            flags: Vec::new(),
            matches: None,
        };
        set.bool_flag("help", "Show help for this command.");
        set
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a boolean flag; `false` unless present on the command line.
    pub fn bool_flag(&mut self, name: impl Into<String>, usage: impl Into<String>) {
        self.flags.push(FlagDef {
            name: name.into(),
            usage: usage.into(),
            kind: FlagKind::Bool,
        });
    }

    /// Registers a value-taking flag; both `--name value` and `--name=value`
    /// are accepted.
    pub fn string_flag(
        &mut self,
        name: impl Into<String>,
        default: impl Into<String>,
        usage: impl Into<String>,
    ) {
        self.flags.push(FlagDef {
            name: name.into(),
            usage: usage.into(),
            kind: FlagKind::Value {
                default: default.into(),
            },
        });
    }

    // Rebuilt from the registered flags on every parse; clap's builder
    // consumes itself on mutation.
    fn spec(&self) -> clap::Command {
        let mut spec = clap::Command::new(self.name.clone())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .disable_help_subcommand(true)
            .allow_external_subcommands(true);
        for def in &self.flags {
            let arg = Arg::new(def.name.clone())
                .long(def.name.clone())
                .help(def.usage.clone());
            let arg = match &def.kind {
                FlagKind::Bool => arg.action(ArgAction::SetTrue),
                FlagKind::Value { default } => arg
                    .action(ArgAction::Set)
                    .value_name("VALUE")
                    .default_value(default.clone()),
            };
            spec = spec.arg(arg);
        }
        spec
    }

    /// Parses `args` against the registered flags. Tokens from the first
    /// non-flag token onward are left unconsumed and can be read back via
    /// [`FlagSet::args`].
    pub fn parse(&mut self, args: &[String]) -> Result<()> {
        match self.spec().try_get_matches_from(args.iter()) {
            Ok(matches) => {
                self.matches = Some(matches);
                Ok(())
            }
            Err(err) => match self.handling {
                ErrorHandling::Exit => err.exit(),
                ErrorHandling::Propagate => Err(Error::FlagParse(err)),
            },
        }
    }

    /// Value of a boolean flag after the last parse.
    pub fn get_bool(&self, name: &str) -> bool {
        self.matches
            .as_ref()
            .and_then(|m| m.try_get_one::<bool>(name).ok().flatten())
            .copied()
            .unwrap_or(false)
    }

    /// Value of a string flag after the last parse, falling back to the
    /// registered default. `None` before the first parse or for unknown
    /// names.
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.matches
            .as_ref()
            .and_then(|m| m.try_get_one::<String>(name).ok().flatten())
            .cloned()
    }

    /// The unconsumed tokens from the last parse, in their original order.
    pub fn args(&self) -> Vec<String> {
        let Some((first, rest)) = self.matches.as_ref().and_then(|m| m.subcommand()) else {
            return Vec::new();
        };
        let mut out = vec![first.to_string()];
        if let Some(values) = rest.try_get_many::<OsString>("").ok().flatten() {
            out.extend(values.map(|v| v.to_string_lossy().into_owned()));
        }
        out
    }

    /// Writes one listing entry per registered flag, in registration order.
    pub fn write_defaults<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for def in &self.flags {
            match &def.kind {
                FlagKind::Bool => writeln!(w, "  --{}", def.name)?,
                FlagKind::Value { default } if default.is_empty() => {
                    writeln!(w, "  --{} <VALUE>", def.name)?
                }
                FlagKind::Value { default } => {
                    writeln!(w, "  --{} <VALUE> (default {:?})", def.name, default)?
                }
            }
            writeln!(w, "        {}", def.usage)?;
        }
        Ok(())
    }
}
