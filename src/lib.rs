//! # cmdtree
//!
//! A tiny recursive command dispatcher for nested command-line tools.
//!
//! cmdtree models a CLI as a tree of [`Command`] nodes. Each node owns its
//! own [`FlagSet`] and its own registry of children; nothing is shared
//! between nodes and there is no global parser state. Dispatch is a single
//! recursive walk: [`Command::run`] takes the raw argument vector (program
//! name already stripped), parses this level's flags, and either descends
//! into the child named by the leading token or runs this node's handler.
//!
//! ```text
//! todos user add bob
//!       │    │   └── unconsumed, read by the handler via FlagSet::args
//!       │    └────── child of "user", becomes the dispatch target
//!       └─────────── child of the root, consumed at level 0
//! ```
//!
//! ## Example
//!
//! ```
//! use cmdtree::{Command, ErrorHandling};
//!
//! let mut root = Command::new("todos", ErrorHandling::Propagate);
//! root.description = "A tiny todo manager.".to_string();
//!
//! let mut list = Command::new("list", ErrorHandling::Propagate);
//! list.usage = "todos".to_string();
//! list.description = "List todo entries.".to_string();
//! list.flags_mut().bool_flag("all", "Include finished entries.");
//! list.set_handler(|cmd| {
//!     if cmd.flags().get_bool("help") {
//!         cmd.print_help();
//!         return Ok(());
//!     }
//!     println!("listing (all = {})", cmd.flags().get_bool("all"));
//!     Ok(())
//! });
//! root.add(list)?;
//!
//! let args: Vec<String> = vec!["list".into(), "--all".into()];
//! root.run(&args)?;
//! # Ok::<(), cmdtree::Error>(())
//! ```
//!
//! ## Semantics worth knowing
//!
//! - Every level requires at least one token: running a command with an
//!   empty vector prints that command's help and returns an error, at the
//!   root and at any depth.
//! - Flags parse before recursion at every level, so an unknown flag is
//!   rejected by the first level that sees it and deeper levels are never
//!   reached.
//! - A `-`-prefixed token is never a child name, even if a child shares
//!   its literal text.
//! - Attachment is move-only: [`Command::add`] consumes the child, so a
//!   node has exactly one parent and cycles cannot be built.

mod command;
mod error;
mod flags;
mod registry;
pub mod testutil;

pub use command::{Command, Handler};
pub use error::{Error, Result};
pub use flags::{ErrorHandling, FlagSet};
pub use registry::CommandSet;
