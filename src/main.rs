//! Demo binary: a toy `todos` CLI wired on top of the cmdtree library.
//!
//! The binary is intentionally thin — it builds the command tree, hands
//! the process arguments to `run`, and maps any dispatch failure to stderr
//! plus a non-zero exit. Everything user-visible happens in the handlers.

use std::env;
use std::process;

use cmdtree::{Command, Error, ErrorHandling};
use console::style;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = dispatch(&args) {
        eprintln!("{} {}", style("error:").red().bold(), err);
        process::exit(1);
    }
}

fn dispatch(args: &[String]) -> anyhow::Result<()> {
    let mut root = build_tree()?;
    root.run(args)?;
    Ok(())
}

fn build_tree() -> cmdtree::Result<Command> {
    let mut root = Command::new("todos", ErrorHandling::Propagate);
    root.description = "A tiny todo manager built on cmdtree.".to_string();
    root.set_handler(|cmd| {
        cmd.print_help();
        Ok(())
    });

    let mut list = Command::new("list", ErrorHandling::Propagate);
    list.usage = "todos".to_string();
    list.description = "List todo entries.".to_string();
    list.flags_mut().bool_flag("all", "Include finished entries.");
    list.flags_mut()
        .string_flag("user", "", "Only entries owned by this user.");
    list.set_handler(|cmd| {
        if cmd.flags().get_bool("help") {
            cmd.print_help();
            return Ok(());
        }
        let scope = match cmd.flags().get_string("user") {
            Some(user) if !user.is_empty() => format!("entries for {}", style(user).cyan()),
            _ => "all entries".to_string(),
        };
        println!("{} {}", style("listing").green(), scope);
        if cmd.flags().get_bool("all") {
            println!("(including finished entries)");
        }
        Ok(())
    });

    let mut add = Command::new("add", ErrorHandling::Propagate);
    add.usage = "todos".to_string();
    add.description = "Add a new todo entry.".to_string();
    add.set_handler(|cmd| {
        if cmd.flags().get_bool("help") {
            cmd.print_help();
            return Ok(());
        }
        let words = cmd.flags().args();
        if words.is_empty() {
            cmd.print_help();
            return Err(Error::Handler("an entry title is required".to_string()));
        }
        println!("{} {}", style("added").green(), words.join(" "));
        Ok(())
    });

    let mut user = Command::new("user", ErrorHandling::Propagate);
    user.usage = "todos".to_string();
    user.description = "Manage entry owners.".to_string();
    user.set_handler(|cmd| {
        cmd.print_help();
        Ok(())
    });

    root.add_commands(vec![list, add, user])?;

    // Grandchildren are wired after their parent is attached, so levels
    // cascade from the root.
    if let Some(user) = root.commands_mut().get_mut("user") {
        let mut user_add = Command::new("add", ErrorHandling::Propagate);
        user_add.usage = "todos user".to_string();
        user_add.description = "Register a new owner.".to_string();
        user_add.set_handler(|cmd| {
            if cmd.flags().get_bool("help") {
                cmd.print_help();
                return Ok(());
            }
            let names = cmd.flags().args();
            if names.is_empty() {
                return Err(Error::Handler("an owner name is required".to_string()));
            }
            println!("{} {}", style("registered").green(), names.join(", "));
            Ok(())
        });

        let mut user_rm = Command::new("rm", ErrorHandling::Propagate);
        user_rm.usage = "todos user".to_string();
        user_rm.description = "Remove an owner.".to_string();
        user_rm.set_handler(|cmd| {
            if cmd.flags().get_bool("help") {
                cmd.print_help();
                return Ok(());
            }
            let names = cmd.flags().args();
            if names.is_empty() {
                return Err(Error::Handler("an owner name is required".to_string()));
            }
            println!("{} {}", style("removed").yellow(), names.join(", "));
            Ok(())
        });

        user.add_commands(vec![user_add, user_rm])?;
    }

    Ok(root)
}
