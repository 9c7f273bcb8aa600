//! End-to-end dispatch over the public API.

use std::cell::Cell;
use std::rc::Rc;

use cmdtree::testutil::errors_eq;
use cmdtree::{Command, Error, ErrorHandling};

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn tracked(name: &str, hits: &Rc<Cell<u32>>) -> Command {
    let mut command = Command::new(name, ErrorHandling::Propagate);
    let hits = hits.clone();
    command.set_handler(move |_| {
        hits.set(hits.get() + 1);
        Ok(())
    });
    command
}

#[test]
fn dispatch_three_levels_deep() {
    let hits = Rc::new(Cell::new(0));
    let mut root = Command::new("todos", ErrorHandling::Propagate);
    root.add(Command::new("user", ErrorHandling::Propagate))
        .unwrap();
    let user = root.commands_mut().get_mut("user").unwrap();
    user.add(tracked("add", &hits)).unwrap();

    root.run(&argv(&["user", "add", "bob"])).unwrap();
    assert_eq!(hits.get(), 1);

    let user = root.commands().get("user").unwrap();
    assert_eq!(user.level(), 1);
    assert_eq!(user.commands().get("add").unwrap().level(), 2);
}

#[test]
fn flag_errors_stop_descent_before_the_handler() {
    let hits = Rc::new(Cell::new(0));
    let mut root = Command::new("todos", ErrorHandling::Propagate);
    root.add(tracked("get", &hits)).unwrap();

    let err = root.run(&argv(&["get", "--user", "james"])).unwrap_err();
    assert!(matches!(err, Error::FlagParse(_)));
    assert_eq!(hits.get(), 0);
}

#[test]
fn empty_vector_fails_at_every_level() {
    let mut root = Command::new("todos", ErrorHandling::Propagate);
    root.add(Command::new("get", ErrorHandling::Propagate))
        .unwrap();

    let expected = Error::InvalidOperation("required args length > 0");
    let at_root = root.run(&argv(&[])).unwrap_err();
    let at_child = root.run(&argv(&["get"])).unwrap_err();
    assert!(errors_eq(Some(&at_root), Some(&expected)));
    assert!(errors_eq(Some(&at_child), Some(&expected)));
}

#[test]
fn siblings_attached_before_a_duplicate_stay_dispatchable() {
    let mut root = Command::new("todos", ErrorHandling::Propagate);
    let err = root
        .add_commands(vec![
            Command::new("user", ErrorHandling::Propagate),
            Command::new("task", ErrorHandling::Propagate),
            Command::new("user", ErrorHandling::Propagate),
        ])
        .unwrap_err();
    assert!(errors_eq(
        Some(&err),
        Some(&Error::DuplicateCommand("user".to_string()))
    ));

    root.run(&argv(&["task", "--help"])).unwrap();
    root.run(&argv(&["user", "--help"])).unwrap();
}

#[test]
fn handler_reads_flags_and_leftover_args() {
    let seen = Rc::new(Cell::new(false));
    let mut root = Command::new("todos", ErrorHandling::Propagate);
    let mut add = Command::new("add", ErrorHandling::Propagate);
    add.flags_mut().string_flag("owner", "nobody", "entry owner.");
    let observed = seen.clone();
    add.set_handler(move |cmd| {
        assert_eq!(cmd.flags().get_string("owner").as_deref(), Some("ada"));
        assert_eq!(cmd.flags().args(), vec!["Buy milk".to_string()]);
        observed.set(true);
        Ok(())
    });
    root.add(add).unwrap();

    root.run(&argv(&["add", "--owner", "ada", "Buy milk"]))
        .unwrap();
    assert!(seen.get());
}
