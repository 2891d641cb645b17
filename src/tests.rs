use std::path::Path;

use clap::Parser;
use ufoc_common::message::Messages;
use ufoc_frontend::DEFAULT_MAX_DEPTH;

use crate::args::{Arguments, Command};
use crate::input::{source_name, STDIN_NAME};

#[test]
fn fmt_alias_with_check() {
    let args = Arguments::try_parse_from(["ufoc", "f", "--check", "tasks.ufo"]).unwrap();

    let Command::Fmt(opts) = &args.command else {
        panic!("expected the fmt command");
    };

    assert!(opts.check);
    assert_eq!(opts.options.path, Path::new("tasks.ufo"));
    assert_eq!(opts.options.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn shared_options() {
    let args =
        Arguments::try_parse_from(["ufoc", "-vv", "check", "--max-depth", "3", "-"]).unwrap();

    assert!(matches!(args.command, Command::Check(_)));
    assert_eq!(args.verbose, 2);
    assert_eq!(args.options().parse_options().max_depth, 3);
    assert_eq!(args.options().path, Path::new("-"));
}

#[test]
fn path_is_required() {
    assert!(Arguments::try_parse_from(["ufoc", "tokens"]).is_err());
    assert!(Arguments::try_parse_from(["ufoc", "t", "a.ufo"]).is_ok());
}

#[test]
fn stdin_has_a_name() {
    assert_eq!(source_name(Path::new("-")), STDIN_NAME);
    assert_eq!(source_name(Path::new("dir/a.ufo")), "dir/a.ufo");
}

#[test]
fn check_reports_to_the_driver() {
    let mut messages = Messages::new();
    let options = Default::default();

    assert!(ufoc_frontend::check(&mut messages, 0, "version 1\nnamespace A {", options).is_none());
    assert_eq!(messages.len(), 1);
    assert!(messages.has_errors());

    let mut messages = Messages::new();
    assert!(ufoc_frontend::check(&mut messages, 0, "version 1", options).is_some());
    assert!(messages.is_empty());
}
