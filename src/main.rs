mod args;
mod console_driver;
mod input;

#[cfg(test)]
mod tests;

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use codespan_reporting::files::SimpleFiles;
use log::{debug, info, LevelFilter};
use ufoc_common::message::Messages;
use ufoc_common::source::File;
use ufoc_common::Driver;
use ufoc_frontend::lex::Tokens;
use ufoc_frontend::pretty::Prettier;

use args::{Arguments, Command};
use console_driver::ConsoleDriver;
use input::{read_file, source_name};

fn main() -> anyhow::Result<ExitCode> {
    let args = Arguments::parse();
    init_logging(args.verbose);

    let options = args.options();
    let name = source_name(&options.path);
    let source = read_file(&options.path)?;

    let mut files = SimpleFiles::new();
    let file = files.add(name.clone(), source.clone());
    let mut driver = ConsoleDriver::new(files);

    debug!("read {} bytes from {name}", source.len());

    let code = match &args.command {
        Command::Tokens(_) => tokens(&mut driver, file, &source)?,

        Command::Check(opts) => {
            match ufoc_frontend::check(&mut driver, file, &source, opts.parse_options()) {
                Some(document) => {
                    info!(
                        "{name} is version {} with {} top level items",
                        document.version,
                        document.items.len()
                    );
                    ExitCode::SUCCESS
                }
                None => ExitCode::FAILURE,
            }
        }

        Command::Tree(opts) => {
            match ufoc_frontend::check(&mut driver, file, &source, opts.parse_options()) {
                Some(document) => {
                    println!("{document:#?}");
                    ExitCode::SUCCESS
                }
                None => ExitCode::FAILURE,
            }
        }

        Command::Fmt(opts) => {
            let parse_options = opts.options.parse_options();
            let Some(document) = ufoc_frontend::check(&mut driver, file, &source, parse_options)
            else {
                return Ok(ExitCode::FAILURE);
            };

            let prettier = Prettier::new();
            let formatted = prettier.pretty_document(&document)?;

            if !opts.check {
                print!("{formatted}");
                ExitCode::SUCCESS
            } else if formatted == source {
                ExitCode::SUCCESS
            } else {
                eprintln!("{name} is not formatted");
                ExitCode::FAILURE
            }
        }
    };

    Ok(code)
}

/// Print every token of the source on its own line.
fn tokens(driver: &mut ConsoleDriver, file: File, source: &str) -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for token in Tokens::new(file, source) {
        match token {
            Ok(token) => writeln!(out, "{} {:?} {:?}", token.span.start, token.kind, token.text)?,
            Err(error) => {
                let mut messages = Messages::new();
                error.report(&mut messages);
                driver.report(messages);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Log at a level given by the number of `-v` flags. Without any, `RUST_LOG`
/// is used if set, and only warnings and errors are logged otherwise.
fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();

    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if verbose > 0 || env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }

    builder.init();
}
