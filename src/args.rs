use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use ufoc_frontend::{ParseOptions, DEFAULT_MAX_DEPTH};

/// Check, inspect and format contract definition files.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
#[command(propagate_version = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,

    /// Log more. May be given several times.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Arguments {
    pub fn options(&self) -> &Options {
        self.command.options()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a file and report any error.
    #[command(visible_alias = "c")]
    Check(Options),

    /// Print the tokens of a file.
    #[command(visible_alias = "t")]
    Tokens(Options),

    /// Print the syntax tree of a file.
    Tree(Options),

    /// Print a file in canonical form.
    #[command(visible_alias = "f")]
    Fmt(FmtOptions),
}

impl Command {
    pub fn options(&self) -> &Options {
        match self {
            Self::Check(opts) => opts,
            Self::Tokens(opts) => opts,
            Self::Tree(opts) => opts,
            Self::Fmt(opts) => &opts.options,
        }
    }
}

#[derive(Debug, Args)]
pub struct Options {
    /// How deeply inline types may be nested.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// The file to read, or `-` for standard input.
    #[arg(required = true)]
    pub path: PathBuf,
}

impl Options {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_depth: self.max_depth,
        }
    }
}

#[derive(Debug, Args)]
pub struct FmtOptions {
    /// Only check whether the file is already formatted.
    #[arg(long, action = ArgAction::SetTrue)]
    pub check: bool,

    #[command(flatten)]
    pub options: Options,
}
