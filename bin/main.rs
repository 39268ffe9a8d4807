//! SPL - a front end for the Simple Programming Language

mod check;
mod input;
mod logger;
mod print;
mod repl;
mod tokens;

use clap::Parser;

use diagnostic::{
    emitter::{Emitter, FancyEmitter, PlainEmitter},
    ErrorList,
};

const ASCII_HELP: &str =
    "Print diagnostics as plain `file:line:column: message` lines, without \
     colour or a preview of the source.";

const MAX_DEPTH_HELP: &str =
    "How deeply types, statements and expressions may nest before the parser \
     gives up on them.";

/// Scan, parse and print SPL source files
#[derive(Parser)]
#[clap(version, about)]
pub struct Args {
    /// Print diagnostics without colour or line art
    #[clap(long, global = true, long_help = ASCII_HELP)]
    ascii: bool,

    /// Maximum nesting depth
    #[clap(
        long,
        global = true,
        value_name = "N",
        default_value_t = syntax::Parser::MAX_DEPTH,
        long_help = MAX_DEPTH_HELP
    )]
    max_depth: usize,

    /// Log more about what's going on, repeat for even more
    #[clap(short, long, global = true, parse(from_occurrences))]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Tokens(tokens::Tokens),
    Dump(print::Dump),
    Format(print::Format),
    Check(check::Check),
    Repl(repl::ReplArgs),
}

/// How things went, which becomes the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Clean = 0,
    Diagnostics = 1,
    Unreadable = 2,
}

impl Args {
    /// The parser settings asked for on the command line.
    pub(crate) fn config(&self) -> syntax::Config {
        syntax::Config {
            max_depth: self.max_depth,
        }
    }

    /// Present some diagnostics about `source` the way the user asked.
    ///
    /// This returns [`Status::Clean`] if there was nothing to say.
    pub(crate) fn emit(&self, errors: &ErrorList, source: &str) -> Status {
        if errors.is_empty() {
            return Status::Clean;
        }

        let result = if self.ascii {
            PlainEmitter::stderr().emit_all(errors, source)
        } else {
            FancyEmitter::full().emit_all(errors, source)
        };

        if let Err(e) = result {
            log::error!("cannot write diagnostics: {}", e);
        }

        Status::Diagnostics
    }
}

fn main() {
    let args = Args::parse();
    logger::init(args.verbose);

    let status = match &args.command {
        Command::Tokens(tokens) => tokens.run(&args),
        Command::Dump(dump) => dump.run(&args),
        Command::Format(format) => format.run(&args),
        Command::Check(check) => check.run(&args),
        Command::Repl(repl) => repl.run(&args),
    };

    log::debug!("finished with {:?}", status);
    std::process::exit(status as i32);
}
