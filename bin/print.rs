//! Parse a file and print it back out.

use std::path::PathBuf;

use syntax::print::{debug_tree, source};

use crate::{input::read_source, Args, Status};

/// Print the syntax tree of a file
#[derive(clap::Parser)]
pub struct Dump {
    filename: PathBuf,
}

impl Dump {
    pub(crate) fn run(&self, args: &Args) -> Status {
        let input = match read_source(&self.filename) {
            Ok(input) => input,
            Err(status) => return status,
        };

        let name = self.filename.display().to_string();
        let (file, errors) =
            syntax::parse_file_with(&name, &input, args.config());

        print!("{}", debug_tree(&file));
        args.emit(&errors, &input)
    }
}

/// Reformat a file, printing the result
#[derive(clap::Parser)]
pub struct Format {
    filename: PathBuf,
}

impl Format {
    pub(crate) fn run(&self, args: &Args) -> Status {
        let input = match read_source(&self.filename) {
            Ok(input) => input,
            Err(status) => return status,
        };

        let name = self.filename.display().to_string();
        let (file, errors) =
            syntax::parse_file_with(&name, &input, args.config());

        // Formatting a broken file would lose whatever didn't parse.
        if !errors.is_empty() {
            return args.emit(&errors, &input);
        }

        print!("{}", source(&file));
        Status::Clean
    }
}
