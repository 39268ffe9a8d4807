//! Check files for errors without printing anything else.

use std::path::PathBuf;

use crate::{input::read_source, Args, Status};

/// Report any diagnostics in the given files
#[derive(clap::Parser)]
pub struct Check {
    #[clap(required = true)]
    filenames: Vec<PathBuf>,
}

impl Check {
    /// Check each file in turn. The worst outcome for any file is the
    /// outcome overall.
    pub(crate) fn run(&self, args: &Args) -> Status {
        let mut status = Status::Clean;

        for filename in &self.filenames {
            let this = match read_source(filename) {
                Ok(input) => {
                    let name = filename.display().to_string();
                    let (_, errors) =
                        syntax::parse_file_with(&name, &input, args.config());
                    args.emit(&errors, &input)
                }
                Err(status) => status,
            };

            status = status.max(this);
        }

        status
    }
}
