//! An interactive mode.

use rustyline::{error::ReadlineError, Editor};
use syntax::print::debug_tree;

use crate::{Args, Status};

/// Parse lines interactively, printing their syntax trees
#[derive(clap::Parser)]
pub struct ReplArgs; // For now there are no repl settings.

impl ReplArgs {
    /// Run a repl with the given settings.
    pub(crate) fn run(&self, args: &Args) -> Status {
        let repl = Repl::new(args);
        repl.start();
        Status::Clean
    }
}

struct Repl<'a> {
    editor: Editor<()>,
    args: &'a Args,
    /// Each line is its own input, numbered so diagnostics can tell them
    /// apart.
    line_number: usize,
}

impl<'a> Repl<'a> {
    /// The prompt used to ask for more input.
    const PROMPT: &'static str = ">>> ";

    fn new(args: &'a Args) -> Self {
        Repl {
            editor: Editor::<()>::new(),
            args,
            line_number: 0,
        }
    }

    fn start(mut self) {
        loop {
            match self.step() {
                Ok(()) => continue,
                Err(ReplError::Clear) => continue,
                Err(ReplError::Exit) => break,
                Err(ReplError::Readline(e)) => {
                    println!("{}", e);
                    println!("  (press control-d to exit)");
                }
            }
        }
    }

    fn step(&mut self) -> Result<(), ReplError> {
        let input = self.read()?;
        if input.trim().is_empty() {
            return Ok(());
        }

        self.editor.add_history_entry(input.as_str());
        self.line_number += 1;

        let name = format!("<repl:{}>", self.line_number);
        let (file, errors) =
            syntax::parse_file_with(&name, &input, self.args.config());

        print!("{}", debug_tree(&file));
        self.args.emit(&errors, &input);

        Ok(())
    }

    fn read(&mut self) -> Result<String, ReplError> {
        let line = self.editor.readline(Repl::PROMPT);
        match line {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => {
                // User hit Control-C
                Err(ReplError::Clear)
            }

            Err(ReadlineError::Eof) => {
                // User hit Control-D at end of line, to exit.
                Err(ReplError::Exit)
            }

            Err(e) => Err(ReplError::Readline(e)),
        }
    }
}

#[derive(Debug)]
enum ReplError {
    Clear,
    Exit,

    Readline(ReadlineError),
}

impl std::error::Error for ReplError {}

impl std::fmt::Display for ReplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplError::Clear => write!(f, "^C"),
            ReplError::Exit => write!(f, "^D"),
            ReplError::Readline(e) => write!(f, "{}", e),
        }
    }
}
