//! A simple, safe, plain-text emitter.
//!
//! This should be a safe fall-back when we don't know what the output device
//! looks like, and it's what tools reading our output expect.

use std::io::{self, Write};

use super::Emitter;
use crate::Diagnostic;

/// Writes each diagnostic as a single `file:line:column: message` line.
#[derive(Debug)]
pub struct PlainEmitter<W> {
    out: W,
}

impl PlainEmitter<io::Stderr> {
    /// A plain emitter writing to standard error.
    pub fn stderr() -> Self {
        PlainEmitter::new(io::stderr())
    }
}

impl<W: Write> PlainEmitter<W> {
    /// A plain emitter writing to `out`.
    pub fn new(out: W) -> Self {
        PlainEmitter { out }
    }

    /// Take back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Emitter for PlainEmitter<W> {
    fn emit(&mut self, d: &Diagnostic, _source: &str) -> io::Result<()> {
        writeln!(self.out, "{}", d)
    }
}
