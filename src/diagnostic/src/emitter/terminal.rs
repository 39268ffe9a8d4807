//! Pretty printing of diagnostic messages.
//!
//! This module handles all the external libraries we need to do this (mostly)
//! right, and wraps them up in a single configurable printer.

use std::borrow::Cow;
use std::io::Result;

use term_size::dimensions_stderr;
use termcolor::{
    BufferedStandardStream, Color, ColorChoice, ColorSpec, WriteColor,
};
use unicode_width::UnicodeWidthStr;

use crate::Diagnostic;

use super::code_window::CodeWindow;
use super::line_art::LineArt;
use super::Emitter;

/// A printer for terminals, with colour and a preview of the source.
pub struct FancyEmitter<W> {
    /// Output stream.
    out: W,
    /// The set of line art characters to use.
    line_art: LineArt,
    /// The max width of the output
    width: usize,
}

impl FancyEmitter<BufferedStandardStream> {
    /// Prints to stderr, using all the fancy features.
    pub fn full() -> Self {
        let width = if let Some((w, _)) = dimensions_stderr() {
            Self::MIN_WIDTH.max(w)
        } else {
            Self::DEFAULT_WIDTH
        };

        FancyEmitter {
            out: BufferedStandardStream::stderr(ColorChoice::Auto),
            line_art: LineArt::UNICODE,
            width,
        }
    }
}

impl<W: WriteColor> FancyEmitter<W> {
    /// The default terminal width used if the actual terminal is below
    /// `MIN_WIDTH`.
    pub const DEFAULT_WIDTH: usize = 80;

    /// The narrowest allowed terminal size that things will be wrapped to, any
    /// smaller and we use `DEFAULT_WIDTH` instead to maintain readability.
    pub const MIN_WIDTH: usize = 40;

    /// A printer writing to `out`.
    pub fn new(out: W, line_art: LineArt, width: usize) -> Self {
        FancyEmitter {
            out,
            line_art,
            width: width.max(Self::MIN_WIDTH),
        }
    }

    /// Take back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The width of line-wrapped output.
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// The line art used by the printer
    pub(crate) fn line_art(&self) -> LineArt {
        self.line_art
    }

    /// A handle on the output stream.
    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// How wide is a string when printed?
    ///
    /// This isn't the same as the string's `s.len()` which counts bytes, or the
    /// `s.chars().count()` as some rendered characters are multiple code points
    /// (and some single code points may be double wide in a terminal).
    pub(crate) fn presentation_width(&self, s: &str) -> usize {
        UnicodeWidthStr::width(s)
    }

    /// Line wrapping for message text.
    pub(crate) fn wrap<'a>(
        &self,
        text: &'a str,
        width: usize,
    ) -> Vec<Cow<'a, str>> {
        textwrap::wrap(text, width)
    }

    /// Prints `len` number of the `padding` character.
    pub(crate) fn pad(&mut self, padding: char, len: usize) -> Result<()> {
        for _ in 0..len {
            write!(self.out, "{}", padding)?;
        }
        Ok(())
    }

    /// Set the output to print dimmed text.
    pub(crate) fn dim_spec(&mut self) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        self.out.set_color(&spec)
    }

    /// Set the output to highlight printed text.
    pub(crate) fn highlight_spec(&mut self) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec.set_fg(Some(Color::Yellow));
        self.out.set_color(&spec)
    }

    /// Set the output to the style used for the `error` prefix.
    fn error_spec(&mut self) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec.set_fg(Some(Color::Red));
        self.out.set_color(&spec)
    }

    /// Reset the printed style to the default.
    pub(crate) fn reset_spec(&mut self) -> Result<()> {
        self.out.reset()
    }

    fn emit_message(&mut self, message: &str) -> Result<()> {
        const PREFIX: &str = "error: ";

        // The coloured prefix also decides how much subsequent lines are
        // indented.
        self.error_spec()?;
        write!(self.out, "error")?;
        self.reset_spec()?;
        write!(self.out, ": ")?;

        let wrap_width = self.width() - PREFIX.len();
        let lines = self.wrap(message, wrap_width);

        let mut lines = lines.iter();
        writeln!(self.out, "{}", lines.next().map_or("", |l| l.as_ref()))?;

        for line in lines {
            self.pad(' ', PREFIX.len())?;
            writeln!(self.out, "{}", line)?;
        }

        Ok(())
    }

    fn emit_location(&mut self, d: &Diagnostic) -> Result<()> {
        let arrow = self.line_art().arrow;
        self.dim_spec()?;
        write!(self.out, "  {}", arrow)?;
        self.reset_spec()?;
        writeln!(self.out, " {}", d.position())
    }
}

impl<W: WriteColor> Emitter for FancyEmitter<W> {
    fn emit(&mut self, d: &Diagnostic, source: &str) -> Result<()> {
        self.emit_message(d.message())?;

        if d.position().is_valid() {
            self.emit_location(d)?;
        }

        if let Some(window) = CodeWindow::new(d, source) {
            window.print(self)?;
        }

        self.out().flush()
    }
}

#[cfg(test)]
mod test {
    use termcolor::Buffer;

    use super::*;
    use crate::{Pos, Position, Span};

    fn render(d: &Diagnostic, source: &str) -> String {
        let mut emitter =
            FancyEmitter::new(Buffer::no_color(), LineArt::ASCII, 80);
        emitter.emit(d, source).unwrap();
        String::from_utf8(emitter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn message_and_location() {
        let d =
            Diagnostic::new(Position::new("a.spl", 4, 1, 5), "expected type");
        let out = render(&d, "int ;");
        assert!(out.starts_with("error: expected type\n"), "got {}", out);
        assert!(out.contains("  --> a.spl:1:5\n"), "got {}", out);
    }

    #[test]
    fn underlines_highlight() {
        let d = Diagnostic::new(Position::new("a.spl", 7, 2, 5), "bad")
            .highlight(Span::with_len(Pos::from_offset(7), 3));
        let out = render(&d, "x;\nint abc = 1;");

        assert!(out.contains("2 | int abc = 1;\n"), "got {}", out);
        assert!(out.contains("  |     ^^^\n"), "got {}", out);
    }

    #[test]
    fn long_messages_wrap() {
        let message = "word ".repeat(40);
        let d = Diagnostic::new(Position::default(), message.trim());
        let out = render(&d, "");
        assert!(out.lines().count() > 1);
        assert!(out.lines().all(|l| l.len() <= 80));
    }
}
