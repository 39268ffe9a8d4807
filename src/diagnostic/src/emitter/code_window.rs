//! Code windows are previews into the source code presented when displaying
//! diagnostic messages to help the user locate problems.

use std::io::Result;

use termcolor::WriteColor;

use crate::{emitter::terminal::FancyEmitter, Diagnostic};

/// A one-line preview into the source code with the offending part
/// underlined.
#[derive(Debug)]
pub(crate) struct CodeWindow<'i> {
    /// The 1-indexed line number shown in the gutter.
    number: usize,
    /// The text of that line, without its line ending.
    line: &'i str,
    /// The byte index into `line` where the underline starts.
    column: usize,
    /// How many bytes of `line` are underlined, at least one.
    length: usize,
}

impl<'i> CodeWindow<'i> {
    /// Find the line a diagnostic refers to. If the diagnostic doesn't have a
    /// real position, or it's past the end of the input, there's nothing to
    /// show.
    pub fn new(d: &Diagnostic, input: &'i str) -> Option<Self> {
        let position = d.position();
        if !position.is_valid() {
            return None;
        }

        let line = input.lines().nth(position.line() - 1)?;
        let mut column = (position.column() - 1).min(line.len());
        while !line.is_char_boundary(column) {
            column -= 1;
        }

        let rest = &line[column..];
        let wanted = d.get_highlight().map_or(1, |span| span.len());
        let mut length = wanted.min(rest.len());
        while !rest.is_char_boundary(length) {
            length -= 1;
        }

        Some(CodeWindow {
            number: position.line(),
            line,
            column,
            length: length.max(1),
        })
    }

    pub(crate) fn print<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
    ) -> Result<()> {
        self.empty_gutter(e)?;
        writeln!(e.out())?;

        self.gutter(e, self.number)?;
        writeln!(e.out(), "{}", self.line)?;

        self.empty_gutter(e)?;
        write!(e.out(), " ")?;
        self.underline(e)?;
        writeln!(e.out())
    }

    /// Pad out to where the underline starts, then draw it.
    ///
    /// Tabs are copied through so the underline lines up however wide the
    /// terminal draws them.
    fn underline<W: WriteColor>(&self, e: &mut FancyEmitter<W>) -> Result<()> {
        for c in self.line[..self.column].chars() {
            if c == '\t' {
                write!(e.out(), "\t")?;
            } else {
                let mut buf = [0; 4];
                let width = e.presentation_width(c.encode_utf8(&mut buf));
                e.pad(' ', width)?;
            }
        }

        let end = (self.column + self.length).min(self.line.len());
        let highlighted = &self.line[self.column..end];
        let width = e.presentation_width(highlighted).max(1);

        e.highlight_spec()?;
        let underline = e.line_art().underline;
        e.pad(underline, width)?;
        e.reset_spec()
    }

    /// Print the gutter, right-aligning `content` in it.
    fn gutter<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
        content: impl std::fmt::Display,
    ) -> Result<()> {
        e.dim_spec()?;
        let vertical = e.line_art().vertical;
        write!(
            e.out(),
            "{: >width$} {} ",
            content,
            vertical,
            width = self.gutter_width()
        )?;
        e.reset_spec()
    }

    /// An empty gutter, used above and below the quoted line.
    fn empty_gutter<W: WriteColor>(
        &self,
        e: &mut FancyEmitter<W>,
    ) -> Result<()> {
        e.dim_spec()?;
        let vertical = e.line_art().vertical;
        write!(
            e.out(),
            "{: >width$} {}",
            "",
            vertical,
            width = self.gutter_width()
        )?;
        e.reset_spec()
    }

    /// The width of the line numbers in the gutter.
    fn gutter_width(&self) -> usize {
        self.number.to_string().len()
    }
}
