//! Emitters present [`Diagnostic`]s to people.

mod code_window;
mod line_art;
mod simple;
mod terminal;

use crate::Diagnostic;

pub use self::{line_art::LineArt, simple::PlainEmitter, terminal::FancyEmitter};

/// An [`Emitter`] wraps up the ways you can output diagnostics.
pub trait Emitter {
    /// Emits the diagnostic, presenting it to the user/consumer. The `source`
    /// is the input the diagnostic refers to, which some emitters quote.
    fn emit(
        &mut self,
        diagnostic: &Diagnostic,
        source: &str,
    ) -> std::io::Result<()>;

    /// Emit each diagnostic in turn.
    fn emit_all<'d>(
        &mut self,
        diagnostics: impl IntoIterator<Item = &'d Diagnostic>,
        source: &str,
    ) -> std::io::Result<()>
    where
        Self: Sized,
    {
        for d in diagnostics {
            self.emit(d, source)?;
        }
        Ok(())
    }
}
