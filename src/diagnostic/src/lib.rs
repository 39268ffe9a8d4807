//! Diagnostics - user-readable messages
//!
//! Everything here is about saying where something is in the input, and what
//! went wrong there. A [`Pos`] is cheap enough to put on every token and
//! syntax node, and a [`FileInfo`] turns it back into a [`Position`] with a
//! line and column when a [`Diagnostic`] is made.

mod diagnostic;
pub mod emitter;
mod error_list;
mod file_info;
mod pos;
mod position;
mod span;

pub use self::{
    diagnostic::Diagnostic, error_list::ErrorList, file_info::FileInfo,
    pos::Pos, position::Position, span::Span,
};
