//! Turning syntax trees back into text.
//!
//! - [`debug_tree`] shows the structure of a tree, one node per line.
//! - [`source`] writes a file back out as SPL source, with its own
//!   formatting. Comments don't survive.

mod debug;
mod source;

pub use self::{debug::debug_tree, source::source};
