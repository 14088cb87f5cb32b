//! Output modes for chain errors.
//!
//! - `Plain`: the single-line message.
//! - `Quoted`: the message as an escaped, double-quoted string.
//! - `Detailed`: multi-line output exposing nested structure, for errors that
//!   implement [`VerboseFormatter`](crate::VerboseFormatter); the plain
//!   message for the rest.
//!
//! The wrappers in this crate also honour the alternate flag of `Display`,
//! so `{:#}` on them is the same as `Detailed`.
use std::fmt;

use crate::chain::{AsChainError, ChainError};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Plain,
    Quoted,
    Detailed,
}

/// `Display` adapter returned by [`render`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    err: &'a dyn ChainError,
    mode: RenderMode,
}

pub fn render<E: AsChainError + ?Sized>(err: &E, mode: RenderMode) -> Rendered<'_> {
    Rendered {
        err: err.as_chain_error(),
        mode,
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            RenderMode::Plain => write!(f, "{}", self.err),
            RenderMode::Quoted => write!(f, "{:?}", self.err.to_string()),
            RenderMode::Detailed => fmt_detailed(self.err, f),
        }
    }
}

/// Detailed rendering of `err`, or its plain message when it has none.
pub(crate) fn fmt_detailed(err: &dyn ChainError, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match err.as_verbose_formatter() {
        Some(verbose) => verbose.fmt_verbose(f),
        None => write!(f, "{err}"),
    }
}
