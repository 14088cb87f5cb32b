//! The base error abstraction and the capabilities wrappers expose.
//!
//! Every error that takes part in a chain implements [`ChainError`]. The trait
//! carries no data of its own; instead it answers *capability queries*. A
//! traversal asks an error whether it can act as a [`CauseProvider`],
//! [`OriginProvider`], [`NextLinkProvider`], [`FieldsProvider`] or
//! [`VerboseFormatter`], and simply stops (or falls back to the plain message)
//! when the answer is `None`.
//!
//! Two capabilities that are easy to confuse:
//! - [`CauseProvider`] yields the *classification* of an error, e.g. a sentinel
//!   such as "database unavailable".
//! - [`NextLinkProvider`] yields the next error down a *wrap chain*, i.e. the
//!   error a decorating wrapper was built around.
//!
//! Third-party error types join in by implementing [`ChainError`]; an empty
//! `impl` is enough for a leaf error.
//!
//! ```rust
//! use causeway::ChainError;
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! #[error("storage offline")]
//! struct StorageOffline;
//!
//! impl ChainError for StorageOffline {}
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::fields::Fields;

/// Owned, shareable handle to any chain error.
pub type SharedError = Arc<dyn ChainError>;

/// An error that can take part in cause and wrap chains.
pub trait ChainError: Error + Send + Sync + 'static {
    fn as_cause_provider(&self) -> Option<&dyn CauseProvider> {
        None
    }

    fn as_origin_provider(&self) -> Option<&dyn OriginProvider> {
        None
    }

    fn as_next_link_provider(&self) -> Option<&dyn NextLinkProvider> {
        None
    }

    fn as_fields_provider(&self) -> Option<&dyn FieldsProvider> {
        None
    }

    fn as_verbose_formatter(&self) -> Option<&dyn VerboseFormatter> {
        None
    }
}

/// Exposes the semantic classification of an error.
pub trait CauseProvider {
    fn cause(&self) -> &dyn ChainError;
}

/// Exposes the concrete lower-level error behind a classification.
pub trait OriginProvider {
    fn origin(&self) -> &dyn ChainError;
}

/// Exposes the next error down a wrap chain.
pub trait NextLinkProvider {
    fn next_link(&self) -> &dyn ChainError;
}

/// Exposes the fields attached at this link only, not merged with deeper links.
pub trait FieldsProvider {
    fn fields(&self) -> &Fields;
}

/// Detailed, possibly multi-line rendering.
///
/// Used by [`crate::render`] with [`crate::RenderMode::Detailed`] and by the
/// wrappers' `{:#}` formatting.
pub trait VerboseFormatter {
    fn fmt_verbose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl dyn ChainError {
    /// Returns true if the concrete type behind this error is `T`.
    pub fn is<T: ChainError>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Borrows the concrete value behind this error if it is a `T`.
    pub fn downcast_ref<T: ChainError>(&self) -> Option<&T> {
        let err: &(dyn Error + 'static) = self;
        err.downcast_ref::<T>()
    }
}

/// Identity comparison: true when both references point at the same error value.
pub fn same_error(a: &dyn ChainError, b: &dyn ChainError) -> bool {
    std::ptr::addr_eq(a as *const dyn ChainError, b as *const dyn ChainError)
}

/// Conversion into a [`SharedError`].
///
/// An existing handle is passed through untouched so its identity survives
/// wrapping.
pub trait IntoChainError {
    fn into_chain_error(self) -> SharedError;
}

impl<E: ChainError> IntoChainError for E {
    fn into_chain_error(self) -> SharedError {
        Arc::new(self)
    }
}

impl IntoChainError for SharedError {
    fn into_chain_error(self) -> SharedError {
        self
    }
}

/// Borrow concrete errors, trait objects and shared handles alike as `&dyn ChainError`.
pub trait AsChainError {
    fn as_chain_error(&self) -> &dyn ChainError;
}

impl<E: ChainError> AsChainError for E {
    fn as_chain_error(&self) -> &dyn ChainError {
        self
    }
}

impl AsChainError for dyn ChainError {
    fn as_chain_error(&self) -> &dyn ChainError {
        self
    }
}

impl AsChainError for SharedError {
    fn as_chain_error(&self) -> &dyn ChainError {
        &**self
    }
}

impl ChainError for std::io::Error {}
