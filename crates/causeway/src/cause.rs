//! Cause/origin composition and the cause-chain walk.

use std::error::Error;
use std::fmt;

use crate::chain::{
    AsChainError, CauseProvider, ChainError, IntoChainError, OriginProvider, SharedError,
    VerboseFormatter, same_error,
};
use crate::render::fmt_detailed;

/// A semantic cause paired with the concrete error that produced it.
///
/// The message is `"{cause}: {origin}"`, rebuilt on every call. `{:#}` renders
/// the cause and the origin in detail, separated by a newline.
#[derive(Debug, Clone)]
pub struct CauseWithOrigin {
    cause: SharedError,
    origin: SharedError,
}

/// Classify `origin` as `cause`.
pub fn new_cause(cause: impl IntoChainError, origin: impl IntoChainError) -> CauseWithOrigin {
    CauseWithOrigin::new(cause, origin)
}

impl CauseWithOrigin {
    pub fn new(cause: impl IntoChainError, origin: impl IntoChainError) -> Self {
        Self {
            cause: cause.into_chain_error(),
            origin: origin.into_chain_error(),
        }
    }

    pub fn cause(&self) -> &SharedError {
        &self.cause
    }

    pub fn origin(&self) -> &SharedError {
        &self.origin
    }

    pub fn into_parts(self) -> (SharedError, SharedError) {
        (self.cause, self.origin)
    }
}

impl fmt::Display for CauseWithOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.fmt_verbose(f);
        }
        write!(f, "{}: {}", self.cause, self.origin)
    }
}

impl Error for CauseWithOrigin {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.origin as &(dyn Error + 'static))
    }
}

impl ChainError for CauseWithOrigin {
    fn as_cause_provider(&self) -> Option<&dyn CauseProvider> {
        Some(self)
    }

    fn as_origin_provider(&self) -> Option<&dyn OriginProvider> {
        Some(self)
    }

    fn as_verbose_formatter(&self) -> Option<&dyn VerboseFormatter> {
        Some(self)
    }
}

impl CauseProvider for CauseWithOrigin {
    fn cause(&self) -> &dyn ChainError {
        &*self.cause
    }
}

impl OriginProvider for CauseWithOrigin {
    fn origin(&self) -> &dyn ChainError {
        &*self.origin
    }
}

impl VerboseFormatter for CauseWithOrigin {
    fn fmt_verbose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_detailed(&*self.cause, f)?;
        f.write_str("\n")?;
        fmt_detailed(&*self.origin, f)
    }
}

/// Iterator over the candidate causes of an error, see [`causes`].
#[derive(Debug, Clone)]
pub struct Causes<'a> {
    next: Option<&'a dyn ChainError>,
}

/// Walk the cause chain of `err`.
///
/// Each step descends from the current error to its root classification,
/// following [`CauseProvider`] links and, where an error has no
/// classification, [`NextLinkProvider`](crate::NextLinkProvider) links.
/// The error reached last is yielded. If that error is itself an
/// [`OriginProvider`], the walk resumes from its origin; otherwise it ends.
/// Origins of the links passed on the way down are never visited.
///
/// Chains must be acyclic; a cycle makes this iterator endless.
pub fn causes<E: AsChainError + ?Sized>(err: &E) -> Causes<'_> {
    Causes {
        next: Some(err.as_chain_error()),
    }
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a dyn ChainError;

    fn next(&mut self) -> Option<Self::Item> {
        let err = self.next.take()?;
        let (cause, origin) = descend(err);
        self.next = origin;
        Some(cause)
    }
}

impl std::iter::FusedIterator for Causes<'_> {}

fn descend(err: &dyn ChainError) -> (&dyn ChainError, Option<&dyn ChainError>) {
    let mut current = err;
    loop {
        let inward = current
            .as_cause_provider()
            .map(|p| p.cause())
            .or_else(|| current.as_next_link_provider().map(|p| p.next_link()));
        match inward {
            Some(next) => current = next,
            None => return (current, current.as_origin_provider().map(|p| p.origin())),
        }
    }
}

/// Returns true if a cause of `err` equals `target`.
///
/// A candidate matches when its concrete type is `T` and it compares equal.
pub fn has_cause<E, T>(err: &E, target: &T) -> bool
where
    E: AsChainError + ?Sized,
    T: ChainError + PartialEq,
{
    has_matching_cause(err, |candidate| {
        candidate.downcast_ref::<T>().is_some_and(|c| c == target)
    })
}

/// Returns true if `target` itself, the very same value, is a cause of `err`.
///
/// Only meaningful when `target` was shared into the chain as a [`SharedError`].
pub fn has_cause_instance<E: AsChainError + ?Sized>(err: &E, target: &dyn ChainError) -> bool {
    has_matching_cause(err, |candidate| same_error(candidate, target))
}

/// Returns true if any cause of `err` satisfies `matches`.
pub fn has_matching_cause<E, F>(err: &E, mut matches: F) -> bool
where
    E: AsChainError + ?Sized,
    F: FnMut(&dyn ChainError) -> bool,
{
    for (depth, candidate) in causes(err).enumerate() {
        if matches(candidate) {
            #[cfg(feature = "tracing")]
            tracing::trace!(depth, cause = %candidate, "matching cause found");
            #[cfg(not(feature = "tracing"))]
            let _ = depth;
            return true;
        }
    }
    false
}
