//! Key/value diagnostic fields attached to errors, and their collection
//! along the wrap chain.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::chain::{
    AsChainError, ChainError, FieldsProvider, IntoChainError, NextLinkProvider, SharedError,
    VerboseFormatter,
};
use crate::render::fmt_detailed;

/// Value of a single diagnostic field.
pub type FieldValue = serde_json::Value;

/// Field map. Unordered: iteration order is unspecified and may differ between runs.
pub type Fields = HashMap<String, FieldValue>;

/// An error decorated with diagnostic fields.
///
/// Message and identity belong to the wrapped error; the fields only show up
/// in detailed (`{:#}`) rendering, one `key: value` line each, ahead of the
/// wrapped error.
#[derive(Debug, Clone)]
pub struct WithFields {
    inner: SharedError,
    fields: Fields,
}

/// Attach a single field to `err`.
pub fn with_field(
    err: impl IntoChainError,
    key: impl Into<String>,
    value: impl Into<FieldValue>,
) -> WithFields {
    let key: String = key.into();
    let value: FieldValue = value.into();
    with_fields(err, [(key, value)])
}

/// Attach `fields` to `err`. A key repeated within `fields` keeps its last value.
pub fn with_fields<K, V>(
    err: impl IntoChainError,
    fields: impl IntoIterator<Item = (K, V)>,
) -> WithFields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    WithFields {
        inner: err.into_chain_error(),
        fields: fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    }
}

impl WithFields {
    pub fn inner(&self) -> &SharedError {
        &self.inner
    }

    /// Fields attached at this layer only.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn into_parts(self) -> (SharedError, Fields) {
        (self.inner, self.fields)
    }
}

impl fmt::Display for WithFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.fmt_verbose(f);
        }
        write!(f, "{}", self.inner)
    }
}

impl Error for WithFields {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl ChainError for WithFields {
    fn as_next_link_provider(&self) -> Option<&dyn NextLinkProvider> {
        Some(self)
    }

    fn as_fields_provider(&self) -> Option<&dyn FieldsProvider> {
        Some(self)
    }

    fn as_verbose_formatter(&self) -> Option<&dyn VerboseFormatter> {
        Some(self)
    }
}

impl NextLinkProvider for WithFields {
    fn next_link(&self) -> &dyn ChainError {
        &*self.inner
    }
}

impl FieldsProvider for WithFields {
    fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl VerboseFormatter for WithFields {
    fn fmt_verbose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.fields {
            match value {
                // strings read better without JSON quoting
                FieldValue::String(text) => writeln!(f, "{key}: {text}")?,
                other => writeln!(f, "{key}: {other}")?,
            }
        }
        fmt_detailed(&*self.inner, f)
    }
}

/// Iterator over the wrap chain of an error, starting with the error itself.
#[derive(Debug, Clone)]
pub struct Links<'a> {
    next: Option<&'a dyn ChainError>,
}

/// Walk the wrap chain of `err` through [`NextLinkProvider`] links.
///
/// Chains must be acyclic; a cycle makes this iterator endless.
pub fn links<E: AsChainError + ?Sized>(err: &E) -> Links<'_> {
    Links {
        next: Some(err.as_chain_error()),
    }
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a dyn ChainError;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next.take()?;
        self.next = link.as_next_link_provider().map(|p| p.next_link());
        Some(link)
    }
}

impl std::iter::FusedIterator for Links<'_> {}

/// Merge the fields of every link in the wrap chain of `err`.
///
/// The first occurrence of a key wins, so a field attached by an outer wrapper
/// shadows a deeper field of the same name.
pub fn collect_fields<E: AsChainError + ?Sized>(err: &E) -> Fields {
    collect_fields_from(Some(err.as_chain_error()))
}

/// Like [`collect_fields`], but accepts the absence of an error and returns an
/// empty map for it.
pub fn collect_fields_from(err: Option<&dyn ChainError>) -> Fields {
    let mut result = Fields::new();
    let chain = Links { next: err };
    for (depth, link) in chain.enumerate() {
        let Some(provider) = link.as_fields_provider() else {
            continue;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(depth, count = provider.fields().len(), "merging link fields");
        #[cfg(not(feature = "tracing"))]
        let _ = depth;
        for (key, value) in provider.fields() {
            if !result.contains_key(key) {
                result.insert(key.clone(), value.clone());
            }
        }
    }
    result
}
