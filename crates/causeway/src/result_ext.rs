use crate::cause::{CauseWithOrigin, new_cause};
use crate::chain::IntoChainError;
use crate::fields::{FieldValue, WithFields, with_field, with_fields};

/// Extension trait for `Result` that wraps the error in place.
///
/// `Ok` values pass through untouched.
///
/// Example
/// ```rust
/// use causeway::{has_cause, collect_fields, Message, ResultExt};
///
/// const UNAVAILABLE: Message = Message::from_static("service unavailable");
///
/// fn connect() -> std::io::Result<()> {
///     Err(std::io::Error::other("connection refused"))
/// }
///
/// let err = connect()
///     .with_cause(UNAVAILABLE)
///     .with_field("host", "db1")
///     .unwrap_err();
/// assert!(has_cause(&err, &UNAVAILABLE));
/// assert_eq!(collect_fields(&err)["host"], "db1");
/// ```
pub trait ResultExt<T> {
    /// Classify the error as `cause`, keeping it as the origin.
    fn with_cause<C: IntoChainError>(self, cause: C) -> Result<T, CauseWithOrigin>;

    /// Like [`ResultExt::with_cause`], building the cause only on error.
    fn with_cause_lazy<C, F>(self, cause: F) -> Result<T, CauseWithOrigin>
    where
        C: IntoChainError,
        F: FnOnce() -> C;

    fn with_field(
        self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<T, WithFields>;

    fn with_fields<K, V>(self, fields: impl IntoIterator<Item = (K, V)>) -> Result<T, WithFields>
    where
        K: Into<String>,
        V: Into<FieldValue>;
}

impl<T, E: IntoChainError> ResultExt<T> for Result<T, E> {
    fn with_cause<C: IntoChainError>(self, cause: C) -> Result<T, CauseWithOrigin> {
        self.map_err(|origin| new_cause(cause, origin))
    }

    fn with_cause_lazy<C, F>(self, cause: F) -> Result<T, CauseWithOrigin>
    where
        C: IntoChainError,
        F: FnOnce() -> C,
    {
        self.map_err(|origin| new_cause(cause(), origin))
    }

    fn with_field(
        self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<T, WithFields> {
        self.map_err(|err| with_field(err, key, value))
    }

    fn with_fields<K, V>(self, fields: impl IntoIterator<Item = (K, V)>) -> Result<T, WithFields>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.map_err(|err| with_fields(err, fields))
    }
}
