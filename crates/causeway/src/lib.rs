//! Error chains with semantic causes and diagnostic fields.
//!
//! Two wrappers build chains out of existing errors:
//! - [`CauseWithOrigin`] pairs a classification ("db failure") with the
//!   concrete error that triggered it ("connection refused").
//! - [`WithFields`] attaches key/value fields to an error without touching
//!   its message.
//!
//! Traversals work on any [`ChainError`], not just these wrappers:
//! [`has_cause`] and [`has_matching_cause`] walk the cause chain,
//! [`collect_fields`] walks the wrap chain.
//!
//! ```rust
//! use causeway::{collect_fields, has_cause, msg, new_cause, with_field, Message};
//!
//! const DB_FAILURE: Message = Message::from_static("db failure");
//!
//! let e1 = new_cause(DB_FAILURE, msg("connection refused"));
//! assert_eq!(e1.to_string(), "db failure: connection refused");
//! assert!(has_cause(&e1, &DB_FAILURE));
//!
//! let e2 = with_field(with_field(e1, "retry", 3), "host", "db1");
//! let fields = collect_fields(&e2);
//! assert_eq!(fields["retry"], 3);
//! assert_eq!(fields["host"], "db1");
//! ```

pub mod cause;
pub mod chain;
pub mod fields;
pub mod message;
pub mod render;
pub mod report;
pub mod result_ext;

// public exports
pub use cause::{
    CauseWithOrigin, Causes, causes, has_cause, has_cause_instance, has_matching_cause, new_cause,
};
pub use chain::{
    AsChainError, CauseProvider, ChainError, FieldsProvider, IntoChainError, NextLinkProvider,
    OriginProvider, SharedError, VerboseFormatter, same_error,
};
pub use fields::{
    FieldValue, Fields, Links, WithFields, collect_fields, collect_fields_from, links, with_field,
    with_fields,
};
pub use message::{Message, msg};
pub use render::{RenderMode, Rendered, render};
#[cfg(feature = "serde")]
pub use report::ChainReport;
pub use result_ext::ResultExt;
