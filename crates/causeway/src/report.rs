//! Serializable snapshot of an error chain.
//!
//! Gated behind the `serde` feature so consumers that only need the chain
//! model don't pull in serde derives.

#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};

use crate::cause::causes;
use crate::chain::AsChainError;
use crate::fields::{Fields, collect_fields};

/// What an error chain says about itself: its message, the messages of the
/// causes [`causes`] walks, and the merged fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainReport {
    pub message: String,
    pub causes: Vec<String>,
    pub fields: Fields,
}

impl ChainReport {
    pub fn new<E: AsChainError + ?Sized>(err: &E) -> Self {
        let err = err.as_chain_error();
        Self {
            message: err.to_string(),
            causes: causes(err).map(|cause| cause.to_string()).collect(),
            fields: collect_fields(err),
        }
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
