//! Error payload shapes and structural validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One field- or entity-level message inside a service error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceErrorMsg {
    /// Id of the field or entity the message concerns.
    pub id: String,
    /// Human-readable message text.
    pub value: String,
}

/// The error payload any remote operation may yield instead of its success
/// shape.
///
/// An empty `errors` list is still a failure; callers must not require
/// field-level detail before treating the payload as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceErrorProps {
    /// Free-text summary of the failure.
    pub text: String,
    /// Numeric status reported by the service (HTTP status in practice).
    pub status: u16,
    /// Field-level detail, possibly empty.
    pub errors: Vec<ServiceErrorMsg>,
}

impl ServiceErrorProps {
    /// Builds a payload with no field-level detail.
    #[must_use]
    pub fn new(text: impl Into<String>, status: u16) -> Self {
        Self {
            text: text.into(),
            status,
            errors: Vec::new(),
        }
    }
}

impl fmt::Display for ServiceErrorProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.text, self.status)?;
        if !self.errors.is_empty() {
            write!(f, ", {} field error(s)", self.errors.len())?;
        }
        Ok(())
    }
}

/// Structural violations detected when validating received snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A map key does not match the `id` of the value it points at.
    #[error("{collection} key {key} does not match document id {id}")]
    KeyMismatch {
        collection: &'static str,
        key: String,
        id: String,
    },

    /// A revision document's `head` points at no entry in `values`.
    #[error("revision {id} head {head} not present among its values")]
    DanglingHead { id: String, head: String },

    /// A topic references a parent that is not in the same localized site.
    #[error("topic {topic} references missing parent {parent}")]
    DanglingParent { topic: String, parent: String },
}
