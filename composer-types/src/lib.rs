//! Identifier and document-kind vocabulary for the composer client.
//!
//! This crate defines the fundamental, transport-agnostic types shared by the
//! whole contract:
//! - Opaque string identifiers (document, revision value, process, entity)
//! - The closed document/config discriminant sets the service tags records with
//!
//! Everything here is plain data: the document shapes themselves live in
//! `composer-model`, the service surface in `composer-client`.

mod ids;
mod kinds;

pub use ids::{DocumentId, EntityId, ProcessId, RevisionValueId};
pub use kinds::{ConfigType, DocumentType, EntityType};
