use serde::{Deserialize, Serialize};

/// Discriminant of a service document.
///
/// The remote service sends these as SCREAMING_SNAKE_CASE strings in the
/// `type` field of every document and entity summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    ServiceRev,
    ServiceDef,
    ServiceConfig,
    ServiceRelease,
}

/// Discriminant of entity summaries.
///
/// The source contract aliases this to the document discriminant.
pub type EntityType = DocumentType;

/// Discriminant of a sub-system configuration value or an external repository
/// reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigType {
    /// Content authoring (topics, blobs, links).
    Stencil,
    /// Form definitions and fill sessions.
    Dialob,
    /// Flow, service and decision programs.
    Hdes,
    /// The composer service itself.
    Service,
    /// A named release snapshot.
    Release,
}
