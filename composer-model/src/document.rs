//! Service documents and their embedded value records.
//!
//! Every document shares the base fields (id, version, created, updated) and
//! a `type` discriminant. The discriminant travels with the [`ServiceDocument`]
//! sum type so matches over document kinds are exhaustive; the concrete
//! structs carry only their own fields.

use crate::error::ModelError;
use chrono::NaiveDateTime;
use composer_types::{ConfigType, DocumentId, DocumentType, ProcessId, RevisionValueId};
use serde::{Deserialize, Serialize};

/// One named, timestamped entry in a revision document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRevisionValue {
    pub id: RevisionValueId,
    pub revision_name: String,
    /// The definition document this value belongs to.
    pub def_id: DocumentId,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
}

/// A typed reference to an external repository tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefIdValue {
    pub id: String,
    pub tag_name: String,
    pub repo_id: String,
    #[serde(rename = "type")]
    pub ref_type: ConfigType,
}

/// A named process descriptor linking a flow to the form that feeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessValue {
    pub id: ProcessId,
    pub name: String,
    pub desc: String,
    pub flow_id: String,
    pub form_id: String,
}

/// One sub-system entry of a config document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfigValue {
    pub id: String,
    #[serde(rename = "type")]
    pub config_type: ConfigType,
}

/// A document holding an ordered collection of named revision values with a
/// `head` pointer into them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRevisionDocument {
    pub id: DocumentId,
    pub version: String,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
    pub name: String,
    /// Must reference one of `values`; see [`Self::validate`].
    pub head: RevisionValueId,
    pub values: Vec<ServiceRevisionValue>,
}

impl ServiceRevisionDocument {
    /// Looks up the value `head` points at, if it is present.
    #[must_use]
    pub fn head_value(&self) -> Option<&ServiceRevisionValue> {
        self.values.iter().find(|value| value.id == self.head)
    }

    /// Checks that `head` references a value present in `values`.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.head_value().is_none() {
            return Err(ModelError::DanglingHead {
                id: self.id.to_string(),
                head: self.head.to_string(),
            });
        }
        Ok(())
    }
}

/// A document describing process references and their repository links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinitionDocument {
    pub id: DocumentId,
    pub version: String,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
    pub refs: Vec<RefIdValue>,
    pub processes: Vec<ProcessValue>,
}

/// A document aggregating the four sub-system configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfigDocument {
    pub id: DocumentId,
    pub version: String,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
    pub stencil: ServiceConfigValue,
    pub dialob: ServiceConfigValue,
    pub hdes: ServiceConfigValue,
    pub service: ServiceConfigValue,
}

/// A named snapshot marker; carries only the base document fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReleaseDocument {
    pub id: DocumentId,
    pub version: String,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
}

/// Any service document, discriminated by the wire `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServiceDocument {
    #[serde(rename = "SERVICE_REV")]
    Revision(ServiceRevisionDocument),
    #[serde(rename = "SERVICE_DEF")]
    Definition(ServiceDefinitionDocument),
    #[serde(rename = "SERVICE_CONFIG")]
    Config(ServiceConfigDocument),
    #[serde(rename = "SERVICE_RELEASE")]
    Release(ServiceReleaseDocument),
}

impl ServiceDocument {
    /// The document id, regardless of kind.
    #[must_use]
    pub fn id(&self) -> &DocumentId {
        match self {
            Self::Revision(doc) => &doc.id,
            Self::Definition(doc) => &doc.id,
            Self::Config(doc) => &doc.id,
            Self::Release(doc) => &doc.id,
        }
    }

    /// The document version, regardless of kind.
    #[must_use]
    pub fn version(&self) -> &str {
        match self {
            Self::Revision(doc) => &doc.version,
            Self::Definition(doc) => &doc.version,
            Self::Config(doc) => &doc.version,
            Self::Release(doc) => &doc.version,
        }
    }

    /// Creation timestamp, regardless of kind.
    #[must_use]
    pub fn created(&self) -> NaiveDateTime {
        match self {
            Self::Revision(doc) => doc.created,
            Self::Definition(doc) => doc.created,
            Self::Config(doc) => doc.created,
            Self::Release(doc) => doc.created,
        }
    }

    /// Last-update timestamp, regardless of kind.
    #[must_use]
    pub fn updated(&self) -> NaiveDateTime {
        match self {
            Self::Revision(doc) => doc.updated,
            Self::Definition(doc) => doc.updated,
            Self::Config(doc) => doc.updated,
            Self::Release(doc) => doc.updated,
        }
    }

    /// The discriminant this document serializes under.
    #[must_use]
    pub fn document_type(&self) -> DocumentType {
        match self {
            Self::Revision(_) => DocumentType::ServiceRev,
            Self::Definition(_) => DocumentType::ServiceDef,
            Self::Config(_) => DocumentType::ServiceConfig,
            Self::Release(_) => DocumentType::ServiceRelease,
        }
    }
}
