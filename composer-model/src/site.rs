//! The site aggregate and the generic entity projection.
//!
//! A [`Site`] is the snapshot root the service hands out: the current head
//! state of a composer workspace. The client never mutates a site locally;
//! it only caches and displays what it received.

use crate::document::{
    ServiceConfigDocument, ServiceDefinitionDocument, ServiceReleaseDocument,
    ServiceRevisionDocument,
};
use crate::error::ModelError;
use composer_types::{DocumentId, EntityId, EntityType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content state of a site snapshot.
///
/// Consumers must branch on this before assuming the document maps carry
/// meaningful content; every state other than `Ok` may legally come with
/// empty maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SiteContentType {
    Ok,
    NotCreated,
    Empty,
    Errors,
    NoConnection,
    BackendNotFound,
}

/// Aggregate snapshot of a composer workspace's current head state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    pub content_type: SiteContentType,
    pub revisions: BTreeMap<DocumentId, ServiceRevisionDocument>,
    pub definitions: BTreeMap<DocumentId, ServiceDefinitionDocument>,
    pub releases: BTreeMap<DocumentId, ServiceReleaseDocument>,
    pub configs: BTreeMap<DocumentId, ServiceConfigDocument>,
}

impl Site {
    /// The placeholder snapshot for a site that does not exist yet.
    ///
    /// This is what `get_site` resolves to when the backing resource is
    /// absent: no name, no commit, empty maps, `NOT_CREATED` state.
    #[must_use]
    pub fn not_created() -> Self {
        Self {
            name: String::new(),
            commit: None,
            content_type: SiteContentType::NotCreated,
            revisions: BTreeMap::new(),
            definitions: BTreeMap::new(),
            releases: BTreeMap::new(),
            configs: BTreeMap::new(),
        }
    }

    /// Checks that every map key equals the `id` of the document it maps to.
    pub fn validate(&self) -> Result<(), ModelError> {
        check_keys("revisions", &self.revisions, |doc| &doc.id)?;
        check_keys("definitions", &self.definitions, |doc| &doc.id)?;
        check_keys("releases", &self.releases, |doc| &doc.id)?;
        check_keys("configs", &self.configs, |doc| &doc.id)?;
        Ok(())
    }
}

fn check_keys<T>(
    collection: &'static str,
    map: &BTreeMap<DocumentId, T>,
    id_of: impl Fn(&T) -> &DocumentId,
) -> Result<(), ModelError> {
    for (key, value) in map {
        if key != id_of(value) {
            return Err(ModelError::KeyMismatch {
                collection,
                key: key.to_string(),
                id: id_of(value).to_string(),
            });
        }
    }
    Ok(())
}

/// A generic summary projection of any document: id, optional display name
/// and the shared discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

/// Migration intent accepted by the create surface.
///
/// The source contract declares this without fields; it is kept as an
/// extensible placeholder that serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SiteMigrate {}

impl SiteMigrate {
    /// An empty migration intent.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
