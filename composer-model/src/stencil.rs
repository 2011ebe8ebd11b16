//! Content-authoring (stencil) shapes: localized sites, topics, blobs, links.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One locale's content: topics, their blobs and their links, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedSite {
    pub topics: BTreeMap<String, Topic>,
    pub blobs: BTreeMap<String, TopicBlob>,
    pub links: BTreeMap<String, TopicLink>,
}

impl LocalizedSite {
    /// Checks that every topic's `parent` reference resolves within this
    /// site's own topics.
    pub fn validate(&self) -> Result<(), ModelError> {
        for topic in self.topics.values() {
            if let Some(parent) = &topic.parent {
                if !self.topics.contains_key(parent) {
                    return Err(ModelError::DanglingParent {
                        topic: topic.id.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// An outline node of a localized site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    /// Ids into the owning site's `links` map.
    pub links: Vec<String>,
    pub headings: Vec<TopicHeading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
}

impl Topic {
    /// The headings sorted by their `order` field, ascending.
    ///
    /// `level` expresses display nesting depth and is left untouched; the
    /// data model puts no constraint on it.
    #[must_use]
    pub fn headings_ordered(&self) -> Vec<&TopicHeading> {
        let mut ordered: Vec<&TopicHeading> = self.headings.iter().collect();
        ordered.sort_by_key(|heading| heading.order);
        ordered
    }
}

/// One entry of a topic's leveled outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicHeading {
    pub id: String,
    pub name: String,
    /// Sort key within the topic, ascending.
    pub order: i32,
    /// Display nesting depth.
    pub level: i32,
}

/// The content body a topic may point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicBlob {
    pub id: String,
    pub value: String,
}

/// A navigational link attached to topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicLink {
    pub id: String,
    pub path: String,
    #[serde(rename = "type")]
    pub link_type: String,
    pub name: String,
    pub value: String,
    pub global: bool,
    pub workflow: bool,
}

/// The content bundle of a site definition: localized sites keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerStencil {
    pub sites: BTreeMap<String, LocalizedSite>,
}
