//! The joined definition view returned by the definition fetch.

use crate::dialob::ComposerDialob;
use crate::document::ServiceDefinitionDocument;
use crate::hdes::ComposerHdes;
use crate::stencil::ComposerStencil;
use serde::{Deserialize, Serialize};

/// One definition document joined with its three sub-domain bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDefinition {
    pub definition: ServiceDefinitionDocument,
    pub dialob: ComposerDialob,
    pub stencil: ComposerStencil,
    pub hdes: ComposerHdes,
}
