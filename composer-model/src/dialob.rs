//! Form (dialob) shapes bundled with a site definition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The form bundle of a site definition: form documents and their revisions,
/// keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerDialob {
    pub forms: BTreeMap<String, FormDocument>,
    pub revs: BTreeMap<String, FormRevisionDocument>,
}

/// A form definition document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    pub id: String,
    pub data: FormData,
}

/// The payload of a form document: its name and declared variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub variables: Vec<Variable>,
}

/// A variable declared by a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    /// Whether the variable is filled from the calling context rather than
    /// by the user.
    pub context: bool,
    pub context_type: String,
}

/// A form revision document.
///
/// Declared without fields in the source contract; kept as an extensible
/// placeholder that serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct FormRevisionDocument {}

impl FormRevisionDocument {
    /// An empty placeholder revision.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

/// Intent for starting a form-fill session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitSession {
    pub form_id: String,
    pub language: String,
    pub context_values: BTreeMap<String, String>,
}
