//! Process-definition (hdes) shapes bundled with a site definition.
//!
//! Flows, services and decisions are AST-backed artifacts; the contract only
//! carries their id and the AST's display name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The process bundle of a site definition, keyed by artifact id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerHdes {
    pub flows: BTreeMap<String, AstFlow>,
    pub services: BTreeMap<String, AstService>,
    pub decisions: BTreeMap<String, AstDecision>,
}

/// The named AST header shared by flows, services and decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstBody {
    pub name: String,
}

/// A flow program artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstFlow {
    pub id: String,
    pub ast: AstBody,
}

/// A service-task program artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstService {
    pub id: String,
    pub ast: AstBody,
}

/// A decision-table program artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstDecision {
    pub id: String,
    pub ast: AstBody,
}

/// An editing command against an AST.
///
/// Declared without fields in the source contract; kept as an extensible
/// placeholder that serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AstCommand {}

impl AstCommand {
    /// An empty placeholder command.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

/// Health of a compiled program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgramStatus {
    Up,
    AstError,
    ProgramError,
    DependencyError,
}

/// A diagnostic attached to a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramMessage {
    pub id: String,
    pub msg: String,
}
