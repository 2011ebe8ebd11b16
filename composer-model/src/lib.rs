//! Data contract for the composer service.
//!
//! Defines the shapes a consuming application exchanges with the remote
//! composer backend:
//! - [`ServiceDocument`] and its concrete variants (revision, definition,
//!   config, release) with their embedded value records
//! - [`Site`], the aggregate head-state snapshot, and [`Entity`], the generic
//!   summary projection
//! - [`SiteDefinition`], a definition joined with its dialob (forms), stencil
//!   (content) and hdes (flows/services/decisions) bundles
//! - [`ServiceErrorProps`], the payload any remote operation may fail with
//!
//! All shapes round-trip through JSON unchanged. The structural invariants
//! the service promises (map keys equal document ids, revision heads resolve,
//! topic parents resolve) are exposed as `validate` methods so callers can
//! check snapshots at the trust boundary.

mod definition;
mod dialob;
mod document;
mod error;
mod hdes;
mod site;
mod stencil;

pub use definition::SiteDefinition;
pub use dialob::{
    ComposerDialob, FormData, FormDocument, FormRevisionDocument, InitSession, Variable,
};
pub use document::{
    ProcessValue, RefIdValue, ServiceConfigDocument, ServiceConfigValue, ServiceDefinitionDocument,
    ServiceDocument, ServiceReleaseDocument, ServiceRevisionDocument, ServiceRevisionValue,
};
pub use error::{ModelError, ServiceErrorMsg, ServiceErrorProps};
pub use hdes::{
    AstBody, AstCommand, AstDecision, AstFlow, AstService, ComposerHdes, ProgramMessage,
    ProgramStatus,
};
pub use site::{Entity, Site, SiteContentType, SiteMigrate};
pub use stencil::{ComposerStencil, LocalizedSite, Topic, TopicBlob, TopicHeading, TopicLink};
