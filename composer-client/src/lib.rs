//! Typed async client for the composer service.
//!
//! The service manages composer workspaces: revisioned service documents
//! joined with their form (dialob), content (stencil) and process (hdes)
//! bundles. This crate is the transport side of that contract:
//!
//! - [`StoreConfig`]: where the service lives and which tokens ride along
//! - [`Store`] / [`HttpStore`]: the path-to-request primitive
//! - [`ComposerClient`]: head/site fetch, definition fetch, copy and the
//!   builder-style creation intents
//! - [`ClientError`]: the failure taxonomy of remote calls
//!
//! Data shapes live in `composer-model`, identifiers and tag sets in
//! `composer-types`.

mod client;
mod config;
mod error;
mod store;

pub use client::{ComposerClient, CreateBuilder, CreateRelease, DeleteBuilder};
pub use config::{CsrfToken, StoreConfig};
pub use error::{ClientError, ClientResult};
pub use store::{FetchInit, FetchMethod, HttpStore, Store};
