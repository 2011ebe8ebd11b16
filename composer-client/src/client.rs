//! The composer service facade.

use crate::config::StoreConfig;
use crate::error::{ClientError, ClientResult};
use crate::store::{FetchInit, HttpStore, Store};
use composer_model::{Site, SiteDefinition, SiteMigrate};
use composer_types::DocumentId;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

/// The operation surface of a composer service.
///
/// Generic over its [`Store`] so tests can substitute the transport; the
/// default is [`HttpStore`].
#[derive(Debug, Clone)]
pub struct ComposerClient<S: Store = HttpStore> {
    store: S,
}

impl ComposerClient<HttpStore> {
    /// Builds a client over the default HTTP transport.
    pub fn from_config(config: StoreConfig) -> ClientResult<Self> {
        if config.url.trim().is_empty() {
            return Err(ClientError::Config(
                "service url must not be empty".to_string(),
            ));
        }
        Ok(Self::new(HttpStore::new(config)))
    }
}

impl<S: Store> ComposerClient<S> {
    /// Wraps an existing transport.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the configuration requests are resolved against.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        self.store.config()
    }

    /// Fetches the current head snapshot; resolves to
    /// [`Site::not_created`] when the backing site does not exist yet.
    pub async fn get_site(&self) -> ClientResult<Site> {
        self.store
            .fetch_or("head", FetchInit::get(), Site::not_created)
            .await
    }

    /// Fetches the current head snapshot; absence is an error.
    pub async fn head(&self) -> ClientResult<Site> {
        self.store.fetch("head", FetchInit::get()).await
    }

    /// Fetches the definition `id` joined with its form, content and
    /// process bundles.
    pub async fn definition(&self, id: &DocumentId) -> ClientResult<SiteDefinition> {
        self.store
            .fetch(&format!("definitions/{id}"), FetchInit::get())
            .await
    }

    /// Requests a copy of definition `id` under a new name.
    pub async fn copy(&self, id: &DocumentId, name: &str) -> ClientResult<Site> {
        info!("Copying {} as {}", id, name);
        self.store
            .fetch("copy", FetchInit::post(json!({ "id": id, "name": name })))
            .await
    }

    /// Creation intents, scoped behind a builder.
    #[must_use]
    pub fn create(&self) -> CreateBuilder<'_, S> {
        CreateBuilder { store: &self.store }
    }

    /// Deletion intents, scoped behind a builder.
    ///
    /// The service declares no delete operations yet; the builder reserves
    /// the surface.
    #[must_use]
    pub fn delete(&self) -> DeleteBuilder {
        DeleteBuilder::default()
    }
}

/// Properties of a release creation intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelease {
    pub name: String,
    pub desc: String,
}

/// Builder-style creation intents; every call returns the updated [`Site`].
#[derive(Debug)]
pub struct CreateBuilder<'a, S: Store> {
    store: &'a S,
}

impl<S: Store> CreateBuilder<'_, S> {
    /// Provisions the backing site.
    pub async fn site(&self) -> ClientResult<Site> {
        info!("Creating site");
        self.store.fetch("sites", FetchInit::post(json!({}))).await
    }

    /// Runs the given site migration.
    pub async fn migrate(&self, migration: SiteMigrate) -> ClientResult<Site> {
        info!("Running site migration");
        self.store
            .fetch(
                "migrations",
                FetchInit::post(serde_json::to_value(&migration)?),
            )
            .await
    }

    /// Tags the current head as a named release.
    pub async fn release(&self, release: CreateRelease) -> ClientResult<Site> {
        info!("Creating release {}", release.name);
        self.store
            .fetch("releases", FetchInit::post(serde_json::to_value(&release)?))
            .await
    }
}

/// Deletion intents; empty until the service declares delete operations.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct DeleteBuilder {}
