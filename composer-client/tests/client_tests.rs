mod common;

use async_trait::async_trait;
use composer_client::{
    ClientError, ClientResult, ComposerClient, CreateRelease, FetchInit, HttpStore, Store,
    StoreConfig,
};
use composer_model::{Site, SiteContentType, SiteMigrate};
use composer_types::DocumentId;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{definition_body, head_body, mock_config};

fn client_for(server: &MockServer) -> ComposerClient {
    ComposerClient::new(HttpStore::new(mock_config(server)))
}

// ── Head state ──────────────────────────────────────────────────

#[tokio::test]
async fn get_site_returns_head_snapshot() {
    common::init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/head"))
        .respond_with(ResponseTemplate::new(200).set_body_json(head_body()))
        .mount(&server)
        .await;

    let site = client_for(&server).get_site().await.unwrap();
    assert_eq!(site.name, "demo");
    assert_eq!(site.content_type, SiteContentType::Ok);
    assert!(site.validate().is_ok());
}

#[tokio::test]
async fn get_site_resolves_absent_site_to_not_created() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/head"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let site = client_for(&server).get_site().await.unwrap();
    assert_eq!(site.content_type, SiteContentType::NotCreated);
    assert!(site.revisions.is_empty());
    assert!(site.validate().is_ok());
    assert_ne!(site.content_type, SiteContentType::Ok);
}

#[tokio::test]
async fn head_fails_on_absent_site() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/head"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).head().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn head_returns_snapshot_when_present() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/head"))
        .respond_with(ResponseTemplate::new(200).set_body_json(head_body()))
        .mount(&server)
        .await;

    let site = client_for(&server).head().await.unwrap();
    assert_eq!(site.commit.as_deref(), Some("a1b2c3"));
}

// ── Definition fetch ────────────────────────────────────────────

#[tokio::test]
async fn definition_fetches_joined_view() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/definitions/def-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(definition_body()))
        .expect(1)
        .mount(&server)
        .await;

    let definition = client_for(&server)
        .definition(&DocumentId::new("def-1"))
        .await
        .unwrap();
    assert_eq!(definition.definition.id, DocumentId::new("def-1"));
    assert_eq!(definition.definition.processes[0].form_id, "form-1");
    assert!(definition.hdes.flows.is_empty());
}

// ── Copy ────────────────────────────────────────────────────────

#[tokio::test]
async fn copy_posts_id_and_new_name() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/copy"))
        .and(body_json(serde_json::json!({"id": "def-1", "name": "copied"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(head_body()))
        .expect(1)
        .mount(&server)
        .await;

    let site = client_for(&server)
        .copy(&DocumentId::new("def-1"), "copied")
        .await
        .unwrap();
    assert_eq!(site.name, "demo");
}

// ── Creation intents ────────────────────────────────────────────

#[tokio::test]
async fn create_site_posts_empty_intent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sites"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(head_body()))
        .expect(1)
        .mount(&server)
        .await;

    let site = client_for(&server).create().site().await.unwrap();
    assert_eq!(site.content_type, SiteContentType::Ok);
}

#[tokio::test]
async fn migrate_posts_the_migration() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/migrations"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(head_body()))
        .expect(1)
        .mount(&server)
        .await;

    let site = client_for(&server)
        .create()
        .migrate(SiteMigrate::new())
        .await
        .unwrap();
    assert_eq!(site.name, "demo");
}

#[tokio::test]
async fn release_posts_name_and_desc() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/releases"))
        .and(body_json(serde_json::json!({
            "name": "v1",
            "desc": "first release"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(head_body()))
        .expect(1)
        .mount(&server)
        .await;

    let site = client_for(&server)
        .create()
        .release(CreateRelease {
            name: "v1".to_string(),
            desc: "first release".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(site.name, "demo");
}

// ── Construction and config ─────────────────────────────────────

#[tokio::test]
async fn client_exposes_its_config() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    assert_eq!(client.config().url, server.uri());
}

#[test]
fn from_config_rejects_blank_url() {
    let err = ComposerClient::from_config(StoreConfig::new("   ")).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
    assert!(err.to_string().contains("url"));
}

#[test]
fn from_config_accepts_real_url() {
    let client = ComposerClient::from_config(StoreConfig::new("http://localhost:8080/q")).unwrap();
    assert_eq!(client.config().url, "http://localhost:8080/q");
}

#[test]
fn delete_builder_is_reserved_surface() {
    let client = ComposerClient::from_config(StoreConfig::new("http://localhost")).unwrap();
    let builder = client.delete();
    assert!(format!("{builder:?}").contains("DeleteBuilder"));
}

// ── Substitute transport ────────────────────────────────────────

struct FixedStore {
    config: StoreConfig,
    body: serde_json::Value,
}

#[async_trait]
impl Store for FixedStore {
    fn config(&self) -> &StoreConfig {
        &self.config
    }

    async fn fetch<T>(&self, _path: &str, _init: FetchInit) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

#[tokio::test]
async fn facade_runs_over_any_store() {
    let store = FixedStore {
        config: StoreConfig::new("fixed://"),
        body: head_body(),
    };
    let client = ComposerClient::new(store);
    let site: Site = client.head().await.unwrap();
    assert_eq!(site.name, "demo");
    assert_eq!(client.config().url, "fixed://");
}
