//! Connection settings for a composer service endpoint.

use serde::{Deserialize, Serialize};

/// A CSRF token attached to mutating requests.
///
/// `key` is the header name, `value` the header value; both come from the
/// hosting page, the client only carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfToken {
    pub key: String,
    pub value: String,
}

/// Where the composer service lives and which tokens ride along.
///
/// `oidc` is attached as a bearer token on every request; `csrf` only on
/// mutating ones. `status` is an opaque flag the transport carries but does
/// not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Base URL of the service.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oidc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf: Option<CsrfToken>,
}

impl StoreConfig {
    /// A configuration pointing at `url`, with nothing attached.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            oidc: None,
            status: None,
            csrf: None,
        }
    }

    /// Attaches an OIDC bearer token.
    #[must_use]
    pub fn with_oidc(mut self, token: impl Into<String>) -> Self {
        self.oidc = Some(token.into());
        self
    }

    /// Carries an opaque status flag.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Attaches a CSRF header for mutating requests.
    #[must_use]
    pub fn with_csrf(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.csrf = Some(CsrfToken {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Joins an operation path onto the base URL with exactly one slash
    /// between them, whatever slashes either side carries.
    #[must_use]
    pub fn resource_url(&self, path: &str) -> String {
        let base = self.url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}
