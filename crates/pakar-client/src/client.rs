//! HTTP portal client implementation using reqwest.

use std::sync::Arc;

use async_trait::async_trait;
use pakar_core::{
    FacultyData, FacultyList, RecommendResponse, Researcher, SearchQuery, TranslateRequest,
    TranslateResponse,
};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::PortalConfig;
use crate::error::{Error, Result};
use crate::{PortalApi, TRACING_TARGET_HTTP};

/// Inner client that holds the HTTP client and the resolved base URLs.
struct ClientInner {
    http: Client,
    portal_base: Url,
    translator_base: Url,
}

impl std::fmt::Debug for ClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientInner")
            .field("portal_base", &self.portal_base.as_str())
            .field("translator_base", &self.translator_base.as_str())
            .finish_non_exhaustive()
    }
}

/// HTTP client for the portal backends.
///
/// One logical endpoint maps to exactly one base URL plus path: `recommend`,
/// `faculties` and `faculty-data/{name}` live on the recommendation/directory
/// backend, `translate` on the translation backend. The client performs no
/// caching and no retries, and configures no request timeout: a request that
/// never settles leaves the dispatching controller slice pending, which the
/// contract accepts.
///
/// # Examples
///
/// ```rust,ignore
/// use pakar_client::{PortalApi, PortalClient, PortalConfig};
///
/// let client = PortalClient::new(PortalConfig::default())?;
/// let faculties = client.faculties().await?;
/// ```
#[derive(Clone, Debug)]
pub struct PortalClient {
    inner: Arc<ClientInner>,
}

impl PortalClient {
    /// Creates a new portal client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either base URL does not parse or the HTTP client
    /// cannot be created.
    pub fn new(config: PortalConfig) -> Result<Self> {
        let portal_base = parse_base_url(&config.portal_api_url)?;
        let translator_base = parse_base_url(&config.translator_api_url)?;

        tracing::debug!(
            target: TRACING_TARGET_HTTP,
            portal_base = %portal_base,
            translator_base = %translator_base,
            "Creating portal client"
        );

        let http = Client::builder()
            .user_agent(concat!("pakar/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Network)?;

        let inner = ClientInner {
            http,
            portal_base,
            translator_base,
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Creates a new portal client with default (local development) URLs.
    pub fn with_defaults() -> Result<Self> {
        Self::new(PortalConfig::default())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .inner
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::from_reqwest)?;
        Self::read_json(url, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T> {
        let response = self
            .inner
            .http
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(Error::from_reqwest)?;
        Self::read_json(url, response).await
    }

    /// Validates the status and deserializes the body against the schema.
    ///
    /// Schema violations fail closed as parse errors instead of letting
    /// unexpected shapes propagate into view state.
    async fn read_json<T: DeserializeOwned>(url: Url, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                target: TRACING_TARGET_HTTP,
                url = %url,
                status = status.as_u16(),
                "Backend answered with non-success status"
            );
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(Error::from_reqwest)?;
        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!(
                target: TRACING_TARGET_HTTP,
                url = %url,
                error = %err,
                "Response body violated the expected schema"
            );
            Error::Parse(err.to_string())
        })
    }
}

/// Parses and normalizes a configured base URL.
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|err| Error::invalid_config(format!("invalid base URL {raw:?}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::invalid_config(format!(
            "base URL {raw:?} cannot carry endpoint paths"
        )));
    }
    Ok(url)
}

/// Appends path segments to a base URL, percent-escaping each segment.
fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::invalid_config(format!("base URL {base} cannot carry paths")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn recommend(&self, query: &SearchQuery) -> Result<Vec<Researcher>> {
        let url = endpoint_url(&self.inner.portal_base, &["recommend"])?;

        tracing::debug!(
            target: TRACING_TARGET_HTTP,
            topic = %query.topic,
            model = %query.model,
            metric = %query.metric,
            "Requesting recommendations"
        );

        let response: RecommendResponse = self.post_json(url, query).await?;

        tracing::debug!(
            target: TRACING_TARGET_HTTP,
            count = response.recommendations.len(),
            "Received recommendations"
        );

        Ok(response.recommendations)
    }

    async fn faculties(&self) -> Result<Vec<String>> {
        let url = endpoint_url(&self.inner.portal_base, &["faculties"])?;
        let response: FacultyList = self.get_json(url).await?;

        tracing::debug!(
            target: TRACING_TARGET_HTTP,
            count = response.faculties.len(),
            "Received faculty list"
        );

        Ok(response.faculties)
    }

    async fn faculty_data(&self, faculty: &str) -> Result<FacultyData> {
        let url = endpoint_url(&self.inner.portal_base, &["faculty-data", faculty])?;

        tracing::debug!(
            target: TRACING_TARGET_HTTP,
            faculty = %faculty,
            "Requesting faculty data"
        );

        self.get_json(url).await
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<String> {
        let url = endpoint_url(&self.inner.translator_base, &["translate"])?;

        tracing::debug!(
            target: TRACING_TARGET_HTTP,
            direction = %request.direction,
            chars = request.text.len(),
            "Requesting translation"
        );

        let response: TranslateResponse = self.post_json(url, request).await?;
        Ok(response.translation)
    }
}
