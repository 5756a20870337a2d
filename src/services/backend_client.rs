//! BackendClient - REST Client for the Management Backend
//!
//! Thin async wrapper over reqwest; one method per endpoint, each
//! returning the typed response or an API error.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::domain::batch::{
    BatchAnalyzeRequest, BatchAnalyzeResponse, BatchProcessRequest, BatchProcessResponse,
    BatchSelection, MetadataSearchItem, MetadataSearchRequest, MetadataSearchResponse,
};
use crate::domain::config::BackendConfig;
use crate::domain::library::{LinkFilter, TafLibraryResponse};
use crate::domain::metadata::{
    CoverDownloadRequest, CoverDownloadResponse, CoverSearchRequest, CoverSearchResponse,
    ParseTafRequest, ParseTafResponse, StatusResponse, TafMetadataResponse,
};
use crate::constants::MAX_PAGE_SIZE;
use crate::domain::tonie::{TonieCreateRequest, TonieModel};
use crate::error::{Error, Result};

/// REST client for a single backend endpoint configuration
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Build a client from connection settings, including the auth header
    /// when a token is configured
    pub fn new(config: BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("tch-gui/", env!("CARGO_PKG_VERSION")));

        if let Some(token) = config.token()? {
            let mut headers = reqwest::header::HeaderMap::new();
            let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::Invalid {
                    message: format!("Invalid token header: {e}"),
                })?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        // FastAPI-style error body: {"detail": "..."}
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("detail")
                .and_then(|d| d.as_str())
                .unwrap_or("request failed")
                .to_string(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self
            .http
            .get(self.config.api_url(path))
            .query(query)
            .send()
            .await?;
        Self::handle(response).await
    }

    async fn post<B: serde::Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .http
            .post(self.config.api_url(path))
            .json(body)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// Probe backend health and TeddyCloud reachability
    pub async fn status(&self) -> Result<StatusResponse> {
        self.get("/status", &[]).await
    }

    /// Load one page of the TAF library listing
    pub async fn taf_library(
        &self,
        page: usize,
        page_size: usize,
        filter: LinkFilter,
    ) -> Result<TafLibraryResponse> {
        self.get(
            "/library/taf-files",
            &[
                ("page", page.to_string()),
                ("page_size", page_size.min(MAX_PAGE_SIZE).to_string()),
                ("filter_status", filter.as_query_value().to_string()),
            ],
        )
        .await
    }

    /// Parse only the TAF header of a library file
    pub async fn parse_taf(&self, path: &str) -> Result<ParseTafResponse> {
        self.post(
            "/library/parse-taf",
            &ParseTafRequest {
                path: path.to_string(),
            },
        )
        .await
    }

    /// Full metadata for a file: header, filename-derived fields and
    /// suggested covers
    pub async fn taf_metadata(&self, path: &str) -> Result<TafMetadataResponse> {
        self.post(
            "/taf-metadata/parse",
            &ParseTafRequest {
                path: path.to_string(),
            },
        )
        .await
    }

    /// Search cover images for a free-text term
    pub async fn search_covers(&self, search_term: &str, limit: usize) -> Result<CoverSearchResponse> {
        self.post(
            "/taf-metadata/search-covers",
            &CoverSearchRequest {
                search_term: search_term.to_string(),
                limit,
            },
        )
        .await
    }

    /// Download a cover into the backend image store
    pub async fn download_cover(&self, image_url: &str, filename: &str) -> Result<CoverDownloadResponse> {
        self.post(
            "/taf-metadata/download-cover",
            &CoverDownloadRequest {
                image_url: image_url.to_string(),
                filename: filename.to_string(),
            },
        )
        .await
    }

    /// Create a custom tonie entry
    pub async fn create_tonie(&self, request: &TonieCreateRequest) -> Result<TonieModel> {
        self.post("/tonies", request).await
    }

    /// Match a set of TAF files against the tonies catalog
    pub async fn batch_analyze(&self, taf_paths: Vec<String>) -> Result<BatchAnalyzeResponse> {
        self.post("/batch/analyze", &BatchAnalyzeRequest { taf_paths })
            .await
    }

    /// Search external metadata for unmatched files
    pub async fn search_metadata(&self, items: Vec<MetadataSearchItem>) -> Result<MetadataSearchResponse> {
        self.post("/batch/search-metadata", &MetadataSearchRequest { items })
            .await
    }

    /// Process confirmed selections into custom tonies
    pub async fn batch_process(&self, selections: Vec<BatchSelection>) -> Result<BatchProcessResponse> {
        self.post("/batch/process", &BatchProcessRequest { selections })
            .await
    }

    /// Classify connection errors separately from API rejections
    pub fn is_connection_error(error: &Error) -> bool {
        match error {
            Error::Http { source } => source.is_connect() || source.is_timeout(),
            Error::Api { status, .. } => *status == StatusCode::BAD_GATEWAY.as_u16(),
            _ => false,
        }
    }
}
