//! HTTP client for the PokéAPI list and detail endpoints

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{
    errors::{ApiError, ApiResult},
    types::{PagedList, PokemonDetail},
};

/// The remote catalog as seen by the rest of the application.
///
/// The loader and TUI only depend on this trait, so tests can substitute
/// an in-memory catalog for the real API.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of the list endpoint.
    async fn list_page(&self, offset: u64, limit: u64) -> ApiResult<PagedList>;

    /// Fetch the detail record behind a list entry's URL.
    async fn fetch_detail(&self, url: &str) -> ApiResult<PokemonDetail>;
}

/// reqwest-backed client for the public PokéAPI.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Detail URL for an item addressed by name rather than by list entry.
    pub fn detail_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name.to_lowercase())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::StatusError {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogApi for PokeApiClient {
    async fn list_page(&self, offset: u64, limit: u64) -> ApiResult<PagedList> {
        let url = format!(
            "{}/pokemon?limit={}&offset={}",
            self.base_url, limit, offset
        );
        self.get_json(&url).await
    }

    async fn fetch_detail(&self, url: &str) -> ApiResult<PokemonDetail> {
        self.get_json(url).await
    }
}
