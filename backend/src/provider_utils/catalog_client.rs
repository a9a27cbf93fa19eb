//! HTTP client for the catalog provider.

use anyhow::Context;

pub const CATALOG_URL_ENV: &str = "JOBMATCH_API_URL";
pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

pub fn get_catalog_client() -> CatalogClient {
    CatalogClient::new(std::env::var(CATALOG_URL_ENV).unwrap_or(DEFAULT_CATALOG_URL.to_string()))
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: reqwest::Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// GETs `<base>/<endpoint>` and returns the raw records of the top-level JSON array.
    pub async fn fetch_array(&self, endpoint: &str) -> anyhow::Result<Vec<serde_json::Value>> {
        let url = self.endpoint_url(endpoint);
        tracing::info!("Fetching catalog: {}", url);
        let response = self.http.get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;
        let response = response.error_for_status()
            .with_context(|| format!("GET {url} returned an error status"))?;
        let body = response.text().await
            .with_context(|| format!("GET {url}: failed to read body"))?;
        let records = serde_json::from_str::<Vec<serde_json::Value>>(&body)
            .with_context(|| format!("GET {url}: body is not a JSON array"))?;
        tracing::info!("Catalog {} returned {} records", endpoint, records.len());
        Ok(records)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_single_slash() {
        let client = CatalogClient::new("http://example.test/api/");
        assert_eq!(client.base_url(), "http://example.test/api");
        assert_eq!(client.endpoint_url("skills"), "http://example.test/api/skills");
        assert_eq!(client.endpoint_url("/jobs"), "http://example.test/api/jobs");
    }
}
