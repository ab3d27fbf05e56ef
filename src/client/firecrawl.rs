use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::types::{
    CrawlRequest, CrawlSnapshot, ExtractRequest, MapRequest, ResearchData, ResearchRequest,
    ScrapeData, ScrapeRequest, SearchHit, SearchRequest,
};
use crate::client::FirecrawlApi;
use crate::config::FirecrawlConfig;
use crate::error::Error;
use crate::jobs::{JobHandle, JobStatus};

#[derive(Clone)]
pub struct FirecrawlClient {
    client: reqwest::Client,
    base_url: String,
}

impl FirecrawlClient {
    pub fn new(config: &FirecrawlConfig) -> Result<Self, Error> {
        config.validate()?;

        let base_url = normalize_base_url(config.base_url.clone());

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|e| Error::Config(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "firecrawl request");
        let resp = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;
        decode(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        debug!(path, "firecrawl request");
        let resp = self
            .client
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_else(|_| "".to_string());
        warn!(%status, "firecrawl error response");
        return Err(Error::Remote(format!("Firecrawl error: {status} {text}")));
    }
    resp.json().await.map_err(|e| Error::Remote(e.to_string()))
}

pub fn normalize_base_url(base_url: Option<String>) -> String {
    let default_url = "https://api.firecrawl.dev".to_string();
    let Some(mut base) = base_url else {
        return default_url;
    };
    base = base.trim().to_string();
    if base.is_empty() {
        return default_url;
    }

    // Users sometimes paste the versioned endpoint root; paths here carry /v1.
    let trimmed = base.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix("/v1").unwrap_or(trimmed);
    trimmed.to_string()
}

fn require<T>(
    success: Option<bool>,
    error: Option<String>,
    data: Option<T>,
    what: &str,
) -> Result<T, Error> {
    if success == Some(false) || error.is_some() {
        let message =
            error.unwrap_or_else(|| format!("Firecrawl reported failure for {what}"));
        return Err(Error::Remote(message));
    }
    data.ok_or_else(|| Error::Remote(format!("Firecrawl response missing {what}")))
}

#[async_trait]
impl FirecrawlApi for FirecrawlClient {
    async fn scrape(&self, request: ScrapeRequest) -> Result<ScrapeData, Error> {
        let parsed: ScrapeEnvelope = self.post_json("/v1/scrape", &request).await?;
        require(parsed.success, parsed.error, parsed.data, "scrape data")
    }

    async fn search(&self, request: SearchRequest) -> Result<Vec<SearchHit>, Error> {
        let parsed: SearchEnvelope = self.post_json("/v1/search", &request).await?;
        require(parsed.success, parsed.error, parsed.data, "search results")
    }

    async fn map_site(&self, request: MapRequest) -> Result<Vec<String>, Error> {
        let parsed: MapEnvelope = self.post_json("/v1/map", &request).await?;
        require(parsed.success, parsed.error, parsed.links, "link list")
    }

    async fn extract(&self, request: ExtractRequest) -> Result<Value, Error> {
        let parsed: ExtractEnvelope = self.post_json("/v1/extract", &request).await?;
        require(parsed.success, parsed.error, parsed.data, "extracted data")
    }

    async fn deep_research(&self, request: ResearchRequest) -> Result<ResearchData, Error> {
        let parsed: ResearchEnvelope = self.post_json("/v1/deep-research", &request).await?;
        require(parsed.success, parsed.error, parsed.data, "research data")
    }

    async fn start_crawl(&self, request: CrawlRequest) -> Result<JobHandle, Error> {
        let parsed: CrawlSubmitEnvelope = self.post_json("/v1/crawl", &request).await?;
        let id = require(parsed.success, parsed.error, parsed.id, "crawl job id")?;
        info!(job_id = %id, "crawl job submitted");
        Ok(JobHandle::new(id))
    }

    async fn crawl_status(&self, job_id: &str) -> Result<CrawlSnapshot, Error> {
        let parsed: CrawlStatusEnvelope = self.get_json(&format!("/v1/crawl/{job_id}")).await?;
        if let Some(message) = parsed.error {
            return Err(Error::Remote(message));
        }
        Ok(CrawlSnapshot {
            status: JobStatus::from_remote(&parsed.status),
            total: parsed.total,
            completed: parsed.completed,
            credits_used: parsed.credits_used,
            expires_at: parsed.expires_at,
            data: parsed.data.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ScrapeEnvelope {
    success: Option<bool>,
    data: Option<ScrapeData>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    success: Option<bool>,
    data: Option<Vec<SearchHit>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MapEnvelope {
    success: Option<bool>,
    links: Option<Vec<String>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExtractEnvelope {
    success: Option<bool>,
    data: Option<Value>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResearchEnvelope {
    success: Option<bool>,
    data: Option<ResearchData>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CrawlSubmitEnvelope {
    success: Option<bool>,
    id: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CrawlStatusEnvelope {
    #[serde(default)]
    status: String,
    total: Option<u64>,
    completed: Option<u64>,
    credits_used: Option<u64>,
    expires_at: Option<String>,
    data: Option<Vec<Value>>,
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn base_url_defaults_when_unset_or_blank() {
        assert_eq!(normalize_base_url(None), "https://api.firecrawl.dev");
        assert_eq!(
            normalize_base_url(Some("   ".to_string())),
            "https://api.firecrawl.dev"
        );
    }

    #[test]
    fn base_url_strips_trailing_slash_and_version() {
        assert_eq!(
            normalize_base_url(Some("https://api.firecrawl.dev/".to_string())),
            "https://api.firecrawl.dev"
        );
        assert_eq!(
            normalize_base_url(Some("https://proxy.internal/firecrawl/v1".to_string())),
            "https://proxy.internal/firecrawl"
        );
    }
}
