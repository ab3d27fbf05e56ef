pub mod firecrawl;
pub mod types;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;
use crate::jobs::JobHandle;
use crate::client::types::{
    CrawlRequest, CrawlSnapshot, ExtractRequest, MapRequest, ResearchData, ResearchRequest,
    ScrapeData, ScrapeRequest, SearchHit, SearchRequest,
};

/// The remote Firecrawl surface every adapter talks to.
///
/// All methods are single round-trips except `start_crawl`, which submits an
/// asynchronous job whose progress is observed through `crawl_status`.
#[async_trait]
pub trait FirecrawlApi: Send + Sync {
    async fn scrape(&self, request: ScrapeRequest) -> Result<ScrapeData, Error>;

    async fn search(&self, request: SearchRequest) -> Result<Vec<SearchHit>, Error>;

    async fn map_site(&self, request: MapRequest) -> Result<Vec<String>, Error>;

    async fn extract(&self, request: ExtractRequest) -> Result<Value, Error>;

    async fn deep_research(&self, request: ResearchRequest) -> Result<ResearchData, Error>;

    async fn start_crawl(&self, request: CrawlRequest) -> Result<JobHandle, Error>;

    async fn crawl_status(&self, job_id: &str) -> Result<CrawlSnapshot, Error>;
}
