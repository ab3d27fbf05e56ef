//! Async Firecrawl web tools for tool-calling agent frameworks.
//!
//! Each tool is a thin adapter over one hosted Firecrawl operation (scrape,
//! search, map, extract, research, crawl); [`ToolExecutor`] exposes the set as
//! name/description/schema triples and dispatches calls to them, containing
//! every remote failure in the returned [`ToolResult`].

pub mod client;
pub mod config;
pub mod error;
pub mod jobs;
pub mod tools;

pub use client::firecrawl::FirecrawlClient;
pub use client::FirecrawlApi;
pub use config::FirecrawlConfig;
pub use error::Error;
pub use jobs::{JobHandle, JobStatus, PollSettings};
pub use tools::definition::{ToolCall, ToolDefinition, ToolResult};
pub use tools::executor::ToolExecutor;
