use serde_json::{json, Value};

use crate::client::types::CrawlRequest;
use crate::client::FirecrawlApi;
use crate::error::Error;
use crate::jobs::{self, JobStatus, PollSettings};
use crate::tools::definition::ToolDefinition;
use crate::tools::schema::{as_bool, as_str, as_str_list, as_u64, ParamKind, ParamSpec, ToolSchema};

pub const NAME: &str = "firecrawl_crawl";

pub fn schema() -> ToolSchema {
    ToolSchema::new(vec![
        ParamSpec::required("url", ParamKind::Url, "Root URL to crawl."),
        ParamSpec::optional("max_depth", ParamKind::Integer, "Maximum link depth from the root.")
            .with_minimum(1),
        ParamSpec::optional("limit", ParamKind::Integer, "Maximum number of pages.")
            .with_minimum(1),
        ParamSpec::optional(
            "include_paths",
            ParamKind::StringList,
            "Only crawl URLs matching these path patterns.",
        ),
        ParamSpec::optional(
            "exclude_paths",
            ParamKind::StringList,
            "Skip URLs matching these path patterns.",
        ),
        ParamSpec::optional(
            "allow_external_links",
            ParamKind::Boolean,
            "Follow links leaving the root domain.",
        ),
        ParamSpec::optional(
            "deduplicate_similar_urls",
            ParamKind::Boolean,
            "Collapse near-duplicate URLs.",
        ),
    ])
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Crawl a website and return the scraped pages. Blocks until the remote job finishes or the local wait deadline passes.".to_string(),
        parameters: schema().to_parameters(),
    }
}

pub async fn run(
    api: &dyn FirecrawlApi,
    poll: &PollSettings,
    args: &Value,
) -> Result<Value, Error> {
    let handle = api
        .start_crawl(CrawlRequest {
            url: as_str(args, "url").unwrap_or_default(),
            max_depth: as_u64(args, "max_depth"),
            limit: as_u64(args, "limit"),
            include_paths: as_str_list(args, "include_paths").unwrap_or_default(),
            exclude_paths: as_str_list(args, "exclude_paths").unwrap_or_default(),
            allow_external_links: as_bool(args, "allow_external_links"),
            deduplicate_similar_urls: as_bool(args, "deduplicate_similar_urls"),
        })
        .await?;

    let outcome = jobs::wait_until_terminal(api, &handle, poll).await?;
    match outcome.status {
        JobStatus::Completed => {
            let snapshot = outcome.snapshot;
            Ok(json!({
                "job_id": handle.id,
                "status": JobStatus::Completed,
                "total": snapshot.total,
                "completed": snapshot.completed,
                "credits_used": snapshot.credits_used,
                "pages": snapshot.data
            }))
        }
        JobStatus::Failed => Err(Error::Remote(format!(
            "crawl job {} reported failure",
            handle.id
        ))),
        _ => Err(Error::Timeout(format!(
            "crawl job {} did not finish within {}s; it may still be running remotely \
             (check it with firecrawl_crawl_status)",
            handle.id,
            poll.max_wait.as_secs()
        ))),
    }
}
