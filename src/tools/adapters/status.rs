use serde_json::{json, Value};

use crate::client::FirecrawlApi;
use crate::error::Error;
use crate::tools::definition::ToolDefinition;
use crate::tools::schema::{as_str, ParamKind, ParamSpec, ToolSchema};

pub const NAME: &str = "firecrawl_crawl_status";

pub fn schema() -> ToolSchema {
    ToolSchema::new(vec![ParamSpec::required(
        "job_id",
        ParamKind::String,
        "Identifier of a previously submitted crawl job.",
    )])
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Check a crawl job's progress once, without waiting for it to finish."
            .to_string(),
        parameters: schema().to_parameters(),
    }
}

pub async fn run(api: &dyn FirecrawlApi, args: &Value) -> Result<Value, Error> {
    let job_id = as_str(args, "job_id").unwrap_or_default();
    let snapshot = api.crawl_status(&job_id).await?;
    Ok(json!({
        "job_id": job_id,
        "status": snapshot.status,
        "total": snapshot.total,
        "completed": snapshot.completed,
        "credits_used": snapshot.credits_used,
        "expires_at": snapshot.expires_at,
        "pages": snapshot.data
    }))
}
