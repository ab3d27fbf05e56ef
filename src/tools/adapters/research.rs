use serde_json::Value;

use crate::client::types::ResearchRequest;
use crate::client::FirecrawlApi;
use crate::error::Error;
use crate::tools::definition::ToolDefinition;
use crate::tools::schema::{as_str, as_u64, ParamKind, ParamSpec, ToolSchema};

pub const NAME: &str = "firecrawl_research";

pub fn schema() -> ToolSchema {
    ToolSchema::new(vec![
        ParamSpec::required("query", ParamKind::String, "Topic to research."),
        ParamSpec::optional(
            "max_depth",
            ParamKind::Integer,
            "How many rounds of follow-up exploration to run.",
        )
        .with_minimum(1),
        ParamSpec::optional("time_limit", ParamKind::Integer, "Remote time budget in seconds.")
            .with_minimum(1),
        ParamSpec::optional("max_urls", ParamKind::Integer, "Maximum number of pages to read.")
            .with_minimum(1),
    ])
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Run long-form web research on a topic and return an analysis with sources."
            .to_string(),
        parameters: schema().to_parameters(),
    }
}

pub async fn run(api: &dyn FirecrawlApi, args: &Value) -> Result<Value, Error> {
    let data = api
        .deep_research(ResearchRequest {
            query: as_str(args, "query").unwrap_or_default(),
            max_depth: as_u64(args, "max_depth"),
            time_limit: as_u64(args, "time_limit"),
            max_urls: as_u64(args, "max_urls"),
        })
        .await?;
    Ok(serde_json::to_value(data)?)
}
