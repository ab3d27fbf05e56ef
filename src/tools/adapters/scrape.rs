use serde_json::{json, Value};

use crate::client::types::ScrapeRequest;
use crate::client::FirecrawlApi;
use crate::error::Error;
use crate::tools::definition::ToolDefinition;
use crate::tools::schema::{as_bool, as_str, as_str_list, as_u64, ParamKind, ParamSpec, ToolSchema};

pub const NAME: &str = "firecrawl_scrape";

pub fn schema() -> ToolSchema {
    ToolSchema::new(vec![
        ParamSpec::required("url", ParamKind::Url, "Page URL to scrape."),
        ParamSpec::optional(
            "formats",
            ParamKind::StringList,
            "Output formats: markdown, html, links.",
        )
        .with_default(json!(["markdown"])),
        ParamSpec::optional(
            "only_main_content",
            ParamKind::Boolean,
            "Strip navigation, footers and other boilerplate.",
        )
        .with_default(json!(true)),
        ParamSpec::optional(
            "wait_for",
            ParamKind::Integer,
            "Milliseconds to wait before capture, for JS-heavy pages.",
        ),
    ])
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Scrape a single URL and return its content.".to_string(),
        parameters: schema().to_parameters(),
    }
}

pub async fn run(api: &dyn FirecrawlApi, args: &Value) -> Result<Value, Error> {
    let request = ScrapeRequest {
        url: as_str(args, "url").unwrap_or_default(),
        formats: as_str_list(args, "formats").unwrap_or_default(),
        only_main_content: as_bool(args, "only_main_content"),
        wait_for: as_u64(args, "wait_for"),
    };
    let data = api.scrape(request).await?;
    Ok(serde_json::to_value(data)?)
}
