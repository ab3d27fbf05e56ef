use serde_json::{json, Value};

use crate::client::types::{ScrapeOptions, SearchRequest};
use crate::client::FirecrawlApi;
use crate::error::Error;
use crate::tools::definition::ToolDefinition;
use crate::tools::schema::{as_bool, as_str, as_str_list, as_u64, ParamKind, ParamSpec, ToolSchema};

pub const NAME: &str = "firecrawl_search";

pub fn schema() -> ToolSchema {
    ToolSchema::new(vec![
        ParamSpec::required("query", ParamKind::String, "Search query."),
        ParamSpec::optional("limit", ParamKind::Integer, "Maximum number of results.")
            .with_default(json!(5))
            .with_minimum(1),
        ParamSpec::optional(
            "formats",
            ParamKind::StringList,
            "Formats to scrape each hit in (e.g. markdown).",
        ),
        ParamSpec::optional(
            "only_main_content",
            ParamKind::Boolean,
            "Strip boilerplate from scraped hits.",
        ),
    ])
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Search the web and return matching pages.".to_string(),
        parameters: schema().to_parameters(),
    }
}

pub async fn run(api: &dyn FirecrawlApi, args: &Value) -> Result<Value, Error> {
    let query = as_str(args, "query").unwrap_or_default();
    let formats = as_str_list(args, "formats").unwrap_or_default();
    let only_main_content = as_bool(args, "only_main_content");
    let scrape_options = if formats.is_empty() && only_main_content.is_none() {
        None
    } else {
        Some(ScrapeOptions {
            formats,
            only_main_content,
        })
    };

    let hits = api
        .search(SearchRequest {
            query: query.clone(),
            limit: as_u64(args, "limit"),
            scrape_options,
        })
        .await?;
    Ok(json!({ "query": query, "results": hits }))
}
