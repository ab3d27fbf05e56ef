use serde_json::Value;

use crate::client::types::MapRequest;
use crate::client::FirecrawlApi;
use crate::error::Error;
use crate::tools::definition::ToolDefinition;
use crate::tools::schema::{as_bool, as_str, as_u64, ParamKind, ParamSpec, ToolSchema};

pub const NAME: &str = "firecrawl_map";

pub fn schema() -> ToolSchema {
    ToolSchema::new(vec![
        ParamSpec::required("url", ParamKind::Url, "Root URL of the site to map."),
        ParamSpec::optional(
            "search",
            ParamKind::String,
            "Only return URLs matching this subpath filter.",
        ),
        ParamSpec::optional(
            "include_subdomains",
            ParamKind::Boolean,
            "Also list URLs on subdomains.",
        ),
        ParamSpec::optional("limit", ParamKind::Integer, "Maximum number of URLs.").with_minimum(1),
    ])
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Discover the URLs of a website without fetching their content.".to_string(),
        parameters: schema().to_parameters(),
    }
}

pub async fn run(api: &dyn FirecrawlApi, args: &Value) -> Result<Value, Error> {
    let links = api
        .map_site(MapRequest {
            url: as_str(args, "url").unwrap_or_default(),
            search: as_str(args, "search"),
            include_subdomains: as_bool(args, "include_subdomains"),
            limit: as_u64(args, "limit"),
        })
        .await?;
    Ok(serde_json::to_value(links)?)
}
