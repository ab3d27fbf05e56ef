use serde_json::Value;

use crate::client::types::ExtractRequest;
use crate::client::FirecrawlApi;
use crate::error::Error;
use crate::tools::definition::ToolDefinition;
use crate::tools::schema::{as_bool, as_str, as_str_list, ParamKind, ParamSpec, ToolSchema};

pub const NAME: &str = "firecrawl_extract";

pub fn schema() -> ToolSchema {
    ToolSchema::new(vec![
        ParamSpec::required("urls", ParamKind::UrlList, "Pages to extract from.").with_minimum(1),
        ParamSpec::optional(
            "prompt",
            ParamKind::String,
            "Natural-language description of the fields to extract.",
        ),
        ParamSpec::optional(
            "schema",
            ParamKind::Object,
            "JSON schema describing the target shape.",
        ),
        ParamSpec::optional(
            "allow_external_links",
            ParamKind::Boolean,
            "Follow links leaving the given domains.",
        ),
    ])
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Extract structured data from one or more pages, guided by a prompt or schema."
            .to_string(),
        parameters: schema().to_parameters(),
    }
}

pub async fn run(api: &dyn FirecrawlApi, args: &Value) -> Result<Value, Error> {
    let prompt = as_str(args, "prompt");
    let target_schema = args.get("schema").cloned();
    // The remote rejects requests that describe no target shape at all; catch
    // that locally before spending a network call.
    if prompt.is_none() && target_schema.is_none() {
        return Err(Error::InvalidParams(
            "provide 'prompt' and/or 'schema'".to_string(),
        ));
    }

    let data = api
        .extract(ExtractRequest {
            urls: as_str_list(args, "urls").unwrap_or_default(),
            prompt,
            schema: target_schema,
            allow_external_links: as_bool(args, "allow_external_links"),
        })
        .await?;
    Ok(data)
}
