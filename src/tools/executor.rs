use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::debug;

use crate::client::firecrawl::FirecrawlClient;
use crate::client::FirecrawlApi;
use crate::config::FirecrawlConfig;
use crate::error::Error;
use crate::jobs::PollSettings;
use crate::tools::adapters;
use crate::tools::definition::{ToolCall, ToolDefinition, ToolResult};

/// Registry and dispatcher for the Firecrawl tool set. Immutable after
/// construction; every failure below it is reported through the returned
/// `ToolResult`, never as a panic or raw error.
pub struct ToolExecutor {
    api: Arc<dyn FirecrawlApi>,
    poll: PollSettings,
}

impl ToolExecutor {
    pub fn new(config: &FirecrawlConfig) -> Result<Self, Error> {
        let api = FirecrawlClient::new(config)?;
        Ok(Self {
            api: Arc::new(api),
            poll: config.poll_settings(),
        })
    }

    /// Builds an executor over any `FirecrawlApi` implementation.
    pub fn with_api(api: Arc<dyn FirecrawlApi>, poll: PollSettings) -> Self {
        Self { api, poll }
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        adapters::definitions()
    }

    /// Convenience dispatch that fabricates the call id.
    pub async fn invoke(&self, name: &str, arguments: Value) -> ToolResult {
        self.execute(ToolCall::new(name, arguments)).await
    }

    pub async fn execute(&self, call: ToolCall) -> ToolResult {
        let started = Instant::now();
        debug!(tool = %call.name, call_id = %call.id, "dispatching tool call");
        let output = self.dispatch(&call.name, &call.arguments).await;

        let duration_ms = started.elapsed().as_millis().min(u128::from(u64::MAX)) as u64;
        match output {
            Ok(v) => ToolResult {
                tool_call_id: call.id,
                name: call.name,
                ok: true,
                output: v,
                error: None,
                duration_ms: Some(duration_ms),
            },
            Err(e) => ToolResult {
                tool_call_id: call.id,
                name: call.name,
                ok: false,
                output: serde_json::json!({}),
                error: Some(e.to_string()),
                duration_ms: Some(duration_ms),
            },
        }
    }

    async fn dispatch(&self, name: &str, arguments: &Value) -> Result<Value, Error> {
        let schema =
            adapters::schema_for(name).ok_or_else(|| Error::UnknownTool(name.to_string()))?;
        let args = schema.validate(arguments)?;

        let api = self.api.as_ref();
        match name {
            adapters::scrape::NAME => adapters::scrape::run(api, &args).await,
            adapters::search::NAME => adapters::search::run(api, &args).await,
            adapters::map::NAME => adapters::map::run(api, &args).await,
            adapters::extract::NAME => adapters::extract::run(api, &args).await,
            adapters::research::NAME => adapters::research::run(api, &args).await,
            adapters::crawl::NAME => adapters::crawl::run(api, &self.poll, &args).await,
            adapters::status::NAME => adapters::status::run(api, &args).await,
            _ => Err(Error::UnknownTool(name.to_string())),
        }
    }
}
