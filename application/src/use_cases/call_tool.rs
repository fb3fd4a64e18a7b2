//! Call Tool use case.
//!
//! The single dispatcher shared by every transport. A call goes through:
//! 1. name resolution (aliases allowed)
//! 2. credential check
//! 3. argument validation and request building
//! 4. one request to the Senpex API
//! 5. rendering
//!
//! Any failure along the way becomes a [`RenderedResult`] with
//! `is_error = true`; [`ToolDispatcher::call`] never returns `Err`.

use crate::ports::senpex_api::SenpexApiPort;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::use_cases::tool_helpers::tool_args_preview;
use async_trait::async_trait;
use senpex_domain::core::string::truncate;
use senpex_domain::senpex::{prepare, render};
use senpex_domain::tool::{RenderedResult, ToolCall, ToolDefinition, ToolSpec};
use senpex_domain::{ToolError, senpex_tool_spec};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dispatches tool calls to the Senpex API.
///
/// Holds only immutable data and the API port, so one instance can serve
/// any number of concurrent calls behind an `Arc`.
pub struct ToolDispatcher {
    spec: ToolSpec,
    api: Arc<dyn SenpexApiPort>,
}

impl ToolDispatcher {
    /// Dispatcher over the full Senpex catalogue
    pub fn new(api: Arc<dyn SenpexApiPort>) -> Self {
        Self::with_spec(senpex_tool_spec(), api)
    }

    pub fn with_spec(spec: ToolSpec, api: Arc<dyn SenpexApiPort>) -> Self {
        Self { spec, api }
    }

    /// Execute `tool_name` with a raw arguments value (`null` means none).
    pub async fn call(&self, tool_name: &str, arguments: Value) -> RenderedResult {
        let definition = match self.admit(tool_name) {
            Ok(definition) => definition,
            Err(e) => return self.fail(tool_name, e),
        };
        match ToolCall::from_value(definition.name.as_str(), arguments) {
            Ok(call) => self.dispatch(definition, &call).await,
            Err(reason) => self.fail(&definition.name, ToolError::invalid("arguments", reason)),
        }
    }

    /// Resolve the tool and check credentials, before looking at arguments.
    fn admit(&self, tool_name: &str) -> Result<&ToolDefinition, ToolError> {
        let definition = self
            .spec
            .get_resolved(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;
        if !self.api.is_configured() {
            return Err(ToolError::Configuration);
        }
        Ok(definition)
    }

    async fn dispatch(&self, definition: &ToolDefinition, call: &ToolCall) -> RenderedResult {
        let name = definition.name.as_str();

        let (args, request) = match prepare(definition, call) {
            Ok(prepared) => prepared,
            Err(e) => return self.fail(name, e),
        };

        info!(
            "Calling {} ({} {}) {}",
            name,
            request.method,
            request.path(),
            tool_args_preview(call)
        );

        let response = match self.api.send(&request).await {
            Ok(response) => response,
            Err(e) => return self.fail(name, e.into()),
        };
        debug!(
            "{} responded {}: {}",
            name,
            response.status,
            truncate(&response.body, 200)
        );

        match render(definition, &args, &response) {
            Ok(text) => RenderedResult::success(name, text),
            Err(e) => self.fail(name, e),
        }
    }

    fn fail(&self, tool_name: &str, error: ToolError) -> RenderedResult {
        warn!(
            "Tool {} failed [{}]: {}",
            tool_name,
            error.code(),
            truncate(&error.to_string(), 300)
        );
        RenderedResult::failure(tool_name, &error)
    }
}

#[async_trait]
impl ToolExecutorPort for ToolDispatcher {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> RenderedResult {
        match self.admit(&call.tool_name) {
            Ok(definition) => self.dispatch(definition, call).await,
            Err(e) => self.fail(&call.tool_name, e),
        }
    }

    async fn call(&self, tool_name: &str, arguments: Value) -> RenderedResult {
        ToolDispatcher::call(self, tool_name, arguments).await
    }
}
