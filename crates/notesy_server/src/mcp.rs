use crate::SharedService;
use log::{error, info};
use notesy_core::{format_tool_reply, unwrap_tool_text, ServiceError, TOOL_GUIDANCE};
use rmcp::{
    handler::server::tool::{Parameters, ToolRouter},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    schemars, tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use std::future::Future;

/// Arguments of the `process_note_request` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProcessNoteRequest {
    #[schemars(
        description = "Natural language request, e.g. \"Create a note titled 'shopping list' with items: milk, eggs\""
    )]
    pub text: String,
}

#[derive(Clone)]
pub struct NotesToolServer {
    service: SharedService,
    tool_router: ToolRouter<NotesToolServer>,
}

impl NotesToolServer {
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Reply text for one tool call; `Err` carries an `Error: ...` message.
    pub async fn reply_for(&self, raw: &str) -> Result<String, String> {
        if raw.is_empty() {
            return Err("Error: text must contain at least 1 character".to_string());
        }
        let text = unwrap_tool_text(raw);

        let service = self.service.clone();
        match tokio::task::spawn_blocking(move || service.process(&text)).await {
            Ok(Ok(outcome)) => Ok(format_tool_reply(&outcome.command, &outcome.output)),
            Ok(Err(ServiceError::Unrecognized)) => Ok(TOOL_GUIDANCE.to_string()),
            Ok(Err(err)) => Err(format!("Error: {err}")),
            Err(err) => Err(format!("Error: {err}")),
        }
    }
}

#[tool_router]
impl NotesToolServer {
    #[tool(
        description = "Create, update, delete or search Apple Notes from a natural language request."
    )]
    async fn process_note_request(
        &self,
        Parameters(ProcessNoteRequest { text }): Parameters<ProcessNoteRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.reply_for(&text).await {
            Ok(reply) => Ok(CallToolResult::success(vec![Content::text(reply)])),
            Err(message) => Ok(CallToolResult::error(vec![Content::text(message)])),
        }
    }
}

#[tool_handler]
impl ServerHandler for NotesToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "notesy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Manage Apple Notes with plain sentences through the 'process_note_request' tool, \
                 e.g. \"Add milk to my 'groceries' note\" or \"Find notes about 'recipes'\"."
                    .to_string(),
            ),
        }
    }
}

/// Serves the tool over stdin/stdout until the client disconnects.
pub async fn serve_stdio(service: SharedService) -> anyhow::Result<()> {
    let running = NotesToolServer::new(service)
        .serve(stdio())
        .await
        .inspect_err(|err| error!("event=mcp_serve module=mcp status=error error={err:?}"))?;
    info!("event=mcp_serve module=mcp status=ok transport=stdio");

    let reason = running.waiting().await?;
    info!("event=mcp_serve module=mcp status=stopped reason={reason:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::NotesToolServer;
    use crate::shared_service;
    use notesy_core::{ExecutionError, ExecutionResult, ScriptRunner, TOOL_GUIDANCE};

    struct StdoutRunner(&'static str);

    impl ScriptRunner for StdoutRunner {
        fn run_script(&self, _script: &str) -> ExecutionResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct BrokenRunner;

    impl ScriptRunner for BrokenRunner {
        fn run_script(&self, _script: &str) -> ExecutionResult<String> {
            Err(ExecutionError::Failed {
                status: Some(1),
                stderr: "Notes is not running".to_string(),
            })
        }
    }

    fn server(runner: impl ScriptRunner + 'static) -> NotesToolServer {
        NotesToolServer::new(shared_service(Box::new(runner)))
    }

    #[test]
    fn registers_single_note_request_tool() {
        let names = server(StdoutRunner(""))
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["process_note_request"]);
    }

    #[tokio::test]
    async fn wrapped_payload_is_decoded_before_parsing() {
        let reply = server(StdoutRunner(""))
            .reply_for(r#"{"text": "Delete my 'old tasks' note"}"#)
            .await
            .expect("tool reply");
        assert_eq!(reply, "Successfully deleted note 'old tasks'");
    }

    #[tokio::test]
    async fn search_reply_lists_hits() {
        let reply = server(StdoutRunner("Recipes, Soup Recipes\n"))
            .reply_for("Find notes about 'recipes'")
            .await
            .expect("tool reply");
        assert_eq!(
            reply,
            "Found 2 note(s) matching 'recipes':\n- Recipes\n- Soup Recipes"
        );
    }

    #[tokio::test]
    async fn unparseable_text_returns_guidance() {
        let reply = server(StdoutRunner(""))
            .reply_for("What's the weather like today?")
            .await
            .expect("tool reply");
        assert_eq!(reply, TOOL_GUIDANCE);
    }

    #[tokio::test]
    async fn failures_are_prefixed() {
        let err = server(BrokenRunner)
            .reply_for("Delete my 'old tasks' note")
            .await
            .expect_err("tool call should fail");
        assert_eq!(err, "Error: AppleScript execution error: Notes is not running");

        let empty = server(StdoutRunner(""))
            .reply_for("")
            .await
            .expect_err("tool call should fail");
        assert!(empty.starts_with("Error: "));
    }
}
