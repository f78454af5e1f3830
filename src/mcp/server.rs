/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests from stdin, one per line
/// 2. Routes tool calls to the habit tools
/// 3. Sends JSON-RPC responses to stdout
///
/// Requests are handled one at a time, so a tool's load-modify-save cycle
/// never interleaves with another request.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::mcp::protocol::*;
use crate::tools::{self, ToolError};
use crate::{HabitTrackerServer, ServerError};

/// MCP server that handles communication with the client
pub struct McpServer {
    /// The underlying habit tracker server
    habit_tracker: HabitTrackerServer,
    /// Whether the client has confirmed initialization
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(habit_tracker: HabitTrackerServer) -> Self {
        Self {
            habit_tracker,
            initialized: false,
        }
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line).await {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    pub(crate) async fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        self.handle_request(request).await
    }

    /// Handle a JSON-RPC request; notifications get no response
    async fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            self.handle_notification(&request.method);
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "initialized" | "notifications/initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(id, Value::Null)
            }
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params),
            _ => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        };

        Some(response)
    }

    fn handle_notification(&mut self, method: &str) {
        match method {
            "initialized" | "notifications/initialized" => {
                self.initialized = true;
                info!("MCP client finished initialization");
            }
            other => debug!("Ignoring notification: {}", other),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, id: Value) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Habit Tracker MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string(), None),
        }
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let tools = vec![
            tool::<tools::ListHabitsParams>(
                "habit_list",
                "List all habits with their completion dates",
            ),
            tool::<tools::CreateHabitParams>(
                "habit_create",
                "Create a new habit to track",
            ),
            tool::<tools::UpdateHabitParams>(
                "habit_update",
                "Replace a habit's title, description and weekly frequency",
            ),
            tool::<tools::DeleteHabitParams>(
                "habit_delete",
                "Delete a habit and its completion history",
            ),
            tool::<tools::MarkDoneParams>(
                "habit_mark_done",
                "Mark a habit as done for today or a specific date; marking twice has no effect",
            ),
            tool::<tools::ToggleParams>(
                "habit_toggle",
                "Flip whether a habit is done on a specific date",
            ),
            tool::<tools::StatsParams>(
                "habit_stats",
                "Get total completions, success rate, current streak and longest streak for a habit",
            ),
        ];

        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    /// Handle tools/call request
    fn handle_tools_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match params.map(serde_json::from_value) {
            Some(Ok(p)) => p,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid parameters: {}", e),
                    None,
                );
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        debug!("Calling tool {}", tool_params.name);

        let outcome = self
            .call_tool(&tool_params.name, tool_params.arguments, Utc::now())
            .and_then(|record| {
                let text = serde_json::to_string_pretty(&record).map_err(internal_error)?;
                serde_json::to_value(ToolCallResult::success(text)).map_err(internal_error)
            });

        match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => JsonRpcResponse::failure(id, e),
        }
    }

    /// Route a tool call; `now` is the only clock reading for the request
    fn call_tool(
        &self,
        name: &str,
        args: Map<String, Value>,
        now: DateTime<Utc>,
    ) -> Result<Value, JsonRpcError> {
        let storage = self.habit_tracker.storage();
        let today = now.date_naive();

        match name {
            "habit_list" => respond(tools::list_habits(storage, parse_args(args)?)),
            "habit_create" => respond(tools::create_habit(storage, parse_args(args)?, now)),
            "habit_update" => respond(tools::update_habit(storage, parse_args(args)?)),
            "habit_delete" => respond(tools::delete_habit(storage, parse_args(args)?)),
            "habit_mark_done" => respond(tools::mark_habit_done(storage, parse_args(args)?, today)),
            "habit_toggle" => respond(tools::toggle_habit_done(storage, parse_args(args)?)),
            "habit_stats" => respond(tools::habit_stats(
                storage,
                self.habit_tracker.stats_engine(),
                parse_args(args)?,
                today,
            )),
            _ => Err(JsonRpcError::new(
                error_codes::INVALID_PARAMS,
                format!("Unknown tool: {}", name),
            )),
        }
    }
}

fn tool<P: JsonSchema>(name: &str, description: &str) -> ToolDefinition {
    let input_schema = serde_json::to_value(schemars::schema_for!(P))
        .unwrap_or_else(|_| json!({ "type": "object" }));

    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

fn parse_args<P: DeserializeOwned>(args: Map<String, Value>) -> Result<P, JsonRpcError> {
    serde_json::from_value(Value::Object(args)).map_err(|e| {
        JsonRpcError::new(error_codes::INVALID_PARAMS, format!("Invalid arguments: {}", e))
    })
}

fn respond<R: Serialize>(outcome: Result<R, ToolError>) -> Result<Value, JsonRpcError> {
    let record = outcome.map_err(|e| {
        warn!("Tool call failed: {}", e);
        tool_error_to_json_rpc(&e)
    })?;
    serde_json::to_value(record).map_err(internal_error)
}

fn internal_error(e: serde_json::Error) -> JsonRpcError {
    JsonRpcError::new(error_codes::INTERNAL_ERROR, format!("Failed to encode result: {}", e))
}
