// ABOUTME: JSON-RPC request handler mapping tools/list, tools/call, and events/ingest onto the engine
// ABOUTME: Converts parse failures, unknown methods, and AppErrors into JSON-RPC error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog_core::models::InboundEvent;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::constants::methods;
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use crate::tools::schema::ToolCall;
use crate::tools::ToolEngine;

/// `events/ingest` parameters: a single event, a batch, or both
#[derive(Debug, Deserialize)]
struct IngestParams {
    #[serde(default)]
    event: Option<InboundEvent>,
    #[serde(default)]
    events: Option<Vec<InboundEvent>>,
}

/// Handles one JSON-RPC message at a time, in arrival order
pub struct RequestHandler {
    engine: ToolEngine,
}

impl RequestHandler {
    /// Wrap an engine
    #[must_use]
    pub const fn new(engine: ToolEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine
    #[must_use]
    pub const fn engine(&self) -> &ToolEngine {
        &self.engine
    }

    /// Handle one raw line. Returns `None` for notifications and blank lines.
    pub fn handle_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        if line.trim().is_empty() {
            return None;
        }

        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    "Parse error",
                ));
            }
        };

        let id = message.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) if request.jsonrpc == JSONRPC_VERSION => self.handle_request(request),
            Ok(request) => Some(JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported jsonrpc version '{}'", request.jsonrpc),
            )),
            Err(e) => {
                warn!("Malformed JSON-RPC request: {}", e);
                Some(JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    "Invalid Request",
                ))
            }
        }
    }

    /// Handle a parsed request. Returns `None` when the request is a notification.
    pub fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, id = ?request.id, "handling request");
        let notification = request.is_notification();

        let response = match request.method.as_str() {
            methods::TOOLS_LIST => self.handle_tools_list(request.id),
            methods::TOOLS_CALL => self.handle_tools_call(request.id, request.params),
            methods::EVENTS_INGEST => self.handle_ingest(request.id, request.params),
            other => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            ),
        };

        (!notification).then_some(response)
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(id, json!({ "tools": self.engine.list_schemas() }))
    }

    fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let call = match params.map(serde_json::from_value::<ToolCall>) {
            Some(Ok(call)) => call,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid tools/call params: {e}"),
                )
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "tools/call requires {name, arguments}",
                )
            }
        };

        match self.engine.execute(
            &call.name,
            call.arguments.unwrap_or(Value::Null),
            id.as_ref(),
        ) {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::from_app_error(id, error),
        }
    }

    fn handle_ingest(&mut self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params = match params.map(serde_json::from_value::<IngestParams>) {
            Some(Ok(params)) if params.event.is_some() || params.events.is_some() => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid events/ingest params: {e}"),
                )
            }
            Some(Ok(_)) | None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "events/ingest requires {event} or {events}",
                )
            }
        };

        let counts = self
            .engine
            .ingest_all(params.event.iter().chain(params.events.iter().flatten()));
        JsonRpcResponse::success(id, json!(counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn handler() -> RequestHandler {
        RequestHandler::new(ToolEngine::new(&ServerConfig::default()))
    }

    #[test]
    fn test_parse_error() {
        let response = handler().handle_line("{not json").unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::PARSE_ERROR);
        assert!(response.id.is_none());
    }

    #[test]
    fn test_unknown_method() {
        let response = handler()
            .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"resources/list"}"#)
            .unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }

    #[test]
    fn test_notification_gets_no_reply_but_is_applied() {
        let mut handler = handler();
        let line = r#"{"jsonrpc":"2.0","method":"events/ingest","params":{"event":{"id":"n1","pubkey":"pk","created_at":5,"kind":1,"content":"hello","tags":[]}}}"#;
        assert!(handler.handle_line(line).is_none());
        assert_eq!(handler.engine().stores().feed.len(), 1);
    }

    #[test]
    fn test_ingest_requires_event() {
        let response = handler()
            .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"events/ingest","params":{}}"#)
            .unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
    }

    #[test]
    fn test_wrong_version_is_invalid_request() {
        let response = handler()
            .handle_line(r#"{"jsonrpc":"1.0","id":3,"method":"tools/list"}"#)
            .unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::INVALID_REQUEST);
    }
}
