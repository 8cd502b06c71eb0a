// ABOUTME: End-to-end tests of the newline-delimited JSON-RPC stdio transport
// ABOUTME: Drives ingest, tool calls, and error envelopes through an in-memory reader and writer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_engine, text_note, workout_record};
use runlog_server::jsonrpc::error_codes;
use runlog_server::transport::{RequestHandler, StdioTransport};
use serde_json::{json, Value};

async fn run_session(lines: &[Value]) -> Vec<Value> {
    let input: String = lines
        .iter()
        .map(|line| format!("{line}\n"))
        .collect();
    let mut transport = StdioTransport::new(RequestHandler::new(create_test_engine()));
    let mut output = Vec::new();
    transport.serve(input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn call(id: u64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

#[tokio::test]
async fn test_ingest_then_query_session() {
    let events = vec![
        text_note("n1", 100, "Easy 8 km in 44:00, cloudy"),
        workout_record("r1", 200, "8", "00:44:00"),
        text_note("n1", 300, "duplicate id"),
    ];
    let responses = run_session(&[
        json!({
            "jsonrpc": "2.0",
            "id": "ingest-1",
            "method": "events/ingest",
            "params": { "events": events }
        }),
        call(2, "read_feed", json!({})),
        call(3, "parse_feed_entry", json!({ "id": "n1" })),
    ])
    .await;

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["id"], "ingest-1");
    assert_eq!(
        responses[0]["result"],
        json!({ "inserted": 2, "skipped": 1, "ignored": 0 })
    );

    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[1]["result"]["total"], 2);
    assert_eq!(responses[1]["result"]["feed"][0]["id"], "r1");

    let parsed = &responses[2]["result"];
    assert_eq!(parsed["extractedData"]["duration"]["totalSeconds"], 2640);
    assert_eq!(parsed["extractedData"]["weather"], json!(["cloudy"]));
}

#[tokio::test]
async fn test_tool_errors_carry_error_response_data() {
    let responses = run_session(&[
        call(1, "parse_note", json!({ "content": "" })),
        call(2, "parse_feed_entry", json!({ "id": "missing" })),
        call(3, "no_such_tool", json!({})),
    ])
    .await;

    let empty = &responses[0]["error"];
    assert_eq!(empty["code"], error_codes::INVALID_PARAMS);
    assert_eq!(empty["data"]["error"]["code"], "EMPTY_INPUT");

    let missing = &responses[1]["error"];
    assert_eq!(missing["data"]["error"]["code"], "RESOURCE_NOT_FOUND");

    let unknown = &responses[2]["error"];
    assert_eq!(unknown["code"], error_codes::METHOD_NOT_FOUND);
    assert_eq!(unknown["data"]["error"]["code"], "UNKNOWN_OPERATION");
}

#[tokio::test]
async fn test_protocol_errors() {
    let input = concat!(
        "not json\n",
        r#"{"jsonrpc":"1.0","id":5,"method":"tools/list"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":6}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":7,"method":"resources/list"}"#,
        "\n",
    );
    let mut transport = StdioTransport::new(RequestHandler::new(create_test_engine()));
    let mut output = Vec::new();
    transport.serve(input.as_bytes(), &mut output).await.unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["error"]["code"], error_codes::PARSE_ERROR);
    assert!(responses[0]["id"].is_null());
    assert_eq!(responses[1]["error"]["code"], error_codes::INVALID_REQUEST);
    assert_eq!(responses[1]["id"], 5);
    assert_eq!(responses[2]["error"]["code"], error_codes::INVALID_REQUEST);
    assert_eq!(responses[2]["id"], 6);
    assert_eq!(responses[3]["error"]["code"], error_codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_notifications_are_applied_silently() {
    let responses = run_session(&[
        json!({
            "jsonrpc": "2.0",
            "method": "events/ingest",
            "params": { "event": text_note("quiet", 1, "5 km") }
        }),
        call(1, "read_feed", json!({})),
    ])
    .await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["result"]["feed"][0]["id"], "quiet");
}

#[tokio::test]
async fn test_tools_list_exposes_input_schemas() {
    let responses = run_session(&[json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" })]).await;
    let tools = responses[0]["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 7);
    let parse_note = tools.iter().find(|t| t["name"] == "parse_note").unwrap();
    assert_eq!(parse_note["inputSchema"]["type"], "object");
    assert_eq!(parse_note["inputSchema"]["required"], json!(["content"]));
}

#[tokio::test]
async fn test_non_utf8_line_keeps_session_and_stores() {
    let ingest = json!({
        "jsonrpc": "2.0",
        "method": "events/ingest",
        "params": { "event": text_note("kept", 1, "6 km") }
    });
    let mut input = format!("{ingest}\n").into_bytes();
    input.extend_from_slice(b"\xc3\x28 garbage\n");
    input.extend_from_slice(format!("{}\n", call(9, "read_feed", json!({}))).as_bytes());

    let mut transport = StdioTransport::new(RequestHandler::new(create_test_engine()));
    let mut output = Vec::new();
    transport.serve(input.as_slice(), &mut output).await.unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], error_codes::PARSE_ERROR);
    assert_eq!(responses[1]["id"], 9);
    assert_eq!(responses[1]["result"]["feed"][0]["id"], "kept");
}
