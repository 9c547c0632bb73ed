//! MCP protocol tests: JSON-RPC dispatch and the newline-delimited stdio loop.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_recruiter_mcp::config::Config;
use scholar_recruiter_mcp::server::McpServer;
use scholar_recruiter_mcp::server::protocol::{self, codes};
use scholar_recruiter_mcp::server::stdio::serve;
use scholar_recruiter_mcp::tools::ToolContext;

fn setup_server(mock_server: &MockServer) -> McpServer {
    let config = Config::for_testing(&mock_server.uri());
    McpServer::new(ToolContext::from_config(&config).unwrap())
}

async fn call(server: &McpServer, line: &str) -> Option<Value> {
    protocol::handle_message(line, server.tools(), server.context())
        .await
        .map(|response| serde_json::to_value(response).unwrap())
}

/// Run the stdio loop over `input` and return every output line as JSON.
async fn run_session(server: &McpServer, input: &str) -> Vec<Value> {
    let mut output: Vec<u8> = Vec::new();
    serve(input.as_bytes(), &mut output, server.tools(), server.context()).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// =============================================================================
// Dispatch Tests
// =============================================================================

#[tokio::test]
async fn test_initialize() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response = call(
        &server,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-03-26"}}"#,
    )
    .await
    .unwrap();

    assert_eq!(response["jsonrpc"], "2.0");
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(response["result"]["serverInfo"]["name"], "scholar-recruiter-mcp");
    assert!(response["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_initialize_default_version() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response =
        call(&server, r#"{"jsonrpc":"2.0","id":"init","method":"initialize"}"#).await.unwrap();

    assert_eq!(response["id"], "init");
    assert_eq!(response["result"]["protocolVersion"], protocol::DEFAULT_PROTOCOL_VERSION);
}

#[tokio::test]
async fn test_notification_gets_no_response() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response =
        call(&server, r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).await;

    assert!(response.is_none());
}

#[tokio::test]
async fn test_tools_list() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response =
        call(&server, r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#).await.unwrap();

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 13);
    for tool in tools {
        assert!(tool["name"].is_string());
        assert!(tool["description"].is_string());
        assert_eq!(tool["inputSchema"]["type"], "object");
    }

    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    for expected in [
        "search_papers",
        "get_paper_details",
        "get_paper_citations",
        "search_authors",
        "get_author_details",
        "get_author_papers",
        "batch_author_lookup",
        "find_venue_top_authors",
        "find_rising_stars",
        "combined_researcher_profile",
        "search_researcher_github",
        "github_activity_score",
        "list_ml_venues",
    ] {
        assert!(names.contains(&expected), "missing tool {expected}");
    }
}

#[tokio::test]
async fn test_ping() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response = call(&server, r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#).await.unwrap();

    assert_eq!(response["result"], json!({}));
}

#[tokio::test]
async fn test_unknown_method() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response =
        call(&server, r#"{"jsonrpc":"2.0","id":4,"method":"resources/list"}"#).await.unwrap();

    assert_eq!(response["error"]["code"], codes::METHOD_NOT_FOUND);
    assert_eq!(response["id"], 4);
    assert!(response.get("result").is_none());
}

#[tokio::test]
async fn test_parse_error() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response = call(&server, "{not json").await.unwrap();

    assert_eq!(response["error"]["code"], codes::PARSE_ERROR);
    assert!(response["id"].is_null());
}

#[tokio::test]
async fn test_invalid_request() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response = call(&server, r#"{"jsonrpc":"2.0","id":5}"#).await.unwrap();

    assert_eq!(response["error"]["code"], codes::INVALID_REQUEST);
    assert_eq!(response["id"], 5);
}

#[tokio::test]
async fn test_unknown_tool() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response = call(
        &server,
        r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"no_such_tool"}}"#,
    )
    .await
    .unwrap();

    assert_eq!(response["error"]["code"], codes::INVALID_PARAMS);
    assert!(response["error"]["message"].as_str().unwrap().contains("no_such_tool"));
}

#[tokio::test]
async fn test_missing_tool_name() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response =
        call(&server, r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{}}"#)
            .await
            .unwrap();

    assert_eq!(response["error"]["code"], codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_invalid_tool_arguments() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response = call(
        &server,
        r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"search_papers","arguments":{"limit":"many"}}}"#,
    )
    .await
    .unwrap();

    assert_eq!(response["error"]["code"], codes::INVALID_PARAMS);
    assert!(response["error"]["message"].as_str().unwrap().contains("search_papers"));
}

#[tokio::test]
async fn test_tool_failure_is_error_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Paper not found"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = setup_server(&mock_server);
    let response = call(
        &server,
        r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":{"name":"get_paper_details","arguments":{"paperId":"missing"}}}"#,
    )
    .await
    .unwrap();

    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["isError"], true);
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Not found:"));
}

#[tokio::test]
async fn test_tool_success_result() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let response = call(
        &server,
        r#"{"jsonrpc":"2.0","id":10,"method":"tools/call","params":{"name":"list_ml_venues"}}"#,
    )
    .await
    .unwrap();

    assert_eq!(response["result"]["isError"], false);
    assert_eq!(response["result"]["content"][0]["type"], "text");
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    let venues: Value = serde_json::from_str(text).unwrap();
    assert_eq!(venues["venues"]["cvpr"], "CVPR");
}

// =============================================================================
// Stdio Loop Tests
// =============================================================================

#[tokio::test]
async fn test_stdio_session() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
        "garbage\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#,
        "\n",
    );

    let responses = run_session(&server, input).await;

    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[2]["error"]["code"], codes::PARSE_ERROR);
    assert_eq!(responses[3]["id"], 3);
}

#[tokio::test]
async fn test_stdio_invalid_utf8_line_keeps_serving() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let mut input: Vec<u8> = Vec::new();
    input.extend_from_slice(br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);
    input.extend_from_slice(b"\n\xff\xfe garbage\n");
    input.extend_from_slice(br#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#);
    input.push(b'\n');

    let mut output: Vec<u8> = Vec::new();
    serve(input.as_slice(), &mut output, server.tools(), server.context()).await.unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[1]["error"]["code"], codes::PARSE_ERROR);
    assert!(responses[1]["id"].is_null());
    assert_eq!(responses[2]["id"], 2);
}

#[tokio::test]
async fn test_stdio_last_line_without_newline() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    let responses =
        run_session(&server, r#"{"jsonrpc":"2.0","id":"last","method":"ping"}"#).await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], "last");
}

#[tokio::test]
async fn test_stdio_empty_input() {
    let mock_server = MockServer::start().await;
    let server = setup_server(&mock_server);

    assert!(run_session(&server, "").await.is_empty());
}
