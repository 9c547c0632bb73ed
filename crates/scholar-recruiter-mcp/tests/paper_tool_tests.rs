//! Mock-based tests for paper tools: `search_papers`, `get_paper_details`, `get_paper_citations`

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_recruiter_mcp::config::Config;
use scholar_recruiter_mcp::error::{ClientError, ToolError};
use scholar_recruiter_mcp::tools::{
    McpTool, PaperCitationsTool, PaperDetailsTool, SearchPapersTool, ToolContext,
};

fn setup_test_context(mock_server: &MockServer) -> ToolContext {
    let config = Config::for_testing(&mock_server.uri());
    ToolContext::from_config(&config).unwrap()
}

fn sample_paper(id: &str, title: &str, year: i32, citations: i64) -> Value {
    json!({
        "paperId": id,
        "title": title,
        "abstract": format!("Abstract about {title}"),
        "year": year,
        "venue": "NeurIPS",
        "citationCount": citations,
        "influentialCitationCount": citations / 10,
        "authors": [
            {"authorId": "auth1", "name": "Alice Researcher"},
            {"authorId": "auth2", "name": "Bob Scientist"}
        ],
        "externalIds": {"DOI": format!("10.1234/{id}"), "ArXiv": "2301.00001"}
    })
}

fn bulk_result(total: i64, papers: Vec<Value>) -> Value {
    json!({
        "total": total,
        "token": null,
        "data": papers
    })
}

fn parse(output: &str) -> Value {
    serde_json::from_str(output).expect("tool output is JSON")
}

// =============================================================================
// SearchPapersTool Tests
// =============================================================================

#[tokio::test]
async fn test_search_papers_resolves_venue_and_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search/bulk"))
        .and(query_param("query", "transformers"))
        .and(query_param("venue", "NeurIPS"))
        .and(query_param("year", "2022-"))
        .and(query_param("minCitationCount", "50"))
        .and(query_param("sort", "citationCount:desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bulk_result(
            3,
            vec![
                sample_paper("p1", "Big Transformer", 2023, 900),
                sample_paper("p2", "Borderline Transformer", 2022, 50),
                // the API does not always honour minCitationCount
                sample_paper("p3", "Obscure Transformer", 2024, 12),
            ],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPapersTool
        .execute(
            &ctx,
            json!({
                "query": "transformers",
                "venue": "neurips",
                "year_from": 2022,
                "min_citations": 50
            }),
        )
        .await
        .unwrap();

    let value = parse(&result);
    assert_eq!(value["total"], 3);
    assert_eq!(value["returned"], 2);
    let ids: Vec<&str> =
        value["papers"].as_array().unwrap().iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
    assert_eq!(value["papers"][0]["doi"], "10.1234/p1");
}

#[tokio::test]
async fn test_search_papers_unknown_venue_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search/bulk"))
        .and(query_param("venue", "Workshop on Tiny Things"))
        .and(query_param("year", "2019-2021"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bulk_result(0, vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPapersTool
        .execute(
            &ctx,
            json!({
                "query": "tiny",
                "venue": "Workshop on Tiny Things",
                "yearFrom": 2019,
                "yearTo": 2021,
                "responseFormat": "markdown"
            }),
        )
        .await
        .unwrap();

    assert_eq!(result, "No papers found.");
}

#[tokio::test]
async fn test_search_papers_truncates_to_limit() {
    let mock_server = MockServer::start().await;

    let papers: Vec<Value> =
        (0..10).map(|i| sample_paper(&format!("p{i}"), "Paper", 2023, 100 - i)).collect();
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search/bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bulk_result(10, papers)))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        SearchPapersTool.execute(&ctx, json!({"query": "q", "limit": 3})).await.unwrap();

    assert_eq!(parse(&result)["returned"], 3);
}

#[tokio::test]
async fn test_search_papers_markdown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search/bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bulk_result(
            1500,
            vec![sample_paper("p1", "Attention Is All You Need", 2017, 90000)],
        )))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPapersTool
        .execute(&ctx, json!({"query": "attention", "responseFormat": "markdown"}))
        .await
        .unwrap();

    assert!(result.contains("1 shown of 1500"));
    assert!(result.contains("Attention Is All You Need"));
    assert!(result.contains("https://doi.org/10.1234/p1"));
}

#[tokio::test]
async fn test_search_papers_missing_query_is_invalid_arguments() {
    let mock_server = MockServer::start().await;
    let ctx = setup_test_context(&mock_server);

    let err = SearchPapersTool.execute(&ctx, json!({"venue": "icml"})).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments(_)));
}

// =============================================================================
// PaperDetailsTool Tests
// =============================================================================

#[tokio::test]
async fn test_paper_details_with_doi_prefix() {
    let mock_server = MockServer::start().await;

    let mut paper = sample_paper("p1", "Detailed Paper", 2021, 321);
    paper["tldr"] = json!({"model": "tldr@v2", "text": "A short summary."});
    paper["s2FieldsOfStudy"] = json!([{"category": "Computer Science", "source": "s2-fos-model"}]);
    paper["referenceCount"] = json!(42);

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/DOI:10.1234/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paper))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        PaperDetailsTool.execute(&ctx, json!({"paperId": "DOI:10.1234/p1"})).await.unwrap();

    let value = parse(&result);
    assert_eq!(value["title"], "Detailed Paper");
    assert_eq!(value["tldr"], "A short summary.");
    assert_eq!(value["references"], 42);
    assert_eq!(value["s2Fields"], json!(["Computer Science"]));
}

#[tokio::test]
async fn test_paper_details_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Paper not found"})))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = PaperDetailsTool.execute(&ctx, json!({"paper_id": "missing"})).await.unwrap_err();

    assert!(matches!(err, ToolError::Client(ClientError::NotFound { .. })));
    assert!(err.to_user_message().contains("Not found"));
}

#[tokio::test]
async fn test_paper_details_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = PaperDetailsTool.execute(&ctx, json!({"paperId": "p1"})).await.unwrap_err();

    assert!(matches!(err, ToolError::Client(ClientError::Parse(_))));
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "30")
                .set_body_string("Too Many Requests"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = PaperDetailsTool.execute(&ctx, json!({"paperId": "p1"})).await.unwrap_err();

    match err {
        ToolError::Client(ref e @ ClientError::RateLimited { .. }) => {
            assert_eq!(e.retry_after(), Some(std::time::Duration::from_secs(30)));
        }
        other => panic!("expected rate limit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = PaperDetailsTool.execute(&ctx, json!({"paperId": "p1"})).await.unwrap_err();

    assert!(matches!(err, ToolError::Client(ClientError::Server { status: 503, .. })));
}

#[tokio::test]
async fn test_api_key_header_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .and(header("x-api-key", "s2-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_paper("p1", "T", 2020, 1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri())
        .with_credentials(Some("s2-test-key".to_string()), None);
    let ctx = ToolContext::from_config(&config).unwrap();

    PaperDetailsTool.execute(&ctx, json!({"paperId": "p1"})).await.unwrap();
}

// =============================================================================
// PaperCitationsTool Tests
// =============================================================================

#[tokio::test]
async fn test_paper_citations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1/citations"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "next": 5,
            "data": [
                {"citingPaper": sample_paper("c1", "Follow-up", 2024, 10), "isInfluential": true},
                {"citingPaper": sample_paper("c2", "Survey", 2024, 3), "isInfluential": false},
                {"citingPaper": null}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        PaperCitationsTool.execute(&ctx, json!({"paperId": "p1", "limit": 5})).await.unwrap();

    let value = parse(&result);
    assert_eq!(value["returned"], 2);
    assert_eq!(value["next"], 5);
    assert_eq!(value["citations"][0]["influential"], true);
    assert_eq!(value["citations"][1]["title"], "Survey");
}

#[tokio::test]
async fn test_paper_citations_limit_clamped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1/citations"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"offset": 0, "data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperCitationsTool
        .execute(&ctx, json!({"paperId": "p1", "limit": 5000, "responseFormat": "markdown"}))
        .await
        .unwrap();

    assert!(result.contains("No citations found"));
}

#[tokio::test]
async fn test_paper_citations_unresolved_citing_paper() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1/citations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "data": [
                {"citingPaper": {"paperId": "c1", "title": "Resolved"}},
                {"citingPaper": {"paperId": null, "title": "Unresolved citing paper"}}
            ]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperCitationsTool.execute(&ctx, json!({"paperId": "p1"})).await.unwrap();

    let value = parse(&result);
    assert_eq!(value["returned"], 2);
    assert_eq!(value["citations"][0]["id"], "c1");
    assert!(value["citations"][1]["id"].is_null());
    assert_eq!(value["citations"][1]["title"], "Unresolved citing paper");

    let markdown = PaperCitationsTool
        .execute(&ctx, json!({"paperId": "p1", "responseFormat": "markdown"}))
        .await
        .unwrap();
    assert!(markdown.contains("**Unresolved citing paper**"));
}

#[tokio::test]
async fn test_paper_details_id_is_path_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/odd%3Fid%231"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_paper(
            "odd?id#1",
            "Odd Identifier",
            2020,
            1,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperDetailsTool.execute(&ctx, json!({"paperId": "odd?id#1"})).await.unwrap();

    assert_eq!(parse(&result)["title"], "Odd Identifier");
}
