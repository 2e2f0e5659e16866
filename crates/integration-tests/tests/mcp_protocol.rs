//! Integration tests for MCP protocol compliance
//!
//! These tests verify the tool registry, the JSON schemas advertised to
//! clients and the identify flow.

use integration_tests::common::*;
use integration_tests::*;

#[test]
fn test_registered_tools() {
    let handler = OpenBbDocsHandler::new(Config::default()).unwrap();
    let tools = handler.get_available_tools();

    let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec![DISCOVER, FETCH_CONTENT, IDENTIFY]);
    assert!(tools.iter().all(|t| !t.description.is_empty()));
}

#[test]
fn test_tool_schemas_are_json_schema_objects() {
    let handler = OpenBbDocsHandler::new(Config::default()).unwrap();

    for tool in handler.get_available_tools() {
        let schema = handler.get_tool_schema(&tool.name).unwrap();

        assert_eq!(schema["type"], "object", "{} schema type", tool.name);
        assert!(schema["properties"].is_object(), "{} properties", tool.name);
        for (name, property) in schema["properties"].as_object().unwrap() {
            assert!(
                property.get("description").is_some(),
                "{}.{name} should have a description",
                tool.name
            );
        }
    }
}

#[test]
fn test_required_parameters() {
    let handler = OpenBbDocsHandler::new(Config::default()).unwrap();

    let discover = handler.get_tool_schema(DISCOVER).unwrap();
    assert!(discover.get("required").is_none());

    let fetch = handler.get_tool_schema(FETCH_CONTENT).unwrap();
    assert_eq!(fetch["required"], json!(["section_titles"]));
    assert_eq!(fetch["properties"]["section_titles"]["items"]["type"], "string");
    assert_eq!(fetch["properties"]["max_sections"]["minimum"], 1);
    assert_eq!(fetch["properties"]["max_sections"]["maximum"], 20);

    let identify = handler.get_tool_schema(IDENTIFY).unwrap();
    assert_eq!(identify["required"], json!(["user_query"]));
}

#[tokio::test]
async fn test_unknown_tool_is_an_error() {
    let host = MockDocsHost::with_samples().await;
    let handler = host.handler();

    let err = handler
        .execute_tool_directly("search_docs", json!({}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("search_docs"));
    assert!(handler.get_tool_schema("search_docs").is_err());
}

#[tokio::test]
async fn test_identify_returns_raw_toc() {
    let host = MockDocsHost::with_samples().await;
    let handler = host.handler();

    let response = call_tool(
        &handler,
        IDENTIFY,
        json!({"user_query": "How do I share a dashboard?"}),
    )
    .await;

    assert_eq!(response["success"], true);
    assert_eq!(response["query"], "How do I share a dashboard?");
    assert_eq!(response["raw_toc_content"], SAMPLE_TOC);
    assert!(response["instruction"]
        .as_str()
        .unwrap()
        .contains("SELECTION GUIDELINES"));
}

#[tokio::test]
async fn test_identify_then_fetch() {
    let host = MockDocsHost::with_samples().await;
    let handler = host.handler();

    let identified = call_tool(&handler, IDENTIFY, json!({"user_query": "copilot charts"})).await;
    let raw = identified["raw_toc_content"].as_str().unwrap();
    assert!(raw.contains("[Generative UI]"));

    let response = call_tool(
        &handler,
        FETCH_CONTENT,
        json!({"section_titles": ["Generative UI"], "user_query": "copilot charts"}),
    )
    .await;
    assert_eq!(response["sections_found"], 1);
}

#[tokio::test]
async fn test_identify_failures_are_structured() {
    let mut host = MockDocsHost::new().await;
    host.fail_toc(500).await;
    let handler = host.handler();

    let response = call_tool(&handler, IDENTIFY, json!({"user_query": "copilot"})).await;
    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().unwrap().contains("HTTP 500"));

    let response = call_tool(&handler, IDENTIFY, json!({})).await;
    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().unwrap().contains("user_query"));
}
