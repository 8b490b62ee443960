//! Provider adapter tests against mocked HTTP endpoints
//!
//! Each suite stands up a wiremock server, points the adapter at it via
//! `with_base_url`, and checks the provider-specific response mapping.

use internet_search::providers::{
    ExaAdapter, LinkupAdapter, ProviderAdapter, ProviderRequest, TavilyAdapter,
};
use internet_search::types::PLACEHOLDER_SCORE;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(query: &str) -> ProviderRequest {
    ProviderRequest {
        query: query.to_string(),
        api_key: "test-key".to_string(),
        max_results: 5,
        max_snippet_chars: 500,
    }
}

mod exa {
    use super::*;

    #[tokio::test]
    async fn maps_results_into_unified_items() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "query": "rust",
                "numResults": 5,
                "livecrawl": "always"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {
                        "id": "doc-1",
                        "title": "Rust Book",
                        "url": "https://doc.rust-lang.org/book/",
                        "text": "Rust is fast. Rust is safe.",
                        "publishedDate": "2024-01-02T03:04:05Z"
                    },
                    {
                        "title": "No id result",
                        "url": "https://example.com/2",
                        "content": "Body under the legacy content field."
                    }
                ]
            })))
            .mount(&server)
            .await;

        let adapter = ExaAdapter::new().with_base_url(&format!("{}/search", server.uri()));
        let items = adapter.search(&request("rust")).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "doc-1");
        assert_eq!(items[0].score, PLACEHOLDER_SCORE);
        assert_eq!(items[0].metadata.source, "exa");
        assert_eq!(items[0].metadata.file_name, "Rust Book");
        assert_eq!(
            items[0].metadata.published_date.as_deref(),
            Some("2024-01-02T03:04:05+00:00")
        );
        // Missing id is synthesized from the positional index,
        // and `content` backs up a missing `text` field.
        assert_eq!(items[1].id, "exa_1");
        assert_eq!(items[1].text, "Body under the legacy content field.");
        assert!(items[1].metadata.published_date.is_none());
    }

    #[tokio::test]
    async fn truncates_snippets_with_single_ellipsis() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": "a", "url": "https://a.com", "text": "hello world"}]
            })))
            .mount(&server)
            .await;

        let adapter = ExaAdapter::new().with_base_url(&format!("{}/search", server.uri()));
        let mut req = request("rust");
        req.max_snippet_chars = 5;
        let items = adapter.search(&req).await.unwrap();
        assert_eq!(items[0].text, "hell…");
    }

    #[tokio::test]
    async fn caps_items_at_max_results() {
        let results: Vec<_> = (0..8)
            .map(|i| json!({"id": format!("r{i}"), "url": format!("https://e.com/{i}"), "text": "t"}))
            .collect();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
            .mount(&server)
            .await;

        let adapter = ExaAdapter::new().with_base_url(&format!("{}/search", server.uri()));
        let mut req = request("rust");
        req.max_results = 3;
        let items = adapter.search(&req).await.unwrap();
        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn auth_failure_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let adapter = ExaAdapter::new().with_base_url(&format!("{}/search", server.uri()));
        assert!(adapter.search(&request("rust")).await.is_err());
    }
}

mod tavily {
    use super::*;

    #[tokio::test]
    async fn sends_key_in_body_and_maps_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({
                "api_key": "test-key",
                "query": "rust",
                "max_results": 5,
                "include_images": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": "rust",
                "results": [
                    {
                        "title": "Tavily hit",
                        "url": "https://t.com/1",
                        "content": "First sentence. Second sentence.",
                        "published_date": "2023-05-06"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let adapter = TavilyAdapter::new().with_base_url(&format!("{}/search", server.uri()));
        let items = adapter.search(&request("rust")).await.unwrap();

        assert_eq!(items.len(), 1);
        // Tavily supplies no native id
        assert_eq!(items[0].id, "tavily_0");
        assert_eq!(items[0].metadata.source, "tavily");
        assert_eq!(items[0].metadata.file_name, "Tavily hit");
        assert_eq!(items[0].metadata.published_date.as_deref(), Some("2023-05-06"));
    }

    #[tokio::test]
    async fn server_error_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let adapter = TavilyAdapter::new().with_base_url(&format!("{}/search", server.uri()));
        assert!(adapter.search(&request("rust")).await.is_err());
    }

    #[tokio::test]
    async fn malformed_response_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("results: not json"))
            .mount(&server)
            .await;

        let adapter = TavilyAdapter::new().with_base_url(&format!("{}/search", server.uri()));
        assert!(adapter.search(&request("rust")).await.is_err());
    }
}

mod linkup {
    use super::*;

    #[tokio::test]
    async fn maps_name_field_and_never_sets_published_date() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "q": "rust",
                "depth": "standard",
                "outputType": "searchResults",
                "includeImages": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {
                        "name": "Linkup page",
                        "url": "https://l.com/1",
                        "content": "Linkup body."
                    },
                    {
                        "title": "Fallback title",
                        "url": "https://l.com/2",
                        "text": "Body under text."
                    }
                ]
            })))
            .mount(&server)
            .await;

        let adapter = LinkupAdapter::new().with_base_url(&format!("{}/v1/search", server.uri()));
        let items = adapter.search(&request("rust")).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "linkup_0");
        assert_eq!(items[0].metadata.file_name, "Linkup page");
        assert_eq!(items[0].metadata.source, "linkup");
        assert!(items[0].metadata.published_date.is_none());
        // `title` and `text` back up missing `name`/`content`
        assert_eq!(items[1].metadata.file_name, "Fallback title");
        assert_eq!(items[1].text, "Body under text.");
    }

    #[tokio::test]
    async fn empty_result_list_maps_to_no_items() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let adapter = LinkupAdapter::new().with_base_url(&format!("{}/v1/search", server.uri()));
        let items = adapter.search(&request("rust")).await.unwrap();
        assert!(items.is_empty());
    }
}
