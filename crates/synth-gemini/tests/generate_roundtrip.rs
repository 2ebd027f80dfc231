//! `GeminiClient::generate` against a local mock of the `generateContent` endpoint.

use pretty_assertions::assert_eq;
use serde_json::json;
use synth_config::GeminiConfig;
use synth_core::enums::Creativity;
use synth_gemini::{GeminiClient, GenerationError, GenerationParams, IdeaGenerator};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-test";
const API_KEY: &str = "test-key";

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig {
        api_key: API_KEY.to_string(),
        model: MODEL.to_string(),
        endpoint: server.uri(),
    };
    GeminiClient::new(&config).unwrap()
}

fn params() -> GenerationParams {
    GenerationParams {
        fields: vec!["Neuroscience".into(), "Art History".into()],
        count: 2,
        creativity: Creativity::Balanced,
        active_frameworks: vec![],
    }
}

fn idea(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "core_question": format!("What does {title} change?"),
        "concept_overview": "Overview.",
        "why_it_matters": "Stakes.",
        "possible_methods": ["fMRI", "Archival study"],
        "related_disciplines": ["Neuroscience", "Art History"]
    })
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [
                    { "text": "weighing the fields", "thought": true },
                    { "text": text }
                ]
            }
        }]
    })
}

fn generate_content_path() -> String {
    format!("/models/{MODEL}:generateContent")
}

#[tokio::test]
async fn generate_posts_keyed_request_and_decodes_ideas() {
    let server = MockServer::start().await;
    let batch = json!({ "research_ideas": [idea("Gallery Gaze"), idea("Neural Fresco")] });
    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .and(header("x-goog-api-key", API_KEY))
        .and(body_partial_json(json!({
            "generationConfig": {
                "thinkingConfig": { "thinkingBudget": 4000 },
                "responseMimeType": "application/json"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&batch.to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let started = chrono::Utc::now().timestamp_millis();
    let ideas = client_for(&server).generate(&params()).await.unwrap();

    let titles: Vec<&str> = ideas.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Gallery Gaze", "Neural Fresco"]);
    assert!(ideas.iter().all(|i| i.timestamp >= started));
    assert_eq!(ideas[0].timestamp, ideas[1].timestamp);
    assert_ne!(ideas[0].id, ideas[1].id);
}

#[tokio::test]
async fn server_error_returns_no_ideas() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "Internal error encountered.", "status": "INTERNAL" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(&params()).await.unwrap_err();
    match err {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "INTERNAL: Internal error encountered.");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn off_schema_batch_fails_whole_call() {
    let server = MockServer::start().await;
    let mut incomplete = idea("Half Idea");
    incomplete.as_object_mut().unwrap().remove("why_it_matters");
    let batch = json!({ "research_ideas": [idea("Whole Idea"), incomplete] });
    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&batch.to_string())))
        .mount(&server)
        .await;

    let err = client_for(&server).generate(&params()).await.unwrap_err();
    assert!(matches!(err, GenerationError::InvalidResponse(_)));
}
