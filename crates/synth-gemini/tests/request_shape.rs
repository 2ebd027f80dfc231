//! Request body shape for the generation scenarios the lab depends on.

use pretty_assertions::assert_eq;
use synth_core::enums::Creativity;
use synth_gemini::GenerationParams;
use synth_gemini::wire::GenerateContentRequest;

fn body(count: u32, creativity: Creativity, frameworks: &[&str]) -> serde_json::Value {
    let params = GenerationParams {
        fields: vec!["Neuroscience".into(), "Art History".into()],
        count,
        creativity,
        active_frameworks: frameworks.iter().map(ToString::to_string).collect(),
    };
    serde_json::to_value(GenerateContentRequest::from_params(&params)).unwrap()
}

fn system_text(body: &serde_json::Value) -> &str {
    body["systemInstruction"]["parts"][0]["text"].as_str().unwrap()
}

fn user_text(body: &serde_json::Value) -> &str {
    body["contents"][0]["parts"][0]["text"].as_str().unwrap()
}

#[test]
fn requests_exactly_the_chosen_count() {
    let body = body(3, Creativity::Balanced, &[]);
    let prompt = user_text(&body);
    assert!(prompt.contains("Generate 3 unique interdisciplinary research ideas"));
    assert!(prompt.contains("Neuroscience, Art History"));
}

#[test]
fn no_active_frameworks_means_no_lens_clause() {
    let body = body(3, Creativity::Balanced, &[]);
    assert!(!system_text(&body).contains("Apply the following intellectual frameworks"));
}

#[test]
fn two_active_frameworks_are_both_named() {
    let body = body(2, Creativity::Radical, &["Game Theory", "Post-Humanism"]);
    let system = system_text(&body);
    assert!(system.contains("Game Theory"));
    assert!(system.contains("Post-Humanism"));
}

#[test]
fn conservative_disables_reasoning_budget() {
    let body = body(1, Creativity::Conservative, &[]);
    assert_eq!(
        body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
        0
    );
    let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((temperature - 0.3).abs() < 1e-6);
}

#[test]
fn response_schema_is_attached() {
    let body = body(3, Creativity::Balanced, &[]);
    let schema = &body["generationConfig"]["responseSchema"];
    assert_eq!(schema["type"], "OBJECT");
    assert_eq!(schema["required"], serde_json::json!(["research_ideas"]));
}
