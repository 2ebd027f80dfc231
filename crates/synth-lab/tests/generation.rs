//! Generation flow of the laboratory.

mod common;

use common::{ScriptedGenerator, idea, lab};
use pretty_assertions::assert_eq;
use rstest::rstest;
use synth_core::enums::Creativity;
use synth_gemini::GenerationError;
use synth_lab::LabError;

#[rstest]
#[case(&[])]
#[case(&["Neuroscience"])]
#[case(&["Neuroscience", "  ", "Neuroscience"])]
#[tokio::test]
async fn fewer_than_two_fields_makes_no_request(#[case] fields: &[&str]) {
    let generator = ScriptedGenerator::new();
    let mut lab = lab(&generator);
    lab.set_selected_fields(fields.iter().copied());

    let err = lab.generate().await.unwrap_err();

    assert!(matches!(err, LabError::NotEnoughFields));
    assert_eq!(
        lab.error(),
        Some("Please select at least two fields to synthesize.")
    );
    assert!(generator.calls().is_empty());
    assert!(!lab.is_generating());
}

#[tokio::test]
async fn success_replaces_displayed_ideas() {
    let generator = ScriptedGenerator::new();
    generator
        .reply(Ok(vec![idea("idea-a", "A")]))
        .reply(Ok(vec![idea("idea-b", "B"), idea("idea-c", "C")]));
    let mut lab = lab(&generator);
    lab.set_selected_fields(["Neuroscience", "Art History"]);

    lab.generate().await.unwrap();
    let ideas = lab.generate().await.unwrap();

    let ids: Vec<&str> = ideas.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["idea-b", "idea-c"]);
    assert!(lab.error().is_none());
    assert!(!lab.is_generating());
}

#[tokio::test]
async fn balanced_scenario_sends_selection_and_count() {
    let generator = ScriptedGenerator::new();
    generator.reply(Ok(vec![idea("idea-1", "One")]));
    let mut lab = lab(&generator);
    lab.set_selected_fields(["Neuroscience", "Art History"]);
    lab.set_count(3).unwrap();
    lab.set_creativity(Creativity::Balanced);

    lab.generate().await.unwrap();

    let calls = generator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].fields, vec!["Neuroscience", "Art History"]);
    assert_eq!(calls[0].count, 3);
    assert_eq!(calls[0].creativity, Creativity::Balanced);
    assert!(calls[0].active_frameworks.is_empty());
}

#[tokio::test]
async fn active_frameworks_are_passed_in_collection_order() {
    let generator = ScriptedGenerator::new();
    generator.reply(Ok(vec![idea("idea-1", "One")]));
    let mut lab = lab(&generator);
    lab.set_selected_fields(["Ecology", "Economics"]);
    lab.toggle_framework_active("fw-3").unwrap();
    lab.toggle_framework_active("fw-1").unwrap();

    lab.generate().await.unwrap();

    assert_eq!(
        generator.calls()[0].active_frameworks,
        vec!["Game Theory", "Post-Humanism"]
    );
}

#[rstest]
#[case(GenerationError::Empty)]
#[case(GenerationError::MissingContent)]
#[case(GenerationError::Parse("expected value".into()))]
#[case(GenerationError::InvalidResponse("missing title".into()))]
#[case(GenerationError::Api { status: 500, message: "boom".into() })]
#[tokio::test]
async fn every_failure_collapses_to_one_message(#[case] cause: GenerationError) {
    let generator = ScriptedGenerator::new();
    generator
        .reply(Ok(vec![idea("idea-old", "Old")]))
        .reply(Err(cause));
    let mut lab = lab(&generator);
    lab.set_selected_fields(["Physics", "Poetry"]);
    lab.generate().await.unwrap();

    let err = lab.generate().await.unwrap_err();

    assert!(matches!(err, LabError::GenerationFailed(_)));
    assert_eq!(lab.error(), Some("Failed to generate research ideas."));
    assert!(lab.ideas().is_empty());
    assert!(!lab.is_generating());
}

#[tokio::test]
async fn new_attempt_clears_previous_error() {
    let generator = ScriptedGenerator::new();
    generator
        .reply(Err(GenerationError::Empty))
        .reply(Ok(vec![idea("idea-1", "One")]));
    let mut lab = lab(&generator);
    lab.set_selected_fields(["Physics", "Poetry"]);

    assert!(lab.generate().await.is_err());
    assert!(lab.error().is_some());
    lab.generate().await.unwrap();
    assert!(lab.error().is_none());
}

#[tokio::test]
async fn invalid_count_is_rejected_and_kept() {
    let generator = ScriptedGenerator::new();
    let mut lab = lab(&generator);

    assert!(matches!(
        lab.set_count(0),
        Err(LabError::InvalidCount { count: 0, .. })
    ));
    assert!(lab.set_count(11).is_err());
    assert_eq!(lab.count(), 3);
    lab.set_count(10).unwrap();
    assert_eq!(lab.count(), 10);
}

#[test]
fn selection_trims_and_deduplicates() {
    let generator = ScriptedGenerator::new();
    let mut lab = lab(&generator);

    lab.set_selected_fields([" Biology ", "Law", "Biology", ""]);
    assert_eq!(lab.selected_fields(), ["Biology", "Law"]);

    assert!(!lab.toggle_field("Law"));
    assert!(lab.toggle_field("Music"));
    assert!(lab.add_custom_field("Xenolinguistics"));
    assert!(!lab.add_custom_field("Xenolinguistics"));
    assert_eq!(lab.selected_fields(), ["Biology", "Music", "Xenolinguistics"]);
}

#[tokio::test]
async fn remembered_ideas_restore_in_a_new_session() {
    let generator = ScriptedGenerator::new();
    generator.reply(Ok(vec![idea("idea-1", "One"), idea("idea-2", "Two")]));
    let mut first = lab(&generator);
    first.set_selected_fields(["Law", "Music"]);
    first.generate().await.unwrap();
    first.remember_ideas().unwrap();

    let backend = first.store().backend().clone();
    first.teardown();
    let mut second = common::lab_with(synth_store::Store::new(backend), &generator);
    assert!(second.ideas().is_empty());

    assert_eq!(second.restore_ideas(), 2);
    assert_eq!(second.ideas()[1].id, "idea-2");
    assert!(second.toggle_bookmark_by_id("idea-2").unwrap());
}
