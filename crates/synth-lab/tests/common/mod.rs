//! Shared test fixtures: a scripted generator that records every call.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use synth_core::entities::ResearchIdea;
use synth_gemini::{GenerationError, GenerationParams, IdeaGenerator};
use synth_lab::{LabDefaults, Laboratory};
use synth_store::{MemoryStore, Store};

type Reply = Result<Vec<ResearchIdea>, GenerationError>;

/// Replays queued replies in order and records the params of each call.
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    calls: Arc<Mutex<Vec<GenerationParams>>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, reply: Reply) -> &Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<GenerationParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdeaGenerator for ScriptedGenerator {
    async fn generate(&self, params: &GenerationParams) -> Reply {
        self.calls.lock().unwrap().push(params.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::Empty))
    }
}

pub fn idea(id: &str, title: &str) -> ResearchIdea {
    ResearchIdea {
        id: id.into(),
        title: title.into(),
        core_question: format!("What does {title} reveal?"),
        concept_overview: "Overview.".into(),
        why_it_matters: "Stakes.".into(),
        possible_methods: vec!["Ethnography".into()],
        related_disciplines: vec!["Neuroscience".into(), "Art History".into()],
        timestamp: 1_760_000_000_000,
    }
}

pub fn lab_with(
    store: Store<MemoryStore>,
    generator: &ScriptedGenerator,
) -> Laboratory<MemoryStore> {
    Laboratory::init(store, Box::new(generator.clone()), LabDefaults::default())
}

pub fn lab(generator: &ScriptedGenerator) -> Laboratory<MemoryStore> {
    lab_with(Store::new(MemoryStore::new()), generator)
}
