//! File-backed store behavior across reopen.

use pretty_assertions::assert_eq;
use synth_core::entities::{Bookmark, Framework, Resource, ResearchIdea, UserProfile};
use synth_store::{FileStore, KeyValueStore, Store};

fn sample_idea() -> ResearchIdea {
    ResearchIdea {
        id: "idea-42".into(),
        title: "Choral Epidemiology".into(),
        core_question: "Does group singing change contagion models?".into(),
        concept_overview: "Aerosol physics meets music sociology.".into(),
        why_it_matters: "Public health guidance for choirs.".into(),
        possible_methods: vec!["Particle counting".into(), "Surveys".into()],
        related_disciplines: vec!["Epidemiology".into(), "Musicology".into()],
        timestamp: 1_760_000_000_000,
    }
}

#[test]
fn records_survive_reopen() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");

    let mut profile = UserProfile::default();
    profile.username = "Grace".into();
    profile.add_interest("Compilers");

    let mut bookmark = Bookmark::from_idea(sample_idea());
    bookmark.notes = "Ask the choir director".into();
    bookmark
        .resources
        .push(Resource::link("Study", "https://example.org/study"));

    let mut frameworks = Framework::default_set();
    frameworks[1].active = true;
    frameworks.push(Framework::custom("Semiotics", "Signs and meaning"));

    {
        let mut store = Store::new(FileStore::open(tmp.path()).expect("open"));
        store.save(&profile).expect("save profile");
        store.save(&vec![bookmark.clone()]).expect("save bookmarks");
        store.save(&frameworks).expect("save frameworks");
        store.set_authenticated(true).expect("sign in");
    }

    let store = Store::new(FileStore::open(tmp.path()).expect("reopen"));
    assert_eq!(store.load::<UserProfile>(), profile);
    assert_eq!(store.load::<Vec<Bookmark>>(), vec![bookmark]);
    assert_eq!(store.load::<Vec<Framework>>(), frameworks);
    assert!(store.is_authenticated());
}

#[test]
fn removing_last_bookmark_persists_empty_list() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut store = Store::new(FileStore::open(tmp.path()).expect("open"));

    store
        .save(&vec![Bookmark::from_idea(sample_idea())])
        .expect("save");
    store.save(&Vec::<Bookmark>::new()).expect("save empty");

    let raw = std::fs::read_to_string(tmp.path().join("is_bookmarks.json")).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["data"], serde_json::json!([]));
    assert!(store.load::<Vec<Bookmark>>().is_empty());
}

#[test]
fn corrupt_file_loads_default() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    std::fs::write(tmp.path().join("is_frameworks.json"), "{{{").expect("write");

    let store = Store::new(FileStore::open(tmp.path()).expect("open"));
    assert_eq!(store.load::<Vec<Framework>>(), Framework::default_set());
}

#[test]
fn sign_out_removes_flag_file() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut store = Store::new(FileStore::open(tmp.path()).expect("open"));

    store.set_authenticated(true).expect("sign in");
    assert!(tmp.path().join("is_authenticated.json").exists());

    store.set_authenticated(false).expect("sign out");
    assert!(!tmp.path().join("is_authenticated.json").exists());
    assert!(!store.is_authenticated());
}

#[test]
fn open_creates_nested_directory() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let dir = tmp.path().join("a").join("b");
    let mut backend = FileStore::open(&dir).expect("open");
    backend.set("probe", "1").expect("set");
    assert_eq!(backend.get("probe").expect("get").as_deref(), Some("1"));
}
