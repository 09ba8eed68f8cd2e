use engine::persist::{load_context, save_meta, save_model, save_postings, save_vectors, ArtifactPaths, MetaFile, ARTIFACT_VERSION};
use engine::tokenizer::Analyzer;
use engine::{EngineConfig, JobPosting, LexiconTagger, MatchError, TermId, TermVector, TfScaling, TfidfModel};
use recommender::{read_profile, run};
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn build_tiny_artifacts(dir: &std::path::Path) {
    let paths = ArtifactPaths::new(dir);

    // Vocabulary: "rust" -> 0, "nursing" -> 1
    let mut vocab: HashMap<String, TermId> = HashMap::new();
    vocab.insert("rust".to_string(), 0);
    vocab.insert("nursing".to_string(), 1);
    let model = TfidfModel::new(vocab, vec![1.0, 1.0], TfScaling::Raw, Analyzer::default()).unwrap();
    save_model(&paths, &model).unwrap();

    let postings = vec![
        JobPosting { id: "a".into(), title: "rust developer".into(), description: Some("Write fast Rust services.".into()), city: Some("san jose".into()), state: Some("CA".into()) },
        JobPosting { id: "b".into(), title: "systems engineer".into(), description: Some("Maintain reliable Rust tooling.".into()), city: None, state: Some("TX".into()) },
        JobPosting { id: "c".into(), title: "charge nurse".into(), description: Some("Lead the nursing team.".into()), city: None, state: None },
    ];
    save_postings(&paths, &postings).unwrap();

    // precomputed, already normalized rows
    let rows = vec![
        ("a".to_string(), TermVector::from_dense(&[1.0, 0.0])),
        ("b".to_string(), TermVector::from_dense(&[0.8, 0.6])),
        ("c".to_string(), TermVector::from_dense(&[0.0, 1.0])),
    ];
    save_vectors(&paths, &rows).unwrap();
    save_meta(&paths, &MetaFile { num_docs: 3, dim: 2, version: ARTIFACT_VERSION }).unwrap();
}

#[test]
fn report_lists_matches_after_the_nearest() {
    let dir = tempdir().unwrap();
    build_tiny_artifacts(dir.path());
    let ctx = load_context(&ArtifactPaths::new(dir.path())).unwrap();

    let profile = dir.path().join("profile");
    fs::create_dir_all(&profile).unwrap();
    fs::write(profile.join("one.md"), "# rust cli\nA Rust command line tool.").unwrap();
    fs::write(profile.join("two.txt"), "More rust.").unwrap();
    fs::write(profile.join("skip.json"), "nursing nursing nursing").unwrap();
    let texts = read_profile(&profile).unwrap();
    assert_eq!(texts.len(), 2);

    let report = run(&ctx, &EngineConfig::default(), &LexiconTagger::new(), &texts).unwrap();
    let ids: Vec<&str> = report.matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
    assert_eq!(report.matches[0].rank, 1);
    assert_eq!(report.matches[0].lines, vec!["Systems Engineer ", "TX ", "https://www.linkedin.com/jobs/search/?keywords=systems%20engineer"]);
    assert_eq!(report.matches[1].lines, vec!["Charge Nurse ", "https://www.linkedin.com/jobs/search/?keywords=charge%20nurse"]);

    let rust = report.charts.iter().find(|r| r.token == "rust").unwrap();
    assert_eq!(rust.category, "Nouns");
    assert_eq!(rust.frequency, 1);

    let text = report.render_text();
    assert!(text.contains("## Your Best Matches"));
    assert!(text.contains("Relevant Verbs"));
}

#[test]
fn blank_profile_is_reported_as_input_error() {
    let dir = tempdir().unwrap();
    build_tiny_artifacts(dir.path());
    let ctx = load_context(&ArtifactPaths::new(dir.path())).unwrap();
    let file = dir.path().join("empty.md");
    fs::write(&file, "  \n").unwrap();
    let texts = read_profile(&file).unwrap();
    let err = run(&ctx, &EngineConfig::default(), &LexiconTagger::new(), &texts).unwrap_err();
    assert_eq!(err, MatchError::Input);
    assert_eq!(err.status_message(), "No profile text collected.");
}

#[test]
fn missing_profile_path_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(read_profile(&dir.path().join("nope")).is_err());
}
