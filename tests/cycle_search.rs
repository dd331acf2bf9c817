use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wordcycle::{
    Category, Error, Filter, Lexicon, MatchQuery, PredicateSpec, SearchOptions, Solution, find_matches,
    prefix_overlap, rank, search, search_with, suffix_overlap,
};

fn write(dir: &Path, name: &str, lines: &[&str]) {
    fs::write(dir.join(name), lines.join("\n")).unwrap();
}

fn corpus() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "popular.txt", &["Start", "tarot", "", "rotas", "tasks", "  tarot  "]);
    write(dir.path(), "nouns.txt", &["tarot", "tasks"]);
    dir
}

fn chains(solutions: &[Solution]) -> Vec<String> {
    solutions.iter().map(|s| s.chain().join(" ")).collect()
}

#[test]
fn loaded_lexicon_drives_a_part_of_speech_search() {
    let dir = corpus();
    let lexicon = Lexicon::load(dir.path().join("popular.txt"), None).unwrap();
    assert_eq!(lexicon.words(), ["rotas", "start", "tarot", "tasks"]);
    assert!(lexicon.in_category("tarot", Category::Noun));

    let mut out = search(&lexicon, "star", &["noun", "any", "any"]).unwrap();
    assert_eq!(out.count, 5);
    assert!(out.solutions.iter().all(|s| s.chain()[0] == "tarot"));

    let ranked = rank(&mut out.solutions, None);
    assert_eq!(
        chains(ranked),
        vec![
            "tarot tarot rotas",
            "tarot rotas rotas",
            "tarot tarot tasks",
            "tarot rotas tasks",
            "tarot tasks tasks",
        ]
    );
    assert_eq!(ranked.iter().map(|s| s.score).collect::<Vec<_>>(), vec![12, 12, 10, 10, 10]);
}

#[test]
fn missing_category_files_disable_part_of_speech_rules() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "popular.txt", &["start", "tarot", "rotas", "tasks"]);
    let lexicon = Lexicon::load(dir.path().join("popular.txt"), None).unwrap();
    assert!(!lexicon.has_categories());

    let out = search(&lexicon, "star", &["noun", "any", "any"]).unwrap();
    assert_eq!(out.count, 0);
    assert!(search(&lexicon, "star", &["any", "any", "any"]).unwrap().count > 0);
}

#[test]
fn loader_errors_are_not_input_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = Lexicon::load(dir.path().join("absent.txt"), None).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));

    write(dir.path(), "blank.txt", &["", "   "]);
    let err = Lexicon::load(dir.path().join("blank.txt"), None).unwrap_err();
    assert!(matches!(err, Error::EmptyLexicon { .. }));
    assert!(!err.is_input_error());
}

#[test]
fn every_solution_closes_the_cycle() {
    let lexicon = Lexicon::new(["start", "tarot", "rotas", "tasks", "taste", "stare", "arson", "astral", "rats"]);
    let out = search(&lexicon, "star", &["any", "any", "any"]).unwrap();
    assert!(out.count > 0);
    for s in &out.solutions {
        let [start, w1, w2, w3] = &s.words;
        let edges = [prefix_overlap(w1, start), prefix_overlap(w2, w1), prefix_overlap(w3, w2), suffix_overlap(w3, start)];
        assert!(edges.iter().all(|&e| e > 0), "{s}");
        assert_eq!(s.score, edges.iter().sum::<usize>(), "{s}");
    }
}

#[test]
fn capped_results_are_prefixes_of_longer_runs() {
    let lexicon = Lexicon::new(["start", "tarot", "rotas", "tasks", "taste", "stare", "arson", "astral", "rats"]);
    let rules = ["any", "any", "any"];
    let mut previous: Vec<Solution> = Vec::new();
    for cap in 1..=8 {
        let out = search_with(&lexicon, "star", &rules, &SearchOptions::capped(cap)).unwrap();
        assert!(out.solutions.starts_with(&previous));
        previous = out.solutions;
    }
}

#[test]
fn candidate_limit_never_adds_solutions() {
    let lexicon = Lexicon::new(["start", "tarot", "rotas", "tasks", "taste", "stare", "arson"]);
    let rules = ["any", "any", "any"];
    let full = search(&lexicon, "star", &rules).unwrap();
    let options = SearchOptions { candidate_limit: Some(1), ..SearchOptions::default() };
    let narrow = search_with(&lexicon, "star", &rules, &options).unwrap();
    assert!(narrow.count < full.count);
    assert!(narrow.solutions.iter().all(|s| full.solutions.contains(s)));
}

#[test]
fn match_query_combines_filters() {
    let lexicon = Lexicon::new(["story", "stop", "strap", "tap", "apple"]).with_category(Category::Noun, ["strap"]);
    let filter: Filter = [PredicateSpec::Length(5), PredicateSpec::PartOfSpeech(Category::Noun)].into_iter().collect();
    let found = find_matches(&lexicon, &MatchQuery::new("ST").with_filter(filter)).unwrap();
    assert_eq!(found.iter().map(|m| m.word.as_str()).collect::<Vec<_>>(), vec!["strap"]);
}
