//! Corpus conformance tests.
//!
//! Runs every vector in tests/vectors/corpus.json and fails on any mismatch.

use docson::corpus::CorpusRunner;

#[test]
fn corpus_loads() {
    let runner = CorpusRunner::load("tests/vectors/corpus.json").unwrap();
    assert!(runner.vector_count() > 0);
    assert_eq!(runner.manifest().format_version, "1");
}

#[test]
fn corpus_all_vectors_pass() {
    let runner = CorpusRunner::load("tests/vectors/corpus.json").unwrap();
    let results = runner.run_all();

    assert!(
        results.all_passed(),
        "corpus: {}\nfailures: {:#?}",
        results.summary(),
        results.failures(),
    );
    // Every operation in the corpus must be recognized.
    assert_eq!(results.skipped, 0, "corpus contains unknown operations");
}
