//! Corpus-based conformance testing.
//!
//! Loads test vectors from a JSON corpus file and runs them against the
//! reader, writer, and comparison relation, reporting pass/fail with
//! details. The corpus pins down observable behavior (rendered output,
//! ordering results, error identities) so regressions show up as vector
//! failures rather than silent drift.
//!
//! Supported operations:
//!
//! - `parse_write` - parse `input.raw`, render the result, compare the text
//!   (or expect a named error).
//! - `compare` - parse `input.a` and `input.b`, compare, expect
//!   `Less`/`Equal`/`Greater`/`Unordered`.
//! - `append` - parse `input.receiver` and `input.element`, push the element
//!   onto the receiver, render, compare the text.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::reader::parse_value;
use crate::value::Value;
use crate::writer::write;

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Corpus version.
    pub version: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Operation to test (e.g. "parse_write", "compare").
    pub op: String,
    /// Input parameters for the operation.
    pub input: serde_json::Value,
    /// Expected result (success or error).
    pub expected: serde_json::Value,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with a mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the implementation.
        actual: String,
    },
    /// Test was skipped (operation not implemented).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
    /// Test errored during execution.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Returns true if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errors (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.total()
        )
    }

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load a corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read corpus file: {e}"))?;

        let corpus: Corpus = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse corpus JSON: {e}"))?;

        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = self.run_vector(vector);
            results.record(&vector.id, result);
        }

        results
    }

    /// Run a single test vector.
    fn run_vector(&self, vector: &TestVector) -> TestResult {
        match vector.op.as_str() {
            "parse_write" => self.run_parse_write(vector),
            "compare" => self.run_compare(vector),
            "append" => self.run_append(vector),
            _ => TestResult::Skip {
                reason: format!("Unknown operation: {}", vector.op),
            },
        }
    }

    /// Parse `raw`, render the result, and check text or error identity.
    fn run_parse_write(&self, vector: &TestVector) -> TestResult {
        let raw = match vector.input.get("raw").and_then(|v| v.as_str()) {
            Some(r) => r,
            None => {
                return TestResult::Error {
                    message: "Missing 'raw' in input".to_string(),
                }
            }
        };

        let result = parse_value(raw);

        if let Some(expected_text) = vector.expected.get("ok").and_then(|v| v.as_str()) {
            match result {
                Ok(value) => {
                    let actual = write(&value);
                    if actual == expected_text {
                        TestResult::Pass
                    } else {
                        TestResult::Fail {
                            expected: expected_text.to_string(),
                            actual,
                        }
                    }
                }
                Err(e) => TestResult::Fail {
                    expected: expected_text.to_string(),
                    actual: format!("err: {}", e.name()),
                },
            }
        } else if let Some(expected_err) = vector.expected.get("err").and_then(|v| v.as_str()) {
            match result {
                Ok(value) => TestResult::Fail {
                    expected: format!("err: {expected_err}"),
                    actual: format!("ok: {}", write(&value)),
                },
                Err(e) => {
                    if e.name() == expected_err {
                        TestResult::Pass
                    } else {
                        TestResult::Fail {
                            expected: expected_err.to_string(),
                            actual: e.name().to_string(),
                        }
                    }
                }
            }
        } else {
            TestResult::Error {
                message: "Invalid expected format".to_string(),
            }
        }
    }

    /// Parse two inputs and check their ordering result.
    fn run_compare(&self, vector: &TestVector) -> TestResult {
        let (a, b) = match (
            vector.input.get("a").and_then(|v| v.as_str()),
            vector.input.get("b").and_then(|v| v.as_str()),
        ) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return TestResult::Error {
                    message: "Missing 'a' or 'b' in input".to_string(),
                }
            }
        };

        let left = match parse_value(a) {
            Ok(v) => v,
            Err(e) => {
                return TestResult::Error {
                    message: format!("Input 'a' failed to parse: {e}"),
                }
            }
        };
        let right = match parse_value(b) {
            Ok(v) => v,
            Err(e) => {
                return TestResult::Error {
                    message: format!("Input 'b' failed to parse: {e}"),
                }
            }
        };

        let actual = match left.compare(&right) {
            Some(Ordering::Less) => "Less",
            Some(Ordering::Equal) => "Equal",
            Some(Ordering::Greater) => "Greater",
            None => "Unordered",
        };

        match vector.expected.as_str() {
            Some(expected) if expected == actual => TestResult::Pass,
            Some(expected) => TestResult::Fail {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            None => TestResult::Error {
                message: "Invalid expected format".to_string(),
            },
        }
    }

    /// Parse receiver and element, push, render, and check the text.
    ///
    /// An empty `receiver` string parses to Undefined, which exercises the
    /// promotion policy from the empty state.
    fn run_append(&self, vector: &TestVector) -> TestResult {
        let (receiver_raw, element_raw) = match (
            vector.input.get("receiver").and_then(|v| v.as_str()),
            vector.input.get("element").and_then(|v| v.as_str()),
        ) {
            (Some(r), Some(e)) => (r, e),
            _ => {
                return TestResult::Error {
                    message: "Missing 'receiver' or 'element' in input".to_string(),
                }
            }
        };

        let mut receiver: Value = match parse_value(receiver_raw) {
            Ok(v) => v,
            Err(e) => {
                return TestResult::Error {
                    message: format!("Receiver failed to parse: {e}"),
                }
            }
        };
        let element = match parse_value(element_raw) {
            Ok(v) => v,
            Err(e) => {
                return TestResult::Error {
                    message: format!("Element failed to parse: {e}"),
                }
            }
        };

        receiver.push(element);
        let actual = write(&receiver);

        match vector.expected.get("ok").and_then(|v| v.as_str()) {
            Some(expected) if expected == actual => TestResult::Pass,
            Some(expected) => TestResult::Fail {
                expected: expected.to_string(),
                actual,
            },
            None => TestResult::Error {
                message: "Invalid expected format".to_string(),
            },
        }
    }
}
