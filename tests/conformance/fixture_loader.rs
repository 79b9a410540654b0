#![allow(clippy::expect_used)]

/// Fixture loader
///
/// Test data format: a JSON array of comments (strings) and case objects.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// A query string parsing case
    FromString {
        #[serde(default)]
        initial: Vec<(String, String)>,
        input: String,
        #[serde(default)]
        encode: bool,
        #[serde(default)]
        strict: bool,
        #[serde(default)]
        entries: Option<Vec<(String, String)>>,
        #[serde(default)]
        rendered: Option<String>,
        #[serde(default)]
        failure: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn fail(
        &mut self,
        test_num: usize,
        input: &str,
        field: &str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) {
        self.failures.push(FixtureFailure {
            test_num,
            input: input.to_string(),
            field: field.to_string(),
            expected: expected.into(),
            actual: actual.into(),
        });
    }
}

/// Load the bundled `from_string.json` cases
pub fn load_from_string_cases() -> Vec<TestCase> {
    let data = include_str!("../fixtures/from_string.json");
    serde_json::from_str(data).expect("fixture file is valid JSON")
}
