#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Fixture runner
///
/// Runs the JSON cases against `QueryParameterSet::update_from_str`
use super::fixture_loader::{FixtureResult, TestCase, load_from_string_cases};
use qparams::{Options, QueryParameterSet};

pub fn run_from_string_cases(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::FromString {
            initial,
            input,
            encode,
            strict,
            entries,
            rendered,
            failure,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let options = Options::new().encode(encode).strict(strict);
        let mut params = QueryParameterSet::with_options(options);
        params.update(initial);
        let before = params.clone();

        match (params.update_from_str(&input).map(|_| ()), failure) {
            (Err(err), Some(expected)) => {
                let actual = format!("{:?}", err.kind());
                if actual != expected {
                    result.fail(test_num, &input, "failure", expected, actual);
                } else if params != before {
                    // Failed parses must leave the set untouched
                    result.fail(test_num, &input, "unchanged", format!("{before}"), params.to_string());
                } else {
                    result.passed += 1;
                }
                continue;
            }
            (Ok(()), Some(expected)) => {
                result.fail(test_num, &input, "failure", expected, "success");
                continue;
            }
            (Err(err), None) => {
                result.fail(test_num, &input, "parsing", "success", err.to_string());
                continue;
            }
            (Ok(()), None) => {}
        }

        if let Some(expected) = entries {
            let actual: Vec<(String, String)> = params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            if actual != expected {
                result.fail(
                    test_num,
                    &input,
                    "entries",
                    format!("{expected:?}"),
                    format!("{actual:?}"),
                );
                continue;
            }
        }

        if let Some(expected) = rendered {
            let actual = params.to_string();
            if actual != expected {
                result.fail(test_num, &input, "rendered", expected, actual);
                continue;
            }
        }

        result.passed += 1;
    }

    result
}

#[test]
fn test_from_string_fixtures() {
    let result = run_from_string_cases(load_from_string_cases());
    assert!(
        result.failures.is_empty(),
        "{} fixture failures: {:#?}",
        result.failures.len(),
        result.failures
    );
    assert!(result.passed > 0);
}
