// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::{bail, Result};
use regex_shape::*;
use serde::{Deserialize, Serialize};
use std::env;
use test_generator::test_resources;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
struct Case {
    pub note: String,
    // Delimited literal passed to get_group_keys.
    pub pattern: Option<String>,
    // Inner pattern passed to extract_group_keys.
    pub inner: Option<String>,
    pub stripped: Option<String>,
    pub keys: Option<Vec<GroupKey>>,
    pub error: Option<String>,
    pub message: Option<String>,
    // preg_match arguments; null marks an argument that is not statically known.
    pub args: Option<Vec<Option<Scalar>>>,
    pub shape: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Test {
    cases: Vec<Case>,
}

fn check_error(case: &Case, err: ShapeError) -> Result<()> {
    let Some(expected) = &case.error else {
        bail!("unexpected error `{err}`");
    };
    if err.kind().as_str() != expected {
        bail!("expected {expected} error, got {:?}", err);
    }
    if let Some(message) = &case.message {
        let actual = err.to_string();
        if !actual.contains(message.as_str()) {
            bail!("Error message\n`{actual}\n`\ndoes not contain `{message}`");
        }
    }
    Ok(())
}

fn check_keys(case: &Case, result: core::result::Result<GroupKeys, ShapeError>) -> Result<()> {
    match result {
        Ok(keys) => match &case.keys {
            Some(expected) => assert_eq!(keys.as_slice(), expected.as_slice()),
            None => bail!("expected {:?} error, got keys {keys:?}", case.error),
        },
        Err(err) => check_error(case, err)?,
    }
    Ok(())
}

fn run_case(case: &Case) -> Result<()> {
    if let Some(pattern) = &case.pattern {
        if let Some(stripped) = &case.stripped {
            assert_eq!(&strip_delimiters(pattern)?, stripped);
        }
        check_keys(case, get_group_keys(pattern))?;
        // Pure function of its input.
        assert_eq!(get_group_keys(pattern), get_group_keys(pattern));
    }

    if let Some(inner) = &case.inner {
        check_keys(case, extract_group_keys(inner))?;
    }

    if let Some(args) = &case.args {
        let Some(expected) = &case.shape else {
            bail!("args given without expected shape");
        };
        let shape = infer_match_shape(args, &FoldedArguments);
        assert_eq!(&shape.to_string(), expected);
    }

    Ok(())
}

fn yaml_test_impl(file: &str) -> Result<()> {
    println!("\nrunning {file}");

    let yaml = std::fs::read_to_string(file)?;
    let test: Test = serde_yaml::from_str(&yaml)?;

    for case in &test.cases {
        print!("case {} ", &case.note);
        if let Err(e) = run_case(case) {
            bail!("case `{}` failed: {e}", case.note);
        }
        println!("passed");
    }

    println!("{} cases passed.", test.cases.len());
    Ok(())
}

fn yaml_test(file: &str) -> Result<()> {
    match yaml_test_impl(file) {
        Ok(_) => Ok(()),
        Err(e) => {
            // If Err is returned, it doesn't always get printed by cargo test.
            // Therefore, panic with the error.
            panic!("{}", e);
        }
    }
}

#[test]
#[ignore = "intended for running a single yaml file"]
fn one_yaml() -> Result<()> {
    let mut file = String::default();
    for a in env::args() {
        if a.ends_with(".yaml") {
            file = a;
            break;
        }
    }

    if file.is_empty() {
        bail!("missing yaml test file");
    }

    yaml_test(file.as_str())
}

#[test_resources("tests/inference/cases/*.yaml")]
fn run(path: &str) {
    yaml_test(path).unwrap()
}
