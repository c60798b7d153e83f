//! Scenario: a build produced a broken VFS document.

use crate::common::*;

#[test]
fn scenario_dangling_reference_fails_check() {
    let env = TestEnv::new();
    env.write(
        "vfs.json",
        &node("/r", "r", vec![copy("/r/gone")], vec![]).to_string(),
    );

    let result = env.run(&["check", "--input", "vfs.json"]);

    assert!(!result.success);
    assert!(
        result
            .stderr
            .contains("dangling reference to '/r/gone' from copy element in '/r'"),
        "unexpected error:\n{}",
        result.stderr
    );
}

#[test]
fn scenario_parent_traversal_is_rejected() {
    let env = TestEnv::with_dist();

    let result = env.run(&["flatten", "--input", "data/02-vfs.json", "--path", "../etc"]);

    assert!(!result.success);
    assert!(result.stderr.contains("parent traversal is not supported"));
}

#[test]
fn scenario_missing_config_file_fails() {
    let env = TestEnv::with_dist();

    let result = env.run(&["run", "--config", "nope.toml"]);

    assert!(!result.success);
    assert!(result.stderr.contains("failed to load configuration"));
}
