//! Scenario: a developer runs distmodel in a project with a config file.

use crate::common::*;

#[test]
fn scenario_run_with_project_config() {
    let env = TestEnv::with_dist();
    env.write(
        "distmodel.toml",
        &format!("[output]\ndir = \"reports\"\n{}", DIST_PRUNE_TOML),
    );

    let result = env.run(&["run"]);

    assert!(result.success, "run failed:\n{}", result.combined_output());
    assert!(env.path("reports/03-flattened-vfs.txt").is_file());
    assert!(env.path("reports/04-idea-artifacts.json").is_file());
    assert!(
        result.stdout.contains("descriptors, 5 diagnostics"),
        "unexpected summary:\n{}",
        result.stdout
    );

    let descriptors = env.read("reports/04-idea-artifacts.json");
    assert!(!descriptors.contains("\"jps\""));
    // pretty by default
    assert!(descriptors.starts_with("{\n"));
}

#[test]
fn scenario_cli_flags_override_config() {
    let env = TestEnv::with_dist();
    env.write("distmodel.toml", "[output]\ndir = \"reports\"\npretty = false\n");

    let result = env.run(&["run", "--output-dir", "elsewhere"]);

    assert!(result.success, "run failed:\n{}", result.combined_output());
    assert!(env.path("elsewhere/04-idea-artifacts.json").is_file());
    assert!(!env.path("reports").exists());
    assert!(env
        .read("elsewhere/04-idea-artifacts.json")
        .starts_with("{\"type\":\"DIR\""));
}

#[test]
fn scenario_env_overrides_output_dir() {
    let env = TestEnv::with_dist();

    let result = env.run_with_env(&["run"], &[("DISTMODEL_OUTPUT_DIR", "from-env")]);

    assert!(result.success, "run failed:\n{}", result.combined_output());
    assert!(env.path("from-env/04-idea-artifacts.json").is_file());
}

#[test]
fn scenario_unknown_config_key_warns_but_runs() {
    let env = TestEnv::with_dist();
    env.write("distmodel.toml", "[output]\nprety = true\n");

    let result = env.run(&["run"]);

    assert!(result.success, "run failed:\n{}", result.combined_output());
    assert!(
        result.stderr.contains("unknown config key 'output.prety'"),
        "missing warning:\n{}",
        result.stderr
    );
}

#[test]
fn scenario_flatten_prints_tree_report() {
    let env = TestEnv::with_dist();

    let result = env.run(&[
        "flatten",
        "--input",
        "data/02-vfs.json",
        "--path",
        "dist/kotlinc",
    ]);

    assert!(result.success, "flatten failed:\n{}", result.combined_output());
    let root = env.root_str();
    assert!(result
        .stdout
        .starts_with(&format!("{}/dist/kotlinc:\n", root)));
    assert!(result.stdout.contains("COMPILE OUTPUT :compiler"));
}

#[test]
fn scenario_flatten_writes_document() {
    let env = TestEnv::with_dist();

    let result = env.run(&[
        "flatten",
        "-i",
        "data/02-vfs.json",
        "-p",
        "dist/kotlinc",
        "-o",
        "flat/kotlinc.json",
    ]);

    assert!(result.success, "flatten failed:\n{}", result.combined_output());
    let written: serde_json::Value =
        serde_json::from_str(&env.read("flat/kotlinc.json")).unwrap();
    assert_eq!(written["name"], "kotlinc");
}
