mod common;

use common::TestEnv;
use serde_json::json;

fn ranges(env: &TestEnv, args: &[&str]) -> common::TestResult {
    let mut full = vec!["ranges", "--form", "form.json"];
    full.extend_from_slice(args);
    env.run(&full)
}

fn stored(env: &TestEnv) -> serde_json::Value {
    env.read_json("form.json")["properties"]["graduatedRanges"].clone()
}

#[test]
fn show_on_missing_form_renders_default_rows_without_writing() {
    let env = TestEnv::new();
    let result = ranges(&env, &["show"]);

    assert!(result.is_success(), "{}", result.stderr);
    assert!(result.stdout.contains("[RANGES] Tariff Ranges"));
    assert!(result.stdout.contains("inf"));
    assert!(result.stdout.contains("  1 x 0 + 0 = 0"));
    assert!(!env.path("form.json").exists());
}

#[test]
fn add_seeds_then_inserts_before_last_row() {
    let env = TestEnv::new();
    let result = ranges(&env, &["add"]);

    assert!(result.is_success(), "{}", result.stderr);
    assert!(result.stdout.contains("[OK] Added range"));
    assert_eq!(
        stored(&env),
        json!([
            { "fromValue": "0", "toValue": "1" },
            { "fromValue": "2", "toValue": "3" },
            { "fromValue": "4", "toValue": null }
        ])
    );
}

#[test]
fn update_to_value_cascades() {
    let env = TestEnv::new();
    let result = ranges(&env, &["update", "0", "toValue", "4"]);

    assert!(result.is_success(), "{}", result.stderr);
    assert_eq!(
        stored(&env),
        json!([
            { "fromValue": "0", "toValue": "4" },
            { "fromValue": "5", "toValue": null }
        ])
    );
}

#[test]
fn update_rate_is_stored_as_decimal_text() {
    let env = TestEnv::new();
    ranges(&env, &["update", "1", "rate", "0.50"]);

    assert_eq!(stored(&env)[1]["rate"], "0.5");
}

#[test]
fn edits_keep_other_form_fields() {
    let env = TestEnv::new();
    env.write(
        "form.json",
        r#"{"name":"Storage","properties":{"graduatedRanges":[{"fromValue":"0","toValue":"10","rate":"1"},{"fromValue":"11","toValue":null,"rate":"0.5"}]}}"#,
    );

    let result = ranges(&env, &["delete", "1"]);

    assert!(result.is_success(), "{}", result.stderr);
    let form = env.read_json("form.json");
    assert_eq!(form["name"], "Storage");
    assert_eq!(
        form["properties"]["graduatedRanges"],
        json!([{ "fromValue": "0", "toValue": null, "rate": "1" }])
    );
}

#[test]
fn deleting_first_row_fails_with_hint() {
    let env = TestEnv::new();
    let result = ranges(&env, &["delete", "0"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("range 0 cannot be deleted"));
    assert!(result.stderr.contains("FIX: The first range is always kept"));
}

#[test]
fn disabled_table_refuses_deletes() {
    let env = TestEnv::new();
    ranges(&env, &["add"]);

    let result = ranges(&env, &["--disabled", "delete", "1"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(stored(&env).as_array().map(Vec::len), Some(3));
}

#[test]
fn setting_upper_bound_of_last_row_is_rejected() {
    let env = TestEnv::new();
    let result = ranges(&env, &["update", "1", "toValue", "9"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("open-ended"));
}

#[test]
fn custom_field_path_is_honoured() {
    let env = TestEnv::new();
    let result = ranges(&env, &["--field", "charges.0.ranges", "add"]);

    assert!(result.is_success(), "{}", result.stderr);
    let form = env.read_json("form.json");
    assert_eq!(form["charges"][0]["ranges"].as_array().map(Vec::len), Some(3));
}

#[test]
fn check_reports_gaps_and_fails() {
    let env = TestEnv::new();
    env.write(
        "form.json",
        r#"{"properties":{"graduatedRanges":[{"fromValue":"0","toValue":"5"},{"fromValue":"8","toValue":null}]}}"#,
    );

    let result = ranges(&env, &["check"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("range 1 starts at 8 but should start at 6"));
}

#[test]
fn check_passes_on_default_rows() {
    let env = TestEnv::new();
    let result = ranges(&env, &["check"]);

    assert!(result.is_success());
    assert!(result.stdout.contains("[OK] Ranges are contiguous"));
}

#[test]
fn json_mode_emits_snapshot() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "ranges", "--form", "form.json", "add"]);

    assert!(result.is_success(), "{}", result.stderr);
    let data = result.event("data");
    assert_eq!(data["command"], "ranges");
    assert_eq!(data["field"], "properties.graduatedRanges");
    assert_eq!(data["rows"][0]["disabledDelete"], true);
    assert_eq!(data["rows"][2]["toValue"], serde_json::Value::Null);
    assert_eq!(data["infos"][1]["units"], 1);
    assert!(data["violations"].as_array().unwrap().is_empty());
    assert_eq!(result.event("complete")["success"], true);
}

#[test]
fn json_mode_reports_errors_as_events() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "ranges", "--form", "form.json", "delete", "7"]);

    assert_eq!(result.exit_code, 1);
    let error = result.event("error");
    assert_eq!(error["code"], "RANGE_INDEX_OUT_OF_BOUNDS");
    assert!(error["help"].as_str().unwrap().contains("between 0 and 1"));
}

#[test]
fn corrupt_form_is_reported() {
    let env = TestEnv::new();
    env.write("form.json", "{ not json");

    let result = ranges(&env, &["show"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid form state"));
}
