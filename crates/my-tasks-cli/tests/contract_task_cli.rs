use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn bin(name: &str) -> Command {
    #[allow(deprecated)]
    Command::cargo_bin(name).expect("binary")
}

fn write_params(dir: &Path, params: &Value) -> PathBuf {
    let path = dir.join("params.json");
    fs::write(&path, serde_json::to_string(params).unwrap()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    if !path.exists() {
        panic!("{} missing", path.display());
    }
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).expect("Invalid JSON")
}

fn base_params(out: &Path) -> Value {
    json!({
        "input_paths": ["a.txt"],
        "output_path": out,
        "message": "hi",
        "myarg2": true,
        "myarg3": 7
    })
}

#[test]
fn test_task2_writes_dump_and_metadata() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out.txt");
    let params = write_params(temp.path(), &base_params(&out));
    let meta = temp.path().join("meta.json");

    bin("task2")
        .arg("-j")
        .arg(&params)
        .arg("--metadata-out")
        .arg(&meta)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 5);
    assert!(text.starts_with("input_paths=[\"a.txt\"]\n"));
    assert_eq!(read_json(&meta), json!({"I did": "nothing"}));
    assert_eq!(fs::read_to_string(&meta).unwrap(), r#"{"I did":"nothing"}"#);
}

#[test]
fn test_task3_writes_sibling_json() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out.txt");
    let mut params = base_params(&out);
    params["my_dict_arg"] = json!({"k": "v"});
    let params = write_params(temp.path(), &params);
    let meta = temp.path().join("meta.json");

    bin("task3")
        .arg("--json")
        .arg(&params)
        .arg("--metadata-out")
        .arg(&meta)
        .assert()
        .success();

    assert_eq!(
        read_json(&temp.path().join("out.json")),
        json!({"k": "v", "something": "new"})
    );
    assert_eq!(read_json(&meta), json!({"I did": "nothing", "at": "all"}));
}

#[test]
fn test_task3_dump_matches_task2_lines_and_keeps_dict_order() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out.txt");
    let params_path = temp.path().join("params.json");
    let raw = format!(
        r#"{{"input_paths":["a.txt"],"output_path":{},"message":"hi","myarg2":true,"myarg3":7,"my_dict_arg":{{"z":"1","a":"2"}}}}"#,
        serde_json::to_string(&out).unwrap()
    );
    fs::write(&params_path, raw).unwrap();
    let meta = temp.path().join("meta.json");

    bin("task3")
        .arg("-j")
        .arg(&params_path)
        .arg("--metadata-out")
        .arg(&meta)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    let names: Vec<&str> = text
        .lines()
        .map(|l| l.split_once('=').unwrap().0)
        .collect();
    assert_eq!(
        names,
        ["input_paths", "output_path", "message", "myarg2", "myarg3"]
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("out.json")).unwrap(),
        r#"{"z":"1","a":"2","something":"new"}"#
    );
}

#[test]
fn test_multiplexer_subcommand_matches_standalone() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out.txt");
    let params = write_params(temp.path(), &base_params(&out));
    let meta = temp.path().join("meta.json");

    bin("my-tasks")
        .arg("task2")
        .arg("-j")
        .arg(&params)
        .arg("--metadata-out")
        .arg(&meta)
        .assert()
        .success();

    assert_eq!(read_json(&meta), json!({"I did": "nothing"}));
}

#[test]
fn test_missing_key_exits_config_error_without_metadata() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out.txt");
    // task3 requires my_dict_arg
    let params = write_params(temp.path(), &base_params(&out));
    let meta = temp.path().join("meta.json");

    bin("task3")
        .arg("-j")
        .arg(&params)
        .arg("--metadata-out")
        .arg(&meta)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("my_dict_arg"));

    assert!(!meta.exists(), "metadata must not be written on failure");
    assert!(!out.exists());
}

#[test]
fn test_unknown_key_is_rejected() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out.txt");
    let mut params = base_params(&out);
    params["my_dict_arg"] = json!({});
    let params = write_params(temp.path(), &params);
    let meta = temp.path().join("meta.json");

    bin("task2")
        .arg("-j")
        .arg(&params)
        .arg("--metadata-out")
        .arg(&meta)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown field `my_dict_arg`"));

    assert!(!meta.exists());
}

#[test]
fn test_missing_params_file() {
    let temp = tempdir().unwrap();

    bin("task2")
        .arg("-j")
        .arg(temp.path().join("absent.json"))
        .arg("--metadata-out")
        .arg(temp.path().join("meta.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read parameter file"));
}

#[test]
fn test_unwritable_output_exits_task_failed() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("missing-dir/out.txt");
    let params = write_params(temp.path(), &base_params(&out));
    let meta = temp.path().join("meta.json");
    fs::write(&meta, "previous").unwrap();

    bin("task2")
        .arg("-j")
        .arg(&params)
        .arg("--metadata-out")
        .arg(&meta)
        .assert()
        .code(1);

    assert_eq!(fs::read_to_string(&meta).unwrap(), "previous");
}

#[test]
fn test_missing_flag_is_usage_error() {
    bin("task2")
        .arg("-j")
        .arg("params.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--metadata-out"));
}

#[test]
fn test_list_reports_registered_tasks() {
    let output = bin("my-tasks").arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let tasks: Value = serde_json::from_str(&stdout).expect("list output must be JSON");

    let names: Vec<&str> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["task2", "task3"]);
    assert_eq!(tasks[1]["parameters"][5], "my_dict_arg");
}
