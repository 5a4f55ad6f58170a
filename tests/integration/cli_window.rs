//! End-to-end tests of the pagewin binary commands.

use super::test_utils::{stderr, stdout, Sandbox};

#[test]
fn test_window_text_output() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["window", "--current", "5", "--total", "10"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "1 ... 4 [5] 6 ... 10");
}

#[test]
fn test_window_json_output() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[
        "window", "--current", "8", "--total", "10", "--format", "json",
    ]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["window"], serde_json::json!([1, "...", 6, 7, 8, 9, 10]));
}

#[test]
fn test_window_rejects_out_of_range_page() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--quiet", "window", "--current", "12", "--total", "10"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("current_page"),
        "stderr={}",
        stderr(&output)
    );
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_window_unchecked_runs_raw_calculator() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[
        "--quiet", "window", "--current", "12", "--total", "10", "--unchecked",
    ]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "1 ... 6 7 8 9 10");
}

#[test]
fn test_pages_uses_workspace_config() {
    let sandbox = Sandbox::new();
    sandbox.write(
        "ws/config/config.toml",
        "[display]\nellipsis = \"~\"\nhighlight_current = false\n\n[paging]\nper_page = 4\n",
    );
    let output = sandbox.run(&["pages", "--items", "40", "--page", "6"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Items 21-24 of 40 (page 6 of 10, 4 per page)\n1 ~ 5 6 7 ~ 10"
    );
}

#[test]
fn test_env_override_beats_workspace_file() {
    let sandbox = Sandbox::new();
    sandbox.write("ws/config/config.toml", "[paging]\nper_page = 4\n");
    let output = sandbox
        .command()
        .env("PAGEWIN__PAGING__PER_PAGE", "20")
        .args(["pages", "--items", "40", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr={}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["per_page"], 20);
    assert_eq!(value["total_pages"], 2);
}

#[test]
fn test_config_show_reflects_global_file() {
    let sandbox = Sandbox::new();
    sandbox.write("config/pagewin/config.toml", "[display]\ndefault_format = \"json\"\n");
    let output = sandbox.run(&["config", "show"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["display"]["default_format"], "json");
}

#[test]
fn test_invalid_config_fails_fast() {
    let sandbox = Sandbox::new();
    let config = sandbox.write("bad.toml", "[paging]\nper_page = 0\n");
    let output = sandbox
        .command()
        .arg("--config")
        .arg(&config)
        .args(["window", "--current", "1", "--total", "3"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("per_page"));
}

#[test]
fn test_config_path_reports_env_specific_workspace_file() {
    let sandbox = Sandbox::new();
    sandbox.write("ws/config/staging.toml", "[paging]\nper_page = 7\n");
    let path_output = sandbox
        .command()
        .env("PAGEWIN_ENV", "staging")
        .args(["config", "path"])
        .output()
        .unwrap();
    assert!(path_output.status.success(), "stderr={}", stderr(&path_output));
    let expected = sandbox.workspace().join("config").join("staging.toml");
    assert!(
        stdout(&path_output).contains(&format!("workspace (staging): {}", expected.display())),
        "stdout={}",
        stdout(&path_output)
    );

    let show_output = sandbox
        .command()
        .env("PAGEWIN_ENV", "staging")
        .args(["config", "show", "--format", "json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout(&show_output)).unwrap();
    assert_eq!(value["paging"]["per_page"], 7);
}

#[test]
fn test_config_show_table_format() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["config", "show", "--format", "table"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("display.highlight_current"));
    assert!(!out.contains("[display]"));
}
