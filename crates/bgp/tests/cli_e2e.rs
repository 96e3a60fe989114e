//! CLI end-to-end tests.
//!
//! These tests run the `bgp` binary against a temporary catalog and an
//! isolated config file, driving the shell through stdin.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {"name": "Azul", "id": 1, "min_players": 2, "max_players": 4, "min_play_time": 30, "max_play_time": 45, "difficulty": 1.8, "rank": 50, "rating": 7.8, "year_published": 2017},
  {"name": "Catan", "id": 2, "min_players": 3, "max_players": 4, "min_play_time": 60, "max_play_time": 120, "difficulty": 2.3, "rank": 400, "rating": 7.1, "year_published": 1995},
  {"name": "Go", "id": 3, "min_players": 2, "max_players": 2, "min_play_time": 30, "max_play_time": 30, "difficulty": 8.0, "rank": 100, "rating": 7.5, "year_published": -2000},
  {"name": "Gloomhaven", "id": 4, "min_players": 1, "max_players": 4, "min_play_time": 60, "max_play_time": 120, "difficulty": 3.9, "rank": 3, "rating": 8.7, "year_published": 2017},
  {"name": "Pandemic", "id": 5, "min_players": 2, "max_players": 4, "min_play_time": 45, "max_play_time": 45, "difficulty": 2.4, "rank": 100, "rating": 7.6, "year_published": 2008}
]"#;

/// A scratch directory holding a catalog and a config path.
struct CliContext {
    dir: TempDir,
}

impl CliContext {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("games.json"), CATALOG).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bgp"));
        cmd.env("BGP_CATALOG", self.path("games.json"))
            .env("BGP_CONFIG", self.path("config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .current_dir(self.dir.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let output = self.run(&full);
        assert!(output.status.success(), "{}", stderr(&output));
        serde_json::from_slice(&output.stdout).unwrap()
    }

    fn shell(&self, script: &str) -> Output {
        let mut child = self
            .command()
            .arg("shell")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(script.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn names(json: &Value) -> Vec<String> {
    json["games"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap().to_string())
        .collect()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_filter_json_sorted_by_name() {
    let ctx = CliContext::new();
    let json = ctx.run_json(&["filter", "maxPlayers>=4"]);
    assert_eq!(json["count"], 4);
    assert_eq!(names(&json), vec!["Azul", "Catan", "Gloomhaven", "Pandemic"]);
}

#[test]
fn test_filter_with_sort_and_limit() {
    let ctx = CliContext::new();
    let json = ctx.run_json(&["filter", "", "--sort", "rating", "--desc", "--limit", "2"]);
    assert_eq!(names(&json), vec!["Gloomhaven", "Azul"]);
}

#[test]
fn test_filter_reports_dropped_clauses() {
    let ctx = CliContext::new();
    let json = ctx.run_json(&["filter", "colour==red, name~=go"]);
    assert_eq!(names(&json), vec!["Go"]);
    assert_eq!(json["filters"].as_array().unwrap().len(), 1);
    assert!(json["rejected"][0]
        .as_str()
        .unwrap()
        .contains("unknown column 'colour'"));
}

#[test]
fn test_filter_table_output() {
    let ctx = CliContext::new();
    let output = ctx.run(&["filter", "name==catan"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Catan"));
    assert!(!out.contains("Azul"));
}

#[test]
fn test_missing_catalog_fails() {
    let ctx = CliContext::new();
    let output = ctx
        .command()
        .env("BGP_CATALOG", ctx.path("missing.json"))
        .args(["--json", "filter", ""])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    let err: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], "CATALOG_ERROR");
}

#[test]
fn test_shell_progressive_filter_and_save() {
    let ctx = CliContext::new();
    let output = ctx.shell(
        "filter maxPlayers>=4\n\
         filter difficulty<3\n\
         sort rating desc\n\
         list add 1-2\n\
         list add azul\n\
         list count\n\
         list save\n\
         exit\n",
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Added 0. List has 2."));
    assert_eq!(read(&ctx.path("games_list.txt")), "Azul\nPandemic\n");
}

#[test]
fn test_shell_reset_and_remove() {
    let ctx = CliContext::new();
    let out_file = ctx.path("picks.txt");
    let script = format!(
        "filter name==Go\nreset\nlist add all\nlist remove 2-3\nlist save {}\n",
        out_file.display()
    );
    let output = ctx.shell(&script);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Filters cleared (5 games)."));
    assert_eq!(read(&out_file), "Azul\nGo\nPandemic\n");
}

#[test]
fn test_shell_reports_errors_and_continues() {
    let ctx = CliContext::new();
    let output = ctx.shell("list remove 1\nbogus\nlist add 9\nlist add Go\nlist count\n");
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("game list is empty"));
    assert!(err.contains("unknown command 'bogus'"));
    assert!(stdout(&output).trim_end().ends_with('1'));
}

#[test]
fn test_list_fields() {
    let ctx = CliContext::new();
    let json = ctx.run_json(&["list-fields"]);
    let columns: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["column"].as_str().unwrap())
        .collect();
    assert!(columns.contains(&"name"));
    assert!(columns.contains(&"maxTime"));
}

#[test]
fn test_config_set_then_filter_uses_sort() {
    let ctx = CliContext::new();
    assert!(ctx.run(&["config", "set", "sort.field", "year"]).status.success());
    assert!(ctx
        .run(&["config", "set", "sort.ascending", "false"])
        .status
        .success());
    assert!(read(&ctx.path("config.toml")).contains("field = \"year\""));

    let json = ctx.run_json(&["filter", "year<2010"]);
    assert_eq!(names(&json), vec!["Pandemic", "Catan", "Go"]);
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let ctx = CliContext::new();
    let output = ctx.run(&["config", "set", "theme", "dark"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_config_path_honours_env() {
    let ctx = CliContext::new();
    let output = ctx.run(&["config", "path"]);
    assert_eq!(
        stdout(&output).trim(),
        ctx.path("config.toml").display().to_string()
    );
}
