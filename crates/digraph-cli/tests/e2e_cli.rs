//! End-to-end tests for the `dg` binary.
//!
//! Each test writes a graph to a temp dir (or pipes it on stdin) and checks
//! both the pretty and JSON renderings of one command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TRIANGLE: &str = "3 3\n1 2\n2 3\n3 1\n";
const CHAIN: &str = "3 2\n1 2\n2 3\n";
const ISLANDS: &str = "4 2\n1 2\n3 4\n";
const MIXED: &str = "6 7\n1 2\n2 3\n3 1\n3 4\n4 5\n5 4\n5 6\n";
const WEIGHTED: &str = "3 3\n1 2 4\n2 3 1.5\n1 3 10\n";

fn dg_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dg"));
    cmd.env("DIGRAPH_LOG", "error");
    cmd
}

fn write_file(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("write fixture");
    path
}

/// Run `dg <args> --json` with `graph` on stdin and parse stdout.
fn dg_json(graph: &str, args: &[&str]) -> Value {
    let output = dg_cmd()
        .args(args)
        .arg("--json")
        .write_stdin(graph)
        .output()
        .expect("dg should not crash");
    assert!(
        output.status.success(),
        "dg {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

// ---------------------------------------------------------------------------
// convert
// ---------------------------------------------------------------------------

#[test]
fn convert_adjacency_counts_self_loop() {
    dg_cmd()
        .arg("convert")
        .write_stdin("1 1\n1 1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Adjacency matrix")
                .and(predicate::str::ends_with("\n1\n")),
        );

    let json = dg_json("1 1\n1 1\n", &["convert", "--form", "incidence"]);
    assert_eq!(json["rows"], json!([[2]]));
}

#[test]
fn convert_degrees_and_list() {
    let json = dg_json(CHAIN, &["convert", "--form", "degrees"]);
    assert_eq!(json["in_degree"], json!([0, 1, 1]));
    assert_eq!(json["out_degree"], json!([1, 1, 0]));

    let json = dg_json(CHAIN, &["convert", "--form", "list"]);
    assert_eq!(json["neighbors"], json!([[2], [3], []]));

    dg_cmd()
        .args(["convert", "--form", "list"])
        .write_stdin(CHAIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("1: 2\n2: 3\n"));
}

#[test]
fn convert_edges_normalizes_text() {
    dg_cmd()
        .args(["convert", "--form", "edges"])
        .write_stdin("\n3   2\n1 2\n\n 2 3 \n")
        .assert()
        .success()
        .stdout(CHAIN);
}

#[test]
fn convert_reads_input_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_file(dir.path(), "graph.txt", TRIANGLE);
    dg_cmd()
        .args(["convert", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 1 0\n0 0 1\n1 0 0\n"));
}

// ---------------------------------------------------------------------------
// traverse / distances / reach
// ---------------------------------------------------------------------------

#[test]
fn traverse_bfs_and_dfs_orders() {
    dg_cmd()
        .args(["traverse", "--source", "3"])
        .write_stdin(MIXED)
        .assert()
        .success()
        .stdout("3 1 4 2 5 6\n");

    dg_cmd()
        .args(["traverse", "--order", "dfs", "--source", "3"])
        .write_stdin(MIXED)
        .assert()
        .success()
        .stdout("3 4 5 6 1 2\n");
}

#[test]
fn traverse_trace_reports_frontier() {
    let json = dg_json(MIXED, &["traverse", "--source", "3", "--trace"]);
    let steps = json["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0]["vertex"], 3);
    assert_eq!(steps[0]["frontier"], json!([1, 4]));
    assert_eq!(steps[5]["frontier"], json!([]));
}

#[test]
fn distances_use_sentinel_in_text_and_null_in_json() {
    dg_cmd()
        .args(["distances", "--source", "1"])
        .write_stdin(ISLANDS)
        .assert()
        .success()
        .stdout("0 1 1000000007 1000000007\n");

    let json = dg_json(ISLANDS, &["distances", "--source", "1"]);
    assert_eq!(json["source"], 1);
    assert_eq!(json["rows"], json!([[0, 1, null, null]]));
}

#[test]
fn distances_without_source_is_all_pairs() {
    let json = dg_json(CHAIN, &["distances"]);
    assert_eq!(
        json["rows"],
        json!([[0, 1, 2], [null, 0, 1], [null, null, 0]])
    );
    assert!(json.get("source").is_none());
}

#[test]
fn reach_prints_bits() {
    dg_cmd()
        .args(["reach", "--source", "1"])
        .write_stdin(ISLANDS)
        .assert()
        .success()
        .stdout("1 1 0 0\n");
}

// ---------------------------------------------------------------------------
// cycles / toposort / scc
// ---------------------------------------------------------------------------

#[test]
fn cycles_lists_triangle() {
    dg_cmd()
        .arg("cycles")
        .write_stdin(TRIANGLE)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cycles (1)").and(predicate::str::contains("2 3 1 2")),
        );
}

#[test]
fn cycles_on_dag_reports_none() {
    dg_cmd()
        .arg("cycles")
        .write_stdin(CHAIN)
        .assert()
        .success()
        .stdout("no cycles\n");
}

#[test]
fn cycles_limit_from_config_and_flag_override() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_file(dir.path(), "digraph.toml", "[cycles]\nlimit = 1\n");
    let graph = write_file(dir.path(), "graph.txt", MIXED);

    let output = dg_cmd()
        .args(["cycles", "--json", "--config"])
        .arg(&config)
        .arg("--input")
        .arg(&graph)
        .output()
        .expect("dg should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["limit"], 1);
    assert_eq!(json["cycles"], json!([[2, 3, 1, 2]]));

    let output = dg_cmd()
        .args(["cycles", "--json", "--limit", "5", "--config"])
        .arg(&config)
        .arg("--input")
        .arg(&graph)
        .output()
        .expect("dg should not crash");
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["cycles"], json!([[2, 3, 1, 2], [5, 4, 5]]));
}

#[test]
fn toposort_chain_and_cycle() {
    dg_cmd()
        .arg("toposort")
        .write_stdin(CHAIN)
        .assert()
        .success()
        .stdout("1 2 3\n");

    dg_cmd()
        .arg("toposort")
        .write_stdin(TRIANGLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("graph has a cycle"));

    let json = dg_json(TRIANGLE, &["toposort"]);
    assert!(json["order"].is_null());
}

#[test]
fn scc_groups_in_discovery_order() {
    let json = dg_json(MIXED, &["scc"]);
    assert_eq!(json["components"], json!([[1, 3, 2], [4, 5], [6]]));

    dg_cmd()
        .arg("scc")
        .write_stdin(CHAIN)
        .assert()
        .success()
        .stdout("1\n2\n3\n");
}

// ---------------------------------------------------------------------------
// shortest / connectivity
// ---------------------------------------------------------------------------

#[test]
fn shortest_closure_and_base_edges() {
    let json = dg_json(MIXED, &["shortest"]);
    assert_eq!(json["rows"][0][5], 5);

    let json = dg_json(MIXED, &["shortest", "--base-edges"]);
    assert!(json["rows"][0][5].is_null());
    assert_eq!(json["rows"][2][4], 2);
}

#[test]
fn shortest_weighted_input() {
    let json = dg_json(WEIGHTED, &["shortest", "--weighted"]);
    assert_eq!(json["rows"][0][2], 5.5);
    assert!(json["rows"][2][0].is_null());

    dg_cmd()
        .args(["shortest", "--weighted"])
        .write_stdin(WEIGHTED)
        .assert()
        .success()
        .stdout(predicate::str::contains("inf"));
}

#[test]
fn connectivity_classes() {
    assert_eq!(dg_json(TRIANGLE, &["connectivity"])["class"], "strong");
    assert_eq!(dg_json(CHAIN, &["connectivity"])["class"], "one_sided");
    assert_eq!(dg_json("3 2\n1 3\n2 3\n", &["connectivity"])["class"], "weak");

    let json = dg_json(ISLANDS, &["connectivity"]);
    assert_eq!(json["class"], "disconnected");
    assert_eq!(json["weak"], false);

    dg_cmd()
        .arg("connectivity")
        .write_stdin(CHAIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("one-sided"));
}

// ---------------------------------------------------------------------------
// errors and config
// ---------------------------------------------------------------------------

#[test]
fn empty_graph_is_rejected_with_code() {
    dg_cmd()
        .arg("scc")
        .write_stdin("0 0\n")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("error[E1001]").and(predicate::str::contains("suggestion")),
        );
}

#[test]
fn empty_graph_allowed_by_config() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_file(dir.path(), "digraph.toml", "[input]\nreject_empty = false\n");

    let output = dg_cmd()
        .args(["scc", "--json", "--config"])
        .arg(&config)
        .write_stdin("0 0\n")
        .output()
        .expect("dg should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["components"], json!([]));
}

#[test]
fn zero_based_input_from_config() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_file(dir.path(), "digraph.toml", "[input]\none_based = false\n");

    dg_cmd()
        .arg("toposort")
        .arg("--config")
        .arg(&config)
        .write_stdin("3 2\n0 1\n1 2\n")
        .assert()
        .success()
        .stdout("1 2 3\n");
}

#[test]
fn malformed_input_reports_line_in_json() {
    let output = dg_cmd()
        .args(["toposort", "--json"])
        .write_stdin("3 2\n1 2\n")
        .output()
        .expect("dg should not crash");
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stderr).expect("JSON error on stderr");
    assert_eq!(json["error"]["error_code"], "E1002");
    assert!(
        json["error"]["message"]
            .as_str()
            .is_some_and(|m| m.contains("line 3"))
    );
}

#[test]
fn out_of_range_source_is_rejected() {
    dg_cmd()
        .args(["traverse", "--source", "9"])
        .write_stdin(CHAIN)
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2002"));

    dg_cmd()
        .args(["distances", "--source", "0"])
        .write_stdin(CHAIN)
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2002"));
}

#[test]
fn out_of_range_edge_is_rejected() {
    dg_cmd()
        .arg("scc")
        .write_stdin("2 1\n1 3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn missing_input_file_names_path() {
    dg_cmd()
        .args(["scc", "--input", "/nonexistent/graph.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/graph.txt"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let config = write_file(dir.path(), "digraph.toml", "[cycles]\nlimit = \"ten\"\n");

    dg_cmd()
        .arg("cycles")
        .arg("--config")
        .arg(&config)
        .write_stdin(TRIANGLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse analysis config"));
}

// ---------------------------------------------------------------------------
// completions
// ---------------------------------------------------------------------------

#[test]
fn completions_generate_for_bash() {
    dg_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dg"));
}
