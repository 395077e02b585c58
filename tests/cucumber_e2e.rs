use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use cucumber::{World as _, given, then, when};
use tempfile::TempDir;

#[derive(Debug, Default, cucumber::World)]
struct TestWorld {
    dir: Option<TempDir>,
    graph_path: Option<PathBuf>,
    last_cmd: Option<Output>,
}

fn exe() -> &'static str {
    env!("CARGO_BIN_EXE_digraph-scc-analyzer")
}

fn run_cmd(args: Vec<String>) -> Output {
    Command::new(exe())
        .args(args)
        .output()
        .expect("failed to run analyzer binary")
}

fn stderr_string(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

fn write_graph(world: &mut TestWorld, name: &str, body: &str) {
    let dir = world.dir.as_ref().expect("temp dir");
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write graph fixture");
    world.graph_path = Some(path);
}

#[given("a temp graphs workspace")]
fn a_temp_graphs_workspace(world: &mut TestWorld) {
    world.dir = Some(tempfile::tempdir().expect("tempdir"));
}

#[given("an edge-list file with two bridged cycles")]
fn an_edge_list_file_with_two_bridged_cycles(world: &mut TestWorld) {
    // 0 <-> 1 -> 2 <-> 3
    write_graph(world, "cycles.txt", "4 5\n0 1\n1 0\n1 2\n2 3\n3 2\n");
}

#[given("an edge-list file with a malformed line")]
fn an_edge_list_file_with_a_malformed_line(world: &mut TestWorld) {
    write_graph(world, "bad.txt", "3 2\n0 1\n1 2 2\n");
}

#[when("I run graphs analyze on the file")]
fn i_run_graphs_analyze_on_the_file(world: &mut TestWorld) {
    let graph_path = world.graph_path.as_ref().expect("graph file");

    let out = run_cmd(vec![
        "graphs".to_string(),
        "analyze".to_string(),
        "--in".to_string(),
        graph_path.to_string_lossy().into_owned(),
    ]);
    world.last_cmd = Some(out);
}

#[when("I run graphs analyze on the file with event output")]
fn i_run_graphs_analyze_on_the_file_with_event_output(world: &mut TestWorld) {
    let graph_path = world.graph_path.as_ref().expect("graph file");

    let out = run_cmd(vec![
        "graphs".to_string(),
        "analyze".to_string(),
        "--in".to_string(),
        graph_path.to_string_lossy().into_owned(),
        "--emit-events".to_string(),
    ]);
    world.last_cmd = Some(out);
}

#[then("the command succeeds")]
fn the_command_succeeds(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        out.status.success(),
        "command failed (status={:?})\nstderr:\n{}\nstdout:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr),
        String::from_utf8_lossy(&out.stdout)
    );
}

#[then("the command fails")]
fn the_command_fails(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    assert!(
        !out.status.success(),
        "expected failure but succeeded; stderr: {}",
        stderr_string(out)
    );
}

#[then(expr = "stderr mentions {string}")]
fn stderr_mentions(world: &mut TestWorld, needle: String) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stderr = stderr_string(out);
    assert!(
        stderr.contains(&needle),
        "stderr did not contain {needle:?}. stderr was:\n{stderr}"
    );
}

#[then("stdout is newline-delimited JSON ending with a finished event")]
fn stdout_is_ndjson_ending_with_finished(world: &mut TestWorld) {
    let out = world.last_cmd.as_ref().expect("last cmd");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty(), "expected NDJSON on stdout, got none");

    let mut last_type = String::new();
    for line in &lines {
        let v: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"));
        last_type = v["type"].as_str().unwrap_or_default().to_string();
    }
    assert_eq!(last_type, "finished", "stdout was:\n{stdout}");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    TestWorld::cucumber()
        .max_concurrent_scenarios(Some(1))
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
