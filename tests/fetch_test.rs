//! End-to-end tests running the `nhl-stats` binary against a mock NHL API

use serde_json::{json, Value};
use std::{fs, path::Path, process::Output};
use tempfile::tempdir;
use tokio::process::Command;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const GAME_LOG_PATH: &str = "/v1/player/8478402/game-log/20232024/2";

async fn run_in(dir: &Path, base_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nhl-stats"))
        .arg("--base-url")
        .arg(base_url)
        .current_dir(dir)
        .output()
        .await
        .unwrap()
}

async fn game_log_server(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GAME_LOG_PATH))
        .and(query_param("Content_Type", "application.json"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_default_run_writes_player_data_json() {
    let server = game_log_server(
        ResponseTemplate::new(200).set_body_string(r#"{"gameId": 1, "points": 2}"#),
    )
    .await;
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &format!("{}/v1/", server.uri())).await;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let written = fs::read_to_string(dir.path().join("player_data.json")).unwrap();
    assert_eq!(written, "{\n    \"gameId\": 1,\n    \"points\": 2\n}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|l| l == "Data saved to player_data.json"));
}

#[tokio::test]
async fn test_rerun_overwrites_previous_output() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("player_data.json"),
        r#"{"stale": true, "gameLog": [1, 2, 3]}"#,
    )
    .unwrap();

    let body = json!({"seasonId": 20232024, "gameLog": []});
    let server = game_log_server(ResponseTemplate::new(200).set_body_json(&body)).await;

    let output = run_in(dir.path(), &format!("{}/v1/", server.uri())).await;
    assert!(output.status.success());

    let reparsed: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("player_data.json")).unwrap())
            .unwrap();
    assert_eq!(reparsed, body);
}

#[tokio::test]
async fn test_connection_refused_exits_nonzero_without_output() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), "http://127.0.0.1:1/v1/").await;

    assert!(!output.status.success());
    assert!(!dir.path().join("player_data.json").exists());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Data saved"));
}

#[tokio::test]
async fn test_non_json_body_exits_nonzero_and_keeps_old_file() {
    let server = game_log_server(ResponseTemplate::new(200).set_body_string("not json")).await;
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("player_data.json"), "old").unwrap();

    let output = run_in(dir.path(), &format!("{}/v1/", server.uri())).await;

    assert!(!output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("player_data.json")).unwrap(),
        "old"
    );
}

#[tokio::test]
async fn test_subcommand_and_output_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/roster/TOR/20222023"))
        .and(query_param("Content_Type", "application.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"forwards": []})))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_nhl-stats"))
        .args(["roster", "tor", "--season", "2022-23", "-o", "rosters/tor.json"])
        .arg("--base-url")
        .arg(format!("{}/v1", server.uri()))
        .current_dir(dir.path())
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        fs::read_to_string(dir.path().join("rosters/tor.json")).unwrap(),
        "{\n    \"forwards\": []\n}"
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Data saved to rosters/tor.json"));
}
