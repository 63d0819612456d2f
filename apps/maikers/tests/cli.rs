//! Integration tests for the maikers binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary isolated from the developer's real config and environment.
fn maikers_cmd(home: &TempDir, base_url: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("maikers");
    cmd.env("HOME", home.path())
        .env("MAIKERS_BASE_URL", base_url)
        .env_remove("MAIKERS_API_KEY")
        .env_remove("MAIKERS_APIKEY")
        .env_remove("MAIKERS_BASEURL")
        .env_remove("MAIKERS_AUTHTIMESTAMP")
        .env_remove("RUST_LOG");
    cmd
}

fn config_file(home: &TempDir) -> PathBuf {
    home.path().join(".maikers.sdk").join("config.json")
}

fn read_config(home: &TempDir) -> Value {
    serde_json::from_str(&std::fs::read_to_string(config_file(home)).unwrap()).unwrap()
}

#[test]
fn login_status_logout_cycle() {
    let home = TempDir::new().unwrap();
    let base = "http://127.0.0.1:9";

    maikers_cmd(&home, base)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not authenticated"));

    maikers_cmd(&home, base)
        .args(["auth", "login", "mk_test_123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authentication successful"))
        .stdout(predicate::str::contains("config.json"));

    let cfg = read_config(&home);
    assert_eq!(cfg["apiKey"], "mk_test_123");
    assert!(cfg["authTimestamp"].as_i64().unwrap() > 0);

    maikers_cmd(&home, base)
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticated"))
        .stdout(predicate::str::contains("Last authenticated:"));

    maikers_cmd(&home, base)
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out successfully"));

    assert_eq!(read_config(&home)["apiKey"], "");
}

#[test]
fn first_run_writes_default_config() {
    let home = TempDir::new().unwrap();

    maikers_cmd(&home, "http://127.0.0.1:9")
        .args(["auth", "status"])
        .assert()
        .success();

    assert_eq!(
        read_config(&home),
        json!({"apiKey": "", "baseUrl": "https://api.maikers.com", "authTimestamp": 0})
    );
}

#[test]
fn env_key_override_counts_as_authenticated() {
    let home = TempDir::new().unwrap();

    maikers_cmd(&home, "http://127.0.0.1:9")
        .env("MAIKERS_APIKEY", "from-env")
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticated"));
}

#[test]
fn dotenv_in_working_directory_supplies_key() {
    let home = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    std::fs::write(workdir.path().join(".env"), "MAIKERS_APIKEY=from-dotenv\n").unwrap();

    maikers_cmd(&home, "http://127.0.0.1:9")
        .current_dir(workdir.path())
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticated"))
        .stdout(predicate::str::contains("Not").not());
}

#[test]
fn construction_key_from_env_counts_as_authenticated() {
    let home = TempDir::new().unwrap();

    maikers_cmd(&home, "http://127.0.0.1:9")
        .env("MAIKERS_API_KEY", "k")
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticated"))
        .stdout(predicate::str::contains("Not").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn dotenv_base_url_is_used_for_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agents/a1/jobs"))
        .and(header("x-api-key", "dotenv-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "j9"}])))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    std::fs::write(
        workdir.path().join(".env"),
        format!("MAIKERS_API_KEY=dotenv-key\nMAIKERS_BASE_URL={}\n", server.uri()),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("maikers");
    cmd.env("HOME", home.path())
        .env_remove("MAIKERS_API_KEY")
        .env_remove("MAIKERS_APIKEY")
        .env_remove("MAIKERS_BASE_URL")
        .env_remove("MAIKERS_BASEURL")
        .env_remove("RUST_LOG")
        .current_dir(workdir.path())
        .args(["agents", "get-jobs", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("j9"));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_sends_only_supplied_flags() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/agents/a1"))
        .and(body_json(json!({"name": "foo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "a1",
            "name": "foo"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    maikers_cmd(&home, &server.uri())
        .args(["agents", "update", "a1", "--name", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"foo\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn stored_key_is_sent_on_later_runs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agents/a1/jobs"))
        .and(header("x-api-key", "mk_stored"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "j1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    maikers_cmd(&home, &server.uri())
        .args(["auth", "login", "mk_stored"])
        .assert()
        .success();

    maikers_cmd(&home, &server.uri())
        .args(["agents", "get-jobs", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"j1\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn query_posts_to_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agents/terminal"))
        .and(body_json(json!({"recipients": ["a1"], "message": "hi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "hello"})))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    maikers_cmd(&home, &server.uri())
        .args(["agents", "query", "a1", "--message", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_key_create_post_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/agents"))
        .and(body_json(json!({"name": "Scout", "model": "m1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "new"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/key"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"apiKey": "mk_new"})))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    maikers_cmd(&home, &server.uri())
        .args(["agents", "create", "--name", "Scout", "--model", "m1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"new\""));

    maikers_cmd(&home, &server.uri())
        .args(["key", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mk_new"));
}

#[tokio::test(flavor = "multi_thread")]
async fn api_errors_go_to_stderr_with_success_exit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agents/ghost/jobs"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    maikers_cmd(&home, &server.uri())
        .args(["agents", "get-jobs", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "HTTP_404: Request failed with status code 404",
        ));
}

#[test]
fn unreachable_server_reports_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let home = TempDir::new().unwrap();
    maikers_cmd(&home, &format!("http://{addr}"))
        .args(["agents", "get-jobs", "a1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("NETWORK_ERROR"));
}

#[test]
fn config_show_redacts_key_and_set_base_url_persists() {
    let home = TempDir::new().unwrap();
    let base = "http://127.0.0.1:9";

    maikers_cmd(&home, base)
        .args(["auth", "login", "mk_secret"])
        .assert()
        .success();

    maikers_cmd(&home, base)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<redacted>"))
        .stdout(predicate::str::contains("mk_secret").not());

    maikers_cmd(&home, base)
        .args(["config", "set-base-url", "http://staging.local"])
        .assert()
        .success();

    assert_eq!(read_config(&home)["baseUrl"], "http://staging.local");
}
