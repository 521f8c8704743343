//! End-to-end CLI tests: run the binary against a mock GraphQL endpoint

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::MockServer;

use common::{endpoint, mount_graphql, mount_graphql_raw, sample_introspection};

fn gqldocs() -> Command {
    Command::cargo_bin("gqldocs").unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_overview_lists_operations() {
    let server = MockServer::start().await;
    mount_graphql(&server, sample_introspection()).await;

    gqldocs()
        .arg(endpoint(&server))
        .assert()
        .success()
        .stdout(predicate::str::contains("cart"))
        .stdout(predicate::str::contains("createCustomer"))
        .stdout(predicate::str::contains("1 queries, 1 mutations"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_overview_json() {
    let server = MockServer::start().await;
    mount_graphql(&server, sample_introspection()).await;

    let output = gqldocs()
        .arg(endpoint(&server))
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["totalQueries"], 1);
    assert_eq!(payload["totalMutations"], 1);
    assert_eq!(payload["queries"][0], "cart");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_operation_docs_output() {
    let server = MockServer::start().await;
    mount_graphql(&server, sample_introspection()).await;

    gqldocs()
        .arg(endpoint(&server))
        .args(["--operation", "createCustomer", "--kind", "mutation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mutation CreatecustomerMutation"))
        .stdout(predicate::str::contains("$input: CustomerCreateInput!"))
        .stdout(predicate::str::contains("curl -X POST"))
        .stdout(predicate::str::contains("import requests"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_operation_json_output() {
    let server = MockServer::start().await;
    mount_graphql(&server, sample_introspection()).await;

    let output = gqldocs()
        .arg(endpoint(&server))
        .args(["--operation", "cart", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["kind"], "query");
    assert_eq!(payload["variables"]["cartId"], "your_cart_id");
    assert!(payload["snippets"]["curl"].as_str().unwrap().contains("curl -X POST"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tab_rendering() {
    let server = MockServer::start().await;
    mount_graphql(&server, sample_introspection()).await;

    gqldocs()
        .arg(endpoint(&server))
        .args(["--tab", "enum-types"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SortEnum"))
        .stdout(predicate::str::contains("ASC"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_tab_is_a_usage_error() {
    let server = MockServer::start().await;
    mount_graphql(&server, sample_introspection()).await;

    gqldocs()
        .arg(endpoint(&server))
        .args(["--tab", "queries"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid tab 'queries'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_schema_error_exit_status() {
    let server = MockServer::start().await;
    mount_graphql_raw(&server, 500, "boom").await;

    gqldocs()
        .arg(endpoint(&server))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("HTTP 500 - Server returned error response"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_verify_probe_failure() {
    let server = MockServer::start().await;
    mount_graphql_raw(&server, 503, "unavailable").await;

    gqldocs()
        .arg(endpoint(&server))
        .args(["--verify", "yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("HTTP 503"));
}

#[test]
fn test_invalid_endpoint_url() {
    gqldocs()
        .arg("not a url")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("URL parse error"));
}

#[test]
fn test_help_mentions_flags() {
    gqldocs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--operation"))
        .stdout(predicate::str::contains("--tab"))
        .stdout(predicate::str::contains("--json"));
}
