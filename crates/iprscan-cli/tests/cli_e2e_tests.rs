//! End-to-end tests for the `iprscan` binary
//!
//! Each test runs the compiled binary against a wiremock server standing in
//! for the REST service and checks exit codes, stdout and written files.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_string_contains, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Binary with a clean environment pointed at `base_url`
fn iprscan(base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("iprscan").unwrap();
    cmd.env_remove("IPRSCAN_POLL_INTERVAL")
        .env_remove("IPRSCAN_API_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_FORMAT")
        .env("IPRSCAN_BASE_URL", base_url);
    cmd
}

async fn mount_text(server: &MockServer, http_method: &str, url_path: &str, body: &str) {
    Mock::given(method(http_method))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[test]
fn test_no_arguments_prints_usage() {
    let mut cmd = Command::cargo_bin("iprscan").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--email"));
}

#[test]
fn test_help_lists_compatibility_flags() {
    let mut cmd = Command::cargo_bin("iprscan").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--resultTypes"))
        .stdout(predicate::str::contains("--paramDetail"))
        .stdout(predicate::str::contains("--polljob"));
}

#[test]
fn test_status_without_jobid_is_rejected() {
    let mut cmd = iprscan("http://127.0.0.1:9");
    cmd.arg("--status")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognised argument combination"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_conflicting_goterms_flags() {
    let mut cmd = iprscan("http://127.0.0.1:9");
    cmd.args(["--email", "a@b.com", "--goterms", "--nogoterms", "MKT"])
        .assert()
        .failure();
}

#[tokio::test]
async fn test_list_parameters() {
    let server = MockServer::start().await;
    mount_text(
        &server,
        "GET",
        "/parameters",
        "<parameters><id>sequence</id><id>appl</id><id>goterms</id></parameters>",
    )
    .await;

    iprscan(&server.uri())
        .arg("--params")
        .assert()
        .success()
        .stdout("sequence\nappl\ngoterms\n");
}

#[tokio::test]
async fn test_parameter_detail() {
    let server = MockServer::start().await;
    mount_text(
        &server,
        "GET",
        "/parameter_details/appl",
        r#"<parameter>
            <name>Applications</name>
            <description>Signature methods</description>
            <type>STRING</type>
            <values>
                <value><label>Pfam</label><value>PfamA</value><defaultValue>true</defaultValue></value>
            </values>
        </parameter>"#,
    )
    .await;

    iprscan(&server.uri())
        .args(["--paramDetail", "appl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applications\tSTRING"))
        .stdout(predicate::str::contains("PfamA default\n\tPfam\n"));
}

#[tokio::test]
async fn test_unknown_parameter_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/parameter_details/colour"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    iprscan(&server.uri())
        .args(["--paramDetail", "colour"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("colour"));
}

#[tokio::test]
async fn test_status_prints_raw_token() {
    let server = MockServer::start().await;
    mount_text(&server, "GET", "/status/job-1", "RUNNING").await;

    iprscan(&server.uri())
        .args(["--status", "--jobid", "job-1"])
        .assert()
        .success()
        .stdout("RUNNING\n");
}

#[tokio::test]
async fn test_invalid_log_setting_is_reported_and_skipped() {
    let server = MockServer::start().await;
    mount_text(&server, "GET", "/status/job-1", "FINISHED").await;

    iprscan(&server.uri())
        .env("LOG_LEVEL", "loud")
        .env("LOG_FORMAT", "json")
        .args(["--status", "--jobid", "job-1"])
        .assert()
        .success()
        .stdout("FINISHED\n")
        .stderr(predicate::str::contains(
            "Warning: ignoring invalid logging setting LOG_LEVEL",
        ))
        .stderr(predicate::str::contains("LOG_FORMAT").not());
}

#[tokio::test]
async fn test_result_types_listing() {
    let server = MockServer::start().await;
    mount_text(
        &server,
        "GET",
        "/result_types/job-1",
        "<types><type><identifier>tsv</identifier><label>TSV</label><fileSuffix>tsv</fileSuffix></type></types>",
    )
    .await;

    iprscan(&server.uri())
        .args(["--resultTypes", "--jobid", "job-1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tsv\n"))
        .stdout(predicate::str::contains("\tTSV"));
}

#[tokio::test]
async fn test_async_submission_prints_job_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run/"))
        .and(body_string_contains("email=a%40b.com"))
        .and(body_string_contains("appl=PfamA&appl=SMART"))
        .respond_with(ResponseTemplate::new(200).set_body_string("iprscan5-X-123"))
        .expect(1)
        .mount(&server)
        .await;

    iprscan(&server.uri())
        .args([
            "--email",
            "a@b.com",
            "--appl",
            "PfamA SMART",
            "--async",
            "MKTAYIAKQR",
        ])
        .assert()
        .success()
        .stdout("iprscan5-X-123\n");
}

#[tokio::test]
async fn test_submission_without_sequence_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("never"))
        .expect(0)
        .mount(&server)
        .await;

    iprscan(&server.uri())
        .args(["--email", "a@b.com", "--async"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sequence"));
}

#[tokio::test]
async fn test_synchronous_submission_writes_results() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_text(&server, "POST", "/run/", "iprscan5-X-123").await;

    Mock::given(method("GET"))
        .and(path("/status/iprscan5-X-123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("RUNNING"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_text(&server, "GET", "/status/iprscan5-X-123", "FINISHED").await;

    mount_text(
        &server,
        "GET",
        "/result_types/iprscan5-X-123",
        "<types><type><identifier>tsv</identifier><fileSuffix>tsv</fileSuffix></type></types>",
    )
    .await;
    mount_text(&server, "GET", "/result/iprscan5-X-123/tsv", "MKT\tPfam\n").await;

    iprscan(&server.uri())
        .current_dir(dir.path())
        .args([
            "--email",
            "a@b.com",
            "--poll-interval",
            "0",
            "--initial-delay",
            "0",
            "--quiet",
            "MKT",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("iprscan5-X-123.tsv.tsv"));

    let written = std::fs::read_to_string(dir.path().join("iprscan5-X-123.tsv.tsv")).unwrap();
    assert_eq!(written, "MKT\tPfam\n");
}

#[tokio::test]
async fn test_polljob_with_prefix_and_format() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_text(&server, "GET", "/status/job-1", "FINISHED").await;
    mount_text(
        &server,
        "GET",
        "/result_types/job-1",
        "<types>\
            <type><identifier>tsv</identifier><fileSuffix>tsv</fileSuffix></type>\
            <type><identifier>xml</identifier><fileSuffix>xml</fileSuffix></type>\
        </types>",
    )
    .await;
    mount_text(&server, "GET", "/result/job-1/xml", "<protein-matches/>").await;

    iprscan(&server.uri())
        .current_dir(dir.path())
        .args([
            "--polljob",
            "--jobid",
            "job-1",
            "--outfile",
            "run1",
            "--outformat",
            "xml",
            "--quiet",
        ])
        .assert()
        .success();

    assert!(dir.path().join("run1.xml.xml").exists());
    assert!(!dir.path().join("run1.tsv.tsv").exists());
}

#[tokio::test]
async fn test_failed_job_skips_retrieval() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_text(&server, "GET", "/status/job-1", "FAILURE").await;
    Mock::given(method("GET"))
        .and(path("/result_types/job-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    iprscan(&server.uri())
        .current_dir(dir.path())
        .args(["--polljob", "--jobid", "job-1", "--quiet"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("FAILURE"));
}
