//! Integration tests for the release-watch binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PAGE_3040: &str = r#"<html><body>
<h2>Documento 3040 - Leiaute - Release 3040</h2>
<p>Release 2999 (anterior)</p>
</body></html>"#;

const PAGE_3041: &str = "<html><body><h2>Documento 3040 - Release 3041</h2></body></html>";

/// A command isolated from the caller's CI environment.
fn release_watch() -> Command {
    let mut cmd = Command::new(cargo_bin("release-watch"));
    cmd.env_remove("EXPECTED_RELEASE")
        .env_remove("RELEASE_WATCH_URL")
        .env_remove("GITHUB_ENV")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn serve<'a>(server: &'a MockServer, status: u16, body: &str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path("/scrdoc3040");
        then.status(status).body(body);
    })
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    release_watch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXPECTED_RELEASE"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    release_watch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn matching_release_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = serve(&server, 200, PAGE_3040);

    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .args(["--url", &server.url("/scrdoc3040")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected release: 3040"))
        .stdout(predicate::str::contains("Current release found: 3040"))
        .stdout(predicate::str::contains("matches the expected release"))
        .stdout(predicate::str::contains("::error::").not());

    mock.assert_calls(1);
    Ok(())
}

#[test]
fn changed_release_raises_alarm() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve(&server, 200, PAGE_3041);

    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .args(["--url", &server.url("/scrdoc3040")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Current release found: 3041"))
        .stdout(predicate::str::is_match(r"(?m)^::error::.*3040.*3041").unwrap());
    Ok(())
}

#[test]
fn lowercase_marker_is_recognized() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve(&server, 200, "<p>release 3041</p>");

    release_watch()
        .args(["--expected", "3041", "--url", &server.url("/scrdoc3040")])
        .assert()
        .success();
    Ok(())
}

#[test]
fn missing_marker_fails_without_alarm() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve(&server, 200, "<html><body>Manutenção programada</body></html>");

    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .args(["--url", &server.url("/scrdoc3040")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Release ####"))
        .stdout(predicate::str::contains("::error::").not());
    Ok(())
}

#[test]
fn http_error_fails_with_status_code() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve(&server, 503, "Service Unavailable");

    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .args(["--url", &server.url("/scrdoc3040")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("503"))
        .stdout(predicate::str::contains("Current release found").not());
    Ok(())
}

#[test]
fn network_error_fails() -> Result<(), Box<dyn std::error::Error>> {
    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .args(["--url", "http://127.0.0.1:1/scrdoc3040"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Network error"));
    Ok(())
}

#[test]
fn missing_expectation_fails_before_fetch() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = serve(&server, 200, PAGE_3040);

    release_watch()
        .args(["--url", &server.url("/scrdoc3040")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("EXPECTED_RELEASE"))
        .stdout(predicate::str::is_empty());

    mock.assert_calls(0);
    Ok(())
}

#[test]
fn empty_expectation_fails_before_fetch() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = serve(&server, 200, PAGE_3040);

    release_watch()
        .args(["--expected", "", "--url", &server.url("/scrdoc3040")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("EXPECTED_RELEASE"));

    mock.assert_calls(0);
    Ok(())
}

#[test]
fn invalid_url_fails() -> Result<(), Box<dyn std::error::Error>> {
    release_watch()
        .args(["--expected", "3040", "--url", "not a url"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid URL"));
    Ok(())
}

#[test]
fn url_can_come_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = serve(&server, 200, PAGE_3040);

    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .env("RELEASE_WATCH_URL", server.url("/scrdoc3040"))
        .assert()
        .success();

    mock.assert();
    Ok(())
}

#[test]
fn quiet_prints_only_outcome() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve(&server, 200, PAGE_3040);

    release_watch()
        .args(["--quiet", "--expected", "3040", "--url", &server.url("/scrdoc3040")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected release").not())
        .stdout(predicate::str::contains("matches the expected release"));
    Ok(())
}

#[test]
fn env_file_is_untouched_without_export() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve(&server, 200, PAGE_3041);
    let temp = TempDir::new()?;
    let env_path = temp.path().join("github_env");

    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .env("GITHUB_ENV", &env_path)
        .args(["--url", &server.url("/scrdoc3040")])
        .assert()
        .code(1);

    assert!(!env_path.exists());
    Ok(())
}

#[test]
fn export_env_appends_results() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve(&server, 200, PAGE_3041);
    let temp = TempDir::new()?;
    let env_path = temp.path().join("github_env");
    fs::write(&env_path, "EARLIER=1\n")?;

    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .env("GITHUB_ENV", &env_path)
        .args(["--export-env", "--url", &server.url("/scrdoc3040")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("::error::"));

    let content = fs::read_to_string(&env_path)?;
    assert_eq!(content, "EARLIER=1\nCURRENT_RELEASE=3041\nRELEASE_CHANGED=true\n");
    Ok(())
}

#[test]
fn unwritable_env_file_keeps_alarm() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve(&server, 200, PAGE_3041);
    let temp = TempDir::new()?;

    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .env("GITHUB_ENV", temp.path())
        .args(["--export-env", "--url", &server.url("/scrdoc3040")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("::error::"))
        .stdout(predicate::str::contains("3041"))
        .stderr(predicate::str::contains("IO error"));
    Ok(())
}

#[test]
fn unwritable_env_file_fails_matching_run() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve(&server, 200, PAGE_3040);
    let temp = TempDir::new()?;

    release_watch()
        .env("EXPECTED_RELEASE", "3040")
        .env("GITHUB_ENV", temp.path())
        .args(["--export-env", "--url", &server.url("/scrdoc3040")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("matches the expected release"))
        .stdout(predicate::str::contains("::error::").not())
        .stderr(predicate::str::contains("IO error"));
    Ok(())
}
