#![allow(deprecated)]
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

fn bin() -> Command {
    Command::cargo_bin("dee-wikiapi").unwrap()
}

fn parse_stdout(out: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&out.stdout);
    serde_json::from_str(stdout.trim()).expect("output must be valid JSON on stdout")
}

#[test]
fn help_includes_examples() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXAMPLES"));
}

#[test]
fn version_flag_succeeds() {
    bin().arg("--version").assert().success();
}

/// An invalid lang code fails before any request is made.
#[test]
fn get_invalid_lang_json_error_on_stdout() {
    let out = bin()
        .args(["get", "--json", "--lang", "123", "Rust"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    let parsed = parse_stdout(&out);
    assert_eq!(parsed["ok"], json!(false));
    assert_eq!(parsed["code"], json!("INVALID_LANGUAGE"));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        !stderr.trim().starts_with('{'),
        "JSON error must not appear on stderr"
    );
}

#[test]
fn get_prints_page_item_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php").query_param("titles", "Berlin");
        then.status(200).json_body(json!({
            "batchcomplete": true,
            "query": { "pages": [{
                "pageid": 3354,
                "title": "Berlin",
                "extract": "Berlin is the capital of Germany."
            }] }
        }));
    });

    let out = bin()
        .env("WIKI_ENDPOINT", server.url("/w/api.php"))
        .args(["get", "--json", "Berlin"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let parsed = parse_stdout(&out);
    assert_eq!(parsed["ok"], json!(true));
    assert_eq!(parsed["item"]["id"], json!(3354));
    assert_eq!(parsed["item"]["title"], json!("Berlin"));
    assert_eq!(
        parsed["item"]["summary"],
        json!("Berlin is the capital of Germany.")
    );
    assert!(parsed["item"]["thumbnail"].is_null());
}

#[test]
fn get_missing_page_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php");
        then.status(200).json_body(json!({
            "batchcomplete": true,
            "query": { "pages": [{ "title": "Qwzxv", "missing": true }] }
        }));
    });

    let endpoint = server.url("/w/api.php");
    let out = bin()
        .args(["get", "--json", "--endpoint", endpoint.as_str(), "Qwzxv"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert_eq!(parse_stdout(&out)["code"], json!("NOT_FOUND"));
}

#[test]
fn get_http_failure_reports_status_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php");
        then.status(404);
    });

    let endpoint = server.url("/w/api.php");
    let out = bin()
        .args(["get", "--json", "--endpoint", endpoint.as_str(), "Cat"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    let parsed = parse_stdout(&out);
    assert_eq!(parsed["code"], json!("HTTP_ERROR"));
    assert!(parsed["error"].as_str().unwrap().contains("404"));
}

#[test]
fn search_lists_titles_in_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php").query_param("search", "cat");
        then.status(200)
            .json_body(json!(["cat", ["Cat", "Category", "Catapult"], [], []]));
    });

    bin()
        .env("WIKI_ENDPOINT", server.url("/w/api.php"))
        .args(["search", "-q", "cat"])
        .assert()
        .success()
        .stdout("Cat\nCategory\nCatapult\n");
}

#[test]
fn verbose_diagnostics_stay_on_stderr() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php");
        then.status(200).json_body(json!(["xyz", [], [], []]));
    });

    let out = bin()
        .env("WIKI_ENDPOINT", server.url("/w/api.php"))
        .args(["search", "--json", "-v", "xyz"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let parsed = parse_stdout(&out);
    assert_eq!(parsed["count"], json!(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("debug: request_url="));
    assert!(stderr.contains("action=opensearch"));
}

#[test]
fn verbose_get_logs_banner_and_pretty_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php");
        then.status(200).json_body(json!({
            "batchcomplete": true,
            "query": { "pages": [{ "pageid": 42, "title": "Stub" }] }
        }));
    });

    let out = bin()
        .env("WIKI_ENDPOINT", server.url("/w/api.php"))
        .args(["get", "--json", "-v", "Stub"])
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(parse_stdout(&out)["item"]["id"], json!(42));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("debug: wiki client in debug mode"));
    assert!(stderr.contains("debug: response=\n{\n  \"batchcomplete\": true,"));
    assert!(stderr.contains("\"pageid\": 42"));
}

#[test]
fn verbose_missing_page_logs_title() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php");
        then.status(200).json_body(json!({
            "batchcomplete": true,
            "query": { "pages": [{ "title": "Qwzxv", "missing": true }] }
        }));
    });

    let out = bin()
        .env("WIKI_ENDPOINT", server.url("/w/api.php"))
        .args(["get", "-v", "Qwzxv"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("debug: page 'Qwzxv' does not exist"));
}

#[test]
fn verbose_invalid_title_logs_reason() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php");
        then.status(200).json_body(json!({
            "batchcomplete": true,
            "query": { "pages": [{
                "title": "A|B",
                "invalid": true,
                "invalidreason": "contains invalid characters"
            }] }
        }));
    });

    let out = bin()
        .env("WIKI_ENDPOINT", server.url("/w/api.php"))
        .args(["get", "--json", "-v", "A|B"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert_eq!(parse_stdout(&out)["code"], json!("INVALID_TITLE"));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("debug: page invalid, reason: contains invalid characters"));
}

#[test]
fn verbose_failed_thumbnail_is_logged_and_page_still_printed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/w/api.php");
        then.status(200).json_body(json!({
            "batchcomplete": true,
            "query": { "pages": [{
                "pageid": 6678,
                "title": "Cat",
                "thumbnail": { "source": "http://127.0.0.1:1/cat.png" }
            }] }
        }));
    });

    let out = bin()
        .env("WIKI_ENDPOINT", server.url("/w/api.php"))
        .args(["get", "--json", "-v", "Cat"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let parsed = parse_stdout(&out);
    assert_eq!(parsed["ok"], json!(true));
    assert!(parsed["item"]["thumbnail"].is_null());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("debug: could not load thumbnail of 'Cat' from http://127.0.0.1:1/cat.png"));
}
