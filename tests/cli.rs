//
//  mediawiki-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use tempfile::TempDir;

/// `mw` with an isolated, empty config file.
fn mw(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mw").unwrap();
    cmd.env("MW_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("MW_ENDPOINT")
        .env_remove("MW_WIKI")
        .env_remove("MW_USER_AGENT");
    cmd
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    mw(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mw version "));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    mw(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("call").and(predicate::str::contains("siteinfo")));
}

#[test]
fn test_call_prints_yaml() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "query".into()),
            Matcher::UrlEncoded("titles".into(), "Foo|Bar".into()),
        ]))
        .with_body("---\nquery:\n  pages:\n    - title: Foo\n    - title: Bar\n")
        .expect(1)
        .create();

    let dir = TempDir::new().unwrap();
    mw(&dir)
        .args(["--endpoint", &format!("{}/w/api.php", server.url())])
        .args(["call", "query", "titles=Foo", "titles=Bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Foo").and(predicate::str::contains("title: Bar")));

    mock.assert();
}

#[test]
fn test_call_api_error_exit_code() {
    let mut server = Server::new();
    server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::Any)
        .with_body("---\nerror:\n  code: badvalue\n  info: Bad list\n")
        .create();

    let dir = TempDir::new().unwrap();
    mw(&dir)
        .args(["--endpoint", &format!("{}/w/api.php", server.url())])
        .args(["call", "query", "list=nope"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("badvalue - Bad list"));
}

#[test]
fn test_call_unsupported_action_exit_code() {
    let mut server = Server::new();
    server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::Any)
        .with_body("unknown_action: Unrecognized value for parameter 'action'")
        .create();

    let dir = TempDir::new().unwrap();
    mw(&dir)
        .args(["--endpoint", &format!("{}/w/api.php", server.url())])
        .args(["call", "frobnicate"])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("Unsupported action: frobnicate"));
}

#[test]
fn test_page_prints_content() {
    let mut server = Server::new();
    server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::UrlEncoded("titles".into(), "Sandbox".into()))
        .with_body("---\nquery:\n  pages:\n    \"5\":\n      title: Sandbox\n      revisions:\n        - \"*\": \"== Heading ==\"\n")
        .create();

    let dir = TempDir::new().unwrap();
    mw(&dir)
        .args(["--endpoint", &format!("{}/w/api.php", server.url())])
        .args(["page", "Sandbox"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Heading =="));
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();

    mw(&dir)
        .args(["config", "set", "default_wiki", "de"])
        .assert()
        .success();

    mw(&dir)
        .args(["config", "get", "default_wiki"])
        .assert()
        .success()
        .stdout("de\n");

    mw(&dir)
        .args(["config", "set", "timeout", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key 'timeout'"));
}

#[test]
fn test_configured_wiki_is_used() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::UrlEncoded("meta".into(), "siteinfo".into()))
        .with_body("---\nquery:\n  general:\n    sitename: Local Wiki\n    lang: en\n")
        .expect(1)
        .create();

    let dir = TempDir::new().unwrap();
    let endpoint = format!("{}/w/api.php", server.url());
    mw(&dir)
        .args(["config", "add-wiki", "local", &endpoint])
        .assert()
        .success();

    mw(&dir)
        .args(["--wiki", "local", "--json", "siteinfo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sitename\": \"Local Wiki\""));

    mock.assert();
}
