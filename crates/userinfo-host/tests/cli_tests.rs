//! Host CLI tests, run against JSON fixtures served from memory or an
//! unreachable PostgreSQL server

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use userinfo_common::{AppConfig, AppError, ErrorResponse};
use userinfo_host::{run, run_with_config, Cli, Command};

const FIXTURE: &str = r#"[
    {
        "email": "a@x.com",
        "avatar": "http://img/1.png",
        "description": "VIP",
        "total_requests": 100,
        "used_requests": 30,
        "is_feishu_user": true
    },
    {
        "email": "over@x.com",
        "avatar": "",
        "description": "",
        "total_requests": 1,
        "used_requests": 4,
        "is_feishu_user": false
    }
]"#;

fn fixture_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    file
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("userinfo-host").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_invoke_defaults() {
    let cli = cli(&["invoke", "--email", "a@x.com"]);
    let Command::Invoke(args) = cli.command else {
        panic!("expected invoke command");
    };

    assert_eq!(args.tool, "get_my_user_information");
    assert_eq!(args.email, "a@x.com");
    assert_eq!(args.input, "");
    assert!(args.fixture.is_none());
}

#[tokio::test]
async fn test_list_prints_specs() {
    let out = run(cli(&["list"])).await.unwrap();
    let specs: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(specs.as_array().unwrap().len(), 1);
    assert_eq!(specs[0]["name"], "get_my_user_information");
    assert_eq!(specs[0]["return_direct"], true);
}

#[tokio::test]
async fn test_invoke_with_fixture() {
    let file = fixture_file();
    let path = file.path().to_str().unwrap();

    let out = run(cli(&["invoke", "--email", "a@x.com", "--fixture", path]))
        .await
        .unwrap();
    assert!(out.starts_with("您的登录用户信息如下："));
    assert!(out.contains("剩余使用次数: 70\n"));
    assert!(out.ends_with("是否飞书用户：True\n"));

    let out = run(cli(&["invoke", "--email", "over@x.com", "--fixture", path]))
        .await
        .unwrap();
    assert!(out.contains("剩余使用次数: -3\n"));
    assert!(out.ends_with("是否飞书用户：False\n"));
}

#[tokio::test]
async fn test_invoke_unknown_caller() {
    let file = fixture_file();
    let path = file.path().to_str().unwrap();

    let out = run(cli(&[
        "invoke", "--email", "ghost@x.com", "--input", "ignored", "--fixture", path,
    ]))
    .await
    .unwrap();
    assert_eq!(out, "No user information");
}

#[tokio::test]
async fn test_invoke_unknown_tool() {
    let file = fixture_file();
    let path = file.path().to_str().unwrap();

    let err = run(cli(&[
        "invoke", "--tool", "delete_everything", "--email", "a@x.com", "--fixture", path,
    ]))
    .await
    .unwrap_err();

    let app_err = err.downcast_ref::<AppError>().unwrap();
    assert_eq!(app_err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_missing_fixture_fails() {
    let err = run(cli(&[
        "invoke", "--email", "a@x.com", "--fixture", "/nonexistent/users.json",
    ]))
    .await
    .unwrap_err();

    assert!(err.to_string().contains("failed to read fixture"));
}

#[tokio::test]
async fn test_malformed_fixture_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    let err = run(cli(&[
        "invoke", "--email", "a@x.com", "--fixture", file.path().to_str().unwrap(),
    ]))
    .await
    .unwrap_err();

    assert!(err.to_string().contains("malformed fixture"));
}

#[tokio::test]
async fn test_invoke_without_database_url_is_config_error() {
    let err = run_with_config(cli(&["invoke", "--email", "a@x.com"]), || {
        AppConfig::from_lookup(|_| None)
    })
    .await
    .unwrap_err();

    let response = ErrorResponse::from_anyhow(&err);
    assert_eq!(response.code, "CONFIG_ERROR");
    assert!(response.message.contains("DATABASE_URL"));
}

#[tokio::test]
async fn test_invoke_against_unreachable_database() {
    let err = run_with_config(cli(&["invoke", "--email", "a@x.com"]), || {
        AppConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://u:p@127.0.0.1:1/db".to_string()),
            "DATABASE_ACQUIRE_TIMEOUT_SECS" => Some("2".to_string()),
            _ => None,
        })
    })
    .await
    .unwrap_err();

    let response = ErrorResponse::from_anyhow(&err);
    assert_eq!(response.code, "CONNECTION_UNAVAILABLE");
}

#[tokio::test]
async fn test_list_never_loads_config() {
    let out = run_with_config(cli(&["list"]), || AppConfig::from_lookup(|_| None))
        .await
        .unwrap();
    assert!(out.contains("get_my_user_information"));
}

#[test]
fn test_caller_email_falls_back_to_env_file() {
    let mut env_file = NamedTempFile::new().unwrap();
    writeln!(env_file, "USERINFO_CALLER_EMAIL=from-env-file@x.com").unwrap();

    let cli = Cli::parse_with_env_file(Some(env_file.path()), ["userinfo-host", "invoke"]).unwrap();
    let Command::Invoke(args) = cli.command else {
        panic!("expected invoke command");
    };
    assert_eq!(args.email, "from-env-file@x.com");
}
