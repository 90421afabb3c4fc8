//! HTTP tests driving the endpoint table with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use subplus_api::{routes, AppState};
use subplus_config::Config;
use subplus_events::EventBus;
use subplus_filesystem::DirectorySet;
use subplus_resolver::Resolver;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

struct TestServer {
    _tmp: TempDir,
    dirs: Vec<PathBuf>,
    app: Router,
}

/// Builds the app over `count` fresh directories, highest priority first
async fn test_server(count: usize) -> TestServer {
    let tmp = tempdir().unwrap();
    let dirs: Vec<PathBuf> = (1..=count).map(|i| tmp.path().join(format!("dir{}", i))).collect();

    let mut config = Config::default();
    config.subtitles.directories = dirs.iter().map(|d| d.to_string_lossy().to_string()).collect();

    let directories = DirectorySet::initialize(&config.subtitles.directories, &EventBus::new(true))
        .await
        .unwrap();
    let resolver = Resolver::new(directories, &config.subtitles.formats);
    let state = AppState::new(Arc::new(resolver), Arc::new(config));

    TestServer {
        _tmp: tmp,
        dirs,
        app: routes().with_state(state),
    }
}

fn write(dir: &Path, name: &str, contents: &[u8]) {
    std::fs::write(dir.join(name), contents).unwrap();
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server(2).await;

    let (status, body) = get(&server.app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["search_dirs"].as_array().unwrap().len(), 2);
    assert_eq!(body["supported_formats"], serde_json::json!([".ass", ".srt", ".vtt"]));
}

#[tokio::test]
async fn test_get_subtitle_utf8() {
    let server = test_server(1).await;
    write(&server.dirs[0], "dQw4w9WgXcQ.srt", b"1\n00:00:01,000 --> 00:00:02,000\nNever\n");

    let (status, body) = get(&server.app, "/subtitle/dQw4w9WgXcQ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["video_id"], "dQw4w9WgXcQ");
    assert!(body["content"].as_str().unwrap().contains("Never"));
    assert_eq!(body["info"]["filename"], "dQw4w9WgXcQ.srt");
    assert_eq!(body["info"]["format"], ".srt");
    assert!(body.get("encoding").is_none());
}

#[tokio::test]
async fn test_get_subtitle_gbk_sets_encoding() {
    let server = test_server(1).await;
    write(&server.dirs[0], "abcde.ass", &[0xC4, 0xE3, 0xBA, 0xC3]);

    let (status, body) = get(&server.app, "/subtitle/abcde").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "你好");
    assert_eq!(body["encoding"], "gbk");
}

#[tokio::test]
async fn test_get_subtitle_undecodable() {
    let server = test_server(1).await;
    write(&server.dirs[0], "abcde.vtt", &[0xFF, 0xFF, 0xFF]);

    let (status, body) = get(&server.app, "/subtitle/abcde").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "UNSUPPORTED_ENCODING");
}

#[tokio::test]
async fn test_short_id_is_rejected() {
    let server = test_server(1).await;
    write(&server.dirs[0], "abcd.srt", b"x");

    let (status, body) = get(&server.app, "/subtitle/abcd").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_VIDEO_ID");
}

#[tokio::test]
async fn test_encoded_traversal_is_rejected() {
    let server = test_server(1).await;

    let (status, _) = get(&server.app, "/subtitle/..%2F..%2Fsecret").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_subtitle() {
    let server = test_server(1).await;

    let (status, body) = get(&server.app, "/subtitle/abcde").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "SUBTITLE_NOT_FOUND");
    assert_eq!(body["error"]["video_id"], "abcde");

    let (status, _) = get(&server.app, "/subtitle/abcde/info").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_info_from_second_directory() {
    let server = test_server(2).await;
    write(&server.dirs[1], "abcde.srt", b"12345");

    let (status, body) = get(&server.app, "/subtitle/abcde/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["size"], 5);
    assert_eq!(body["info"]["format"], ".srt");
    assert!(body["info"]["path"].as_str().unwrap().contains("dir2"));
    assert!(body["info"]["modified"].is_i64());
}

#[tokio::test]
async fn test_flexible_name_is_served() {
    let server = test_server(1).await;
    write(&server.dirs[0], "Some Movie-dQw4w9WgXcQ.vtt", b"WEBVTT\n");

    let (status, body) = get(&server.app, "/subtitle/dQw4w9WgXcQ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["filename"], "Some Movie-dQw4w9WgXcQ.vtt");
    assert_eq!(body["info"]["video_id"], "dQw4w9WgXcQ");
}

#[tokio::test]
async fn test_list_dedups_identifiers() {
    let server = test_server(2).await;
    write(&server.dirs[0], "abcde.srt", b"1");
    write(&server.dirs[1], "abcde.srt", b"2");
    write(&server.dirs[1], "fghij.ass", b"3");

    let (status, body) = get(&server.app, "/list").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["search_dirs"].as_array().unwrap().len(), 2);

    let subtitles = body["subtitles"].as_array().unwrap();
    let abcde = subtitles.iter().find(|s| s["video_id"] == "abcde").unwrap();
    assert_eq!(abcde["priority"], 1);
    let fghij = subtitles.iter().find(|s| s["video_id"] == "fghij").unwrap();
    assert_eq!(fghij["priority"], 2);
    assert!(fghij["source_dir"].as_str().unwrap().ends_with("dir2"));
}

#[tokio::test]
async fn test_config_endpoint() {
    let server = test_server(1).await;

    let (status, body) = get(&server.app, "/config").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["config"]["server_port"], 8888);
    assert_eq!(body["config"]["server_host"], "127.0.0.1");
    assert_eq!(body["config"]["supported_formats"][0], ".ass");
}
