#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use campus_server::{app, db::connect_and_migrate};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    _dir: TempDir,
}

pub async fn setup_app() -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("campus.db").display()
    );
    let db = connect_and_migrate(&url)
        .await
        .expect("test database should migrate");

    TestApp {
        router: app(db.clone()),
        db,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().uri(uri).method(method);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body should be JSON")
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }

    /// POST `body` 并断言 `201 Created`，返回生成的 id。
    pub async fn create(&self, uri: &str, body: Value) -> i64 {
        let (status, json) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected response: {json}");
        json["id"].as_i64().expect("created response should carry an id")
    }

    pub async fn count<E>(&self, _entity: E) -> u64
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        E::find()
            .count(&self.db)
            .await
            .expect("count query should succeed")
    }
}
