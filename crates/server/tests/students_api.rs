mod common;

use axum::http::StatusCode;
use campus_server::entity::student;
use common::setup_app;
use serde_json::json;

#[tokio::test]
async fn test_create_then_list_student() {
    let app = setup_app().await;

    let (status, body) = app
        .post("/api/alunos", json!({ "nome": "Ana", "email": "ana@ipw.pt" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().expect("id should be numeric");

    let (status, body) = app.get("/api/alunos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": id, "nome": "Ana", "email": "ana@ipw.pt" }]));
}

#[tokio::test]
async fn test_list_is_empty_array_initially() {
    let app = setup_app().await;

    let (status, body) = app.get("/api/alunos").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_missing_fields_are_rejected_without_writing() {
    let app = setup_app().await;

    for body in [
        json!({ "email": "ana@ipw.pt" }),
        json!({ "nome": "Ana" }),
        json!({ "nome": "   ", "email": "ana@ipw.pt" }),
        json!({}),
    ] {
        let (status, response) = app.post("/api/alunos", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body} should be rejected");
        assert_eq!(response["code"], "VALIDATION_ERROR");
    }

    assert_eq!(app.count(student::Entity).await, 0);
}

#[tokio::test]
async fn test_malformed_email_is_rejected() {
    let app = setup_app().await;

    let (status, body) = app
        .post("/api/alunos", json!({ "nome": "Ana", "email": "not-an-email" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "invalid email: not-an-email");
    assert_eq!(app.count(student::Entity).await, 0);
}

#[tokio::test]
async fn test_minimal_email_is_accepted() {
    let app = setup_app().await;

    app.create("/api/alunos", json!({ "nome": "A", "email": "a@b.co" }))
        .await;

    assert_eq!(app.count(student::Entity).await, 1);
}

#[tokio::test]
async fn test_update_replaces_row() {
    let app = setup_app().await;
    let id = app
        .create("/api/alunos", json!({ "nome": "Ana", "email": "ana@ipw.pt" }))
        .await;

    let (status, body) = app
        .put(
            &format!("/api/alunos/{id}"),
            json!({ "nome": "Ana Sousa", "email": "ana.sousa@ipw.pt" }),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (_, body) = app.get("/api/alunos").await;
    assert_eq!(
        body,
        json!([{ "id": id, "nome": "Ana Sousa", "email": "ana.sousa@ipw.pt" }])
    );
}

#[tokio::test]
async fn test_invalid_update_leaves_row_untouched() {
    let app = setup_app().await;
    let id = app
        .create("/api/alunos", json!({ "nome": "Ana", "email": "ana@ipw.pt" }))
        .await;

    let (status, _) = app
        .put(
            &format!("/api/alunos/{id}"),
            json!({ "nome": "Bruno", "email": "not-an-email" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/alunos").await;
    assert_eq!(body[0]["nome"], "Ana");
    assert_eq!(body[0]["email"], "ana@ipw.pt");
}

#[tokio::test]
async fn test_update_of_missing_id_is_a_successful_no_op() {
    let app = setup_app().await;

    let (status, _) = app
        .put("/api/alunos/4242", json!({ "nome": "Ghost", "email": "ghost@ipw.pt" }))
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.count(student::Entity).await, 0);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = setup_app().await;
    let id = app
        .create("/api/alunos", json!({ "nome": "Ana", "email": "ana@ipw.pt" }))
        .await;

    let (status, _) = app.delete(&format!("/api/alunos/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.delete(&format!("/api/alunos/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.delete("/api/alunos/999").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.count(student::Entity).await, 0);
}

#[tokio::test]
async fn test_non_json_body_is_a_validation_error() {
    let app = setup_app().await;

    let (status, body) = app
        .send("POST", "/api/alunos", Some(json!("just a string")))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_path_id_is_a_validation_error() {
    let app = setup_app().await;

    let (status, body) = app.delete("/api/alunos/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // 超出 i32 范围。
    let (status, body) = app
        .put(
            "/api/alunos/99999999999",
            json!({ "nome": "Ana", "email": "ana@ipw.pt" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(app.count(student::Entity).await, 0);
}
