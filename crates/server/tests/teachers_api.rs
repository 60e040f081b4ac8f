mod common;

use axum::http::StatusCode;
use campus_server::entity::{teacher, teaching_assignment};
use common::setup_app;
use serde_json::json;

#[tokio::test]
async fn test_teacher_crud() {
    let app = setup_app().await;

    let id = app
        .create(
            "/api/professores",
            json!({ "nome": "Carlos", "email": "carlos@ipw.pt" }),
        )
        .await;

    let (status, _) = app
        .put(
            &format!("/api/professores/{id}"),
            json!({ "nome": "Carlos Lima", "email": "c.lima@ipw.pt" }),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get("/api/professores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": id, "nome": "Carlos Lima", "email": "c.lima@ipw.pt" }])
    );

    let (status, _) = app.delete(&format!("/api/professores/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.count(teacher::Entity).await, 0);
}

#[tokio::test]
async fn test_update_validates_email_before_writing() {
    let app = setup_app().await;
    let id = app
        .create(
            "/api/professores",
            json!({ "nome": "Carlos", "email": "carlos@ipw.pt" }),
        )
        .await;

    let (status, body) = app
        .put(
            &format!("/api/professores/{id}"),
            json!({ "nome": "Renamed", "email": "not-an-email" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, body) = app.get("/api/professores").await;
    assert_eq!(body[0]["nome"], "Carlos");
    assert_eq!(body[0]["email"], "carlos@ipw.pt");
}

#[tokio::test]
async fn test_create_requires_email() {
    let app = setup_app().await;

    let (status, body) = app
        .post("/api/professores", json!({ "nome": "Carlos" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email is required");
    assert_eq!(app.count(teacher::Entity).await, 0);
}

#[tokio::test]
async fn test_delete_unassigns_courses_and_drops_assignments() {
    let app = setup_app().await;
    let teacher_id = app
        .create(
            "/api/professores",
            json!({ "nome": "Carlos", "email": "carlos@ipw.pt" }),
        )
        .await;
    let course_id = app
        .create(
            "/api/cursos",
            json!({ "nome": "Informática", "professor_id": teacher_id }),
        )
        .await;
    let subject_id = app
        .create(
            "/api/disciplinas",
            json!({ "nome": "Redes", "curso_id": course_id }),
        )
        .await;
    app.create(
        "/api/professor_disciplina",
        json!({ "professor_id": teacher_id, "disciplina_id": subject_id }),
    )
    .await;

    let (status, _) = app.delete(&format!("/api/professores/{teacher_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, courses) = app.get("/api/cursos").await;
    assert_eq!(
        courses,
        json!([{ "id": course_id, "nome": "Informática", "professor_id": null }])
    );
    assert_eq!(app.count(teaching_assignment::Entity).await, 0);

    let (_, teachers) = app
        .get(&format!("/api/professor_disciplina/disciplina/{subject_id}"))
        .await;
    assert_eq!(teachers, json!([]));
}
