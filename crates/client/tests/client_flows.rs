use campus_api_types::{CourseInput, CourseSummary, PersonInput, SubjectInput};
use campus_client::{
    CampusClient, ClientError, Dashboard, SessionCache, save_student, save_teacher,
};
use campus_server::{app, db::connect_and_migrate};
use tempfile::TempDir;
use tokio::net::TcpListener;

struct TestServer {
    client: CampusClient,
    _dir: TempDir,
}

async fn spawn_server() -> TestServer {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("campus.db").display()
    );
    let db = connect_and_migrate(&url)
        .await
        .expect("test database should migrate");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    tokio::spawn(async move {
        axum::serve(listener, app(db))
            .await
            .expect("server should run");
    });

    TestServer {
        client: CampusClient::new(format!("http://{addr}/")),
        _dir: dir,
    }
}

fn person(name: &str, email: &str) -> PersonInput {
    PersonInput {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
    }
}

fn course_input(name: &str, teacher_id: Option<i32>) -> CourseInput {
    CourseInput {
        name: Some(name.to_string()),
        teacher_id,
    }
}

#[tokio::test]
async fn test_health() {
    let server = spawn_server().await;

    let health = server.client.health().await.unwrap();

    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_api_errors_carry_code_and_message() {
    let server = spawn_server().await;

    let err = server
        .client
        .create_student(&PersonInput {
            name: Some("Ana".to_string()),
            email: None,
        })
        .await
        .unwrap_err();

    match &err {
        ClientError::Api { status, body } => {
            assert_eq!(*status, 400);
            assert_eq!(body.error, "email is required");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
    assert_eq!(err.code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_save_student_create_and_edit() {
    let server = spawn_server().await;
    let client = &server.client;
    let informatica = client.create_course(&course_input("Informática", None)).await.unwrap();
    let gestao = client.create_course(&course_input("Gestão", None)).await.unwrap();

    let id = save_student(client, None, &person("Ana", "ana@ipw.pt"), &[informatica])
        .await
        .unwrap();
    assert_eq!(
        client.courses_of_student(id).await.unwrap(),
        vec![CourseSummary {
            id: informatica,
            name: "Informática".to_string()
        }]
    );

    save_student(client, Some(id), &person("Ana Silva", "ana@ipw.pt"), &[gestao])
        .await
        .unwrap();
    let courses = client.courses_of_student(id).await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, gestao);
    assert_eq!(client.list_students().await.unwrap()[0].name, "Ana Silva");

    // 编辑时不选任何课程即清空选课。
    save_student(client, Some(id), &person("Ana Silva", "ana@ipw.pt"), &[])
        .await
        .unwrap();
    assert!(client.courses_of_student(id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_teacher_replaces_subjects() {
    let server = spawn_server().await;
    let client = &server.client;
    let course = client.create_course(&course_input("Informática", None)).await.unwrap();
    let mut subjects = Vec::new();
    for name in ["Redes", "Algoritmos"] {
        let id = client
            .create_subject(&SubjectInput {
                name: Some(name.to_string()),
                course_id: Some(course),
            })
            .await
            .unwrap();
        subjects.push(id);
    }

    let id = save_teacher(client, None, &person("Carlos", "carlos@ipw.pt"), &subjects)
        .await
        .unwrap();
    assert_eq!(client.subjects_of_teacher(id).await.unwrap().len(), 2);

    save_teacher(client, Some(id), &person("Carlos", "carlos@ipw.pt"), &subjects[1..])
        .await
        .unwrap();
    let taught = client.subjects_of_teacher(id).await.unwrap();
    assert_eq!(taught.len(), 1);
    assert_eq!(taught[0].name, "Algoritmos");
    assert_eq!(taught[0].course_name.as_deref(), Some("Informática"));
}

#[tokio::test]
async fn test_association_calls() {
    let server = spawn_server().await;
    let client = &server.client;
    let student = client.create_student(&person("Ana", "ana@ipw.pt")).await.unwrap();
    let course = client.create_course(&course_input("Informática", None)).await.unwrap();

    client.enroll(student, course).await.unwrap();
    let err = client.enroll(student, course).await.unwrap_err();
    assert_eq!(err.code(), Some("CONFLICT"));

    let students = client.students_of_course(course).await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, student);

    client.unenroll(student, course).await.unwrap();
    client.unenroll(student, course).await.unwrap();
    assert!(client.students_of_course(course).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cache_and_dashboard() {
    let server = spawn_server().await;
    let client = server.client.clone();
    let teacher = client.create_teacher(&person("Carlos", "carlos@ipw.pt")).await.unwrap();
    client
        .create_course(&course_input("Informática", Some(teacher)))
        .await
        .unwrap();
    client.create_course(&course_input("Gestão", None)).await.unwrap();

    let mut cache = SessionCache::new(client.clone());
    assert!(cache.teacher(teacher).is_none());
    assert_eq!(cache.teachers().await.unwrap().len(), 1);
    assert_eq!(cache.teacher(teacher).map(|t| t.name.as_str()), Some("Carlos"));

    // 缓存失效前看不到新的写入。
    client.create_student(&person("Ana", "ana@ipw.pt")).await.unwrap();
    assert_eq!(cache.students().await.unwrap().len(), 1);
    client.create_student(&person("Bruno", "bruno@ipw.pt")).await.unwrap();
    assert_eq!(cache.students().await.unwrap().len(), 1);
    cache.invalidate();
    assert_eq!(cache.students().await.unwrap().len(), 2);

    let dashboard = Dashboard::load(&client).await.unwrap();
    assert_eq!(dashboard.total_courses, 2);
    assert_eq!(dashboard.total_students, 2);
    assert_eq!(dashboard.total_teachers, 1);
    assert_eq!(dashboard.recent_students[0].name, "Bruno");
    assert_eq!(dashboard.courses[0].teacher_name.as_deref(), Some("Carlos"));
    assert_eq!(dashboard.courses[1].teacher_name, None);

    client.delete_teacher(teacher).await.unwrap();
    cache.refresh().await.unwrap();
    assert!(cache.teachers().await.unwrap().is_empty());
    assert_eq!(cache.courses().await.unwrap()[0].teacher_id, None);
}
