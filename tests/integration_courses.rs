mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_teacher, delete_request, get_request, json_request, setup_test_app,
    token_for,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_course_lifecycle(pool: PgPool) {
    let teacher = create_test_teacher(&pool, "Ada Lovelace", "ada@school.test", "engine42").await;
    let token = token_for(&teacher);

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/courses",
            Some(&token),
            json!({
                "title": "Analytical Engines",
                "description": "Punch cards and mills",
                "teacherId": teacher.id
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let course_id = body_json(response).await["id"].as_i64().unwrap();

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/courses/{course_id}"),
            Some(&token),
            json!({ "description": null }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert!(updated["description"].is_null());
    assert_eq!(updated["title"], "Analytical Engines");
    assert_eq!(updated["teacherId"], teacher.id);

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(get_request("/api/courses", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["meta"]["total"], 1);
    assert_eq!(page["meta"]["limit"], 10);

    let app = setup_test_app(pool.clone());
    let response = app
        .oneshot(delete_request(&format!("/api/courses/{course_id}"), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Course deleted successfully"
    );

    let app = setup_test_app(pool);
    let response = app
        .oneshot(get_request(&format!("/api/courses/{course_id}"), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_with_unknown_teacher_is_bad_request(pool: PgPool) {
    let teacher = create_test_teacher(&pool, "Ada Lovelace", "ada@school.test", "engine42").await;
    let token = token_for(&teacher);

    let app = setup_test_app(pool);
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/courses",
            Some(&token),
            json!({ "title": "Ghost Course", "teacherId": teacher.id + 1000 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "teacherId does not match an existing record");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_teacher_keeps_course(pool: PgPool) {
    let teacher = create_test_teacher(&pool, "Ada Lovelace", "ada@school.test", "engine42").await;
    let course_id = common::create_test_course(&pool, "Analytical Engines", Some(teacher.id)).await;

    sqlx::query("DELETE FROM teachers WHERE id = $1")
        .bind(teacher.id)
        .execute(&pool)
        .await
        .unwrap();

    let other = create_test_teacher(&pool, "Grace Hopper", "grace@school.test", "cobol1959").await;
    let app = setup_test_app(pool);
    let response = app
        .oneshot(get_request(
            &format!("/api/courses/{course_id}"),
            Some(&token_for(&other)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["teacherId"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_course_is_not_found(pool: PgPool) {
    let teacher = create_test_teacher(&pool, "Ada Lovelace", "ada@school.test", "engine42").await;

    let app = setup_test_app(pool);
    let response = app
        .oneshot(delete_request("/api/courses/999999", &token_for(&teacher)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
