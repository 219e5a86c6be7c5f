//! Integration tests for the `/places/{id}/bookmark` endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, delete, post};
use serde_json::json;
use sqlx::PgPool;

async fn create_place(app: Router) -> i64 {
    let response = post(
        app,
        "/places",
        json!({"city": "Lisbon", "name": "Miradouro", "category": "viewpoint"}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test]
async fn bookmark_create_returns_row_with_timestamp(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let place_id = create_place(app.clone()).await;

    let response = post(
        app,
        &format!("/places/{place_id}/bookmark"),
        json!({"user_name": "joao"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["place_id"].as_i64().unwrap(), place_id);
    assert_eq!(json["user_name"], "joao");
    assert!(json["created_at"].is_string());
}

#[sqlx::test]
async fn duplicate_bookmark_conflicts_and_persists_exactly_one_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let place_id = create_place(app.clone()).await;

    let body = json!({"user_name": "joao"});
    let response = post(app.clone(), &format!("/places/{place_id}/bookmark"), body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post(app, &format!("/places/{place_id}/bookmark"), body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookmarks WHERE place_id = $1")
        .bind(place_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1, "exactly one bookmark row persisted");
}

#[sqlx::test]
async fn bookmark_on_missing_place_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post(app, "/places/9999/bookmark", json!({"user_name": "joao"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Place"));
}

#[sqlx::test]
async fn bookmark_with_empty_user_name_is_unprocessable(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let place_id = create_place(app.clone()).await;

    let response = post(
        app,
        &format!("/places/{place_id}/bookmark"),
        json!({"user_name": "  "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test]
async fn bookmark_delete_matches_place_and_user_together(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let place_id = create_place(app.clone()).await;

    post(
        app.clone(),
        &format!("/places/{place_id}/bookmark"),
        json!({"user_name": "maria"}),
    )
    .await;

    // Wrong user: nothing matches.
    let response = delete(app.clone(), &format!("/places/{place_id}/bookmark?user_name=joao")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(
        app.clone(),
        &format!("/places/{place_id}/bookmark?user_name=maria"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Already removed.
    let response = delete(app, &format!("/places/{place_id}/bookmark?user_name=maria")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
