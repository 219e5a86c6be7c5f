//! Integration tests for the `/places/{id}/reviews` endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, post};
use serde_json::json;
use sqlx::PgPool;

async fn create_place(app: Router) -> i64 {
    let response = post(
        app,
        "/places",
        json!({"city": "Porto", "name": "Douro cruise", "category": "activity"}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test]
async fn review_create_returns_created_row(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let place_id = create_place(app.clone()).await;

    let response = post(
        app,
        &format!("/places/{place_id}/reviews"),
        json!({"user_name": "ana", "rating": 4, "comment": "Lovely at sunset"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["place_id"].as_i64().unwrap(), place_id);
    assert_eq!(json["rating"], 4);
    assert_eq!(json["comment"], "Lovely at sunset");
    assert!(json["created_at"].is_string());
}

#[sqlx::test]
async fn review_comment_is_optional(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let place_id = create_place(app.clone()).await;

    let response = post(
        app,
        &format!("/places/{place_id}/reviews"),
        json!({"user_name": "rui", "rating": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["comment"].is_null());
}

#[sqlx::test]
async fn boundary_ratings_succeed_and_out_of_range_fail(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let place_id = create_place(app.clone()).await;

    for (rating, expected) in [
        (0, StatusCode::UNPROCESSABLE_ENTITY),
        (1, StatusCode::CREATED),
        (5, StatusCode::CREATED),
        (6, StatusCode::UNPROCESSABLE_ENTITY),
    ] {
        let response = post(
            app.clone(),
            &format!("/places/{place_id}/reviews"),
            json!({"user_name": "ana", "rating": rating}),
        )
        .await;
        assert_eq!(response.status(), expected, "rating {rating}");
    }
}

#[sqlx::test]
async fn review_on_missing_place_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = post(
        app.clone(),
        "/places/9999/reviews",
        json!({"user_name": "ana", "rating": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/places/9999/reviews").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn review_list_is_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let place_id = create_place(app.clone()).await;

    let mut ids = Vec::new();
    for (user, rating) in [("ana", 4), ("rui", 5), ("maria", 2)] {
        let response = post(
            app.clone(),
            &format!("/places/{place_id}/reviews"),
            json!({"user_name": user, "rating": rating}),
        )
        .await;
        ids.push(body_json(response).await["id"].as_i64().unwrap());
    }

    let response = get(app, &format!("/places/{place_id}/reviews")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let got: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();

    ids.reverse();
    assert_eq!(got, ids);
}
