//! Shared fixtures for repository tests.

use chrono::NaiveDate;
use sqlx::PgPool;
use triplan_db::models::place::{CreatePlace, Place};
use triplan_db::models::review::{CreateReview, Review};
use triplan_db::models::trip::{CreateTrip, Trip};
use triplan_db::repositories::{PlaceRepo, ReviewRepo, TripRepo};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn make_place(pool: &PgPool, city: &str, name: &str, category: &str) -> Place {
    PlaceRepo::create(
        pool,
        &CreatePlace {
            city: city.into(),
            name: name.into(),
            category: category.into(),
        },
    )
    .await
    .unwrap()
}

pub async fn make_trip(
    pool: &PgPool,
    name: &str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
) -> Trip {
    TripRepo::create(
        pool,
        &CreateTrip {
            name: name.into(),
            start_date: date(start.0, start.1, start.2),
            end_date: date(end.0, end.1, end.2),
        },
    )
    .await
    .unwrap()
}

pub async fn make_review(pool: &PgPool, place_id: i64, user_name: &str, rating: i32) -> Review {
    ReviewRepo::create(
        pool,
        place_id,
        &CreateReview {
            user_name: user_name.into(),
            rating,
            comment: None,
        },
    )
    .await
    .unwrap()
}
