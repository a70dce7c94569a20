use axum::http::{HeaderName, HeaderValue, StatusCode};
use barberbook_api::handlers::booking::{booked_local_times, booking_detail, day_slots};
use barberbook_core::slots::{local_day_bounds, TimeSlot, AFTERNOON_SLOTS, MORNING_SLOTS};
use barberbook_db::models::{DbBooking, DbBookingDetail};
use chrono::{NaiveDate, TimeZone, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{
    connect_test_pool, database_server, seed_service_and_user, test_offset, TestContext,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stored_booking(service_id: Uuid, hour_utc: u32) -> DbBooking {
    DbBooking {
        id: Uuid::new_v4(),
        service_id,
        user_id: Uuid::new_v4(),
        date: Utc.with_ymd_and_hms(2024, 5, 11, hour_utc, 0, 0).unwrap(),
        created_at: Utc::now(),
    }
}

fn user_header(id: Uuid) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-user-id"),
        HeaderValue::from_str(&id.to_string()).unwrap(),
    )
}

#[tokio::test]
async fn test_day_slots_over_fetched_bookings() {
    let mut ctx = TestContext::new();
    let service_id = Uuid::new_v4();
    let selected = day(2024, 5, 11);
    let (start, end) = local_day_bounds(selected, test_offset()).unwrap();

    // 17:00 UTC is 14:00 at UTC-3
    ctx.booking_repo
        .expect_fetch_bookings()
        .with(
            predicate::eq(service_id),
            predicate::eq(start),
            predicate::eq(end),
        )
        .times(1)
        .returning(move |service_id, _, _| Ok(vec![stored_booking(service_id, 17)]));

    let bookings = ctx.booking_repo.fetch_bookings(service_id, start, end).await.unwrap();
    let now = day(2024, 5, 10).and_hms_opt(20, 0, 0).unwrap();
    let slots = day_slots(selected, &bookings, test_offset(), now);

    assert_eq!(slots.morning, MORNING_SLOTS.to_vec());
    let expected: Vec<TimeSlot> = AFTERNOON_SLOTS
        .iter()
        .copied()
        .filter(|slot| slot.to_string() != "14:00")
        .collect();
    assert_eq!(slots.afternoon, expected);
    assert_eq!(slots.evening.len(), 2);
}

#[test]
fn test_booked_local_times_shift_to_shop_clock() {
    let service_id = Uuid::new_v4();
    let bookings = vec![stored_booking(service_id, 12), stored_booking(service_id, 22)];

    let local = booked_local_times(&bookings, test_offset());
    assert_eq!(
        local,
        vec![
            day(2024, 5, 11).and_hms_opt(9, 0, 0).unwrap(),
            day(2024, 5, 11).and_hms_opt(19, 0, 0).unwrap(),
        ]
    );
}

#[tokio::test]
async fn test_upcoming_bookings_detail() {
    let mut ctx = TestContext::new();
    let user_id = Uuid::new_v4();
    let now = Utc::now();

    ctx.booking_repo
        .expect_get_upcoming_bookings_for_user()
        .with(predicate::eq(user_id), predicate::always())
        .returning(|_, from| {
            Ok(vec![DbBookingDetail {
                id: Uuid::new_v4(),
                date: from + chrono::Duration::days(1),
                service_id: Uuid::new_v4(),
                service_name: "Corte de Cabelo".to_string(),
                price_cents: 6000,
                barbershop_id: Uuid::new_v4(),
                barbershop_name: "Vintage Barber".to_string(),
                barbershop_image_url: "https://example.com/vintage.png".to_string(),
            }])
        });

    let rows = ctx.booking_repo.get_upcoming_bookings_for_user(user_id, now).await.unwrap();
    let details: Vec<_> = rows
        .into_iter()
        .map(|row| booking_detail(row, test_offset()))
        .collect();

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].price, "R$ 60,00");
    assert_eq!(details[0].barbershop_name, "Vintage Barber");
    assert_eq!(
        details[0].local_date,
        (now + chrono::Duration::days(1) - chrono::Duration::hours(3)).naive_utc()
    );
}

#[tokio::test]
async fn test_create_booking_requires_identity() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/bookings")
        .json(&json!({
            "service_id": Uuid::new_v4(),
            "date": "2030-01-15",
            "time": "14:00",
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("Sign in"));
}

#[tokio::test]
async fn test_create_booking_rejects_malformed_identity() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/bookings")
        .add_header(
            HeaderName::from_static("x-user-id"),
            HeaderValue::from_static("felipe"),
        )
        .json(&json!({
            "service_id": Uuid::new_v4(),
            "date": "2030-01-15",
            "time": "14:00",
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_booking_withheld_without_time() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let (name, value) = user_header(Uuid::new_v4());

    let response = server
        .post("/api/bookings")
        .add_header(name, value)
        .json(&json!({
            "service_id": Uuid::new_v4(),
            "date": "2030-01-15",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(
        body["error"],
        "Validation error: Select a day and a time before confirming"
    );
}

#[tokio::test]
async fn test_create_booking_withheld_without_day() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let (name, value) = user_header(Uuid::new_v4());

    let response = server
        .post("/api/bookings")
        .add_header(name, value)
        .json(&json!({
            "service_id": Uuid::new_v4(),
            "time": "10:00",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_bookings_require_identity() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/bookings").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_slots_reject_invalid_date() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .get(&format!("/api/services/{}/slots", Uuid::new_v4()))
        .add_query_param("date", "10/05/2024")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_slots_reject_day_at_calendar_edge() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .get(&format!("/api/services/{}/slots", Uuid::new_v4()))
        .add_query_param("date", "+262142-12-31")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Validation error: date out of range");
}

#[tokio::test]
async fn test_create_booking_rejects_day_at_calendar_edge() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let (name, value) = user_header(Uuid::new_v4());

    let response = server
        .post("/api/bookings")
        .add_header(name, value)
        .json(&json!({
            "service_id": Uuid::new_v4(),
            "date": "+262142-12-31",
            "time": "20:00",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

fn afternoon(body: &Value) -> Vec<String> {
    body["afternoon"]
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| slot.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
#[ignore = "requires a Postgres instance at TEST_DATABASE_URL"]
async fn test_slots_leave_out_stored_booking() {
    let pool = connect_test_pool().await;
    let (service_id, user_id) = seed_service_and_user(&pool).await;

    // 17:00 UTC is 14:00 at UTC-3
    let stored = Utc.with_ymd_and_hms(2099, 1, 15, 17, 0, 0).unwrap();
    barberbook_db::repositories::booking::create_booking(&pool, service_id, user_id, stored)
        .await
        .unwrap()
        .unwrap();

    let server = database_server(pool);
    let response = server
        .get(&format!("/api/services/{}/slots", service_id))
        .add_query_param("date", "2099-01-15")
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["date"], "2099-01-15");
    assert_eq!(body["morning"], json!(["09:00", "10:00", "11:00"]));
    assert_eq!(afternoon(&body), vec!["13:00", "15:00", "16:00", "17:00", "18:00"]);
    assert_eq!(body["evening"], json!(["19:00", "20:00"]));

    // The neighbouring day is untouched
    let next_day = server
        .get(&format!("/api/services/{}/slots", service_id))
        .add_query_param("date", "2099-01-16")
        .await;
    assert_eq!(afternoon(&next_day.json::<Value>()).len(), AFTERNOON_SLOTS.len());
}

#[tokio::test]
#[ignore = "requires a Postgres instance at TEST_DATABASE_URL"]
async fn test_create_booking_then_same_slot_conflicts() {
    let pool = connect_test_pool().await;
    let (service_id, user_id) = seed_service_and_user(&pool).await;
    let server = database_server(pool);
    let request = json!({
        "service_id": service_id,
        "date": "2099-01-15",
        "time": "14:00",
    });

    let (name, value) = user_header(user_id);
    let created = server
        .post("/api/bookings")
        .add_header(name, value)
        .json(&request)
        .await;

    created.assert_status(StatusCode::CREATED);
    let body = created.json::<Value>();
    assert_eq!(body["service_id"], json!(service_id));
    assert_eq!(body["local_date"], "2099-01-15T14:00:00");
    assert_eq!(body["date"], "2099-01-15T17:00:00Z");

    let (name, value) = user_header(user_id);
    let repeated = server
        .post("/api/bookings")
        .add_header(name, value)
        .json(&request)
        .await;

    repeated.assert_status(StatusCode::CONFLICT);
    let body = repeated.json::<Value>();
    assert_eq!(body["error"], "Conflict: 14:00 on 2099-01-15 is already booked");

    let slots = server
        .get(&format!("/api/services/{}/slots", service_id))
        .add_query_param("date", "2099-01-15")
        .await;
    assert!(!afternoon(&slots.json::<Value>()).contains(&"14:00".to_string()));
}

#[tokio::test]
#[ignore = "requires a Postgres instance at TEST_DATABASE_URL"]
async fn test_create_booking_rejects_unknown_user() {
    let pool = connect_test_pool().await;
    let (service_id, _) = seed_service_and_user(&pool).await;
    let server = database_server(pool);
    let (name, value) = user_header(Uuid::new_v4());

    let response = server
        .post("/api/bookings")
        .add_header(name, value)
        .json(&json!({
            "service_id": service_id,
            "date": "2099-01-15",
            "time": "14:00",
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("Unknown user"));
}

#[tokio::test]
#[ignore = "requires a Postgres instance at TEST_DATABASE_URL"]
async fn test_create_booking_for_missing_service() {
    let pool = connect_test_pool().await;
    let (_, user_id) = seed_service_and_user(&pool).await;
    let server = database_server(pool);
    let (name, value) = user_header(user_id);

    let response = server
        .post("/api/bookings")
        .add_header(name, value)
        .json(&json!({
            "service_id": Uuid::new_v4(),
            "date": "2099-01-15",
            "time": "14:00",
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
