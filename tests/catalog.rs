mod common;

use axum::http::{header, Method, StatusCode};
use serde_json::{json, Value};

use common::TestApp;

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .expect("list body")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}

#[tokio::test]
async fn superuser_creates_hotel_and_it_is_retrievable() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let res = app
        .post(
            "/api/v1/hotels",
            Some(&admin),
            json!({ "name": "Grand", "address": "1 Main St", "city": "Paris", "description": "Old" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    let id = res.data()["id"].as_i64().unwrap();
    assert_eq!(res.headers[header::LOCATION], format!("/api/v1/hotels/{id}").as_str());

    let user = app.user_token("reader").await;
    let fetched = app.get(&format!("/api/v1/hotels/{id}"), &user).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["name"], "Grand");
    assert_eq!(fetched.data()["description"], "Old");
}

#[tokio::test]
async fn regular_user_cannot_mutate_catalog() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let user = app.user_token("mallory").await;
    let hotel = app.create_hotel(&admin, "Existing").await;

    let res = app
        .post(
            "/api/v1/hotels",
            Some(&user),
            json!({ "name": "Sneaky", "address": "2 Side St", "city": "Rome" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .post(
            "/api/v1/rooms",
            Some(&user),
            json!({ "hotel": hotel, "room_type": "Suite", "capacity": 2, "price": "10.00" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .request(
            Method::PATCH,
            &format!("/api/v1/hotels/{hotel}"),
            Some(&user),
            Some(json!({ "name": "Renamed" })),
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .request(Method::DELETE, &format!("/api/v1/hotels/{hotel}"), Some(&user), None)
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    // Nothing changed
    let hotels = app.get("/api/v1/hotels", &user).await;
    assert_eq!(ids(&hotels.body), vec![hotel]);
    assert_eq!(hotels.body["data"][0]["name"], "Existing");
    let rooms = app.get("/api/v1/rooms", &user).await;
    assert!(ids(&rooms.body).is_empty());
}

#[tokio::test]
async fn hotel_put_patch_and_missing_ids() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let hotel = app.create_hotel(&admin, "Before").await;
    let uri = format!("/api/v1/hotels/{hotel}");

    let res = app
        .request(
            Method::PUT,
            &uri,
            Some(&admin),
            Some(json!({ "name": "After", "address": "9 New Rd", "city": "Oslo", "description": "Fjord" })),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.data()["city"], "Oslo");

    let res = app
        .request(Method::PATCH, &uri, Some(&admin), Some(json!({ "description": null })))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.data()["name"], "After");
    assert!(res.data()["description"].is_null());

    let missing = app.get("/api/v1/hotels/9999", &admin).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let invalid = app
        .post(
            "/api/v1/hotels",
            Some(&admin),
            json!({ "name": "", "address": "x", "city": "y" }),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert!(invalid.body["fields"]["name"].is_array());
}

#[tokio::test]
async fn room_requires_an_existing_hotel() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let res = app
        .post(
            "/api/v1/rooms",
            Some(&admin),
            json!({ "hotel": 4242, "room_type": "Suite", "capacity": 2, "price": "99.00" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["fields"]["hotel"].is_array());
}

#[tokio::test]
async fn room_rejects_bad_capacity_and_price() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let hotel = app.create_hotel(&admin, "H").await;

    let zero = app
        .post(
            "/api/v1/rooms",
            Some(&admin),
            json!({ "hotel": hotel, "room_type": "Single", "capacity": 0, "price": "10.00" }),
        )
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);
    assert!(zero.body["fields"]["capacity"].is_array());

    let negative = app
        .post(
            "/api/v1/rooms",
            Some(&admin),
            json!({ "hotel": hotel, "room_type": "Single", "capacity": 1, "price": "-1.00" }),
        )
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);
    assert!(negative.body["fields"]["price"].is_array());

    let too_precise = app
        .post(
            "/api/v1/rooms",
            Some(&admin),
            json!({ "hotel": hotel, "room_type": "Single", "capacity": 1, "price": "1.005" }),
        )
        .await;
    assert_eq!(too_precise.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn room_round_trips_price_and_dates() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let hotel = app.create_hotel(&admin, "H").await;
    let room = app
        .create_room(&admin, hotel, "Deluxe", 3, "149.5", &["2024-06-03", "2024-06-01"])
        .await;

    let res = app.get(&format!("/api/v1/rooms/{room}"), &admin).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.data()["price"], "149.50");
    assert_eq!(res.data()["hotel"], hotel);
    assert_eq!(res.data()["available_dates"], json!(["2024-06-01", "2024-06-03"]));

    let res = app
        .request(
            Method::PATCH,
            &format!("/api/v1/rooms/{room}"),
            Some(&admin),
            Some(json!({ "available_dates": ["2024-07-01"], "capacity": 4 })),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.data()["available_dates"], json!(["2024-07-01"]));
    assert_eq!(res.data()["capacity"], 4);
    assert_eq!(res.data()["room_type"], "Deluxe");
}

#[tokio::test]
async fn deleting_a_hotel_cascades_to_rooms_and_reservations() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let guest = app.user_token("guest").await;
    let hotel = app.create_hotel(&admin, "Doomed").await;
    let room = app.create_room(&admin, hotel, "Single", 1, "50.00", &[]).await;
    let booking = app.reserve(&guest, room, "2024-06-01", "2024-06-02").await;
    assert_eq!(booking.status, StatusCode::CREATED);

    let res = app
        .request(Method::DELETE, &format!("/api/v1/hotels/{hotel}"), Some(&admin), None)
        .await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let room_res = app.get(&format!("/api/v1/rooms/{room}"), &admin).await;
    assert_eq!(room_res.status, StatusCode::NOT_FOUND);
    let reservations = app.get("/api/v1/reservations", &guest).await;
    assert!(ids(&reservations.body).is_empty());

    let again = app
        .request(Method::DELETE, &format!("/api/v1/hotels/{hotel}"), Some(&admin), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

async fn seed_search_rooms(app: &TestApp, admin: &str) -> (i64, i64, i64, i64) {
    let hotel = app.create_hotel(admin, "Search").await;
    let suite_two = app
        .create_room(admin, hotel, "Suite", 2, "300.00", &["2024-06-01"])
        .await;
    let double_two = app
        .create_room(admin, hotel, "Double", 2, "120.00", &["2024-06-01", "2024-06-02"])
        .await;
    let suite_four = app
        .create_room(admin, hotel, "Junior Suite", 4, "200.00", &["2024-06-02"])
        .await;
    let single = app.create_room(admin, hotel, "Single", 1, "80.00", &[]).await;
    (suite_two, double_two, suite_four, single)
}

#[tokio::test]
async fn search_filters_by_capacity_and_room_type() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let user = app.user_token("searcher").await;
    let (suite_two, double_two, _, _) = seed_search_rooms(&app, &admin).await;

    let res = app.get("/api/v1/hotel-rooms?capacity=2", &user).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body), vec![suite_two, double_two]);

    let res = app
        .get("/api/v1/hotel-rooms?capacity=2&room_type=Suite", &user)
        .await;
    assert_eq!(ids(&res.body), vec![suite_two]);
}

#[tokio::test]
async fn search_by_date_and_substring() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let user = app.user_token("searcher").await;
    let (suite_two, double_two, suite_four, _) = seed_search_rooms(&app, &admin).await;

    let res = app.get("/api/v1/hotel-rooms?date=2024-06-02", &user).await;
    assert_eq!(ids(&res.body), vec![double_two, suite_four]);

    let res = app.get("/api/v1/hotel-rooms?search=suite", &user).await;
    assert_eq!(ids(&res.body), vec![suite_two, suite_four]);

    let res = app.get("/api/v1/hotel-rooms?date=", &user).await;
    assert_eq!(ids(&res.body).len(), 4);

    let res = app.get("/api/v1/hotel-rooms?date=June", &user).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_ordering() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let user = app.user_token("searcher").await;
    let (suite_two, double_two, suite_four, single) = seed_search_rooms(&app, &admin).await;

    let res = app.get("/api/v1/hotel-rooms?ordering=price", &user).await;
    assert_eq!(ids(&res.body), vec![single, double_two, suite_four, suite_two]);

    let res = app.get("/api/v1/hotel-rooms?ordering=-capacity,price", &user).await;
    assert_eq!(ids(&res.body), vec![suite_four, double_two, suite_two, single]);

    // Unknown keys fall back to id order
    let res = app.get("/api/v1/hotel-rooms?ordering=bogus", &user).await;
    assert_eq!(ids(&res.body), vec![suite_two, double_two, suite_four, single]);
}
