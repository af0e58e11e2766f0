mod common;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use common::{snapshot, Portal, Recorded, StubBackend};
use serde_json::{json, Value as JsonValue};

async fn record(State(sent): State<Recorded>, Json(body): Json<JsonValue>) -> Response {
    sent.push(body);
    StatusCode::CREATED.into_response()
}

fn listing_routes() -> Router<Recorded> {
    Router::new()
        .route(
            "/users/detailed",
            get(|| async {
                Json(json!([
                    {
                        "userId": 1,
                        "userName": "root",
                        "role": { "roleNameEn": "admin", "roleNameRu": "администратор" }
                    },
                    {
                        "userId": 7,
                        "userName": "anna",
                        "role": { "roleNameEn": "student", "roleNameRu": "студент" },
                        "groupCode": "IS-21"
                    }
                ]))
            }),
        )
        .route(
            "/users/teachers",
            get(|| async { Json(json!([{ "userId": 3, "userName": "ivan" }])) }),
        )
        .route(
            "/roles",
            get(|| async {
                Json(json!([
                    { "roleNameEn": "admin", "roleNameRu": "администратор" },
                    { "roleNameEn": "teacher", "roleNameRu": "преподаватель" },
                    { "roleNameEn": "student", "roleNameRu": "студент" }
                ]))
            }),
        )
        .route(
            "/groups",
            get(|| async { Json(json!([{ "groupCode": "IS-21" }])) }).post(
                |Json(body): Json<JsonValue>| async move {
                    if body["groupCode"] == "IS-21" {
                        (
                            StatusCode::CONFLICT,
                            Json(json!({ "message": "Group already exists" })),
                        )
                            .into_response()
                    } else {
                        StatusCode::CREATED.into_response()
                    }
                },
            ),
        )
        .route(
            "/disciplines/detailed",
            get(|| async {
                Json(json!([{
                    "disciplineId": 1,
                    "disciplineName": "Math",
                    "groups": [{ "groupCode": "IS-21" }],
                    "teachers": [{ "userId": 3, "userName": "ivan" }]
                }]))
            }),
        )
        .route("/disciplines", post(record))
        .route("/users/student", post(record))
        .route("/users/employee", post(record))
}

async fn stub(sent: Recorded) -> StubBackend {
    StubBackend::spawn(listing_routes().with_state(sent)).await
}

#[tokio::test]
async fn dashboard_aggregates_every_listing() {
    let backend = stub(Recorded::default()).await;
    let portal = Portal::new(&backend.url);
    let token = portal.login_as(snapshot(1, "root", "admin")).await;

    let (status, _, body) = portal
        .send("GET", "/dashboard/admin", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userName"], "root");
    assert_eq!(body["users"].as_array().unwrap().len(), 2);
    assert_eq!(body["users"][1]["groupCode"], "IS-21");
    assert_eq!(body["teachers"][0]["userName"], "ivan");
    assert_eq!(body["roles"].as_array().unwrap().len(), 3);
    assert_eq!(body["groups"][0]["groupCode"], "IS-21");
    assert_eq!(body["disciplines"][0]["teachers"][0]["userId"], 3);
    assert_eq!(backend.hits(), 5);
}

#[tokio::test]
async fn dashboard_failure_shows_load_error() {
    let backend = StubBackend::spawn(Router::new()).await;
    let portal = Portal::new(&backend.url);
    let token = portal.login_as(snapshot(1, "root", "admin")).await;

    let (status, _, body) = portal
        .send("GET", "/dashboard/admin", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["notice"]["text"], "Failed to load data");
}

#[tokio::test]
async fn students_need_a_group() {
    let sent = Recorded::default();
    let backend = stub(sent.clone()).await;
    let portal = Portal::new(&backend.url);
    let token = portal.login_as(snapshot(1, "root", "admin")).await;

    let (status, _, body) = portal
        .send(
            "POST",
            "/dashboard/admin/users",
            Some(&token),
            Some(json!({ "userName": "boris", "roleNameEn": "student", "groupCode": " " })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["notice"]["text"], "A group is required for students");
    assert_eq!(backend.hits(), 0);

    let (status, _, body) = portal
        .send(
            "POST",
            "/dashboard/admin/users",
            Some(&token),
            Some(json!({ "userName": "boris", "roleNameEn": "student", "groupCode": "IS-21" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["notice"]["text"], "User created successfully");

    let (status, _, _) = portal
        .send(
            "POST",
            "/dashboard/admin/users",
            Some(&token),
            Some(json!({ "userName": "olga", "roleNameEn": "teacher" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(
        sent.all(),
        vec![
            json!({ "userName": "boris", "roleNameEn": "student", "groupCode": "IS-21" }),
            json!({ "userName": "olga", "roleNameEn": "teacher" }),
        ]
    );
}

#[tokio::test]
async fn groups_and_disciplines() {
    let sent = Recorded::default();
    let backend = stub(sent.clone()).await;
    let portal = Portal::new(&backend.url);
    let token = portal.login_as(snapshot(1, "root", "admin")).await;

    let (status, _, body) = portal
        .send("POST", "/dashboard/admin/groups", Some(&token), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["notice"]["text"], "Group code is required");

    let (status, _, body) = portal
        .send(
            "POST",
            "/dashboard/admin/groups",
            Some(&token),
            Some(json!({ "groupCode": "CS-22" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["notice"]["text"], "Group created successfully");

    let (status, _, body) = portal
        .send(
            "POST",
            "/dashboard/admin/groups",
            Some(&token),
            Some(json!({ "groupCode": "IS-21" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["notice"]["text"], "Failed to create group");

    let (status, _, _) = portal
        .send(
            "POST",
            "/dashboard/admin/disciplines",
            Some(&token),
            Some(json!({
                "disciplineName": "Physics",
                "teachersIds": [3],
                "groupsCodes": ["IS-21", "CS-22"]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        sent.all(),
        vec![json!({
            "disciplineName": "Physics",
            "teachersIds": [3],
            "groupsCodes": ["IS-21", "CS-22"]
        })]
    );
}
