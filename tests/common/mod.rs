#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    extract,
    http::{HeaderMap, Request, StatusCode},
    middleware::{self, Next},
    Router,
};
use serde_json::{json, Value as JsonValue};
use survey_portal::models::discipline::DisciplineRef;
use survey_portal::models::session::SessionSnapshot;
use survey_portal::models::survey::SurveySummary;
use survey_portal::routes::app_router;
use survey_portal::services::api_client::ApiClient;
use survey_portal::services::session_service::SessionStore;
use survey_portal::AppState;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Stand-in for the survey REST backend, listening on a random local port.
pub struct StubBackend {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StubBackend {
    pub async fn spawn(routes: Router) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = routes.layer(middleware::from_fn(move |req: extract::Request, next: Next| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                next.run(req).await
            }
        }));

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            url: format!("http://{}", addr),
            hits,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Request bodies the stub received, in arrival order.
#[derive(Clone, Default)]
pub struct Recorded(Arc<Mutex<Vec<JsonValue>>>);

impl Recorded {
    pub fn push(&self, body: JsonValue) {
        self.0.lock().unwrap().push(body);
    }

    pub fn all(&self) -> Vec<JsonValue> {
        self.0.lock().unwrap().clone()
    }
}

pub struct Portal {
    pub app: Router,
    pub sessions: SessionStore,
}

impl Portal {
    pub fn new(api_url: &str) -> Self {
        let sessions = SessionStore::new();
        let api = ApiClient::new(api_url).expect("api client");
        let app = app_router(AppState::with_api(api, sessions.clone()));
        Self { app, sessions }
    }

    pub async fn login_as(&self, snapshot: SessionSnapshot) -> String {
        self.sessions.create(snapshot).await
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<JsonValue>,
    ) -> (StatusCode, HeaderMap, JsonValue) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let json = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, json)
    }
}

pub fn location(headers: &HeaderMap) -> &str {
    headers
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub fn math() -> DisciplineRef {
    DisciplineRef {
        discipline_id: 1,
        discipline_name: "Math".into(),
    }
}

pub fn summary(id: i64, name: &str, end_date: &str) -> SurveySummary {
    SurveySummary {
        survey_id: id,
        survey_name: name.into(),
        survey_end_date: end_date.into(),
        survey_created_date: Some("2024-09-01".into()),
        survey_created_by: None,
        survey_on_discipline: math(),
    }
}

pub fn snapshot(user_id: i64, user_name: &str, role: &str) -> SessionSnapshot {
    SessionSnapshot {
        user_id,
        user_name: user_name.into(),
        role_name_en: role.into(),
        available_surveys: vec![],
        student_grades: vec![],
        available_disciplines: vec![],
    }
}

pub fn snapshot_json(user_id: i64, user_name: &str, role: &str) -> JsonValue {
    json!({
        "userId": user_id,
        "userName": user_name,
        "roleNameEn": role,
        "availableSurveys": [],
        "studentGrades": [],
        "availableDisciplines": [{"disciplineId": 1, "disciplineName": "Math"}]
    })
}
