//! In-process stand-in for the Base44 entity API

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use ilex_bridge::config::BridgeConfig;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const API_KEY: &str = "test-api-key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub params: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Default)]
pub struct FakeBase44 {
    pub devices: Vec<Value>,
    /// Status to answer reading creation with instead of 201
    pub create_status: Option<StatusCode>,
    /// Status to answer device patches with instead of 200
    pub patch_status: Option<StatusCode>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeBase44 {
    pub fn with_device(id: &str, device_id: &str, secret: &str) -> Self {
        Self {
            devices: vec![json!({
                "id": id,
                "device_id": device_id,
                "device_secret": secret,
                "name": "Greenhouse sensor",
            })],
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: Method, path_prefix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path.starts_with(path_prefix))
            .collect()
    }
}

/// Serve `fake` on an ephemeral port and return a config pointing at it
pub async fn spawn(fake: FakeBase44) -> (BridgeConfig, Arc<FakeBase44>) {
    let fake = Arc::new(fake);
    let app = Router::new().fallback(respond).with_state(fake.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (BridgeConfig::new(format!("http://{addr}/"), API_KEY), fake)
}

/// Base URL of a local port with nothing listening on it
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn respond(
    State(fake): State<Arc<FakeBase44>>,
    method: Method,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let created_count = {
        let mut requests = fake.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.clone(),
            path: uri.path().to_string(),
            params: params.clone(),
            authorization: headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: body.clone(),
        });
        requests.iter().filter(|r| r.method == Method::POST).count()
    };

    let path = uri.path();
    if method == Method::GET && path == "/api/entities/Device" {
        let wanted = params
            .get("filter")
            .and_then(|f| serde_json::from_str::<Value>(f).ok())
            .and_then(|f| f["device_id"].as_str().map(str::to_string));
        let matches: Vec<Value> = fake
            .devices
            .iter()
            .filter(|d| d["device_id"].as_str() == wanted.as_deref())
            .cloned()
            .collect();
        return Json(matches).into_response();
    }

    if method == Method::POST && path == "/api/entities/Reading" {
        if let Some(status) = fake.create_status {
            return (status, Json(json!({ "message": "create rejected" }))).into_response();
        }
        let mut created = body;
        created["id"] = json!(format!("rdg-{created_count}"));
        return (StatusCode::CREATED, Json(created)).into_response();
    }

    if method == Method::PATCH && path.starts_with("/api/entities/Device/") {
        if let Some(status) = fake.patch_status {
            return (status, Json(json!({ "message": "patch rejected" }))).into_response();
        }
        return Json(body).into_response();
    }

    StatusCode::NOT_FOUND.into_response()
}
