//! In-memory stand-in for the Dashboard API.
//!
//! Serves the action batch, uplink settings and cellular gateway endpoints
//! under `/api/v1`. Settings endpoints store whatever object they receive
//! and merge later updates into it, so tests can see exactly which keys a
//! client put on the wire.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{OriginalUri, Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const API_PREFIX: &str = "/api/v1";

/// Network id whose requests are always answered with 429.
pub const THROTTLED_NETWORK: &str = "N_throttled";

/// Most actions a synchronous batch may carry.
pub const MAX_SYNCHRONOUS_ACTIONS: usize = 20;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchStatus {
    pub completed: bool,
    pub failed: bool,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionBatch {
    pub id: String,
    pub organization_id: String,
    pub confirmed: bool,
    pub synchronous: bool,
    pub status: BatchStatus,
    pub actions: Vec<Value>,
}

#[derive(Deserialize)]
pub struct CreateBatch {
    pub actions: Option<Vec<Value>>,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub synchronous: bool,
}

#[derive(Deserialize)]
pub struct UpdateBatch {
    pub confirmed: Option<bool>,
    pub synchronous: Option<bool>,
}

#[derive(Default)]
pub struct Store {
    settings: HashMap<String, Map<String, Value>>,
    batches: HashMap<String, ActionBatch>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

fn errors(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "errors": [message] })))
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let settings = get(get_settings).put(put_settings);
    let api = Router::new()
        .route(
            "/organizations/{organization_id}/actionBatches",
            get(list_batches).post(create_batch),
        )
        .route(
            "/organizations/{organization_id}/actionBatches/{batch_id}",
            get(get_batch).put(update_batch).delete(delete_batch),
        )
        .route("/networks/{network_id}/uplinkSettings", settings.clone())
        .route("/devices/{serial}/cellularGateway/settings", settings.clone())
        .route(
            "/devices/{serial}/cellularGateway/settings/portForwardingRules",
            settings.clone(),
        )
        .route(
            "/networks/{network_id}/cellularGateway/connectivityMonitoringDestinations",
            settings.clone(),
        )
        .route("/networks/{network_id}/cellularGateway/settings/dhcp", settings.clone())
        .route("/networks/{network_id}/cellularGateway/settings/uplink", settings.clone())
        .route("/networks/{network_id}/cellularGateway/subnetPool", settings);
    Router::new()
        .nest(API_PREFIX, api)
        .with_state(db)
        .layer(middleware::from_fn(throttle))
        .layer(middleware::from_fn(require_api_key))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_api_key(request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|key| !key.trim().is_empty());
    if !authorized {
        return errors(StatusCode::UNAUTHORIZED, "Invalid API key").into_response();
    }
    next.run(request).await
}

async fn throttle(request: Request, next: Next) -> Response {
    let throttled = request
        .uri()
        .path()
        .contains(&format!("/networks/{THROTTLED_NETWORK}/"));
    if throttled {
        let mut response = errors(StatusCode::TOO_MANY_REQUESTS, "Too Many Requests").into_response();
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, header::HeaderValue::from_static("2"));
        return response;
    }
    next.run(request).await
}

async fn get_settings(State(db): State<Db>, OriginalUri(uri): OriginalUri) -> Json<Value> {
    let store = db.read().await;
    let current = store.settings.get(uri.path()).cloned().unwrap_or_default();
    Json(Value::Object(current))
}

async fn put_settings(
    State(db): State<Db>,
    OriginalUri(uri): OriginalUri,
    Json(update): Json<Map<String, Value>>,
) -> Json<Value> {
    let mut store = db.write().await;
    let current = store.settings.entry(uri.path().to_string()).or_default();
    for (key, value) in update {
        current.insert(key, value);
    }
    tracing::debug!(path = uri.path(), "settings updated");
    Json(Value::Object(current.clone()))
}

async fn list_batches(
    State(db): State<Db>,
    Path(organization_id): Path<String>,
) -> Json<Vec<ActionBatch>> {
    let store = db.read().await;
    let mut batches: Vec<_> = store
        .batches
        .values()
        .filter(|b| b.organization_id == organization_id)
        .cloned()
        .collect();
    batches.sort_by(|a, b| a.id.cmp(&b.id));
    Json(batches)
}

async fn create_batch(
    State(db): State<Db>,
    Path(organization_id): Path<String>,
    Json(input): Json<CreateBatch>,
) -> ApiResult<(StatusCode, Json<ActionBatch>)> {
    let actions = input
        .actions
        .ok_or_else(|| errors(StatusCode::BAD_REQUEST, "'actions' must be provided"))?;
    if input.synchronous && actions.len() > MAX_SYNCHRONOUS_ACTIONS {
        return Err(errors(
            StatusCode::BAD_REQUEST,
            "Synchronous batches may contain at most 20 actions",
        ));
    }
    let batch = ActionBatch {
        id: Uuid::new_v4().to_string(),
        organization_id,
        confirmed: input.confirmed,
        synchronous: input.synchronous,
        status: BatchStatus {
            completed: input.confirmed,
            ..BatchStatus::default()
        },
        actions,
    };
    db.write().await.batches.insert(batch.id.clone(), batch.clone());
    Ok((StatusCode::CREATED, Json(batch)))
}

async fn get_batch(
    State(db): State<Db>,
    Path((organization_id, batch_id)): Path<(String, String)>,
) -> Result<Json<ActionBatch>, StatusCode> {
    let store = db.read().await;
    store
        .batches
        .get(&batch_id)
        .filter(|b| b.organization_id == organization_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_batch(
    State(db): State<Db>,
    Path((organization_id, batch_id)): Path<(String, String)>,
    Json(input): Json<UpdateBatch>,
) -> ApiResult<Json<ActionBatch>> {
    let mut store = db.write().await;
    let batch = store
        .batches
        .get_mut(&batch_id)
        .filter(|b| b.organization_id == organization_id)
        .ok_or_else(|| errors(StatusCode::NOT_FOUND, "Not found"))?;
    if let Some(confirmed) = input.confirmed {
        if batch.confirmed && !confirmed {
            return Err(errors(
                StatusCode::BAD_REQUEST,
                "A confirmed batch cannot be unconfirmed",
            ));
        }
        batch.confirmed = confirmed;
        batch.status.completed = confirmed;
    }
    if let Some(synchronous) = input.synchronous {
        batch.synchronous = synchronous;
    }
    Ok(Json(batch.clone()))
}

async fn delete_batch(
    State(db): State<Db>,
    Path((organization_id, batch_id)): Path<(String, String)>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    match store.batches.get(&batch_id) {
        Some(b) if b.organization_id == organization_id => {
            store.batches.remove(&batch_id);
            Ok(StatusCode::NO_CONTENT)
        }
        _ => Err(StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_batch_serializes_camel_case() {
        let batch = ActionBatch {
            id: "123".to_string(),
            organization_id: "O_1".to_string(),
            confirmed: false,
            synchronous: true,
            status: BatchStatus::default(),
            actions: Vec::new(),
        };
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["organizationId"], "O_1");
        assert_eq!(json["synchronous"], true);
        assert_eq!(json["status"]["completed"], false);
    }

    #[test]
    fn create_batch_defaults_flags_to_false() {
        let input: CreateBatch = serde_json::from_str(r#"{"actions":[]}"#).unwrap();
        assert!(!input.confirmed);
        assert!(!input.synchronous);
        assert_eq!(input.actions.map(|a| a.len()), Some(0));
    }

    #[test]
    fn create_batch_tolerates_missing_actions() {
        let input: CreateBatch = serde_json::from_str(r#"{"confirmed":true}"#).unwrap();
        assert!(input.actions.is_none());
    }

    #[test]
    fn update_batch_all_fields_optional() {
        let input: UpdateBatch = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.confirmed.is_none());
        assert!(input.synchronous.is_none());
    }
}
