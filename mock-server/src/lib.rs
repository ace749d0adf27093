//! In-memory stand-in for an Asterisk ARI server.
//!
//! Covers enough of the REST surface to exercise a client over real HTTP:
//! global variables, bridges, channels and sounds, with ARI's status codes
//! and `{"message": ...}` error bodies. Mutating requests are read as
//! form-encoded bodies, the way Asterisk reads them. `/ari/_fault/{status}`
//! answers with an arbitrary status and a plain-text body.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub use axum::Router;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bridge {
    pub id: String,
    pub technology: String,
    pub bridge_type: String,
    pub bridge_class: String,
    pub name: String,
    pub channels: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub channelvars: Map<String, Value>,
}

#[derive(Deserialize)]
pub struct VariableQuery {
    pub variable: Option<String>,
}

#[derive(Deserialize)]
pub struct SetVariable {
    pub variable: Option<String>,
    pub value: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBridge {
    #[serde(rename = "type")]
    pub bridge_type: Option<String>,
    #[serde(rename = "bridgeId")]
    pub bridge_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct AddChannel {
    pub channel: Option<String>,
}

#[derive(Deserialize)]
pub struct Originate {
    pub endpoint: Option<String>,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    /// JSON object text, as ARI clients send it in form bodies.
    pub variables: Option<String>,
}

#[derive(Deserialize)]
pub struct SoundsQuery {
    pub lang: Option<String>,
}

#[derive(Default)]
pub struct Store {
    pub globals: HashMap<String, String>,
    pub bridges: BTreeMap<String, Bridge>,
    pub channels: BTreeMap<String, Channel>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiError = (StatusCode, Json<Value>);

fn error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "message": message })))
}

/// Router with no authentication.
pub fn app() -> Router {
    routes(Arc::new(RwLock::new(Store::default())))
}

/// Router that answers 401 unless requests carry these basic-auth
/// credentials.
pub fn app_with_credentials(username: &str, password: &str) -> Router {
    let expected = format!("Basic {}", BASE64.encode(format!("{username}:{password}")));
    app().layer(middleware::from_fn_with_state(Arc::new(expected), require_auth))
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

fn routes(db: Db) -> Router {
    Router::new()
        .route("/ari/asterisk/info", get(asterisk_info))
        .route("/ari/asterisk/variable", get(get_global_var).post(set_global_var))
        .route("/ari/bridges", get(list_bridges).post(create_bridge))
        .route(
            "/ari/bridges/{id}",
            get(get_bridge).post(create_or_update_bridge).delete(destroy_bridge),
        )
        .route("/ari/bridges/{id}/addChannel", post(add_channel))
        .route("/ari/channels", get(list_channels).post(originate))
        .route("/ari/channels/{id}", get(get_channel).delete(hangup))
        .route("/ari/sounds", get(list_sounds))
        .route("/ari/_fault/{status}", get(fault).post(fault).put(fault).delete(fault))
        .route("/httpstatus", get(http_status))
        .with_state(db)
}

async fn require_auth(State(expected): State<Arc<String>>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected.as_str());
    if authorized {
        next.run(request).await
    } else {
        error(StatusCode::UNAUTHORIZED, "Authentication required").into_response()
    }
}

async fn asterisk_info() -> Json<Value> {
    Json(json!({
        "build": { "os": "Linux", "kernel": "mock", "machine": "x86_64" },
        "system": { "version": "mock-ari", "entity_id": "00:00:00:00:00:00" },
    }))
}

async fn get_global_var(
    State(db): State<Db>,
    Query(query): Query<VariableQuery>,
) -> Result<Json<Value>, ApiError> {
    let variable = query
        .variable
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "Variable name is required"))?;
    let store = db.read().await;
    let value = store.globals.get(&variable).cloned().unwrap_or_default();
    Ok(Json(json!({ "value": value })))
}

async fn set_global_var(
    State(db): State<Db>,
    Form(input): Form<SetVariable>,
) -> Result<StatusCode, ApiError> {
    let variable = input
        .variable
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "Variable name is required"))?;
    db.write()
        .await
        .globals
        .insert(variable, input.value.unwrap_or_default());
    Ok(StatusCode::NO_CONTENT)
}

async fn list_bridges(State(db): State<Db>) -> Json<Vec<Bridge>> {
    Json(db.read().await.bridges.values().cloned().collect())
}

fn new_bridge(id: String, input: CreateBridge) -> Bridge {
    Bridge {
        id,
        technology: "simple_bridge".to_string(),
        bridge_type: input.bridge_type.unwrap_or_else(|| "mixing".to_string()),
        bridge_class: "stasis".to_string(),
        name: input.name.unwrap_or_default(),
        channels: Vec::new(),
    }
}

async fn create_bridge(State(db): State<Db>, Form(input): Form<CreateBridge>) -> Json<Bridge> {
    let id = input
        .bridge_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let bridge = new_bridge(id, input);
    db.write().await.bridges.insert(bridge.id.clone(), bridge.clone());
    Json(bridge)
}

async fn create_or_update_bridge(
    State(db): State<Db>,
    Path(id): Path<String>,
    Form(input): Form<CreateBridge>,
) -> Json<Bridge> {
    let mut store = db.write().await;
    let bridge = match store.bridges.get_mut(&id) {
        Some(existing) => {
            if let Some(bridge_type) = input.bridge_type {
                existing.bridge_type = bridge_type;
            }
            if let Some(name) = input.name {
                existing.name = name;
            }
            existing.clone()
        }
        None => {
            let bridge = new_bridge(id.clone(), input);
            store.bridges.insert(id, bridge.clone());
            bridge
        }
    };
    Json(bridge)
}

async fn get_bridge(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Bridge>, ApiError> {
    let store = db.read().await;
    store
        .bridges
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Bridge not found"))
}

async fn destroy_bridge(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    db.write()
        .await
        .bridges
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Bridge not found"))
}

async fn add_channel(
    State(db): State<Db>,
    Path(id): Path<String>,
    Form(input): Form<AddChannel>,
) -> Result<StatusCode, ApiError> {
    let channel = input
        .channel
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "Channel parameter is required"))?;
    let mut store = db.write().await;
    let ids: Vec<String> = channel.split(',').map(|c| c.trim().to_string()).collect();
    if ids.iter().any(|c| !store.channels.contains_key(c)) {
        return Err(error(StatusCode::BAD_REQUEST, "Channel not found"));
    }
    let bridge = store
        .bridges
        .get_mut(&id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Bridge not found"))?;
    bridge.channels.extend(ids);
    Ok(StatusCode::NO_CONTENT)
}

async fn list_channels(State(db): State<Db>) -> Json<Vec<Channel>> {
    Json(db.read().await.channels.values().cloned().collect())
}

async fn originate(State(db): State<Db>, Form(input): Form<Originate>) -> Result<Json<Channel>, ApiError> {
    let endpoint = input
        .endpoint
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "Endpoint must be specified"))?;
    let channelvars = match input.variables.as_deref() {
        None => Map::new(),
        Some(raw) => match serde_json::from_str(raw) {
            Ok(Value::Object(vars)) => vars,
            _ => return Err(error(StatusCode::BAD_REQUEST, "variables must be a JSON object")),
        },
    };
    let id = input.channel_id.unwrap_or_else(|| Uuid::new_v4().to_string());
    let channel = Channel {
        name: format!("{endpoint}-{}", id.chars().take(8).collect::<String>()),
        id,
        state: "Down".to_string(),
        channelvars,
    };
    db.write().await.channels.insert(channel.id.clone(), channel.clone());
    Ok(Json(channel))
}

async fn get_channel(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Channel>, ApiError> {
    let store = db.read().await;
    store
        .channels
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Channel not found"))
}

async fn hangup(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store
        .channels
        .remove(&id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Channel not found"))?;
    for bridge in store.bridges.values_mut() {
        bridge.channels.retain(|c| *c != id);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn list_sounds(Query(query): Query<SoundsQuery>) -> Json<Vec<Value>> {
    let sounds = [
        ("tt-monkeys", "en", "Monkeys"),
        ("vm-torerecord", "en", "To re-record your message press 3"),
        ("vm-torerecord", "fr", "Pour reenregistrer votre message appuyez sur 3"),
    ];
    Json(
        sounds
            .iter()
            .filter(|(_, lang, _)| query.lang.as_deref().map_or(true, |l| l == *lang))
            .map(|(id, lang, text)| {
                json!({ "id": id, "text": text, "formats": [{ "language": lang, "format": "gsm" }] })
            })
            .collect(),
    )
}

async fn fault(Path(status): Path<u16>) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "text/plain")], "boom").into_response()
}

async fn http_status() -> Response {
    (
        [(header::CONTENT_TYPE, "text/html")],
        "<title>Asterisk HTTP Status</title>",
    )
        .into_response()
}
