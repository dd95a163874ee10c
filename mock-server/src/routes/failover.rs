use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{ApiError, ApiResult},
    form::FormFields,
    state::Db,
};

#[derive(Deserialize)]
pub struct ServerFilter {
    server_ip: Option<String>,
}

pub async fn list(State(db): State<Db>, Query(filter): Query<ServerFilter>) -> ApiResult<Json<Value>> {
    let robot = db.read().await;
    let items: Vec<Value> = robot
        .failovers
        .values()
        .filter(|failover| filter.server_ip.as_deref().map_or(true, |ip| failover.server_ip == ip))
        .map(|failover| json!({ "failover": failover }))
        .collect();
    if items.is_empty() {
        return Err(ApiError::not_found("NOT_FOUND", "Failover not found"));
    }
    Ok(Json(Value::Array(items)))
}

pub async fn get_one(State(db): State<Db>, Path(ip): Path<String>) -> ApiResult<Json<Value>> {
    let robot = db.read().await;
    let failover = robot.failovers.get(&ip).ok_or_else(failover_not_found)?;
    Ok(Json(json!({ "failover": failover })))
}

pub async fn route(State(db): State<Db>, Path(ip): Path<String>, body: Bytes) -> ApiResult<Json<Value>> {
    let form = FormFields::parse(&body);
    let target = form
        .get("active_server_ip")
        .ok_or_else(|| ApiError::missing(vec!["active_server_ip"]))?
        .to_string();

    let mut robot = db.write().await;
    if !robot.servers.contains_key(&target) {
        return Err(ApiError::not_found("SERVER_NOT_FOUND", "Server not found"));
    }
    let failover = robot.failovers.get_mut(&ip).ok_or_else(failover_not_found)?;
    if failover.active_server_ip.as_deref() == Some(target.as_str()) {
        return Err(ApiError::conflict(
            "FAILOVER_ALREADY_ROUTED",
            "The failover ip is already routed to the selected server",
        ));
    }
    tracing::info!(failover = %ip, target = %target, "failover routed");
    failover.active_server_ip = Some(target);
    Ok(Json(json!({ "failover": failover })))
}

fn failover_not_found() -> ApiError {
    ApiError::not_found("NOT_FOUND", "Failover not found")
}
