use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{ApiError, ApiResult},
    form::FormFields,
    state::Db,
};

pub async fn list(State(db): State<Db>) -> Json<Value> {
    let robot = db.read().await;
    Json(robot.servers.values().map(|server| json!({ "server": server })).collect())
}

pub async fn get_one(State(db): State<Db>, Path(ip): Path<String>) -> ApiResult<Json<Value>> {
    let robot = db.read().await;
    let server = robot.servers.get(&ip).ok_or_else(server_not_found)?;
    Ok(Json(json!({ "server": server })))
}

pub async fn rename(State(db): State<Db>, Path(ip): Path<String>, body: Bytes) -> ApiResult<Json<Value>> {
    let form = FormFields::parse(&body);
    let name = form.get("server_name").ok_or_else(|| ApiError::missing(vec!["server_name"]))?;
    let mut robot = db.write().await;
    let server = robot.servers.get_mut(&ip).ok_or_else(server_not_found)?;
    server.server_name = name.to_string();
    Ok(Json(json!({ "server": server })))
}

pub(crate) fn server_not_found() -> ApiError {
    ApiError::not_found("SERVER_NOT_FOUND", "Server not found")
}
