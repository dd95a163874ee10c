use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{ApiError, ApiResult},
    form::FormFields,
    state::Db,
};

fn entry(ip: &str, ptr: &str) -> Json<Value> {
    Json(json!({ "rdns": { "ip": ip, "ptr": ptr } }))
}

fn rdns_not_found() -> ApiError {
    ApiError::not_found("RDNS_NOT_FOUND", "The IP address has no reverse DNS entry")
}

fn ptr_field(body: &Bytes) -> ApiResult<String> {
    FormFields::parse(body)
        .get("ptr")
        .map(str::to_string)
        .ok_or_else(|| ApiError::missing(vec!["ptr"]))
}

pub async fn get_one(State(db): State<Db>, Path(ip): Path<String>) -> ApiResult<Json<Value>> {
    let robot = db.read().await;
    let ptr = robot.rdns.get(&ip).ok_or_else(rdns_not_found)?;
    Ok(entry(&ip, ptr))
}

pub async fn create(
    State(db): State<Db>,
    Path(ip): Path<String>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let ptr = ptr_field(&body)?;
    let mut robot = db.write().await;
    if robot.rdns.contains_key(&ip) {
        return Err(ApiError::conflict("RDNS_ALREADY_EXISTS", "The reverse DNS entry already exists"));
    }
    robot.rdns.insert(ip.clone(), ptr.clone());
    Ok((StatusCode::CREATED, entry(&ip, &ptr)))
}

pub async fn update(State(db): State<Db>, Path(ip): Path<String>, body: Bytes) -> ApiResult<Json<Value>> {
    let ptr = ptr_field(&body)?;
    let mut robot = db.write().await;
    robot.rdns.insert(ip.clone(), ptr.clone());
    Ok(entry(&ip, &ptr))
}

/// Answers with an empty body, like the webservice.
pub async fn remove(State(db): State<Db>, Path(ip): Path<String>) -> ApiResult<StatusCode> {
    let mut robot = db.write().await;
    robot.rdns.remove(&ip).ok_or_else(rdns_not_found)?;
    Ok(StatusCode::OK)
}
