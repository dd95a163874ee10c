use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use super::server::server_not_found;
use crate::{
    error::{ApiError, ApiResult},
    form::FormFields,
    state::{Db, Rescue, Robot},
};

const RESCUE_SYSTEMS: [&str; 2] = ["linux", "vkvm"];

fn render(robot: &Robot, rescue: &Rescue) -> Value {
    let keys: Vec<Value> = rescue
        .authorized_key
        .iter()
        .filter_map(|fingerprint| robot.keys.get(fingerprint))
        .map(|key| json!({ "key": key }))
        .collect();
    json!({ "rescue": {
        "server_ip": rescue.server_ip,
        "server_number": rescue.server_number,
        "os": rescue.os,
        "arch": rescue.arch,
        "active": rescue.active,
        "password": rescue.password,
        "authorized_key": keys,
        "host_key": [],
    }})
}

pub async fn rescue_get(State(db): State<Db>, Path(ip): Path<String>) -> ApiResult<Json<Value>> {
    let robot = db.read().await;
    let server = robot.servers.get(&ip).ok_or_else(server_not_found)?;
    match robot.rescue.get(&ip) {
        Some(rescue) => Ok(Json(render(&robot, rescue))),
        None => Ok(Json(json!({ "rescue": {
            "server_ip": server.server_ip,
            "server_number": server.server_number,
            "os": RESCUE_SYSTEMS,
            "arch": [64, 32],
            "active": false,
            "password": null,
            "authorized_key": [],
            "host_key": [],
        }}))),
    }
}

pub async fn rescue_activate(
    State(db): State<Db>,
    Path(ip): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let form = FormFields::parse(&body);
    let os = form.get("os").ok_or_else(|| ApiError::missing(vec!["os"]))?;
    if !RESCUE_SYSTEMS.contains(&os) {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", "invalid os"));
    }
    let arch = match form.get("arch") {
        None | Some("64") => 64,
        Some("32") => 32,
        Some(_) => return Err(ApiError::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", "invalid arch")),
    };
    let authorized_key = form.list("authorized_key");

    let mut robot = db.write().await;
    let server_number = robot.servers.get(&ip).ok_or_else(server_not_found)?.server_number;
    if robot.rescue.contains_key(&ip) {
        return Err(ApiError::conflict("BOOT_ALREADY_ENABLED", "A boot option is already active"));
    }
    if let Some(unknown) = authorized_key.iter().find(|fp| !robot.keys.contains_key(*fp)) {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "INVALID_INPUT",
            format!("unknown key {unknown}"),
        ));
    }

    let password = authorized_key
        .is_empty()
        .then(|| Uuid::new_v4().simple().to_string()[..12].to_string());
    let rescue = Rescue {
        server_ip: ip.clone(),
        server_number,
        os: os.to_string(),
        arch,
        active: true,
        password,
        authorized_key,
    };
    tracing::info!(server = %ip, os = %rescue.os, keys = rescue.authorized_key.len(), "rescue activated");
    robot.rescue.insert(ip.clone(), rescue.clone());
    robot.last_rescue.insert(ip, rescue.clone());
    Ok(Json(render(&robot, &rescue)))
}

pub async fn rescue_deactivate(State(db): State<Db>, Path(ip): Path<String>) -> ApiResult<Json<Value>> {
    let mut robot = db.write().await;
    if !robot.servers.contains_key(&ip) {
        return Err(server_not_found());
    }
    let mut rescue = robot
        .rescue
        .remove(&ip)
        .ok_or_else(|| ApiError::not_found("BOOT_NOT_AVAILABLE", "No active rescue system"))?;
    rescue.active = false;
    rescue.password = None;
    Ok(Json(render(&robot, &rescue)))
}

pub async fn rescue_last(State(db): State<Db>, Path(ip): Path<String>) -> ApiResult<Json<Value>> {
    let robot = db.read().await;
    let rescue = robot
        .last_rescue
        .get(&ip)
        .ok_or_else(|| ApiError::not_found("BOOT_NOT_AVAILABLE", "No rescue activation recorded"))?;
    Ok(Json(render(&robot, rescue)))
}
