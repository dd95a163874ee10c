use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::{
    error::{ApiError, ApiResult},
    form::FormFields,
    state::{Db, Key},
};

/// MD5-shaped fingerprint: the first 16 bytes of the SHA-256 of the key data.
fn fingerprint(data: &str) -> String {
    let digest = Sha256::digest(data.as_bytes());
    digest[..16].iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(":")
}

fn key_not_found() -> ApiError {
    ApiError::not_found("NOT_FOUND", "Key not found")
}

pub async fn list(State(db): State<Db>) -> Json<Value> {
    let robot = db.read().await;
    Json(robot.keys.values().map(|key| json!({ "key": key })).collect())
}

pub async fn get_one(State(db): State<Db>, Path(fingerprint): Path<String>) -> ApiResult<Json<Value>> {
    let robot = db.read().await;
    let key = robot.keys.get(&fingerprint).ok_or_else(key_not_found)?;
    Ok(Json(json!({ "key": key })))
}

pub async fn create(State(db): State<Db>, body: Bytes) -> ApiResult<(StatusCode, Json<Value>)> {
    let form = FormFields::parse(&body);
    let (name, data) = match (form.get("name"), form.get("data")) {
        (Some(name), Some(data)) => (name, data),
        (name, data) => {
            let missing = [("name", name), ("data", data)]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(field, _)| field)
                .collect();
            return Err(ApiError::missing(missing));
        }
    };

    let key_type = data.split_whitespace().next().unwrap_or_default();
    let key_type = match key_type {
        "ssh-ed25519" => "ED25519",
        "ssh-rsa" => "RSA",
        "ecdsa-sha2-nistp256" => "ECDSA",
        _ => return Err(ApiError::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", "invalid key data")),
    };

    let fingerprint = fingerprint(data);
    let mut robot = db.write().await;
    if robot.keys.contains_key(&fingerprint) {
        return Err(ApiError::conflict("KEY_ALREADY_EXISTS", "The key already exists"));
    }
    let key = Key {
        name: name.to_string(),
        fingerprint: fingerprint.clone(),
        key_type: key_type.to_string(),
        size: if key_type == "RSA" { 4096 } else { 256 },
        data: data.to_string(),
    };
    robot.keys.insert(fingerprint, key.clone());
    Ok((StatusCode::CREATED, Json(json!({ "key": key }))))
}

pub async fn rename(
    State(db): State<Db>,
    Path(fingerprint): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let form = FormFields::parse(&body);
    let name = form.get("name").ok_or_else(|| ApiError::missing(vec!["name"]))?;
    let mut robot = db.write().await;
    let key = robot.keys.get_mut(&fingerprint).ok_or_else(key_not_found)?;
    key.name = name.to_string();
    Ok(Json(json!({ "key": key })))
}

pub async fn remove(State(db): State<Db>, Path(fingerprint): Path<String>) -> ApiResult<StatusCode> {
    let mut robot = db.write().await;
    robot.keys.remove(&fingerprint).ok_or_else(key_not_found)?;
    Ok(StatusCode::OK)
}
