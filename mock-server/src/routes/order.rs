use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    form::FormFields,
    state::{Db, Transaction},
};

pub async fn create(State(db): State<Db>, body: Bytes) -> ApiResult<(StatusCode, Json<Value>)> {
    let form = FormFields::parse(&body);
    let product_id = form.get("product_id").ok_or_else(|| ApiError::missing(vec!["product_id"]))?;
    let authorized_key = form.list("authorized_key");
    let password_set = form.get("password").is_some();
    if authorized_key.is_empty() && !password_set {
        return Err(ApiError::missing(vec!["authorized_key", "password"]));
    }
    if !authorized_key.is_empty() && form.contains("password") {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "INVALID_INPUT",
            "authorized_key and password are mutually exclusive",
        ));
    }

    let transaction = Transaction {
        id: format!("B{}", Uuid::new_v4().simple()),
        status: "in process".to_string(),
        server_number: None,
        server_ip: None,
        product_id: product_id.to_string(),
        authorized_key,
        password_set,
        test: form.flag("test"),
    };
    tracing::info!(id = %transaction.id, product = %transaction.product_id, "order placed");
    db.write()
        .await
        .transactions
        .insert(transaction.id.clone(), transaction.clone());
    Ok((StatusCode::CREATED, Json(json!({ "transaction": transaction }))))
}

pub async fn list(State(db): State<Db>) -> Json<Value> {
    let robot = db.read().await;
    Json(robot.transactions.values().map(|t| json!({ "transaction": t })).collect())
}

pub async fn get_one(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Json<Value>> {
    let robot = db.read().await;
    let transaction = robot
        .transactions
        .get(&id)
        .ok_or_else(|| ApiError::not_found("TRANSACTION_NOT_FOUND", "Transaction not found"))?;
    Ok(Json(json!({ "transaction": transaction })))
}
