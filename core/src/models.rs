//! Typed views over the JSON documents the webservice returns.
//!
//! # Design
//! Every resource method returns `serde_json::Value` untouched. These structs
//! are an opt-in layer on top: the webservice wraps each object under a key
//! named after its type (`{"failover": {...}}`), so a `Resource` only has to
//! name that key and `unwrap_one`/`unwrap_all` do the rest. Fields the
//! provider adds later are ignored rather than rejected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RobotError;
use crate::response::decode;

/// A JSON object the webservice wraps under a fixed key.
pub trait Resource: DeserializeOwned {
    const KEY: &'static str;
}

/// Decode `{"<KEY>": {...}}`.
pub fn unwrap_one<R: Resource>(mut value: Value) -> Result<R, RobotError> {
    match value.get_mut(R::KEY) {
        Some(inner) => decode(inner.take()),
        None => Err(RobotError::ResponseDecode(format!("missing `{}` object", R::KEY))),
    }
}

/// Decode `[{"<KEY>": {...}}, ...]`.
pub fn unwrap_all<R: Resource>(value: Value) -> Result<Vec<R>, RobotError> {
    match value {
        Value::Array(items) => items.into_iter().map(unwrap_one).collect(),
        other => Err(RobotError::ResponseDecode(format!(
            "expected a list of `{}` objects, got {}",
            R::KEY,
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failover {
    pub ip: String,
    #[serde(default)]
    pub netmask: Option<String>,
    pub server_ip: String,
    #[serde(default)]
    pub server_number: Option<u64>,
    /// `None` while the address is not routed anywhere.
    #[serde(default)]
    pub active_server_ip: Option<String>,
}

impl Resource for Failover {
    const KEY: &'static str = "failover";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rdns {
    pub ip: String,
    pub ptr: String,
}

impl Resource for Rdns {
    const KEY: &'static str = "rdns";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub name: String,
    pub fingerprint: String,
    #[serde(default, rename = "type")]
    pub key_type: Option<String>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub data: Option<String>,
}

impl Resource for Key {
    const KEY: &'static str = "key";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub server_ip: String,
    #[serde(default)]
    pub server_number: Option<u64>,
    #[serde(default)]
    pub server_name: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub dc: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub cancelled: Option<bool>,
    #[serde(default)]
    pub paid_until: Option<String>,
}

impl Resource for Server {
    const KEY: &'static str = "server";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    /// `in process`, `ready` or `cancelled`.
    pub status: String,
    #[serde(default)]
    pub server_number: Option<u64>,
    #[serde(default)]
    pub server_ip: Option<String>,
    #[serde(default)]
    pub authorized_key: Vec<Value>,
}

impl Resource for Transaction {
    const KEY: &'static str = "transaction";
}
