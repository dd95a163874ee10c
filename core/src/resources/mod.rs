//! One method per webservice action, grouped by resource.
//!
//! Every method is a fixed (verb, path, payload) mapping onto
//! `RobotClient::{get, post, put, delete}` and returns the decoded JSON
//! unchanged.

mod boot;
mod failover;
mod ip;
mod key;
mod mac;
mod order;
mod rdns;
mod reset;
mod server;
mod subnet;
mod traffic;
mod wol;
