//! Reverse DNS entries (`/rdns`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::FormParams;

impl<T: Transport> RobotClient<T> {
    pub fn rdns_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/rdns").segment(ip))
    }

    /// Create the PTR record; fails if one already exists.
    pub fn rdns_create(&self, ip: &str, ptr: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("ptr", ptr);
        self.put(self.resource("/rdns").segment(ip), Some(&form))
    }

    pub fn rdns_update(&self, ip: &str, ptr: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("ptr", ptr);
        self.post(self.resource("/rdns").segment(ip), &form)
    }

    pub fn rdns_delete(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.resource("/rdns").segment(ip))
    }
}
