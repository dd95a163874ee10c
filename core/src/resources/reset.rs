//! Server resets (`/reset`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::FormParams;
use crate::types::ResetType;

impl<T: Transport> RobotClient<T> {
    /// Reset options for all servers, or for `ip`.
    pub fn reset_get(&self, ip: Option<&str>) -> Result<Value, RobotError> {
        self.get(self.resource("/reset").segment_opt(ip))
    }

    pub fn reset_execute(&self, ip: &str, kind: ResetType) -> Result<Value, RobotError> {
        let form = FormParams::new().with("type", kind.as_str());
        self.post(self.resource("/reset").segment(ip), &form)
    }
}
