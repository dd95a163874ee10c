//! Wake on LAN (`/wol`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::FormParams;

impl<T: Transport> RobotClient<T> {
    pub fn wol_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/wol").segment(ip))
    }

    /// Send a wake-on-LAN packet to the server.
    pub fn wol_send(&self, ip: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("server_ip", ip);
        self.post(self.resource("/wol").segment(ip), &form)
    }
}
