//! Failover IPs (`/failover`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::FormParams;

impl<T: Transport> RobotClient<T> {
    /// All failover IPs, or one when `ip` is given.
    pub fn failover_get(&self, ip: Option<&str>) -> Result<Value, RobotError> {
        self.get(self.resource("/failover").segment_opt(ip))
    }

    /// Failover IPs whose owning server is `server_ip`.
    pub fn failover_get_by_server_ip(&self, server_ip: &str) -> Result<Value, RobotError> {
        let query = FormParams::new().with("server_ip", server_ip);
        self.get(self.resource("/failover").with_query(&query))
    }

    /// Route `failover_ip` to `active_server_ip`.
    pub fn failover_route(&self, failover_ip: &str, active_server_ip: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("active_server_ip", active_server_ip);
        self.post(self.resource("/failover").segment(failover_ip), &form)
    }
}
