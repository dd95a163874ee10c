//! Subnets and their traffic warnings (`/subnet`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::FormParams;
use crate::types::TrafficLimits;

impl<T: Transport> RobotClient<T> {
    pub fn subnet_get_all(&self) -> Result<Value, RobotError> {
        self.get(self.resource("/subnet"))
    }

    pub fn subnet_get_by_server_ip(&self, server_ip: &str) -> Result<Value, RobotError> {
        let query = FormParams::new().with("server_ip", server_ip);
        self.get(self.resource("/subnet").with_query(&query))
    }

    /// `ip` is the subnet's network address.
    pub fn subnet_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/subnet").segment(ip))
    }

    pub fn subnet_enable_traffic_warnings(&self, ip: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("traffic_warnings", "true");
        self.post(self.resource("/subnet").segment(ip), &form)
    }

    pub fn subnet_disable_traffic_warnings(&self, ip: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("traffic_warnings", "false");
        self.post(self.resource("/subnet").segment(ip), &form)
    }

    pub fn subnet_set_traffic_warning_limits(&self, ip: &str, limits: TrafficLimits) -> Result<Value, RobotError> {
        self.post(self.resource("/subnet").segment(ip), &limits.to_form())
    }
}
