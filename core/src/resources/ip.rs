//! Single IP addresses and their traffic warnings (`/ip`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::FormParams;
use crate::types::TrafficLimits;

impl<T: Transport> RobotClient<T> {
    pub fn ip_get_all(&self) -> Result<Value, RobotError> {
        self.get(self.resource("/ip"))
    }

    pub fn ip_get_by_server_ip(&self, server_ip: &str) -> Result<Value, RobotError> {
        let query = FormParams::new().with("server_ip", server_ip);
        self.get(self.resource("/ip").with_query(&query))
    }

    pub fn ip_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/ip").segment(ip))
    }

    pub fn ip_enable_traffic_warnings(&self, ip: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("traffic_warnings", "true");
        self.post(self.resource("/ip").segment(ip), &form)
    }

    pub fn ip_disable_traffic_warnings(&self, ip: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("traffic_warnings", "false");
        self.post(self.resource("/ip").segment(ip), &form)
    }

    pub fn ip_set_traffic_warning_limits(&self, ip: &str, limits: TrafficLimits) -> Result<Value, RobotError> {
        self.post(self.resource("/ip").segment(ip), &limits.to_form())
    }
}
