//! Separate MAC addresses for IPs (`/ip/<ip>/mac`) and subnets (`/subnet/<ip>/mac`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::FormParams;

impl<T: Transport> RobotClient<T> {
    /// Separate MAC address of a single IP.
    pub fn separate_mac_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/ip").segment(ip).segment("mac"))
    }

    /// Request a separate MAC address for `ip`. No body.
    pub fn separate_mac_create(&self, ip: &str) -> Result<Value, RobotError> {
        self.put(self.resource("/ip").segment(ip).segment("mac"), None)
    }

    pub fn separate_mac_delete(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.resource("/ip").segment(ip).segment("mac"))
    }

    /// MAC address an IPv6 subnet is routed to.
    pub fn subnet_mac_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/subnet").segment(ip).segment("mac"))
    }

    pub fn subnet_mac_set(&self, ip: &str, mac: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("mac", mac);
        self.put(self.resource("/subnet").segment(ip).segment("mac"), Some(&form))
    }

    /// Route the subnet back to the server's default MAC.
    pub fn subnet_mac_reset(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.resource("/subnet").segment(ip).segment("mac"))
    }
}
