//! Dedicated servers, names and cancellations (`/server`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::FormParams;

impl<T: Transport> RobotClient<T> {
    pub fn server_get_all(&self) -> Result<Value, RobotError> {
        self.get(self.resource("/server"))
    }

    pub fn server_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/server").segment(ip))
    }

    pub fn server_name_update(&self, ip: &str, name: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("server_name", name);
        self.post(self.resource("/server").segment(ip), &form)
    }

    /// Cancellation status and the earliest possible cancellation date.
    pub fn server_cancellation_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/server").segment(ip).segment("cancellation"))
    }

    /// Cancel the server as of `cancellation_date` (`YYYY-MM-DD` or `now`).
    /// Not idempotent; do not retry blindly after an ambiguous failure.
    pub fn server_cancel(
        &self,
        ip: &str,
        cancellation_date: &str,
        cancellation_reason: Option<&str>,
    ) -> Result<Value, RobotError> {
        let mut form = FormParams::new().with("cancellation_date", cancellation_date);
        form.push_opt("cancellation_reason", cancellation_reason.filter(|reason| !reason.is_empty()));
        self.post(self.resource("/server").segment(ip).segment("cancellation"), &form)
    }

    /// Withdraw a pending cancellation.
    pub fn server_cancellation_delete(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.resource("/server").segment(ip).segment("cancellation"))
    }
}
