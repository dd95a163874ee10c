//! SSH keys stored with the account (`/key`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::FormParams;

impl<T: Transport> RobotClient<T> {
    pub fn key_get_all(&self) -> Result<Value, RobotError> {
        self.get(self.resource("/key"))
    }

    pub fn key_get(&self, fingerprint: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/key").segment(fingerprint))
    }

    /// Store a public key; `data` is the key in OpenSSH or SSH2 format.
    pub fn key_create(&self, name: &str, data: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("name", name).with("data", data);
        self.post(self.resource("/key"), &form)
    }

    pub fn key_update(&self, fingerprint: &str, name: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("name", name);
        self.post(self.resource("/key").segment(fingerprint), &form)
    }

    pub fn key_delete(&self, fingerprint: &str) -> Result<Value, RobotError> {
        self.delete(self.resource("/key").segment(fingerprint))
    }
}
