//! Boot configuration (`/boot/<ip>`): rescue, linux, vnc, windows, cpanel and plesk installers.

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::request::{FormParams, ResourceUrl};

const RESCUE: &str = "rescue";
const LINUX: &str = "linux";
const VNC: &str = "vnc";
const WINDOWS: &str = "windows";
const CPANEL: &str = "cpanel";
const PLESK: &str = "plesk";

fn installer_form(dist: &str, arch: u8, lang: &str) -> FormParams {
    FormParams::new()
        .with("dist", dist)
        .with("arch", arch.to_string())
        .with("lang", lang)
}

impl<T: Transport> RobotClient<T> {
    fn boot_url(&self, ip: &str, system: &str) -> ResourceUrl {
        self.resource("/boot").segment(ip).segment(system)
    }

    /// Current boot configuration across all systems.
    pub fn boot_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.resource("/boot").segment(ip))
    }

    pub fn rescue_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.boot_url(ip, RESCUE))
    }

    /// Boot into the rescue system on next restart. Each key fingerprint is
    /// sent as its own `authorized_key[]` field.
    pub fn rescue_activate<S: AsRef<str>>(
        &self,
        ip: &str,
        os: &str,
        arch: u8,
        authorized_keys: &[S],
    ) -> Result<Value, RobotError> {
        let mut form = FormParams::new().with("os", os).with("arch", arch.to_string());
        form.push_list("authorized_key", authorized_keys);
        self.post(self.boot_url(ip, RESCUE), &form)
    }

    pub fn rescue_deactivate(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.boot_url(ip, RESCUE))
    }

    /// Data of the last rescue activation, including its password.
    pub fn rescue_get_last(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.boot_url(ip, RESCUE).segment("last"))
    }

    pub fn linux_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.boot_url(ip, LINUX))
    }

    pub fn linux_activate<S: AsRef<str>>(
        &self,
        ip: &str,
        dist: &str,
        arch: u8,
        lang: &str,
        authorized_keys: &[S],
    ) -> Result<Value, RobotError> {
        let mut form = installer_form(dist, arch, lang);
        form.push_list("authorized_key", authorized_keys);
        self.post(self.boot_url(ip, LINUX), &form)
    }

    pub fn linux_deactivate(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.boot_url(ip, LINUX))
    }

    pub fn linux_get_last(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.boot_url(ip, LINUX).segment("last"))
    }

    pub fn vnc_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.boot_url(ip, VNC))
    }

    pub fn vnc_activate(&self, ip: &str, dist: &str, arch: u8, lang: &str) -> Result<Value, RobotError> {
        self.post(self.boot_url(ip, VNC), &installer_form(dist, arch, lang))
    }

    pub fn vnc_deactivate(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.boot_url(ip, VNC))
    }

    pub fn windows_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.boot_url(ip, WINDOWS))
    }

    pub fn windows_activate(&self, ip: &str, lang: &str) -> Result<Value, RobotError> {
        let form = FormParams::new().with("lang", lang);
        self.post(self.boot_url(ip, WINDOWS), &form)
    }

    pub fn windows_deactivate(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.boot_url(ip, WINDOWS))
    }

    pub fn cpanel_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.boot_url(ip, CPANEL))
    }

    pub fn cpanel_activate(
        &self,
        ip: &str,
        dist: &str,
        arch: u8,
        lang: &str,
        hostname: &str,
    ) -> Result<Value, RobotError> {
        let form = installer_form(dist, arch, lang).with("hostname", hostname);
        self.post(self.boot_url(ip, CPANEL), &form)
    }

    pub fn cpanel_deactivate(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.boot_url(ip, CPANEL))
    }

    pub fn plesk_get(&self, ip: &str) -> Result<Value, RobotError> {
        self.get(self.boot_url(ip, PLESK))
    }

    pub fn plesk_activate(
        &self,
        ip: &str,
        dist: &str,
        arch: u8,
        lang: &str,
        hostname: &str,
    ) -> Result<Value, RobotError> {
        let form = installer_form(dist, arch, lang).with("hostname", hostname);
        self.post(self.boot_url(ip, PLESK), &form)
    }

    pub fn plesk_deactivate(&self, ip: &str) -> Result<Value, RobotError> {
        self.delete(self.boot_url(ip, PLESK))
    }
}
