//! Typed inputs for operations with more than a couple of parameters.
//!
//! Each type knows how to lay itself out as `FormParams`; the resource
//! methods only pick the URL and the verb.

use std::fmt;

use chrono::NaiveDateTime;

use crate::request::FormParams;

/// A name that is not one of the webservice's keywords.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseKindError {
    #[error("unknown reset type: {0}")]
    ResetType(String),
    #[error("unknown traffic type: {0}")]
    TrafficType(String),
}

/// Reset flavours accepted by `/reset/<ip>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetType {
    /// ACPI / Ctrl+Alt+Del.
    Software,
    /// Hardware reset.
    Hardware,
    /// Manual reset by a technician.
    Manual,
    /// Power cycle.
    Power,
}

impl ResetType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResetType::Software => "sw",
            ResetType::Hardware => "hw",
            ResetType::Manual => "man",
            ResetType::Power => "power",
        }
    }
}

impl fmt::Display for ResetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResetType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sw" => Ok(ResetType::Software),
            "hw" => Ok(ResetType::Hardware),
            "man" => Ok(ResetType::Manual),
            "power" => Ok(ResetType::Power),
            other => Err(ParseKindError::ResetType(other.to_string())),
        }
    }
}

/// Granularity of a traffic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficType {
    Day,
    Month,
    Year,
}

impl TrafficType {
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficType::Day => "day",
            TrafficType::Month => "month",
            TrafficType::Year => "year",
        }
    }

    /// `strftime` pattern the webservice expects for `from`/`to`.
    pub fn date_format(self) -> &'static str {
        match self {
            TrafficType::Day => "%Y-%m-%dT%H",
            TrafficType::Month => "%Y-%m-%d",
            TrafficType::Year => "%Y-%m",
        }
    }
}

impl std::str::FromStr for TrafficType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TrafficType::Day),
            "month" => Ok(TrafficType::Month),
            "year" => Ok(TrafficType::Year),
            other => Err(ParseKindError::TrafficType(other.to_string())),
        }
    }
}

/// Granularity plus `from`/`to` bounds already rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficRange {
    kind: TrafficType,
    from: String,
    to: String,
}

impl TrafficRange {
    /// Render both bounds in the format `kind` requires.
    pub fn between(kind: TrafficType, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        let format = kind.date_format();
        Self {
            kind,
            from: from.format(format).to_string(),
            to: to.format(format).to_string(),
        }
    }

    /// Bounds passed through untouched.
    pub fn raw(kind: TrafficType, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn kind(&self) -> TrafficType {
        self.kind
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

/// A `/traffic` query over one or more IPs and/or subnets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficQuery {
    ips: Vec<String>,
    subnets: Vec<String>,
    range: TrafficRange,
    single_values: bool,
}

impl TrafficQuery {
    pub fn new(range: TrafficRange) -> Self {
        Self {
            ips: Vec::new(),
            subnets: Vec::new(),
            range,
            single_values: false,
        }
    }

    pub fn for_ips<I, S>(ips: I, range: TrafficRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(range).ips(ips)
    }

    pub fn for_subnets<I, S>(subnets: I, range: TrafficRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(range).subnets(subnets)
    }

    pub fn ips<I, S>(mut self, ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ips.extend(ips.into_iter().map(Into::into));
        self
    }

    pub fn subnets<I, S>(mut self, subnets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnets.extend(subnets.into_iter().map(Into::into));
        self
    }

    /// Ask for one value per hour/day/month instead of a sum.
    pub fn single_values(mut self, enabled: bool) -> Self {
        self.single_values = enabled;
        self
    }

    pub fn to_form(&self) -> FormParams {
        let mut form = FormParams::new();
        form.push_list("ip", &self.ips)
            .push_list("subnet", &self.subnets)
            .push("type", self.range.kind.as_str())
            .push("from", self.range.from.as_str())
            .push("to", self.range.to.as_str())
            .push_flag("single_values", self.single_values);
        form
    }
}

/// Traffic warning thresholds in MB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficLimits {
    pub hourly: u64,
    pub daily: u64,
    pub monthly: u64,
}

impl TrafficLimits {
    pub fn to_form(&self) -> FormParams {
        FormParams::new()
            .with("traffic_hourly", self.hourly.to_string())
            .with("traffic_daily", self.daily.to_string())
            .with("traffic_monthly", self.monthly.to_string())
    }
}

/// Keys win over password; with neither, the field is left out.
fn push_credentials(form: &mut FormParams, keys: &[String], password: Option<&str>) {
    if !keys.is_empty() {
        form.push_list("authorized_key", keys);
    } else if let Some(password) = password {
        form.push("password", password);
    }
}

/// A standard server order (`/order/server/transaction`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerOrder {
    pub product_id: String,
    pub authorized_keys: Vec<String>,
    pub password: Option<String>,
    pub dist: Option<String>,
    pub arch: Option<u8>,
    pub lang: Option<String>,
    pub test: bool,
}

impl ServerOrder {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            ..Self::default()
        }
    }

    pub fn authorized_keys<I, S>(mut self, fingerprints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorized_keys = fingerprints.into_iter().map(Into::into).collect();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn dist(mut self, dist: impl Into<String>) -> Self {
        self.dist = Some(dist.into());
        self
    }

    pub fn arch(mut self, arch: u8) -> Self {
        self.arch = Some(arch);
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Mark the order as a test order; nothing gets provisioned.
    pub fn test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn to_form(&self) -> FormParams {
        let mut form = FormParams::new();
        form.push("product_id", self.product_id.as_str());
        push_credentials(&mut form, &self.authorized_keys, self.password.as_deref());
        form.push_opt("dist", self.dist.as_deref())
            .push_opt("arch", self.arch.map(|arch| arch.to_string()))
            .push_opt("lang", self.lang.as_deref())
            .push_flag("test", self.test);
        form
    }
}

/// A server market order (`/order/server_market/transaction`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketOrder {
    pub product_id: String,
    pub authorized_keys: Vec<String>,
    pub password: Option<String>,
    pub test: bool,
}

impl MarketOrder {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            ..Self::default()
        }
    }

    pub fn authorized_keys<I, S>(mut self, fingerprints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorized_keys = fingerprints.into_iter().map(Into::into).collect();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    pub fn to_form(&self) -> FormParams {
        let mut form = FormParams::new();
        form.push("product_id", self.product_id.as_str());
        push_credentials(&mut form, &self.authorized_keys, self.password.as_deref());
        form.push_flag("test", self.test);
        form
    }
}
