//! Traffic statistics (`/traffic`).

use serde_json::Value;

use crate::client::RobotClient;
use crate::error::RobotError;
use crate::http::Transport;
use crate::types::{TrafficQuery, TrafficRange};

impl<T: Transport> RobotClient<T> {
    /// Traffic statistics. The webservice takes the query as a POST form.
    pub fn traffic_get(&self, query: &TrafficQuery) -> Result<Value, RobotError> {
        self.post(self.resource("/traffic"), &query.to_form())
    }

    pub fn traffic_get_for_ip<S: AsRef<str>>(&self, ips: &[S], range: TrafficRange) -> Result<Value, RobotError> {
        let query = TrafficQuery::for_ips(ips.iter().map(|ip| ip.as_ref().to_string()), range);
        self.traffic_get(&query)
    }

    pub fn traffic_get_for_subnet<S: AsRef<str>>(
        &self,
        subnets: &[S],
        range: TrafficRange,
    ) -> Result<Value, RobotError> {
        let query = TrafficQuery::for_subnets(subnets.iter().map(|subnet| subnet.as_ref().to_string()), range);
        self.traffic_get(&query)
    }
}
