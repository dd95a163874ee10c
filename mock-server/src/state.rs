use std::{collections::BTreeMap, sync::Arc};

use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Clone, Debug, Serialize)]
pub struct Server {
    pub server_ip: String,
    pub server_number: u64,
    pub server_name: String,
    pub product: String,
    pub dc: String,
    pub status: String,
    pub cancelled: bool,
    pub paid_until: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Failover {
    pub ip: String,
    pub netmask: String,
    pub server_ip: String,
    pub server_number: u64,
    pub active_server_ip: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Key {
    pub name: String,
    pub fingerprint: String,
    #[serde(rename = "type")]
    pub key_type: String,
    pub size: u32,
    pub data: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Rescue {
    pub server_ip: String,
    pub server_number: u64,
    pub os: String,
    pub arch: u8,
    pub active: bool,
    pub password: Option<String>,
    pub authorized_key: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Transaction {
    pub id: String,
    pub status: String,
    pub server_number: Option<u64>,
    pub server_ip: Option<String>,
    pub product_id: String,
    pub authorized_key: Vec<String>,
    /// Whether the order carried a root password; the password itself is
    /// never echoed back.
    pub password_set: bool,
    pub test: bool,
}

/// Everything the emulated account owns.
#[derive(Debug, Default)]
pub struct Robot {
    pub servers: BTreeMap<String, Server>,
    pub failovers: BTreeMap<String, Failover>,
    pub rdns: BTreeMap<String, String>,
    pub keys: BTreeMap<String, Key>,
    pub rescue: BTreeMap<String, Rescue>,
    pub last_rescue: BTreeMap<String, Rescue>,
    pub transactions: BTreeMap<String, Transaction>,
}

pub type Db = Arc<RwLock<Robot>>;

pub const SERVER_A: &str = "1.1.1.1";
pub const SERVER_B: &str = "2.2.2.2";
pub const FAILOVER_IP: &str = "123.123.123.123";

impl Robot {
    /// Two servers and one failover IP routed to the first of them.
    pub fn seeded() -> Self {
        let mut robot = Robot::default();
        for (ip, number, name) in [(SERVER_A, 321, "server1"), (SERVER_B, 421, "server2")] {
            robot.servers.insert(
                ip.to_string(),
                Server {
                    server_ip: ip.to_string(),
                    server_number: number,
                    server_name: name.to_string(),
                    product: "EX40".to_string(),
                    dc: "FSN1-DC1".to_string(),
                    status: "ready".to_string(),
                    cancelled: false,
                    paid_until: "2030-12-31".to_string(),
                },
            );
        }
        robot.failovers.insert(
            FAILOVER_IP.to_string(),
            Failover {
                ip: FAILOVER_IP.to_string(),
                netmask: "255.255.255.255".to_string(),
                server_ip: SERVER_A.to_string(),
                server_number: 321,
                active_server_ip: Some(SERVER_A.to_string()),
            },
        );
        robot
    }
}
