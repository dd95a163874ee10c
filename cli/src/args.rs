//! Command-line surface of `robot`.

use clap::{Args, Parser, Subcommand};
use robot_core::{ResetType, TrafficType};

#[derive(Debug, Parser)]
#[command(name = "robot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Query and drive the Robot server-management webservice")]
pub struct Cli {
    /// Log every request at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Failover IPs
    Failover {
        #[command(subcommand)]
        action: FailoverAction,
    },
    /// Dedicated servers
    Server {
        #[command(subcommand)]
        action: ServerAction,
    },
    /// Reverse DNS entries
    Rdns {
        #[command(subcommand)]
        action: RdnsAction,
    },
    /// SSH keys
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
    /// Reset a server
    Reset {
        ip: String,
        /// sw, hw, man or power
        #[arg(short = 't', long = "type", default_value = "sw")]
        kind: ResetType,
    },
    /// Traffic totals for one or more IPs
    Traffic(TrafficArgs),
}

#[derive(Debug, Subcommand)]
pub enum FailoverAction {
    /// List failover IPs, optionally only those owned by one server
    List {
        #[arg(long)]
        server_ip: Option<String>,
    },
    /// Show one failover IP
    Get { ip: String },
    /// Route a failover IP to another server
    Route { ip: String, target: String },
}

#[derive(Debug, Subcommand)]
pub enum ServerAction {
    List,
    Get { ip: String },
}

#[derive(Debug, Subcommand)]
pub enum RdnsAction {
    Get { ip: String },
    /// Create or replace the PTR record
    Set { ip: String, ptr: String },
}

#[derive(Debug, Subcommand)]
pub enum KeyAction {
    List,
}

#[derive(Debug, Args)]
pub struct TrafficArgs {
    /// day, month or year
    #[arg(short = 't', long = "type", default_value = "month")]
    pub kind: TrafficType,
    /// Lower bound in the format the granularity expects
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
    /// One value per hour/day/month instead of a total
    #[arg(long)]
    pub single_values: bool,
    #[arg(required = true)]
    pub ips: Vec<String>,
}
