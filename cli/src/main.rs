mod args;

use anyhow::{Context, Result};
use clap::Parser;
use robot_core::{RobotClient, RobotConfig, TrafficQuery, TrafficRange, Transport};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command, FailoverAction, KeyAction, RdnsAction, ServerAction};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RobotConfig::from_env().context("loading webservice settings")?;
    tracing::debug!(?config, "configuration loaded");
    let client = RobotClient::from_config(&config);

    let value = run(&client, cli.command)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn run<T: Transport>(client: &RobotClient<T>, command: Command) -> Result<Value> {
    let value = match command {
        Command::Failover { action } => match action {
            FailoverAction::List { server_ip: Some(server_ip) } => client.failover_get_by_server_ip(&server_ip),
            FailoverAction::List { server_ip: None } => client.failover_get(None),
            FailoverAction::Get { ip } => client.failover_get(Some(&ip)),
            FailoverAction::Route { ip, target } => client.failover_route(&ip, &target),
        },
        Command::Server { action } => match action {
            ServerAction::List => client.server_get_all(),
            ServerAction::Get { ip } => client.server_get(&ip),
        },
        Command::Rdns { action } => match action {
            RdnsAction::Get { ip } => client.rdns_get(&ip),
            RdnsAction::Set { ip, ptr } => client.rdns_update(&ip, &ptr),
        },
        Command::Key { action } => match action {
            KeyAction::List => client.key_get_all(),
        },
        Command::Reset { ip, kind } => client.reset_execute(&ip, kind),
        Command::Traffic(args) => {
            let range = TrafficRange::raw(args.kind, args.from, args.to);
            let query = TrafficQuery::for_ips(args.ips, range).single_values(args.single_values);
            client.traffic_get(&query)
        }
    };
    Ok(value?)
}
