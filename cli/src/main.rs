use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use crate::config::Config;

mod config;
mod input;
mod report;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();

    let text = match &config.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read network description {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read network description from stdin")?;
            buffer
        }
    };

    let description = input::parse(&text).context("parse network description")?;
    debug!(
        "parsed description: {} declared users, {} connections",
        description.user_count,
        description.connections.len()
    );

    let graph = description.build_graph();
    info!(
        "loaded network: {} users, {} connections",
        graph.user_count(),
        graph.connection_count()
    );

    if let Some(user) = config.user {
        if !graph.contains(user) {
            warn!("user {user} is not part of the network");
        }
    }

    let max_distance = config.max_distance.unwrap_or(description.max_distance);
    let report = report::build(&graph, max_distance, config.user, config.top);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
