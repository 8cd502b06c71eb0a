// ABOUTME: Server binary serving the runlog operations over stdio JSON-RPC
// ABOUTME: Loads configuration from the environment, applies CLI overrides, and runs until EOF
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Runlog Server Binary
//!
//! Reads newline-delimited JSON-RPC requests on stdin and writes responses on
//! stdout. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use runlog_server::{
    config::ServerConfig,
    logging,
    tools::ToolEngine,
    transport::{RequestHandler, StdioTransport},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "runlog-server")]
#[command(about = "Runlog - activity note extraction and workout record stores over stdio JSON-RPC")]
pub struct Args {
    /// Override the feed store capacity
    #[arg(long)]
    feed_max_size: Option<usize>,

    /// Override the per-kind template store capacity
    #[arg(long)]
    template_max_size: Option<usize>,

    /// Override the workout record store capacity
    #[arg(long)]
    record_max_size: Option<usize>,

    /// Override the default query limit
    #[arg(long)]
    default_limit: Option<usize>,
}

impl Args {
    fn apply(&self, config: &mut ServerConfig) {
        if let Some(size) = self.feed_max_size {
            config.stores.feed_max_size = size;
        }
        if let Some(size) = self.template_max_size {
            config.stores.template_max_size = size;
        }
        if let Some(size) = self.record_max_size {
            config.stores.record_max_size = size;
        }
        if let Some(limit) = self.default_limit {
            config.default_query_limit = limit;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    args.apply(&mut config);
    config.validate()?;
    info!("{}", config.summary());

    let engine = ToolEngine::new(&config);
    let mut transport = StdioTransport::new(RequestHandler::new(engine));

    if let Err(e) = transport.run().await {
        error!("stdio transport stopped with error: {}", e);
        return Err(e.into());
    }

    info!("runlog server stopped");
    Ok(())
}
