//! Waypoint CLI Application
//!
//! Command-line interface for the Waypoint planning backend.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::ApiClientBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        base_url,
        no_color,
        command,
    } = Args::parse();

    let client = ApiClientBuilder::new()
        .with_base_url(base_url)
        .build()
        .context("Failed to initialize API client")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started against {}", client.base_url());

    let cli = Cli::new(client, renderer);
    match command {
        Some(Project { command }) => cli.handle_project_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Health) => cli.health().await,
        None => cli.list_projects().await,
    }
}
