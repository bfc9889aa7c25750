use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, ProjectCommands, TaskCommands};

/// Command-line client for the Waypoint planning backend
///
/// Waypoint turns a goal into milestones and tasks. Projects, tasks and plans
/// live on the backend; this tool talks to it over HTTP and renders the
/// results as markdown.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Base URL of the backend. Defaults to http://localhost:8000
    #[arg(long, global = true, env = "WAYPOINT_API_URL")]
    pub base_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
///
/// Running `wp` without a command lists projects.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage tasks within projects
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Generate, revise and apply AI-proposed plans
    #[command(alias = "pl")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Check that the backend is reachable
    Health,
}
