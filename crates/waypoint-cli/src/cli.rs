//! Command definitions and handlers.
//!
//! Each command has a clap argument struct that converts into the core
//! request payload, keeping clap attributes out of `waypoint-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Payload → ApiClient → Backend
//! ```
//!
//! [`Cli`] owns the client and renderer and runs one backend call per
//! command.

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use serde_json::Value;
use waypoint_core::{
    display::{CreateResult, DeleteResult, OperationStatus, Projects, Tasks, UpdateResult},
    models::{DetailLevel, ExperienceLevel},
    ApiClient, Plan, PlanApplyInput, PlanGenerateInput, ProjectCreate, ProposedPlan,
    RevisePlanInput, TaskCreate, TaskSize, TaskStatus, TaskUpdate,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Value parsers and enums
// ============================================================================

/// Validate a `YYYY-MM-DD` date and return it in canonical form.
fn parse_date(value: &str) -> Result<String, String> {
    value
        .parse::<jiff::civil::Date>()
        .map(|date| date.to_string())
        .map_err(|e| format!("expected a date like 2025-06-30: {e}"))
}

/// Task status as accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Todo,
    #[value(name = "in_progress")]
    InProgress,
    Done,
}

impl From<StatusArg> for TaskStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Todo => TaskStatus::Todo,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Done => TaskStatus::Done,
        }
    }
}

/// Task size estimate as accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SizeArg {
    #[value(name = "S", alias = "s")]
    S,
    #[value(name = "M", alias = "m")]
    M,
    #[value(name = "L", alias = "l")]
    L,
}

impl From<SizeArg> for TaskSize {
    fn from(val: SizeArg) -> Self {
        match val {
            SizeArg::S => TaskSize::S,
            SizeArg::M => TaskSize::M,
            SizeArg::L => TaskSize::L,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExperienceArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<ExperienceArg> for ExperienceLevel {
    fn from(val: ExperienceArg) -> Self {
        match val {
            ExperienceArg::Beginner => ExperienceLevel::Beginner,
            ExperienceArg::Intermediate => ExperienceLevel::Intermediate,
            ExperienceArg::Advanced => ExperienceLevel::Advanced,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DetailArg {
    Simple,
    Detailed,
}

impl From<DetailArg> for DetailLevel {
    fn from(val: DetailArg) -> Self {
        match val {
            DetailArg::Simple => DetailLevel::Simple,
            DetailArg::Detailed => DetailLevel::Detailed,
        }
    }
}

/// Task fields that `task update --clear` can reset to empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClearField {
    Description,
    Due,
    Estimate,
    Milestone,
}

// ============================================================================
// Project commands
// ============================================================================

/// Create a new project
#[derive(Args)]
pub struct CreateProjectArgs {
    /// Title of the project
    pub title: String,
    /// What the project should achieve
    #[arg(short, long)]
    pub goal: String,
    /// Target date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub deadline: Option<String>,
    /// Hours per week available for the project
    #[arg(long)]
    pub hours: Option<u32>,
}

impl From<CreateProjectArgs> for ProjectCreate {
    fn from(val: CreateProjectArgs) -> Self {
        ProjectCreate {
            title: val.title,
            goal_text: val.goal,
            deadline: val.deadline,
            hours_per_week: val.hours,
        }
    }
}

/// Show a project with its milestones and tasks
#[derive(Args)]
pub struct ShowProjectArgs {
    #[arg(help = "Unique identifier of the project to show")]
    pub id: u64,
}

/// Delete a project and everything in it
#[derive(Args)]
pub struct DeleteProjectArgs {
    #[arg(help = "Unique identifier of the project to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    #[command(aliases = ["l", "ls"])]
    List,
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// Show a project with its milestones and tasks
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// Delete a project permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProjectArgs),
}

// ============================================================================
// Task commands
// ============================================================================

/// List the tasks of a project
#[derive(Args)]
pub struct ListTasksArgs {
    #[arg(long, help = "Project whose tasks to list")]
    pub project: u64,
}

/// Add a task to a project
#[derive(Args)]
pub struct AddTaskArgs {
    #[arg(help = "Unique identifier of the project to add this task to")]
    pub project_id: u64,
    /// Title of the task
    pub title: String,
    #[arg(short, long, help = "Optional detailed description of the task")]
    pub description: Option<String>,
    #[arg(short, long, value_enum, default_value = "todo")]
    pub status: StatusArg,
    #[arg(long, value_parser = parse_date, help = "Due date (YYYY-MM-DD)")]
    pub due: Option<String>,
    #[arg(short, long, value_enum, help = "Size estimate (S, M or L)")]
    pub estimate: Option<SizeArg>,
    #[arg(long, help = "0-based position among sibling tasks")]
    pub position: Option<u32>,
    #[arg(short, long, help = "Milestone to file the task under")]
    pub milestone: Option<u64>,
}

impl From<AddTaskArgs> for TaskCreate {
    fn from(val: AddTaskArgs) -> Self {
        TaskCreate {
            project_id: val.project_id,
            title: val.title,
            description: val.description,
            status: val.status.into(),
            due_date: val.due,
            estimate: val.estimate.map(Into::into),
            order_index: val.position,
            milestone_id: val.milestone,
        }
    }
}

/// Update a task's status or details
///
/// Only the given fields are sent; everything else is left unchanged. Use
/// `--clear` to empty a nullable field.
#[derive(Args)]
pub struct UpdateTaskArgs {
    #[arg(help = "Unique identifier of the task to update")]
    pub id: u64,
    #[arg(short, long, value_enum, help = "New status (todo, in_progress, done)")]
    pub status: Option<StatusArg>,
    #[arg(short, long, help = "Updated title for the task")]
    pub title: Option<String>,
    #[arg(short, long, help = "Updated description of the task")]
    pub description: Option<String>,
    #[arg(long, value_parser = parse_date, help = "Updated due date (YYYY-MM-DD)")]
    pub due: Option<String>,
    #[arg(short, long, value_enum, help = "Updated size estimate")]
    pub estimate: Option<SizeArg>,
    #[arg(long, help = "New 0-based position among sibling tasks")]
    pub position: Option<u32>,
    #[arg(short, long, help = "Move the task under this milestone")]
    pub milestone: Option<u64>,
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        help = "Fields to clear, as a comma-separated list"
    )]
    pub clear: Vec<ClearField>,
}

impl UpdateTaskArgs {
    /// Build the patch together with a human-readable list of changes.
    pub fn into_patch(self) -> (TaskUpdate, Vec<String>) {
        let mut patch = TaskUpdate::default();
        let mut changes = Vec::new();

        if let Some(title) = self.title {
            changes.push(format!("Title set to '{title}'"));
            patch = patch.with_title(title);
        }
        if let Some(status) = self.status {
            let status = TaskStatus::from(status);
            changes.push(format!("Status set to {}", status.as_str()));
            patch = patch.with_status(status);
        }
        if let Some(description) = self.description {
            changes.push("Description updated".to_string());
            patch = patch.with_description(Some(description));
        }
        if let Some(due) = self.due {
            changes.push(format!("Due date set to {due}"));
            patch = patch.with_due_date(Some(due));
        }
        if let Some(estimate) = self.estimate {
            let estimate = TaskSize::from(estimate);
            changes.push(format!("Estimate set to {}", estimate.as_str()));
            patch = patch.with_estimate(Some(estimate));
        }
        if let Some(position) = self.position {
            changes.push(format!("Moved to position {position}"));
            patch = patch.with_order_index(position);
        }
        if let Some(milestone) = self.milestone {
            changes.push(format!("Moved to milestone {milestone}"));
            patch = patch.with_milestone(Some(milestone));
        }

        for field in self.clear {
            match field {
                ClearField::Description => {
                    changes.push("Description cleared".to_string());
                    patch = patch.with_description(None);
                }
                ClearField::Due => {
                    changes.push("Due date cleared".to_string());
                    patch = patch.with_due_date(None);
                }
                ClearField::Estimate => {
                    changes.push("Estimate cleared".to_string());
                    patch = patch.with_estimate(None);
                }
                ClearField::Milestone => {
                    changes.push("Removed from milestone".to_string());
                    patch = patch.with_milestone(None);
                }
            }
        }

        (patch, changes)
    }
}

/// Delete a task
#[derive(Args)]
pub struct DeleteTaskArgs {
    #[arg(help = "Unique identifier of the task to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List the tasks of a project
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Add a task to a project
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Update a task's status or details
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
}

// ============================================================================
// Plan commands
// ============================================================================

/// Planning inputs shared by `plan generate` and `plan revise`
#[derive(Args)]
pub struct PlanInputArgs {
    /// The goal to plan for
    #[arg(short, long)]
    pub goal: String,
    #[arg(long, value_parser = parse_date, help = "Target date (YYYY-MM-DD)")]
    pub deadline: Option<String>,
    #[arg(long, help = "Hours per week available")]
    pub hours: Option<u32>,
    #[arg(long, value_enum, help = "Experience with the subject")]
    pub experience: Option<ExperienceArg>,
    #[arg(long, value_enum, help = "How fine-grained the plan should be")]
    pub detail: Option<DetailArg>,
    #[arg(long, help = "Anything the planner should work around")]
    pub constraints: Option<String>,
}

impl From<PlanInputArgs> for PlanGenerateInput {
    fn from(val: PlanInputArgs) -> Self {
        PlanGenerateInput {
            goal_text: val.goal,
            deadline: val.deadline,
            hours_per_week: val.hours,
            experience_level: val.experience.map(Into::into),
            detail_level: val.detail.map(Into::into),
            constraints: val.constraints,
        }
    }
}

/// Generate a plan, for a project or as a draft
#[derive(Args)]
pub struct GeneratePlanArgs {
    #[arg(short, long, help = "Project to plan for; omit for a draft plan")]
    pub project: Option<u64>,
    #[command(flatten)]
    pub input: PlanInputArgs,
    /// Print the plan as JSON, suitable for `plan revise` and `plan apply`
    #[arg(long)]
    pub json: bool,
}

/// Revise a previously generated plan
#[derive(Args)]
pub struct RevisePlanArgs {
    /// Plan JSON file, or `-` to read from stdin
    pub plan_file: PathBuf,
    /// What to change about the plan
    #[arg(short, long)]
    pub adjustment: String,
    #[arg(short, long, help = "Project the plan belongs to; omit for a draft")]
    pub project: Option<u64>,
    #[command(flatten)]
    pub input: PlanInputArgs,
    /// Print the revised plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Apply a proposed plan to a project
#[derive(Args)]
pub struct ApplyPlanArgs {
    /// Plan JSON file, or `-` to read from stdin
    pub plan_file: PathBuf,
    #[arg(short, long, help = "Project that receives the milestones and tasks")]
    pub project: u64,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a plan from a goal
    #[command(alias = "g")]
    Generate(GeneratePlanArgs),
    /// Revise a plan with an adjustment
    #[command(alias = "r")]
    Revise(RevisePlanArgs),
    /// Apply a proposed plan to a project
    #[command(alias = "a")]
    Apply(ApplyPlanArgs),
}

/// Parse plan JSON, tagged (`"type": "plan"`) or bare.
///
/// Both forms must carry `milestones` and `tasks` lists; planner questions
/// and unknown tags are refused.
pub fn parse_plan(text: &str) -> Result<ProposedPlan> {
    let value: Value = serde_json::from_str(text).context("Failed to parse plan JSON")?;
    let Some(object) = value.as_object() else {
        bail!("Plan JSON must be an object with milestones and tasks");
    };

    let tagged = match object.get("type") {
        None => false,
        Some(Value::String(kind)) if kind == "questions" => {
            bail!("The plan file holds planner questions, not a proposed plan")
        }
        Some(_) => true,
    };
    for key in ["milestones", "tasks"] {
        if !object.contains_key(key) {
            bail!("Plan JSON has no '{key}' list");
        }
    }

    if tagged {
        serde_json::from_value::<Plan>(value)
            .context("Failed to parse plan JSON")?
            .into_proposal()
            .ok_or_else(|| anyhow!("The plan file holds planner questions, not a proposed plan"))
    } else {
        serde_json::from_value(value).context("Failed to parse plan JSON")
    }
}

fn read_plan(path: &Path) -> Result<ProposedPlan> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read plan from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?
    };
    parse_plan(&text)
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against the backend and renders the results.
pub struct Cli {
    client: ApiClient,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(client: ApiClient, renderer: TerminalRenderer) -> Self {
        Self { client, renderer }
    }

    pub async fn list_projects(&self) -> Result<()> {
        let projects = self
            .client
            .list_projects()
            .await
            .context("Failed to list projects")?;
        self.renderer.render(Projects(projects))
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::List => self.list_projects().await,
            ProjectCommands::Create(args) => {
                let project = self
                    .client
                    .create_project(&args.into())
                    .await
                    .context("Failed to create project")?;
                self.renderer.render(CreateResult::new(project))
            }
            ProjectCommands::Show(args) => {
                let detail = self
                    .client
                    .get_project(args.id)
                    .await
                    .with_context(|| format!("Failed to get project {}", args.id))?;
                self.renderer.render(detail)
            }
            ProjectCommands::Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Project deletion requires explicit confirmation. \
                         Re-run with --confirm to delete project {} and all its tasks.",
                        args.id
                    );
                }
                let ack = self
                    .client
                    .delete_project(args.id)
                    .await
                    .with_context(|| format!("Failed to delete project {}", args.id))?;
                self.renderer.render(DeleteResult::project(args.id, ack))
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::List(args) => {
                let detail = self
                    .client
                    .get_project(args.project)
                    .await
                    .with_context(|| format!("Failed to get project {}", args.project))?;
                let mut tasks = detail.tasks;
                tasks.sort_by_key(|task| (task.milestone_id.is_none(), task.order_index));
                self.renderer.render(Tasks(tasks))
            }
            TaskCommands::Add(args) => {
                let task = self
                    .client
                    .create_task(&args.into())
                    .await
                    .context("Failed to create task")?;
                self.renderer.render(CreateResult::new(task))
            }
            TaskCommands::Update(args) => {
                let id = args.id;
                let (patch, changes) = args.into_patch();
                if patch.is_empty() {
                    bail!("No changes given for task {id}; pass at least one field to update");
                }
                debug!("update_task {id}: {patch:?}");
                let task = self
                    .client
                    .update_task(id, &patch)
                    .await
                    .with_context(|| format!("Failed to update task {id}"))?;
                self.renderer.render(UpdateResult::with_changes(task, changes))
            }
            TaskCommands::Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Task deletion requires explicit confirmation. \
                         Re-run with --confirm to delete task {}.",
                        args.id
                    );
                }
                let ack = self
                    .client
                    .delete_task(args.id)
                    .await
                    .with_context(|| format!("Failed to delete task {}", args.id))?;
                self.renderer.render(DeleteResult::task(args.id, ack))
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => {
                let input = PlanGenerateInput::from(args.input);
                let plan = match args.project {
                    Some(id) => self.client.generate_plan(id, &input).await,
                    None => self.client.generate_draft_plan(&input).await,
                }
                .context("Failed to generate plan")?;
                self.show_plan(&plan, args.json)
            }
            PlanCommands::Revise(args) => {
                let current_plan = read_plan(&args.plan_file)?;
                let input = RevisePlanInput {
                    input: args.input.into(),
                    current_plan,
                    adjustment: args.adjustment,
                };
                let plan = match args.project {
                    Some(id) => self.client.revise_plan(id, &input).await,
                    None => self.client.revise_draft_plan(&input).await,
                }
                .context("Failed to revise plan")?;
                self.show_plan(&plan, args.json)
            }
            PlanCommands::Apply(args) => {
                let plan = read_plan(&args.plan_file)?;
                let changes = vec![
                    format!("Added {} milestones", plan.milestones.len()),
                    format!("Added {} tasks", plan.tasks.len()),
                ];
                let detail = self
                    .client
                    .apply_plan(args.project, &PlanApplyInput::from(plan))
                    .await
                    .with_context(|| format!("Failed to apply plan to project {}", args.project))?;
                self.renderer.render(UpdateResult::with_changes(detail, changes))
            }
        }
    }

    pub async fn health(&self) -> Result<()> {
        let health = self
            .client
            .health()
            .await
            .context("Failed to reach backend")?;
        let base_url = self.client.base_url();
        if health.is_ok() {
            self.renderer.render(OperationStatus::success(format!(
                "Backend at {base_url} is healthy"
            )))
        } else {
            self.renderer.render(OperationStatus::failure(format!(
                "Backend at {base_url} reported '{}'",
                health.status
            )))?;
            Err(anyhow!("Health check failed"))
        }
    }

    fn show_plan(&self, plan: &Plan, json: bool) -> Result<()> {
        if json {
            let text = serde_json::to_string_pretty(plan).context("Failed to encode plan")?;
            println!("{text}");
            Ok(())
        } else {
            self.renderer.render(plan)
        }
    }
}
