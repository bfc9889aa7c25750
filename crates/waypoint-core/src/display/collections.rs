//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::fmt;

use crate::models::{Project, Task};

/// Newtype wrapper for displaying a list of projects.
///
/// Each project is shown in a compact form suited to lists; use the
/// [`Project`] Display implementation for the standalone form.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{display::Projects, models::Project};
///
/// let project = Project {
///     id: 1,
///     title: "My Project".to_string(),
///     goal_text: "Learn the violin".to_string(),
///     deadline: None,
///     hours_per_week: Some(3),
/// };
///
/// let output = format!("{}", Projects(vec![project]));
/// assert!(output.contains("## My Project (ID: 1)"));
/// ```
pub struct Projects(pub Vec<Project>);

impl fmt::Display for Projects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No projects found.");
        }
        for project in &self.0 {
            writeln!(f, "## {} (ID: {})", project.title, project.id)?;
            writeln!(f)?;
            writeln!(f, "- Goal: {}", project.goal_text)?;
            project.fmt_metadata(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying collections of tasks.
pub struct Tasks(pub Vec<Task>);

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            write!(f, "{task}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
