//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it richly or print it as
//! plain text.

use std::fmt;

use crate::models::{
    Plan, PlanQuestion, Project, ProjectDetail, ProposedPlan, ProposedTask, Task, TaskSize,
    TaskStatus,
};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Project {
    /// Metadata bullets shared by the standalone and list formats.
    pub(crate) fn fmt_metadata(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(deadline) = &self.deadline {
            writeln!(f, "- Deadline: {deadline}")?;
        }
        if let Some(hours) = self.hours_per_week {
            writeln!(f, "- Hours per week: {hours}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        self.fmt_metadata(f)?;
        writeln!(f)?;
        writeln!(f, "{}", self.goal_text)
    }
}

impl Task {
    /// One-line form used inside milestone listings.
    fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}. {} ({})", self.id, self.title, self.status.with_icon())?;
        if let Some(estimate) = self.estimate {
            write!(f, " [{estimate}]")?;
        }
        if let Some(due) = &self.due_date {
            write!(f, " due {due}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if let Some(estimate) = self.estimate {
            writeln!(f, "- Estimate: {estimate}")?;
        }
        if let Some(due) = &self.due_date {
            writeln!(f, "- Due: {due}")?;
        }
        if let Some(milestone) = self.milestone_id {
            writeln!(f, "- Milestone: {milestone}")?;
        }
        writeln!(f, "- Position: {}", self.order_index)
    }
}

impl fmt::Display for ProjectDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.project)?;

        if self.milestones.is_empty() && self.tasks.is_empty() {
            return writeln!(f, "\nNo milestones or tasks in this project.");
        }

        let mut milestones: Vec<_> = self.milestones.iter().collect();
        milestones.sort_by_key(|m| m.order_index);

        if !milestones.is_empty() {
            writeln!(f, "\n## Milestones")?;
        }
        for milestone in milestones {
            writeln!(f)?;
            writeln!(f, "### {}. {}", milestone.id, milestone.title)?;
            writeln!(f)?;
            if let Some(desc) = &milestone.description {
                writeln!(f, "{desc}")?;
                writeln!(f)?;
            }
            let tasks = self.tasks_for_milestone(milestone.id);
            if tasks.is_empty() {
                writeln!(f, "No tasks.")?;
            }
            for task in tasks {
                task.fmt_line(f)?;
            }
        }

        let unassigned = self.unassigned_tasks();
        if !unassigned.is_empty() {
            writeln!(f, "\n## Unassigned Tasks")?;
            writeln!(f)?;
            for task in unassigned {
                task.fmt_line(f)?;
            }
        }

        Ok(())
    }
}

fn fmt_proposed_task(task: &ProposedTask, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "- {} ({})", task.title, task.status.with_icon())?;
    if let Some(estimate) = task.estimate {
        write!(f, " [{estimate}]")?;
    }
    if let Some(due) = &task.due_date {
        write!(f, " due {due}")?;
    }
    writeln!(f)
}

impl fmt::Display for ProposedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Proposed Plan")?;

        if self.milestones.is_empty() && self.tasks.is_empty() {
            return writeln!(f, "\nThe proposal is empty.");
        }

        for (index, milestone) in self.milestones.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "## {}. {}", index + 1, milestone.title)?;
            writeln!(f)?;
            if let Some(desc) = &milestone.description {
                writeln!(f, "{desc}")?;
                writeln!(f)?;
            }
            for task in self.tasks_for_milestone(index) {
                fmt_proposed_task(task, f)?;
            }
        }

        let unassigned = self.unassigned_tasks();
        if !unassigned.is_empty() {
            writeln!(f, "\n## Other Tasks")?;
            writeln!(f)?;
            for task in unassigned {
                fmt_proposed_task(task, f)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (`{}`)", self.question, self.field)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Proposal(plan) => write!(f, "{plan}"),
            Plan::Questions { questions } => {
                writeln!(f, "# More Information Needed")?;
                writeln!(f)?;
                for (index, question) in questions.iter().enumerate() {
                    writeln!(f, "{}. {question}", index + 1)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Milestone, ProposedMilestone};

    fn task(id: u64, milestone_id: Option<u64>, order_index: u32) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            description: None,
            status: TaskStatus::Todo,
            due_date: None,
            estimate: Some(TaskSize::M),
            order_index,
            milestone_id,
        }
    }

    fn detail() -> ProjectDetail {
        ProjectDetail {
            project: Project {
                id: 1,
                title: "Learn Rust".to_string(),
                goal_text: "Write a CLI".to_string(),
                deadline: Some("2026-12-01".to_string()),
                hours_per_week: Some(5),
            },
            milestones: vec![
                Milestone {
                    id: 20,
                    title: "Ship it".to_string(),
                    description: None,
                    order_index: 4,
                },
                Milestone {
                    id: 10,
                    title: "Basics".to_string(),
                    description: Some("Ownership and borrowing".to_string()),
                    order_index: 0,
                },
            ],
            tasks: vec![task(3, Some(10), 1), task(2, Some(10), 0), task(4, None, 0)],
        }
    }

    #[test]
    fn test_project_detail_groups_tasks() {
        let output = detail().to_string();

        assert!(output.starts_with("# 1. Learn Rust\n"));
        assert!(output.contains("- Deadline: 2026-12-01"));
        assert!(output.contains("- Hours per week: 5"));

        let basics = output.find("### 10. Basics").unwrap();
        let ship = output.find("### 20. Ship it").unwrap();
        assert!(basics < ship, "milestones follow order_index");

        let t2 = output.find("- 2. Task 2").unwrap();
        let t3 = output.find("- 3. Task 3").unwrap();
        assert!(t2 < t3, "tasks follow order_index");
        assert!(output.contains("## Unassigned Tasks"));
        assert!(output.contains("- 4. Task 4 (○ Todo) [M]"));
    }

    #[test]
    fn test_empty_project_detail() {
        let mut detail = detail();
        detail.milestones.clear();
        detail.tasks.clear();
        assert!(detail
            .to_string()
            .contains("No milestones or tasks in this project."));
    }

    #[test]
    fn test_task_display() {
        let mut task = task(7, Some(10), 2);
        task.status = TaskStatus::InProgress;
        task.due_date = Some("2026-11-01".to_string());
        let output = task.to_string();
        assert!(output.contains("### 7. Task 7 (➤ In Progress)"));
        assert!(output.contains("- Estimate: M"));
        assert!(output.contains("- Due: 2026-11-01"));
        assert!(output.contains("- Milestone: 10"));
    }

    #[test]
    fn test_plan_display_variants() {
        let questions = Plan::Questions {
            questions: vec![PlanQuestion {
                id: "q1".to_string(),
                field: "deadline".to_string(),
                question: "What is your target deadline?".to_string(),
            }],
        };
        let output = questions.to_string();
        assert!(output.contains("# More Information Needed"));
        assert!(output.contains("1. What is your target deadline? (`deadline`)"));

        let proposal = Plan::Proposal(ProposedPlan {
            milestones: vec![ProposedMilestone {
                title: "Define success".to_string(),
                description: None,
                order_index: 0,
            }],
            tasks: vec![ProposedTask {
                title: "Write a definition of success".to_string(),
                description: None,
                milestone_index: Some(0),
                status: TaskStatus::Todo,
                due_date: None,
                estimate: Some(TaskSize::S),
                order_index: 0,
            }],
        });
        let output = proposal.to_string();
        assert!(output.contains("## 1. Define success"));
        assert!(output.contains("- Write a definition of success (○ Todo) [S]"));
        assert!(!output.contains("Other Tasks"));
    }
}
