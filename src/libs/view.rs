use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

/// Shown in place of fields that are not set.
pub const NULL_MARKER: &str = "_";

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        Self::tasks_table(tasks).printstd();

        Ok(())
    }

    /// Prints one task as a field/value table.
    pub fn task(task: &Task) -> Result<()> {
        Self::task_table(task).printstd();

        Ok(())
    }

    /// Prints tasks as a JSON array. Unset fields are `null`.
    pub fn tasks_json(tasks: &[Task]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(tasks)?);

        Ok(())
    }

    fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CATEGORY", "START", "DUE", "COMPLETED", "STATUS", "PRIORITY", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.name,
                cell(&task.category),
                cell(&task.start_date),
                cell(&task.due_date),
                cell(&task.completion_date),
                cell(&task.status),
                cell(&task.priority),
                cell(&task.description)
            ]);
        }

        table
    }

    fn task_table(task: &Task) -> Table {
        let mut table = Table::new();

        table.add_row(row!["Id", task.id]);
        table.add_row(row!["Name", task.name]);
        table.add_row(row!["Category", cell(&task.category)]);
        table.add_row(row!["StartDate", cell(&task.start_date)]);
        table.add_row(row!["DueDate", cell(&task.due_date)]);
        table.add_row(row!["CompletionDate", cell(&task.completion_date)]);
        table.add_row(row!["Status", cell(&task.status)]);
        table.add_row(row!["Priority", cell(&task.priority)]);
        table.add_row(row!["Description", cell(&task.description)]);

        table
    }
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NULL_MARKER)
}
