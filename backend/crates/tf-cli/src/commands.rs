use crate::{
    CliClientResult, Client, column_commands::ColumnCommands, project_commands::ProjectCommands,
    task_commands::TaskCommands,
};

use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand)]
pub enum Commands {
    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Board column operations
    Column {
        #[command(subcommand)]
        action: ColumnCommands,
    },
}

impl Commands {
    /// Issue the request this command describes.
    pub async fn execute(self, client: &Client) -> CliClientResult<Value> {
        match self {
            Commands::Project { action } => match action {
                ProjectCommands::List => client.list_projects().await,
                ProjectCommands::Get { id } => client.get_project(&id).await,
                ProjectCommands::Board { id } => client.get_board(&id).await,
                ProjectCommands::Create {
                    name,
                    description,
                    status,
                } => {
                    client
                        .create_project(&name, description.as_deref(), status.as_deref())
                        .await
                }
                ProjectCommands::Delete { id } => client.delete_project(&id).await,
                ProjectCommands::AddMember { id, user_id } => {
                    client.add_member(&id, &user_id).await
                }
            },

            Commands::Task { action } => match action {
                TaskCommands::List => client.list_tasks().await,
                TaskCommands::Get { id } => client.get_task(&id).await,
                TaskCommands::Create {
                    project_id,
                    column_id,
                    title,
                    description,
                    priority,
                } => {
                    client
                        .create_task(
                            &project_id,
                            &column_id,
                            &title,
                            description.as_deref(),
                            priority.as_deref(),
                        )
                        .await
                }
                TaskCommands::Update {
                    id,
                    title,
                    description,
                    priority,
                    assignee_id,
                } => {
                    client
                        .update_task(
                            &id,
                            title.as_deref(),
                            description.as_deref(),
                            priority.as_deref(),
                            assignee_id.as_deref(),
                        )
                        .await
                }
                TaskCommands::Status { id, status } => client.set_task_status(&id, &status).await,
                TaskCommands::Delete { id } => client.delete_task(&id).await,
            },

            Commands::Column { action } => match action {
                ColumnCommands::MoveTask {
                    task_id,
                    from,
                    to,
                    index,
                } => client.move_task(&task_id, &from, &to, index).await,
            },
        }
    }
}
